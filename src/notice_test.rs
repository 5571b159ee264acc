use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct Recorder {
    shown: RefCell<Vec<(String, NoticeKind)>>,
}

impl Notifier for Recorder {
    fn notify(&self, text: &str, kind: NoticeKind) {
        self.shown.borrow_mut().push((text.to_owned(), kind));
    }
}

#[test]
fn css_classes() {
    assert_eq!(NoticeKind::Info.css_class(), "info");
    assert_eq!(NoticeKind::Success.css_class(), "success");
    assert_eq!(NoticeKind::Error.css_class(), "error");
}

#[test]
fn button_success_reports_updated() {
    let rec = Recorder::default();
    report(RefreshOrigin::Button, &Ok(()), &rec);
    assert_eq!(*rec.shown.borrow(), vec![("二维码已更新".to_owned(), NoticeKind::Success)]);
}

#[test]
fn button_failure_reports_single_error() {
    let rec = Recorder::default();
    report(RefreshOrigin::Button, &Err(WidgetError::Encode("boom".to_owned())), &rec);
    assert_eq!(*rec.shown.borrow(), vec![("更新失败".to_owned(), NoticeKind::Error)]);
}

#[test]
fn mount_texts_differ_from_button_texts() {
    assert_ne!(RefreshOrigin::Mount.success_text(), RefreshOrigin::Button.success_text());
    assert_ne!(RefreshOrigin::Mount.failure_text(), RefreshOrigin::Button.failure_text());
}
