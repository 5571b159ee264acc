use std::cell::RefCell;

use super::*;
use crate::notice::NoticeKind;
use crate::svg::is_event_handler_attr;

// =============================================================
// Fakes
// =============================================================

/// Wraps the text in a minimal SVG so it can be read back out.
struct EchoEncoder;

impl QrEncoder for EchoEncoder {
    fn encode_svg(&self, text: &str) -> Result<String, WidgetError> {
        Ok(format!(r#"<svg viewBox="0 0 29 29" onload="steal()"><text>{text}</text></svg>"#))
    }
}

struct ThrowingEncoder;

impl QrEncoder for ThrowingEncoder {
    fn encode_svg(&self, _text: &str) -> Result<String, WidgetError> {
        Err(WidgetError::Encode("data too long".to_owned()))
    }
}

struct BlankEncoder;

impl QrEncoder for BlankEncoder {
    fn encode_svg(&self, _text: &str) -> Result<String, WidgetError> {
        Ok("   ".to_owned())
    }
}

struct HtmlEncoder;

impl QrEncoder for HtmlEncoder {
    fn encode_svg(&self, _text: &str) -> Result<String, WidgetError> {
        Ok("<div>not svg</div>".to_owned())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Child {
    Svg { markup: String, attrs: Vec<String> },
    Error,
}

struct FakeNode {
    markup: String,
    attrs: RefCell<Vec<String>>,
}

#[derive(Default)]
struct FakeSurface {
    children: RefCell<Vec<Child>>,
    info: RefCell<Vec<String>>,
}

impl FakeSurface {
    fn with_stale_content() -> Self {
        let surface = Self::default();
        surface.children.borrow_mut().push(Child::Svg { markup: "old".to_owned(), attrs: Vec::new() });
        surface
    }

    fn svg_count(&self) -> usize {
        self.children.borrow().iter().filter(|c| matches!(c, Child::Svg { .. })).count()
    }

    fn error_count(&self) -> usize {
        self.children.borrow().iter().filter(|c| matches!(c, Child::Error)).count()
    }

    fn only_svg(&self) -> (String, Vec<String>) {
        let children = self.children.borrow();
        assert_eq!(children.len(), 1);
        match &children[0] {
            Child::Svg { markup, attrs } => (markup.clone(), attrs.clone()),
            Child::Error => panic!("expected svg child"),
        }
    }
}

impl PanelSurface for FakeSurface {
    type Node = FakeNode;

    fn parse_svg(&self, markup: &str) -> Result<FakeNode, WidgetError> {
        if !markup.trim_start().starts_with("<svg") {
            return Err(WidgetError::Parse("root is not svg".to_owned()));
        }
        let attrs = if markup.contains("onload=") {
            vec!["viewBox".to_owned(), "onload".to_owned()]
        } else {
            vec!["viewBox".to_owned()]
        };
        Ok(FakeNode { markup: markup.to_owned(), attrs: RefCell::new(attrs) })
    }

    fn strip_event_handlers(&self, node: &FakeNode) {
        node.attrs.borrow_mut().retain(|a| !is_event_handler_attr(a));
    }

    fn replace_qr(&self, node: FakeNode) -> Result<(), WidgetError> {
        let attrs = node.attrs.into_inner();
        *self.children.borrow_mut() = vec![Child::Svg { markup: node.markup, attrs }];
        Ok(())
    }

    fn show_qr_error(&self) {
        *self.children.borrow_mut() = vec![Child::Error];
    }

    fn show_info(&self, lines: &[String]) {
        *self.info.borrow_mut() = lines.to_vec();
    }
}

#[derive(Default)]
struct Recorder {
    shown: RefCell<Vec<(String, NoticeKind)>>,
}

impl Notifier for Recorder {
    fn notify(&self, text: &str, kind: NoticeKind) {
        self.shown.borrow_mut().push((text.to_owned(), kind));
    }
}

fn sample_info() -> PageInfo {
    PageInfo {
        supplier_name: "Acme".to_owned(),
        sku: "S-1".to_owned(),
        production_date: "2024-01-02".to_owned(),
        batch: "7".to_owned(),
    }
}

fn decode_echo(markup: &str) -> Option<&str> {
    let start = markup.find("<text>")? + "<text>".len();
    let end = markup.find("</text>")?;
    markup.get(start..end)
}

// =============================================================
// render_qr
// =============================================================

#[test]
fn render_inserts_single_svg_with_fixed_view_box() {
    let surface = FakeSurface::with_stale_content();
    assert_eq!(render_qr(&EchoEncoder, "hello", &surface, 52), Ok(()));
    let (markup, _) = surface.only_svg();
    assert!(markup.contains(r#"viewBox="0 0 52 52""#));
}

#[test]
fn render_strips_event_handlers_before_insert() {
    let surface = FakeSurface::default();
    assert_eq!(render_qr(&EchoEncoder, "hello", &surface, 52), Ok(()));
    let (_, attrs) = surface.only_svg();
    assert_eq!(attrs, vec!["viewBox".to_owned()]);
}

#[test]
fn encoded_content_round_trips_through_echo_encoder() {
    let surface = FakeSurface::default();
    let text = format_content(&sample_info());
    assert_eq!(render_qr(&EchoEncoder, &text, &surface, 52), Ok(()));
    let (markup, _) = surface.only_svg();
    assert_eq!(decode_echo(&markup), Some(text.as_str()));
}

#[test]
fn encoder_throw_leaves_one_error_node_and_no_svg() {
    let surface = FakeSurface::with_stale_content();
    let result = render_qr(&ThrowingEncoder, "hello", &surface, 52);
    assert!(matches!(result, Err(WidgetError::Encode(_))));
    assert_eq!(surface.error_count(), 1);
    assert_eq!(surface.svg_count(), 0);
}

#[test]
fn blank_output_is_rejected() {
    let surface = FakeSurface::default();
    assert!(matches!(render_qr(&BlankEncoder, "x", &surface, 52), Err(WidgetError::Encode(_))));
    assert_eq!(surface.error_count(), 1);
}

#[test]
fn non_svg_output_is_a_parse_failure() {
    let surface = FakeSurface::default();
    assert!(matches!(render_qr(&HtmlEncoder, "x", &surface, 52), Err(WidgetError::Parse(_))));
    assert_eq!(surface.error_count(), 1);
    assert_eq!(surface.svg_count(), 0);
}

// =============================================================
// refresh
// =============================================================

#[test]
fn refresh_updates_info_and_qr() {
    let surface = FakeSurface::default();
    let rec = Recorder::default();
    let result = refresh(Ok(sample_info()), Ok(&EchoEncoder), &surface, &rec, 52);
    assert_eq!(result, Ok(()));
    assert_eq!(surface.info.borrow().len(), 4);
    assert_eq!(surface.svg_count(), 1);
    assert!(rec.shown.borrow().is_empty());
}

#[test]
fn missing_form_uses_placeholders_and_continues() {
    let surface = FakeSurface::default();
    let rec = Recorder::default();
    let info = Err(WidgetError::MissingElement("表单".to_owned()));
    assert_eq!(refresh(info, Ok(&EchoEncoder), &surface, &rec, 52), Ok(()));
    assert_eq!(surface.info.borrow()[0], "供应商名称: 暂无数据");
    let (markup, _) = surface.only_svg();
    assert_eq!(decode_echo(&markup), Some(format_content(&PageInfo::unavailable()).as_str()));
    assert_eq!(rec.shown.borrow().len(), 1);
    assert_eq!(rec.shown.borrow()[0].1, NoticeKind::Error);
}

#[test]
fn encoder_load_failure_shows_error_node_and_leaves_reporting_to_caller() {
    let surface = FakeSurface::with_stale_content();
    let rec = Recorder::default();
    let err = WidgetError::ResourceLoad { resource: crate::error::Resource::QrEncoder, reason: "offline".to_owned() };
    let result = refresh(Ok(sample_info()), Err(err.clone()), &surface, &rec, 52);
    assert_eq!(result, Err(err));
    assert_eq!(surface.error_count(), 1);
    assert_eq!(surface.svg_count(), 0);
    assert!(rec.shown.borrow().is_empty());
}

#[test]
fn encoder_throw_during_refresh_is_returned_for_reporting() {
    let surface = FakeSurface::default();
    let rec = Recorder::default();
    let result = refresh(Ok(sample_info()), Ok(&ThrowingEncoder), &surface, &rec, 52);
    assert!(result.is_err());
    crate::notice::report(crate::notice::RefreshOrigin::Button, &result, &rec);
    assert_eq!(surface.error_count(), 1);
    assert_eq!(surface.svg_count(), 0);
    assert_eq!(rec.shown.borrow().last().map(|(_, k)| *k), Some(NoticeKind::Error));
}

// =============================================================
// info_failure_text
// =============================================================

#[test]
fn missing_form_notice_names_the_element() {
    let text = info_failure_text(&WidgetError::MissingElement("表单元素A3001S05".to_owned()));
    assert_eq!(text, "获取信息失败: 未找到表单元素A3001S05");
}

#[test]
fn other_read_failures_carry_the_error() {
    let text = info_failure_text(&WidgetError::Browser("document gone".to_owned()));
    assert!(text.starts_with("获取信息失败: "));
    assert!(text.contains("document gone"));
}
