//! Toast-style notice in the bottom-right corner.

use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlElement;

use crate::browser::dom::{body, create, document, remove_by_id, set_style};
use crate::consts::NOTICE_ID;
use crate::error::WidgetError;
use crate::notice::{NoticeKind, Notifier};

#[derive(Debug, Clone, Copy)]
pub struct DomNotifier {
    visible_ms: u32,
    fade_ms: u32,
}

impl DomNotifier {
    #[must_use]
    pub fn new(visible_ms: u32, fade_ms: u32) -> Self {
        Self { visible_ms, fade_ms }
    }

    /// Remove the current notice, if any.
    pub fn dismiss() {
        match document() {
            Ok(doc) => remove_by_id(&doc, NOTICE_ID),
            Err(e) => log::warn!("dismissing notice failed: {e}"),
        }
    }

    fn show(self, text: &str, kind: NoticeKind) -> Result<(), WidgetError> {
        let doc = document()?;
        remove_by_id(&doc, NOTICE_ID);

        let notice: HtmlElement = create(&doc, "div")?;
        notice.set_id(NOTICE_ID);
        notice.set_class_name(&format!("qrcode-notification {}", kind.css_class()));
        notice.set_text_content(Some(text));
        body(&doc)?.append_child(&notice)?;

        let (visible_ms, fade_ms) = (self.visible_ms, self.fade_ms);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(visible_ms).await;
            set_style(&notice, "opacity", "0");
            TimeoutFuture::new(fade_ms).await;
            // Already detached if a newer notice replaced it.
            notice.remove();
        });
        Ok(())
    }
}

impl Notifier for DomNotifier {
    fn notify(&self, text: &str, kind: NoticeKind) {
        if let Err(e) = self.show(text, kind) {
            log::error!("showing notice {text:?} failed: {e}");
        }
    }
}
