//! Panel and notice stylesheet, injected once per page.

use web_sys::{Document, HtmlStyleElement};

use crate::browser::dom::create;
use crate::consts::STYLE_ID;
use crate::error::WidgetError;

/// Default transition, restored after a drag.
pub const PANEL_TRANSITION: &str = "all 0.3s ease";

const STYLESHEET: &str = r"
#qrcode-floating-window {
    position: fixed;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    background: white;
    border: 2px solid #3498db;
    border-radius: 10px;
    padding: 15px;
    box-shadow: 0 5px 15px rgba(0, 0, 0, 0.3);
    z-index: 999999;
    cursor: move;
    transition: all 0.3s ease;
    min-width: 250px;
    display: flex;
    flex-direction: column;
    align-items: center;
}
#qrcode-floating-window:hover {
    box-shadow: 0 8px 25px rgba(0, 0, 0, 0.4);
    border-color: #2980b9;
}
#qrcode-header {
    width: 100%;
    display: flex;
    justify-content: flex-end;
    gap: 8px;
    margin-bottom: 10px;
}
.qrcode-btn {
    background: #f1f5f9;
    color: #3498db;
    border: none;
    border-radius: 5px;
    width: 30px;
    height: 30px;
    font-size: 14px;
    cursor: pointer;
    display: flex;
    align-items: center;
    justify-content: center;
    transition: all 0.2s;
}
.qrcode-btn:hover {
    background: #3498db;
    color: white;
}
#qrcode-container {
    display: flex;
    justify-content: center;
    margin-bottom: 15px;
    width: 200px;
    height: 200px;
}
#qrcode-info {
    font-size: 14px;
    color: #333;
    text-align: center;
    line-height: 1.6;
    max-height: 100px;
    overflow-y: auto;
    width: 100%;
}
.qrcode-notification {
    position: fixed;
    bottom: 20px;
    right: 20px;
    padding: 10px 15px;
    border-radius: 5px;
    color: white;
    z-index: 999999;
    transition: opacity 0.3s;
    box-shadow: 0 2px 10px rgba(0, 0, 0, 0.2);
}
.qrcode-notification.info { background: #3498db; }
.qrcode-notification.success { background: #2ecc71; }
.qrcode-notification.error { background: #e74c3c; }
#qrcode-floating-window.minimized {
    min-width: auto;
    padding: 8px;
}
#qrcode-floating-window.minimized #qrcode-container,
#qrcode-floating-window.minimized #qrcode-info {
    display: none;
}
.error-message {
    color: #e74c3c;
    text-align: center;
    padding: 20px;
    width: 100%;
    box-sizing: border-box;
}
";

/// Add the stylesheet to `<head>` unless it is already there.
///
/// # Errors
///
/// Returns an error when `<head>` is missing or the append fails.
pub fn inject(doc: &Document) -> Result<(), WidgetError> {
    if doc.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let head = doc
        .head()
        .ok_or_else(|| WidgetError::MissingElement("head".to_owned()))?;
    let style: HtmlStyleElement = create(doc, "style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style)?;
    Ok(())
}
