//! Small `web_sys` helpers shared by the browser modules.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::error::WidgetError;
use crate::geometry::{Rect, Size, Viewport};

/// # Errors
///
/// Returns [`WidgetError::MissingElement`] outside a browser window.
pub fn window() -> Result<Window, WidgetError> {
    web_sys::window().ok_or_else(|| WidgetError::MissingElement("window".to_owned()))
}

/// # Errors
///
/// Returns [`WidgetError::MissingElement`] when there is no window or document.
pub fn document() -> Result<Document, WidgetError> {
    window()?
        .document()
        .ok_or_else(|| WidgetError::MissingElement("document".to_owned()))
}

/// # Errors
///
/// Returns [`WidgetError::MissingElement`] before `<body>` is parsed.
pub fn body(doc: &Document) -> Result<HtmlElement, WidgetError> {
    doc.body().ok_or_else(|| WidgetError::MissingElement("body".to_owned()))
}

/// Create an element and cast it to its concrete type.
///
/// # Errors
///
/// Returns [`WidgetError::Browser`] when creation throws or the element is
/// not a `T`.
pub fn create<T: JsCast>(doc: &Document, tag: &str) -> Result<T, WidgetError> {
    doc.create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| WidgetError::Browser(format!("<{tag}> has an unexpected type")))
}

/// Set one inline style property, logging instead of failing.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("set style {property}={value} failed: {e:?}");
    }
}

pub fn remove_by_id(doc: &Document, id: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.remove();
    }
}

/// Whether the event target is inside an element matching `selector`.
#[must_use]
pub fn target_within(event: &Event, selector: &str) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    let Ok(element) = target.dyn_into::<Element>() else {
        return false;
    };
    matches!(element.closest(selector), Ok(Some(_)))
}

#[must_use]
pub fn bounding_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

#[must_use]
pub fn offset_size(el: &HtmlElement) -> Size {
    Size::new(f64::from(el.offset_width()), f64::from(el.offset_height()))
}

/// `innerWidth` × `innerHeight`, or zero when unavailable.
#[must_use]
pub fn viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Size::new(0.0, 0.0);
    };
    Size::new(js_dimension(window.inner_width()), js_dimension(window.inner_height()))
}

fn js_dimension(value: Result<JsValue, JsValue>) -> f64 {
    match value {
        Ok(v) => v.as_f64().unwrap_or(0.0),
        Err(e) => {
            log::warn!("viewport dimension unavailable: {e:?}");
            0.0
        }
    }
}
