//! Error taxonomy for the widget.
//!
//! ERROR HANDLING
//! ==============
//! A missing individual field is not an error; it is substituted with a
//! placeholder where it is read. Every variant here is recoverable and is
//! caught at the nearest orchestration boundary (panel mount or refresh),
//! where it becomes a notice plus a console diagnostic.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Which remote resource failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// The icon stylesheet.
    IconFont,
    /// The QR encoder module.
    QrEncoder,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IconFont => f.write_str("icon font"),
            Self::QrEncoder => f.write_str("qr encoder"),
        }
    }
}

/// Recoverable failure raised anywhere in the widget.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// A required element (form, container, document) was not found.
    #[error("element not found: {0}")]
    MissingElement(String),
    /// A remote resource could not be fetched or evaluated.
    #[error("failed to load {resource}: {reason}")]
    ResourceLoad { resource: Resource, reason: String },
    /// The encoder threw or returned unusable output.
    #[error("qr encoding failed: {0}")]
    Encode(String),
    /// SVG text could not be turned into a usable node.
    #[error("svg parse failed: {0}")]
    Parse(String),
    /// A DOM call failed.
    #[error("browser call failed: {0}")]
    Browser(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for WidgetError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Browser(js_reason(&value))
    }
}

/// Best-effort readable text for a thrown JS value.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn js_reason(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
