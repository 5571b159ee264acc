//! QR rendering pipeline: encode, validate, rewrite, parse, sanitize, insert.
//!
//! ARCHITECTURE
//! ============
//! The encoder and the panel are reached through traits. In the browser the
//! encoder is the remote module loaded by `browser::resources` and the
//! surface is the panel's DOM; tests substitute in-memory fakes.

#[cfg(test)]
#[path = "qr_test.rs"]
mod qr_test;

use crate::error::WidgetError;
use crate::notice::{NoticeKind, Notifier};
use crate::page_info::{PageInfo, format_content};
use crate::svg::{rewrite_view_box, validate_svg_text};

/// Converts text into SVG markup.
pub trait QrEncoder {
    /// # Errors
    ///
    /// Returns [`WidgetError::Encode`] when the encoder throws or produces
    /// something other than a string.
    fn encode_svg(&self, text: &str) -> Result<String, WidgetError>;
}

/// The panel areas a refresh writes to.
pub trait PanelSurface {
    /// Parsed SVG root.
    type Node;

    /// Turn markup into a node whose root is `<svg>`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Parse`] when no strategy yields an SVG root.
    fn parse_svg(&self, markup: &str) -> Result<Self::Node, WidgetError>;

    /// Remove inline event-handler attributes from `node` and its descendants.
    fn strip_event_handlers(&self, node: &Self::Node);

    /// Replace the QR container's content with `node`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Browser`] when the insertion fails.
    fn replace_qr(&self, node: Self::Node) -> Result<(), WidgetError>;

    /// Clear the QR container and show the single static error indicator.
    fn show_qr_error(&self);

    /// Replace the info area's lines.
    fn show_info(&self, lines: &[String]);
}

/// Render `text` as a QR code into `surface`.
///
/// On failure the container holds only the error indicator and the error is
/// returned so the caller can report it.
///
/// # Errors
///
/// Any encode, parse, or insertion failure.
pub fn render_qr<S: PanelSurface + ?Sized>(
    encoder: &dyn QrEncoder,
    text: &str,
    surface: &S,
    view_box: u32,
) -> Result<(), WidgetError> {
    let result = encode_and_insert(encoder, text, surface, view_box);
    if let Err(e) = &result {
        log::error!("qr render failed: {e}");
        surface.show_qr_error();
    }
    result
}

fn encode_and_insert<S: PanelSurface + ?Sized>(
    encoder: &dyn QrEncoder,
    text: &str,
    surface: &S,
    view_box: u32,
) -> Result<(), WidgetError> {
    let raw = encoder.encode_svg(text)?;
    let svg = validate_svg_text(&raw)?;
    let svg = rewrite_view_box(svg, view_box);
    let node = surface.parse_svg(&svg)?;
    surface.strip_event_handlers(&node);
    surface.replace_qr(node)
}

/// One full refresh after the encoder has been awaited.
///
/// A missing form is reported and replaced by placeholder info. An encoder
/// load failure leaves the error indicator in place and is returned for the
/// caller to report.
///
/// # Errors
///
/// The encoder load failure, or any [`render_qr`] failure.
pub fn refresh<S: PanelSurface + ?Sized>(
    info: Result<PageInfo, WidgetError>,
    encoder: Result<&dyn QrEncoder, WidgetError>,
    surface: &S,
    notifier: &dyn Notifier,
    view_box: u32,
) -> Result<(), WidgetError> {
    let encoder = match encoder {
        Ok(encoder) => encoder,
        Err(e) => {
            log::error!("qr encoder unavailable: {e}");
            surface.show_qr_error();
            return Err(e);
        }
    };

    let info = info.unwrap_or_else(|e| {
        log::error!("reading page info failed: {e}");
        notifier.notify(&info_failure_text(&e), NoticeKind::Error);
        PageInfo::unavailable()
    });

    surface.show_info(&info.display_lines());
    render_qr(encoder, &format_content(&info), surface, view_box)
}

/// Notice text for a page that could not be read.
fn info_failure_text(e: &WidgetError) -> String {
    match e {
        WidgetError::MissingElement(what) => format!("获取信息失败: 未找到{what}"),
        other => format!("获取信息失败: {other}"),
    }
}
