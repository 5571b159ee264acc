//! Shared constants for the widget: DOM contract, storage, and geometry.

// ── Route / page contract ───────────────────────────────────────

/// URL fragment that activates the widget.
pub const TARGET_HASH: &str = "#A3001";

/// Id of the allocation header form the field values are read from.
pub const FORM_ID: &str = "A3001S05_ALLOCheaderMainForm";

/// Text used for every field when the form itself is missing.
pub const UNAVAILABLE_TEXT: &str = "暂无数据";

// ── Elements written by the widget ──────────────────────────────

pub const PANEL_ID: &str = "qrcode-floating-window";
pub const HEADER_ID: &str = "qrcode-header";
pub const QR_CONTAINER_ID: &str = "qrcode-container";
pub const INFO_ID: &str = "qrcode-info";
pub const NOTICE_ID: &str = "qrcode-notification";
pub const STYLE_ID: &str = "qrcode-styles";

/// Class shared by the header buttons; presses inside it never start a drag.
pub const BUTTON_CLASS: &str = "qrcode-btn";

/// Class toggled on the panel while minimized.
pub const MINIMIZED_CLASS: &str = "minimized";

/// Class of the static node shown when QR rendering fails.
pub const ERROR_NODE_CLASS: &str = "error-message";

/// Text of the static error node.
pub const ERROR_NODE_TEXT: &str = "二维码生成失败";

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the serialized panel position.
pub const POSITION_STORAGE_KEY: &str = "qrcodeWindowPosition";

// ── Remote resources ────────────────────────────────────────────

pub const ICON_FONT_URL: &str = "https://esm.sh/font-awesome@4.7.0/css/font-awesome.min.css";

/// Substring used to detect an icon stylesheet that is already linked.
pub const ICON_FONT_MARKER: &str = "font-awesome.min.css";

pub const QR_ENCODER_URL: &str = "https://esm.sh/jsr/@libs/qrcode";

/// Named export of the encoder module.
pub const QR_ENCODER_EXPORT: &str = "qrcode";

// ── Geometry ────────────────────────────────────────────────────

/// Inset from the viewport edge a released panel snaps to, in CSS pixels.
pub const SNAP_INSET_PX: f64 = 10.0;

/// Side of the fixed logical SVG coordinate space.
pub const VIEW_BOX_SIZE: u32 = 52;

/// Supplier names longer than this are truncated in the info area.
pub const SUPPLIER_DISPLAY_CHARS: usize = 20;

// ── Notices ─────────────────────────────────────────────────────

/// How long a notice stays fully visible.
pub const NOTICE_VISIBLE_MS: u32 = 3000;

/// Fade-out duration before the notice node is removed.
pub const NOTICE_FADE_MS: u32 = 300;
