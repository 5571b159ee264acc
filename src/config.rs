//! Runtime configuration for the widget.
//!
//! Every field defaults to the values in [`crate::consts`]; a host page may
//! override any subset by passing JSON to `start_with_config`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    FORM_ID, ICON_FONT_MARKER, ICON_FONT_URL, NOTICE_FADE_MS, NOTICE_VISIBLE_MS, POSITION_STORAGE_KEY,
    QR_ENCODER_EXPORT, QR_ENCODER_URL, SNAP_INSET_PX, TARGET_HASH, VIEW_BOX_SIZE,
};

/// Resolved widget configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Fragment (including `#`) the widget is active on.
    pub target_hash: String,
    /// Id of the form holding the field inputs.
    pub form_id: String,
    /// `localStorage` key for the panel position.
    pub storage_key: String,
    pub icon_font_url: String,
    pub icon_font_marker: String,
    pub qr_encoder_url: String,
    pub qr_encoder_export: String,
    pub snap_inset_px: f64,
    pub view_box_size: u32,
    pub notice_visible_ms: u32,
    pub notice_fade_ms: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            target_hash: TARGET_HASH.to_owned(),
            form_id: FORM_ID.to_owned(),
            storage_key: POSITION_STORAGE_KEY.to_owned(),
            icon_font_url: ICON_FONT_URL.to_owned(),
            icon_font_marker: ICON_FONT_MARKER.to_owned(),
            qr_encoder_url: QR_ENCODER_URL.to_owned(),
            qr_encoder_export: QR_ENCODER_EXPORT.to_owned(),
            snap_inset_px: SNAP_INSET_PX,
            view_box_size: VIEW_BOX_SIZE,
            notice_visible_ms: NOTICE_VISIBLE_MS,
            notice_fade_ms: NOTICE_FADE_MS,
        }
    }
}

impl WidgetConfig {
    /// Parse a partial JSON override. Invalid JSON falls back to defaults.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Self>(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring invalid widget config: {e}");
                Self::default()
            }
        }
    }

    /// Whether `hash` activates the widget (exact match).
    #[must_use]
    pub fn is_target_route(&self, hash: &str) -> bool {
        hash == self.target_hash
    }
}
