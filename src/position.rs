//! Persisted panel position.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only state that survives a reload is the panel's `{left, top}` pair.
//! It is stored as CSS length strings so it can be written straight back to
//! the element's inline style.

#[cfg(test)]
#[path = "position_test.rs"]
mod position_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Panel top-left as CSS lengths (`"123px"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelPosition {
    pub left: String,
    pub top: String,
}

impl PanelPosition {
    #[must_use]
    pub fn from_point(point: Point) -> Self {
        Self { left: px(point.x), top: px(point.y) }
    }

    /// Encode for storage.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a stored value; anything malformed counts as "no position".
    #[must_use]
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(raw) {
            Ok(pos) if !pos.left.is_empty() && !pos.top.is_empty() => Some(pos),
            Ok(_) => None,
            Err(e) => {
                log::warn!("discarding stored panel position: {e}");
                None
            }
        }
    }
}

/// Format a CSS pixel length the way the browser echoes it back.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Where the panel position is kept between page loads.
pub trait PositionStore {
    fn load(&self) -> Option<PanelPosition>;
    fn save(&self, position: &PanelPosition);
}
