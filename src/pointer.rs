//! Pointer abstraction shared by the mouse and touch adapters.
//!
//! Both input families are reduced to a [`PointerSample`] before they reach
//! the drag state machine, so there is exactly one code path for pressing,
//! moving, and releasing the panel.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use crate::geometry::Point;

/// Which input family produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    /// Touch presses suppress the browser's default scroll/zoom handling.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Touch)
    }
}

/// A single pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub kind: PointerKind,
    pub client: Point,
    /// The event target lies inside one of the panel's action buttons.
    pub on_control: bool,
}

impl PointerSample {
    #[must_use]
    pub fn mouse(client: Point, on_control: bool) -> Self {
        Self { kind: PointerKind::Mouse, client, on_control }
    }

    /// Build a sample from a touch event carrying `touch_count` touches.
    ///
    /// Only single-finger gestures drag the panel; anything else yields `None`.
    #[must_use]
    pub fn touch(touch_count: u32, first: Option<Point>, on_control: bool) -> Option<Self> {
        if touch_count != 1 {
            return None;
        }
        first.map(|client| Self { kind: PointerKind::Touch, client, on_control })
    }
}
