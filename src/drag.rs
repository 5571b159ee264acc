//! Drag state machine for the floating panel, including clamping and edge-snap.
//!
//! `DragController` never touches the DOM. The browser layer feeds it
//! [`PointerSample`]s plus the panel's current box and the viewport size,
//! and applies the positions it returns.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::geometry::{Point, Rect, Size, Viewport};
use crate::pointer::PointerSample;

/// Gesture state between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// The panel follows the pointer.
    Dragging {
        /// Pointer position relative to the panel's top-left at press time.
        offset: Point,
    },
}

/// Viewport edge a released panel snaps against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Evaluation order; on equal distances the earlier edge wins.
    pub const ORDER: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];
}

/// Result of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    /// Top-left where the pointer left the panel; this is what gets persisted.
    pub dragged: Point,
    /// Which edge won the snap.
    pub edge: Edge,
    /// Top-left after snapping one axis to the inset.
    pub snapped: Point,
}

/// Drives [`DragState`] from pointer samples.
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    inset: f64,
}

impl DragController {
    #[must_use]
    pub fn new(inset: f64) -> Self {
        Self { state: DragState::Idle, inset }
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// `Idle → Dragging` unless the press landed on an action button.
    ///
    /// Returns whether a drag started.
    pub fn press(&mut self, sample: PointerSample, panel: Rect) -> bool {
        if sample.on_control {
            return false;
        }
        self.state = DragState::Dragging { offset: sample.client.offset_from(panel.origin) };
        true
    }

    /// `Dragging → Dragging`: the clamped top-left for this pointer position.
    ///
    /// Returns `None` while idle.
    #[must_use]
    pub fn motion(&self, sample: PointerSample, panel: Size, viewport: Viewport) -> Option<Point> {
        let DragState::Dragging { offset } = self.state else {
            return None;
        };
        let desired = sample.client.offset_from(offset);
        Some(clamp_top_left(desired, panel, viewport))
    }

    /// `Dragging → Idle`: report the dragged position and the snapped one.
    ///
    /// Returns `None` when no drag was in progress.
    pub fn release(&mut self, panel: Rect, viewport: Viewport) -> Option<Release> {
        if !self.is_dragging() {
            return None;
        }
        self.state = DragState::Idle;
        let (edge, snapped) = snap(panel, viewport, self.inset);
        Some(Release { dragged: panel.origin, edge, snapped })
    }

    /// Drop any drag in progress without producing a release.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

/// Keep the panel fully inside the viewport.
///
/// A panel larger than the viewport is pinned to 0 on that axis.
#[must_use]
pub fn clamp_top_left(desired: Point, panel: Size, viewport: Viewport) -> Point {
    let max_x = (viewport.width - panel.width).max(0.0);
    let max_y = (viewport.height - panel.height).max(0.0);
    Point::new(desired.x.clamp(0.0, max_x), desired.y.clamp(0.0, max_y))
}

/// Edge closest to `center`, measured center-to-edge.
#[must_use]
pub fn nearest_edge(center: Point, viewport: Viewport) -> Edge {
    let distance = |edge: Edge| match edge {
        Edge::Left => center.x,
        Edge::Right => viewport.width - center.x,
        Edge::Top => center.y,
        Edge::Bottom => viewport.height - center.y,
    };
    let mut best = Edge::ORDER[0];
    for edge in &Edge::ORDER[1..] {
        if distance(*edge) < distance(best) {
            best = *edge;
        }
    }
    best
}

/// Snap one axis of `panel` to `inset` from its nearest edge.
#[must_use]
pub fn snap(panel: Rect, viewport: Viewport, inset: f64) -> (Edge, Point) {
    let edge = nearest_edge(panel.center(), viewport);
    let Point { x, y } = panel.origin;
    let snapped = match edge {
        Edge::Left => Point::new(inset, y),
        Edge::Right => Point::new(viewport.width - panel.size.width - inset, y),
        Edge::Top => Point::new(x, inset),
        Edge::Bottom => Point::new(x, viewport.height - panel.size.height - inset),
    };
    (edge, snapped)
}
