//! Per-panel session state.
//!
//! DESIGN
//! ======
//! Everything that used to be a page-global flag (minimized, dragging, the
//! latest refresh) lives here. A session is created with the panel and
//! dropped with it, so nothing leaks from one panel instance to the next.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::drag::DragController;

/// Icon class and tooltip for a header button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonFace {
    pub icon: &'static str,
    pub title: &'static str,
}

pub const REFRESH_FACE: ButtonFace = ButtonFace { icon: "fa fa-refresh", title: "刷新二维码" };
pub const REFRESH_BUSY_FACE: ButtonFace = ButtonFace { icon: "fa fa-circle-o-notch fa-spin", title: "刷新二维码" };
pub const MINIMIZE_FACE: ButtonFace = ButtonFace { icon: "fa fa-compress", title: "最小化" };
pub const RESTORE_FACE: ButtonFace = ButtonFace { icon: "fa fa-expand", title: "恢复" };

/// Visual flags of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    pub minimized: bool,
    pub dragging: bool,
}

/// Ticket identifying one refresh attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshToken(u64);

/// Monotonic refresh tickets; only the newest one may write to the panel.
#[derive(Debug, Clone, Default)]
pub struct RefreshTokens {
    latest: u64,
}

impl RefreshTokens {
    /// Issue a ticket that supersedes every earlier one.
    pub fn begin(&mut self) -> RefreshToken {
        self.latest += 1;
        RefreshToken(self.latest)
    }

    #[must_use]
    pub fn is_current(&self, token: RefreshToken) -> bool {
        token.0 == self.latest
    }
}

/// State owned by one live panel.
#[derive(Debug, Clone)]
pub struct PanelSession {
    pub drag: DragController,
    minimized: bool,
    refreshes: RefreshTokens,
    closed: bool,
}

impl PanelSession {
    #[must_use]
    pub fn new(snap_inset: f64) -> Self {
        Self { drag: DragController::new(snap_inset), minimized: false, refreshes: RefreshTokens::default(), closed: false }
    }

    #[must_use]
    pub fn state(&self) -> PanelState {
        PanelState { minimized: self.minimized, dragging: self.drag.is_dragging() }
    }

    /// Flip minimized and return the face the minimize button should show.
    pub fn toggle_minimized(&mut self) -> ButtonFace {
        self.minimized = !self.minimized;
        minimize_face(self.minimized)
    }

    pub fn begin_refresh(&mut self) -> RefreshToken {
        self.refreshes.begin()
    }

    /// Whether `token` may still write to the panel.
    #[must_use]
    pub fn is_current(&self, token: RefreshToken) -> bool {
        !self.closed && self.refreshes.is_current(token)
    }

    /// Mark the panel as removed. Outstanding refreshes become stale and any
    /// drag in progress ends.
    pub fn close(&mut self) {
        self.closed = true;
        self.drag.cancel();
    }
}

/// Face of the minimize button for the given minimized flag.
#[must_use]
pub fn minimize_face(minimized: bool) -> ButtonFace {
    if minimized { RESTORE_FACE } else { MINIMIZE_FACE }
}
