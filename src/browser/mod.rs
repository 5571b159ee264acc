//! Browser glue: everything that touches `web_sys`.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules implement the traits from the core modules (`PanelHost`,
//! `PanelSurface`, `QrEncoder`, `PositionStore`, `Notifier`) against the
//! live DOM. Logic that can be expressed without a browser stays in the core
//! modules so it is covered by native tests.

pub mod app;
pub mod dom;
pub mod drag_host;
pub mod fields;
pub mod listener;
pub mod notify;
pub mod panel;
pub mod resources;
pub mod storage;
pub mod styles;
pub mod surface;
