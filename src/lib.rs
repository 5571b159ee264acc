//! # labelqr
//!
//! Floating QR label widget for the warehouse allocation page.
//!
//! Compiled to WebAssembly and injected into the page. On the `#A3001`
//! route it reads four allocation form fields, renders them as a QR code in
//! a draggable panel, and remembers where the panel was left.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Runtime configuration with JSON overrides |
//! | [`consts`] | DOM ids, storage key, resource URLs, geometry constants |
//! | [`error`] | [`error::WidgetError`] taxonomy |
//! | [`page_info`] | Field placeholders and the encoded text template |
//! | [`svg`] | View box rewrite, output validation, parser fallback chain |
//! | [`qr`] | Encoder/surface traits and the render pipeline |
//! | [`geometry`] | Points, sizes, rects in CSS pixels |
//! | [`pointer`] | Mouse/touch samples fed to the drag machine |
//! | [`drag`] | Drag state machine, clamping, edge-snap |
//! | [`position`] | Persisted panel position |
//! | [`session`] | Per-panel state (minimized, drag, refresh tickets) |
//! | [`notice`] | Notice kinds and refresh reporting |
//! | [`lifecycle`] | Route gate that mounts and unmounts the panel |
//! | `browser` | DOM glue, only with the `hydrate` feature |

pub mod config;
pub mod consts;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod lifecycle;
pub mod notice;
pub mod page_info;
pub mod pointer;
pub mod position;
pub mod qr;
pub mod session;
pub mod svg;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Start the widget with the default configuration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn start() {
    browser::app::boot(config::WidgetConfig::default());
}

/// Start the widget with a partial JSON configuration override.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(config_json: &str) {
    browser::app::boot(config::WidgetConfig::from_json(config_json));
}
