//! Lazy loading of the two remote soft dependencies: the icon stylesheet and
//! the QR encoder module.
//!
//! ERROR HANDLING
//! ==============
//! Both loaders return [`WidgetError::ResourceLoad`] instead of throwing.
//! Successful loads are cached per page, so repeated calls are free.

use std::cell::{Cell, RefCell};

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlLinkElement;

use crate::browser::dom::{create, document};
use crate::config::WidgetConfig;
use crate::error::{Resource, WidgetError, js_reason};
use crate::qr::QrEncoder;

#[wasm_bindgen(inline_js = "export function import_module(url) { return import(url); }")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn import_module(url: &str) -> Result<Promise, JsValue>;
}

thread_local! {
    static ICON_FONT_READY: Cell<bool> = const { Cell::new(false) };
    static QR_ENCODER: RefCell<Option<RemoteQrEncoder>> = const { RefCell::new(None) };
}

fn load_error(resource: Resource, reason: impl Into<String>) -> WidgetError {
    WidgetError::ResourceLoad { resource, reason: reason.into() }
}

/// Make sure the icon stylesheet is linked and loaded.
///
/// # Errors
///
/// Returns [`WidgetError::ResourceLoad`] when the stylesheet fails to load.
pub async fn ensure_icon_font(config: &WidgetConfig) -> Result<(), WidgetError> {
    if ICON_FONT_READY.get() {
        return Ok(());
    }

    let doc = document()?;
    let existing = format!("link[href*=\"{}\"]", config.icon_font_marker);
    if matches!(doc.query_selector(&existing), Ok(Some(_))) {
        ICON_FONT_READY.set(true);
        return Ok(());
    }

    let head = doc
        .head()
        .ok_or_else(|| WidgetError::MissingElement("head".to_owned()))?;
    let link: HtmlLinkElement = create(&doc, "link")?;
    link.set_rel("stylesheet");
    link.set_href(&config.icon_font_url);

    let loaded = Promise::new(&mut |resolve, reject| {
        let on_load = Closure::once_into_js(move || settle(&resolve, &JsValue::TRUE));
        let on_error = Closure::once_into_js(move || settle(&reject, &JsValue::from_str("stylesheet failed to load")));
        link.set_onload(Some(on_load.unchecked_ref()));
        link.set_onerror(Some(on_error.unchecked_ref()));
    });
    head.append_child(&link)?;

    match JsFuture::from(loaded).await {
        Ok(_) => {
            log::debug!("icon font loaded");
            ICON_FONT_READY.set(true);
            Ok(())
        }
        Err(e) => {
            link.remove();
            Err(load_error(Resource::IconFont, js_reason(&e)))
        }
    }
}

fn settle(callback: &Function, value: &JsValue) {
    if let Err(e) = callback.call1(&JsValue::NULL, value) {
        log::warn!("settling load promise failed: {e:?}");
    }
}

/// Load (once) and return the remote QR encoder.
///
/// # Errors
///
/// Returns [`WidgetError::ResourceLoad`] when the module cannot be imported
/// or does not export an encoder function.
pub async fn ensure_qr_encoder(config: &WidgetConfig) -> Result<RemoteQrEncoder, WidgetError> {
    if let Some(cached) = QR_ENCODER.with_borrow(Clone::clone) {
        return Ok(cached);
    }

    let promise = import_module(&config.qr_encoder_url)
        .map_err(|e| load_error(Resource::QrEncoder, js_reason(&e)))?;
    let module = JsFuture::from(promise).await.map_err(|e| {
        let err = load_error(Resource::QrEncoder, js_reason(&e));
        log::error!("{err}");
        err
    })?;

    let export = Reflect::get(&module, &JsValue::from_str(&config.qr_encoder_export))
        .map_err(|e| load_error(Resource::QrEncoder, js_reason(&e)))?;
    let function = export.dyn_into::<Function>().map_err(|_| {
        load_error(
            Resource::QrEncoder,
            format!("module has no `{}` function export", config.qr_encoder_export),
        )
    })?;

    let encoder = RemoteQrEncoder { function };
    QR_ENCODER.with_borrow_mut(|slot| *slot = Some(encoder.clone()));
    log::info!("qr encoder loaded from {}", config.qr_encoder_url);
    Ok(encoder)
}

/// Handle to the imported `qrcode(text, { output: "svg" })` function.
#[derive(Clone)]
pub struct RemoteQrEncoder {
    function: Function,
}

impl QrEncoder for RemoteQrEncoder {
    fn encode_svg(&self, text: &str) -> Result<String, WidgetError> {
        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("output"), &JsValue::from_str("svg"))
            .map_err(|e| WidgetError::Encode(js_reason(&e)))?;
        let output = self
            .function
            .call2(&JsValue::NULL, &JsValue::from_str(text), &options)
            .map_err(|e| WidgetError::Encode(js_reason(&e)))?;
        output
            .as_string()
            .ok_or_else(|| WidgetError::Encode("encoder returned a non-string value".to_owned()))
    }
}
