//! Floating panel construction, header buttons, and the async refresh flow.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Event, HtmlButtonElement, HtmlElement};

use crate::browser::dom::{body, create, remove_by_id, set_style};
use crate::browser::fields::read_page_info;
use crate::browser::listener::Listener;
use crate::browser::notify::DomNotifier;
use crate::browser::resources::ensure_qr_encoder;
use crate::browser::surface::DomSurface;
use crate::config::WidgetConfig;
use crate::consts::{BUTTON_CLASS, HEADER_ID, INFO_ID, MINIMIZED_CLASS, PANEL_ID, QR_CONTAINER_ID};
use crate::error::WidgetError;
use crate::notice::{RefreshOrigin, report};
use crate::position::PositionStore;
use crate::qr::{self, QrEncoder};
use crate::session::{ButtonFace, MINIMIZE_FACE, PanelSession, REFRESH_BUSY_FACE, REFRESH_FACE};

/// Elements making up one panel.
pub struct PanelParts {
    pub doc: Document,
    pub root: HtmlElement,
    pub refresh_button: HtmlButtonElement,
    pub minimize_button: HtmlButtonElement,
    pub qr: HtmlElement,
    pub info: HtmlElement,
}

/// Build the panel and append it to `<body>`, replacing any previous one.
///
/// # Errors
///
/// Any failed DOM call. Nodes are only attached to the page by the final
/// append, so a failure leaves nothing behind.
pub fn build(doc: &Document, store: &dyn PositionStore) -> Result<PanelParts, WidgetError> {
    remove_by_id(doc, PANEL_ID);

    let root: HtmlElement = create(doc, "div")?;
    root.set_id(PANEL_ID);
    if let Some(saved) = store.load() {
        set_style(&root, "left", &saved.left);
        set_style(&root, "top", &saved.top);
        set_style(&root, "transform", "none");
    }

    let header: HtmlElement = create(doc, "div")?;
    header.set_id(HEADER_ID);
    root.append_child(&header)?;

    let refresh_button = header_button(doc, REFRESH_FACE)?;
    header.append_child(&refresh_button)?;
    let minimize_button = header_button(doc, MINIMIZE_FACE)?;
    header.append_child(&minimize_button)?;

    let qr: HtmlElement = create(doc, "div")?;
    qr.set_id(QR_CONTAINER_ID);
    root.append_child(&qr)?;

    let info: HtmlElement = create(doc, "div")?;
    info.set_id(INFO_ID);
    root.append_child(&info)?;

    body(doc)?.append_child(&root)?;

    Ok(PanelParts { doc: doc.clone(), root, refresh_button, minimize_button, qr, info })
}

fn header_button(doc: &Document, face: ButtonFace) -> Result<HtmlButtonElement, WidgetError> {
    let button: HtmlButtonElement = create(doc, "button")?;
    button.set_class_name(BUTTON_CLASS);
    button.set_type("button");
    set_face(doc, &button, face)?;
    Ok(button)
}

fn set_face(doc: &Document, button: &HtmlButtonElement, face: ButtonFace) -> Result<(), WidgetError> {
    let icon: HtmlElement = create(doc, "i")?;
    icon.set_class_name(face.icon);
    button.set_inner_html("");
    button.append_child(&icon)?;
    button.set_title(face.title);
    Ok(())
}

fn apply_face(parts: &PanelParts, button: &HtmlButtonElement, face: ButtonFace) {
    if let Err(e) = set_face(&parts.doc, button, face) {
        log::warn!("updating button face failed: {e}");
    }
}

/// Everything a refresh needs, cheap to clone into event handlers.
#[derive(Clone)]
pub struct RefreshContext {
    pub config: Rc<WidgetConfig>,
    pub parts: Rc<PanelParts>,
    pub session: Rc<RefCell<PanelSession>>,
    pub notifier: DomNotifier,
}

/// Whether a refresh wrote to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStatus {
    Applied,
    /// A newer refresh started while this one awaited the encoder.
    Superseded,
}

/// Load the encoder, then read the page and render.
///
/// A refresh whose panel was closed or that a newer refresh overtook while
/// the encoder loaded writes nothing and reports `Superseded`.
///
/// # Errors
///
/// Encoder load or render failures; both leave the error indicator shown.
pub async fn refresh_panel(ctx: &RefreshContext) -> Result<RefreshStatus, WidgetError> {
    let token = ctx.session.borrow_mut().begin_refresh();
    let loaded = ensure_qr_encoder(&ctx.config).await;
    if !ctx.session.borrow().is_current(token) {
        log::debug!("discarding superseded qr refresh");
        return Ok(RefreshStatus::Superseded);
    }

    let encoder: Result<&dyn QrEncoder, WidgetError> = match &loaded {
        Ok(encoder) => Ok(encoder as &dyn QrEncoder),
        Err(e) => Err(e.clone()),
    };
    let surface = DomSurface::new(&ctx.parts.doc, &ctx.parts.qr, &ctx.parts.info);
    qr::refresh(
        read_page_info(&ctx.config),
        encoder,
        &surface,
        &ctx.notifier,
        ctx.config.view_box_size,
    )?;
    Ok(RefreshStatus::Applied)
}

fn report_outcome(origin: RefreshOrigin, outcome: Result<RefreshStatus, WidgetError>, notifier: DomNotifier) {
    match outcome {
        Ok(RefreshStatus::Applied) => report(origin, &Ok(()), &notifier),
        Ok(RefreshStatus::Superseded) => {}
        Err(e) => report(origin, &Err(e), &notifier),
    }
}

/// Wire the refresh and minimize buttons.
///
/// # Errors
///
/// Returns an error when a listener cannot be attached.
pub fn wire_buttons(ctx: &RefreshContext) -> Result<Vec<Listener>, WidgetError> {
    let refresh_ctx = ctx.clone();
    let refresh = Listener::new(ctx.parts.refresh_button.as_ref(), "click", move |ev: Event| {
        ev.stop_propagation();
        let ctx = refresh_ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let button = &ctx.parts.refresh_button;
            button.set_disabled(true);
            apply_face(&ctx.parts, button, REFRESH_BUSY_FACE);
            let outcome = refresh_panel(&ctx).await;
            button.set_disabled(false);
            apply_face(&ctx.parts, button, REFRESH_FACE);
            report_outcome(RefreshOrigin::Button, outcome, ctx.notifier);
        });
    })?;

    let minimize_ctx = ctx.clone();
    let minimize = Listener::new(ctx.parts.minimize_button.as_ref(), "click", move |ev: Event| {
        ev.stop_propagation();
        let face = minimize_ctx.session.borrow_mut().toggle_minimized();
        let minimized = minimize_ctx.session.borrow().state().minimized;
        let parts = &minimize_ctx.parts;
        if let Err(e) = parts.root.class_list().toggle_with_force(MINIMIZED_CLASS, minimized) {
            log::warn!("toggling minimized class failed: {e:?}");
        }
        apply_face(parts, &parts.minimize_button, face);
    })?;

    Ok(vec![refresh, minimize])
}
