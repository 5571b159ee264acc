//! Mouse and touch adapters feeding the panel's drag state machine.
//!
//! Press and selection listeners sit on the panel; move and release
//! listeners sit on the document so a fast pointer cannot escape the drag.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, MouseEvent, TouchEvent};

use crate::browser::dom::{bounding_rect, offset_size, set_style, target_within, viewport};
use crate::browser::listener::Listener;
use crate::browser::styles::PANEL_TRANSITION;
use crate::consts::BUTTON_CLASS;
use crate::error::WidgetError;
use crate::geometry::Point;
use crate::pointer::PointerSample;
use crate::position::{PanelPosition, PositionStore, px};
use crate::session::PanelSession;

/// Shared state captured by every drag listener.
#[derive(Clone)]
struct DragHost {
    panel: HtmlElement,
    session: Rc<RefCell<PanelSession>>,
    store: Rc<dyn PositionStore>,
}

impl DragHost {
    fn press(&self, sample: PointerSample) -> bool {
        let rect = bounding_rect(&self.panel);
        let started = self.session.borrow_mut().drag.press(sample, rect);
        if started {
            set_style(&self.panel, "cursor", "grabbing");
            set_style(&self.panel, "transition", "none");
        }
        started
    }

    fn motion(&self, sample: PointerSample) -> bool {
        let next = self
            .session
            .borrow()
            .drag
            .motion(sample, offset_size(&self.panel), viewport());
        let Some(top_left) = next else {
            return false;
        };
        self.place(top_left);
        true
    }

    fn release(&self) {
        let rect = bounding_rect(&self.panel);
        let Some(release) = self.session.borrow_mut().drag.release(rect, viewport()) else {
            return;
        };
        set_style(&self.panel, "cursor", "move");
        set_style(&self.panel, "transition", PANEL_TRANSITION);
        self.store.save(&PanelPosition::from_point(release.dragged));
        log::debug!("panel snapped to {:?} edge", release.edge);
        self.place(release.snapped);
    }

    fn place(&self, top_left: Point) {
        set_style(&self.panel, "left", &px(top_left.x));
        set_style(&self.panel, "top", &px(top_left.y));
        set_style(&self.panel, "transform", "none");
    }

    fn dragging(&self) -> bool {
        self.session.borrow().drag.is_dragging()
    }
}

fn client_point(x: i32, y: i32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

fn mouse_sample(ev: &Event) -> Option<PointerSample> {
    let mouse = ev.dyn_ref::<MouseEvent>()?;
    Some(PointerSample::mouse(
        client_point(mouse.client_x(), mouse.client_y()),
        target_within(ev, &format!(".{BUTTON_CLASS}")),
    ))
}

fn touch_sample(ev: &Event) -> Option<PointerSample> {
    let touch_event = ev.dyn_ref::<TouchEvent>()?;
    let touches = touch_event.touches();
    let first = touches.get(0).map(|t| client_point(t.client_x(), t.client_y()));
    PointerSample::touch(touches.length(), first, target_within(ev, &format!(".{BUTTON_CLASS}")))
}

/// Attach the drag listeners for `panel`.
///
/// # Errors
///
/// Returns an error when any listener cannot be attached; listeners already
/// attached are removed as the partial list is dropped.
pub fn attach(
    panel: &HtmlElement,
    doc: &Document,
    session: Rc<RefCell<PanelSession>>,
    store: Rc<dyn PositionStore>,
) -> Result<Vec<Listener>, WidgetError> {
    let host = DragHost { panel: panel.clone(), session, store };
    let panel_target: &EventTarget = panel.as_ref();
    let doc_target: &EventTarget = doc.as_ref();
    let mut listeners = Vec::with_capacity(7);

    let h = host.clone();
    listeners.push(Listener::new(panel_target, "mousedown", move |ev| {
        if let Some(sample) = mouse_sample(&ev) {
            h.press(sample);
        }
    })?);

    let h = host.clone();
    listeners.push(Listener::active(panel_target, "touchstart", move |ev| {
        let Some(sample) = touch_sample(&ev) else {
            return;
        };
        if h.press(sample) && sample.kind.prevents_default() {
            ev.prevent_default();
        }
    })?);

    let h = host.clone();
    listeners.push(Listener::new(doc_target, "mousemove", move |ev| {
        if let Some(sample) = mouse_sample(&ev) {
            h.motion(sample);
        }
    })?);

    let h = host.clone();
    listeners.push(Listener::active(doc_target, "touchmove", move |ev| {
        let Some(sample) = touch_sample(&ev) else {
            return;
        };
        if h.motion(sample) {
            ev.prevent_default();
        }
    })?);

    let h = host.clone();
    listeners.push(Listener::new(doc_target, "mouseup", move |_| h.release())?);

    let h = host.clone();
    listeners.push(Listener::new(doc_target, "touchend", move |_| h.release())?);

    listeners.push(Listener::new(panel_target, "selectstart", move |ev| {
        if host.dragging() {
            ev.prevent_default();
        }
    })?);

    Ok(listeners)
}
