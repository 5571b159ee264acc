//! Page entry: logging setup, route listeners, and the DOM-backed [`PanelHost`].
//!
//! SYSTEM CONTEXT
//! ==============
//! `boot` runs once per page. It installs the hashchange listener and syncs
//! the route as soon as the document is parsed. The lifecycle and its
//! listeners live in thread-local slots for the life of the page.

use std::cell::RefCell;
use std::rc::Rc;

use crate::browser::dom::{document, remove_by_id, window};
use crate::browser::drag_host;
use crate::browser::listener::Listener;
use crate::browser::notify::DomNotifier;
use crate::browser::panel::{self, RefreshContext, RefreshStatus};
use crate::browser::resources::ensure_icon_font;
use crate::browser::storage::LocalStorageStore;
use crate::browser::styles;
use crate::config::WidgetConfig;
use crate::consts::PANEL_ID;
use crate::error::WidgetError;
use crate::lifecycle::{Lifecycle, PanelHost, SyncOutcome};
use crate::notice::{NoticeKind, Notifier};
use crate::session::PanelSession;

thread_local! {
    static LIFECYCLE: RefCell<Option<Lifecycle<DomHost>>> = const { RefCell::new(None) };
    static ROUTE_LISTENERS: RefCell<Vec<Listener>> = const { RefCell::new(Vec::new()) };
}

/// A mounted panel and the listeners keeping it interactive.
struct MountedPanel {
    ctx: RefreshContext,
    _listeners: Vec<Listener>,
}

pub struct DomHost {
    config: Rc<WidgetConfig>,
    notifier: DomNotifier,
    store: Rc<LocalStorageStore>,
    panel: Option<MountedPanel>,
}

impl DomHost {
    #[must_use]
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            notifier: DomNotifier::new(config.notice_visible_ms, config.notice_fade_ms),
            store: Rc::new(LocalStorageStore::new(config.storage_key.clone())),
            config: Rc::new(config.clone()),
            panel: None,
        }
    }
}

impl PanelHost for DomHost {
    fn panel_exists(&self) -> bool {
        document().is_ok_and(|doc| doc.get_element_by_id(PANEL_ID).is_some())
    }

    fn mount(&mut self) -> Result<(), WidgetError> {
        let doc = document()?;
        styles::inject(&doc)?;

        let parts = Rc::new(panel::build(&doc, self.store.as_ref())?);
        let ctx = RefreshContext {
            config: Rc::clone(&self.config),
            parts: Rc::clone(&parts),
            session: Rc::new(RefCell::new(PanelSession::new(self.config.snap_inset_px))),
            notifier: self.notifier,
        };

        let mut listeners = panel::wire_buttons(&ctx)?;
        listeners.extend(drag_host::attach(
            &parts.root,
            &doc,
            Rc::clone(&ctx.session),
            self.store.clone(),
        )?);
        self.panel = Some(MountedPanel { ctx, _listeners: listeners });

        let config = Rc::clone(&self.config);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = ensure_icon_font(&config).await {
                log::warn!("{e}; buttons fall back to plain glyphs");
            }
        });
        Ok(())
    }

    fn start_initial_refresh(&mut self) {
        let Some(mounted) = &self.panel else {
            return;
        };
        let ctx = mounted.ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match panel::refresh_panel(&ctx).await {
                Ok(RefreshStatus::Applied) => settle_initial_refresh(Ok(())),
                Ok(RefreshStatus::Superseded) => log::debug!("initial refresh superseded"),
                Err(e) => settle_initial_refresh(Err(e)),
            }
        });
    }

    fn unmount(&mut self) {
        if let Some(mounted) = self.panel.take() {
            mounted.ctx.session.borrow_mut().close();
        }
        match document() {
            Ok(doc) => remove_by_id(&doc, PANEL_ID),
            Err(e) => log::warn!("removing panel failed: {e}"),
        }
    }

    fn dismiss_notice(&mut self) {
        DomNotifier::dismiss();
    }

    fn notify(&mut self, text: &str, kind: NoticeKind) {
        self.notifier.notify(text, kind);
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("logger already installed");
    }
}

fn current_hash() -> Result<String, WidgetError> {
    Ok(window()?.location().hash()?)
}

/// Reconcile the panel with `location.hash`.
fn sync_current_route() {
    let hash = match current_hash() {
        Ok(hash) => hash,
        Err(e) => {
            log::error!("reading location hash failed: {e}");
            return;
        }
    };
    LIFECYCLE.with_borrow_mut(|slot| {
        let Some(lifecycle) = slot.as_mut() else {
            return;
        };
        if let SyncOutcome::Failed(e) = lifecycle.sync(&hash) {
            log::debug!("route sync left no panel: {e}");
        }
    });
}

/// Hand the first refresh's result back to the lifecycle.
fn settle_initial_refresh(outcome: Result<(), WidgetError>) {
    LIFECYCLE.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => {
            if let Some(lifecycle) = slot.as_mut() {
                lifecycle.finish_initial_refresh(outcome);
            }
        }
        Err(e) => log::error!("lifecycle busy; dropping initial refresh result: {e}"),
    });
}

fn install_route_listeners() -> Result<(), WidgetError> {
    let win = window()?;
    let doc = document()?;
    let mut listeners = vec![Listener::new(win.as_ref(), "hashchange", |_| sync_current_route())?];

    if doc.ready_state() == "loading" {
        listeners.push(Listener::new(doc.as_ref(), "DOMContentLoaded", |_| sync_current_route())?);
    } else {
        sync_current_route();
    }

    ROUTE_LISTENERS.with_borrow_mut(|slot| slot.extend(listeners));
    Ok(())
}

/// Start the widget. Calling it again on the same page is a no-op.
pub fn boot(config: WidgetConfig) {
    init_logging();

    let already = LIFECYCLE.with_borrow(Option::is_some);
    if already {
        log::warn!("qr widget already started");
        return;
    }

    let host = DomHost::new(&config);
    LIFECYCLE.with_borrow_mut(|slot| *slot = Some(Lifecycle::new(config, host)));

    if let Err(e) = install_route_listeners() {
        log::error!("qr widget failed to start: {e}");
    }
}
