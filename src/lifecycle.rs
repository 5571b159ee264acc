//! Route gate: mounts the panel on the target fragment and removes it elsewhere.
//!
//! `Lifecycle` holds the decision logic; everything that touches the page is
//! behind [`PanelHost`] so the mount/unmount rules are testable without a
//! browser.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use crate::config::WidgetConfig;
use crate::error::{Resource, WidgetError};
use crate::notice::{NoticeKind, RefreshOrigin};

/// Page-side operations the lifecycle drives.
pub trait PanelHost {
    /// Whether the panel element is currently in the document.
    fn panel_exists(&self) -> bool;

    /// Build the panel and wire its listeners.
    ///
    /// # Errors
    ///
    /// Any failure while creating nodes or attaching listeners. The caller
    /// tears down whatever was created.
    fn mount(&mut self) -> Result<(), WidgetError>;

    /// Kick off the first QR render for a freshly mounted panel. The host
    /// hands the result back through [`Lifecycle::finish_initial_refresh`]
    /// unless the panel was removed in the meantime.
    fn start_initial_refresh(&mut self);

    /// Remove the panel (if any) and drop its session.
    fn unmount(&mut self);

    /// Remove the current notice, if any.
    fn dismiss_notice(&mut self);

    fn notify(&mut self, text: &str, kind: NoticeKind);
}

/// What a sync did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// A new panel was built.
    Mounted,
    /// The panel already existed; nothing changed.
    AlreadyMounted,
    /// Off-route: any panel and notice were removed.
    Unmounted,
    /// Building the panel failed and partial nodes were removed.
    Failed(WidgetError),
}

pub struct Lifecycle<H> {
    config: WidgetConfig,
    host: H,
}

impl<H: PanelHost> Lifecycle<H> {
    #[must_use]
    pub fn new(config: WidgetConfig, host: H) -> Self {
        Self { config, host }
    }

    /// Reconcile the page with the current location fragment.
    pub fn sync(&mut self, hash: &str) -> SyncOutcome {
        if !self.config.is_target_route(hash) {
            log::debug!("route {hash:?} is not the target; removing panel");
            self.host.unmount();
            self.host.dismiss_notice();
            return SyncOutcome::Unmounted;
        }

        if self.host.panel_exists() {
            return SyncOutcome::AlreadyMounted;
        }

        match self.host.mount() {
            Ok(()) => {
                log::info!("qr panel mounted");
                self.host.start_initial_refresh();
                SyncOutcome::Mounted
            }
            Err(e) => {
                log::error!("qr panel mount failed: {e}");
                self.host.unmount();
                self.host.notify(RefreshOrigin::Mount.failure_text(), NoticeKind::Error);
                SyncOutcome::Failed(e)
            }
        }
    }

    /// Settle the first refresh of a mounted panel with one notice.
    ///
    /// Without the encoder the panel can never show a code, so an encoder
    /// load failure removes it like a failed mount. Any other failure keeps
    /// the panel with its error indicator.
    pub fn finish_initial_refresh(&mut self, outcome: Result<(), WidgetError>) {
        match outcome {
            Ok(()) => {
                log::info!("qr generator started");
                self.host.notify(RefreshOrigin::Mount.success_text(), NoticeKind::Success);
            }
            Err(e) => {
                log::error!("initial qr refresh failed: {e}");
                if matches!(e, WidgetError::ResourceLoad { resource: Resource::QrEncoder, .. }) {
                    self.host.unmount();
                }
                self.host.notify(RefreshOrigin::Mount.failure_text(), NoticeKind::Error);
            }
        }
    }
}
