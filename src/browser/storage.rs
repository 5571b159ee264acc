//! `localStorage`-backed [`PositionStore`].
//!
//! Persistence is best effort: a missing or throwing storage is logged and
//! treated as "nothing stored".

use web_sys::Storage;

use crate::position::{PanelPosition, PositionStore};

pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Option<Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("localStorage unavailable: {e:?}");
            None
        }
    }
}

impl PositionStore for LocalStorageStore {
    fn load(&self) -> Option<PanelPosition> {
        let storage = local_storage()?;
        match storage.get_item(&self.key) {
            Ok(Some(raw)) => PanelPosition::from_json(&raw),
            Ok(None) => None,
            Err(e) => {
                log::warn!("reading {} failed: {e:?}", self.key);
                None
            }
        }
    }

    fn save(&self, position: &PanelPosition) {
        let Some(storage) = local_storage() else {
            return;
        };
        let raw = match position.to_json() {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("encoding panel position failed: {e}");
                return;
            }
        };
        if let Err(e) = storage.set_item(&self.key, &raw) {
            log::warn!("writing {} failed: {e:?}", self.key);
        }
    }
}
