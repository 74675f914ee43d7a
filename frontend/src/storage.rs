use common::session::SessionStore;
use log::warn;
use web_sys::Storage;

/// [`SessionStore`] backed by the browser's `localStorage`.
///
/// Every operation degrades to a no-op when storage is unavailable
/// (private browsing, disabled cookies).
#[derive(Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl SessionStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            if storage.set_item(key, value).is_err() {
                warn!("localStorage rejected key {key}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            storage.remove_item(key).ok();
        }
    }
}
