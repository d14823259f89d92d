use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;
#[cfg(target_arch = "wasm32")]
use crate::error::SiteError;

/// String-keyed, string-valued persistence, shaped like the Web Storage API.
pub trait StateStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store. Used when local storage is unavailable, and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: RefCell::new(entries),
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl StateStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Origin-scoped `localStorage`, or an in-memory stand-in when the browser refuses it.
///
/// Values are stored as raw strings rather than JSON so the entries stay
/// readable by the site's plain-script pages.
#[cfg(target_arch = "wasm32")]
pub enum PageStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

#[cfg(target_arch = "wasm32")]
impl PageStore {
    pub fn open() -> Self {
        match Self::local_storage() {
            Ok(storage) => PageStore::Local(storage),
            Err(err) => {
                dioxus::logger::tracing::warn!("{err}; playback state will not survive this page");
                PageStore::Memory(MemoryStore::default())
            }
        }
    }

    fn local_storage() -> Result<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| SiteError::StorageUnavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(SiteError::storage)?
            .ok_or_else(|| SiteError::StorageUnavailable("localStorage is disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl StateStore for PageStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match self {
            PageStore::Local(storage) => storage.get_item(key).map_err(SiteError::storage),
            PageStore::Memory(memory) => memory.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        match self {
            PageStore::Local(storage) => storage.set_item(key, value).map_err(SiteError::storage),
            PageStore::Memory(memory) => memory.set_item(key, value),
        }
    }
}
