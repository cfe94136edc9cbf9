//! Key-value persistence for widget state.
//!
//! `BrowserStore` wraps `window.localStorage`; `MemoryStore` keeps entries in
//! memory and stands in when the browser refuses storage access.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::errors::LandingError;
use crate::util::{js_reason, window};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, LandingError>;
    fn set(&self, key: &str, value: &str) -> Result<(), LandingError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, LandingError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LandingError> {
        (**self).set(key, value)
    }
}

pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    pub fn open() -> Result<Self, LandingError> {
        let storage = window()?
            .local_storage()
            .map_err(|err| LandingError::StorageUnavailable(js_reason(&err)))?
            .ok_or_else(|| LandingError::StorageUnavailable("localStorage is disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, LandingError> {
        self.storage
            .get_item(key)
            .map_err(|err| LandingError::StorageRead {
                key: key.to_string(),
                reason: js_reason(&err),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LandingError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| LandingError::StorageWrite {
                key: key.to_string(),
                reason: js_reason(&err),
            })
    }
}

/// In-memory store; clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, LandingError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LandingError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// localStorage when the browser allows it, otherwise a session-only memory store.
pub fn browser_or_memory() -> Rc<dyn KeyValueStore> {
    match BrowserStore::open() {
        Ok(store) => Rc::new(store),
        Err(err) => {
            log::warn!("{err}; counter changes will not survive a reload");
            Rc::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_overwrites() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("num").unwrap(), None);
        store.set("num", "04").unwrap();
        store.set("num", "05").unwrap();
        assert_eq!(store.get("num").unwrap().as_deref(), Some("05"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        other.set("num", "12").unwrap();
        assert_eq!(store.get("num").unwrap().as_deref(), Some("12"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rc_dyn_store_forwards() {
        let inner = MemoryStore::new();
        let shared: Rc<dyn KeyValueStore> = Rc::new(inner.clone());
        shared.set("num", "07").unwrap();
        assert_eq!(inner.get("num").unwrap().as_deref(), Some("07"));
    }
}
