use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::Storage;

use crate::error::SetupError;

/// The single key-value scope the page persists its flags in.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`. Reads that fail are treated as absent keys and
/// writes that fail are logged, so a blocked storage never breaks the page.
#[derive(Clone)]
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, SetupError> {
        let window = crate::dom::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(LocalStore { storage }),
            _ => Err(SetupError::StorageUnavailable),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            log::warn!("Failed to persist {}: {:?}", key, e);
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

thread_local! {
    static SESSION_STORE: RefCell<Option<Rc<dyn KeyValueStore>>> = const { RefCell::new(None) };
}

/// Local storage when the browser grants it, otherwise a scratch store that
/// forgets everything on reload.
pub fn open_default() -> Rc<dyn KeyValueStore> {
    match LocalStore::open() {
        Ok(store) => Rc::new(store),
        Err(e) => {
            log::warn!("{}, falling back to in-memory storage", e);
            Rc::new(MemoryStore::new())
        }
    }
}

/// The one store every behaviour on the page shares. Opened on first use.
pub fn session_store() -> Rc<dyn KeyValueStore> {
    SESSION_STORE.with(|slot| {
        slot.borrow_mut().get_or_insert_with(open_default).clone()
    })
}

/// Replaces the shared store, e.g. to run the page against a scratch store.
pub fn set_session_store(store: Rc<dyn KeyValueStore>) {
    SESSION_STORE.with(|slot| {
        *slot.borrow_mut() = Some(store);
    });
}
