use client::{StorageError, storage::KeyValueStorage};
use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen::JsValue;

/// `window.localStorage`, the backend for the persisted session and the
/// auth token.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn unavailable(err: &JsValue) -> StorageError {
    StorageError::Unavailable(format!("localStorage: {err:?}"))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw().get_item(key).map_err(|err| unavailable(&err))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| unavailable(&err))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|err| unavailable(&err))
    }
}
