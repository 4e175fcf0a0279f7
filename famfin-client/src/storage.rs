//! Durable key/value storage backing the session and the auth token.
//!
//! The browser build plugs `window.localStorage` in; native binaries use
//! [`FileStorage`]; tests use [`MemoryStorage`].

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex},
};

use crate::error::StorageError;

/// Key holding the bearer token cleared by the 401 interceptor.
pub const TOKEN_KEY: &str = "token";

/// String key/value storage with `localStorage` semantics.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    /// Returns an error when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error when the backend cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns an error when the backend cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage handle shared between the session store and the HTTP client.
pub type SharedStorage = Arc<dyn KeyValueStorage>;

/// In-process storage.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor returning a [`SharedStorage`].
    #[must_use]
    pub fn shared() -> SharedStorage {
        Arc::new(Self::new())
    }
}

impl fmt::Debug for MemoryStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.entries.lock().map(|entries| entries.len()).unwrap_or(0);
        f.debug_struct("MemoryStorage").field("entries", &len).finish()
    }
}

fn poisoned() -> StorageError {
    StorageError::Unavailable("storage lock poisoned".to_string())
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::{
        collections::BTreeMap,
        fs,
        path::{Path, PathBuf},
        sync::Mutex,
    };

    use super::{KeyValueStorage, poisoned};
    use crate::error::StorageError;

    /// JSON object file holding every key, rewritten on each change.
    #[derive(Debug)]
    pub struct FileStorage {
        path: PathBuf,
        write_lock: Mutex<()>,
    }

    impl FileStorage {
        /// Storage backed by the file at `path`; the file is created lazily.
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self {
                path: path.into(),
                write_lock: Mutex::new(()),
            }
        }

        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
            if !self.path.exists() {
                return Ok(BTreeMap::new());
            }
            let contents = fs::read_to_string(&self.path)?;
            if contents.trim().is_empty() {
                return Ok(BTreeMap::new());
            }
            Ok(serde_json::from_str(&contents)?)
        }

        fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_vec_pretty(entries)?)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
            }
            Ok(())
        }
    }

    impl KeyValueStorage for FileStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.read_all()?.remove(key))
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let _guard = self.write_lock.lock().map_err(|_| poisoned())?;
            let mut entries = self.read_all()?;
            entries.insert(key.to_string(), value.to_string());
            self.write_all(&entries)
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            let _guard = self.write_lock.lock().map_err(|_| poisoned())?;
            let mut entries = self.read_all()?;
            if entries.remove(key).is_some() {
                self.write_all(&entries)?;
            }
            Ok(())
        }
    }
}
