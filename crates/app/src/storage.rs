//! Durable key/value storage for the session record and preferences.
//!
//! The browser build uses `localStorage`; native builds keep one file per
//! key under the configured data directory. Tests use [`MemoryStore`].

use shared_types::{AppError, StorageConfig};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// In-process store. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::KeyValueStore;
    use shared_types::AppError;

    /// `window.localStorage`.
    pub struct BrowserStore;

    impl BrowserStore {
        fn storage(&self) -> Result<web_sys::Storage, AppError> {
            web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| AppError::storage("localStorage is not available"))
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Result<Option<String>, AppError> {
            self.storage()?
                .get_item(key)
                .map_err(|_| AppError::storage(format!("Failed to read '{key}'")))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
            self.storage()?
                .set_item(key, value)
                .map_err(|_| AppError::storage(format!("Failed to write '{key}'")))
        }

        fn remove(&self, key: &str) -> Result<(), AppError> {
            self.storage()?
                .remove_item(key)
                .map_err(|_| AppError::storage(format!("Failed to remove '{key}'")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::KeyValueStore;
    use shared_types::AppError;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    /// One file per key inside `dir`.
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        fn path(&self, key: &str) -> PathBuf {
            self.dir.join(file_name(key))
        }
    }

    /// Map a key onto a single file name inside the data directory. Leading
    /// dots are replaced so `.` and `..` never name a directory.
    pub(super) fn file_name(key: &str) -> String {
        let mut leading = true;
        let name: String = key
            .chars()
            .map(|c| {
                let keep = c.is_ascii_alphanumeric()
                    || c == '-'
                    || c == '_'
                    || (c == '.' && !leading);
                leading &= c == '.';
                if keep { c } else { '_' }
            })
            .collect();
        if name.is_empty() {
            "_".to_string()
        } else {
            name
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, AppError> {
            match std::fs::read_to_string(self.path(key)) {
                Ok(value) => Ok(Some(value)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(AppError::storage(format!("Failed to read '{key}': {e}"))),
            }
        }

        fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
            std::fs::create_dir_all(&self.dir)
                .and_then(|_| std::fs::write(self.path(key), value))
                .map_err(|e| AppError::storage(format!("Failed to write '{key}': {e}")))
        }

        fn remove(&self, key: &str) -> Result<(), AppError> {
            match std::fs::remove_file(self.path(key)) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(AppError::storage(format!("Failed to remove '{key}': {e}"))),
            }
        }
    }
}

/// Storage backend for the current target.
#[allow(unused_variables)]
pub fn platform_store(config: &StorageConfig) -> Rc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStore)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let dir = if config.data_dir.trim().is_empty() {
            std::env::temp_dir().join("workdeck")
        } else {
            std::path::PathBuf::from(config.data_dir.trim())
        };
        tracing::debug!(dir = %dir.display(), "Using file-backed storage");
        Rc::new(FileStore::new(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
        other.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn memory_store_remove_missing_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("absent").is_ok());
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("workdeck-test-{}", std::process::id()));
        let store = FileStore::new(&dir);
        assert_eq!(store.get("workdeck.session").unwrap(), None);
        store.set("workdeck.session", "{\"id\":\"1\"}").unwrap();
        assert_eq!(
            store.get("workdeck.session").unwrap().as_deref(),
            Some("{\"id\":\"1\"}")
        );
        store.remove("workdeck.session").unwrap();
        assert_eq!(store.get("workdeck.session").unwrap(), None);
        store.remove("workdeck.session").unwrap();
        let _ = std::fs::remove_dir_all(dir);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_sanitizes_keys() {
        let dir = std::env::temp_dir().join(format!("workdeck-keys-{}", std::process::id()));
        let store = FileStore::new(&dir);
        store.set("../escape", "x").unwrap();
        assert!(dir.join("___escape").exists());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn dot_keys_stay_inside_data_dir() {
        use super::file::file_name;
        assert_eq!(file_name("."), "_");
        assert_eq!(file_name(".."), "__");
        assert_eq!(file_name(""), "_");
        assert_eq!(file_name(".hidden.json"), "_hidden.json");
        assert_eq!(file_name("workdeck.session"), "workdeck.session");

        let dir = std::env::temp_dir().join(format!("workdeck-dots-{}", std::process::id()));
        let store = FileStore::new(&dir);
        store.set("..", "up").unwrap();
        store.set(".", "here").unwrap();
        assert_eq!(store.get("..").unwrap().as_deref(), Some("up"));
        assert_eq!(store.get(".").unwrap().as_deref(), Some("here"));
        assert!(dir.join("__").is_file());
        assert!(dir.join("_").is_file());
        let _ = std::fs::remove_dir_all(dir);
    }
}
