//! Session store implementations
//!
//! A string key/value store, the server-side stand-in for browser local
//! storage.

use pabx_core::traits::SessionStore;
use pabx_core::AppError;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Process-local store, lost on restart
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.values.lock().remove(key);
        Ok(())
    }
}

/// Durable store backed by a single JSON object file
///
/// Every write rewrites the whole file; the map stays tiny (one key).
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                error!(path = %self.path.display(), error = %e, "Session file is not a JSON object");
                AppError::SessionStore(format!("Corrupt session file: {}", e))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(AppError::SessionStore(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::SessionStore(format!(
                        "Failed to create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        let contents = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, contents).map_err(|e| {
            AppError::SessionStore(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        debug!(path = %self.path.display(), keys = map.len(), "Session file written");
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let _guard = self.lock.lock();
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let _guard = self.lock.lock();
        // A corrupt file is overwritten
        let mut map = self.read_map().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let _guard = self.lock.lock();
        let mut map = self.read_map().unwrap_or_default();
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("pabx-auth-{}-{}", name, std::process::id()))
            .join("session.json")
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let path = temp_path("persist");
        let _ = fs::remove_file(&path);

        let store = FileSessionStore::new(&path);
        assert_eq!(store.get("pabx_user").unwrap(), None);
        store.set("pabx_user", "{\"id\":\"1\"}").unwrap();
        store.set("theme", "dark").unwrap();

        let reopened = FileSessionStore::new(&path);
        assert_eq!(
            reopened.get("pabx_user").unwrap(),
            Some("{\"id\":\"1\"}".to_string())
        );

        reopened.remove("pabx_user").unwrap();
        assert_eq!(store.get("pabx_user").unwrap(), None);
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_reports_corrupt_file_on_read() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let store = FileSessionStore::new(&path);
        assert!(matches!(store.get("pabx_user"), Err(AppError::SessionStore(_))));

        store.set("pabx_user", "x").unwrap();
        assert_eq!(store.get("pabx_user").unwrap(), Some("x".to_string()));

        let _ = fs::remove_file(&path);
    }
}
