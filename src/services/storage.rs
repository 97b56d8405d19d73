use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::common::StorageError;
use crate::models::Admin;

/// What survives a reload: the bearer token and the cached admin.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: Option<String>,
    pub admin: Option<Admin>,
}

pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError>;
    fn save(&self, session: &PersistedSession) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<PersistedSession>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: PersistedSession) -> Self {
        Self {
            slot: Mutex::new(Some(session)),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<PersistedSession>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        Ok(self.lock().clone())
    }

    fn save(&self, session: &PersistedSession) -> Result<(), StorageError> {
        *self.lock() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.lock() = None;
        Ok(())
    }
}

/// JSON file store for native tools.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(None),
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, session: &PersistedSession) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(session)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// `localStorage` keys `token` and `admin`.
#[cfg(feature = "csr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
impl BrowserStore {
    const TOKEN_KEY: &'static str = "token";
    const ADMIN_KEY: &'static str = "admin";

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "csr")]
impl SessionStore for BrowserStore {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        let storage = Self::storage()?;
        let token = storage.get_item(Self::TOKEN_KEY).ok().flatten();
        let admin = match storage.get_item(Self::ADMIN_KEY).ok().flatten() {
            Some(raw) => Some(serde_json::from_str::<Admin>(&raw)?),
            None => None,
        };
        if token.is_none() && admin.is_none() {
            return Ok(None);
        }
        Ok(Some(PersistedSession { token, admin }))
    }

    fn save(&self, session: &PersistedSession) -> Result<(), StorageError> {
        let storage = Self::storage()?;
        let set = |key: &str, value: Option<String>| match value {
            Some(v) => storage.set_item(key, &v),
            None => storage.remove_item(key),
        };
        let admin = session.admin.as_ref().map(serde_json::to_string).transpose()?;
        set(Self::TOKEN_KEY, session.token.clone()).map_err(|_| StorageError::Unavailable)?;
        set(Self::ADMIN_KEY, admin).map_err(|_| StorageError::Unavailable)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let storage = Self::storage()?;
        let token = storage.remove_item(Self::TOKEN_KEY);
        let admin = storage.remove_item(Self::ADMIN_KEY);
        token.and(admin).map_err(|_| StorageError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trip_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("session.json"));
        assert_eq!(store.load().unwrap(), None);

        let session = PersistedSession {
            token: Some("jwt".into()),
            admin: Some(Admin {
                email: "boss@brand.io".into(),
                ..Default::default()
            }),
        };
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn file_store_reports_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(FileStore::new(path).load(), Err(StorageError::Malformed(_))));
    }
}
