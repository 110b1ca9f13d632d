use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

/// Preference key read by the playback service to decide whether it keeps
/// itself in the foreground while paused.
pub const INVINCIBILITY_ENABLED_KEY: &str = "invincibility_enabled";

#[cfg(target_arch = "wasm32")]
const LOCAL_STORAGE_PREFIX: &str = "rustysound.";

/// Error type for preference store operations
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[cfg(target_arch = "wasm32")]
    #[error("storage error: {0}")]
    Storage(#[from] gloo_storage::errors::StorageError),
    #[error("invalid value for {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Minimal key/value access to persisted boolean preferences.
pub trait PreferenceStore {
    /// Returns `None` when the key has never been written.
    fn get_bool(&self, key: &str) -> Result<Option<bool>, DbError>;
    fn set_bool(&self, key: &str, value: bool) -> Result<(), DbError>;
}

/// Sqlite backed store sharing the `settings` table layout of the player.
#[cfg(not(target_arch = "wasm32"))]
pub struct SqlitePreferences {
    conn: RefCell<rusqlite::Connection>,
}

#[cfg(not(target_arch = "wasm32"))]
impl SqlitePreferences {
    pub fn open(path: &std::path::Path) -> Result<Self, DbError> {
        let conn = rusqlite::Connection::open(path)?;
        Self::with_connection(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, DbError> {
        Self::with_connection(rusqlite::Connection::open_in_memory()?)
    }

    fn with_connection(conn: rusqlite::Connection) -> Result<Self, DbError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            conn: RefCell::new(conn),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for SqlitePreferences {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, DbError> {
        use rusqlite::OptionalExtension;

        let conn = self.conn.borrow();
        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                [key],
                |row: &rusqlite::Row| row.get(0),
            )
            .optional()?;

        raw.map(|json| {
            serde_json::from_str(&json).map_err(|source| DbError::Decode {
                key: key.to_string(),
                source,
            })
        })
        .transpose()
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), DbError> {
        let json = serde_json::Value::Bool(value).to_string();
        self.conn.borrow().execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            [key, json.as_str()],
        )?;

        Ok(())
    }
}

/// Browser local storage, one entry per key.
#[cfg(target_arch = "wasm32")]
pub struct LocalStoragePreferences;

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStoragePreferences {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, DbError> {
        match LocalStorage::get::<bool>(format!("{LOCAL_STORAGE_PREFIX}{key}")) {
            Ok(value) => Ok(Some(value)),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), DbError> {
        LocalStorage::set(format!("{LOCAL_STORAGE_PREFIX}{key}"), value)?;
        Ok(())
    }
}

/// Process-local store, used when nothing persistent can be opened.
#[derive(Default)]
pub struct MemoryPreferences {
    values: RefCell<HashMap<String, bool>>,
}

impl PreferenceStore for MemoryPreferences {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, DbError> {
        Ok(self.values.borrow().get(key).copied())
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), DbError> {
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

/// Typed view over the preference store.
#[derive(Clone)]
pub struct Preferences {
    store: Rc<dyn PreferenceStore>,
}

impl Preferences {
    pub fn new(store: Rc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Opens the persistent store for the current platform, falling back
    /// to memory so the screen stays usable.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open(config: &crate::config::AppConfig) -> Self {
        let path = config.database_path();
        match SqlitePreferences::open(&path) {
            Ok(store) => {
                tracing::debug!("Opened preferences at {}", path.display());
                Self::new(Rc::new(store))
            }
            Err(err) => {
                tracing::error!("Failed to open preferences at {}: {err}", path.display());
                Self::new(Rc::new(MemoryPreferences::default()))
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn open(_config: &crate::config::AppConfig) -> Self {
        Self::new(Rc::new(LocalStoragePreferences))
    }

    pub fn is_invincibility_enabled(&self) -> bool {
        self.bool_or(INVINCIBILITY_ENABLED_KEY, false)
    }

    pub fn set_invincibility_enabled(&self, enabled: bool) -> Result<(), DbError> {
        self.store.set_bool(INVINCIBILITY_ENABLED_KEY, enabled)
    }

    fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.store.get_bool(key) {
            Ok(value) => value.unwrap_or(default),
            Err(err) => {
                tracing::warn!("Failed to read preference {key}: {err}");
                default
            }
        }
    }
}
