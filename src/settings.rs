use std::{
    fs,
    path::PathBuf,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    models::Point,
    routing::RouteConfig,
    storage::{MemoryStorage, SessionStorage, SqliteStorage},
    store::notify::DEFAULT_CHANNEL_CAPACITY,
};

/// Typical browser session-storage allowance.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "backend", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StorageSettings {
    Memory {
        #[serde(default)]
        quota_bytes: Option<usize>,
    },
    Sqlite {
        /// `None` keeps the database in memory for the session's lifetime.
        #[serde(default)]
        path: Option<PathBuf>,
    },
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings::Memory {
            quota_bytes: Some(DEFAULT_QUOTA_BYTES),
        }
    }
}

impl StorageSettings {
    pub fn open(&self) -> Result<Box<dyn SessionStorage>> {
        let storage: Box<dyn SessionStorage> = match self {
            StorageSettings::Memory {
                quota_bytes: Some(quota),
            } => Box::new(MemoryStorage::with_quota(*quota)),
            StorageSettings::Memory { quota_bytes: None } => Box::new(MemoryStorage::new()),
            StorageSettings::Sqlite { path: Some(path) } => Box::new(SqliteStorage::open(path.clone())?),
            StorageSettings::Sqlite { path: None } => Box::new(SqliteStorage::open_in_memory()?),
        };
        Ok(storage)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Where the traveler stands when directions are requested.
    pub origin: Point,
    pub route: RouteConfig,
    pub storage: StorageSettings,
    pub notification_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            origin: Point::new(30.0, 70.0),
            route: RouteConfig::default(),
            storage: StorageSettings::default(),
            notification_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<Settings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                warn!("Ignoring unreadable settings in {}: {err}", path.display());
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn settings(&self) -> Settings {
        self.read().clone()
    }

    pub fn update(&self, settings: Settings) -> Result<()> {
        let mut guard = self.write();
        self.persist(&settings)?;
        *guard = settings;
        Ok(())
    }

    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let data: Settings = serde_json::from_str(&contents)?;
        *self.write() = data;
        Ok(())
    }

    fn persist(&self, data: &Settings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }

    fn read(&self) -> RwLockReadGuard<'_, Settings> {
        match self.data.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Settings> {
        match self.data.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json")).unwrap();
        assert_eq!(store.settings(), Settings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"origin":{"x":10.0,"y":20.0},"storage":{"backend":"sqlite"}}"#).unwrap();

        let settings = SettingsStore::new(path).unwrap().settings();
        assert_eq!(settings.origin, Point::new(10.0, 20.0));
        assert_eq!(settings.storage, StorageSettings::Sqlite { path: None });
        assert_eq!(settings.route, RouteConfig::default());
        assert_eq!(settings.notification_capacity, DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn garbage_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json at all").unwrap();
        assert_eq!(SettingsStore::new(path).unwrap().settings(), Settings::default());
    }

    #[test]
    fn update_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let store = SettingsStore::new(path.clone()).unwrap();

        let mut settings = store.settings();
        settings.route.step = 5.0;
        settings.storage = StorageSettings::Memory { quota_bytes: None };
        store.update(settings.clone()).unwrap();

        let fresh = SettingsStore::new(path).unwrap();
        assert_eq!(fresh.settings(), settings);
        fresh.reload().unwrap();
        assert_eq!(fresh.settings(), settings);
    }

    #[test]
    fn storage_settings_open_each_backend() {
        let dir = tempfile::tempdir().unwrap();
        let backends = [
            StorageSettings::default(),
            StorageSettings::Memory { quota_bytes: None },
            StorageSettings::Sqlite { path: None },
            StorageSettings::Sqlite {
                path: Some(dir.path().join("session.sqlite3")),
            },
        ];

        for backend in backends {
            let storage = backend.open().unwrap();
            storage.set("k", "v").unwrap();
            assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        }
    }
}
