use std::{
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};

use super::SessionStorage;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS session_kv (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
";

/// SQLite-backed session storage. In-memory by default so it lives exactly
/// as long as the session; a file path keeps it around for inspection.
pub struct SqliteStorage {
    conn: Mutex<Connection>,
    db_path: Option<PathBuf>,
}

impl SqliteStorage {
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory SQLite")?;
        Self::init(conn, None)
    }

    pub fn open(db_path: PathBuf) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create storage directory {}", parent.display())
            })?;
        }

        let conn = Connection::open(&db_path)
            .with_context(|| format!("failed to open SQLite database {}", db_path.display()))?;
        Self::init(conn, Some(db_path))
    }

    fn init(conn: Connection, db_path: Option<PathBuf>) -> Result<Self> {
        if db_path.is_some() {
            if let Err(err) = conn.pragma_update(None, "journal_mode", "WAL") {
                error!("Failed to enable WAL mode: {err}");
            }
        }

        conn.execute_batch(SCHEMA)
            .context("failed to create session_kv table")?;

        match db_path.as_deref() {
            Some(path) => info!("Session storage initialized at {}", path.display()),
            None => info!("Session storage initialized in memory"),
        }

        Ok(Self {
            conn: Mutex::new(conn),
            db_path,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("session storage connection poisoned"))
    }
}

impl SessionStorage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT value FROM session_kv WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        )
        .optional()
        .with_context(|| format!("failed to read key '{key}'"))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO session_kv (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )
        .with_context(|| format!("failed to write key '{key}'"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_round_trip() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        assert!(storage.path().is_none());
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "[1,2,3]").unwrap();
        storage.set("k", "[4]").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("[4]"));
        assert_eq!(storage.get("other").unwrap(), None);
    }

    #[test]
    fn file_backed_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.sqlite3");

        {
            let storage = SqliteStorage::open(path.clone()).unwrap();
            storage.set("current-user", "Userabc1234").unwrap();
        }

        let reopened = SqliteStorage::open(path.clone()).unwrap();
        assert_eq!(reopened.path(), Some(path.as_path()));
        assert_eq!(
            reopened.get("current-user").unwrap().as_deref(),
            Some("Userabc1234")
        );
    }
}
