use std::{collections::HashMap, sync::RwLock};

use anyhow::{anyhow, bail, Result};

use super::SessionStorage;

/// In-process storage, optionally capped at a byte quota like a browser
/// session store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys plus values exceed `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }
}

fn usage(entries: &HashMap<String, String>) -> usize {
    entries.iter().map(|(k, v)| k.len() + v.len()).sum()
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let guard = self
            .entries
            .read()
            .map_err(|_| anyhow!("session storage lock poisoned"))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut guard = self
            .entries
            .write()
            .map_err(|_| anyhow!("session storage lock poisoned"))?;

        if let Some(quota) = self.quota_bytes {
            let existing = guard.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            let projected = usage(&guard) - existing + key.len() + value.len();
            if projected > quota {
                bail!("quota exceeded writing '{key}' ({projected} > {quota} bytes)");
            }
        }

        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v1").unwrap();
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn quota_rejects_oversized_write_and_keeps_old_value() {
        let storage = MemoryStorage::with_quota(10);
        storage.set("k", "small").unwrap();
        assert!(storage.set("k", "this value is far too long").is_err());
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("small"));
        // 1 + 5 bytes held, so a second key of 4 bytes still fits.
        storage.set("j", "abc").unwrap();
        assert!(storage.set("i", "x").is_err());
    }

    #[test]
    fn quota_counts_replacement_not_sum() {
        let storage = MemoryStorage::with_quota(8);
        storage.set("k", "1234567").unwrap();
        // Replacing frees the old value first.
        storage.set("k", "7654321").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("7654321"));
    }
}
