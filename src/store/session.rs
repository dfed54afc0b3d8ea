//! Session-scoped context injected into the store.
//!
//! Owns the storage substrate for one browsing session and the in-memory
//! copy of the session identity. Dropping the context ends the session.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::storage::SessionStorage;

const IDENTITY_PREFIX: &str = "User";
const IDENTITY_SUFFIX_LEN: usize = 7;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub struct SessionContext {
    id: Uuid,
    started_at: DateTime<Utc>,
    storage: Box<dyn SessionStorage>,
    identity: RwLock<Option<String>>,
}

impl SessionContext {
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            storage,
            identity: RwLock::new(None),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn storage(&self) -> &dyn SessionStorage {
        self.storage.as_ref()
    }

    pub(crate) fn cached_identity(&self) -> Option<String> {
        match self.identity.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub(crate) fn cache_identity(&self, identity: String) {
        let mut guard = match self.identity.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(identity);
    }
}

/// `User` followed by seven random base-36 characters.
pub fn generate_identity<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..IDENTITY_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{IDENTITY_PREFIX}{suffix}")
}
