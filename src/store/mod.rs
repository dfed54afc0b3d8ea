//! Session-local persistence for saved places, reviews and helpful votes.
//!
//! Every operation runs synchronously against the session storage. Failures
//! never reach the caller: reads fall back to empty data, writes are
//! abandoned before anything is replaced, and both are logged. A caller
//! cannot tell "nothing changed" from "the write failed".

pub mod notify;
pub mod records;
pub mod session;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::broadcast;

use crate::{
    log_error, log_info,
    models::{Place, Review, SavedLocation},
    storage::{
        MemoryStorage, SessionStorage, CURRENT_USER_KEY, HELPFUL_KEY, REVIEWS_KEY,
        SAVED_LOCATIONS_KEY,
    },
};

pub use notify::{ChangeNotifier, StoreEvent};
pub use records::{HelpfulVotes, ReviewsByPlace};
pub use session::{generate_identity, SessionContext};

const ENABLE_LOGS: bool = true;

pub struct LocalStore {
    session: SessionContext,
    notifier: ChangeNotifier,
}

impl LocalStore {
    pub fn new(session: SessionContext, notifier: ChangeNotifier) -> Self {
        Self { session, notifier }
    }

    /// Store over fresh in-memory storage with default notification capacity.
    pub fn in_memory() -> Self {
        Self::new(
            SessionContext::new(Box::new(MemoryStorage::new())),
            ChangeNotifier::default(),
        )
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.notifier.subscribe()
    }

    // --- identity ---

    /// The session's author name, created and persisted on first use.
    pub fn current_identity(&self) -> String {
        if let Some(identity) = self.session.cached_identity() {
            return identity;
        }

        let stored = match self.storage().get(CURRENT_USER_KEY) {
            Ok(value) => value.filter(|name| !name.trim().is_empty()),
            Err(err) => {
                log_error!("Error getting current user: {err:#}");
                None
            }
        };

        let identity = match stored {
            Some(identity) => identity,
            None => {
                let identity = generate_identity(&mut rand::thread_rng());
                if let Err(err) = self.storage().set(CURRENT_USER_KEY, &identity) {
                    log_error!("Error persisting current user: {err:#}");
                }
                log_info!("Session {} identified as {identity}", self.session.id());
                identity
            }
        };

        self.session.cache_identity(identity.clone());
        identity
    }

    /// Replace the session identity. Blank names are ignored.
    pub fn set_current_identity(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        if let Err(err) = self.storage().set(CURRENT_USER_KEY, name) {
            log_error!("Error setting current user: {err:#}");
            return false;
        }

        self.session.cache_identity(name.to_string());
        self.notifier.publish(StoreEvent::IdentityChanged);
        true
    }

    // --- saved locations ---

    /// Saved places, most recently saved first.
    pub fn list_saved(&self) -> Vec<SavedLocation> {
        self.read(SAVED_LOCATIONS_KEY)
    }

    pub fn is_saved(&self, place_id: &str) -> bool {
        self.list_saved()
            .iter()
            .any(|location| location.id == place_id)
    }

    /// Bookmark `place`. Returns false if it was already saved or the write
    /// failed.
    pub fn save(&self, place: &Place) -> bool {
        let Some(mut saved) = self.load_for_update::<Vec<SavedLocation>>(SAVED_LOCATIONS_KEY)
        else {
            return false;
        };

        let location = SavedLocation::from_place(place, Utc::now());
        if !records::insert_saved(&mut saved, location) {
            return false;
        }

        self.commit(SAVED_LOCATIONS_KEY, &saved, StoreEvent::SavedLocationsChanged)
    }

    pub fn unsave(&self, place_id: &str) -> bool {
        let Some(mut saved) = self.load_for_update::<Vec<SavedLocation>>(SAVED_LOCATIONS_KEY)
        else {
            return false;
        };

        if !records::remove_saved(&mut saved, place_id) {
            return false;
        }

        self.commit(SAVED_LOCATIONS_KEY, &saved, StoreEvent::SavedLocationsChanged)
    }

    /// Flip the bookmark on `place`; returns whether it is saved afterwards.
    pub fn toggle_saved(&self, place: &Place) -> bool {
        if self.is_saved(&place.id) {
            !self.unsave(&place.id)
        } else {
            self.save(place)
        }
    }

    // --- reviews ---

    /// Reviews for `place_id`, newest authored first.
    pub fn list_reviews(&self, place_id: &str) -> Vec<Review> {
        self.read::<ReviewsByPlace>(REVIEWS_KEY)
            .remove(place_id)
            .unwrap_or_default()
    }

    /// Install the demo reviews unless the place already has a collection.
    pub fn seed_default_reviews(&self, place_id: &str) {
        let Some(mut all) = self.load_for_update::<ReviewsByPlace>(REVIEWS_KEY) else {
            return;
        };

        if records::seed_reviews(&mut all, place_id) {
            self.commit(
                REVIEWS_KEY,
                &all,
                StoreEvent::ReviewsChanged {
                    place_id: place_id.to_string(),
                },
            );
        }
    }

    /// Prepend a new review. Input is trusted; validate drafts before calling.
    pub fn add_review(&self, place_id: &str, rating: u8, text: &str, author: &str) -> Option<Review> {
        let mut all = self.load_for_update::<ReviewsByPlace>(REVIEWS_KEY)?;

        let reviews = all.entry(place_id.to_string()).or_default();
        let id = records::next_review_id(place_id, Utc::now().timestamp_millis(), reviews);
        let review = records::new_review(id, rating, text, author);
        records::prepend_review(reviews, review.clone());

        let committed = self.commit(
            REVIEWS_KEY,
            &all,
            StoreEvent::ReviewsChanged {
                place_id: place_id.to_string(),
            },
        );
        committed.then_some(review)
    }

    /// Rewrite a review's rating and text. The store does not check
    /// authorship; callers must.
    pub fn update_review(&self, place_id: &str, review_id: &str, rating: u8, text: &str) -> bool {
        let Some(mut all) = self.load_for_update::<ReviewsByPlace>(REVIEWS_KEY) else {
            return false;
        };

        let updated = all
            .get_mut(place_id)
            .map(|reviews| records::update_review(reviews, review_id, rating, text))
            .unwrap_or(false);
        if !updated {
            return false;
        }

        self.commit(
            REVIEWS_KEY,
            &all,
            StoreEvent::ReviewsChanged {
                place_id: place_id.to_string(),
            },
        )
    }

    /// Remove a review. The store does not check authorship; callers must.
    pub fn delete_review(&self, place_id: &str, review_id: &str) -> bool {
        let Some(mut all) = self.load_for_update::<ReviewsByPlace>(REVIEWS_KEY) else {
            return false;
        };

        let deleted = all
            .get_mut(place_id)
            .map(|reviews| records::delete_review(reviews, review_id))
            .unwrap_or(false);
        if !deleted {
            return false;
        }

        self.commit(
            REVIEWS_KEY,
            &all,
            StoreEvent::ReviewsChanged {
                place_id: place_id.to_string(),
            },
        )
    }

    // --- helpful votes ---

    pub fn helpful_votes(&self) -> HelpfulVotes {
        self.read(HELPFUL_KEY)
    }

    pub fn is_helpful(&self, review_id: &str) -> bool {
        self.helpful_votes().contains(review_id)
    }

    /// Flip this session's helpful mark on a review and move its counter
    /// with it. Returns whether the review is marked afterwards.
    ///
    /// The counter is written before the vote set and rolled back if the
    /// vote set write fails, so the two never disagree.
    pub fn toggle_helpful(&self, review_id: &str) -> bool {
        let Some(mut all) = self.load_for_update::<ReviewsByPlace>(REVIEWS_KEY) else {
            return self.is_helpful(review_id);
        };
        let Some(mut votes) = self.load_for_update::<HelpfulVotes>(HELPFUL_KEY) else {
            return self.is_helpful(review_id);
        };

        let was_marked = votes.contains(review_id);
        let before = all.clone();
        let Some(marked) = records::toggle_helpful(&mut all, &mut votes, review_id) else {
            return was_marked;
        };

        if !self.write(REVIEWS_KEY, &all) {
            return was_marked;
        }

        if !self.write(HELPFUL_KEY, &votes) {
            if !self.write(REVIEWS_KEY, &before) {
                log_error!("Failed to roll back helpful count for review {review_id}");
            }
            return was_marked;
        }

        let place_id = all
            .iter()
            .find(|(_, reviews)| reviews.iter().any(|review| review.id == review_id))
            .map(|(place_id, _)| place_id.clone());

        self.notifier.publish(StoreEvent::HelpfulVotesChanged {
            review_id: review_id.to_string(),
        });
        if let Some(place_id) = place_id {
            self.notifier.publish(StoreEvent::ReviewsChanged { place_id });
        }
        marked
    }

    // --- storage shell ---

    fn storage(&self) -> &dyn SessionStorage {
        self.session.storage()
    }

    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        match self.storage().get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("malformed data stored under '{key}'")),
            None => Ok(T::default()),
        }
    }

    /// Lenient read for queries: any failure reads as empty.
    fn read<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.load(key).unwrap_or_else(|err| {
            log_error!("Error loading {key}: {err:#}");
            T::default()
        })
    }

    /// Strict read for mutations: a failure aborts the mutation so that
    /// unreadable data is never overwritten.
    fn load_for_update<T: DeserializeOwned + Default>(&self, key: &str) -> Option<T> {
        match self.load(key) {
            Ok(value) => Some(value),
            Err(err) => {
                log_error!("Skipping update of {key}: {err:#}");
                None
            }
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let result = serde_json::to_string(value)
            .with_context(|| format!("failed to serialize {key}"))
            .and_then(|raw| self.storage().set(key, &raw));

        match result {
            Ok(()) => true,
            Err(err) => {
                log_error!("Error saving {key}: {err:#}");
                false
            }
        }
    }

    fn commit<T: Serialize>(&self, key: &str, value: &T, event: StoreEvent) -> bool {
        if !self.write(key, value) {
            return false;
        }
        self.notifier.publish(event);
        true
    }
}
