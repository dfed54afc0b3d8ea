//! The reviews tab of a place's details panel.
//!
//! This is where authorship is enforced: the store trusts its caller, so
//! edits and deletes are checked against the session identity here.

pub mod draft;

use anyhow::{bail, Result};

use crate::{
    log_warn,
    models::Review,
    store::LocalStore,
};

pub use draft::ReviewDraft;

const ENABLE_LOGS: bool = true;

pub struct ReviewBoard<'a> {
    store: &'a LocalStore,
    place_id: String,
}

impl<'a> ReviewBoard<'a> {
    /// Open the board for `place_id`, seeding demo reviews on first visit.
    pub fn open(store: &'a LocalStore, place_id: &str) -> Self {
        store.seed_default_reviews(place_id);
        Self {
            store,
            place_id: place_id.to_string(),
        }
    }

    pub fn place_id(&self) -> &str {
        &self.place_id
    }

    pub fn reviews(&self) -> Vec<Review> {
        self.store.list_reviews(&self.place_id)
    }

    /// Whether the current session may edit or delete `review`.
    pub fn can_modify(&self, review: &Review) -> bool {
        review.is_authored_by(&self.store.current_identity())
    }

    /// Post a review as the current session identity.
    pub fn submit(&self, draft: &ReviewDraft) -> Option<Review> {
        let author = self.store.current_identity();
        self.store
            .add_review(&self.place_id, draft.rating(), draft.text(), &author)
    }

    /// Edit one of the session's own reviews. `Ok(false)` when the review
    /// does not exist (or the write was dropped).
    pub fn edit(&self, review_id: &str, draft: &ReviewDraft) -> Result<bool> {
        let Some(review) = self.find(review_id) else {
            return Ok(false);
        };
        self.authorize(&review, "edit")?;
        Ok(self
            .store
            .update_review(&self.place_id, review_id, draft.rating(), draft.text()))
    }

    /// Delete one of the session's own reviews.
    pub fn delete(&self, review_id: &str) -> Result<bool> {
        let Some(review) = self.find(review_id) else {
            return Ok(false);
        };
        self.authorize(&review, "delete")?;
        Ok(self.store.delete_review(&self.place_id, review_id))
    }

    /// Anyone may mark any review helpful, once per session.
    pub fn toggle_helpful(&self, review_id: &str) -> bool {
        self.store.toggle_helpful(review_id)
    }

    fn find(&self, review_id: &str) -> Option<Review> {
        self.reviews().into_iter().find(|review| review.id == review_id)
    }

    fn authorize(&self, review: &Review, action: &str) -> Result<()> {
        if !self.can_modify(review) {
            log_warn!(
                "Rejected {action} of review {} by non-author",
                review.id
            );
            bail!("Only the author can {action} this review");
        }
        Ok(())
    }
}
