//! Pure state transitions over the stored record families.
//!
//! Nothing here touches storage; the store shell loads a family, applies one
//! of these, and writes the result back.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{
    review::{EDITED_LABEL, JUST_NOW_LABEL},
    Review, SavedLocation,
};

/// Every place's reviews, newest first within each place.
pub type ReviewsByPlace = BTreeMap<String, Vec<Review>>;

/// Review ids this session has marked helpful.
pub type HelpfulVotes = BTreeSet<String>;

/// Prepend `location` unless its id is already saved.
pub fn insert_saved(saved: &mut Vec<SavedLocation>, location: SavedLocation) -> bool {
    if saved.iter().any(|existing| existing.id == location.id) {
        return false;
    }
    saved.insert(0, location);
    true
}

pub fn remove_saved(saved: &mut Vec<SavedLocation>, place_id: &str) -> bool {
    let before = saved.len();
    saved.retain(|location| location.id != place_id);
    saved.len() != before
}

/// Demo reviews installed the first time a place's reviews are opened.
pub fn default_reviews(place_id: &str) -> Vec<Review> {
    vec![
        Review {
            id: format!("{place_id}-1"),
            author: "Sarah M.".into(),
            rating: 5,
            date: "2 weeks ago".into(),
            text: "Amazing experience! Highly recommend this place.".into(),
            helpful: 12,
        },
        Review {
            id: format!("{place_id}-2"),
            author: "Michael T.".into(),
            rating: 4,
            date: "1 month ago".into(),
            text: "Great quality but can get quite busy. Recommend going during off-peak hours."
                .into(),
            helpful: 8,
        },
    ]
}

/// Install the defaults for `place_id` when it has no reviews, whether the
/// collection is missing or was emptied.
pub fn seed_reviews(all: &mut ReviewsByPlace, place_id: &str) -> bool {
    if all.get(place_id).is_some_and(|reviews| !reviews.is_empty()) {
        return false;
    }
    all.insert(place_id.to_string(), default_reviews(place_id));
    true
}

/// `"{place_id}-{millis}"`, bumped forward until no review in `existing`
/// carries it.
pub fn next_review_id(place_id: &str, now_ms: i64, existing: &[Review]) -> String {
    let mut stamp = now_ms;
    loop {
        let candidate = format!("{place_id}-{stamp}");
        if !existing.iter().any(|review| review.id == candidate) {
            return candidate;
        }
        stamp += 1;
    }
}

pub fn new_review(id: String, rating: u8, text: &str, author: &str) -> Review {
    Review {
        id,
        author: author.to_string(),
        rating,
        date: JUST_NOW_LABEL.to_string(),
        text: text.to_string(),
        helpful: 0,
    }
}

pub fn prepend_review(reviews: &mut Vec<Review>, review: Review) {
    reviews.insert(0, review);
}

/// Rewrite rating and text in place. Id, author and helpful count are kept.
pub fn update_review(reviews: &mut [Review], review_id: &str, rating: u8, text: &str) -> bool {
    match reviews.iter_mut().find(|review| review.id == review_id) {
        Some(review) => {
            review.rating = rating;
            review.text = text.to_string();
            review.date = EDITED_LABEL.to_string();
            true
        }
        None => false,
    }
}

pub fn delete_review(reviews: &mut Vec<Review>, review_id: &str) -> bool {
    let before = reviews.len();
    reviews.retain(|review| review.id != review_id);
    reviews.len() != before
}

/// Flip the session's helpful mark on `review_id` and move the review's
/// counter with it. Returns the new mark, or `None` when no place holds the
/// review (in which case nothing changes).
pub fn toggle_helpful(
    all: &mut ReviewsByPlace,
    votes: &mut HelpfulVotes,
    review_id: &str,
) -> Option<bool> {
    let review = all
        .values_mut()
        .flat_map(|reviews| reviews.iter_mut())
        .find(|review| review.id == review_id)?;

    if votes.remove(review_id) {
        review.helpful = review.helpful.saturating_sub(1);
        Some(false)
    } else {
        votes.insert(review_id.to_string());
        review.helpful = review.helpful.saturating_add(1);
        Some(true)
    }
}
