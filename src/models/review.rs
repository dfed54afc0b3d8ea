//! Review records as stored per place.

use serde::{Deserialize, Serialize};

/// Display date given to a freshly authored review.
pub const JUST_NOW_LABEL: &str = "Just now";

/// Display date given to a review after its author edits it.
pub const EDITED_LABEL: &str = "Edited just now";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub author: String,
    /// 1 to 5 stars.
    pub rating: u8,
    pub date: String,
    pub text: String,
    pub helpful: u32,
}

impl Review {
    pub fn is_authored_by(&self, identity: &str) -> bool {
        self.author == identity
    }
}
