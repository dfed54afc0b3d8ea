//! Review form input, checked before anything reaches the store.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A validated rating and body ready to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    rating: u8,
    text: String,
}

impl ReviewDraft {
    /// Validate raw form input. The body is trimmed before checking.
    pub fn new(rating: u8, text: &str) -> Result<Self> {
        validation::validate_rating(rating)?;
        let text = text.trim();
        validation::validate_text(text)?;
        Ok(Self {
            rating,
            text: text.to_string(),
        })
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Validation functions for review form input
pub mod validation {
    use anyhow::{bail, Result};

    pub const MIN_RATING: u8 = 1;
    pub const MAX_RATING: u8 = 5;
    pub const MAX_TEXT_CHARS: usize = 500;

    pub fn validate_rating(rating: u8) -> Result<()> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            bail!("Select a rating between {MIN_RATING} and {MAX_RATING} stars");
        }
        Ok(())
    }

    pub fn validate_text(text: &str) -> Result<()> {
        if text.trim().is_empty() {
            bail!("Review text cannot be empty");
        }

        let chars = text.chars().count();
        if chars > MAX_TEXT_CHARS {
            bail!("Review text is {chars} characters; the limit is {MAX_TEXT_CHARS}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims_valid_input() {
        let draft = ReviewDraft::new(4, "  Great espresso.  ").unwrap();
        assert_eq!(draft.rating(), 4);
        assert_eq!(draft.text(), "Great espresso.");
    }

    #[test]
    fn rejects_missing_rating() {
        assert!(ReviewDraft::new(0, "Nice").is_err());
        assert!(ReviewDraft::new(6, "Nice").is_err());
    }

    #[test]
    fn rejects_blank_body() {
        assert!(ReviewDraft::new(3, "").is_err());
        assert!(ReviewDraft::new(3, " \n\t ").is_err());
    }

    #[test]
    fn body_limit_counts_characters_not_bytes() {
        let at_limit = "é".repeat(validation::MAX_TEXT_CHARS);
        assert!(ReviewDraft::new(5, &at_limit).is_ok());

        let over = "a".repeat(validation::MAX_TEXT_CHARS + 1);
        assert!(ReviewDraft::new(5, &over).is_err());
    }
}
