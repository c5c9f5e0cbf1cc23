//! Post-trip feedback form state
use serde::{Deserialize, Serialize};

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackOutcome {
    ReturnToDashboard,
}

/// Star rating (0 = unset) and free-text comment. Nothing is stored or sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedbackForm {
    pub rating: u8,
    pub comment: String,
}

impl FeedbackForm {
    /// Set the star rating, clamped to 1..=5.
    pub fn set_rating(&mut self, stars: u8) {
        self.rating = stars.clamp(1, MAX_RATING);
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    #[must_use]
    pub const fn is_rated(&self) -> bool {
        self.rating > 0
    }

    /// Whether star `n` (1-based) renders filled.
    #[must_use]
    pub const fn is_star_filled(&self, n: u8) -> bool {
        self.rating >= n
    }

    /// Submission never fails and always leads back to the dashboard.
    #[must_use]
    pub const fn submit(&self) -> FeedbackOutcome {
        FeedbackOutcome::ReturnToDashboard
    }

    #[must_use]
    pub const fn cancel(&self) -> FeedbackOutcome {
        FeedbackOutcome::ReturnToDashboard
    }
}
