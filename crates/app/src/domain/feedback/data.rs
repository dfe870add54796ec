//! Feedback Data

use crate::domain::{feedback::records::FeedbackUuid, food_items::records::FoodItemUuid};

/// Lowest star rating.
pub const MIN_STARS: u8 = 1;

/// Highest star rating.
pub const MAX_STARS: u8 = 5;

/// New Feedback Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub uuid: FeedbackUuid,
    pub food_item_uuid: FoodItemUuid,
    pub stars: u8,
    pub comment: Option<String>,
}
