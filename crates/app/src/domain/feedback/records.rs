//! Feedback Records

use jiff::Timestamp;

use crate::{
    domain::{food_items::records::FoodItemUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Feedback UUID
pub type FeedbackUuid = TypedUuid<FeedbackRecord>;

/// Feedback Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRecord {
    pub uuid: FeedbackUuid,
    pub user_uuid: UserUuid,
    pub username: String,
    pub food_item_uuid: FoodItemUuid,
    pub stars: u8,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}
