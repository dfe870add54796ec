//! Feedback service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        feedback::{
            data::{MAX_STARS, MIN_STARS, NewFeedback},
            errors::FeedbackServiceError,
            models::FoodItemFeedback,
            records::FeedbackRecord,
            repository::PgFeedbackRepository,
        },
        food_items::records::FoodItemUuid,
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgFeedbackService {
    db: Db,
    repository: PgFeedbackRepository,
}

impl PgFeedbackService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgFeedbackRepository::new(),
        }
    }
}

#[async_trait]
impl FeedbackService for PgFeedbackService {
    async fn leave_feedback(
        &self,
        user: UserUuid,
        feedback: NewFeedback,
    ) -> Result<FeedbackRecord, FeedbackServiceError> {
        if !(MIN_STARS..=MAX_STARS).contains(&feedback.stars) {
            return Err(FeedbackServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_feedback(&mut tx, user, &feedback)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_feedback(
        &self,
        food_item: FoodItemUuid,
    ) -> Result<FoodItemFeedback, FeedbackServiceError> {
        let mut tx = self.db.begin().await?;

        let entries = self.repository.list_feedback(&mut tx, food_item).await?;

        tx.commit().await?;

        Ok(FoodItemFeedback { entries })
    }
}

#[automock]
#[async_trait]
pub trait FeedbackService: Send + Sync {
    /// Record a star rating and optional comment from a user.
    async fn leave_feedback(
        &self,
        user: UserUuid,
        feedback: NewFeedback,
    ) -> Result<FeedbackRecord, FeedbackServiceError>;

    async fn list_feedback(
        &self,
        food_item: FoodItemUuid,
    ) -> Result<FoodItemFeedback, FeedbackServiceError>;
}
