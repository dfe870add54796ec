//! Feedback Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    feedback::{
        data::NewFeedback,
        records::{FeedbackRecord, FeedbackUuid},
    },
    food_items::records::FoodItemUuid,
    users::records::UserUuid,
};

const CREATE_FEEDBACK_SQL: &str = include_str!("sql/create_feedback.sql");
const LIST_FEEDBACK_SQL: &str = include_str!("sql/list_feedback.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgFeedbackRepository;

impl PgFeedbackRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_feedback(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        feedback: &NewFeedback,
    ) -> Result<FeedbackRecord, sqlx::Error> {
        query_as::<Postgres, FeedbackRecord>(CREATE_FEEDBACK_SQL)
            .bind(feedback.uuid.into_uuid())
            .bind(user.into_uuid())
            .bind(feedback.food_item_uuid.into_uuid())
            .bind(i16::from(feedback.stars))
            .bind(feedback.comment.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_feedback(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        food_item: FoodItemUuid,
    ) -> Result<Vec<FeedbackRecord>, sqlx::Error> {
        query_as::<Postgres, FeedbackRecord>(LIST_FEEDBACK_SQL)
            .bind(food_item.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for FeedbackRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let stars = u8::try_from(row.try_get::<i16, _>("stars")?).map_err(|e| {
            sqlx::Error::ColumnDecode {
                index: "stars".to_string(),
                source: Box::new(e),
            }
        })?;

        Ok(Self {
            uuid: FeedbackUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            username: row.try_get("username")?,
            food_item_uuid: FoodItemUuid::from_uuid(row.try_get("food_item_uuid")?),
            stars,
            comment: row.try_get("comment")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
