//! Feedback Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ordering_app::domain::feedback::{models::FoodItemFeedback, records::FeedbackRecord};

use crate::{extensions::*, food_items::feedback::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FeedbackResponse {
    /// The unique identifier of the feedback entry
    pub uuid: Uuid,

    /// Who left the feedback
    pub username: String,

    /// Rating from 1 to 5
    pub stars: u8,

    pub comment: Option<String>,

    /// The date and time the feedback was left
    pub created_at: String,
}

impl From<FeedbackRecord> for FeedbackResponse {
    fn from(feedback: FeedbackRecord) -> Self {
        Self {
            uuid: feedback.uuid.into_uuid(),
            username: feedback.username,
            stars: feedback.stars,
            comment: feedback.comment,
            created_at: feedback.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FoodItemFeedbackResponse {
    /// Mean star rating, absent until someone leaves feedback
    pub average_stars: Option<f64>,

    /// Feedback entries, newest first
    pub feedback: Vec<FeedbackResponse>,
}

impl From<FoodItemFeedback> for FoodItemFeedbackResponse {
    fn from(feedback: FoodItemFeedback) -> Self {
        Self {
            average_stars: feedback.average_stars(),
            feedback: feedback.entries.into_iter().map(Into::into).collect(),
        }
    }
}

/// Feedback Index Handler
///
/// Returns the feedback left on one food item.
#[endpoint(
    tags("feedback"),
    summary = "List Food Item Feedback",
    responses(
        (status_code = StatusCode::OK, description = "Feedback for the food item"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    food_item: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<FoodItemFeedbackResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let feedback = state
        .app
        .feedback
        .list_feedback(food_item.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(feedback.into()))
}
