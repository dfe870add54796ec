//! Create Feedback Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ordering_app::domain::feedback::{data::NewFeedback, records::FeedbackUuid};

use crate::{
    extensions::*,
    food_items::feedback::{errors::into_status_error, index::FeedbackResponse},
    state::State,
};

/// Create Feedback Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateFeedbackRequest {
    /// Rating from 1 to 5
    pub stars: u8,

    pub comment: Option<String>,
}

/// Create Feedback Handler
#[endpoint(
    tags("feedback"),
    summary = "Leave Feedback",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Feedback recorded"),
        (status_code = StatusCode::NOT_FOUND, description = "Food item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Users only"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "feedback.create",
    skip_all,
    fields(
        user_uuid = tracing::field::Empty,
        food_item_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    food_item: PathParam<Uuid>,
    json: JsonBody<CreateFeedbackRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<FeedbackResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_403()?;
    let food_item = food_item.into_inner();
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("food_item_uuid", tracing::field::display(food_item));

    let feedback = state
        .app
        .feedback
        .leave_feedback(
            user,
            NewFeedback {
                uuid: FeedbackUuid::new(),
                food_item_uuid: food_item.into(),
                stars: request.stars,
                comment: request.comment,
            },
        )
        .await
        .map_err(into_status_error)?;

    tracing::info!(feedback_uuid = %feedback.uuid, stars = feedback.stars, "recorded feedback");

    res.status_code(StatusCode::CREATED);

    Ok(Json(feedback.into()))
}
