//! Delete Food Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, food_items::errors::into_status_error, state::State};

/// Delete Food Item Handler
///
/// Takes the item off the menu. Orders that already contain it are unchanged.
#[endpoint(
    tags("food-items"),
    summary = "Delete Food Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Food item deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Food item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admins only"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "food_items.delete",
    skip(food_item, depot),
    fields(
        admin_uuid = tracing::field::Empty,
        food_item_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    food_item: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let admin = depot.admin_uuid_or_403()?;
    let food_item = food_item.into_inner();

    let span = tracing::Span::current();

    span.record("admin_uuid", tracing::field::display(admin));
    span.record("food_item_uuid", tracing::field::display(food_item));

    state
        .app
        .food_items
        .delete_food_item(food_item.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(food_item_uuid = %food_item, "deleted food item");

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use ordering_app::domain::food_items::{
        FoodItemsServiceError, MockFoodItemsService, records::FoodItemUuid,
    };

    use crate::test_helpers::MockServices;

    use super::*;

    fn mocks(food_items: MockFoodItemsService) -> MockServices {
        MockServices {
            food_items,
            ..MockServices::default()
        }
    }

    fn route() -> Router {
        Router::with_path("admin/food-items/{food_item}").delete(handler)
    }

    #[tokio::test]
    async fn test_delete_food_item_success() -> TestResult {
        let uuid = FoodItemUuid::new();

        let mut food_items = MockFoodItemsService::new();

        food_items
            .expect_delete_food_item()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Ok(()));

        let res = TestClient::delete(format!("http://example.com/admin/food-items/{uuid}"))
            .send(&mocks(food_items).admin_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_food_item_not_found_returns_404() -> TestResult {
        let uuid = FoodItemUuid::new();

        let mut food_items = MockFoodItemsService::new();

        food_items
            .expect_delete_food_item()
            .once()
            .return_once(|_| Err(FoodItemsServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/admin/food-items/{uuid}"))
            .send(&mocks(food_items).admin_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_food_item_as_user_returns_403() -> TestResult {
        let uuid = FoodItemUuid::new();

        let mut food_items = MockFoodItemsService::new();

        food_items.expect_delete_food_item().never();

        let res = TestClient::delete(format!("http://example.com/admin/food-items/{uuid}"))
            .send(&mocks(food_items).user_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
