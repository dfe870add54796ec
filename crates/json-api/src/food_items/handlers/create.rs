//! Create Food Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ordering_app::domain::food_items::{data::NewFoodItem, records::FoodItemUuid};

use crate::{
    extensions::*,
    food_items::{errors::into_status_error, get::FoodItemResponse},
    state::State,
};

/// Create Food Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateFoodItemRequest {
    pub category_uuid: Uuid,
    pub name: String,
    pub description: Option<String>,

    /// Unit price in pence/cents
    pub price: u64,

    /// Cost to produce one unit, used for net income
    #[serde(default)]
    pub price_to_make: u64,

    pub photo: Option<String>,
}

impl From<CreateFoodItemRequest> for NewFoodItem {
    fn from(request: CreateFoodItemRequest) -> Self {
        NewFoodItem {
            uuid: FoodItemUuid::new(),
            category_uuid: request.category_uuid.into(),
            name: request.name,
            description: request.description,
            price: request.price,
            price_to_make: request.price_to_make,
            photo: request.photo,
        }
    }
}

/// Create Food Item Handler
#[endpoint(
    tags("food-items"),
    summary = "Create Food Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Food item created"),
        (status_code = StatusCode::CONFLICT, description = "Food item already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admins only"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "food_items.create",
    skip_all,
    fields(admin_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateFoodItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<FoodItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let admin = depot.admin_uuid_or_403()?;

    tracing::Span::current().record("admin_uuid", tracing::field::display(admin));

    let item = state
        .app
        .food_items
        .create_food_item(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(food_item_uuid = %item.uuid, name = %item.name, "created food item");

    res.add_header(LOCATION, format!("/food-items/{}", item.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(item.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use ordering_app::domain::{
        categories::records::CategoryUuid,
        food_items::{FoodItemsServiceError, MockFoodItemsService},
    };

    use crate::test_helpers::{MockServices, make_food_item};

    use super::*;

    fn make_service(food_items: MockFoodItemsService) -> Service {
        MockServices {
            food_items,
            ..MockServices::default()
        }
        .admin_service(Router::with_path("admin/food-items").post(handler))
    }

    #[tokio::test]
    async fn test_create_food_item_success() -> TestResult {
        let category = CategoryUuid::new();

        let mut food_items = MockFoodItemsService::new();

        food_items
            .expect_create_food_item()
            .once()
            .withf(move |new| {
                new.category_uuid == category
                    && new.name == "Margherita"
                    && new.price == 850
                    && new.price_to_make == 300
            })
            .return_once(|new| Ok(make_food_item(new.uuid, new.price)));

        let mut res = TestClient::post("http://example.com/admin/food-items")
            .json(&json!({
                "category_uuid": category.into_uuid(),
                "name": "Margherita",
                "price": 850,
                "price_to_make": 300,
            }))
            .send(&make_service(food_items))
            .await;

        let body: FoodItemResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/food-items/{}", body.uuid).as_str()));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_food_item_unknown_category_returns_400() -> TestResult {
        let mut food_items = MockFoodItemsService::new();

        food_items
            .expect_create_food_item()
            .once()
            .return_once(|_| Err(FoodItemsServiceError::InvalidReference));

        let res = TestClient::post("http://example.com/admin/food-items")
            .json(&json!({
                "category_uuid": Uuid::now_v7(),
                "name": "Margherita",
                "price": 850,
            }))
            .send(&make_service(food_items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_food_item_returns_409() -> TestResult {
        let mut food_items = MockFoodItemsService::new();

        food_items
            .expect_create_food_item()
            .once()
            .return_once(|_| Err(FoodItemsServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/admin/food-items")
            .json(&json!({
                "category_uuid": Uuid::now_v7(),
                "name": "Margherita",
                "price": 850,
            }))
            .send(&make_service(food_items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
