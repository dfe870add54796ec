//! Create Category Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use ordering_app::domain::categories::{data::NewCategory, records::CategoryUuid};

use crate::{
    categories::{errors::into_status_error, index::CategoryResponse},
    extensions::*,
    state::State,
};

/// Create Category Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCategoryRequest {
    pub name: String,
    pub addons: Option<String>,
    pub removable_items: Option<String>,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(request: CreateCategoryRequest) -> Self {
        NewCategory {
            uuid: CategoryUuid::new(),
            name: request.name,
            addons: request.addons,
            removable_items: request.removable_items,
        }
    }
}

/// Create Category Handler
#[endpoint(
    tags("categories"),
    summary = "Create Category",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Category created"),
        (status_code = StatusCode::CONFLICT, description = "Category already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admins only"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "categories.create",
    skip_all,
    fields(admin_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCategoryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let admin = depot.admin_uuid_or_403()?;

    tracing::Span::current().record("admin_uuid", tracing::field::display(admin));

    let category = state
        .app
        .categories
        .create_category(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(category_uuid = %category.uuid, name = %category.name, "created category");

    res.status_code(StatusCode::CREATED);

    Ok(Json(category.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use ordering_app::domain::categories::{CategoriesServiceError, MockCategoriesService};

    use crate::test_helpers::MockServices;

    use super::{super::tests::*, *};

    fn mocks(categories: MockCategoriesService) -> MockServices {
        MockServices {
            categories,
            ..MockServices::default()
        }
    }

    fn route() -> Router {
        Router::with_path("admin/categories").post(handler)
    }

    #[tokio::test]
    async fn test_create_category_success() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_create_category()
            .once()
            .withf(|new| new.name == "Pizza" && new.addons.as_deref() == Some("extra cheese"))
            .return_once(|new| Ok(make_category(new.uuid, &new.name)));

        let mut res = TestClient::post("http://example.com/admin/categories")
            .json(&json!({ "name": "Pizza", "addons": "extra cheese" }))
            .send(&mocks(categories).admin_service(route()))
            .await;

        let body: CategoryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.name, "Pizza");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_category_returns_409() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_create_category()
            .once()
            .return_once(|_| Err(CategoriesServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/admin/categories")
            .json(&json!({ "name": "Pizza" }))
            .send(&mocks(categories).admin_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_category_as_user_returns_403() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories.expect_create_category().never();

        let res = TestClient::post("http://example.com/admin/categories")
            .json(&json!({ "name": "Pizza" }))
            .send(&mocks(categories).user_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
