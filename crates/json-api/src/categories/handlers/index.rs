//! Category Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ordering_app::domain::categories::records::CategoryRecord;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    /// The unique identifier of the category
    pub uuid: Uuid,

    pub name: String,

    /// Extras that can be added to items in this category
    pub addons: Option<String>,

    /// Ingredients that can be left out of items in this category
    pub removable_items: Option<String>,

    /// The date and time the category was created
    pub created_at: String,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        Self {
            uuid: category.uuid.into_uuid(),
            name: category.name,
            addons: category.addons,
            removable_items: category.removable_items,
            created_at: category.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesResponse {
    /// Categories ordered by name
    pub categories: Vec<CategoryResponse>,
}

/// Category Index Handler
///
/// Returns every menu category.
#[endpoint(tags("categories"), summary = "List Categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CategoriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .categories
        .list_categories()
        .await
        .or_500("failed to fetch categories")?;

    Ok(Json(CategoriesResponse {
        categories: categories.into_iter().map(Into::into).collect(),
    }))
}
