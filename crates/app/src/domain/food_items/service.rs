//! Food items service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        categories::records::CategoryUuid,
        food_items::{
            data::NewFoodItem,
            errors::FoodItemsServiceError,
            records::{FoodItemRecord, FoodItemUuid},
            repository::PgFoodItemsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgFoodItemsService {
    db: Db,
    repository: PgFoodItemsRepository,
}

impl PgFoodItemsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgFoodItemsRepository::new(),
        }
    }
}

#[async_trait]
impl FoodItemsService for PgFoodItemsService {
    async fn create_food_item(
        &self,
        item: NewFoodItem,
    ) -> Result<FoodItemRecord, FoodItemsServiceError> {
        if item.name.trim().is_empty() {
            return Err(FoodItemsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_food_item(&mut tx, &item).await?;

        tx.commit().await?;

        tracing::info!(food_item = %created.uuid, name = %created.name, "created food item");

        Ok(created)
    }

    async fn list_food_items(
        &self,
        category: Option<CategoryUuid>,
    ) -> Result<Vec<FoodItemRecord>, FoodItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.repository.list_food_items(&mut tx, category).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn get_food_item(
        &self,
        item: FoodItemUuid,
    ) -> Result<FoodItemRecord, FoodItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let item = self.repository.get_food_item(&mut tx, item).await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn delete_food_item(&self, item: FoodItemUuid) -> Result<(), FoodItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_food_item(&mut tx, item).await?;

        if rows_affected == 0 {
            return Err(FoodItemsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait FoodItemsService: Send + Sync {
    /// Creates a new food item in an existing category.
    async fn create_food_item(
        &self,
        item: NewFoodItem,
    ) -> Result<FoodItemRecord, FoodItemsServiceError>;

    /// Retrieves live food items, optionally restricted to one category.
    async fn list_food_items(
        &self,
        category: Option<CategoryUuid>,
    ) -> Result<Vec<FoodItemRecord>, FoodItemsServiceError>;

    /// Retrieve a single live food item.
    async fn get_food_item(
        &self,
        item: FoodItemUuid,
    ) -> Result<FoodItemRecord, FoodItemsServiceError>;

    /// Removes a food item from the menu. Existing order lines keep referencing it.
    async fn delete_food_item(&self, item: FoodItemUuid) -> Result<(), FoodItemsServiceError>;
}
