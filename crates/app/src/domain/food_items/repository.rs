//! Food Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    columns::{to_db_amount, try_get_amount},
    domain::{
        categories::records::CategoryUuid,
        food_items::{
            data::NewFoodItem,
            records::{FoodItemRecord, FoodItemUuid},
        },
    },
};

const CREATE_FOOD_ITEM_SQL: &str = include_str!("sql/create_food_item.sql");
const LIST_FOOD_ITEMS_SQL: &str = include_str!("sql/list_food_items.sql");
const GET_FOOD_ITEM_SQL: &str = include_str!("sql/get_food_item.sql");
const DELETE_FOOD_ITEM_SQL: &str = include_str!("sql/delete_food_item.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgFoodItemsRepository;

impl PgFoodItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_food_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: &NewFoodItem,
    ) -> Result<FoodItemRecord, sqlx::Error> {
        query_as::<Postgres, FoodItemRecord>(CREATE_FOOD_ITEM_SQL)
            .bind(item.uuid.into_uuid())
            .bind(item.category_uuid.into_uuid())
            .bind(item.name.trim())
            .bind(item.description.as_deref())
            .bind(to_db_amount(item.price, "price")?)
            .bind(to_db_amount(item.price_to_make, "price_to_make")?)
            .bind(item.photo.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_food_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: Option<CategoryUuid>,
    ) -> Result<Vec<FoodItemRecord>, sqlx::Error> {
        query_as::<Postgres, FoodItemRecord>(LIST_FOOD_ITEMS_SQL)
            .bind(category.map(CategoryUuid::into_uuid))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_food_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: FoodItemUuid,
    ) -> Result<FoodItemRecord, sqlx::Error> {
        query_as::<Postgres, FoodItemRecord>(GET_FOOD_ITEM_SQL)
            .bind(item.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_food_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: FoodItemUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_FOOD_ITEM_SQL)
            .bind(item.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for FoodItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: FoodItemUuid::from_uuid(row.try_get("uuid")?),
            category_uuid: CategoryUuid::from_uuid(row.try_get("category_uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: try_get_amount(row, "price")?,
            price_to_make: try_get_amount(row, "price_to_make")?,
            photo: row.try_get("photo")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
