//! Order Details Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    columns::{to_db_quantity, try_get_amount, try_get_quantity},
    domain::{
        food_items::records::FoodItemUuid,
        orders::records::{OrderItemRecord, OrderUuid},
    },
};

const GET_ORDER_ITEMS_SQL: &str = include_str!("../sql/get_order_items.sql");
const GET_LIVE_FOOD_ITEM_PRICE_SQL: &str = include_str!("../sql/get_live_food_item_price.sql");
const UPSERT_ORDER_DETAIL_SQL: &str = include_str!("../sql/upsert_order_detail.sql");
const LOCK_ORDER_DETAIL_SQL: &str = include_str!("../sql/lock_order_detail.sql");
const SET_ORDER_DETAIL_QUANTITY_SQL: &str = include_str!("../sql/set_order_detail_quantity.sql");
const DELETE_ORDER_DETAIL_SQL: &str = include_str!("../sql/delete_order_detail.sql");
const COUNT_ORDER_DETAILS_SQL: &str = include_str!("../sql/count_order_details.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderDetailsRepository;

impl PgOrderDetailsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Line items for any number of orders, sorted by food name.
    pub(crate) async fn get_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[OrderUuid],
    ) -> Result<Vec<OrderItemRecord>, sqlx::Error> {
        let order_uuids: Vec<Uuid> = orders.iter().copied().map(OrderUuid::into_uuid).collect();

        query_as::<Postgres, OrderItemRecord>(GET_ORDER_ITEMS_SQL)
            .bind(order_uuids)
            .fetch_all(&mut **tx)
            .await
    }

    /// Unit price of a food item that is still on the menu.
    pub(crate) async fn get_live_food_item_price(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        food_item: FoodItemUuid,
    ) -> Result<Option<u64>, sqlx::Error> {
        let price: Option<i64> = query_scalar(GET_LIVE_FOOD_ITEM_PRICE_SQL)
            .bind(food_item.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        price
            .map(u64::try_from)
            .transpose()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "price".to_string(),
                source: Box::new(e),
            })
    }

    /// Insert a line item or add to its existing quantity. Returns the new quantity.
    pub(crate) async fn upsert_order_detail(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        food_item: FoodItemUuid,
        quantity: u32,
    ) -> Result<u32, sqlx::Error> {
        let quantity: i32 = query_scalar(UPSERT_ORDER_DETAIL_SQL)
            .bind(order.into_uuid())
            .bind(food_item.into_uuid())
            .bind(to_db_quantity(quantity, "quantity")?)
            .fetch_one(&mut **tx)
            .await?;

        u32::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })
    }

    pub(crate) async fn lock_order_detail(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        food_item: FoodItemUuid,
    ) -> Result<Option<OrderItemRecord>, sqlx::Error> {
        query_as::<Postgres, OrderItemRecord>(LOCK_ORDER_DETAIL_SQL)
            .bind(order.into_uuid())
            .bind(food_item.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn set_order_detail_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        food_item: FoodItemUuid,
        quantity: u32,
    ) -> Result<(), sqlx::Error> {
        query(SET_ORDER_DETAIL_QUANTITY_SQL)
            .bind(order.into_uuid())
            .bind(food_item.into_uuid())
            .bind(to_db_quantity(quantity, "quantity")?)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn delete_order_detail(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        food_item: FoodItemUuid,
    ) -> Result<(), sqlx::Error> {
        query(DELETE_ORDER_DETAIL_SQL)
            .bind(order.into_uuid())
            .bind(food_item.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn count_order_details(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(COUNT_ORDER_DETAILS_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            food_item_uuid: FoodItemUuid::from_uuid(row.try_get("food_item_uuid")?),
            name: row.try_get("name")?,
            unit_price: try_get_amount(row, "unit_price")?,
            quantity: try_get_quantity(row, "quantity")?,
        })
    }
}
