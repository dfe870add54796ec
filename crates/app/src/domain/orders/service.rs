//! Orders service.

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;
use rustc_hash::FxHashMap;
use sqlx::{
    Postgres, Transaction,
    error::{DatabaseError, ErrorKind},
};
use tracing::info;

use crate::{
    database::Db,
    domain::{
        food_items::records::FoodItemUuid,
        orders::{
            data::{Checkout, NewCartItem},
            errors::OrdersServiceError,
            models::{Cart, Order},
            records::{OrderItemRecord, OrderRecord, OrderUuid},
            repositories::{PgOrderDetailsRepository, PgOrdersRepository, PgPaymentsRepository},
        },
        promo_codes::repository::PgPromoCodesRepository,
        users::records::UserUuid,
    },
};

/// Flat delivery fee charged on every order, in minor units.
pub const DELIVERY_FEE: u64 = 500;

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    delivery_fee: u64,
    orders_repository: PgOrdersRepository,
    details_repository: PgOrderDetailsRepository,
    payments_repository: PgPaymentsRepository,
    promo_codes_repository: PgPromoCodesRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self::with_delivery_fee(db, DELIVERY_FEE)
    }

    /// Charge `delivery_fee` on newly opened orders instead of [`DELIVERY_FEE`].
    #[must_use]
    pub fn with_delivery_fee(db: Db, delivery_fee: u64) -> Self {
        Self {
            db,
            delivery_fee,
            orders_repository: PgOrdersRepository::new(),
            details_repository: PgOrderDetailsRepository::new(),
            payments_repository: PgPaymentsRepository::new(),
            promo_codes_repository: PgPromoCodesRepository::new(),
        }
    }

    async fn load_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        record: OrderRecord,
    ) -> Result<Order, sqlx::Error> {
        let items = self
            .details_repository
            .get_order_items(tx, &[record.uuid])
            .await?;

        Ok(Order { record, items })
    }

    async fn load_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        records: Vec<OrderRecord>,
    ) -> Result<Vec<Order>, sqlx::Error> {
        let uuids: Vec<OrderUuid> = records.iter().map(|record| record.uuid).collect();

        let mut items_by_order: FxHashMap<OrderUuid, Vec<OrderItemRecord>> = FxHashMap::default();

        for item in self.details_repository.get_order_items(tx, &uuids).await? {
            items_by_order.entry(item.order_uuid).or_default().push(item);
        }

        Ok(records
            .into_iter()
            .map(|record| Order {
                items: items_by_order.remove(&record.uuid).unwrap_or_default(),
                record,
            })
            .collect())
    }

    /// Find or create the user's pending order and lock it.
    ///
    /// A concurrent remove can delete the order between the insert and the lock, so
    /// the pair is attempted a second time before giving up.
    async fn open_pending_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        for _ in 0..2 {
            self.orders_repository
                .ensure_pending_order(tx, user, self.delivery_fee)
                .await
                .map_err(unknown_user)?;

            if let Some(order) = self.orders_repository.lock_pending_order(tx, user).await? {
                return Ok(order);
            }
        }

        Err(OrdersServiceError::NotFound)
    }

    async fn reload_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Order, sqlx::Error> {
        let record = self.orders_repository.get_order(tx, order).await?;

        self.load_order(tx, record).await
    }
}

/// Amount for `quantity` units, as a signed subtotal delta.
fn line_amount(unit_price: u64, quantity: u32) -> Result<i64, OrdersServiceError> {
    unit_price
        .checked_mul(u64::from(quantity))
        .and_then(|amount| i64::try_from(amount).ok())
        .ok_or(OrdersServiceError::InvalidData)
}

/// A foreign key failure while opening an order means the user does not exist.
fn unknown_user(error: sqlx::Error) -> OrdersServiceError {
    match error.as_database_error().map(DatabaseError::kind) {
        Some(ErrorKind::ForeignKeyViolation) => OrdersServiceError::NotFound,
        _ => OrdersServiceError::from(error),
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[tracing::instrument(skip(self), err)]
    async fn add_item(&self, user: UserUuid, item: NewCartItem) -> Result<Order, OrdersServiceError> {
        if item.quantity == 0 {
            return Err(OrdersServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let order = self.open_pending_order(&mut tx, user).await?;

        let unit_price = self
            .details_repository
            .get_live_food_item_price(&mut tx, item.food_item_uuid)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        let amount = line_amount(unit_price, item.quantity)?;

        self.details_repository
            .upsert_order_detail(&mut tx, order.uuid, item.food_item_uuid, item.quantity)
            .await?;

        self.orders_repository
            .adjust_subtotal(&mut tx, order.uuid, amount)
            .await?;

        let order = self.reload_order(&mut tx, order.uuid).await?;

        tx.commit().await?;

        Ok(order)
    }

    #[tracing::instrument(skip(self), err)]
    async fn remove_item(
        &self,
        user: UserUuid,
        food_item: FoodItemUuid,
        quantity: u32,
    ) -> Result<Cart, OrdersServiceError> {
        if quantity == 0 {
            return Err(OrdersServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let order = self
            .orders_repository
            .lock_pending_order(&mut tx, user)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        let line = self
            .details_repository
            .lock_order_detail(&mut tx, order.uuid, food_item)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        let removed = quantity.min(line.quantity);
        let remaining = line.quantity - removed;
        let amount = line_amount(line.unit_price, removed)?;

        if remaining == 0 {
            self.details_repository
                .delete_order_detail(&mut tx, order.uuid, food_item)
                .await?;
        } else {
            self.details_repository
                .set_order_detail_quantity(&mut tx, order.uuid, food_item, remaining)
                .await?;
        }

        self.orders_repository
            .adjust_subtotal(&mut tx, order.uuid, -amount)
            .await?;

        let lines_left = self
            .details_repository
            .count_order_details(&mut tx, order.uuid)
            .await?;

        let cart = if lines_left == 0 {
            self.orders_repository.delete_order(&mut tx, order.uuid).await?;

            Cart::Empty
        } else {
            Cart::Pending(self.reload_order(&mut tx, order.uuid).await?)
        };

        tx.commit().await?;

        Ok(cart)
    }

    async fn get_cart(&self, user: UserUuid) -> Result<Cart, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = match self.orders_repository.get_pending_order(&mut tx, user).await? {
            Some(record) => Cart::Pending(self.load_order(&mut tx, record).await?),
            None => Cart::Empty,
        };

        tx.commit().await?;

        Ok(cart)
    }

    #[tracing::instrument(skip(self), err)]
    async fn apply_promo_code(
        &self,
        user: UserUuid,
        code: String,
        today: Date,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self
            .orders_repository
            .lock_pending_order(&mut tx, user)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        let promo = self
            .promo_codes_repository
            .get_promo_code(&mut tx, code.trim())
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        if !promo.is_valid_on(today) {
            return Err(OrdersServiceError::InvalidPromoCode);
        }

        self.orders_repository
            .set_promo_code(&mut tx, order.uuid, &promo.code)
            .await?;

        let order = self.reload_order(&mut tx, order.uuid).await?;

        tx.commit().await?;

        Ok(order)
    }

    #[tracing::instrument(skip(self, checkout), err)]
    async fn complete_order(
        &self,
        user: UserUuid,
        checkout: Checkout,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self
            .orders_repository
            .lock_pending_order(&mut tx, user)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        let payment = match &checkout.payment {
            Some(payment) => Some(
                self.payments_repository
                    .create_payment(&mut tx, payment)
                    .await?
                    .uuid,
            ),
            None => None,
        };

        let rows_affected = self
            .orders_repository
            .complete_order(&mut tx, order.uuid, payment)
            .await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        let order = self.reload_order(&mut tx, order.uuid).await?;

        tx.commit().await?;

        info!(
            order = %order.record.uuid,
            grand_total = order.record.grand_total(),
            "completed order"
        );

        Ok(order)
    }

    async fn list_user_orders(&self, user: UserUuid) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let records = self.orders_repository.list_user_orders(&mut tx, user).await?;
        let orders = self.load_orders(&mut tx, records).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let records = self.orders_repository.list_orders(&mut tx).await?;
        let orders = self.load_orders(&mut tx, records).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.orders_repository.delete_order(&mut tx, order).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Add units of a food item to the user's cart, opening a pending order if needed.
    async fn add_item(&self, user: UserUuid, item: NewCartItem) -> Result<Order, OrdersServiceError>;

    /// Remove up to `quantity` units of a food item from the user's cart.
    ///
    /// Returns [`Cart::Empty`] once the last line item is gone.
    async fn remove_item(
        &self,
        user: UserUuid,
        food_item: FoodItemUuid,
        quantity: u32,
    ) -> Result<Cart, OrdersServiceError>;

    /// Retrieve the user's cart.
    async fn get_cart(&self, user: UserUuid) -> Result<Cart, OrdersServiceError>;

    /// Attach a promo code to the user's pending order if it is valid on `today`.
    async fn apply_promo_code(
        &self,
        user: UserUuid,
        code: String,
        today: Date,
    ) -> Result<Order, OrdersServiceError>;

    /// Check out the user's pending order.
    async fn complete_order(
        &self,
        user: UserUuid,
        checkout: Checkout,
    ) -> Result<Order, OrdersServiceError>;

    /// Order history for one user, newest first.
    async fn list_user_orders(&self, user: UserUuid) -> Result<Vec<Order>, OrdersServiceError>;

    /// Every order in the system, newest first.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::{
        domain::{
            food_items::FoodItemsService,
            orders::{
                data::NewPayment,
                records::{OrderStatus, PaymentUuid},
            },
            promo_codes::PromoCodesService,
        },
        test::{
            TestContext,
            helpers::{add_item, create_category, create_food_item, create_user, new_promo_code},
        },
    };

    use super::*;

    #[tokio::test]
    async fn add_item_opens_pending_order() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;

        let order = add_item(&ctx, user.uuid, burger.uuid, 2).await?;

        assert_eq!(order.record.user_uuid, user.uuid);
        assert_eq!(order.record.status, OrderStatus::Pending);
        assert_eq!(order.record.subtotal, 2500);
        assert_eq!(order.record.delivery_fee, DELIVERY_FEE);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.items[0].line_total(), 2500);

        Ok(())
    }

    #[tokio::test]
    async fn add_item_twice_increments_quantity_on_one_line() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;

        let first = add_item(&ctx, user.uuid, burger.uuid, 1).await?;
        let second = add_item(&ctx, user.uuid, burger.uuid, 1).await?;

        assert_eq!(first.record.uuid, second.record.uuid);
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].quantity, 2);
        assert_eq!(second.record.subtotal, 2500);

        Ok(())
    }

    /// Stored subtotal must equal the sum of the line totals.
    fn assert_subtotal_consistent(order: &Order, step: &str) {
        let line_totals: u64 = order.items.iter().map(OrderItemRecord::line_total).sum();

        assert_eq!(order.record.subtotal, line_totals, "subtotal drifted after {step}");
    }

    /// Check the returned cart and a freshly loaded one, then return the subtotal.
    async fn checked_subtotal(
        ctx: &TestContext,
        user: UserUuid,
        cart: &Cart,
        step: &str,
    ) -> Result<Option<u64>, OrdersServiceError> {
        let reloaded = ctx.orders.get_cart(user).await?;

        assert_eq!(&reloaded, cart, "reloaded cart differs after {step}");

        Ok(cart.order().map(|order| {
            assert_subtotal_consistent(order, step);

            order.record.subtotal
        }))
    }

    #[tokio::test]
    async fn subtotal_tracks_line_totals_after_every_change() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 500).await?;
        let fries = create_food_item(&ctx, category.uuid, "Fries", 350).await?;
        let shake = create_food_item(&ctx, category.uuid, "Shake", 425).await?;

        let cart = Cart::Pending(add_item(&ctx, user.uuid, burger.uuid, 2).await?);
        assert_eq!(
            checked_subtotal(&ctx, user.uuid, &cart, "adding two burgers").await?,
            Some(1000)
        );

        let cart = Cart::Pending(add_item(&ctx, user.uuid, burger.uuid, 1).await?);
        assert_eq!(
            checked_subtotal(&ctx, user.uuid, &cart, "adding a third burger").await?,
            Some(1500)
        );

        let cart = ctx.orders.remove_item(user.uuid, burger.uuid, 1).await?;
        assert_eq!(
            checked_subtotal(&ctx, user.uuid, &cart, "removing a burger").await?,
            Some(1000)
        );

        let cart = Cart::Pending(add_item(&ctx, user.uuid, fries.uuid, 3).await?);
        assert_eq!(
            checked_subtotal(&ctx, user.uuid, &cart, "adding fries").await?,
            Some(2050)
        );

        let cart = Cart::Pending(add_item(&ctx, user.uuid, shake.uuid, 1).await?);
        assert_eq!(
            checked_subtotal(&ctx, user.uuid, &cart, "adding a shake").await?,
            Some(2475)
        );

        let cart = ctx.orders.remove_item(user.uuid, fries.uuid, 2).await?;
        assert_eq!(
            checked_subtotal(&ctx, user.uuid, &cart, "removing two fries").await?,
            Some(1775)
        );

        let cart = ctx.orders.remove_item(user.uuid, burger.uuid, 10).await?;
        assert_eq!(
            checked_subtotal(&ctx, user.uuid, &cart, "over-removing burgers").await?,
            Some(775)
        );

        let cart = ctx.orders.remove_item(user.uuid, fries.uuid, 1).await?;
        assert_eq!(
            checked_subtotal(&ctx, user.uuid, &cart, "removing the last fries").await?,
            Some(425)
        );

        let cart = ctx.orders.remove_item(user.uuid, shake.uuid, 5).await?;
        assert_eq!(cart, Cart::Empty);
        assert_eq!(
            checked_subtotal(&ctx, user.uuid, &cart, "emptying the cart").await?,
            None
        );

        let cart = Cart::Pending(add_item(&ctx, user.uuid, fries.uuid, 2).await?);
        assert_eq!(
            checked_subtotal(&ctx, user.uuid, &cart, "reopening the cart").await?,
            Some(700)
        );

        let cart = Cart::Pending(add_item(&ctx, user.uuid, burger.uuid, 1).await?);
        assert_eq!(
            checked_subtotal(&ctx, user.uuid, &cart, "adding to the reopened cart").await?,
            Some(1200)
        );

        let order = cart.order().ok_or("expected a pending cart")?;

        assert_eq!(order.record.grand_total(), 1200 + DELIVERY_FEE);

        Ok(())
    }

    #[tokio::test]
    async fn add_item_survives_order_deleted_while_waiting_for_lock() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;

        let first = add_item(&ctx, user.uuid, burger.uuid, 1).await?;

        // Hold the pending order's row lock the way a remove does.
        let mut remover = ctx.db.pool().begin().await?;

        sqlx::query("SELECT uuid FROM orders WHERE uuid = $1 FOR UPDATE")
            .bind(first.record.uuid.into_uuid())
            .execute(&mut *remover)
            .await?;

        let orders = ctx.orders.clone();
        let user_uuid = user.uuid;
        let item = NewCartItem {
            food_item_uuid: burger.uuid,
            quantity: 2,
        };

        let adding = tokio::spawn(async move { orders.add_item(user_uuid, item).await });

        let mut blocked = false;

        for _ in 0..1000 {
            let waiting: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM pg_stat_activity \
                 WHERE datname = current_database() AND wait_event_type = 'Lock'",
            )
            .fetch_one(ctx.db.pool())
            .await?;

            if waiting > 0 {
                blocked = true;
                break;
            }

            tokio::task::yield_now().await;
        }

        assert!(blocked, "add_item never waited on the order lock");

        sqlx::query("DELETE FROM orders WHERE uuid = $1")
            .bind(first.record.uuid.into_uuid())
            .execute(&mut *remover)
            .await?;

        remover.commit().await?;

        let order = adding.await??;

        assert_ne!(order.record.uuid, first.record.uuid);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.record.subtotal, 2500);

        Ok(())
    }

    #[tokio::test]
    async fn add_item_quantity_overflow_returns_invalid_data() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Sides").await?;
        let mint = create_food_item(&ctx, category.uuid, "Mint", 1).await?;

        let quantity = u32::try_from(i32::MAX)?;

        add_item(&ctx, user.uuid, mint.uuid, quantity).await?;

        let result = add_item(&ctx, user.uuid, mint.uuid, 1).await;

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );

        let order = ctx.orders.get_cart(user.uuid).await?;
        let order = order.order().ok_or("expected a pending cart")?;

        assert_eq!(order.items[0].quantity, quantity);
        assert_subtotal_consistent(order, "the rejected add");

        Ok(())
    }

    #[tokio::test]
    async fn add_item_zero_quantity_returns_invalid_data() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;

        let result = add_item(&ctx, user.uuid, burger.uuid, 0).await;

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_unknown_food_item_returns_not_found_and_leaves_no_order() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;

        let result = add_item(&ctx, user.uuid, FoodItemUuid::new(), 1).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
        assert_eq!(ctx.orders.get_cart(user.uuid).await?, Cart::Empty);

        Ok(())
    }

    #[tokio::test]
    async fn add_deleted_food_item_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;

        ctx.food_items.delete_food_item(burger.uuid).await?;

        let result = add_item(&ctx, user.uuid, burger.uuid, 1).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_item_for_unknown_user_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;

        let result = add_item(&ctx, UserUuid::new(), burger.uuid, 1).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_adds_share_one_pending_order() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;

        let mut handles = Vec::new();

        for _ in 0..8 {
            let orders = ctx.orders.clone();
            let user_uuid = user.uuid;
            let item = NewCartItem {
                food_item_uuid: burger.uuid,
                quantity: 1,
            };

            handles.push(tokio::spawn(async move {
                orders.add_item(user_uuid, item).await
            }));
        }

        for handle in handles {
            handle.await??;
        }

        let pending: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM orders WHERE user_uuid = $1 AND status = 'pending'",
        )
        .bind(user.uuid.into_uuid())
        .fetch_one(ctx.db.pool())
        .await?;

        let Cart::Pending(order) = ctx.orders.get_cart(user.uuid).await? else {
            panic!("expected a pending cart");
        };

        assert_eq!(pending, 1);
        assert_eq!(order.items[0].quantity, 8);
        assert_eq!(order.record.subtotal, 8 * 1250);

        Ok(())
    }

    #[tokio::test]
    async fn get_cart_without_pending_order_is_empty() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;

        assert_eq!(ctx.orders.get_cart(user.uuid).await?, Cart::Empty);

        Ok(())
    }

    #[tokio::test]
    async fn remove_item_decrements_one_unit() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;

        add_item(&ctx, user.uuid, burger.uuid, 3).await?;

        let cart = ctx.orders.remove_item(user.uuid, burger.uuid, 1).await?;

        let order = cart.order().ok_or("expected a pending cart")?;

        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.record.subtotal, 2500);

        Ok(())
    }

    #[tokio::test]
    async fn remove_more_than_present_removes_whole_line() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;
        let fries = create_food_item(&ctx, category.uuid, "Fries", 350).await?;

        add_item(&ctx, user.uuid, burger.uuid, 2).await?;
        add_item(&ctx, user.uuid, fries.uuid, 1).await?;

        let cart = ctx.orders.remove_item(user.uuid, burger.uuid, 10).await?;

        let order = cart.order().ok_or("expected a pending cart")?;

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].food_item_uuid, fries.uuid);
        assert_eq!(order.record.subtotal, 350);

        Ok(())
    }

    #[tokio::test]
    async fn removing_last_unit_deletes_pending_order() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;

        let order = add_item(&ctx, user.uuid, burger.uuid, 1).await?;

        let cart = ctx.orders.remove_item(user.uuid, burger.uuid, 1).await?;

        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE uuid = $1")
            .bind(order.record.uuid.into_uuid())
            .fetch_one(ctx.db.pool())
            .await?;

        assert_eq!(cart, Cart::Empty);
        assert_eq!(remaining, 0);

        Ok(())
    }

    #[tokio::test]
    async fn remove_item_without_pending_order_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;

        let result = ctx.orders.remove_item(user.uuid, FoodItemUuid::new(), 1).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn remove_item_not_in_cart_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;
        let fries = create_food_item(&ctx, category.uuid, "Fries", 350).await?;

        add_item(&ctx, user.uuid, burger.uuid, 1).await?;

        let result = ctx.orders.remove_item(user.uuid, fries.uuid, 1).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn deleted_food_item_stays_visible_in_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;

        add_item(&ctx, user.uuid, burger.uuid, 1).await?;
        ctx.food_items.delete_food_item(burger.uuid).await?;

        let cart = ctx.orders.get_cart(user.uuid).await?;
        let order = cart.order().ok_or("expected a pending cart")?;

        assert_eq!(order.items[0].name, "Cheeseburger");

        Ok(())
    }

    #[tokio::test]
    async fn apply_promo_code_discounts_grand_total() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1000).await?;

        ctx.promo_codes
            .create_promo_code(new_promo_code("AUTUMN", 20))
            .await?;

        add_item(&ctx, user.uuid, burger.uuid, 2).await?;

        let order = ctx
            .orders
            .apply_promo_code(user.uuid, "AUTUMN".to_string(), date(2026, 10, 18))
            .await?;

        assert_eq!(order.record.promo_code.as_deref(), Some("AUTUMN"));
        assert_eq!(order.record.discount(), 400);
        assert_eq!(order.record.grand_total(), 2000 - 400 + DELIVERY_FEE);

        Ok(())
    }

    #[tokio::test]
    async fn apply_expired_promo_code_returns_invalid_promo_code() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1000).await?;

        ctx.promo_codes
            .create_promo_code(new_promo_code("AUTUMN", 20))
            .await?;

        add_item(&ctx, user.uuid, burger.uuid, 1).await?;

        let result = ctx
            .orders
            .apply_promo_code(user.uuid, "AUTUMN".to_string(), date(2027, 1, 1))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidPromoCode)),
            "expected InvalidPromoCode, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn apply_unknown_promo_code_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1000).await?;

        add_item(&ctx, user.uuid, burger.uuid, 1).await?;

        let result = ctx
            .orders
            .apply_promo_code(user.uuid, "NOPE".to_string(), date(2026, 10, 18))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn complete_order_records_payment_and_empties_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;

        add_item(&ctx, user.uuid, burger.uuid, 1).await?;

        let payment_uuid = PaymentUuid::new();

        let order = ctx
            .orders
            .complete_order(
                user.uuid,
                Checkout {
                    payment: Some(NewPayment {
                        uuid: payment_uuid,
                        payment_method: "card".to_string(),
                        transaction_id: "txn_123".to_string(),
                    }),
                },
            )
            .await?;

        let payment_status: String =
            sqlx::query_scalar("SELECT payment_status FROM payments WHERE uuid = $1")
                .bind(payment_uuid.into_uuid())
                .fetch_one(ctx.db.pool())
                .await?;

        assert_eq!(order.record.status, OrderStatus::Completed);
        assert_eq!(order.record.payment_uuid, Some(payment_uuid));
        assert_eq!(payment_status, "paid");
        assert_eq!(ctx.orders.get_cart(user.uuid).await?, Cart::Empty);

        Ok(())
    }

    #[tokio::test]
    async fn adding_after_checkout_opens_new_order() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;

        let first = add_item(&ctx, user.uuid, burger.uuid, 1).await?;
        ctx.orders.complete_order(user.uuid, Checkout::default()).await?;

        let second = add_item(&ctx, user.uuid, burger.uuid, 1).await?;

        assert_ne!(first.record.uuid, second.record.uuid);
        assert_eq!(second.record.subtotal, 1250);

        Ok(())
    }

    #[tokio::test]
    async fn complete_order_without_pending_order_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;

        let result = ctx.orders.complete_order(user.uuid, Checkout::default()).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_user_orders_returns_only_that_users_orders() -> TestResult {
        let ctx = TestContext::new().await;
        let ada = create_user(&ctx, "ada").await?;
        let grace = create_user(&ctx, "grace").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;
        let fries = create_food_item(&ctx, category.uuid, "Fries", 350).await?;

        add_item(&ctx, ada.uuid, burger.uuid, 1).await?;
        ctx.orders.complete_order(ada.uuid, Checkout::default()).await?;
        add_item(&ctx, ada.uuid, fries.uuid, 2).await?;
        add_item(&ctx, grace.uuid, burger.uuid, 1).await?;

        let orders = ctx.orders.list_user_orders(ada.uuid).await?;

        assert_eq!(orders.len(), 2);
        assert!(orders.iter().all(|order| order.record.user_uuid == ada.uuid));
        assert_eq!(orders[0].record.status, OrderStatus::Pending);
        assert_eq!(orders[0].items[0].food_item_uuid, fries.uuid);
        assert_eq!(orders[1].record.status, OrderStatus::Completed);
        assert_eq!(orders[1].items[0].food_item_uuid, burger.uuid);

        let all = ctx.orders.list_orders().await?;

        assert_eq!(all.len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn delete_order_removes_order_and_lines() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;

        let order = add_item(&ctx, user.uuid, burger.uuid, 2).await?;

        ctx.orders.delete_order(order.record.uuid).await?;

        let lines: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM order_details WHERE order_uuid = $1")
                .bind(order.record.uuid.into_uuid())
                .fetch_one(ctx.db.pool())
                .await?;

        assert_eq!(lines, 0);
        assert_eq!(ctx.orders.get_cart(user.uuid).await?, Cart::Empty);

        let again = ctx.orders.delete_order(order.record.uuid).await;

        assert!(
            matches!(again, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {again:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn custom_delivery_fee_applies_to_new_orders() -> TestResult {
        let ctx = TestContext::new().await;
        let user = create_user(&ctx, "ada").await?;
        let category = create_category(&ctx, "Burgers").await?;
        let burger = create_food_item(&ctx, category.uuid, "Cheeseburger", 1250).await?;

        let orders = PgOrdersService::with_delivery_fee(ctx.app_db(), 0);

        let order = orders
            .add_item(
                user.uuid,
                NewCartItem {
                    food_item_uuid: burger.uuid,
                    quantity: 1,
                },
            )
            .await?;

        assert_eq!(order.record.delivery_fee, 0);
        assert_eq!(order.record.grand_total(), 1250);

        Ok(())
    }
}
