//! Checkout Handler

use std::{fmt, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use ordering_app::domain::orders::{
    data::{Checkout, NewPayment},
    records::PaymentUuid,
};

use crate::{
    cart::errors::into_status_error, extensions::*, observability,
    orders::responses::OrderResponse, state::State,
};

/// Payment details captured at checkout
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentRequest {
    /// e.g. `card` or `cash`
    pub payment_method: String,

    /// Reference issued by the payment provider
    pub transaction_id: String,
}

impl fmt::Debug for PaymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentRequest")
            .field("payment_method", &self.payment_method)
            .field("transaction_id", &"**redacted**")
            .finish()
    }
}

/// Checkout Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    #[serde(default)]
    pub payment: Option<PaymentRequest>,
}

impl From<CheckoutRequest> for Checkout {
    fn from(request: CheckoutRequest) -> Self {
        Checkout {
            payment: request.payment.map(|payment| NewPayment {
                uuid: PaymentUuid::new(),
                payment_method: payment.payment_method,
                transaction_id: payment.transaction_id,
            }),
        }
    }
}

/// Checkout Handler
///
/// Completes the caller's pending order. The next item added opens a new cart.
#[endpoint(
    tags("cart"),
    summary = "Checkout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order completed"),
        (status_code = StatusCode::NOT_FOUND, description = "No pending order"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Users only"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.checkout",
    skip_all,
    fields(
        user_uuid = tracing::field::Empty,
        order_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_403()?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));

    let order = state
        .app
        .orders
        .complete_order(user, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    span.record("order_uuid", tracing::field::display(order.record.uuid));

    observability::record_order_completed();

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use ordering_app::domain::{
        food_items::records::FoodItemUuid,
        orders::{MockOrdersService, OrdersServiceError, records::OrderStatus},
    };

    use crate::test_helpers::{TEST_USER_UUID, make_order, orders_mock};

    use super::*;

    fn route() -> Router {
        Router::with_path("cart/checkout").post(handler)
    }

    #[tokio::test]
    async fn test_checkout_with_payment() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_complete_order()
            .once()
            .withf(|user, checkout| {
                *user == TEST_USER_UUID
                    && checkout
                        .payment
                        .as_ref()
                        .is_some_and(|payment| payment.transaction_id == "txn_123")
            })
            .return_once(|_, checkout| {
                let mut order = make_order(FoodItemUuid::new(), 1200, 1);

                order.record.status = OrderStatus::Completed;
                order.record.payment_uuid = checkout.payment.map(|payment| payment.uuid);

                Ok(order)
            });

        let mut res = TestClient::post("http://example.com/cart/checkout")
            .json(&json!({ "payment": { "payment_method": "card", "transaction_id": "txn_123" } }))
            .send(&orders_mock(orders).user_service(route()))
            .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, "completed");
        assert!(body.payment_uuid.is_some());
        assert_eq!(body.grand_total, 1700);

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_without_payment() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_complete_order()
            .once()
            .withf(|_, checkout| checkout.payment.is_none())
            .return_once(|_, _| {
                let mut order = make_order(FoodItemUuid::new(), 1200, 1);

                order.record.status = OrderStatus::Completed;

                Ok(order)
            });

        let res = TestClient::post("http://example.com/cart/checkout")
            .json(&json!({}))
            .send(&orders_mock(orders).user_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_without_pending_order_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_complete_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let res = TestClient::post("http://example.com/cart/checkout")
            .json(&json!({}))
            .send(&orders_mock(orders).user_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[test]
    fn payment_debug_redacts_transaction_id() {
        let payment = PaymentRequest {
            payment_method: "card".to_string(),
            transaction_id: "txn_secret".to_string(),
        };

        assert!(!format!("{payment:?}").contains("txn_secret"));
    }
}
