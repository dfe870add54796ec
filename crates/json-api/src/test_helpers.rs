//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil::date};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use ordering_app::{
    auth::{MockAuthService, Principal},
    context::AppContext,
    domain::{
        admins::records::AdminUuid,
        categories::{MockCategoriesService, records::CategoryUuid},
        feedback::MockFeedbackService,
        food_items::{
            MockFoodItemsService,
            records::{FoodItemRecord, FoodItemUuid},
        },
        orders::{
            MockOrdersService,
            models::Order,
            records::{OrderItemRecord, OrderRecord, OrderStatus, OrderUuid},
        },
        promo_codes::MockPromoCodesService,
        stats::MockStatsService,
        users::{MockUsersService, records::UserUuid},
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());
pub(crate) const TEST_ADMIN_UUID: AdminUuid = AdminUuid::from_uuid(Uuid::max());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_principal(Principal::User(TEST_USER_UUID));
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_principal(Principal::Admin(TEST_ADMIN_UUID));
    ctrl.call_next(req, depot, res).await;
}

/// One mock per service. Any call without a matching expectation fails the test.
#[derive(Default)]
pub(crate) struct MockServices {
    pub(crate) auth: MockAuthService,
    pub(crate) users: MockUsersService,
    pub(crate) categories: MockCategoriesService,
    pub(crate) food_items: MockFoodItemsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) promo_codes: MockPromoCodesService,
    pub(crate) feedback: MockFeedbackService,
    pub(crate) stats: MockStatsService,
}

impl MockServices {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            auth: Arc::new(self.auth),
            users: Arc::new(self.users),
            categories: Arc::new(self.categories),
            food_items: Arc::new(self.food_items),
            orders: Arc::new(self.orders),
            promo_codes: Arc::new(self.promo_codes),
            feedback: Arc::new(self.feedback),
            stats: Arc::new(self.stats),
        })
    }

    /// Serve `route` without an authenticated principal.
    pub(crate) fn public_service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }

    /// Serve `route` as [`TEST_USER_UUID`].
    pub(crate) fn user_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_user)
                .push(route),
        )
    }

    /// Serve `route` as [`TEST_ADMIN_UUID`].
    pub(crate) fn admin_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_admin)
                .push(route),
        )
    }
}

pub(crate) fn orders_mock(orders: MockOrdersService) -> MockServices {
    MockServices {
        orders,
        ..MockServices::default()
    }
}

pub(crate) fn make_food_item(uuid: FoodItemUuid, price: u64) -> FoodItemRecord {
    FoodItemRecord {
        uuid,
        category_uuid: CategoryUuid::from_uuid(Uuid::nil()),
        name: "Margherita".to_string(),
        description: Some("Tomato, mozzarella, basil".to_string()),
        price,
        price_to_make: price / 2,
        photo: None,
        created_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

/// A pending order for [`TEST_USER_UUID`] holding `quantity` of one food item.
pub(crate) fn make_order(food_item: FoodItemUuid, unit_price: u64, quantity: u32) -> Order {
    let uuid = OrderUuid::new();

    Order {
        record: OrderRecord {
            uuid,
            user_uuid: TEST_USER_UUID,
            status: OrderStatus::Pending,
            order_date: date(2026, 10, 18),
            subtotal: unit_price * u64::from(quantity),
            delivery_fee: 500,
            promo_code: None,
            promo_discount: None,
            payment_uuid: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        },
        items: vec![OrderItemRecord {
            order_uuid: uuid,
            food_item_uuid: food_item,
            name: "Margherita".to_string(),
            unit_price,
            quantity,
        }],
    }
}
