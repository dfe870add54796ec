//! Test Helpers

use jiff::civil::date;

use crate::{
    domain::{
        categories::{
            CategoriesService, CategoriesServiceError,
            data::NewCategory,
            records::{CategoryRecord, CategoryUuid},
        },
        food_items::{
            FoodItemsService, FoodItemsServiceError,
            data::NewFoodItem,
            records::{FoodItemRecord, FoodItemUuid},
        },
        orders::{OrdersService, OrdersServiceError, data::NewCartItem, models::Order},
        promo_codes::data::NewPromoCode,
        users::{
            UsersService, UsersServiceError,
            data::NewUser,
            records::{UserRecord, UserUuid},
        },
    },
    test::TestContext,
};

pub(crate) fn new_user(username: &str) -> NewUser {
    NewUser {
        uuid: UserUuid::new(),
        username: username.to_string(),
        password: format!("{username}-password"),
        phone_number: "+44 20 7946 0000".to_string(),
        address: "1 Test Street".to_string(),
    }
}

pub(crate) fn new_category(name: &str) -> NewCategory {
    NewCategory {
        uuid: CategoryUuid::new(),
        name: name.to_string(),
        addons: None,
        removable_items: None,
    }
}

pub(crate) fn new_food_item(category: CategoryUuid, name: &str, price: u64) -> NewFoodItem {
    NewFoodItem {
        uuid: FoodItemUuid::new(),
        category_uuid: category,
        name: name.to_string(),
        description: None,
        price,
        price_to_make: 0,
        photo: None,
    }
}

/// A promo code valid for the last quarter of 2026.
pub(crate) fn new_promo_code(code: &str, discount: u8) -> NewPromoCode {
    NewPromoCode {
        code: code.to_string(),
        discount,
        valid_from: date(2026, 10, 1),
        valid_to: date(2026, 12, 31),
    }
}

pub(crate) async fn create_user(
    ctx: &TestContext,
    username: &str,
) -> Result<UserRecord, UsersServiceError> {
    ctx.users.register_user(new_user(username)).await
}

pub(crate) async fn create_category(
    ctx: &TestContext,
    name: &str,
) -> Result<CategoryRecord, CategoriesServiceError> {
    ctx.categories.create_category(new_category(name)).await
}

pub(crate) async fn create_food_item(
    ctx: &TestContext,
    category: CategoryUuid,
    name: &str,
    price: u64,
) -> Result<FoodItemRecord, FoodItemsServiceError> {
    ctx.food_items
        .create_food_item(new_food_item(category, name, price))
        .await
}

pub(crate) async fn add_item(
    ctx: &TestContext,
    user: UserUuid,
    food_item: FoodItemUuid,
    quantity: u32,
) -> Result<Order, OrdersServiceError> {
    ctx.orders
        .add_item(
            user,
            NewCartItem {
                food_item_uuid: food_item,
                quantity,
            },
        )
        .await
}
