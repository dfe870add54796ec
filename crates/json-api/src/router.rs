//! App Router

use salvo::Router;

use crate::{
    auth, cart, categories, food_items, orders, promo_codes, sessions, stats, users,
};

/// Every API route. Routes under the bearer-token middleware still check the
/// principal kind themselves.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(public_router())
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(user_router())
                .push(admin_router()),
        )
}

fn public_router() -> Router {
    Router::new()
        .push(Router::with_path("users").post(users::create::handler))
        .push(Router::with_path("login").post(sessions::login::handler))
        .push(Router::with_path("admin/login").post(sessions::admin_login::handler))
        .push(Router::with_path("categories").get(categories::index::handler))
        .push(
            Router::with_path("food-items")
                .get(food_items::index::handler)
                .push(
                    Router::with_path("{food_item}")
                        .get(food_items::get::handler)
                        .push(
                            Router::with_path("feedback")
                                .get(food_items::feedback::index::handler),
                        ),
                ),
        )
        .push(Router::with_path("best-sellers").get(stats::best_sellers::handler))
}

fn user_router() -> Router {
    Router::new()
        .push(Router::with_path("logout").post(sessions::logout::handler))
        .push(
            Router::with_path("food-items/{food_item}/feedback")
                .post(food_items::feedback::create::handler),
        )
        .push(
            Router::with_path("cart")
                .get(cart::get::handler)
                .push(
                    Router::with_path("items")
                        .post(cart::items::create::handler)
                        .push(Router::with_path("{food_item}").delete(cart::items::delete::handler)),
                )
                .push(Router::with_path("promo-code").put(cart::promo_code::handler))
                .push(Router::with_path("checkout").post(cart::checkout::handler)),
        )
        .push(Router::with_path("orders").get(orders::history::handler))
}

fn admin_router() -> Router {
    Router::with_path("admin")
        .push(Router::with_path("categories").post(categories::create::handler))
        .push(
            Router::with_path("food-items")
                .post(food_items::create::handler)
                .push(Router::with_path("{food_item}").delete(food_items::delete::handler)),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .push(Router::with_path("{order}").delete(orders::delete::handler)),
        )
        .push(
            Router::with_path("promo-codes")
                .get(promo_codes::index::handler)
                .post(promo_codes::create::handler),
        )
        .push(
            Router::with_path("stats")
                .push(Router::with_path("daily").get(stats::daily::handler))
                .push(Router::with_path("item-of-month").get(stats::item_of_month::handler)),
        )
}
