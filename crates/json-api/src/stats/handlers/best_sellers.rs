//! Best Sellers Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    state::State,
    stats::{BestSellerResponse, errors::into_status_error},
};

const DEFAULT_LIMIT: u32 = 5;
const MAX_LIMIT: u32 = 50;

/// Best Sellers Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BestSellersResponse {
    /// Food items ordered by units sold, most first
    pub best_sellers: Vec<BestSellerResponse>,
}

/// Best Sellers Handler
///
/// All-time best sellers across completed orders. Public.
#[endpoint(
    tags("stats"),
    summary = "Best Sellers",
    responses(
        (status_code = StatusCode::OK, description = "Best sellers"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "stats.best_sellers", skip(limit, depot), err)]
pub(crate) async fn handler(
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<BestSellersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let limit = limit.into_inner().unwrap_or(DEFAULT_LIMIT);

    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(StatusError::bad_request().brief("\"limit\" must be between 1 and 50"));
    }

    let best_sellers = state
        .app
        .stats
        .best_sellers(limit)
        .await
        .map_err(into_status_error)?;

    Ok(Json(BestSellersResponse {
        best_sellers: best_sellers.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use ordering_app::domain::stats::MockStatsService;

    use crate::test_helpers::MockServices;

    use super::{super::tests::*, *};

    fn mocks(stats: MockStatsService) -> MockServices {
        MockServices {
            stats,
            ..MockServices::default()
        }
    }

    fn route() -> Router {
        Router::with_path("best-sellers").get(handler)
    }

    #[tokio::test]
    async fn test_best_sellers_default_limit() -> TestResult {
        let mut stats = MockStatsService::new();

        stats
            .expect_best_sellers()
            .once()
            .withf(|limit| *limit == DEFAULT_LIMIT)
            .return_once(|_| {
                Ok(vec![
                    make_best_seller("Margherita", 30),
                    make_best_seller("Calzone", 12),
                ])
            });

        let mut res = TestClient::get("http://example.com/best-sellers")
            .send(&mocks(stats).public_service(route()))
            .await;

        let body: BestSellersResponse = res.take_json().await?;

        let sold: Vec<u64> = body.best_sellers.iter().map(|item| item.quantity_sold).collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(sold, [30, 12]);

        Ok(())
    }

    #[tokio::test]
    async fn test_best_sellers_custom_limit() -> TestResult {
        let mut stats = MockStatsService::new();

        stats
            .expect_best_sellers()
            .once()
            .withf(|limit| *limit == 1)
            .return_once(|_| Ok(vec![make_best_seller("Margherita", 30)]));

        let res = TestClient::get("http://example.com/best-sellers?limit=1")
            .send(&mocks(stats).public_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_best_sellers_limit_out_of_range_returns_400() -> TestResult {
        for uri in [
            "http://example.com/best-sellers?limit=0",
            "http://example.com/best-sellers?limit=51",
        ] {
            let mut stats = MockStatsService::new();

            stats.expect_best_sellers().never();

            let res = TestClient::get(uri)
                .send(&mocks(stats).public_service(route()))
                .await;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "{uri}");
        }

        Ok(())
    }
}
