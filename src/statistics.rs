//! Aggregate statistics over all tracked products, and their route handler.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, stores::ProductStore};

/// Aggregate statistics over all tracked products.
///
/// All aggregates are zero for an empty store; nulls never appear in the
/// response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// The number of tracked products.
    pub total_products: i64,
    /// The sum of all product prices.
    pub total_price: f64,
    /// The sum of the per-product daily costs.
    pub total_daily_cost: f64,
    /// The mean per-product daily cost.
    pub avg_daily_cost: f64,
}

/// A route handler for aggregate statistics over all tracked products.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_statistics_endpoint<P>(
    State(state): State<AppState<P>>,
) -> Result<Json<Statistics>, Error>
where
    P: ProductStore + Send + Sync,
{
    let statistics = state.product_store.statistics()?;

    Ok(Json(statistics))
}

#[cfg(test)]
mod get_statistics_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        AppState, Product, build_router, endpoints, initialize_db, statistics::Statistics,
        stores::SQLiteProductStore,
    };

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().expect("Could not open database in memory.");
        initialize_db(&connection).expect("Could not initialize database.");

        let store = SQLiteProductStore::new(Arc::new(Mutex::new(connection)));
        let app = build_router(AppState::new(store));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn statistics_on_empty_store_are_all_zero() {
        let server = get_test_server();

        let response = server.get(endpoints::STATISTICS_API).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Statistics>(),
            Statistics {
                total_products: 0,
                total_price: 0.0,
                total_daily_cost: 0.0,
                avg_daily_cost: 0.0,
            }
        );
    }

    #[tokio::test]
    async fn statistics_aggregate_created_products() {
        let server = get_test_server();

        let first = server
            .post(endpoints::PRODUCTS_API)
            .content_type("application/json")
            .json(&json!({
                "name": "Camera",
                "price": 800.0,
                "purchase_date": "2023-01-01",
            }))
            .await
            .json::<Product>();

        let second = server
            .post(endpoints::PRODUCTS_API)
            .content_type("application/json")
            .json(&json!({
                "name": "Tripod",
                "price": 120.0,
                "purchase_date": "2023-07-01",
            }))
            .await
            .json::<Product>();

        let statistics = server
            .get(endpoints::STATISTICS_API)
            .await
            .json::<Statistics>();

        let want_total_daily_cost = first.daily_cost + second.daily_cost;
        assert_eq!(statistics.total_products, 2);
        assert!((statistics.total_price - 920.0).abs() < 1e-9);
        assert!((statistics.total_daily_cost - want_total_daily_cost).abs() < 1e-9);
        assert!((statistics.avg_daily_cost - want_total_daily_cost / 2.0).abs() < 1e-9);
    }
}
