//! The route handler for deleting a product.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::{AppState, Error, database_id::ProductId, stores::ProductStore};

/// A route handler for deleting a product by its ID.
///
/// Deleting an ID that is not in the store is a success: the end state of
/// the store is the same either way.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn delete_product_endpoint<P>(
    State(mut state): State<AppState<P>>,
    Path(product_id): Path<ProductId>,
) -> Result<Json<Value>, Error>
where
    P: ProductStore + Send + Sync,
{
    let rows_affected = state.product_store.delete(product_id)?;

    if rows_affected == 0 {
        tracing::debug!("no product with id {product_id} to delete");
    }

    Ok(Json(json!({
        "message": "product deleted successfully",
    })))
}

#[cfg(test)]
mod delete_product_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        AppState, Product, build_router, endpoints, initialize_db, stores::SQLiteProductStore,
    };

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().expect("Could not open database in memory.");
        initialize_db(&connection).expect("Could not initialize database.");

        let store = SQLiteProductStore::new(Arc::new(Mutex::new(connection)));
        let app = build_router(AppState::new(store));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn delete_product_removes_it_from_the_listing() {
        let server = get_test_server();

        let product = server
            .post(endpoints::PRODUCTS_API)
            .content_type("application/json")
            .json(&json!({
                "name": "Blender",
                "price": 79.0,
                "purchase_date": "2024-03-01",
            }))
            .await
            .json::<Product>();

        let response = server
            .delete(&format!("/api/products/{}", product.id))
            .await;

        response.assert_status_ok();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["message"], "product deleted successfully");

        let products = server.get(endpoints::PRODUCTS_API).await.json::<Vec<Product>>();
        assert_eq!(products, vec![]);
    }

    #[tokio::test]
    async fn delete_missing_product_is_a_success() {
        let server = get_test_server();

        let product = server
            .post(endpoints::PRODUCTS_API)
            .content_type("application/json")
            .json(&json!({
                "name": "Kettle",
                "price": 35.0,
                "purchase_date": "2024-03-01",
            }))
            .await
            .json::<Product>();

        let response = server
            .delete(&format!("/api/products/{}", product.id + 654))
            .await;

        response.assert_status_ok();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["message"], "product deleted successfully");

        // The table is unchanged.
        let products = server.get(endpoints::PRODUCTS_API).await.json::<Vec<Product>>();
        assert_eq!(products.len(), 1);
    }
}
