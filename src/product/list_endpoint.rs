//! The route handler for listing tracked products.

use axum::{Json, extract::State};

use crate::{AppState, Error, product::Product, stores::ProductStore};

/// A route handler for listing all tracked products, newest first.
///
/// The derived cost fields are returned exactly as they were written; they
/// are not recomputed at read time.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_products_endpoint<P>(
    State(state): State<AppState<P>>,
) -> Result<Json<Vec<Product>>, Error>
where
    P: ProductStore + Send + Sync,
{
    let products = state.product_store.get_all()?;

    Ok(Json(products))
}
