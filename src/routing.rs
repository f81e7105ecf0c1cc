//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};

use crate::{
    AppState, endpoints,
    product::{create_product_endpoint, delete_product_endpoint, get_products_endpoint},
    statistics::get_statistics_endpoint,
    stores::ProductStore,
};

/// Return a router with all the app's routes.
pub fn build_router<P>(state: AppState<P>) -> Router
where
    P: ProductStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::PRODUCTS_API,
            get(get_products_endpoint).post(create_product_endpoint),
        )
        .route(endpoints::DELETE_PRODUCT, delete(delete_product_endpoint))
        .route(endpoints::STATISTICS_API, get(get_statistics_endpoint))
        .route_service(endpoints::ROOT, ServeFile::new("static/index.html"))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
