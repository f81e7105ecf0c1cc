//! The API endpoint URIs.

/// The root route which serves the front-end entry page.
pub const ROOT: &str = "/";
/// The route to list and create products.
pub const PRODUCTS_API: &str = "/api/products";
/// The route to delete a single product.
pub const DELETE_PRODUCT: &str = "/api/products/{product_id}";
/// The route for aggregate statistics over all products.
pub const STATISTICS_API: &str = "/api/statistics";
/// The route for static files.
pub const STATIC: &str = "/static";
