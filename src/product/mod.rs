//! The product domain: the data models and the REST endpoints for recording,
//! listing, and deleting tracked products.

mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod models;

pub use create_endpoint::create_product_endpoint;
pub use delete_endpoint::delete_product_endpoint;
pub use list_endpoint::get_products_endpoint;
pub use models::{NewProduct, Product};
