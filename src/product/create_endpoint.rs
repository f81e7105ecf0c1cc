//! The route handler for recording a new product.

use axum::{Json, extract::State};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    product::{NewProduct, Product},
    stores::ProductStore,
};

/// The POST body for recording a product.
///
/// Every field is optional at the deserialization layer so that a request
/// with missing fields reaches the handler and receives the validation
/// error, rather than being rejected by the JSON extractor.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    /// The name of the product.
    pub name: Option<String>,
    /// How much money was paid for the product.
    pub price: Option<f64>,
    /// The calendar date the product was purchased.
    pub purchase_date: Option<Date>,
}

impl CreateProductRequest {
    /// Validate that the required fields are present and non-empty.
    ///
    /// # Errors
    /// Returns an [Error::MissingRequiredFields] if any field is absent or
    /// the product name is the empty string.
    fn into_new_product(self) -> Result<NewProduct, Error> {
        match (self.name, self.price, self.purchase_date) {
            (Some(name), Some(price), Some(purchase_date)) if !name.is_empty() => Ok(NewProduct {
                name,
                price,
                purchase_date,
            }),
            _ => Err(Error::MissingRequiredFields),
        }
    }
}

/// A route handler for recording a new product.
///
/// Responds with the created product, including its assigned ID and the
/// derived cost fields computed at write time.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_product_endpoint<P>(
    State(mut state): State<AppState<P>>,
    Json(request): Json<CreateProductRequest>,
) -> Result<Json<Product>, Error>
where
    P: ProductStore + Send + Sync,
{
    let new_product = request.into_new_product()?;
    let product = state.product_store.create(new_product)?;

    Ok(Json(product))
}
