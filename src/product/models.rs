//! Defines the core data models for tracked products.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::database_id::ProductId;

/// A purchased product tracked by the application.
///
/// The cost fields `days_from_today` and `daily_cost` are derived when the
/// product is recorded and are frozen from then on: they reflect the
/// ownership period as of creation, not as of query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// The ID of the product.
    pub id: ProductId,
    /// The name of the product.
    pub name: String,
    /// How much money was paid for the product.
    pub price: f64,
    /// The calendar date the product was purchased.
    pub purchase_date: Date,
    /// Whole days of ownership at the time the product was recorded.
    pub days_from_today: i64,
    /// The price spread over the days of ownership, zero for products owned
    /// for zero days or purchased in the future.
    pub daily_cost: f64,
    /// When the product row was inserted.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The user-supplied fields for recording a new [Product].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    /// The name of the product.
    pub name: String,
    /// How much money was paid for the product.
    pub price: f64,
    /// The calendar date the product was purchased.
    pub purchase_date: Date,
}
