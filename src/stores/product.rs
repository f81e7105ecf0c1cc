//! Defines the product store trait.

use crate::{
    Error,
    database_id::ProductId,
    product::{NewProduct, Product},
    statistics::Statistics,
};

/// Handles the creation, retrieval, and deletion of products.
///
/// This trait is the seam between the route handlers and the relational
/// engine in use. Implementations own the persistence details; the derived
/// cost fields are computed once at creation time and are never recomputed
/// by later reads.
pub trait ProductStore {
    /// Create a new product in the store.
    ///
    /// Implementations must compute `days_from_today` and `daily_cost` from
    /// the purchase date and price at the time of the write, as part of the
    /// same logical operation as the insert.
    fn create(&mut self, new_product: NewProduct) -> Result<Product, Error>;

    /// Retrieve all products in the store, newest-created first.
    fn get_all(&self) -> Result<Vec<Product>, Error>;

    /// Delete the product with `id`, returning the number of rows removed.
    ///
    /// Deleting an `id` that is not in the store is not an error; it returns
    /// zero rows removed.
    fn delete(&mut self, id: ProductId) -> Result<usize, Error>;

    /// Aggregate statistics over all products in the store.
    ///
    /// An empty store yields all-zero statistics, never nulls.
    fn statistics(&self) -> Result<Statistics, Error>;
}
