//! Implements a struct that holds the state of the REST server.

use crate::stores::ProductStore;

/// The state of the REST server.
///
/// The server is generic over the product store so that route handlers can
/// be exercised against test doubles as well as the SQLite-backed store.
#[derive(Debug, Clone)]
pub struct AppState<P>
where
    P: ProductStore + Send + Sync,
{
    /// The store for managing tracked [products](crate::Product).
    pub product_store: P,
}

impl<P> AppState<P>
where
    P: ProductStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(product_store: P) -> Self {
        Self { product_store }
    }
}
