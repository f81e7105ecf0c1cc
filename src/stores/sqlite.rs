//! Implements a SQLite backed product store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    cost::{daily_cost, days_since_purchase},
    database_id::ProductId,
    db::{CreateTable, MapRow},
    product::{NewProduct, Product},
    statistics::Statistics,
    stores::ProductStore,
};

/// Stores products in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteProductStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteProductStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl ProductStore for SQLiteProductStore {
    /// Create a new product in the database.
    ///
    /// The derived fields `days_from_today` and `daily_cost` are computed
    /// against the current UTC instant and written with the row; they are
    /// frozen at this point and reflect the ownership period as of creation.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn create(&mut self, new_product: NewProduct) -> Result<Product, Error> {
        let now = OffsetDateTime::now_utc();
        let days_from_today = days_since_purchase(new_product.purchase_date, now);
        let daily_cost = daily_cost(new_product.price, days_from_today);

        let connection = self.connection.lock().unwrap();

        let product = connection
            .prepare(
                "INSERT INTO product (name, price, purchase_date, days_from_today, daily_cost, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 RETURNING id, name, price, purchase_date, days_from_today, daily_cost, created_at",
            )?
            .query_row(
                (
                    new_product.name,
                    new_product.price,
                    new_product.purchase_date,
                    days_from_today,
                    daily_cost,
                    now,
                ),
                Self::map_row,
            )?;

        Ok(product)
    }

    /// Retrieve all products in the database, newest-created first.
    ///
    /// The id tiebreak keeps the order deterministic for rows created within
    /// the same timestamp.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Product>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, name, price, purchase_date, days_from_today, daily_cost, created_at
                 FROM product
                 ORDER BY created_at DESC, id DESC",
            )?
            .query_map([], Self::map_row)?
            .map(|maybe_product| maybe_product.map_err(Error::SqlError))
            .collect()
    }

    /// Delete the product with `id` from the database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn delete(&mut self, id: ProductId) -> Result<usize, Error> {
        self.connection
            .lock()
            .unwrap()
            .execute("DELETE FROM product WHERE id = :id", &[(":id", &id)])
            .map_err(|error| error.into())
    }

    /// Aggregate statistics over all products in the database.
    ///
    /// The aggregates are coalesced to zero in SQL so that an empty table
    /// yields zeros rather than nulls.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn statistics(&self) -> Result<Statistics, Error> {
        self.connection
            .lock()
            .unwrap()
            .query_row(
                "SELECT
                    COUNT(id),
                    COALESCE(SUM(price), 0.0),
                    COALESCE(SUM(daily_cost), 0.0),
                    COALESCE(AVG(daily_cost), 0.0)
                 FROM product",
                [],
                |row| {
                    Ok(Statistics {
                        total_products: row.get(0)?,
                        total_price: row.get(1)?,
                        total_daily_cost: row.get(2)?,
                        avg_daily_cost: row.get(3)?,
                    })
                },
            )
            .map_err(|error| error.into())
    }
}

impl CreateTable for SQLiteProductStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS product (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    price REAL NOT NULL,
                    purchase_date TEXT NOT NULL,
                    days_from_today INTEGER NOT NULL,
                    daily_cost REAL NOT NULL,
                    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteProductStore {
    type ReturnType = Product;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Product {
            id: row.get(offset)?,
            name: row.get(offset + 1)?,
            price: row.get(offset + 2)?,
            purchase_date: row.get(offset + 3)?,
            days_from_today: row.get(offset + 4)?,
            daily_cost: row.get(offset + 5)?,
            created_at: row.get(offset + 6)?,
        })
    }
}
