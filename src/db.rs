/*! This module defines and implements traits for interacting with the application's database. */

use rusqlite::{Connection, Error, Row, Transaction as SqlTransaction};

use crate::stores::SQLiteProductStore;

/// A trait for adding an object schema to a database.
pub trait CreateTable {
    /// Create a table for the model if it does not already exist.
    ///
    /// # Errors
    /// Returns an error if there is an SQL error.
    fn create_table(connection: &Connection) -> Result<(), Error>;
}

/// A trait for mapping from a `rusqlite::Row` from a SQLite database to a concrete rust type.
pub trait MapRow {
    /// The type to map the row to.
    type ReturnType;

    /// Convert a row into a concrete type.
    ///
    /// # Errors
    /// Returns an error if a row does not contain the expected column types.
    fn map_row(row: &Row) -> Result<Self::ReturnType, Error> {
        Self::map_row_with_offset(row, 0)
    }

    /// Convert a row into a concrete type, with the row's columns starting at `offset`.
    ///
    /// # Errors
    /// Returns an error if a row does not contain the expected column types.
    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, Error>;
}

/// Create the application's database tables if they do not already exist.
///
/// Safe to call on every process start.
///
/// # Errors
/// Returns an error if the tables could not be created.
pub fn initialize(connection: &Connection) -> Result<(), crate::Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    SQLiteProductStore::create_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod initialize_tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn initialize_is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("could not initialize the database");
        initialize(&connection).expect("initializing twice should succeed");
    }
}
