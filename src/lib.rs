//! Perday is a web app for tracking what your purchases cost you per day of
//! ownership.
//!
//! This library provides a JSON REST API over a single product table: record
//! a product with its price and purchase date, and the app derives the cost
//! per day of ownership at the time the product is recorded.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
pub mod cost;
mod database_id;
mod db;
mod endpoints;
mod product;
mod routing;
mod statistics;
pub mod stores;

pub use app_state::AppState;
pub use database_id::{DatabaseId, ProductId};
pub use db::initialize as initialize_db;
pub use product::{NewProduct, Product};
pub use routing::build_router;
pub use statistics::Statistics;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A request to create a product left out one or more of the required
    /// fields, or supplied an empty product name.
    ///
    /// The client should resubmit the request with `name`, `price` and
    /// `purchase_date` all present.
    #[error("please fill all required fields")]
    MissingRequiredFields,

    /// An unhandled/unexpected SQL error.
    ///
    /// The error message is passed through to the client as-is.
    #[error("{0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::MissingRequiredFields => StatusCode::BAD_REQUEST,
            Error::SqlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
