//! Spendtrail is a web app for keeping track of where your money goes.
//!
//! Transactions in euros, US dollars and Macedonian denars are recorded
//! through HTML forms, stored in a local key-value slot and summarised per
//! location in denars.
//!
//! This library provides a REST API that directly serves HTML pages, plus a
//! small JSON API for reading transactions.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod currency;
mod db;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod report;
mod routing;
mod storage;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use currency::{Currency, normalize};
pub use db::initialize as initialize_db;
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use report::{
    LocationTotals, aggregate_by_location, max_location, transactions_by_reference_amount,
};
pub use routing::build_router;
pub use storage::{InMemoryKeyValueStorage, KeyValueStorage, SQLiteKeyValueStorage};
pub use timezone::get_local_offset;
pub use transaction::{
    NewTransaction, PaymentMethod, TRANSACTIONS_KEY, Transaction, TransactionId, TransactionStore,
    TransactionType,
};

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
