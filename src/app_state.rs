//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    storage::{KeyValueStorage, SQLiteKeyValueStorage},
    transaction::TransactionStore,
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Europe/Skopje".
    pub local_timezone: String,

    /// The store that owns the user's transactions.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl AppState {
    /// Create a new [AppState] that keeps transactions in a SQLite database.
    ///
    /// This function will initialize the database by adding the key-value table.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Europe/Skopje".
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, local_timezone: &str) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self::with_storage(
            SQLiteKeyValueStorage::new(db_connection),
            local_timezone,
        ))
    }

    /// Create a new [AppState] that keeps transactions in `storage`.
    pub fn with_storage(storage: impl KeyValueStorage + 'static, local_timezone: &str) -> Self {
        Self {
            local_timezone: local_timezone.to_owned(),
            transaction_store: Arc::new(Mutex::new(TransactionStore::new(storage))),
        }
    }
}

/// The state needed by handlers that only read or write transactions.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The store that owns the user's transactions.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

impl TransactionState {
    /// Create a state around a store that keeps transactions in `storage`.
    #[cfg(test)]
    pub(crate) fn with_storage(storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            transaction_store: Arc::new(Mutex::new(TransactionStore::new(storage))),
        }
    }

    /// Run `f` with exclusive access to the transaction store.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the lock is poisoned.
    pub fn with_store<T>(&self, f: impl FnOnce(&mut TransactionStore) -> T) -> Result<T, Error> {
        let mut store = self
            .transaction_store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire transaction store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        Ok(f(&mut *store))
    }
}
