//! The local key-value storage that the transaction store persists into.
//!
//! A slot is a single string value stored under a string key. Only the
//! [TransactionStore](crate::transaction::TransactionStore) should read or
//! write slots so that caching and invalidation stay in one place.

mod memory;
mod sqlite;

use std::fmt::Debug;

use crate::Error;

pub use memory::InMemoryKeyValueStorage;
pub use sqlite::{SQLiteKeyValueStorage, create_key_value_table};

/// Reads and writes string values stored under string keys.
///
/// Implementations do not coordinate between processes. Two processes that
/// write the same slot will overwrite each other's values.
pub trait KeyValueStorage: Debug + Send {
    /// Get the value stored under `key`, or `None` if the key has never been
    /// written.
    ///
    /// # Errors
    /// Returns [Error::StorageRead] if the storage could not be read.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// Either the whole value is written or nothing is.
    ///
    /// # Errors
    /// Returns [Error::StorageWrite] if the value could not be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
}
