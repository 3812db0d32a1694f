//! Sets up the SQLite database that backs the key-value storage.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, storage::create_key_value_table};

/// Create the tables the application needs if they do not exist yet.
///
/// # Errors
/// Returns an error if a table cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_key_value_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
