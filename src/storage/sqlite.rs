//! Key-value slots kept in a SQLite table.

use rusqlite::{Connection, OptionalExtension};

use crate::{Error, storage::KeyValueStorage};

/// Stores key-value slots in the `key_value` table of a SQLite database.
#[derive(Debug)]
pub struct SQLiteKeyValueStorage {
    connection: Connection,
}

impl SQLiteKeyValueStorage {
    /// Create a new storage for the SQLite `connection`.
    ///
    /// The `key_value` table must already exist, see [create_key_value_table].
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }
}

impl KeyValueStorage for SQLiteKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        self.connection
            .query_row(
                "SELECT value FROM key_value WHERE key = :key",
                &[(":key", key)],
                |row| row.get(0),
            )
            .optional()
            .map_err(|error| Error::StorageRead(error.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.connection
            .execute(
                "INSERT INTO key_value (key, value) VALUES (?1, ?2)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                (key, value),
            )
            .map(|_| ())
            .map_err(|error| Error::StorageWrite(error.to_string()))
    }
}

/// Create the key-value table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_key_value_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS key_value (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        db::initialize,
        storage::{KeyValueStorage, SQLiteKeyValueStorage},
    };

    fn get_test_storage() -> SQLiteKeyValueStorage {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        SQLiteKeyValueStorage::new(conn)
    }

    #[test]
    fn missing_key_is_none() {
        let storage = get_test_storage();

        assert_eq!(storage.get("transactionsData"), Ok(None));
    }

    #[test]
    fn get_returns_value_that_was_set() {
        let mut storage = get_test_storage();

        storage.set("transactionsData", "[]").unwrap();

        assert_eq!(storage.get("transactionsData"), Ok(Some("[]".to_owned())));
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut storage = get_test_storage();

        storage.set("transactionsData", "[]").unwrap();
        storage.set("transactionsData", "[1]").unwrap();

        assert_eq!(storage.get("transactionsData"), Ok(Some("[1]".to_owned())));
    }

    #[test]
    fn keys_are_independent() {
        let mut storage = get_test_storage();

        storage.set("transactionsData", "[]").unwrap();

        assert_eq!(storage.get("homeData"), Ok(None));
    }

    #[test]
    fn set_fails_without_table() {
        let mut storage = SQLiteKeyValueStorage::new(Connection::open_in_memory().unwrap());

        let result = storage.set("transactionsData", "[]");

        assert!(
            matches!(result, Err(Error::StorageWrite(_))),
            "want storage write error, got {result:?}"
        );
    }
}
