//! The store that owns the persisted collection of transactions.

use std::collections::HashSet;

use serde_json::Value;
use time::OffsetDateTime;

use crate::{
    Error,
    storage::KeyValueStorage,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// The storage key the transaction collection is persisted under.
pub const TRANSACTIONS_KEY: &str = "transactionsData";

/// Handles the creation and retrieval of transactions.
///
/// The whole collection is stored as a JSON array under [TRANSACTIONS_KEY].
/// Reads are served from an in-memory copy of the collection, which is
/// dropped whenever the store writes so the next read sees the new data.
///
/// The store assumes it is the only writer of its storage slot. Within one
/// process this holds because the server shares the store behind a mutex,
/// but two processes pointed at the same database will overwrite each
/// other's transactions.
#[derive(Debug)]
pub struct TransactionStore {
    storage: Box<dyn KeyValueStorage>,
    cache: Option<Vec<Transaction>>,
}

impl TransactionStore {
    /// Create a new store that persists transactions in `storage`.
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            cache: None,
        }
    }

    /// Get every transaction in the order they were created.
    ///
    /// Returns an empty list if nothing has been stored yet. If the stored
    /// data cannot be read or is not a JSON array it is logged and also
    /// treated as an empty list. Individual records that cannot be parsed
    /// are logged and left out.
    pub fn list_all(&mut self) -> Vec<Transaction> {
        if let Some(transactions) = &self.cache {
            return transactions.clone();
        }

        match self.read_records() {
            Ok(records) => {
                let transactions = parse_records(records);
                self.cache = Some(transactions.clone());
                transactions
            }
            Err(error) => {
                tracing::warn!("treating stored transactions as empty: {error}");
                Vec::new()
            }
        }
    }

    /// Get the transaction with the ID `id`, or `None` if there is no such
    /// transaction.
    pub fn get_by_id(&mut self, id: &TransactionId) -> Option<Transaction> {
        self.list_all()
            .into_iter()
            .find(|transaction| &transaction.id == id)
    }

    /// Create a new transaction and append it to the stored collection.
    ///
    /// The new transaction is given an ID based on the current time that is
    /// different from every ID already in the collection. Stored records
    /// that [TransactionStore::list_all] skips are written back untouched.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::Validation] if `data` is invalid, in which case storage is not touched,
    /// - or [Error::StorageWrite] if the updated collection could not be written.
    ///   The stored collection and the read cache are unchanged in this case.
    pub fn create(&mut self, data: NewTransaction) -> Result<Transaction, Error> {
        data.validate()?;

        let mut records = self.read_records().unwrap_or_else(|error| {
            tracing::warn!("overwriting unreadable stored transactions: {error}");
            Vec::new()
        });

        let id = next_id(records.iter().filter_map(record_id), now_millis());
        let transaction = data.into_transaction(id);

        let record = serde_json::to_value(&transaction)
            .map_err(|error| Error::StorageWrite(error.to_string()))?;
        records.push(record);
        let serialized = serde_json::to_string(&records)
            .map_err(|error| Error::StorageWrite(error.to_string()))?;

        self.storage.set(TRANSACTIONS_KEY, &serialized)?;
        self.cache = None;

        tracing::debug!("created transaction {}", transaction.id);

        Ok(transaction)
    }

    fn read_records(&self) -> Result<Vec<Value>, Error> {
        match self.storage.get(TRANSACTIONS_KEY)? {
            Some(text) => serde_json::from_str(&text)
                .map_err(|error| Error::StorageRead(format!("could not parse transactions: {error}"))),
            None => Ok(Vec::new()),
        }
    }
}

fn parse_records(records: Vec<Value>) -> Vec<Transaction> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            serde_json::from_value(record)
                .inspect_err(|error| {
                    tracing::warn!("skipping stored transaction at index {index}: {error}")
                })
                .ok()
        })
        .collect()
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id")?.as_str()
}

fn now_millis() -> i128 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}

/// Choose an ID for a new transaction created at `now_millis`.
///
/// IDs are millisecond timestamps. If the clock has not moved past the
/// newest numeric ID in `existing_ids`, the ID is bumped to one past it. When
/// the newest ID is too large to bump, the first unused ID from the clock
/// onwards is taken instead.
fn next_id<'a>(
    existing_ids: impl IntoIterator<Item = &'a str>,
    now_millis: i128,
) -> TransactionId {
    let existing_ids: HashSet<&str> = existing_ids.into_iter().collect();
    let newest = existing_ids
        .iter()
        .filter_map(|id| id.parse::<i128>().ok())
        .max();

    let mut id = match newest {
        Some(newest) if newest >= now_millis => newest.checked_add(1).unwrap_or(now_millis),
        _ => now_millis,
    };

    while existing_ids.contains(id.to_string().as_str()) {
        id += 1;
    }

    TransactionId::new(id.to_string())
}
