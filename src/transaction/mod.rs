//! Transactions: the model, the store that persists them and the pages and
//! endpoints for creating and viewing them.

mod api;
mod core;
mod create_endpoint;
mod create_page;
mod store;
mod transactions_page;

pub use api::{get_transaction_endpoint, list_transactions_endpoint};
pub use core::{NewTransaction, PaymentMethod, Transaction, TransactionId, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::get_create_transaction_page;
pub use store::{TRANSACTIONS_KEY, TransactionStore};
pub use transactions_page::get_transactions_page;
