//! JSON endpoints for reading transactions.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    app_state::TransactionState,
    transaction::{Transaction, TransactionId},
};

/// A route handler for getting every transaction as a JSON array.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    state.with_store(|store| store.list_all()).map(Json)
}

/// A route handler for getting a single transaction as JSON.
///
/// Responds with the 404 page if there is no transaction with the ID.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<String>,
) -> Result<Json<Transaction>, Error> {
    let id = TransactionId::new(transaction_id);

    state
        .with_store(|store| store.get_by_id(&id))?
        .map(Json)
        .ok_or(Error::NotFound)
}
