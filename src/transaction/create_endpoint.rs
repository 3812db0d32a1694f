//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    app_state::TransactionState,
    currency::Currency,
    endpoints,
    transaction::{NewTransaction, PaymentMethod, TransactionType, core::iso_date},
};

/// The form data for creating a transaction.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionForm {
    /// Text detailing the transaction.
    pub description: String,
    /// The value of the transaction in `currency`.
    pub amount: f64,
    /// The currency code, e.g. "EURO".
    pub currency: String,
    /// The date when the transaction ocurred.
    #[serde(with = "iso_date")]
    pub date: Date,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub location: String,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TransactionForm {
    fn into_new_transaction(self) -> NewTransaction {
        let notes = self.notes.filter(|notes| !notes.trim().is_empty());

        NewTransaction::build(
            self.description.trim(),
            self.amount,
            Currency::from(self.currency),
            self.date,
            self.category.trim(),
            self.location.trim(),
        )
        .kind(self.kind)
        .payment_method(self.payment_method)
        .notes(notes)
    }
}

/// A route handler for creating a new transaction, redirects to transactions view on success.
///
/// Invalid data is answered with a 400 alert and a failed write with a 500
/// alert. Nothing is stored in either case.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let new_transaction = form.into_new_transaction();

    let result = state
        .with_store(|store| store.create(new_transaction))
        .and_then(|created| created);

    match result {
        Ok(transaction) => {
            tracing::info!("Created transaction {}", transaction.id);

            (
                HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("could not create transaction: {error}");

            error.into_alert_response()
        }
    }
}
