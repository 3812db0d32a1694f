//! Defines the core data models for transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, currency::Currency};

// ============================================================================
// MODELS
// ============================================================================

/// The opaque identifier of a [Transaction].
///
/// IDs are assigned by the store when a transaction is created and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Wrap an existing identifier, e.g. one taken from a URL.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether money came in, went out or moved between the user's own accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. wages.
    Income,
    /// Money going out.
    Expense,
    /// Money moved between the user's own accounts.
    Transfer,
}

impl TransactionType {
    /// Every transaction type, in the order they are offered in forms.
    pub const ALL: [TransactionType; 3] = [
        TransactionType::Income,
        TransactionType::Expense,
        TransactionType::Transfer,
    ];

    /// The lowercase value used in storage and forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Transfer => "transfer",
        }
    }

    /// The capitalised name shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
            TransactionType::Transfer => "Transfer",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a transaction was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[allow(missing_docs)]
    Cash,
    #[allow(missing_docs)]
    #[serde(rename = "Credit Card")]
    CreditCard,
}

impl PaymentMethod {
    /// Every payment method, in the order they are offered in forms.
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Cash, PaymentMethod::CreditCard];

    /// The name used in storage, forms and views.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An income, expense or transfer recorded by the user.
///
/// The amount is kept in the currency it was entered in. Use
/// [Currency::to_reference] to compare amounts across currencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money in `currency`.
    pub amount: f64,
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// A free-text category, e.g. "Groceries".
    pub category: String,
    /// Whether the transaction is an income, expense or transfer.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// The currency `amount` is in.
    pub currency: Currency,
    /// Where the transaction happened.
    pub location: String,
    /// How the transaction was paid, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    /// Any extra details the user wants to keep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The data needed to create a [Transaction]; everything except the ID.
///
/// See [Transaction] for the meaning of each field.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
    pub date: Date,
    pub category: String,
    pub kind: TransactionType,
    pub currency: Currency,
    pub location: String,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
}

impl NewTransaction {
    /// Create a new expense with the required fields, no payment method
    /// and no notes.
    ///
    /// Shortcut for building [NewTransaction] field by field.
    pub fn build(
        description: &str,
        amount: f64,
        currency: Currency,
        date: Date,
        category: &str,
        location: &str,
    ) -> Self {
        Self {
            description: description.to_owned(),
            amount,
            date,
            category: category.to_owned(),
            kind: TransactionType::Expense,
            currency,
            location: location.to_owned(),
            payment_method: None,
            notes: None,
        }
    }

    /// Set the transaction type.
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = kind;
        self
    }

    /// Set the payment method.
    pub fn payment_method(mut self, payment_method: Option<PaymentMethod>) -> Self {
        self.payment_method = payment_method;
        self
    }

    /// Set the notes.
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Check the parts of the data that the types cannot enforce.
    ///
    /// # Errors
    /// Returns [Error::Validation] if the description, category or location
    /// is blank, the amount is not a finite number or the currency is not
    /// supported.
    pub fn validate(&self) -> Result<(), Error> {
        for (field, value) in [
            ("description", &self.description),
            ("category", &self.category),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation(format!("{field} cannot be empty")));
            }
        }

        if !self.amount.is_finite() {
            return Err(Error::Validation(format!(
                "{} is not a valid amount",
                self.amount
            )));
        }

        if !self.currency.is_recognized() {
            return Err(Error::Validation(format!(
                "\"{}\" is not a supported currency",
                self.currency
            )));
        }

        Ok(())
    }

    /// Attach `id`, turning the data into a stored [Transaction].
    pub(super) fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            description: self.description,
            amount: self.amount,
            date: self.date,
            category: self.category,
            kind: self.kind,
            currency: self.currency,
            location: self.location,
            payment_method: self.payment_method,
            notes: self.notes,
        }
    }
}

/// (De)serializes dates as ISO-8601 date strings, e.g. "2025-10-05".
///
/// Older data stored full date-times such as "2025-10-05T00:00:00.000Z", so
/// deserializing accepts any string that starts with a date and keeps only
/// the date part.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use time::{Date, format_description::FormatItem, macros::format_description};

    const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = date.format(DATE_FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(de::Error::custom)
    }

    /// Parse the date at the start of `text`.
    pub fn parse(text: &str) -> Result<Date, String> {
        let date_part = text
            .get(..10)
            .ok_or_else(|| format!("\"{text}\" is not an ISO-8601 date"))?;

        Date::parse(date_part, DATE_FORMAT)
            .map_err(|error| format!("\"{text}\" is not an ISO-8601 date: {error}"))
    }
}

// ============================================================================
// TESTS
// ============================================================================
