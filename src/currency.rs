//! Currencies and conversion into the reference currency.
//!
//! All reports are expressed in the reference currency (MKD). Conversion uses
//! fixed rates, there is no rate fetching.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The code of the currency that all aggregated amounts are converted into.
pub const REFERENCE_CURRENCY: &str = "MKD";

/// How many MKD one euro is worth.
pub const EURO_TO_MKD: f64 = 61.5;

/// How many MKD one US dollar is worth.
pub const USD_TO_MKD: f64 = 52.0;

/// Convert `amount` in the currency `currency` into the reference currency.
///
/// Unrecognized currency codes fall back to returning `amount` unchanged,
/// which means they are treated as if they were already in the reference
/// currency.
pub fn normalize(amount: f64, currency: &str) -> f64 {
    match currency {
        "EURO" => amount * EURO_TO_MKD,
        "USD" => amount * USD_TO_MKD,
        "MKD" => amount,
        _ => amount,
    }
}

/// The currency a transaction was made in.
///
/// Stored data may contain codes outside of the supported set. These are kept
/// verbatim as [Currency::Unrecognized] so that a single odd record does not
/// make the whole collection unreadable. New transactions must use a
/// recognized currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    /// Euro, stored as "EURO".
    Euro,
    /// US dollar, stored as "USD".
    Usd,
    /// Macedonian denar, the reference currency, stored as "MKD".
    Mkd,
    /// Any other currency code.
    Unrecognized(String),
}

impl Currency {
    /// The currencies that can be chosen for a new transaction.
    pub const SUPPORTED: [Currency; 3] = [Currency::Mkd, Currency::Euro, Currency::Usd];

    /// The code used to store and display the currency.
    pub fn code(&self) -> &str {
        match self {
            Currency::Euro => "EURO",
            Currency::Usd => "USD",
            Currency::Mkd => REFERENCE_CURRENCY,
            Currency::Unrecognized(code) => code,
        }
    }

    /// Whether the currency is one of [Currency::SUPPORTED].
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Currency::Unrecognized(_))
    }

    /// Convert `amount` in this currency into the reference currency.
    pub fn to_reference(&self, amount: f64) -> f64 {
        normalize(amount, self.code())
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        match code {
            "EURO" => Currency::Euro,
            "USD" => Currency::Usd,
            "MKD" => Currency::Mkd,
            other => Currency::Unrecognized(other.to_owned()),
        }
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Currency::from(code.as_str())
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        match currency {
            Currency::Unrecognized(code) => code,
            other => other.code().to_owned(),
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use crate::currency::{Currency, normalize};

    const SAMPLES: [f64; 6] = [0.0, 1.0, -1.0, 12.34, -5000.5, 1e9];

    #[test]
    fn reference_currency_is_unchanged() {
        for amount in SAMPLES {
            assert_eq!(normalize(amount, "MKD"), amount);
        }
    }

    #[test]
    fn euro_uses_fixed_rate() {
        for amount in SAMPLES {
            assert_eq!(normalize(amount, "EURO"), amount * 61.5);
        }
    }

    #[test]
    fn usd_uses_fixed_rate() {
        for amount in SAMPLES {
            assert_eq!(normalize(amount, "USD"), amount * 52.0);
        }
    }

    #[test]
    fn unrecognized_code_falls_back_to_amount() {
        assert_eq!(normalize(10.0, "GBP"), 10.0);
        assert_eq!(normalize(10.0, ""), 10.0);
        assert_eq!(normalize(10.0, "usd"), 10.0);
    }

    #[test]
    fn parses_codes() {
        assert_eq!(Currency::from("EURO"), Currency::Euro);
        assert_eq!(Currency::from("USD"), Currency::Usd);
        assert_eq!(Currency::from("MKD"), Currency::Mkd);
        assert_eq!(
            Currency::from("GBP"),
            Currency::Unrecognized("GBP".to_owned())
        );
    }

    #[test]
    fn serializes_as_code() {
        let json = serde_json::to_string(&Currency::Euro).unwrap();
        assert_eq!(json, "\"EURO\"");

        let unrecognized: Currency = serde_json::from_str("\"GBP\"").unwrap();
        assert!(!unrecognized.is_recognized());
        assert_eq!(serde_json::to_string(&unrecognized).unwrap(), "\"GBP\"");
    }

    #[test]
    fn typed_conversion_matches_normalize() {
        assert_eq!(Currency::Usd.to_reference(100.0), 5200.0);
        assert_eq!(Currency::Euro.to_reference(10.0), 615.0);
        assert_eq!(Currency::Mkd.to_reference(50.0), 50.0);
        assert_eq!(
            Currency::Unrecognized("GBP".to_owned()).to_reference(7.0),
            7.0
        );
    }
}
