//! Derives per-location spending totals from transactions.
//!
//! All amounts are converted into the reference currency before they are
//! summed or compared, so transactions in different currencies can be
//! aggregated together.

use std::collections::HashMap;

use crate::transaction::Transaction;

/// Totals in the reference currency keyed by location.
///
/// Locations are kept in the order they were first encountered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationTotals {
    totals: Vec<(String, f64)>,
    positions: HashMap<String, usize>,
}

impl LocationTotals {
    fn add(&mut self, location: &str, amount: f64) {
        match self.positions.get(location) {
            Some(&position) => self.totals[position].1 += amount,
            None => {
                self.positions
                    .insert(location.to_owned(), self.totals.len());
                self.totals.push((location.to_owned(), amount));
            }
        }
    }

    /// The total for `location`, or `None` if no transaction happened there.
    pub fn get(&self, location: &str) -> Option<f64> {
        self.positions
            .get(location)
            .map(|&position| self.totals[position].1)
    }

    /// Iterate over the locations and their totals in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals
            .iter()
            .map(|(location, total)| (location.as_str(), *total))
    }

    /// The number of locations.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Whether there are no locations.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Sum the reference currency amounts of `transactions` per location.
///
/// Only locations that appear in `transactions` get an entry.
pub fn aggregate_by_location(transactions: &[Transaction]) -> LocationTotals {
    let mut totals = LocationTotals::default();

    for transaction in transactions {
        totals.add(
            &transaction.location,
            transaction.currency.to_reference(transaction.amount),
        );
    }

    totals
}

/// Find the location with the greatest total.
///
/// If several locations share the greatest total, the one encountered first
/// wins. Returns `None` only when `totals` is empty.
pub fn max_location(totals: &LocationTotals) -> Option<(&str, f64)> {
    totals.iter().fold(None, |max, (location, total)| match max {
        Some((_, max_total)) if total <= max_total => max,
        _ => Some((location, total)),
    })
}

/// Pair each transaction with its amount in the reference currency, largest
/// amount first.
///
/// Transactions with equal amounts keep their creation order. This ordering
/// is specific to the reports table: elsewhere, such as the transactions
/// page, rows are listed in creation order.
pub fn transactions_by_reference_amount(
    transactions: &[Transaction],
) -> Vec<(&Transaction, f64)> {
    let mut normalized: Vec<_> = transactions
        .iter()
        .map(|transaction| {
            (
                transaction,
                transaction.currency.to_reference(transaction.amount),
            )
        })
        .collect();

    normalized.sort_by(|(_, a), (_, b)| b.total_cmp(a));

    normalized
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        currency::Currency,
        report::aggregation::{
            aggregate_by_location, max_location, transactions_by_reference_amount,
        },
        storage::InMemoryKeyValueStorage,
        transaction::{NewTransaction, Transaction, TransactionStore},
    };

    fn create_transactions(data: &[(&str, f64, Currency)]) -> Vec<Transaction> {
        let mut store = TransactionStore::new(InMemoryKeyValueStorage::new());

        for (location, amount, currency) in data {
            store
                .create(NewTransaction::build(
                    "test",
                    *amount,
                    currency.clone(),
                    date!(2025 - 10 - 05),
                    "Test",
                    location,
                ))
                .unwrap();
        }

        store.list_all()
    }

    #[test]
    fn empty_input_has_no_totals() {
        let totals = aggregate_by_location(&[]);

        assert!(totals.is_empty());
        assert_eq!(max_location(&totals), None);
    }

    #[test]
    fn sums_normalized_amounts_per_location() {
        let transactions = create_transactions(&[
            ("A", 100.0, Currency::Usd),
            ("B", 10.0, Currency::Euro),
            ("A", 50.0, Currency::Mkd),
        ]);

        let totals = aggregate_by_location(&transactions);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get("A"), Some(5250.0));
        assert_eq!(totals.get("B"), Some(615.0));
        assert_eq!(totals.get("C"), None);
        assert_eq!(max_location(&totals), Some(("A", 5250.0)));
    }

    #[test]
    fn keeps_first_encounter_order() {
        let transactions = create_transactions(&[
            ("Skopje", 1.0, Currency::Mkd),
            ("Ohrid", 1.0, Currency::Mkd),
            ("Bitola", 1.0, Currency::Mkd),
            ("Ohrid", 1.0, Currency::Mkd),
        ]);

        let totals = aggregate_by_location(&transactions);

        let locations: Vec<_> = totals.iter().map(|(location, _)| location).collect();
        assert_eq!(locations, vec!["Skopje", "Ohrid", "Bitola"]);
    }

    #[test]
    fn tie_goes_to_first_location() {
        let transactions = create_transactions(&[
            ("A", 10.0, Currency::Mkd),
            ("B", 10.0, Currency::Mkd),
        ]);

        let totals = aggregate_by_location(&transactions);

        assert_eq!(max_location(&totals), Some(("A", 10.0)));
    }

    #[test]
    fn max_handles_negative_totals() {
        let transactions = create_transactions(&[
            ("Refund", -20.0, Currency::Mkd),
            ("Market", -5.0, Currency::Mkd),
        ]);

        let totals = aggregate_by_location(&transactions);

        assert_eq!(max_location(&totals), Some(("Market", -5.0)));
    }

    #[test]
    fn unrecognized_currency_counts_as_reference_currency() {
        let stored = r#"[{
            "id": "1",
            "description": "Souvenir",
            "amount": 7,
            "date": "2024-05-01",
            "category": "",
            "type": "expense",
            "currency": "GBP",
            "location": "London"
        }]"#;
        let transactions: Vec<Transaction> = serde_json::from_str(stored).unwrap();

        let totals = aggregate_by_location(&transactions);

        assert_eq!(totals.get("London"), Some(7.0));
    }

    #[test]
    fn orders_transactions_by_normalized_amount() {
        let transactions = create_transactions(&[
            ("A", 100.0, Currency::Mkd),
            ("B", 10.0, Currency::Euro),
            ("C", 100.0, Currency::Mkd),
            ("D", 2.0, Currency::Usd),
        ]);

        let ordered = transactions_by_reference_amount(&transactions);

        let got: Vec<_> = ordered
            .iter()
            .map(|(transaction, amount)| (transaction.location.as_str(), *amount))
            .collect();
        assert_eq!(
            got,
            vec![("B", 615.0), ("D", 104.0), ("A", 100.0), ("C", 100.0)]
        );
    }
}
