//! Reports on where the user's money goes.
//!
//! Transactions are read from the store, converted into the reference
//! currency and summed per location. The reports page shows the location with
//! the greatest total, every transaction ordered by its converted amount and
//! a bar chart of the totals.

mod aggregation;
mod charts;
mod reports_page;

pub use aggregation::{
    LocationTotals, aggregate_by_location, max_location, transactions_by_reference_amount,
};
pub use reports_page::get_reports_page;
