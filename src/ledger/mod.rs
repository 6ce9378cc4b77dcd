//! Wire and domain data model: accounts, transaction snapshots, and the
//! date/frequency primitives every pipeline stage shares.

pub mod account;
pub mod dates;
pub mod frequency;
pub mod transaction;

pub use account::Account;
pub use dates::{format_date, normalize_date, DateValue};
pub use frequency::{Frequency, UnknownFrequency};
pub use transaction::{
    RecurringDetails, RecurringSchedule, ScheduleGap, TransactionInstance, TransactionKind,
    TransactionRecord,
};

use crate::errors::ProjectionError;

/// Decodes a raw JSON array of transaction document snapshots.
pub fn records_from_json(value: serde_json::Value) -> Result<Vec<TransactionRecord>, ProjectionError> {
    Ok(serde_json::from_value(value)?)
}

/// Decodes a raw JSON array of account snapshots.
pub fn accounts_from_json(value: serde_json::Value) -> Result<Vec<Account>, ProjectionError> {
    Ok(serde_json::from_value(value)?)
}
