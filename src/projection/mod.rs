//! The projection pipeline: occurrence expansion, instance
//! materialization, and balance roll-forward.
//!
//! Every stage is a pure function of its arguments plus an injected
//! `today`; nothing in here reads a clock, performs I/O, or keeps state
//! between calls, so per-account runs can proceed in parallel freely.

pub mod balance;
pub mod materialize;
pub mod schedule;

pub use balance::{
    available_to_spend, lowest_point, project_account, project_accounts, AccountProjection,
    DailyBalance,
};
pub use materialize::materialize_instances;
pub use schedule::{expand_occurrences, ExpansionLimits, DEFAULT_MAX_OCCURRENCES};
