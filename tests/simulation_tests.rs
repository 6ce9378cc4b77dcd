use chrono::NaiveDate;
use serde_json::json;

use cashflow_core::ledger::{Account, TransactionRecord};
use cashflow_core::projection::ExpansionLimits;
use cashflow_core::simulation::simulate;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn record(value: serde_json::Value) -> TransactionRecord {
    serde_json::from_value(value).unwrap()
}

#[test]
fn hypothetical_expense_lowers_available_by_its_amount() {
    let today = ymd(2025, 5, 10);
    let accounts = vec![Account::new("acct-1", "Checking", 500.0)];
    let records = vec![record(json!({
        "id": "pay",
        "amount": 1000.0,
        "type": "income",
        "accountId": "acct-1",
        "date": "2025-05-20",
    }))];
    let hypothetical = vec![record(json!({
        "id": "tv",
        "amount": -300.0,
        "type": "expense",
        "accountId": "acct-1",
        "date": "2025-05-12",
    }))];

    let outcomes = simulate(
        &accounts,
        &records,
        &hypothetical,
        today,
        30,
        &ExpansionLimits::default(),
    )
    .unwrap();

    assert_eq!(outcomes.len(), 1);
    let outcome = &outcomes[0];
    assert_eq!(outcome.baseline.series.len(), 31);
    assert_eq!(outcome.adjusted.series.len(), 31);
    // Worst day moves from 500 (before payday) to 200.
    assert_eq!(outcome.available_delta, -300.0);
}

#[test]
fn simulation_leaves_the_baseline_inputs_untouched() {
    let today = ymd(2025, 5, 10);
    let accounts = vec![Account::new("acct-1", "Checking", 100.0)];
    let records = vec![record(json!({
        "id": "coffee",
        "amount": -4.0,
        "type": "expense",
        "accountId": "acct-1",
        "date": "2025-05-11",
    }))];
    let before = records.clone();

    let outcomes = simulate(
        &accounts,
        &records,
        &[],
        today,
        7,
        &ExpansionLimits::default(),
    )
    .unwrap();

    assert_eq!(records, before);
    assert_eq!(outcomes[0].baseline, outcomes[0].adjusted);
    assert_eq!(outcomes[0].available_delta, 0.0);
}
