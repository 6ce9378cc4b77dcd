use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::errors::ProjectionError;
use crate::ledger::{Account, TransactionInstance, TransactionRecord};

use super::materialize::{checked_horizon, materialize_instances};
use super::schedule::ExpansionLimits;

/// One point of a projection series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBalance {
    pub date: NaiveDate,
    pub balance: f64,
}

/// The day-by-day projected balance for one account, from today through
/// today + horizon inclusive. Day 0 already folds in every instance dated
/// before today.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProjection {
    pub account_id: String,
    pub series: Vec<DailyBalance>,
}

/// Rolls an account's starting balance forward over the materialized
/// instances. The series always holds exactly `horizon_days + 1` entries;
/// days with no instances carry the previous balance forward unchanged.
pub fn project_account(
    account: &Account,
    instances: &[TransactionInstance],
    today: NaiveDate,
    horizon_days: i64,
) -> Result<AccountProjection, ProjectionError> {
    let horizon_days = checked_horizon(horizon_days)?;

    let mut baseline = account.balance;
    let mut daily_totals: HashMap<NaiveDate, f64> = HashMap::new();
    for instance in instances.iter().filter(|i| i.account_id == account.id) {
        if instance.date < today {
            baseline += instance.amount;
        } else {
            *daily_totals.entry(instance.date).or_insert(0.0) += instance.amount;
        }
    }

    let mut series = Vec::with_capacity(horizon_days as usize + 1);
    let mut running = baseline;
    for offset in 0..=horizon_days {
        let date = today + Duration::days(offset);
        if let Some(total) = daily_totals.get(&date) {
            running += total;
        }
        series.push(DailyBalance {
            date,
            balance: running,
        });
    }

    Ok(AccountProjection {
        account_id: account.id.clone(),
        series,
    })
}

/// Full pipeline convenience: materializes the record set once and
/// projects every account over it, preserving account input order.
pub fn project_accounts(
    accounts: &[Account],
    records: &[TransactionRecord],
    today: NaiveDate,
    horizon_days: i64,
    limits: &ExpansionLimits,
) -> Result<Vec<AccountProjection>, ProjectionError> {
    let instances = materialize_instances(records, today, horizon_days, limits)?;
    accounts
        .iter()
        .map(|account| project_account(account, &instances, today, horizon_days))
        .collect()
}

/// The minimum projected balance across the series: the worst point the
/// account reaches within the horizon, surfaced to users as the amount
/// that is safe to spend. An empty series reads as zero.
pub fn available_to_spend(series: &[DailyBalance]) -> f64 {
    series
        .iter()
        .map(|point| point.balance)
        .reduce(f64::min)
        .unwrap_or(0.0)
}

/// The day the series bottoms out, for low-balance alerting. The earliest
/// such day wins when the minimum repeats.
pub fn lowest_point(series: &[DailyBalance]) -> Option<&DailyBalance> {
    series
        .iter()
        .fold(None, |lowest: Option<&DailyBalance>, point| match lowest {
            Some(current) if current.balance <= point.balance => Some(current),
            _ => Some(point),
        })
}
