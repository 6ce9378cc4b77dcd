//! What-if overlays: rerun the projection with hypothetical transactions
//! mixed in and compare the outcome against the baseline.

use chrono::NaiveDate;

use crate::errors::ProjectionError;
use crate::ledger::{Account, TransactionRecord};
use crate::projection::{available_to_spend, project_accounts, AccountProjection, ExpansionLimits};

/// Baseline and adjusted projections for one account, with the shift in
/// the safe-to-spend figure the hypothetical transactions would cause.
#[derive(Debug, Clone, PartialEq)]
pub struct WhatIfOutcome {
    pub baseline: AccountProjection,
    pub adjusted: AccountProjection,
    pub available_delta: f64,
}

/// Projects every account twice, without and with the hypothetical
/// records appended. The inputs are untouched; this is a pure overlay.
pub fn simulate(
    accounts: &[Account],
    records: &[TransactionRecord],
    hypothetical: &[TransactionRecord],
    today: NaiveDate,
    horizon_days: i64,
    limits: &ExpansionLimits,
) -> Result<Vec<WhatIfOutcome>, ProjectionError> {
    let baseline = project_accounts(accounts, records, today, horizon_days, limits)?;

    let mut combined = records.to_vec();
    combined.extend_from_slice(hypothetical);
    let adjusted = project_accounts(accounts, &combined, today, horizon_days, limits)?;

    Ok(baseline
        .into_iter()
        .zip(adjusted)
        .map(|(baseline, adjusted)| {
            let available_delta =
                available_to_spend(&adjusted.series) - available_to_spend(&baseline.series);
            WhatIfOutcome {
                baseline,
                adjusted,
                available_delta,
            }
        })
        .collect())
}
