use chrono::{Duration, NaiveDate};

use crate::errors::ProjectionError;
use crate::ledger::{normalize_date, TransactionInstance, TransactionRecord};

use super::schedule::{expand_occurrences, ExpansionLimits};

/// Validates a projection horizon. Shared by every entry point that takes
/// one; a bad horizon is a caller bug, not a data-quality issue.
pub(crate) fn checked_horizon(horizon_days: i64) -> Result<i64, ProjectionError> {
    if horizon_days < 1 {
        return Err(ProjectionError::InvalidHorizon(horizon_days));
    }
    Ok(horizon_days)
}

/// Flattens raw transaction snapshots into dated instances covering the
/// window from each record's own dates through `today + horizon_days`.
///
/// One-off records pass through with a normalized date (falling back to
/// their creation timestamp); recurring records are expanded into one
/// instance per occurrence. Records that cannot be resolved are skipped
/// with a warning so the rest of the set still projects.
///
/// Output order is source-record order, chronological within each
/// expansion. Consumers needing global date order must sort.
pub fn materialize_instances(
    records: &[TransactionRecord],
    today: NaiveDate,
    horizon_days: i64,
    limits: &ExpansionLimits,
) -> Result<Vec<TransactionInstance>, ProjectionError> {
    let horizon_end = today + Duration::days(checked_horizon(horizon_days)?);
    let mut instances = Vec::with_capacity(records.len());

    for record in records {
        if !record.is_recurring {
            let date = record
                .date
                .as_ref()
                .and_then(normalize_date)
                .or_else(|| record.created_at.as_ref().and_then(normalize_date));
            match date {
                Some(date) => instances.push(TransactionInstance::one_off(record, date)),
                None => {
                    tracing::warn!(id = %record.id, "skipping transaction with no usable date");
                }
            }
            continue;
        }

        let schedule = match record.recurring_schedule() {
            Ok(schedule) => schedule,
            Err(gap) => {
                tracing::warn!(id = %record.id, %gap, "skipping recurring transaction");
                continue;
            }
        };
        for date in expand_occurrences(&schedule, horizon_end, limits) {
            instances.push(TransactionInstance::occurrence(record, date));
        }
    }

    Ok(instances)
}
