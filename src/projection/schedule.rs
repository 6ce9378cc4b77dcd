use chrono::NaiveDate;

use crate::ledger::RecurringSchedule;

/// Hard backstop on occurrences generated for a single series. High enough
/// for a daily series over a multi-year horizon, low enough that a stalled
/// cursor cannot spin.
pub const DEFAULT_MAX_OCCURRENCES: usize = 1000;

/// Bounds on series expansion. The cap is a named, caller-visible knob
/// rather than a buried literal; it is the termination guarantee of last
/// resort and applies regardless of horizon length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionLimits {
    pub max_occurrences: usize,
}

impl Default for ExpansionLimits {
    fn default() -> Self {
        Self {
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
        }
    }
}

/// Expands a recurring schedule into its occurrence dates from the anchor
/// through `horizon_end` inclusive.
///
/// Stops when the cursor passes the horizon, passes the series end date,
/// or hits the iteration cap. Excluded dates are suppressed from the
/// output but still consume a normal cursor advance, so an exclusion never
/// shifts the rest of the series.
pub fn expand_occurrences(
    schedule: &RecurringSchedule,
    horizon_end: NaiveDate,
    limits: &ExpansionLimits,
) -> Vec<NaiveDate> {
    let mut occurrences = Vec::new();
    let mut cursor = schedule.anchor;
    let mut guard = 0usize;

    while guard < limits.max_occurrences {
        if cursor > horizon_end {
            break;
        }
        if schedule.end_date.is_some_and(|end| cursor > end) {
            break;
        }
        if !schedule.excluded.contains(&cursor) {
            occurrences.push(cursor);
        }
        let next = schedule.frequency.advance(cursor);
        if next <= cursor {
            // A non-advancing step would otherwise spin until the cap.
            tracing::warn!(
                date = %cursor,
                frequency = %schedule.frequency,
                "schedule failed to advance; truncating expansion"
            );
            break;
        }
        cursor = next;
        guard += 1;
    }

    occurrences
}
