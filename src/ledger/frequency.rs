use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Cadence of a recurring transaction series.
///
/// Parsing accepts both the `bi-weekly` and `biweekly` spellings; older
/// producers wrote the latter. Anything else is rejected at the
/// materializer boundary rather than degrading into a stalled series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    #[serde(rename = "bi-weekly", alias = "biweekly")]
    Biweekly,
    Monthly,
    Quarterly,
    Annually,
}

impl Frequency {
    /// Advances one period on UTC calendar components. Month-based steps
    /// clamp end-of-month overflow (Jan 31 + 1 month = Feb 28), which keeps
    /// every run of the same series on the same dates.
    pub fn advance(self, from: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Daily => from + Duration::days(1),
            Frequency::Weekly => from + Duration::days(7),
            Frequency::Biweekly => from + Duration::days(14),
            Frequency::Monthly => from.checked_add_months(Months::new(1)).unwrap_or(from),
            Frequency::Quarterly => from.checked_add_months(Months::new(3)).unwrap_or(from),
            Frequency::Annually => from.checked_add_months(Months::new(12)).unwrap_or(from),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "bi-weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Annually => "annually",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a stored frequency string is not one of the known cadences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFrequency(pub String);

impl fmt::Display for UnknownFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown frequency value: {:?}", self.0)
    }
}

impl std::error::Error for UnknownFrequency {}

impl FromStr for Frequency {
    type Err = UnknownFrequency;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "bi-weekly" | "biweekly" => Ok(Frequency::Biweekly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "annually" => Ok(Frequency::Annually),
            other => Err(UnknownFrequency(other.to_string())),
        }
    }
}
