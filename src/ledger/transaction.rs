use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::{format_date, normalize_date, DateValue};
use super::frequency::Frequency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Nested recurring definition as newer producers store it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecurringDetails {
    pub next_date: Option<DateValue>,
    pub frequency: Option<String>,
    pub end_date: Option<DateValue>,
    pub excluded_dates: Option<Vec<DateValue>>,
}

/// A transaction document snapshot as read from upstream storage.
///
/// Recurring fields exist in two historical shapes: nested under
/// `recurringDetails`, or flat at the top level on older records. Field
/// resolution prefers the nested shape and falls back to the flat one, so
/// the rest of the pipeline only ever sees [`RecurringSchedule`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub category: Option<String>,
    pub account_id: String,
    #[serde(default)]
    pub date: Option<DateValue>,
    /// Secondary date for legacy one-off records missing an explicit date.
    #[serde(default)]
    pub created_at: Option<DateValue>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurring_details: Option<RecurringDetails>,
    // Legacy flat recurring fields.
    #[serde(default)]
    pub next_date: Option<DateValue>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub end_date: Option<DateValue>,
    #[serde(default)]
    pub excluded_dates: Option<Vec<DateValue>>,
}

/// Why a recurring record could not be resolved into a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleGap {
    MissingAnchor,
    MissingFrequency,
    UnknownFrequency(String),
}

impl fmt::Display for ScheduleGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleGap::MissingAnchor => f.write_str("missing or unparseable anchor date"),
            ScheduleGap::MissingFrequency => f.write_str("missing frequency"),
            ScheduleGap::UnknownFrequency(value) => {
                write!(f, "unknown frequency value {value:?}")
            }
        }
    }
}

/// Canonical recurring definition after boundary normalization. Everything
/// downstream of the materializer works on this shape only.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurringSchedule {
    pub anchor: NaiveDate,
    pub frequency: Frequency,
    pub end_date: Option<NaiveDate>,
    pub excluded: BTreeSet<NaiveDate>,
}

impl TransactionRecord {
    fn details(&self) -> Option<&RecurringDetails> {
        self.recurring_details.as_ref()
    }

    fn anchor_value(&self) -> Option<&DateValue> {
        self.details()
            .and_then(|d| d.next_date.as_ref())
            .or(self.next_date.as_ref())
    }

    fn frequency_value(&self) -> Option<&str> {
        self.details()
            .and_then(|d| d.frequency.as_deref())
            .or(self.frequency.as_deref())
    }

    fn end_date_value(&self) -> Option<&DateValue> {
        self.details()
            .and_then(|d| d.end_date.as_ref())
            .or(self.end_date.as_ref())
    }

    fn excluded_values(&self) -> Option<&[DateValue]> {
        self.details()
            .and_then(|d| d.excluded_dates.as_deref())
            .or(self.excluded_dates.as_deref())
    }

    /// Resolves either recurring shape into a canonical schedule. An
    /// unparseable end date is treated as absent (open-ended series); an
    /// unparseable excluded entry is dropped on its own.
    pub fn recurring_schedule(&self) -> Result<RecurringSchedule, ScheduleGap> {
        let anchor = self
            .anchor_value()
            .and_then(normalize_date)
            .ok_or(ScheduleGap::MissingAnchor)?;
        let raw_frequency = self
            .frequency_value()
            .ok_or(ScheduleGap::MissingFrequency)?;
        let frequency = raw_frequency
            .parse::<Frequency>()
            .map_err(|err| ScheduleGap::UnknownFrequency(err.0))?;
        let end_date = self.end_date_value().and_then(normalize_date);
        let excluded = self
            .excluded_values()
            .unwrap_or_default()
            .iter()
            .filter_map(normalize_date)
            .collect();
        Ok(RecurringSchedule {
            anchor,
            frequency,
            end_date,
            excluded,
        })
    }
}

/// A dated, summable copy of a transaction. One-off records produce a
/// single instance equal to themselves; recurring records produce one per
/// occurrence, each carrying a synthetic reproducible id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInstance {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub account_id: String,
    pub date: NaiveDate,
    pub is_instance: bool,
}

impl TransactionInstance {
    /// A one-off transaction carried through unchanged apart from its
    /// normalized date.
    pub fn one_off(record: &TransactionRecord, date: NaiveDate) -> Self {
        Self {
            id: record.id.clone(),
            instance_id: None,
            amount: record.amount,
            kind: record.kind,
            category: record.category.clone(),
            account_id: record.account_id.clone(),
            date,
            is_instance: false,
        }
    }

    /// One occurrence of a recurring series. The id is derived from the
    /// source id and the occurrence date so repeated runs agree.
    pub fn occurrence(record: &TransactionRecord, date: NaiveDate) -> Self {
        Self {
            id: record.id.clone(),
            instance_id: Some(format!("{}-{}", record.id, format_date(date))),
            amount: record.amount,
            kind: record.kind,
            category: record.category.clone(),
            account_id: record.account_id.clone(),
            date,
            is_instance: true,
        }
    }
}
