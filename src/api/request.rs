//! Request types for the Weekly Wage Engine API.
//!
//! This module defines the JSON request body shared by the `/calculate` and
//! `/report` endpoints, and its conversion into validated domain types.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DayEntry, Surcharge, WeekDay, WeekPeriod};

/// Request body for the `/calculate` and `/report` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Optional calendar range used to label the week.
    #[serde(default)]
    pub period: Option<PeriodRequest>,
    /// One entry per weekday.
    pub days: Vec<DayEntryRequest>,
}

/// Week period information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The first day of the week (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the week (inclusive).
    pub end_date: NaiveDate,
}

/// One day in a calculation request.
///
/// When `no_work` is set, any times and surcharge supplied are discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEntryRequest {
    /// The day this entry describes.
    pub day: WeekDay,
    /// Marks the day as not worked.
    #[serde(default)]
    pub no_work: bool,
    /// Clock-in time (`HH:MM` or `HH:MM:SS`).
    #[serde(default)]
    pub entry: Option<NaiveTime>,
    /// Clock-out time (`HH:MM` or `HH:MM:SS`).
    #[serde(default)]
    pub exit: Option<NaiveTime>,
    /// Flat surcharge amount.
    #[serde(default)]
    pub surcharge: Surcharge,
}

impl TryFrom<DayEntryRequest> for DayEntry {
    type Error = EngineError;

    fn try_from(req: DayEntryRequest) -> Result<Self, Self::Error> {
        if req.no_work {
            return Ok(DayEntry::off(req.day));
        }

        match (req.entry, req.exit) {
            (Some(entry), Some(exit)) => Ok(DayEntry::worked(req.day, entry, exit, req.surcharge)),
            (None, _) => Err(EngineError::InvalidDayEntry {
                day: req.day.label().to_string(),
                message: "missing entry time".to_string(),
            }),
            (_, None) => Err(EngineError::InvalidDayEntry {
                day: req.day.label().to_string(),
                message: "missing exit time".to_string(),
            }),
        }
    }
}

impl TryFrom<PeriodRequest> for WeekPeriod {
    type Error = EngineError;

    fn try_from(req: PeriodRequest) -> Result<Self, Self::Error> {
        WeekPeriod::new(req.start_date, req.end_date)
    }
}

impl CalculationRequest {
    /// Converts the request into validated day entries and an optional period.
    pub fn into_domain(self) -> EngineResult<(Vec<DayEntry>, Option<WeekPeriod>)> {
        let entries = self
            .days
            .into_iter()
            .map(DayEntry::try_from)
            .collect::<EngineResult<Vec<_>>>()?;
        let period = self.period.map(WeekPeriod::try_from).transpose()?;
        Ok((entries, period))
    }
}
