//! Week period model.
//!
//! This module contains the [`WeekPeriod`] type used to label a calculated week with
//! its calendar dates. The dates never take part in the pay calculation.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::WeekDay;

/// The calendar range a week of entries belongs to.
///
/// # Example
///
/// ```
/// use weekly_wage_engine::models::{WeekDay, WeekPeriod};
/// use chrono::NaiveDate;
///
/// let period = WeekPeriod::starting(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
///
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
/// assert_eq!(period.label(), "12/01/2026 - 18/01/2026");
/// assert_eq!(
///     period.date_of(WeekDay::Wednesday),
///     NaiveDate::from_ymd_opt(2026, 1, 14)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPeriod {
    /// The first day of the week (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the week (inclusive).
    pub end_date: NaiveDate,
}

impl WeekPeriod {
    /// Creates a period from an explicit date pair.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] when `end_date` is before `start_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if end_date < start_date {
            return Err(EngineError::InvalidPeriod {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Creates the seven-day period beginning on `start_date`.
    pub fn starting(start_date: NaiveDate) -> Self {
        let end_date = start_date
            .checked_add_days(Days::new(6))
            .unwrap_or(NaiveDate::MAX);
        Self {
            start_date,
            end_date,
        }
    }

    /// Checks if a given date falls within this period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the calendar date of `day`, counting from the start date.
    ///
    /// Returns `None` if that date would fall after the end of the period.
    pub fn date_of(&self, day: WeekDay) -> Option<NaiveDate> {
        self.start_date
            .checked_add_days(Days::new(u64::from(day.days_from_monday())))
            .filter(|date| self.contains_date(*date))
    }

    /// Formats the period as `DD/MM/YYYY - DD/MM/YYYY`.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start_date.format("%d/%m/%Y"),
            self.end_date.format("%d/%m/%Y")
        )
    }
}
