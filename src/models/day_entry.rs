//! Day entry model.
//!
//! A [`DayEntry`] is one day of attendance as supplied by the caller: either a day off,
//! or a clock-in/clock-out pair with a surcharge.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::calculation::compute_duration;

use super::{Surcharge, WeekDay};

/// What happened on a given day.
///
/// A day off carries no clock times and no surcharge, so it can never contribute
/// pay or duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Attendance {
    /// No work on this day.
    Off,
    /// Clocked in and out.
    Worked {
        /// Wall-clock entry time.
        entry: NaiveTime,
        /// Wall-clock exit time. Earlier than `entry` means the next day.
        exit: NaiveTime,
        /// Flat amount added to the day's pay.
        #[serde(default)]
        surcharge: Surcharge,
    },
}

/// A single day of attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    /// The day this entry describes.
    pub day: WeekDay,
    /// Whether and when the day was worked.
    pub attendance: Attendance,
}

impl DayEntry {
    /// Creates an entry for a worked day.
    pub fn worked(day: WeekDay, entry: NaiveTime, exit: NaiveTime, surcharge: Surcharge) -> Self {
        Self {
            day,
            attendance: Attendance::Worked {
                entry,
                exit,
                surcharge,
            },
        }
    }

    /// Creates an entry for a day without work.
    pub fn off(day: WeekDay) -> Self {
        Self {
            day,
            attendance: Attendance::Off,
        }
    }

    /// Returns true if the day has clock-in/clock-out times.
    pub fn is_worked(&self) -> bool {
        matches!(self.attendance, Attendance::Worked { .. })
    }

    /// Returns the `(entry, exit)` pair for a worked day.
    pub fn clock_times(&self) -> Option<(NaiveTime, NaiveTime)> {
        match self.attendance {
            Attendance::Worked { entry, exit, .. } => Some((entry, exit)),
            Attendance::Off => None,
        }
    }

    /// Returns the surcharge, which is always zero on a day off.
    pub fn surcharge(&self) -> Surcharge {
        match self.attendance {
            Attendance::Worked { surcharge, .. } => surcharge,
            Attendance::Off => Surcharge::Zero,
        }
    }

    /// Calculates the worked minutes for this entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekly_wage_engine::models::{DayEntry, Surcharge, WeekDay};
    /// use chrono::NaiveTime;
    ///
    /// let entry = DayEntry::worked(
    ///     WeekDay::Friday,
    ///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    ///     Surcharge::Zero,
    /// );
    /// assert_eq!(entry.worked_minutes(), 480);
    /// assert_eq!(DayEntry::off(WeekDay::Sunday).worked_minutes(), 0);
    /// ```
    pub fn worked_minutes(&self) -> u32 {
        match self.attendance {
            Attendance::Worked { entry, exit, .. } => compute_duration(entry, exit, true),
            Attendance::Off => compute_duration(NaiveTime::MIN, NaiveTime::MIN, false),
        }
    }
}
