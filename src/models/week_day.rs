//! Weekday and surcharge enumerations.
//!
//! Both are closed sets: a week is always Monday..Sunday and a surcharge is always one
//! of the fixed amounts, so anything else is rejected when the value is constructed.

use std::fmt;

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A day of the working week, used as a label for entries and results.
///
/// # Example
///
/// ```
/// use weekly_wage_engine::models::WeekDay;
///
/// assert_eq!(WeekDay::ALL.len(), 7);
/// assert_eq!(WeekDay::ALL[0], WeekDay::Monday);
/// assert_eq!(WeekDay::Wednesday.label(), "Wednesday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekDay {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl WeekDay {
    /// All seven days in reporting order.
    pub const ALL: [WeekDay; 7] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
        WeekDay::Sunday,
    ];

    /// Returns the human-readable label of the day.
    pub fn label(self) -> &'static str {
        match self {
            WeekDay::Monday => "Monday",
            WeekDay::Tuesday => "Tuesday",
            WeekDay::Wednesday => "Wednesday",
            WeekDay::Thursday => "Thursday",
            WeekDay::Friday => "Friday",
            WeekDay::Saturday => "Saturday",
            WeekDay::Sunday => "Sunday",
        }
    }

    /// Number of days after Monday (Monday = 0, Sunday = 6).
    pub fn days_from_monday(self) -> u32 {
        match self {
            WeekDay::Monday => 0,
            WeekDay::Tuesday => 1,
            WeekDay::Wednesday => 2,
            WeekDay::Thursday => 3,
            WeekDay::Friday => 4,
            WeekDay::Saturday => 5,
            WeekDay::Sunday => 6,
        }
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<WeekDay> for Weekday {
    fn from(day: WeekDay) -> Self {
        match day {
            WeekDay::Monday => Weekday::Mon,
            WeekDay::Tuesday => Weekday::Tue,
            WeekDay::Wednesday => Weekday::Wed,
            WeekDay::Thursday => Weekday::Thu,
            WeekDay::Friday => Weekday::Fri,
            WeekDay::Saturday => Weekday::Sat,
            WeekDay::Sunday => Weekday::Sun,
        }
    }
}

impl From<Weekday> for WeekDay {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => WeekDay::Monday,
            Weekday::Tue => WeekDay::Tuesday,
            Weekday::Wed => WeekDay::Wednesday,
            Weekday::Thu => WeekDay::Thursday,
            Weekday::Fri => WeekDay::Friday,
            Weekday::Sat => WeekDay::Saturday,
            Weekday::Sun => WeekDay::Sunday,
        }
    }
}

/// A flat amount added to a worked day's pay.
///
/// Serialized as the plain integer amount. Deserializing any amount outside the
/// fixed set fails with [`EngineError::InvalidSurcharge`].
///
/// # Example
///
/// ```
/// use weekly_wage_engine::models::Surcharge;
///
/// let surcharge = Surcharge::try_from(10000).unwrap();
/// assert_eq!(surcharge, Surcharge::TenThousand);
/// assert!(Surcharge::try_from(7500).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Surcharge {
    /// No surcharge.
    #[default]
    Zero,
    /// 5,000.
    FiveThousand,
    /// 10,000.
    TenThousand,
    /// 15,000.
    FifteenThousand,
    /// 20,000.
    TwentyThousand,
    /// 25,000.
    TwentyFiveThousand,
    /// 40,000.
    FortyThousand,
}

impl Surcharge {
    /// Every allowed surcharge, smallest first.
    pub const ALL: [Surcharge; 7] = [
        Surcharge::Zero,
        Surcharge::FiveThousand,
        Surcharge::TenThousand,
        Surcharge::FifteenThousand,
        Surcharge::TwentyThousand,
        Surcharge::TwentyFiveThousand,
        Surcharge::FortyThousand,
    ];

    /// The surcharge as a plain integer amount.
    pub fn amount(self) -> u32 {
        match self {
            Surcharge::Zero => 0,
            Surcharge::FiveThousand => 5_000,
            Surcharge::TenThousand => 10_000,
            Surcharge::FifteenThousand => 15_000,
            Surcharge::TwentyThousand => 20_000,
            Surcharge::TwentyFiveThousand => 25_000,
            Surcharge::FortyThousand => 40_000,
        }
    }

    /// The surcharge as a monetary value.
    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.amount())
    }
}

impl TryFrom<u32> for Surcharge {
    type Error = EngineError;

    fn try_from(amount: u32) -> Result<Self, Self::Error> {
        Surcharge::ALL
            .into_iter()
            .find(|s| s.amount() == amount)
            .ok_or(EngineError::InvalidSurcharge { amount })
    }
}

impl From<Surcharge> for u32 {
    fn from(surcharge: Surcharge) -> Self {
        surcharge.amount()
    }
}
