//! Core data models for the Weekly Wage Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod day_entry;
mod week_day;
mod week_period;

pub use calculation_result::{
    AuditStep, AuditTrace, DayResult, PayTier, WeekCalculation, WeekSummary,
};
pub use day_entry::{Attendance, DayEntry};
pub use week_day::{Surcharge, WeekDay};
pub use week_period::WeekPeriod;
