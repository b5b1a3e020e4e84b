//! Calculation logic for the Weekly Wage Engine.
//!
//! This module contains worked duration computation (including overnight wrap), the
//! single-day tiered pay rule, per-day calculation with audit steps, and weekly
//! aggregation.

mod day_calculation;
mod day_pricing;
mod duration;
mod weekly;

pub use day_calculation::{DayCalculation, calculate_day};
pub use day_pricing::{
    DayPrice, FLAT_SHIFT_HOURS, FLAT_SHIFT_MINUTES, HOURLY_RATE, SIX_HOUR_FLAT, price_day,
    price_minutes, pricing_audit_step,
};
pub use duration::{
    MINUTES_PER_DAY, MINUTES_PER_HOUR, compute_duration, duration_audit_step, hours_from_minutes,
    minutes_since_midnight,
};
pub use weekly::{ENGINE_VERSION, aggregate_week, calculate_week, format_minutes};
