//! Per-day calculation.
//!
//! Combines duration computation and tier pricing into a [`DayResult`], recording
//! an audit step for each.

use crate::models::{AuditStep, DayEntry, DayResult};

use super::day_pricing::{price_minutes, pricing_audit_step};
use super::duration::{duration_audit_step, hours_from_minutes};

/// The result of calculating a single day, including the audit steps.
#[derive(Debug, Clone)]
pub struct DayCalculation {
    /// The priced day.
    pub result: DayResult,
    /// The audit steps recording this calculation (duration, then pricing).
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the worked duration and pay for one day.
///
/// # Arguments
///
/// * `entry` - The day's attendance
/// * `step_number` - The step number for the first audit step
///
/// # Examples
///
/// ```
/// use weekly_wage_engine::calculation::calculate_day;
/// use weekly_wage_engine::models::{DayEntry, PayTier, Surcharge, WeekDay};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let entry = DayEntry::worked(
///     WeekDay::Monday,
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
///     Surcharge::FiveThousand,
/// );
/// let calculation = calculate_day(&entry, 1);
///
/// assert_eq!(calculation.result.worked_minutes, 360);
/// assert_eq!(calculation.result.tier, PayTier::FullShift);
/// assert_eq!(calculation.result.total_pay, Decimal::from(105_000));
/// assert_eq!(calculation.audit_steps.len(), 2);
/// ```
pub fn calculate_day(entry: &DayEntry, step_number: u32) -> DayCalculation {
    let clock_times = entry.clock_times();
    let entry_time = clock_times.map(|(entry, _)| entry);
    let exit_time = clock_times.map(|(_, exit)| exit);

    let worked_minutes = entry.worked_minutes();
    let worked_hours = hours_from_minutes(worked_minutes);
    let surcharge = entry.surcharge();

    let duration_step = duration_audit_step(entry_time, exit_time, worked_minutes, step_number);

    let price = price_minutes(worked_minutes, surcharge);
    let pricing_step = pricing_audit_step(worked_hours, surcharge, &price, step_number + 1);

    let result = DayResult {
        day: entry.day,
        worked: entry.is_worked(),
        entry: entry_time,
        exit: exit_time,
        worked_minutes,
        worked_hours,
        base_pay: price.base_pay,
        surcharge,
        total_pay: price.total_pay,
        tier: price.tier,
        description: price.description,
    };

    DayCalculation {
        result,
        audit_steps: vec![duration_step, pricing_step],
    }
}
