//! Weekly aggregation.
//!
//! This module folds a completed week of [`DayResult`]s into a [`WeekSummary`] and
//! drives a whole-week calculation from raw [`DayEntry`]s. Nothing is carried between
//! calls: every calculation starts from scratch.

use std::collections::HashSet;
use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, DayEntry, DayResult, WeekCalculation, WeekDay, WeekPeriod, WeekSummary,
};

use super::day_calculation::calculate_day;
use super::duration::MINUTES_PER_HOUR;

/// The engine version reported in every calculation.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Formats a minute count as `HH:MM`.
///
/// Hours are zero-padded to at least two digits and are not wrapped at 24.
///
/// # Examples
///
/// ```
/// use weekly_wage_engine::calculation::format_minutes;
///
/// assert_eq!(format_minutes(0), "00:00");
/// assert_eq!(format_minutes(65), "01:05");
/// assert_eq!(format_minutes(1800), "30:00");
/// assert_eq!(format_minutes(6001), "100:01");
/// ```
pub fn format_minutes(total_minutes: u32) -> String {
    format!(
        "{:02}:{:02}",
        total_minutes / MINUTES_PER_HOUR,
        total_minutes % MINUTES_PER_HOUR
    )
}

/// Aggregates day results into weekly totals.
///
/// Totals are plain sums. The returned summary keeps the days in the order given.
///
/// # Examples
///
/// ```
/// use weekly_wage_engine::calculation::{aggregate_week, calculate_day};
/// use weekly_wage_engine::models::{DayEntry, WeekDay};
/// use rust_decimal::Decimal;
///
/// let days = WeekDay::ALL
///     .iter()
///     .map(|day| calculate_day(&DayEntry::off(*day), 1).result)
///     .collect();
/// let summary = aggregate_week(days);
///
/// assert_eq!(summary.total_pay, Decimal::ZERO);
/// assert_eq!(summary.total_minutes_display, "00:00");
/// ```
pub fn aggregate_week(days: Vec<DayResult>) -> WeekSummary {
    let total_pay: Decimal = days.iter().map(|d| d.total_pay).sum();
    let total_minutes: u32 = days.iter().map(|d| d.worked_minutes).sum();

    WeekSummary {
        days,
        total_pay,
        total_minutes,
        total_minutes_display: format_minutes(total_minutes),
    }
}

/// Checks that `entries` hold every weekday exactly once.
fn validate_week(entries: &[DayEntry]) -> EngineResult<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.day) {
            return Err(EngineError::IncompleteWeek {
                message: format!("{} appears more than once", entry.day),
            });
        }
    }

    let missing: Vec<&str> = WeekDay::ALL
        .iter()
        .filter(|day| !seen.contains(*day))
        .map(|day| day.label())
        .collect();
    if !missing.is_empty() {
        return Err(EngineError::IncompleteWeek {
            message: format!("missing {}", missing.join(", ")),
        });
    }

    Ok(())
}

fn aggregation_audit_step(summary: &WeekSummary, step_number: u32) -> AuditStep {
    let worked_days = summary.days.iter().filter(|d| d.worked).count();
    AuditStep {
        step_number,
        rule_id: "weekly_aggregation".to_string(),
        rule_name: "Weekly Totals".to_string(),
        input: serde_json::json!({
            "days": summary.days.len(),
            "worked_days": worked_days
        }),
        output: serde_json::json!({
            "total_pay": summary.total_pay.normalize().to_string(),
            "total_minutes": summary.total_minutes,
            "total_minutes_display": summary.total_minutes_display
        }),
        reasoning: format!(
            "Summed {} days ({} worked): total pay {}, total time {}",
            summary.days.len(),
            worked_days,
            summary.total_pay.normalize(),
            summary.total_minutes_display
        ),
    }
}

/// Calculates a full week from its day entries.
///
/// # Arguments
///
/// * `entries` - One entry per weekday, in reporting order
/// * `period` - Optional calendar range used only to label the result
///
/// # Errors
///
/// Returns [`EngineError::IncompleteWeek`] unless every weekday appears exactly once.
///
/// # Examples
///
/// ```
/// use weekly_wage_engine::calculation::calculate_week;
/// use weekly_wage_engine::models::{DayEntry, Surcharge, WeekDay};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
/// let entries: Vec<DayEntry> = WeekDay::ALL
///     .iter()
///     .map(|day| match day {
///         WeekDay::Saturday | WeekDay::Sunday => DayEntry::off(*day),
///         _ => DayEntry::worked(*day, t(8), t(14), Surcharge::Zero),
///     })
///     .collect();
///
/// let calculation = calculate_week(&entries, None).unwrap();
/// assert_eq!(calculation.summary.total_pay, Decimal::from(500_000));
/// assert_eq!(calculation.summary.total_minutes_display, "30:00");
/// ```
pub fn calculate_week(
    entries: &[DayEntry],
    period: Option<WeekPeriod>,
) -> EngineResult<WeekCalculation> {
    let start_time = Instant::now();
    validate_week(entries)?;

    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;
    let mut days = Vec::with_capacity(entries.len());

    for entry in entries {
        let calculation = calculate_day(entry, step_number);
        step_number += calculation.audit_steps.len() as u32;
        audit_steps.extend(calculation.audit_steps);
        days.push(calculation.result);
    }

    let summary = aggregate_week(days);
    audit_steps.push(aggregation_audit_step(&summary, step_number));

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        total_pay = %summary.total_pay,
        total_minutes = summary.total_minutes,
        duration_us,
        "Week calculated"
    );

    Ok(WeekCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        period,
        summary,
        audit_trace: AuditTrace {
            steps: audit_steps,
            duration_us,
        },
    })
}
