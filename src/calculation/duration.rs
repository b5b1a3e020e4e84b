//! Worked duration calculation.
//!
//! Clock times carry no date. An exit time earlier than the entry time is read as
//! belonging to the following day, so a pair never fails to produce a duration.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Number of minutes in an hour.
pub const MINUTES_PER_HOUR: u32 = 60;

/// Converts a wall-clock time to minutes since midnight. Seconds are ignored.
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * MINUTES_PER_HOUR + time.minute()
}

/// Converts whole minutes to decimal hours.
///
/// ```
/// use weekly_wage_engine::calculation::hours_from_minutes;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hours_from_minutes(360), Decimal::from(6));
/// assert_eq!(hours_from_minutes(90), Decimal::new(15, 1));
/// ```
pub fn hours_from_minutes(minutes: u32) -> Decimal {
    Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR)
}

/// Computes the worked minutes between an entry and an exit time.
///
/// * `worked == false` returns `0` without looking at the times.
/// * `exit >= entry` is a same-day span.
/// * `exit < entry` wraps past midnight into the next day.
///
/// Equal times yield `0`, which prices the same as a day off.
///
/// # Examples
///
/// ```
/// use weekly_wage_engine::calculation::compute_duration;
/// use chrono::NaiveTime;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// assert_eq!(compute_duration(t(8, 0), t(17, 0), true), 540);
/// assert_eq!(compute_duration(t(22, 0), t(6, 0), true), 480);
/// assert_eq!(compute_duration(t(9, 15), t(9, 15), true), 0);
/// assert_eq!(compute_duration(t(8, 0), t(17, 0), false), 0);
/// ```
pub fn compute_duration(entry: NaiveTime, exit: NaiveTime, worked: bool) -> u32 {
    if !worked {
        return 0;
    }

    let entry_minutes = minutes_since_midnight(entry);
    let exit_minutes = minutes_since_midnight(exit);

    if exit_minutes >= entry_minutes {
        exit_minutes - entry_minutes
    } else {
        (MINUTES_PER_DAY - entry_minutes) + exit_minutes
    }
}

/// Builds the audit step describing how a day's duration was derived.
pub fn duration_audit_step(
    entry: Option<NaiveTime>,
    exit: Option<NaiveTime>,
    minutes: u32,
    step_number: u32,
) -> AuditStep {
    let overnight = matches!(
        (entry, exit),
        (Some(e), Some(x)) if minutes_since_midnight(x) < minutes_since_midnight(e)
    );

    let reasoning = match (entry, exit) {
        (Some(entry), Some(exit)) if overnight => format!(
            "Exit {} is before entry {}, span wraps past midnight: {} minutes",
            exit.format("%H:%M"),
            entry.format("%H:%M"),
            minutes
        ),
        (Some(entry), Some(exit)) => format!(
            "Same-day span from {} to {}: {} minutes",
            entry.format("%H:%M"),
            exit.format("%H:%M"),
            minutes
        ),
        _ => "Day marked as not worked: 0 minutes".to_string(),
    };

    AuditStep {
        step_number,
        rule_id: "duration_computation".to_string(),
        rule_name: "Worked Duration".to_string(),
        input: serde_json::json!({
            "worked": entry.is_some() && exit.is_some(),
            "entry": entry.map(|t| t.format("%H:%M").to_string()),
            "exit": exit.map(|t| t.format("%H:%M").to_string())
        }),
        output: serde_json::json!({
            "worked_minutes": minutes,
            "overnight": overnight
        }),
        reasoning,
    }
}
