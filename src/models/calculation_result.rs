//! Calculation result models for the Weekly Wage Engine.
//!
//! This module contains the per-day [`DayResult`], the aggregated [`WeekSummary`] and the
//! [`WeekCalculation`] envelope that adds identifiers and an audit trace. Downstream
//! consumers (reports, exports) format these figures and never recompute them.

use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Surcharge, WeekDay, WeekPeriod};

/// The branch of the pay rule that priced a day.
///
/// # Example
///
/// ```
/// use weekly_wage_engine::models::PayTier;
///
/// let tier = PayTier::FullShift;
/// assert_eq!(serde_json::to_string(&tier).unwrap(), "\"full_shift\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayTier {
    /// Zero duration; pays nothing, surcharge included.
    NoWork,
    /// Under six hours, paid per hour.
    Regular,
    /// Exactly six hours, paid the flat rate.
    FullShift,
    /// Over six hours: flat rate plus hourly pay for the excess.
    Extended,
}

/// The priced outcome of a single day.
///
/// Built once by the calculator and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResult {
    /// The day this result belongs to.
    pub day: WeekDay,
    /// Whether the day had clock-in/clock-out times.
    pub worked: bool,
    /// Entry time, for worked days.
    pub entry: Option<NaiveTime>,
    /// Exit time, for worked days.
    pub exit: Option<NaiveTime>,
    /// Worked duration in whole minutes.
    pub worked_minutes: u32,
    /// Worked duration in hours (`worked_minutes / 60`).
    pub worked_hours: Decimal,
    /// Pay before the surcharge.
    pub base_pay: Decimal,
    /// The surcharge carried over from the entry.
    pub surcharge: Surcharge,
    /// `base_pay + surcharge`, or zero on a no-work day.
    pub total_pay: Decimal,
    /// The tier that priced this day.
    pub tier: PayTier,
    /// Human-readable description of the tier.
    pub description: String,
}

/// Weekly totals over an ordered sequence of day results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// The day results, in the order they were supplied.
    pub days: Vec<DayResult>,
    /// Sum of every day's total pay.
    pub total_pay: Decimal,
    /// Sum of every day's worked minutes.
    pub total_minutes: u32,
    /// `total_minutes` formatted as `HH:MM`.
    pub total_minutes_display: String,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a week calculation.
///
/// # Example
///
/// ```
/// use weekly_wage_engine::models::{AuditTrace, WeekCalculation, WeekSummary};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = WeekCalculation {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     period: None,
///     summary: WeekSummary {
///         days: vec![],
///         total_pay: Decimal::ZERO,
///         total_minutes: 0,
///         total_minutes_display: "00:00".to_string(),
///     },
///     audit_trace: AuditTrace {
///         steps: vec![],
///         duration_us: 0,
///     },
/// };
/// assert!(result.period.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The calendar range used to label the week, if one was supplied.
    pub period: Option<WeekPeriod>,
    /// Per-day results and weekly totals.
    pub summary: WeekSummary,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_day_result() -> DayResult {
        DayResult {
            day: WeekDay::Monday,
            worked: true,
            entry: NaiveTime::from_hms_opt(8, 0, 0),
            exit: NaiveTime::from_hms_opt(14, 0, 0),
            worked_minutes: 360,
            worked_hours: dec("6"),
            base_pay: dec("100000"),
            surcharge: Surcharge::FiveThousand,
            total_pay: dec("105000"),
            tier: PayTier::FullShift,
            description: "full 6 hours".to_string(),
        }
    }

    #[test]
    fn test_pay_tier_serialization() {
        assert_eq!(serde_json::to_string(&PayTier::NoWork).unwrap(), "\"no_work\"");
        assert_eq!(serde_json::to_string(&PayTier::Regular).unwrap(), "\"regular\"");
        assert_eq!(serde_json::to_string(&PayTier::Extended).unwrap(), "\"extended\"");
    }

    #[test]
    fn test_day_result_serializes_decimals_as_strings() {
        let json = serde_json::to_value(sample_day_result()).unwrap();

        assert_eq!(json["day"], "monday");
        assert_eq!(json["entry"], "08:00:00");
        assert_eq!(json["worked_minutes"], 360);
        assert_eq!(json["base_pay"].as_str().unwrap(), "100000");
        assert_eq!(json["surcharge"], 5000);
        assert_eq!(json["total_pay"].as_str().unwrap(), "105000");
        assert_eq!(json["tier"], "full_shift");
    }

    #[test]
    fn test_day_result_round_trip() {
        let result = sample_day_result();
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: DayResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }

    #[test]
    fn test_week_calculation_serialization_includes_period() {
        let calculation = WeekCalculation {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            period: Some(WeekPeriod::starting(
                chrono::NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            )),
            summary: WeekSummary {
                days: vec![sample_day_result()],
                total_pay: dec("105000"),
                total_minutes: 360,
                total_minutes_display: "06:00".to_string(),
            },
            audit_trace: AuditTrace {
                steps: vec![],
                duration_us: 12,
            },
        };

        let json = serde_json::to_value(&calculation).unwrap();
        assert_eq!(json["period"]["start_date"], "2026-01-12");
        assert_eq!(json["summary"]["total_minutes_display"], "06:00");
        assert_eq!(json["audit_trace"]["duration_us"], 12);
    }
}
