//! Plain-text weekly report.
//!
//! Renders a [`WeekCalculation`] for people to read. Every figure comes from the
//! calculation as-is; this module only formats.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculation::{HOURLY_RATE, SIX_HOUR_FLAT};
use crate::models::{DayResult, Surcharge, WeekCalculation};

/// Formats an amount as whole currency units with thousands separators.
///
/// # Examples
///
/// ```
/// use weekly_wage_engine::report::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::from(100_000)), "$100,000");
/// assert_eq!(format_money(Decimal::new(9299845, 2)), "$92,998");
/// assert_eq!(format_money(Decimal::ZERO), "$0");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

fn clock(day: &DayResult) -> (String, String) {
    match (day.entry, day.exit) {
        (Some(entry), Some(exit)) if day.worked => (
            entry.format("%H:%M").to_string(),
            exit.format("%H:%M").to_string(),
        ),
        _ => ("---".to_string(), "---".to_string()),
    }
}

/// A [`WeekCalculation`] displayed as the weekly report.
///
/// The layout is: title, optional week label, generation time, the pay rules,
/// a per-day table, weekly totals, and a per-day analysis.
pub struct WeeklyReport<'a>(pub &'a WeekCalculation);

impl fmt::Display for WeeklyReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let calculation = self.0;
        let summary = &calculation.summary;

        writeln!(f, "WEEKLY WAGE REPORT")?;
        if let Some(period) = &calculation.period {
            writeln!(f, "Week: {}", period.label())?;
        }
        writeln!(
            f,
            "Generated: {}",
            calculation.timestamp.format("%d/%m/%Y %H:%M")
        )?;
        writeln!(f)?;

        writeln!(f, "RULES APPLIED:")?;
        writeln!(f, "- Under 6 hours: hours x {}", format_money(HOURLY_RATE))?;
        writeln!(f, "- Exactly 6 hours: {} flat", format_money(SIX_HOUR_FLAT))?;
        writeln!(
            f,
            "- Over 6 hours: {} + (extra hours x {})",
            format_money(SIX_HOUR_FLAT),
            format_money(HOURLY_RATE)
        )?;
        writeln!(f, "- Surcharges are added to the base pay")?;
        writeln!(f)?;

        writeln!(f, "DETAIL BY DAY:")?;
        writeln!(
            f,
            "{:<10} {:<6} {:<6} {:>6} {:>10} {:>10} {:>10}",
            "DAY", "ENTRY", "EXIT", "HOURS", "BASE PAY", "SURCHARGE", "DAY TOTAL"
        )?;
        for day in &summary.days {
            let (entry, exit) = clock(day);
            let hours = day
                .worked_hours
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            writeln!(
                f,
                "{:<10} {:<6} {:<6} {:>6} {:>10} {:>10} {:>10}",
                day.day.label(),
                entry,
                exit,
                format!("{:.1}h", hours),
                format_money(day.base_pay),
                format_money(day.surcharge.as_decimal()),
                format_money(day.total_pay)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "TOTAL TIME: {}", summary.total_minutes_display)?;
        writeln!(f, "WEEKLY TOTAL: {}", format_money(summary.total_pay))?;
        writeln!(f)?;

        writeln!(f, "ANALYSIS BY DAY:")?;
        for (i, day) in summary.days.iter().enumerate() {
            let schedule = match clock(day) {
                (entry, exit) if day.worked => format!(" ({} - {})", entry, exit),
                _ => String::new(),
            };
            writeln!(
                f,
                "{}. {}: {}{}",
                i + 1,
                day.day.label(),
                day.description,
                schedule
            )?;
            if day.surcharge != Surcharge::Zero {
                writeln!(
                    f,
                    "   + Surcharge applied: {}",
                    format_money(day.surcharge.as_decimal())
                )?;
            }
        }

        Ok(())
    }
}

/// Renders the weekly report as a string.
pub fn render_report(calculation: &WeekCalculation) -> String {
    WeeklyReport(calculation).to_string()
}
