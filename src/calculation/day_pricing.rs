//! Single-day tiered pay rule.
//!
//! A day is priced by one of four branches, checked in order:
//!
//! | Worked hours | Base pay                        | Surcharge added |
//! |--------------|---------------------------------|-----------------|
//! | `0`          | `0`                             | no              |
//! | `< 6`        | `hours x 15,500`                | yes             |
//! | `== 6`       | `100,000`                       | yes             |
//! | `> 6`        | `100,000 + (hours - 6) x 15,500` | yes             |
//!
//! Pay jumps at exactly six hours. The rule must not smooth that jump.
//!
//! [`price_day`] is exact for whatever precision the hours carry. [`price_minutes`]
//! rounds base pay to cents, since `minutes x 15,500 / 60` repeats.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, PayTier, Surcharge};

use super::duration::{MINUTES_PER_HOUR, hours_from_minutes};

/// Pay per hour below six hours and for each hour beyond six.
pub const HOURLY_RATE: Decimal = Decimal::from_parts(15_500, 0, 0, false, 0);

/// Flat base pay for a six-hour day.
pub const SIX_HOUR_FLAT: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Hours at which the flat rate applies.
pub const FLAT_SHIFT_HOURS: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// [`FLAT_SHIFT_HOURS`] in whole minutes.
pub const FLAT_SHIFT_MINUTES: u32 = 6 * MINUTES_PER_HOUR;

/// The priced outcome of one day.
///
/// # Example
///
/// ```
/// use weekly_wage_engine::calculation::price_day;
/// use weekly_wage_engine::models::{PayTier, Surcharge};
/// use rust_decimal::Decimal;
///
/// let price = price_day(Decimal::from(6), Surcharge::TenThousand);
/// assert_eq!(price.base_pay, Decimal::from(100_000));
/// assert_eq!(price.total_pay, Decimal::from(110_000));
/// assert_eq!(price.tier, PayTier::FullShift);
/// assert_eq!(price.description, "full 6 hours");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPrice {
    /// Base pay plus surcharge (zero on a no-work day).
    pub total_pay: Decimal,
    /// Human-readable description of the tier.
    pub description: String,
    /// Pay before the surcharge.
    pub base_pay: Decimal,
    /// The tier that applied.
    pub tier: PayTier,
}

/// Prices a day from its worked hours and surcharge.
///
/// The six-hour test is an exact decimal comparison, so `5.9999` hours is still
/// paid per hour while `6` hours is paid the flat rate.
///
/// # Examples
///
/// ```
/// use weekly_wage_engine::calculation::price_day;
/// use weekly_wage_engine::models::Surcharge;
/// use rust_decimal::Decimal;
///
/// // A zero-duration day pays nothing, surcharge included.
/// let price = price_day(Decimal::ZERO, Surcharge::FortyThousand);
/// assert_eq!(price.total_pay, Decimal::ZERO);
/// assert_eq!(price.base_pay, Decimal::ZERO);
/// assert_eq!(price.description, "no work");
///
/// // 8 hours: flat rate plus two hourly units.
/// let price = price_day(Decimal::from(8), Surcharge::Zero);
/// assert_eq!(price.total_pay, Decimal::from(131_000));
/// assert_eq!(price.description, "6h + 2.00h extra");
/// ```
pub fn price_day(hours: Decimal, surcharge: Surcharge) -> DayPrice {
    let tier = if hours.is_zero() {
        PayTier::NoWork
    } else if hours < FLAT_SHIFT_HOURS {
        PayTier::Regular
    } else if hours == FLAT_SHIFT_HOURS {
        PayTier::FullShift
    } else {
        PayTier::Extended
    };

    let base_pay = match tier {
        PayTier::NoWork => Decimal::ZERO,
        PayTier::Regular => hours * HOURLY_RATE,
        PayTier::FullShift => SIX_HOUR_FLAT,
        PayTier::Extended => SIX_HOUR_FLAT + (hours - FLAT_SHIFT_HOURS) * HOURLY_RATE,
    };

    build_price(tier, hours, base_pay, surcharge)
}

/// Prices a day from whole worked minutes.
///
/// The tier is chosen on the integer minute count (`360` is exactly six hours) and
/// hourly pay is computed per minute, so no fractional hour ever decides the tier.
/// Base pay is rounded to 2 decimal places, midpoint away from zero. Otherwise the
/// result matches `price_day(minutes / 60, surcharge)` rounded to cents.
///
/// ```
/// use weekly_wage_engine::calculation::price_minutes;
/// use weekly_wage_engine::models::Surcharge;
/// use rust_decimal::Decimal;
///
/// // 125 minutes: 32291.666... per-minute pay
/// assert_eq!(price_minutes(125, Surcharge::Zero).base_pay, Decimal::new(3229167, 2));
/// ```
pub fn price_minutes(minutes: u32, surcharge: Surcharge) -> DayPrice {
    let tier = match minutes {
        0 => PayTier::NoWork,
        m if m < FLAT_SHIFT_MINUTES => PayTier::Regular,
        FLAT_SHIFT_MINUTES => PayTier::FullShift,
        _ => PayTier::Extended,
    };

    let base_pay = match tier {
        PayTier::NoWork => Decimal::ZERO,
        PayTier::Regular => minute_pay(minutes),
        PayTier::FullShift => SIX_HOUR_FLAT,
        PayTier::Extended => SIX_HOUR_FLAT + minute_pay(minutes - FLAT_SHIFT_MINUTES),
    };
    let base_pay = round_money(base_pay);

    build_price(tier, hours_from_minutes(minutes), base_pay, surcharge)
}

/// Hourly pay for a number of minutes.
fn minute_pay(minutes: u32) -> Decimal {
    Decimal::from(minutes) * HOURLY_RATE / Decimal::from(MINUTES_PER_HOUR)
}

fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn build_price(tier: PayTier, hours: Decimal, base_pay: Decimal, surcharge: Surcharge) -> DayPrice {
    let (total_pay, description) = match tier {
        PayTier::NoWork => (Decimal::ZERO, "no work".to_string()),
        PayTier::Regular => (
            base_pay + surcharge.as_decimal(),
            format!("regular hours ({:.2}h)", round_hours(hours)),
        ),
        PayTier::FullShift => (
            base_pay + surcharge.as_decimal(),
            "full 6 hours".to_string(),
        ),
        PayTier::Extended => (
            base_pay + surcharge.as_decimal(),
            format!("6h + {:.2}h extra", round_hours(hours - FLAT_SHIFT_HOURS)),
        ),
    };

    DayPrice {
        total_pay,
        description,
        base_pay,
        tier,
    }
}

/// Builds the audit step documenting which tier priced a day.
pub fn pricing_audit_step(
    hours: Decimal,
    surcharge: Surcharge,
    price: &DayPrice,
    step_number: u32,
) -> AuditStep {
    let reasoning = match price.tier {
        PayTier::NoWork => format!(
            "0 hours worked: no pay, surcharge of {} not applied",
            surcharge.amount()
        ),
        PayTier::Regular => format!(
            "{} hours is under {} hours: {} x {} = {}, plus surcharge {} = {}",
            round_hours(hours).normalize(),
            FLAT_SHIFT_HOURS,
            round_hours(hours).normalize(),
            HOURLY_RATE,
            price.base_pay.normalize(),
            surcharge.amount(),
            price.total_pay.normalize()
        ),
        PayTier::FullShift => format!(
            "Exactly {} hours: flat {}, plus surcharge {} = {}",
            FLAT_SHIFT_HOURS,
            SIX_HOUR_FLAT,
            surcharge.amount(),
            price.total_pay.normalize()
        ),
        PayTier::Extended => format!(
            "{} hours exceeds {} hours: flat {} + {} extra hours x {} = {}, plus surcharge {} = {}",
            round_hours(hours).normalize(),
            FLAT_SHIFT_HOURS,
            SIX_HOUR_FLAT,
            round_hours(hours - FLAT_SHIFT_HOURS).normalize(),
            HOURLY_RATE,
            price.base_pay.normalize(),
            surcharge.amount(),
            price.total_pay.normalize()
        ),
    };

    AuditStep {
        step_number,
        rule_id: "day_tier_pricing".to_string(),
        rule_name: "Daily Tiered Pay".to_string(),
        input: serde_json::json!({
            "worked_hours": round_hours(hours).normalize().to_string(),
            "surcharge": surcharge.amount(),
            "hourly_rate": HOURLY_RATE.to_string(),
            "six_hour_flat": SIX_HOUR_FLAT.to_string()
        }),
        output: serde_json::json!({
            "tier": price.tier,
            "base_pay": price.base_pay.normalize().to_string(),
            "total_pay": price.total_pay.normalize().to_string()
        }),
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // Tier 1: no work
    // ==========================================================================
    #[test]
    fn test_zero_hours_ignores_surcharge() {
        let price = price_day(Decimal::ZERO, Surcharge::FortyThousand);
        assert_eq!(price.total_pay, Decimal::ZERO);
        assert_eq!(price.base_pay, Decimal::ZERO);
        assert_eq!(price.description, "no work");
        assert_eq!(price.tier, PayTier::NoWork);
    }

    // ==========================================================================
    // Tier 2: regular hours
    // ==========================================================================
    #[test]
    fn test_four_hours_with_surcharge() {
        let price = price_day(dec("4"), Surcharge::FiveThousand);
        assert_eq!(price.base_pay, dec("62000"));
        assert_eq!(price.total_pay, dec("67000"));
        assert_eq!(price.description, "regular hours (4.00h)");
        assert_eq!(price.tier, PayTier::Regular);
    }

    #[test]
    fn test_hours_beyond_cents_are_not_rounded() {
        let price = price_day(dec("0.00001"), Surcharge::Zero);
        assert_eq!(price.base_pay, dec("0.155"));
        assert_eq!(price.total_pay, dec("0.155"));

        let price = price_day(dec("2.123456"), Surcharge::FiveThousand);
        assert_eq!(price.total_pay, dec("37913.568"));
    }

    #[test]
    fn test_fractional_hours_description_has_two_decimals() {
        let price = price_day(dec("2.5"), Surcharge::Zero);
        assert_eq!(price.base_pay, dec("38750"));
        assert_eq!(price.description, "regular hours (2.50h)");
    }

    // ==========================================================================
    // Tier 3 / boundary
    // ==========================================================================
    #[test]
    fn test_exactly_six_hours_is_flat() {
        let price = price_day(dec("6.00"), Surcharge::Zero);
        assert_eq!(price.base_pay, dec("100000"));
        assert_eq!(price.total_pay, dec("100000"));
        assert_eq!(price.description, "full 6 hours");
        assert_eq!(price.tier, PayTier::FullShift);
    }

    #[test]
    fn test_pay_jumps_at_six_hours() {
        let below = price_day(dec("5.9999"), Surcharge::Zero);
        let at = price_day(dec("6"), Surcharge::Zero);

        assert_eq!(below.tier, PayTier::Regular);
        assert_eq!(below.total_pay, dec("92998.45"));
        assert_eq!(at.total_pay, dec("100000"));
        // discontinuous: the step is far larger than 0.0001h of hourly pay
        assert!(at.total_pay - below.total_pay > dec("7000"));
    }

    // ==========================================================================
    // Tier 4: extended
    // ==========================================================================
    #[test]
    fn test_eight_hours_with_surcharge() {
        let price = price_day(dec("8"), Surcharge::TenThousand);
        assert_eq!(price.base_pay, dec("131000"));
        assert_eq!(price.total_pay, dec("141000"));
        assert_eq!(price.description, "6h + 2.00h extra");
        assert_eq!(price.tier, PayTier::Extended);
    }

    #[test]
    fn test_just_over_six_hours_is_extended() {
        let price = price_day(dec("6.0001"), Surcharge::Zero);
        assert_eq!(price.tier, PayTier::Extended);
        assert_eq!(price.base_pay, dec("100001.55"));
        assert_eq!(price.description, "6h + 0.00h extra");
    }

    // ==========================================================================
    // Minute-based pricing
    // ==========================================================================
    #[test]
    fn test_minutes_at_boundary() {
        assert_eq!(price_minutes(359, Surcharge::Zero).tier, PayTier::Regular);
        assert_eq!(price_minutes(360, Surcharge::Zero).tier, PayTier::FullShift);
        assert_eq!(price_minutes(361, Surcharge::Zero).tier, PayTier::Extended);
    }

    #[test]
    fn test_minutes_rounds_pay_to_cents() {
        // 125 minutes = 2.08333...h, 32291.666... rounds to 32291.67
        let price = price_minutes(125, Surcharge::Zero);
        assert_eq!(price.base_pay, dec("32291.67"));
        assert_eq!(price.description, "regular hours (2.08h)");
    }

    #[test]
    fn test_minutes_overnight_shift() {
        let price = price_minutes(480, Surcharge::TwentyThousand);
        assert_eq!(price.base_pay, dec("131000"));
        assert_eq!(price.total_pay, dec("151000"));
    }

    #[test]
    fn test_zero_minutes_ignores_surcharge() {
        let price = price_minutes(0, Surcharge::FortyThousand);
        assert_eq!(price.total_pay, Decimal::ZERO);
        assert_eq!(price.description, "no work");
    }

    #[test]
    fn test_pricing_audit_step() {
        let hours = dec("8");
        let price = price_day(hours, Surcharge::FiveThousand);
        let step = pricing_audit_step(hours, Surcharge::FiveThousand, &price, 7);

        assert_eq!(step.step_number, 7);
        assert_eq!(step.rule_id, "day_tier_pricing");
        assert_eq!(step.output["tier"], "extended");
        assert_eq!(step.output["total_pay"], "136000");
        assert!(step.reasoning.contains("exceeds 6 hours"));
    }

    #[test]
    fn test_pricing_audit_step_no_work_mentions_dropped_surcharge() {
        let price = price_day(Decimal::ZERO, Surcharge::TenThousand);
        let step = pricing_audit_step(Decimal::ZERO, Surcharge::TenThousand, &price, 1);
        assert_eq!(
            step.reasoning,
            "0 hours worked: no pay, surcharge of 10000 not applied"
        );
    }

    fn any_surcharge() -> impl Strategy<Value = Surcharge> {
        prop::sample::select(Surcharge::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_under_six_hours_is_linear(n in 1i64..600_000_000, surcharge in any_surcharge()) {
            let hours = Decimal::new(n, 8);
            let price = price_day(hours, surcharge);
            prop_assert_eq!(price.total_pay, hours * HOURLY_RATE + surcharge.as_decimal());
        }

        #[test]
        fn prop_six_hours_is_flat(surcharge in any_surcharge()) {
            let price = price_day(FLAT_SHIFT_HOURS, surcharge);
            prop_assert_eq!(price.total_pay, SIX_HOUR_FLAT + surcharge.as_decimal());
        }

        #[test]
        fn prop_over_six_hours_is_flat_plus_linear(n in 600_000_001i64..2_400_000_000, surcharge in any_surcharge()) {
            let hours = Decimal::new(n, 8);
            let price = price_day(hours, surcharge);
            prop_assert_eq!(
                price.total_pay,
                SIX_HOUR_FLAT + (hours - FLAT_SHIFT_HOURS) * HOURLY_RATE + surcharge.as_decimal()
            );
        }

        #[test]
        fn prop_minutes_agree_with_hours(minutes in 0u32..2_880, surcharge in any_surcharge()) {
            let by_minutes = price_minutes(minutes, surcharge);
            let by_hours = price_day(hours_from_minutes(minutes), surcharge);
            prop_assert_eq!(by_minutes.tier, by_hours.tier);
            prop_assert_eq!(by_minutes.total_pay, round_money(by_hours.total_pay));
            prop_assert_eq!(by_minutes.description, by_hours.description);
        }
    }
}
