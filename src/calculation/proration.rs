//! Period proration.
//!
//! Converts a day count into a fractional number of pay periods using the
//! fixed divisor of the schedule's [`ProrationMode`]. The divisor is never
//! derived from the calendar, so every 31-day range costs the same no matter
//! which month it falls in.

use rust_decimal::Decimal;

use crate::models::{AuditStep, ProrationMode};

/// The result of prorating days into periods.
#[derive(Debug, Clone)]
pub struct ProrationResult {
    /// Fractional number of periods (unrounded).
    pub periods: Decimal,
    /// The audit step recording this conversion.
    pub audit_step: AuditStep,
}

/// Converts a day count into fractional periods.
///
/// A schedule with a zero period length yields zero periods; such schedules
/// are rejected when loaded or received over the API.
///
/// # Examples
///
/// ```
/// use grant_forecast::calculation::period_count;
/// use grant_forecast::models::ProrationMode;
/// use rust_decimal::Decimal;
///
/// assert_eq!(period_count(28, ProrationMode::Biweekly), Decimal::from(2));
/// assert_eq!(period_count(0, ProrationMode::Monthly), Decimal::ZERO);
/// ```
pub fn period_count(days: i64, mode: ProrationMode) -> Decimal {
    Decimal::from(days)
        .checked_div(mode.period_days())
        .unwrap_or(Decimal::ZERO)
}

/// Prorates days into periods and records an audit step.
pub fn prorate_periods(days: i64, mode: ProrationMode, step_number: u32) -> ProrationResult {
    let periods = period_count(days, mode);

    let audit_step = AuditStep {
        step_number,
        rule_id: "period_proration".to_string(),
        rule_name: "Period Proration".to_string(),
        input: serde_json::json!({
            "days": days,
            "mode": mode.name(),
            "period_days": mode.period_days().normalize().to_string()
        }),
        output: serde_json::json!({
            "periods": periods.normalize().to_string()
        }),
        reasoning: format!(
            "{} days / {} days per {} period = {} periods",
            days,
            mode.period_days().normalize(),
            mode.name(),
            periods.round_dp(4)
        ),
    };

    ProrationResult {
        periods,
        audit_step,
    }
}
