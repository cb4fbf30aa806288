//! Cost-of-living adjustment.
//!
//! Applies the schedule's COLA rate to the base annual salary before any
//! proration: `adjusted = base * (1 + cola_rate)`. The rate is not clamped.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of applying a cost-of-living adjustment.
#[derive(Debug, Clone)]
pub struct ColaResult {
    /// The adjusted annual salary.
    pub adjusted_salary: Decimal,
    /// The audit step recording this adjustment.
    pub audit_step: AuditStep,
}

/// Applies a cost-of-living adjustment to an annual salary.
///
/// # Examples
///
/// ```
/// use grant_forecast::calculation::apply_cola;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = apply_cola(
///     Decimal::from(60000),
///     Decimal::from_str("0.04").unwrap(),
///     1,
/// );
/// assert_eq!(result.adjusted_salary, Decimal::from(62400));
/// ```
pub fn apply_cola(base_salary: Decimal, cola_rate: Decimal, step_number: u32) -> ColaResult {
    let multiplier = Decimal::ONE + cola_rate;
    let adjusted_salary = base_salary * multiplier;

    let audit_step = AuditStep {
        step_number,
        rule_id: "cola_adjustment".to_string(),
        rule_name: "Cost-of-Living Adjustment".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "cola_rate": cola_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "adjusted_salary": adjusted_salary.normalize().to_string(),
            "multiplier": multiplier.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} = ${}",
            base_salary.normalize(),
            multiplier.normalize(),
            adjusted_salary.normalize()
        ),
    };

    ColaResult {
        adjusted_salary,
        audit_step,
    }
}
