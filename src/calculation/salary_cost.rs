//! Prorated salary cost.
//!
//! The adjusted annual salary is split into a per-period rate using the
//! schedule's periods per year, scaled by FTE, then multiplied by the
//! fractional period count covered by the grant.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CostLine, LineCategory, ProrationMode};

use super::round_currency;

/// Description used on the salary breakdown line.
pub const SALARY_LINE_DESCRIPTION: &str = "Adjusted Salary";

/// Code used on the salary breakdown line.
pub const SALARY_LINE_CODE: &str = "SAL";

/// The result of a salary cost calculation.
#[derive(Debug, Clone)]
pub struct SalaryCostResult {
    /// Salary cost for one period at the given FTE.
    pub per_period_rate: Decimal,
    /// Prorated salary cost before rounding; percentage fringes apply to this.
    pub unrounded_cost: Decimal,
    /// The rounded breakdown line.
    pub line: CostLine,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the prorated salary cost for a grant range.
///
/// # Arguments
///
/// * `adjusted_salary` - Annual salary after COLA
/// * `fte` - Full-time-equivalent fraction
/// * `periods` - Fractional periods covered by the grant
/// * `mode` - Proration mode supplying periods per year
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use grant_forecast::calculation::calculate_salary_cost;
/// use grant_forecast::models::ProrationMode;
/// use rust_decimal::Decimal;
///
/// let result = calculate_salary_cost(
///     Decimal::from(62400),
///     Decimal::ONE,
///     Decimal::from(2),
///     ProrationMode::Biweekly,
///     1,
/// );
/// assert_eq!(result.line.amount.to_string(), "4800.00");
/// ```
pub fn calculate_salary_cost(
    adjusted_salary: Decimal,
    fte: Decimal,
    periods: Decimal,
    mode: ProrationMode,
    step_number: u32,
) -> SalaryCostResult {
    let periods_per_year = Decimal::from(mode.periods_per_year());
    let per_period_rate = adjusted_salary
        .checked_div(periods_per_year)
        .unwrap_or(Decimal::ZERO)
        * fte;
    let unrounded_cost = per_period_rate * periods;
    let amount = round_currency(unrounded_cost);

    let line = CostLine {
        description: SALARY_LINE_DESCRIPTION.to_string(),
        code: Some(SALARY_LINE_CODE.to_string()),
        category: LineCategory::Salary,
        amount,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_cost".to_string(),
        rule_name: "Prorated Salary Cost".to_string(),
        input: serde_json::json!({
            "adjusted_salary": adjusted_salary.normalize().to_string(),
            "periods_per_year": mode.periods_per_year(),
            "fte": fte.normalize().to_string(),
            "periods": periods.normalize().to_string()
        }),
        output: serde_json::json!({
            "per_period_rate": per_period_rate.normalize().to_string(),
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "${} / {} x {} FTE x {} periods = ${}",
            adjusted_salary.normalize(),
            mode.periods_per_year(),
            fte.normalize(),
            periods.round_dp(4),
            amount
        ),
    };

    SalaryCostResult {
        per_period_rate,
        unrounded_cost,
        line,
        audit_step,
    }
}
