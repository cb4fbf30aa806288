//! Fringe and benefit line calculation.
//!
//! Each [`FringeDefinition`] in the schedule produces at most one breakdown
//! line:
//!
//! - `GradeRate` and `PercentOfSalary` multiply the unrounded prorated salary
//!   by a percentage.
//! - `PlanCost` multiplies the per-period cost of the elected coverage code
//!   by the fractional period count. No election means no line.

use rust_decimal::Decimal;

use crate::error::{ForecastError, ForecastResult};
use crate::models::{
    AuditStep, BenefitElections, CostLine, FringeBasis, FringeDefinition, LineCategory,
    RateSchedule,
};

use super::round_currency;

/// The result of pricing one fringe line.
#[derive(Debug, Clone)]
pub struct FringeLineResult {
    /// The rounded breakdown line.
    pub line: CostLine,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Inputs shared by every fringe line of one forecast.
#[derive(Debug, Clone, Copy)]
pub struct FringeContext<'a> {
    /// The employee's grade code.
    pub grade: &'a str,
    /// The employee's benefit elections.
    pub benefits: &'a BenefitElections,
    /// Prorated salary cost before rounding.
    pub salary_cost: Decimal,
    /// Fractional periods covered by the grant.
    pub periods: Decimal,
}

/// Prices a single fringe definition.
///
/// Returns `Ok(None)` for a plan the employee did not elect.
///
/// # Errors
///
/// Returns [`ForecastError::UnknownCategory`] when the grade is missing from
/// the grade table, or when the elected coverage code has no cost entry.
pub fn calculate_fringe_line(
    fringe: &FringeDefinition,
    schedule: &RateSchedule,
    context: FringeContext<'_>,
    step_number: u32,
) -> ForecastResult<Option<FringeLineResult>> {
    match &fringe.basis {
        FringeBasis::GradeRate => {
            let rate = schedule
                .grade_rate(context.grade)
                .ok_or_else(|| ForecastError::unknown_grade(context.grade))?;
            Ok(Some(percentage_line(
                fringe,
                rate,
                context.salary_cost,
                "grade_fringe",
                step_number,
            )))
        }
        FringeBasis::PercentOfSalary { rate } => Ok(Some(percentage_line(
            fringe,
            *rate,
            context.salary_cost,
            "flat_fringe",
            step_number,
        ))),
        FringeBasis::PlanCost { plan, costs } => {
            let Some(coverage) = context.benefits.election(*plan) else {
                return Ok(None);
            };
            let per_period = costs.get(coverage).copied().ok_or_else(|| {
                ForecastError::UnknownCategory {
                    kind: plan.kind().to_string(),
                    code: coverage.to_string(),
                }
            })?;
            let amount = round_currency(per_period * context.periods);

            let audit_step = AuditStep {
                step_number,
                rule_id: "plan_cost".to_string(),
                rule_name: fringe.description.clone(),
                input: serde_json::json!({
                    "plan": plan,
                    "coverage": coverage,
                    "per_period_cost": per_period.normalize().to_string(),
                    "periods": context.periods.normalize().to_string()
                }),
                output: serde_json::json!({
                    "amount": amount.to_string()
                }),
                reasoning: format!(
                    "{} coverage {}: ${} x {} periods = ${}",
                    plan.kind(),
                    coverage,
                    per_period.normalize(),
                    context.periods.round_dp(4),
                    amount
                ),
            };

            Ok(Some(FringeLineResult {
                line: CostLine {
                    description: fringe.description.clone(),
                    code: fringe.code.clone(),
                    category: LineCategory::PlanCost,
                    amount,
                },
                audit_step,
            }))
        }
    }
}

fn percentage_line(
    fringe: &FringeDefinition,
    rate: Decimal,
    salary_cost: Decimal,
    rule_id: &str,
    step_number: u32,
) -> FringeLineResult {
    let amount = round_currency(salary_cost * rate);

    let audit_step = AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: fringe.description.clone(),
        input: serde_json::json!({
            "salary_cost": salary_cost.normalize().to_string(),
            "rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "${} x {} = ${}",
            round_currency(salary_cost),
            rate.normalize(),
            amount
        ),
    };

    FringeLineResult {
        line: CostLine {
            description: fringe.description.clone(),
            code: fringe.code.clone(),
            category: LineCategory::PercentageFringe,
            amount,
        },
        audit_step,
    }
}
