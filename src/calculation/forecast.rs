//! The forecast calculator.
//!
//! [`compute`] turns one [`EmployeeScenario`] and one [`RateSchedule`] into an
//! itemized [`CostBreakdown`]. It is pure and deterministic:
//!
//! 1. count grant days (end exclusive)
//! 2. prorate days into fractional periods
//! 3. apply the cost-of-living adjustment
//! 4. price the prorated salary at the scenario's FTE
//! 5. price every fringe line in schedule order
//! 6. total the rounded lines
//!
//! Nothing is returned on error; a breakdown is either complete or absent.

use tracing::debug;

use crate::error::{ForecastError, ForecastResult};
use crate::models::{
    AuditStep, BenefitPlan, CostBreakdown, EmployeeScenario, ProrationSummary, RateSchedule,
};

use super::{
    FringeContext, apply_cola, calculate_fringe_line, calculate_salary_cost, count_grant_days,
    prorate_periods,
};

/// A breakdown together with the audit steps that produced it.
#[derive(Debug, Clone)]
pub struct ForecastOutcome {
    /// The itemized costs.
    pub breakdown: CostBreakdown,
    /// One audit step per rule applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes the cost breakdown for one employee over the grant range.
///
/// # Errors
///
/// - [`ForecastError::InvalidRange`] when the end date precedes the start date
/// - [`ForecastError::UnknownCategory`] when the grade or an elected plan code
///   is not in the schedule
///
/// # Examples
///
/// ```
/// use grant_forecast::calculation::compute;
/// use grant_forecast::models::{
///     BenefitElections, EmployeeScenario, FringeBasis, FringeDefinition, ProrationMode,
///     RateSchedule,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = RateSchedule::new(Decimal::from_str("0.04").unwrap(), ProrationMode::Biweekly)
///     .with_grade("Grade A", Decimal::from_str("0.35").unwrap())
///     .with_fringe(FringeDefinition {
///         description: "Fringe Benefits".to_string(),
///         code: Some("FRG".to_string()),
///         basis: FringeBasis::GradeRate,
///     });
/// let scenario = EmployeeScenario {
///     name: "Daniel Oyervidez".to_string(),
///     annual_salary: Decimal::from(60000),
///     grade: "Grade A".to_string(),
///     fte: Decimal::ONE,
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
///     benefits: BenefitElections::default(),
/// };
///
/// let breakdown = compute(&scenario, &schedule).unwrap();
/// assert_eq!(breakdown.salary_cost().to_string(), "4800.00");
/// assert_eq!(breakdown.total.to_string(), "6480.00");
/// ```
pub fn compute(scenario: &EmployeeScenario, rates: &RateSchedule) -> ForecastResult<CostBreakdown> {
    compute_with_audit(scenario, rates).map(|outcome| outcome.breakdown)
}

/// Computes the cost breakdown and keeps the audit trail.
pub fn compute_with_audit(
    scenario: &EmployeeScenario,
    rates: &RateSchedule,
) -> ForecastResult<ForecastOutcome> {
    // Grade membership is checked up front so schedules without a grade-rate
    // fringe line still reject unknown grades.
    if rates.grade_rate(&scenario.grade).is_none() {
        return Err(ForecastError::unknown_grade(&scenario.grade));
    }
    // An election for a plan the schedule never prices has no cost table.
    for plan in BenefitPlan::ALL {
        if let Some(code) = scenario.benefits.election(plan) {
            if !rates.prices_plan(plan) {
                return Err(ForecastError::UnknownCategory {
                    kind: plan.kind().to_string(),
                    code: code.to_string(),
                });
            }
        }
    }

    let mut audit_steps = Vec::with_capacity(4 + rates.fringes.len());
    let mut step_number: u32 = 1;

    let day_count = count_grant_days(scenario.start_date, scenario.end_date, step_number)?;
    audit_steps.push(day_count.audit_step);
    step_number += 1;

    let proration = prorate_periods(day_count.days, rates.proration, step_number);
    audit_steps.push(proration.audit_step);
    step_number += 1;

    let cola = apply_cola(scenario.annual_salary, rates.cola_rate, step_number);
    audit_steps.push(cola.audit_step);
    step_number += 1;

    let salary = calculate_salary_cost(
        cola.adjusted_salary,
        scenario.fte,
        proration.periods,
        rates.proration,
        step_number,
    );
    audit_steps.push(salary.audit_step);
    step_number += 1;

    let context = FringeContext {
        grade: &scenario.grade,
        benefits: &scenario.benefits,
        salary_cost: salary.unrounded_cost,
        periods: proration.periods,
    };

    let mut lines = vec![salary.line];
    for fringe in &rates.fringes {
        if let Some(result) = calculate_fringe_line(fringe, rates, context, step_number)? {
            lines.push(result.line);
            audit_steps.push(result.audit_step);
            step_number += 1;
        }
    }

    let breakdown = CostBreakdown::new(
        lines,
        ProrationSummary {
            days: day_count.days,
            periods: proration.periods,
            mode: rates.proration,
        },
    );

    debug!(
        grade = %scenario.grade,
        days = breakdown.proration.days,
        lines = breakdown.lines.len(),
        total = %breakdown.total,
        "Forecast computed"
    );

    Ok(ForecastOutcome {
        breakdown,
        audit_steps,
    })
}
