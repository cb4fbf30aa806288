//! Forecast report models.
//!
//! This module contains the [`ForecastReport`] envelope returned by the API,
//! the audit trace recording each calculation decision, and the
//! [`GrantSummary`] rolling several employees up into one grant budget.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CostBreakdown;

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

/// The complete audit trace for a forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The grant period a forecast covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantPeriod {
    /// Grant start date.
    pub start_date: NaiveDate,
    /// Grant end date.
    pub end_date: NaiveDate,
}

/// The complete result of forecasting one employee.
///
/// # Example
///
/// ```
/// use grant_forecast::models::{
///     AuditTrace, CostBreakdown, ForecastReport, GrantPeriod, ProrationMode, ProrationSummary,
/// };
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let report = ForecastReport {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     employee_name: "Daniel Oyervidez".to_string(),
///     grade: "Grade A".to_string(),
///     grant_period: GrantPeriod {
///         start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     },
///     breakdown: CostBreakdown::new(
///         vec![],
///         ProrationSummary { days: 0, periods: Decimal::ZERO, mode: ProrationMode::Monthly },
///     ),
///     audit_trace: AuditTrace { steps: vec![], duration_us: 0 },
/// };
/// assert_eq!(report.breakdown.total, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the forecast is for.
    pub employee_name: String,
    /// The employee's grade.
    pub grade: String,
    /// The grant period covered.
    pub grant_period: GrantPeriod,
    /// Itemized costs and total.
    pub breakdown: CostBreakdown,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

/// Totals for a grant covering several employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantSummary {
    /// One report per employee, in request order.
    pub employees: Vec<ForecastReport>,
    /// Sum of salary lines across employees.
    pub salary_total: Decimal,
    /// Sum of fringe and benefit lines across employees.
    pub fringe_total: Decimal,
    /// Sum of every employee total.
    pub grand_total: Decimal,
}

impl GrantSummary {
    /// Rolls up per-employee reports into grant totals.
    pub fn from_reports(employees: Vec<ForecastReport>) -> Self {
        let salary_total = employees
            .iter()
            .map(|r| r.breakdown.salary_cost())
            .sum();
        let fringe_total = employees
            .iter()
            .map(|r| r.breakdown.fringe_cost())
            .sum();
        let grand_total = employees.iter().map(|r| r.breakdown.total).sum();

        Self {
            employees,
            salary_total,
            fringe_total,
            grand_total,
        }
    }
}
