//! Request types for the forecast API.
//!
//! This module defines the JSON request structures for the `/forecast` and
//! `/forecast/grant` endpoints, plus the validation that turns them into
//! domain scenarios.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ForecastError;
use crate::models::{BenefitElections, EmployeeScenario, RateSchedule};

use super::response::{ApiError, ApiErrorResponse};

/// Request body for the `/forecast` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// The employee to forecast.
    pub employee: EmployeeRequest,
    /// The grant period.
    pub grant: GrantRequest,
    /// Optional per-request rate overrides.
    #[serde(default)]
    pub assumptions: Option<AssumptionOverrides>,
}

/// Request body for the `/forecast/grant` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantForecastRequest {
    /// Every employee charged to the grant.
    pub employees: Vec<EmployeeRequest>,
    /// The grant period shared by all employees.
    pub grant: GrantRequest,
    /// Optional per-request rate overrides.
    #[serde(default)]
    pub assumptions: Option<AssumptionOverrides>,
}

/// Employee information in a forecast request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Employee name.
    pub name: String,
    /// Grade code (e.g. "Grade A").
    pub grade: String,
    /// Base annual salary.
    pub annual_salary: Decimal,
    /// Full-time-equivalent fraction.
    pub fte: Decimal,
    /// Benefit plan selections.
    #[serde(default)]
    pub benefits: BenefitElections,
}

/// Grant period in a forecast request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GrantRequest {
    /// Grant start date.
    pub start_date: NaiveDate,
    /// Grant end date.
    pub end_date: NaiveDate,
}

/// Rate assumptions a caller may override for a single request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssumptionOverrides {
    /// Replacement COLA rate.
    #[serde(default)]
    pub cola_rate: Option<Decimal>,
    /// Replacement fringe rates for existing grades.
    #[serde(default)]
    pub grade_rates: BTreeMap<String, Decimal>,
}

/// Largest annual salary a request may carry.
pub const MAX_ANNUAL_SALARY: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Largest COLA or grade fringe rate a request may carry (1000%).
pub const MAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

fn check_rate(field: &str, rate: Decimal) -> Result<(), ApiError> {
    if rate < Decimal::ZERO || rate > MAX_RATE {
        return Err(ApiError::validation_error(format!(
            "{} must be between 0 and {} (got {})",
            field, MAX_RATE, rate
        )));
    }
    Ok(())
}

impl AssumptionOverrides {
    /// Returns a copy of `schedule` with these overrides applied.
    ///
    /// Only grades already in the schedule may be overridden.
    pub fn apply(&self, schedule: &RateSchedule) -> Result<RateSchedule, ApiError> {
        let mut schedule = schedule.clone();
        if let Some(cola_rate) = self.cola_rate {
            check_rate("cola_rate", cola_rate)?;
            schedule.cola_rate = cola_rate;
        }
        for (grade, rate) in &self.grade_rates {
            let Some(current) = schedule.grades.get_mut(grade) else {
                return Err(ApiErrorResponse::from(ForecastError::unknown_grade(grade)).error);
            };
            check_rate(&format!("grade_rates[{}]", grade), *rate)?;
            *current = *rate;
        }
        Ok(schedule)
    }
}

impl EmployeeRequest {
    /// Validates the employee fields and builds a scenario for `grant`.
    ///
    /// Range ordering and category membership are left to the calculator.
    pub fn into_scenario(self, grant: GrantRequest) -> Result<EmployeeScenario, ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation_error("employee name must not be empty"));
        }
        if self.annual_salary < Decimal::ZERO || self.annual_salary > MAX_ANNUAL_SALARY {
            return Err(ApiError::validation_error(format!(
                "annual_salary must be between 0 and {} (got {})",
                MAX_ANNUAL_SALARY, self.annual_salary
            )));
        }
        if self.fte < Decimal::ZERO || self.fte > Decimal::ONE {
            return Err(ApiError::validation_error(format!(
                "fte must be between 0 and 1 (got {})",
                self.fte
            )));
        }

        Ok(EmployeeScenario {
            name: self.name,
            annual_salary: self.annual_salary,
            grade: self.grade,
            fte: self.fte,
            start_date: grant.start_date,
            end_date: grant.end_date,
            benefits: self.benefits,
        })
    }
}

/// Applies optional overrides to the configured schedule.
pub fn effective_schedule(
    schedule: &RateSchedule,
    overrides: Option<&AssumptionOverrides>,
) -> Result<RateSchedule, ApiError> {
    match overrides {
        Some(overrides) => overrides.apply(schedule),
        None => Ok(schedule.clone()),
    }
}
