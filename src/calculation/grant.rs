//! Report assembly and multi-employee grant forecasts.

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::error::ForecastResult;
use crate::models::{
    AuditTrace, EmployeeScenario, ForecastReport, GrantPeriod, GrantSummary, RateSchedule,
};

use super::compute_with_audit;

/// Version string stamped on every report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Forecasts one employee and wraps the breakdown in a [`ForecastReport`].
pub fn forecast_employee(
    scenario: &EmployeeScenario,
    rates: &RateSchedule,
) -> ForecastResult<ForecastReport> {
    let started = Instant::now();
    let outcome = compute_with_audit(scenario, rates)?;

    Ok(ForecastReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        employee_name: scenario.name.clone(),
        grade: scenario.grade.clone(),
        grant_period: GrantPeriod {
            start_date: scenario.start_date,
            end_date: scenario.end_date,
        },
        breakdown: outcome.breakdown,
        audit_trace: AuditTrace {
            steps: outcome.audit_steps,
            duration_us: started.elapsed().as_micros() as u64,
        },
    })
}

/// Forecasts every employee on a grant and totals the results.
///
/// The first failing scenario aborts the whole grant; no partial summary is
/// returned.
pub fn forecast_grant(
    scenarios: &[EmployeeScenario],
    rates: &RateSchedule,
) -> ForecastResult<GrantSummary> {
    let reports = scenarios
        .iter()
        .map(|scenario| forecast_employee(scenario, rates))
        .collect::<ForecastResult<Vec<_>>>()?;

    Ok(GrantSummary::from_reports(reports))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForecastError;
    use crate::models::{BenefitElections, FringeBasis, FringeDefinition, ProrationMode};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn schedule() -> RateSchedule {
        RateSchedule::new(dec("0.04"), ProrationMode::Biweekly)
            .with_grade("Grade A", dec("0.35"))
            .with_grade("Grade B", dec("0.25"))
            .with_fringe(FringeDefinition {
                description: "Fringe Benefits".to_string(),
                code: Some("FRG".to_string()),
                basis: FringeBasis::GradeRate,
            })
    }

    fn scenario(name: &str, grade: &str, salary: &str) -> EmployeeScenario {
        EmployeeScenario {
            name: name.to_string(),
            annual_salary: dec(salary),
            grade: grade.to_string(),
            fte: Decimal::ONE,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
            benefits: BenefitElections::default(),
        }
    }

    #[test]
    fn test_report_carries_scenario_details() {
        let report = forecast_employee(&scenario("Ana", "Grade B", "52000"), &schedule()).unwrap();

        assert_eq!(report.employee_name, "Ana");
        assert_eq!(report.grade, "Grade B");
        assert_eq!(report.engine_version, ENGINE_VERSION);
        assert_eq!(report.audit_trace.steps.len(), 5);
        // 52000 * 1.04 / 26 * 2 = 4160; 25% fringe = 1040
        assert_eq!(report.breakdown.total, dec("5200.00"));
    }

    #[test]
    fn test_grant_totals_sum_employees() {
        let summary = forecast_grant(
            &[
                scenario("Daniel", "Grade A", "60000"),
                scenario("Ana", "Grade B", "52000"),
            ],
            &schedule(),
        )
        .unwrap();

        assert_eq!(summary.employees.len(), 2);
        assert_eq!(summary.salary_total, dec("8960.00"));
        assert_eq!(summary.fringe_total, dec("2720.00"));
        assert_eq!(summary.grand_total, dec("11680.00"));
    }

    #[test]
    fn test_grant_aborts_on_first_error() {
        let result = forecast_grant(
            &[
                scenario("Daniel", "Grade A", "60000"),
                scenario("Lupe", "Grade Z", "40000"),
            ],
            &schedule(),
        );
        assert_eq!(result.unwrap_err(), ForecastError::unknown_grade("Grade Z"));
    }
}
