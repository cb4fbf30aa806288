//! Employee scenario model.
//!
//! An [`EmployeeScenario`] captures everything about one employee that the
//! forecast needs: pay, grade, dedication to the grant and the grant dates.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A benefit plan that carries a fixed cost per pay period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitPlan {
    /// Medical coverage.
    Medical,
    /// Dental coverage.
    Dental,
}

impl BenefitPlan {
    /// Every plan an employee can elect.
    pub const ALL: [BenefitPlan; 2] = [BenefitPlan::Medical, BenefitPlan::Dental];

    /// Label used when reporting an unknown coverage code for this plan.
    pub fn kind(&self) -> &'static str {
        match self {
            BenefitPlan::Medical => "medical plan",
            BenefitPlan::Dental => "dental plan",
        }
    }
}

/// Coverage codes the employee elected, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitElections {
    /// Medical coverage code (e.g. "EE", "FAM").
    #[serde(default)]
    pub medical: Option<String>,
    /// Dental coverage code.
    #[serde(default)]
    pub dental: Option<String>,
}

impl BenefitElections {
    /// Returns the elected coverage code for a plan.
    pub fn election(&self, plan: BenefitPlan) -> Option<&str> {
        match plan {
            BenefitPlan::Medical => self.medical.as_deref(),
            BenefitPlan::Dental => self.dental.as_deref(),
        }
    }
}

/// A single employee charged to a grant.
///
/// # Example
///
/// ```
/// use grant_forecast::models::{BenefitElections, EmployeeScenario};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let scenario = EmployeeScenario {
///     name: "Daniel Oyervidez".to_string(),
///     annual_salary: Decimal::new(60000, 0),
///     grade: "Grade A".to_string(),
///     fte: Decimal::ONE,
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
///     benefits: BenefitElections::default(),
/// };
/// assert_eq!(scenario.grade, "Grade A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeScenario {
    /// Employee name, used to label reports.
    pub name: String,
    /// Base annual salary before any cost-of-living adjustment.
    pub annual_salary: Decimal,
    /// Grade code; must be present in the rate schedule.
    pub grade: String,
    /// Full-time-equivalent fraction (0.0 - 1.0).
    pub fte: Decimal,
    /// Grant start date.
    pub start_date: NaiveDate,
    /// Grant end date (exclusive for day counting).
    pub end_date: NaiveDate,
    /// Benefit plan selections.
    #[serde(default)]
    pub benefits: BenefitElections,
}
