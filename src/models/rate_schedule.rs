//! Rate schedule model.
//!
//! A [`RateSchedule`] bundles every assumption a forecast depends on: the
//! cost-of-living adjustment, how the grant range is prorated into pay
//! periods, the fringe rate for each grade, and the ordered list of fringe
//! and benefit lines to charge.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BenefitPlan;

/// Average days in a month used for monthly proration.
pub const MONTHLY_PERIOD_DAYS: Decimal = Decimal::from_parts(3044, 0, 0, false, 2);

/// Days in a biweekly pay period.
pub const BIWEEKLY_PERIOD_DAYS: Decimal = Decimal::from_parts(14, 0, 0, false, 0);

/// How a grant range is converted into a fractional number of pay periods.
///
/// The period length is a fixed divisor rather than calendar arithmetic, so
/// two ranges with the same number of days always cost the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ProrationMode {
    /// 30.44-day periods, 12 per year.
    Monthly,
    /// 14-day periods, 26 per year.
    Biweekly,
    /// Caller-supplied period length.
    Custom {
        /// Days in one period.
        period_days: Decimal,
        /// Periods in one year.
        periods_per_year: u32,
    },
}

impl ProrationMode {
    /// Length of one period in days.
    pub fn period_days(&self) -> Decimal {
        match self {
            ProrationMode::Monthly => MONTHLY_PERIOD_DAYS,
            ProrationMode::Biweekly => BIWEEKLY_PERIOD_DAYS,
            ProrationMode::Custom { period_days, .. } => *period_days,
        }
    }

    /// Number of periods per year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            ProrationMode::Monthly => 12,
            ProrationMode::Biweekly => 26,
            ProrationMode::Custom {
                periods_per_year, ..
            } => *periods_per_year,
        }
    }

    /// Returns false for a zero or negative period length or zero periods per year.
    pub fn is_valid(&self) -> bool {
        self.period_days() > Decimal::ZERO && self.periods_per_year() > 0
    }

    /// Short name used in audit output.
    pub fn name(&self) -> &'static str {
        match self {
            ProrationMode::Monthly => "monthly",
            ProrationMode::Biweekly => "biweekly",
            ProrationMode::Custom { .. } => "custom",
        }
    }
}

/// How a fringe or benefit line is priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FringeBasis {
    /// Percentage of prorated salary, taken from the grade table.
    GradeRate,
    /// Flat tax-style percentage of prorated salary.
    PercentOfSalary {
        /// Fraction of salary (e.g. 0.0765).
        rate: Decimal,
    },
    /// Fixed cost per period, keyed by the elected coverage code.
    PlanCost {
        /// The benefit plan whose election selects the cost.
        plan: BenefitPlan,
        /// Per-period cost for each coverage code.
        costs: BTreeMap<String, Decimal>,
    },
}

/// A fringe or benefit line charged on top of salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FringeDefinition {
    /// Description shown on the breakdown line.
    pub description: String,
    /// Optional short code shown on the breakdown line.
    #[serde(default)]
    pub code: Option<String>,
    /// Pricing rule for this line.
    pub basis: FringeBasis,
}

/// Every rate assumption used by one forecast.
///
/// # Example
///
/// ```
/// use grant_forecast::models::{FringeBasis, FringeDefinition, ProrationMode, RateSchedule};
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::new(Decimal::new(4, 2), ProrationMode::Monthly)
///     .with_grade("Grade A", Decimal::new(35, 2))
///     .with_fringe(FringeDefinition {
///         description: "Fringe Benefits".to_string(),
///         code: Some("FRG".to_string()),
///         basis: FringeBasis::GradeRate,
///     });
/// assert_eq!(schedule.grade_rate("Grade A"), Some(Decimal::new(35, 2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSchedule {
    /// Cost-of-living adjustment as a fraction (0.04 = 4%).
    pub cola_rate: Decimal,
    /// Proration mode for converting days into periods.
    pub proration: ProrationMode,
    /// Percentage fringe rate for each grade code.
    pub grades: BTreeMap<String, Decimal>,
    /// Fringe and benefit lines, in breakdown order.
    #[serde(default)]
    pub fringes: Vec<FringeDefinition>,
}

impl RateSchedule {
    /// Creates a schedule with no grades and no fringe lines.
    pub fn new(cola_rate: Decimal, proration: ProrationMode) -> Self {
        Self {
            cola_rate,
            proration,
            grades: BTreeMap::new(),
            fringes: Vec::new(),
        }
    }

    /// Adds or replaces a grade fringe rate.
    pub fn with_grade(mut self, grade: &str, fringe_rate: Decimal) -> Self {
        self.grades.insert(grade.to_string(), fringe_rate);
        self
    }

    /// Appends a fringe line definition.
    pub fn with_fringe(mut self, fringe: FringeDefinition) -> Self {
        self.fringes.push(fringe);
        self
    }

    /// Returns the fringe rate for a grade, if the grade is known.
    pub fn grade_rate(&self, grade: &str) -> Option<Decimal> {
        self.grades.get(grade).copied()
    }

    /// Whether any fringe line prices `plan`.
    pub fn prices_plan(&self, plan: BenefitPlan) -> bool {
        self.fringes.iter().any(|fringe| {
            matches!(&fringe.basis, FringeBasis::PlanCost { plan: priced, .. } if *priced == plan)
        })
    }
}
