//! Cost breakdown models.
//!
//! This module contains the [`CostBreakdown`] type produced by the forecast
//! calculator: ordered line items with description, optional code and
//! amount, plus a total that always equals the sum of the lines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProrationMode;

/// The category of a breakdown line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCategory {
    /// Prorated, COLA-adjusted salary.
    Salary,
    /// Percentage-of-salary fringe (grade or flat rate).
    PercentageFringe,
    /// Fixed per-period benefit plan cost.
    PlanCost,
}

/// A single row of the cost breakdown.
///
/// # Example
///
/// ```
/// use grant_forecast::models::{CostLine, LineCategory};
/// use rust_decimal::Decimal;
///
/// let line = CostLine {
///     description: "Adjusted Salary".to_string(),
///     code: Some("SAL".to_string()),
///     category: LineCategory::Salary,
///     amount: Decimal::new(6235210, 2),
/// };
/// assert_eq!(line.amount.to_string(), "62352.10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLine {
    /// Human-readable description of the cost.
    pub description: String,
    /// Optional short code (e.g. "SAL", "MED").
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub code: Option<String>,
    /// The kind of cost this line represents.
    pub category: LineCategory,
    /// The amount, rounded to cents.
    pub amount: Decimal,
}

/// How the grant range was turned into periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProrationSummary {
    /// Whole calendar days between start and end (end exclusive).
    pub days: i64,
    /// Fractional number of periods covered by `days`.
    pub periods: Decimal,
    /// The proration mode used.
    pub mode: ProrationMode,
}

/// The itemized result of a forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Line items in order: salary first, then fringe lines in schedule order.
    pub lines: Vec<CostLine>,
    /// Sum of all line amounts.
    pub total: Decimal,
    /// The proration applied to the grant range.
    pub proration: ProrationSummary,
}

impl CostBreakdown {
    /// Builds a breakdown whose total is the sum of `lines`.
    pub fn new(lines: Vec<CostLine>, proration: ProrationSummary) -> Self {
        let total = lines.iter().map(|line| line.amount).sum();
        Self {
            lines,
            total,
            proration,
        }
    }

    /// Sum of salary lines.
    pub fn salary_cost(&self) -> Decimal {
        self.sum_where(|category| category == LineCategory::Salary)
    }

    /// Sum of every non-salary line.
    pub fn fringe_cost(&self) -> Decimal {
        self.sum_where(|category| category != LineCategory::Salary)
    }

    /// Returns the first line carrying the given code.
    pub fn line(&self, code: &str) -> Option<&CostLine> {
        self.lines
            .iter()
            .find(|line| line.code.as_deref() == Some(code))
    }

    fn sum_where(&self, predicate: impl Fn(LineCategory) -> bool) -> Decimal {
        self.lines
            .iter()
            .filter(|line| predicate(line.category))
            .map(|line| line.amount)
            .sum()
    }
}
