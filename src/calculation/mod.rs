//! Calculation logic for the grant forecast engine.
//!
//! This module contains the steps of a forecast: day counting, period
//! proration, cost-of-living adjustment, prorated salary cost, fringe and
//! benefit lines, currency rounding, and the [`compute`] function tying them
//! together. Report assembly and multi-employee grant totals live in
//! [`forecast_employee`] and [`forecast_grant`].

mod cola;
mod day_count;
mod forecast;
mod fringe;
mod grant;
mod proration;
mod rounding;
mod salary_cost;

pub use cola::{ColaResult, apply_cola};
pub use day_count::{DayCountResult, count_grant_days, elapsed_days};
pub use forecast::{ForecastOutcome, compute, compute_with_audit};
pub use fringe::{FringeContext, FringeLineResult, calculate_fringe_line};
pub use grant::{ENGINE_VERSION, forecast_employee, forecast_grant};
pub use proration::{ProrationResult, period_count, prorate_periods};
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
pub use salary_cost::{
    SALARY_LINE_CODE, SALARY_LINE_DESCRIPTION, SalaryCostResult, calculate_salary_cost,
};
