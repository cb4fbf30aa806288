//! Core data models for the grant forecast engine.
//!
//! This module contains all the domain models used throughout the engine.

mod cost_breakdown;
mod forecast_report;
mod rate_schedule;
mod scenario;

pub use cost_breakdown::{CostBreakdown, CostLine, LineCategory, ProrationSummary};
pub use forecast_report::{AuditStep, AuditTrace, ForecastReport, GrantPeriod, GrantSummary};
pub use rate_schedule::{
    BIWEEKLY_PERIOD_DAYS, FringeBasis, FringeDefinition, MONTHLY_PERIOD_DAYS, ProrationMode,
    RateSchedule,
};
pub use scenario::{BenefitElections, BenefitPlan, EmployeeScenario};
