//! Grant day counting.
//!
//! This module converts a grant date range into a whole number of calendar
//! days. The end date is exclusive: a range that starts and ends on the same
//! day covers zero days, and 2026-01-01 to 2026-12-31 covers 364.

use chrono::NaiveDate;

use crate::error::{ForecastError, ForecastResult};
use crate::models::AuditStep;

/// The result of counting grant days, including the audit step.
#[derive(Debug, Clone)]
pub struct DayCountResult {
    /// Whole calendar days between start and end.
    pub days: i64,
    /// The audit step recording this count.
    pub audit_step: AuditStep,
}

/// Returns the number of whole days from `start` up to, but not including, `end`.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidRange`] when `end` precedes `start`.
///
/// # Examples
///
/// ```
/// use grant_forecast::calculation::elapsed_days;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
/// assert_eq!(elapsed_days(start, end).unwrap(), 31);
/// assert_eq!(elapsed_days(start, start).unwrap(), 0);
/// assert!(elapsed_days(end, start).is_err());
/// ```
pub fn elapsed_days(start: NaiveDate, end: NaiveDate) -> ForecastResult<i64> {
    if end < start {
        return Err(ForecastError::InvalidRange { start, end });
    }
    Ok((end - start).num_days())
}

/// Counts grant days and records an audit step.
pub fn count_grant_days(
    start: NaiveDate,
    end: NaiveDate,
    step_number: u32,
) -> ForecastResult<DayCountResult> {
    let days = elapsed_days(start, end)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "grant_day_count".to_string(),
        rule_name: "Grant Day Count".to_string(),
        input: serde_json::json!({
            "start_date": start.to_string(),
            "end_date": end.to_string()
        }),
        output: serde_json::json!({
            "days": days,
            "end_inclusive": false
        }),
        reasoning: format!("{} to {} (end exclusive) = {} days", start, end, days),
    };

    Ok(DayCountResult { days, audit_step })
}
