//! HTTP API module for the grant forecast engine.
//!
//! This module provides the REST API endpoints for forecasting salary and
//! fringe costs against a grant.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{PASSWORD_HEADER, USER_HEADER, create_router};
pub use request::{
    AssumptionOverrides, EmployeeRequest, ForecastRequest, GrantForecastRequest, GrantRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
