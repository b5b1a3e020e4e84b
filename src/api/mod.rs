//! HTTP API module for the Weekly Wage Engine.
//!
//! This module provides the REST API endpoints for calculating weekly pay
//! and rendering the plain-text wage report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, DayEntryRequest, PeriodRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
