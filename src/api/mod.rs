//! HTTP API module for the tool rental engine.
//!
//! This module provides the REST API endpoints for checking out tools,
//! calculating rental periods and browsing the catalog and holiday calendar.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_RENTAL_DAYS, create_router};
pub use request::{CheckoutRequest, RentalPeriodRequest};
pub use response::{ApiError, ApiErrorResponse, ErrorCode};
pub use state::AppState;
