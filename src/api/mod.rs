//! HTTP API module for the AIRS tax engine.
//!
//! This module provides the REST endpoints for assessing and filing
//! agent tax returns.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{FilingRequest, TaxReturnRequest, TaxpayerRequest};
pub use response::ApiError;
pub use state::AppState;
