//! HTTP API module for the Tax Computation Engine.
//!
//! This module provides the REST endpoint the form-save/submit
//! collaborator calls to recompute a tax return.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ComputationRequest;
pub use response::ApiError;
pub use state::AppState;
