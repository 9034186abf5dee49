//! HTTP API module for the invoice engine.
//!
//! This module provides the REST endpoints for book creation and invoice
//! totals.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateBookRequest, InvoiceTotalsRequest, LineItemRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
