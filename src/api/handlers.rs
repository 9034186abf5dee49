//! HTTP request handlers for the invoice engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_totals;
use crate::models::{CreateBookInput, LineItem};

use super::request::{CreateBookRequest, InvoiceTotalsRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/books", post(create_book_handler))
        .route("/v1/invoices/totals", post(invoice_totals_handler))
        .with_state(state)
}

/// Handler for POST /v1/books.
///
/// Returns 201 with the created book, 400 for unparseable bodies, 422 when
/// title or author is blank or absent, and 500 when the store fails.
async fn create_book_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create book request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let input: CreateBookInput = request.into();
    match state.books().create_book(input) {
        Ok(book) => {
            info!(
                correlation_id = %correlation_id,
                book_id = book.id,
                "Book created"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(book),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Create book failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /v1/invoices/totals.
///
/// Lines with a non-positive quantity or negative price are accepted and
/// contribute nothing. `quantity` and `unit_price` go into unchecked `i64`
/// arithmetic as sent, so values whose products overflow panic in debug
/// builds and wrap in release builds.
async fn invoice_totals_handler(
    payload: Result<Json<InvoiceTotalsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing invoice totals request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let items: Vec<LineItem> = request.items.into_iter().map(Into::into).collect();
    let billable = items.iter().filter(|item| item.is_billable()).count();
    if billable < items.len() {
        warn!(
            correlation_id = %correlation_id,
            skipped = items.len() - billable,
            "Ignoring non-billable invoice lines"
        );
    }

    let start_time = Instant::now();
    let totals = compute_totals(&items, request.discount_pct, request.tax_pct);
    info!(
        correlation_id = %correlation_id,
        items_count = items.len(),
        subtotal = %totals.subtotal,
        total = %totals.total,
        duration_us = start_time.elapsed().as_micros(),
        "Invoice totals computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(totals),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response()
}
