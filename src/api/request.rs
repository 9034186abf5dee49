//! Request types for the invoice engine API.
//!
//! This module defines the JSON request bodies for the `/v1/books` and
//! `/v1/invoices/totals` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{CreateBookInput, LineItem, Money};

/// Request body for `POST /v1/books`.
///
/// Absent fields deserialize as empty strings so that the use case, not the
/// JSON extractor, rejects them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookRequest {
    /// The book title.
    #[serde(default)]
    pub title: String,
    /// The book author.
    #[serde(default)]
    pub author: String,
}

/// Request body for `POST /v1/invoices/totals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceTotalsRequest {
    /// Invoice lines.
    pub items: Vec<LineItemRequest>,
    /// Whole-percent discount; defaults to 0.
    #[serde(default)]
    pub discount_pct: i64,
    /// Whole-percent tax; defaults to 0.
    #[serde(default)]
    pub tax_pct: i64,
}

/// One invoice line in a totals request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemRequest {
    /// Number of units.
    pub quantity: i64,
    /// Unit price in cents.
    pub unit_price: i64,
}

impl From<CreateBookRequest> for CreateBookInput {
    fn from(req: CreateBookRequest) -> Self {
        CreateBookInput {
            title: req.title,
            author: req.author,
        }
    }
}

impl From<LineItemRequest> for LineItem {
    fn from(req: LineItemRequest) -> Self {
        LineItem {
            quantity: req.quantity,
            unit_price: Money::from_cents(req.unit_price),
        }
    }
}
