//! Pure calculation functions for the invoice engine.
//!
//! This module contains the invoice totals calculator (subtotal, discount,
//! tax and grand total in integer cents) and the long-form date formatter
//! used on invoice headers. Nothing here performs I/O.

mod date_format;
mod invoice_totals;

pub use date_format::{ISO_DATE_FORMAT, LONG_DATE_FORMAT, format_date_long};
pub use invoice_totals::{compute_totals, round_percent};
