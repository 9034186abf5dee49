//! Core data models for the invoice engine.
//!
//! This module contains the money type, invoice line items and totals, and
//! the book types used by the book-creation use case.

mod book;
mod invoice;
mod money;

pub use book::{Book, BookRecord, CreateBookInput};
pub use invoice::{LineItem, Totals};
pub use money::Money;
