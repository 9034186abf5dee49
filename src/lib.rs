//! Invoice engine
//!
//! This crate computes invoice totals in integer cents (subtotal, half-up
//! rounded discount and tax, grand total), formats invoice dates, and serves
//! a small book-creation API over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod books;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
