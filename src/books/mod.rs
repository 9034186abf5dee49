//! Book-creation use case.
//!
//! Splits book creation into a validating service and a storage seam so each
//! layer can be tested on its own. Only an in-memory store is provided.

mod repository;
mod service;

pub use repository::{BookRepository, InMemoryBookRepository};
pub use service::BookService;
