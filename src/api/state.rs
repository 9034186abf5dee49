//! Application state for the invoice engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::books::{BookRepository, BookService, InMemoryBookRepository};

/// Shared application state.
///
/// Holds the book-creation service. The invoice endpoint is stateless.
#[derive(Clone)]
pub struct AppState {
    books: Arc<BookService>,
}

impl AppState {
    /// Creates a new application state around an existing book service.
    pub fn new(books: BookService) -> Self {
        Self {
            books: Arc::new(books),
        }
    }

    /// Creates a state whose book service stores into `repo`.
    pub fn with_repository(repo: Arc<dyn BookRepository>) -> Self {
        Self::new(BookService::new(repo))
    }

    /// Creates a state backed by a fresh in-memory book store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryBookRepository::new()))
    }

    /// Returns the book-creation service.
    pub fn books(&self) -> &BookService {
        &self.books
    }
}
