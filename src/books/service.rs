//! Book-creation use case.

use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{Book, CreateBookInput};

use super::BookRepository;

/// Validates book input and stores it through a [`BookRepository`].
#[derive(Clone)]
pub struct BookService {
    repo: Arc<dyn BookRepository>,
}

impl BookService {
    /// Creates a service backed by `repo`.
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self { repo }
    }

    /// Creates a book.
    ///
    /// Title and author must be non-blank after trimming; otherwise
    /// [`EngineError::Validation`] is returned and the repository is not
    /// touched. Repository errors are returned unchanged. If the repository
    /// did not record a creation time, the current UTC time (whole seconds)
    /// is used.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use invoice_engine::books::{BookService, InMemoryBookRepository};
    /// use invoice_engine::models::CreateBookInput;
    ///
    /// let service = BookService::new(Arc::new(InMemoryBookRepository::new()));
    /// let book = service
    ///     .create_book(CreateBookInput {
    ///         title: "Dune".to_string(),
    ///         author: "Frank Herbert".to_string(),
    ///     })
    ///     .unwrap();
    /// assert_eq!(book.id, 1);
    /// ```
    pub fn create_book(&self, input: CreateBookInput) -> EngineResult<Book> {
        validate(&input)?;

        let record = self.repo.create(&input).inspect_err(|err| {
            warn!(error = %err, "Book repository create failed");
        })?;

        let book = record.into_book(Utc::now().trunc_subsecs(0));
        debug!(book_id = book.id, "Book created");

        Ok(book)
    }
}

fn validate(input: &CreateBookInput) -> EngineResult<()> {
    if input.title.trim().is_empty() {
        return Err(EngineError::Validation {
            message: "title must not be blank".to_string(),
        });
    }
    if input.author.trim().is_empty() {
        return Err(EngineError::Validation {
            message: "author must not be blank".to_string(),
        });
    }
    Ok(())
}
