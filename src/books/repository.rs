//! Book storage seam and its in-memory implementation.

use std::sync::{Mutex, MutexGuard};

use chrono::{SubsecRound, Utc};

use crate::error::{EngineError, EngineResult};
use crate::models::{BookRecord, CreateBookInput};

/// Storage for books.
///
/// Implementations assign identifiers and may record a creation time.
pub trait BookRepository: Send + Sync {
    /// Stores a new book and returns the stored record.
    fn create(&self, input: &CreateBookInput) -> EngineResult<BookRecord>;
}

/// A process-local book store.
///
/// Identifiers are allocated sequentially from 1. Contents live only as long
/// as the repository value.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: Mutex<Vec<BookRecord>>,
}

impl InMemoryBookRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored books.
    pub fn len(&self) -> EngineResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> EngineResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, Vec<BookRecord>>> {
        self.books.lock().map_err(|_| EngineError::Repository {
            message: "book store lock poisoned".to_string(),
        })
    }
}

impl BookRepository for InMemoryBookRepository {
    fn create(&self, input: &CreateBookInput) -> EngineResult<BookRecord> {
        let mut books = self.lock()?;

        let record = BookRecord {
            id: books.len() as i64 + 1,
            title: input.title.clone(),
            author: input.author.clone(),
            created_at: Some(Utc::now().trunc_subsecs(0)),
        };
        books.push(record.clone());

        Ok(record)
    }
}
