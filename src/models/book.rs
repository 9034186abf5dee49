//! Book model and creation input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A book as returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Repository-assigned identifier.
    pub id: i64,
    /// The book title.
    pub title: String,
    /// The book author.
    pub author: String,
    /// When the book was created, in UTC.
    pub created_at: DateTime<Utc>,
}

/// Fields a caller supplies to create a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookInput {
    /// The book title.
    pub title: String,
    /// The book author.
    pub author: String,
}

/// A book as stored by a repository.
///
/// `created_at` may be left unset by a repository; the use case fills it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    /// Repository-assigned identifier.
    pub id: i64,
    /// The book title.
    pub title: String,
    /// The book author.
    pub author: String,
    /// Creation time, if the repository recorded one.
    pub created_at: Option<DateTime<Utc>>,
}

impl BookRecord {
    /// Converts the record into a [`Book`], using `fallback` when no
    /// creation time was recorded.
    pub fn into_book(self, fallback: DateTime<Utc>) -> Book {
        Book {
            id: self.id,
            title: self.title,
            author: self.author,
            created_at: self.created_at.unwrap_or(fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_create_book_input() {
        let json = r#"{"title": "Clean Architecture", "author": "Uncle Bob"}"#;
        let input: CreateBookInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.title, "Clean Architecture");
        assert_eq!(input.author, "Uncle Bob");
    }

    #[test]
    fn test_serialize_book() {
        let book = Book {
            id: 42,
            title: "Clean Architecture".to_string(),
            author: "Uncle Bob".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 10, 20, 12, 0, 0).unwrap(),
        };
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["id"], 42);
        assert_eq!(value["title"], "Clean Architecture");
        assert_eq!(value["created_at"], "2025-10-20T12:00:00Z");
    }

    #[test]
    fn test_into_book_keeps_recorded_time() {
        let recorded = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let fallback = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let record = BookRecord {
            id: 1,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            created_at: Some(recorded),
        };
        assert_eq!(record.into_book(fallback).created_at, recorded);
    }

    #[test]
    fn test_into_book_uses_fallback_when_unset() {
        let fallback = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let record = BookRecord {
            id: 1,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            created_at: None,
        };
        assert_eq!(record.into_book(fallback).created_at, fallback);
    }
}
