//! Book model and request payload.
//!
//! A book is identified by its ISBN, which acts as the natural primary key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// ISBN - unique identifier of the book
    pub isbn: String,
    pub title: String,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub publication_year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BookPayload {
    /// ISBN - required and unique, identifies the book
    #[validate(length(min = 1, message = "ISBN must not be empty"))]
    pub isbn: String,
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub author: Option<String>,
    pub publisher: Option<String>,
    #[validate(range(min = 0, max = 9999, message = "Publication year out of range"))]
    pub publication_year: Option<i32>,
}

impl BookPayload {
    /// Build a new Book from this payload, stamping both timestamps to now.
    pub fn into_book(self) -> Book {
        let now = Utc::now();
        Book {
            isbn: self.isbn,
            title: self.title,
            author: self.author,
            publisher: self.publisher,
            publication_year: self.publication_year,
            created_at: now,
            updated_at: now,
        }
    }

    /// Build the updated Book for an existing record. Identity (`isbn`) and
    /// `created_at` come from the current record, not the payload.
    pub fn apply_to(self, current: &Book) -> Book {
        Book {
            isbn: current.isbn.clone(),
            title: self.title,
            author: self.author,
            publisher: self.publisher,
            publication_year: self.publication_year,
            created_at: current.created_at,
            updated_at: Utc::now(),
        }
    }
}
