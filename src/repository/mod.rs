//! Repository layer for book persistence

pub mod books;
pub mod memory;

use async_trait::async_trait;

use crate::{error::AppResult, models::Book};

pub use books::PgBookRepository;
pub use memory::InMemoryBookRepository;

/// Persistence operations for books, keyed by ISBN.
///
/// Implemented by [`PgBookRepository`] for production and
/// [`InMemoryBookRepository`] for tests and storage-free runs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books in the catalog, sorted by ISBN.
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    /// Look up a single book by ISBN.
    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;

    /// Check whether a book with this ISBN exists.
    async fn exists_by_isbn(&self, isbn: &str) -> AppResult<bool>;

    /// Insert a new book. Fails with `Conflict` if the ISBN is taken.
    async fn insert(&self, book: &Book) -> AppResult<Book>;

    /// Replace the record with the book's ISBN. Returns `None` if absent.
    async fn update(&self, book: &Book) -> AppResult<Option<Book>>;

    /// Delete by ISBN. Returns whether a record was removed.
    async fn delete_by_isbn(&self, isbn: &str) -> AppResult<bool>;
}
