//! In-memory book repository.
//!
//! Backs the catalog with a plain map for tests and storage-free runs.
//! Mirrors the relational semantics: insert rejects a taken ISBN the way the
//! primary key constraint would.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

use super::BookRepository;

#[derive(Default)]
pub struct InMemoryBookRepository {
    books: RwLock<HashMap<String, Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let books = self.books.read().await;
        let mut all: Vec<Book> = books.values().cloned().collect();
        all.sort_by(|a, b| a.isbn.cmp(&b.isbn));
        Ok(all)
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.get(isbn).cloned())
    }

    async fn exists_by_isbn(&self, isbn: &str) -> AppResult<bool> {
        let books = self.books.read().await;
        Ok(books.contains_key(isbn))
    }

    async fn insert(&self, book: &Book) -> AppResult<Book> {
        let mut books = self.books.write().await;
        if books.contains_key(&book.isbn) {
            return Err(AppError::Conflict(format!(
                "Book with ISBN {} already exists",
                book.isbn
            )));
        }
        books.insert(book.isbn.clone(), book.clone());
        Ok(book.clone())
    }

    async fn update(&self, book: &Book) -> AppResult<Option<Book>> {
        let mut books = self.books.write().await;
        if !books.contains_key(&book.isbn) {
            return Ok(None);
        }
        books.insert(book.isbn.clone(), book.clone());
        Ok(Some(book.clone()))
    }

    async fn delete_by_isbn(&self, isbn: &str) -> AppResult<bool> {
        let mut books = self.books.write().await;
        Ok(books.remove(isbn).is_some())
    }
}
