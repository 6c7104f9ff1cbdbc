//! Catalog management service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookPayload},
    repository::BookRepository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn BookRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// List all books in the catalog
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.find_all().await
    }

    /// Get a book by ISBN
    pub async fn get_book(&self, isbn: &str) -> AppResult<Book> {
        self.repository
            .find_by_isbn(isbn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))
    }

    /// Add a new book to the catalog
    pub async fn create_book(&self, payload: BookPayload) -> AppResult<Book> {
        // Check if ISBN already exists (required and unique)
        if self.repository.exists_by_isbn(&payload.isbn).await? {
            return Err(AppError::Conflict(format!(
                "Book with ISBN {} already exists",
                payload.isbn
            )));
        }

        self.repository.insert(&payload.into_book()).await
    }

    /// Update an existing book. The path ISBN is the identity; the payload
    /// must carry the same ISBN.
    pub async fn update_book(&self, isbn: &str, payload: BookPayload) -> AppResult<Book> {
        if payload.isbn != isbn {
            return Err(AppError::BadRequest(format!(
                "Payload ISBN {} does not match resource ISBN {}",
                payload.isbn, isbn
            )));
        }

        // Check if book exists
        let current = self.get_book(isbn).await?;

        self.repository
            .update(&payload.apply_to(&current))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))
    }

    /// Remove a book from the catalog
    pub async fn delete_book(&self, isbn: &str) -> AppResult<()> {
        if !self.repository.delete_by_isbn(isbn).await? {
            return Err(AppError::NotFound(format!(
                "Book with ISBN {} not found",
                isbn
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryBookRepository, MockBookRepository};

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(InMemoryBookRepository::new()))
    }

    fn payload(isbn: &str, title: &str) -> BookPayload {
        BookPayload {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: Some("Robert C. Martin".to_string()),
            publisher: None,
            publication_year: Some(2008),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_equivalent_book() {
        let service = service();

        let created = service
            .create_book(payload("978-0-13-468599-1", "Clean Code"))
            .await
            .unwrap();

        let fetched = service.get_book("978-0-13-468599-1").await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "Clean Code");
    }

    #[tokio::test]
    async fn get_unknown_isbn_is_not_found() {
        let service = service();

        let err = service.get_book("978-0-00-000000-0").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_duplicate_is_conflict_and_keeps_existing() {
        let service = service();
        service
            .create_book(payload("978-0-13-468599-1", "Clean Code"))
            .await
            .unwrap();

        let err = service
            .create_book(payload("978-0-13-468599-1", "Impostor"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let existing = service.get_book("978-0-13-468599-1").await.unwrap();
        assert_eq!(existing.title, "Clean Code");
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let service = service();
        service
            .create_book(payload("978-0-13-468599-1", "Clean Code"))
            .await
            .unwrap();

        service.delete_book("978-0-13-468599-1").await.unwrap();

        let err = service.get_book("978-0-13-468599-1").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_unknown_isbn_is_not_found() {
        let service = service();

        let err = service.delete_book("978-0-00-000000-0").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_changes_fields_but_not_identity() {
        let service = service();
        let created = service
            .create_book(payload("978-0-13-468599-1", "Clean Code"))
            .await
            .unwrap();

        let updated = service
            .update_book(
                "978-0-13-468599-1",
                BookPayload {
                    isbn: "978-0-13-468599-1".to_string(),
                    title: "Clean Code, 2nd ed.".to_string(),
                    author: Some("Robert C. Martin".to_string()),
                    publisher: Some("Prentice Hall".to_string()),
                    publication_year: Some(2009),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.isbn, created.isbn);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "Clean Code, 2nd ed.");
        assert_eq!(updated.publisher.as_deref(), Some("Prentice Hall"));
    }

    #[tokio::test]
    async fn update_unknown_isbn_is_not_found() {
        let service = service();

        let err = service
            .update_book("978-0-00-000000-0", payload("978-0-00-000000-0", "Ghost"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_with_mismatched_isbn_is_rejected() {
        let service = service();
        service
            .create_book(payload("978-0-13-468599-1", "Clean Code"))
            .await
            .unwrap();

        let err = service
            .update_book("978-0-13-468599-1", payload("978-0-59-652068-7", "Other"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn list_returns_each_created_book_once() {
        let service = service();
        let isbns = [
            "978-0-13-468599-1",
            "978-0-59-652068-7",
            "978-1-59-327828-1",
        ];
        for isbn in &isbns {
            service.create_book(payload(isbn, "Title")).await.unwrap();
        }

        let books = service.list_books().await.unwrap();
        assert_eq!(books.len(), isbns.len());
        for isbn in &isbns {
            assert_eq!(books.iter().filter(|b| b.isbn == *isbn).count(), 1);
        }
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let mut mock = MockBookRepository::new();
        mock.expect_find_all()
            .returning(|| Err(AppError::Database(sqlx::Error::PoolClosed)));
        let service = CatalogService::new(Arc::new(mock));

        let err = service.list_books().await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
