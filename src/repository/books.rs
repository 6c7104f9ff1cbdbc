//! PostgreSQL-backed book repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

use super::BookRepository;

#[derive(Clone)]
pub struct PgBookRepository {
    pool: Pool<Postgres>,
}

impl PgBookRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT isbn, title, author, publisher, publication_year,
                   created_at, updated_at
            FROM books
            ORDER BY isbn
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT isbn, title, author, publisher, publication_year,
                   created_at, updated_at
            FROM books
            WHERE isbn = $1
            "#,
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    async fn exists_by_isbn(&self, isbn: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1)")
                .bind(isbn)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn insert(&self, book: &Book) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (
                isbn, title, author, publisher, publication_year,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING isbn, title, author, publisher, publication_year,
                      created_at, updated_at
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.publisher)
        .bind(book.publication_year)
        .bind(book.created_at)
        .bind(book.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // Two concurrent creates can both pass the service-level existence
            // check; the primary key constraint settles the race.
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(
                format!("Book with ISBN {} already exists", book.isbn),
            ),
            _ => AppError::Database(e),
        })?;

        Ok(created)
    }

    async fn update(&self, book: &Book) -> AppResult<Option<Book>> {
        let updated = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books SET
                title = $2,
                author = $3,
                publisher = $4,
                publication_year = $5,
                updated_at = $6
            WHERE isbn = $1
            RETURNING isbn, title, author, publisher, publication_year,
                      created_at, updated_at
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.publisher)
        .bind(book.publication_year)
        .bind(book.updated_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_by_isbn(&self, isbn: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE isbn = $1")
            .bind(isbn)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
