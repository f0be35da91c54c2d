//! # Book Repository
//!
//! Database operations for books.
//!
//! ## Price Storage
//! Prices are stored as INTEGER cents (`price_cents`), never as REAL.
//! See `bookstore_core::Money`.

use sqlx::{SqliteExecutor, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use bookstore_core::Book;

/// Repository for book database operations.
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookRepository { pool }
    }

    /// Inserts a new book with the id it carries.
    ///
    /// ## Errors
    /// * `DbError::DuplicateKey` - The id is already taken
    pub async fn insert(&self, book: &Book) -> DbResult<Book> {
        debug!(id = book.id, title = %book.title, "Inserting book");

        sqlx::query(
            r#"
            INSERT INTO books (id, title, author, publisher, publication_year, price_cents)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(book.id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.publisher)
        .bind(book.publication_year)
        .bind(book.price_cents)
        .execute(&self.pool)
        .await
        .map_err(|e| match DbError::from(e) {
            DbError::DuplicateKey { .. } => DbError::duplicate("Book id", book.id.to_string()),
            other => other,
        })?;

        Ok(book.clone())
    }

    /// Gets a book by id.
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Book>> {
        Self::find_by_id_with(&self.pool, id).await
    }

    /// [`find_by_id`](Self::find_by_id) on any executor.
    pub async fn find_by_id_with<'e, E>(executor: E, id: i64) -> DbResult<Option<Book>>
    where
        E: SqliteExecutor<'e>,
    {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, publisher, publication_year, price_cents
            FROM books
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(book)
    }

    /// Lists every book, ordered by id.
    pub async fn find_all(&self) -> DbResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, publisher, publication_year, price_cents
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = books.len(), "Listed books");
        Ok(books)
    }

    /// Replaces every field except the id.
    ///
    /// Returns `false` when no book has this id.
    pub async fn update(&self, book: &Book) -> DbResult<bool> {
        debug!(id = book.id, "Updating book");

        let result = sqlx::query(
            r#"
            UPDATE books SET
                title = ?2,
                author = ?3,
                publisher = ?4,
                publication_year = ?5,
                price_cents = ?6
            WHERE id = ?1
            "#,
        )
        .bind(book.id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.publisher)
        .bind(book.publication_year)
        .bind(book.price_cents)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a book by id. Returns the number of rows removed.
    pub async fn delete_by_id(&self, id: i64) -> DbResult<u64> {
        Self::delete_by_id_with(&self.pool, id).await
    }

    /// [`delete_by_id`](Self::delete_by_id) on any executor (pool or transaction).
    pub async fn delete_by_id_with<'e, E>(executor: E, id: i64) -> DbResult<u64>
    where
        E: SqliteExecutor<'e>,
    {
        debug!(id, "Deleting book");

        let result = sqlx::query("DELETE FROM books WHERE id = ?1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use bookstore_core::Book;

    fn book(id: i64, title: &str, price_cents: i64) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: "Kernighan".to_string(),
            publisher: "Prentice Hall".to_string(),
            publication_year: 1988,
            price_cents,
        }
    }

    #[tokio::test]
    async fn test_price_survives_storage() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.books();

        repo.insert(&book(1, "The C Programming Language", 4599))
            .await
            .unwrap();

        let stored = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.price_cents, 4599);
        assert_eq!(stored.price().to_string(), "$45.99");
    }

    #[tokio::test]
    async fn test_duplicate_book_id() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.books();

        repo.insert(&book(5, "A", 100)).await.unwrap();
        let err = repo.insert(&book(5, "B", 200)).await.unwrap_err();

        assert!(err.is_duplicate());
        assert_eq!(err.to_string(), "Duplicate Book id: '5' already exists");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.books();

        repo.insert(&book(1, "Old", 100)).await.unwrap();

        assert!(repo.update(&book(1, "New", 250)).await.unwrap());
        let stored = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.title, "New");
        assert_eq!(stored.price_cents, 250);

        assert!(!repo.update(&book(2, "Ghost", 1)).await.unwrap());

        assert_eq!(repo.delete_by_id(1).await.unwrap(), 1);
        assert_eq!(repo.delete_by_id(1).await.unwrap(), 0);
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
