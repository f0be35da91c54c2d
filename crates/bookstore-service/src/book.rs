//! # Book Service
//!
//! Validated CRUD and filtering for books.

use tracing::{debug, info};

use bookstore_core::validation::validate_book;
use bookstore_core::Book;
use bookstore_db::Database;

use crate::error::ServiceResult;

/// Book operations.
#[derive(Debug, Clone)]
pub struct BookService {
    db: Database,
}

impl BookService {
    pub fn new(db: Database) -> Self {
        BookService { db }
    }

    /// Validates and stores a new book.
    ///
    /// The publication year is checked against the current calendar year.
    pub async fn add(&self, book: Book) -> ServiceResult<Book> {
        validate_book(&book)?;

        let stored = self.db.books().insert(&book).await?;
        info!(id = stored.id, title = %stored.title, "Book added");
        Ok(stored)
    }

    /// Every book, ordered by id.
    pub async fn list(&self) -> ServiceResult<Vec<Book>> {
        Ok(self.db.books().find_all().await?)
    }

    /// Validates and replaces every field except the id. Unknown ids are a no-op.
    pub async fn update(&self, book: Book) -> ServiceResult<()> {
        validate_book(&book)?;

        if !self.db.books().update(&book).await? {
            debug!(id = book.id, "Update skipped: no such book");
        }
        Ok(())
    }

    /// Removes one book. Purchases are left alone.
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        if self.db.books().delete_by_id(id).await? == 0 {
            debug!(id, "Delete skipped: no such book");
        }
        Ok(())
    }

    /// Books whose title, author or publisher contains `needle` (case-sensitive).
    pub async fn filter(&self, needle: &str) -> ServiceResult<Vec<Book>> {
        let books = self.list().await?;
        Ok(books.into_iter().filter(|b| b.matches(needle)).collect())
    }

    pub async fn find_one(&self, id: i64) -> ServiceResult<Option<Book>> {
        Ok(self.db.books().find_by_id(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::validation::current_year;
    use bookstore_db::DbConfig;

    async fn service() -> BookService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        BookService::new(db)
    }

    fn go_book() -> Book {
        Book {
            id: 1,
            title: "The Go Programming Language".to_string(),
            author: "Alan Donovan".to_string(),
            publisher: "Addison-Wesley".to_string(),
            publication_year: 2015,
            price_cents: 3499,
        }
    }

    #[tokio::test]
    async fn test_valid_book_is_stored() {
        let service = service().await;

        service.add(go_book()).await.unwrap();

        assert_eq!(service.find_one(1).await.unwrap(), Some(go_book()));
    }

    #[tokio::test]
    async fn test_single_invalid_field_is_reported_alone() {
        let service = service().await;

        let mut book = go_book();
        book.publication_year = current_year() + 1;
        let err = service.add(book).await.unwrap_err();
        assert_eq!(
            err.validation_errors().unwrap().fields(),
            vec!["publication_year"]
        );

        let mut book = go_book();
        book.price_cents = -1;
        let err = service.add(book).await.unwrap_err();
        assert_eq!(err.validation_errors().unwrap().fields(), vec!["price"]);

        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_filter_is_case_sensitive() {
        let service = service().await;
        service.add(go_book()).await.unwrap();

        assert_eq!(service.filter("Go").await.unwrap().len(), 1);
        assert!(service.filter("go").await.unwrap().is_empty());
        assert_eq!(service.filter("Wesley").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_are_noops() {
        let service = service().await;
        service.add(go_book()).await.unwrap();

        let mut ghost = go_book();
        ghost.id = 42;
        service.update(ghost).await.unwrap();
        service.delete(42).await.unwrap();

        assert_eq!(service.list().await.unwrap(), vec![go_book()]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let service = service().await;
        service.add(go_book()).await.unwrap();

        let mut changed = go_book();
        changed.price_cents = 2999;
        changed.title = "The Go Programming Language, 2nd ed.".to_string();
        service.update(changed.clone()).await.unwrap();

        assert_eq!(service.find_one(1).await.unwrap(), Some(changed));
    }
}
