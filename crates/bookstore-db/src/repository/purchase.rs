//! # Purchase Repository
//!
//! Database operations for purchases.
//!
//! ## No Foreign Keys
//! `client_id` and `book_id` are plain integers in the schema. This
//! repository stores whatever it is given; the purchase service checks that
//! both ids resolve before calling [`PurchaseRepository::insert`] or
//! [`PurchaseRepository::update`].
//!
//! ## Cascades
//! ```text
//! tx = db.begin()
//!   PurchaseRepository::delete_by_book_id_with(&mut *tx, book_id)
//!   BookRepository::delete_by_id_with(&mut *tx, book_id)
//! tx.commit()
//! ```

use sqlx::{SqliteExecutor, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use bookstore_core::{NewPurchase, Purchase};

/// Repository for purchase database operations.
#[derive(Debug, Clone)]
pub struct PurchaseRepository {
    pool: SqlitePool,
}

impl PurchaseRepository {
    /// Creates a new PurchaseRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PurchaseRepository { pool }
    }

    /// Inserts a purchase; the id is assigned by SQLite.
    pub async fn insert(&self, purchase: &NewPurchase) -> DbResult<Purchase> {
        debug!(
            client_id = purchase.client_id,
            book_id = purchase.book_id,
            "Inserting purchase"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO purchases (client_id, book_id, library)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(purchase.client_id)
        .bind(purchase.book_id)
        .bind(&purchase.library)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Purchase stored");

        Ok(purchase.clone().with_id(id))
    }

    /// Gets a purchase by id.
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Purchase>> {
        let purchase = sqlx::query_as::<_, Purchase>(
            r#"
            SELECT id, client_id, book_id, library
            FROM purchases
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(purchase)
    }

    /// Lists every purchase, ordered by id.
    pub async fn find_all(&self) -> DbResult<Vec<Purchase>> {
        let purchases = sqlx::query_as::<_, Purchase>(
            r#"
            SELECT id, client_id, book_id, library
            FROM purchases
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = purchases.len(), "Listed purchases");
        Ok(purchases)
    }

    /// Lists a client's purchases, ordered by id.
    pub async fn find_by_client_id(&self, client_id: i64) -> DbResult<Vec<Purchase>> {
        let purchases = sqlx::query_as::<_, Purchase>(
            r#"
            SELECT id, client_id, book_id, library
            FROM purchases
            WHERE client_id = ?1
            ORDER BY id
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(purchases)
    }

    /// Number of purchases referencing a book.
    pub async fn count_by_book_id(&self, book_id: i64) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM purchases WHERE book_id = ?1")
            .bind(book_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Replaces client id, book id and library of the purchase with `purchase.id`.
    ///
    /// Returns `false` when no purchase has this id.
    pub async fn update(&self, purchase: &Purchase) -> DbResult<bool> {
        debug!(id = purchase.id, "Updating purchase");

        let result = sqlx::query(
            r#"
            UPDATE purchases SET
                client_id = ?2,
                book_id = ?3,
                library = ?4
            WHERE id = ?1
            "#,
        )
        .bind(purchase.id)
        .bind(purchase.client_id)
        .bind(purchase.book_id)
        .bind(&purchase.library)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a purchase by id. Returns the number of rows removed.
    pub async fn delete_by_id(&self, id: i64) -> DbResult<u64> {
        debug!(id, "Deleting purchase");

        let result = sqlx::query("DELETE FROM purchases WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Deletes every purchase of a client.
    pub async fn delete_by_client_id(&self, client_id: i64) -> DbResult<u64> {
        Self::delete_by_client_id_with(&self.pool, client_id).await
    }

    /// [`delete_by_client_id`](Self::delete_by_client_id) on any executor.
    pub async fn delete_by_client_id_with<'e, E>(executor: E, client_id: i64) -> DbResult<u64>
    where
        E: SqliteExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM purchases WHERE client_id = ?1")
            .bind(client_id)
            .execute(executor)
            .await?;

        debug!(client_id, removed = result.rows_affected(), "Deleted client purchases");
        Ok(result.rows_affected())
    }

    /// Deletes every purchase of a book.
    pub async fn delete_by_book_id(&self, book_id: i64) -> DbResult<u64> {
        Self::delete_by_book_id_with(&self.pool, book_id).await
    }

    /// [`delete_by_book_id`](Self::delete_by_book_id) on any executor.
    pub async fn delete_by_book_id_with<'e, E>(executor: E, book_id: i64) -> DbResult<u64>
    where
        E: SqliteExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM purchases WHERE book_id = ?1")
            .bind(book_id)
            .execute(executor)
            .await?;

        debug!(book_id, removed = result.rows_affected(), "Deleted book purchases");
        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
