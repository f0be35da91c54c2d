//! # Purchase Service
//!
//! Purchases plus everything that spans more than one table: reference
//! checks, cascading deletes and the two reports.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    add / update purchase                                │
//! │                                                                         │
//! │  check_references(client_id, book_id)                                  │
//! │       │ false ──► CoreError::InvalidReference   (nothing written)      │
//! │       ▼ true                                                            │
//! │  validate_purchase(library, ids > 0)                                   │
//! │       │ errors ──► CoreError::Validation        (nothing written)      │
//! │       ▼ ok                                                              │
//! │  PurchaseRepository::insert / update                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cascades
//! `cascade_delete_book` and `cascade_delete_client` remove the dependent
//! purchases and then the entity inside one transaction. If either step
//! fails the transaction is dropped and both are rolled back.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use bookstore_core::report::top_n_by_key;
use bookstore_core::validation::validate_purchase;
use bookstore_core::{
    BookSales, ClientSpending, CoreError, Money, NewPurchase, Purchase, REPORT_SIZE,
};
use bookstore_db::{BookRepository, ClientRepository, Database, DbError, PurchaseRepository};

use crate::book::BookService;
use crate::client::ClientService;
use crate::error::ServiceResult;

/// Purchase operations, cascades and reports.
#[derive(Debug, Clone)]
pub struct PurchaseService {
    db: Database,
    clients: ClientService,
    books: BookService,
}

impl PurchaseService {
    pub fn new(db: Database, clients: ClientService, books: BookService) -> Self {
        PurchaseService { db, clients, books }
    }

    // =========================================================================
    // References
    // =========================================================================

    /// True only when both the client and the book exist.
    pub async fn check_references(&self, client_id: i64, book_id: i64) -> ServiceResult<bool> {
        let client = self.clients.find_one(client_id).await?;
        let book = self.books.find_one(book_id).await?;
        Ok(client.is_some() && book.is_some())
    }

    async fn require_references(&self, client_id: i64, book_id: i64) -> ServiceResult<()> {
        if self.check_references(client_id, book_id).await? {
            Ok(())
        } else {
            debug!(client_id, book_id, "Reference check failed");
            Err(CoreError::InvalidReference { client_id, book_id }.into())
        }
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Records a sale.
    ///
    /// ## Errors
    /// * Reference - client or book does not exist (checked first)
    /// * Validation - empty library or non-positive ids
    pub async fn add(&self, purchase: NewPurchase) -> ServiceResult<Purchase> {
        self.require_references(purchase.client_id, purchase.book_id)
            .await?;
        validate_purchase(&purchase)?;

        let stored = self.db.purchases().insert(&purchase).await?;
        info!(
            id = stored.id,
            client_id = stored.client_id,
            book_id = stored.book_id,
            "Purchase added"
        );
        Ok(stored)
    }

    /// Replaces client id, book id and library of the purchase with
    /// `purchase.id`. Same checks as [`add`](Self::add); unknown ids are a no-op.
    pub async fn update(&self, purchase: Purchase) -> ServiceResult<()> {
        self.require_references(purchase.client_id, purchase.book_id)
            .await?;
        validate_purchase(&NewPurchase::from(&purchase))?;

        if !self.db.purchases().update(&purchase).await? {
            debug!(id = purchase.id, "Update skipped: no such purchase");
        }
        Ok(())
    }

    /// Every purchase, ordered by id.
    pub async fn list(&self) -> ServiceResult<Vec<Purchase>> {
        Ok(self.db.purchases().find_all().await?)
    }

    pub async fn find_one(&self, id: i64) -> ServiceResult<Option<Purchase>> {
        Ok(self.db.purchases().find_by_id(id).await?)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        if self.db.purchases().delete_by_id(id).await? == 0 {
            debug!(id, "Delete skipped: no such purchase");
        }
        Ok(())
    }

    /// Removes every purchase made by a client. Returns how many were removed.
    pub async fn delete_by_client_id(&self, client_id: i64) -> ServiceResult<u64> {
        Ok(self.db.purchases().delete_by_client_id(client_id).await?)
    }

    /// Removes every purchase of a book. Returns how many were removed.
    pub async fn delete_by_book_id(&self, book_id: i64) -> ServiceResult<u64> {
        Ok(self.db.purchases().delete_by_book_id(book_id).await?)
    }

    // =========================================================================
    // Cascades
    // =========================================================================

    /// Deletes a book and every purchase of it, atomically.
    pub async fn cascade_delete_book(&self, book_id: i64) -> ServiceResult<()> {
        let mut tx = self.db.begin().await?;

        let purchases = PurchaseRepository::delete_by_book_id_with(&mut *tx, book_id).await?;
        let books = BookRepository::delete_by_id_with(&mut *tx, book_id).await?;

        tx.commit().await.map_err(DbError::from)?;

        info!(book_id, purchases, books, "Book deleted with its purchases");
        Ok(())
    }

    /// Deletes a client and every purchase they made, atomically.
    pub async fn cascade_delete_client(&self, client_id: i64) -> ServiceResult<()> {
        let mut tx = self.db.begin().await?;

        let purchases = PurchaseRepository::delete_by_client_id_with(&mut *tx, client_id).await?;
        let clients = ClientRepository::delete_by_id_with(&mut *tx, client_id).await?;

        tx.commit().await.map_err(DbError::from)?;

        info!(client_id, purchases, clients, "Client deleted with their purchases");
        Ok(())
    }

    // =========================================================================
    // Metrics
    // =========================================================================

    /// Sum of the current prices of every book the client bought.
    ///
    /// Purchases whose book no longer exists contribute nothing. A total
    /// that does not fit in `Money` is an `AmountOverflow` error.
    pub async fn money_spent_for_client(&self, client_id: i64) -> ServiceResult<Money> {
        let purchases = self.db.purchases().find_by_client_id(client_id).await?;

        let mut prices: HashMap<i64, Option<Money>> = HashMap::new();
        let mut total = Money::zero();

        for purchase in &purchases {
            let price = match prices.get(&purchase.book_id) {
                Some(price) => *price,
                None => {
                    let price = self
                        .books
                        .find_one(purchase.book_id)
                        .await?
                        .map(|b| b.price());
                    prices.insert(purchase.book_id, price);
                    price
                }
            };

            match price {
                Some(price) => {
                    total = total
                        .checked_add(price)
                        .ok_or_else(|| CoreError::AmountOverflow {
                            what: format!("money spent by client {}", client_id),
                        })?;
                }
                None => warn!(
                    purchase_id = purchase.id,
                    book_id = purchase.book_id,
                    "Skipping purchase of a missing book"
                ),
            }
        }

        Ok(total)
    }

    /// Number of purchases of a book.
    pub async fn book_sales(&self, book_id: i64) -> ServiceResult<i64> {
        Ok(self.db.purchases().count_by_book_id(book_id).await?)
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// The three clients who spent the most, largest first.
    ///
    /// Ties keep client id order.
    pub async fn report_top3_clients_by_money_spent(&self) -> ServiceResult<Vec<ClientSpending>> {
        let clients = self.clients.list().await?;

        let mut rows = Vec::with_capacity(clients.len());
        for client in clients {
            let spent = self.money_spent_for_client(client.id).await?;
            rows.push(ClientSpending { client, spent });
        }

        Ok(top_n_by_key(rows, REPORT_SIZE, |row| row.spent))
    }

    /// The three books with the most purchases, largest first.
    ///
    /// Ties keep book id order.
    pub async fn report_top3_best_selling_books(&self) -> ServiceResult<Vec<BookSales>> {
        let books = self.books.list().await?;

        let mut rows = Vec::with_capacity(books.len());
        for book in books {
            let sales = self.book_sales(book.id).await?;
            rows.push(BookSales { book, sales });
        }

        Ok(top_n_by_key(rows, REPORT_SIZE, |row| row.sales))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
