//! # Repository Module
//!
//! Database repository implementations for the bookstore tracker.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Service                                                               │
//! │       │                                                                 │
//! │       │  db.books().find_by_id(7)                                      │
//! │       ▼                                                                 │
//! │  BookRepository                                                        │
//! │  ├── insert(&self, book)                                               │
//! │  ├── find_by_id(&self, id)         → Option<Book>                      │
//! │  ├── find_all(&self)               → Vec<Book> (id order)              │
//! │  ├── update(&self, book)           → bool (false: no such id)          │
//! │  └── delete_by_id(&self, id)       → rows removed                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pool or Transaction
//! Deletes that take part in cascades also exist as associated functions
//! generic over [`sqlx::SqliteExecutor`] (`delete_by_id_with`,
//! `delete_by_book_id_with`, ...). The `&self` methods call them with the
//! pool; a service holding a transaction calls them with `&mut *tx`.
//!
//! ## Available Repositories
//!
//! - [`client::ClientRepository`] - Client CRUD
//! - [`book::BookRepository`] - Book CRUD
//! - [`purchase::PurchaseRepository`] - Purchase CRUD, bulk deletes, sales count

pub mod book;
pub mod client;
pub mod purchase;
