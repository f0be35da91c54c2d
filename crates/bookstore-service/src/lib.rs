//! # bookstore-service: Application Services
//!
//! Each service validates input with `bookstore-core` before anything
//! reaches `bookstore-db`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Console command                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               bookstore-service (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ClientService      BookService       PurchaseService          │   │
//! │  │   add/list/update    add/list/update   add/update (ref checks)  │   │
//! │  │   delete/filter      delete/filter     cascades (transaction)   │   │
//! │  │   find_one           find_one          money spent, reports     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  bookstore-db repositories                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! let services = Services::new(Database::new(DbConfig::in_memory()).await?);
//! services.clients.add(client).await?;
//! services.purchases.cascade_delete_client(client_id).await?;
//! ```

pub mod book;
pub mod client;
pub mod error;
pub mod purchase;

pub use book::BookService;
pub use client::ClientService;
pub use error::{ServiceError, ServiceResult};
pub use purchase::PurchaseService;

use bookstore_db::Database;

/// All services over one database.
#[derive(Debug, Clone)]
pub struct Services {
    pub clients: ClientService,
    pub books: BookService,
    pub purchases: PurchaseService,
}

impl Services {
    pub fn new(db: Database) -> Self {
        let clients = ClientService::new(db.clone());
        let books = BookService::new(db.clone());
        let purchases = PurchaseService::new(db, clients.clone(), books.clone());

        Services {
            clients,
            books,
            purchases,
        }
    }
}
