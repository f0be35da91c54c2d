//! # Menu Commands
//!
//! One async function per menu entry. Each reads its fields through a
//! [`Prompt`](crate::prompt::Prompt), calls a service and prints the result.
//!
//! ## Command Categories
//!
//! ### Clients ([`client`])
//! - `add_client`, `list_clients`, `update_client`, `delete_client`, `filter_clients`
//!
//! ### Books ([`book`])
//! - `add_book`, `list_books`, `update_book`, `delete_book`, `filter_books`
//!
//! ### Purchases ([`purchase`])
//! - `purchase_book`, `update_purchase`, `delete_purchase`, `list_purchases`
//!
//! ### Reports ([`report`])
//! - `top_clients`, `top_books`

pub mod book;
pub mod client;
pub mod purchase;
pub mod report;
