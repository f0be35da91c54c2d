//! # Console Loop
//!
//! Prints the menu, reads a choice, runs the command, repeats.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  print MENU                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  read choice ── end of input or "0" ──► return                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MenuCommand::parse ── unknown ──► "[INPUT_ERROR] ..." ──► loop        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  run command ── Err(AppError) ──► "[CODE] message" ──► loop            │
//! │       │                                                                 │
//! │       └── Ok ──► loop                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info, warn};

use bookstore_service::Services;

use crate::commands::{book, client, purchase, report};
use crate::error::{AppError, AppResult, ErrorCode};
use crate::prompt::Prompt;

/// Menu text, printed before every choice.
pub const MENU: &str = "\
0. Exit.
1. Add client.
2. Add book.
3. List all clients.
4. List all books.
5. Update client.
6. Update book.
7. Delete client (cascade).
8. Delete book (cascade).
9. Filter clients.
10. Filter books.
11. Purchase book.
12. Update purchase.
13. Delete purchase.
14. List purchases.
15. Top 3 clients by money spent.
16. Top 3 best-selling books.";

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Exit,
    AddClient,
    AddBook,
    ListClients,
    ListBooks,
    UpdateClient,
    UpdateBook,
    DeleteClient,
    DeleteBook,
    FilterClients,
    FilterBooks,
    PurchaseBook,
    UpdatePurchase,
    DeletePurchase,
    ListPurchases,
    TopClients,
    TopBooks,
}

impl MenuCommand {
    /// Parses a typed choice (`"0"` through `"16"`, surrounding spaces allowed).
    pub fn parse(choice: &str) -> Option<Self> {
        let command = match choice.trim() {
            "0" => MenuCommand::Exit,
            "1" => MenuCommand::AddClient,
            "2" => MenuCommand::AddBook,
            "3" => MenuCommand::ListClients,
            "4" => MenuCommand::ListBooks,
            "5" => MenuCommand::UpdateClient,
            "6" => MenuCommand::UpdateBook,
            "7" => MenuCommand::DeleteClient,
            "8" => MenuCommand::DeleteBook,
            "9" => MenuCommand::FilterClients,
            "10" => MenuCommand::FilterBooks,
            "11" => MenuCommand::PurchaseBook,
            "12" => MenuCommand::UpdatePurchase,
            "13" => MenuCommand::DeletePurchase,
            "14" => MenuCommand::ListPurchases,
            "15" => MenuCommand::TopClients,
            "16" => MenuCommand::TopBooks,
            _ => return None,
        };
        Some(command)
    }
}

/// The interactive console.
pub struct Console<R, W> {
    services: Services,
    io: Prompt<R, W>,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(services: Services, input: R, output: W) -> Self {
        Console {
            services,
            io: Prompt::new(input, output),
        }
    }

    /// Runs until `0` or end of input.
    ///
    /// Command failures are printed and the loop goes on. I/O failures end
    /// the loop with an error.
    pub async fn run(&mut self) -> AppResult<()> {
        info!("Console started");

        loop {
            self.io.say(MENU).await?;
            self.io.flush().await?;

            let Some(choice) = self.io.read_line().await? else {
                debug!("End of input");
                break;
            };

            let Some(command) = MenuCommand::parse(&choice) else {
                self.report(AppError::input(format!("Not a valid choice: '{}'", choice)))
                    .await?;
                continue;
            };

            if command == MenuCommand::Exit {
                break;
            }

            debug!(?command, "Running command");
            if let Err(err) = self.execute(command).await {
                self.report(err).await?;
            }
        }

        self.io.flush().await?;
        info!("Console stopped");
        Ok(())
    }

    async fn report(&mut self, err: AppError) -> AppResult<()> {
        warn!(code = %err.code, "Command failed: {}", err.message);
        if err.code == ErrorCode::IoError {
            return Err(err);
        }
        self.io.say(err.to_string()).await
    }

    /// Runs one command.
    pub async fn execute(&mut self, command: MenuCommand) -> AppResult<()> {
        let s = &self.services;
        let io = &mut self.io;

        match command {
            MenuCommand::Exit => Ok(()),
            MenuCommand::AddClient => client::add_client(s, io).await,
            MenuCommand::AddBook => book::add_book(s, io).await,
            MenuCommand::ListClients => client::list_clients(s, io).await,
            MenuCommand::ListBooks => book::list_books(s, io).await,
            MenuCommand::UpdateClient => client::update_client(s, io).await,
            MenuCommand::UpdateBook => book::update_book(s, io).await,
            MenuCommand::DeleteClient => client::delete_client(s, io).await,
            MenuCommand::DeleteBook => book::delete_book(s, io).await,
            MenuCommand::FilterClients => client::filter_clients(s, io).await,
            MenuCommand::FilterBooks => book::filter_books(s, io).await,
            MenuCommand::PurchaseBook => purchase::purchase_book(s, io).await,
            MenuCommand::UpdatePurchase => purchase::update_purchase(s, io).await,
            MenuCommand::DeletePurchase => purchase::delete_purchase(s, io).await,
            MenuCommand::ListPurchases => purchase::list_purchases(s, io).await,
            MenuCommand::TopClients => report::top_clients(s, io).await,
            MenuCommand::TopBooks => report::top_books(s, io).await,
        }
    }

    /// Gives back the output (tests read what was printed).
    pub fn into_output(self) -> W {
        self.io.into_output()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_db::{Database, DbConfig};

    /// Runs a scripted session and returns everything printed.
    async fn session(db: &Database, script: &str) -> String {
        let services = Services::new(db.clone());
        let mut console = Console::new(services, script.as_bytes(), Vec::new());
        console.run().await.unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    const ADA: &str = "1\n1\nAda\nLovelace\n12 Marylebone Rd\n";
    const GO_BOOK: &str =
        "2\n7\nThe Go Programming Language\nAlan Donovan\nAddison-Wesley\n2015\n34.99\n";

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuCommand::parse("0"), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::parse(" 16 "), Some(MenuCommand::TopBooks));
        assert_eq!(MenuCommand::parse("17"), None);
        assert_eq!(MenuCommand::parse("one"), None);
    }

    #[tokio::test]
    async fn test_exit_and_end_of_input() {
        let db = db().await;

        let out = session(&db, "0\n3\n").await;
        assert_eq!(out.matches("0. Exit.").count(), 1);

        let out = session(&db, "").await;
        assert!(out.contains("16. Top 3 best-selling books."));
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let db = db().await;
        let script = format!("{}{}3\n4\n0\n", ADA, GO_BOOK);

        let out = session(&db, &script).await;

        assert!(out.contains("Client{id, firstName, lastName, address}"));
        assert!(out.contains("Added Client #1: Ada Lovelace, 12 Marylebone Rd"));
        assert!(out.contains(
            "Book #7: \"The Go Programming Language\" by Alan Donovan (Addison-Wesley, 2015) $34.99"
        ));
        assert_eq!(db.books().find_by_id(7).await.unwrap().unwrap().price_cents, 3499);
    }

    #[tokio::test]
    async fn test_errors_are_printed_and_loop_continues() {
        let db = db().await;
        let script = format!(
            "42\n1\nabc\n1\n2\n\nLovelace\n12 Marylebone Rd\n{}1\n1\nGrace\nHopper\nArlington\n3\n0\n",
            ADA
        );

        let out = session(&db, &script).await;

        assert!(out.contains("[INPUT_ERROR] Not a valid choice: '42'"));
        assert!(out.contains("[INPUT_ERROR] Client id must be a whole number, got 'abc'"));
        assert!(out.contains("[VALIDATION_ERROR] first_name is required"));
        assert!(out.contains("[STORAGE_ERROR] Duplicate Client id: '1' already exists"));
        assert_eq!(db.clients().find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_purchase_flow_and_reports() {
        let db = db().await;
        let script = format!(
            "{}{}11\n1\n7\nDowntown\n11\n1\n7\nAirport\n11\n9\n7\nDowntown\n14\n15\n16\n0\n",
            ADA, GO_BOOK
        );

        let out = session(&db, &script).await;

        assert!(out.contains("client 1 bought book 7 at Downtown"));
        assert!(out.contains("[REFERENCE_ERROR]"));
        assert!(out.contains("1. Client #1: Ada Lovelace, 12 Marylebone Rd spent $69.98"));
        assert!(out.contains("sold 2 times"));
    }

    #[tokio::test]
    async fn test_delete_book_cascades() {
        let db = db().await;
        let script = format!("{}{}11\n1\n7\nDowntown\n8\n7\n14\n0\n", ADA, GO_BOOK);

        session(&db, &script).await;

        assert!(db.books().find_all().await.unwrap().is_empty());
        assert!(db.purchases().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_purchase_uses_typed_client_id() {
        let db = db().await;
        let grace = "1\n2\nGrace\nHopper\nArlington\n";
        let script = format!(
            "{}{}{}11\n1\n7\nDowntown\n12\n1\n2\n7\nAirport\n0\n",
            ADA, grace, GO_BOOK
        );

        session(&db, &script).await;

        let purchase = db.purchases().find_by_id(1).await.unwrap().unwrap();
        assert_eq!(purchase.client_id, 2);
        assert_eq!(purchase.book_id, 7);
        assert_eq!(purchase.library, "Airport");
    }

    #[tokio::test]
    async fn test_filters() {
        let db = db().await;
        let script = format!("{}{}10\nGo\n10\ngo\n9\nLove\n0\n", ADA, GO_BOOK);

        let out = session(&db, &script).await;

        assert_eq!(out.matches("The Go Programming Language\" by").count(), 2);
        assert_eq!(out.matches("No result!").count(), 1);
        assert_eq!(out.matches("Client #1: Ada Lovelace").count(), 2);
    }
}
