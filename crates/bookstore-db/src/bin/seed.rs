//! # Seed Data Generator
//!
//! Populates a database with demo clients, books and purchases.
//!
//! ## Usage
//! ```bash
//! # Seed ./bookstore_dev.db
//! cargo run -p bookstore-db --bin seed
//!
//! # Specify database path
//! cargo run -p bookstore-db --bin seed -- --db ./data/bookstore.db
//! ```
//!
//! ## Generated Data
//! - Clients 1..=6, books 1..=8 (ids are fixed so reruns are detectable)
//! - Purchases spread over three branches, uneven so both reports have a
//!   clear ranking

use std::env;

use bookstore_core::{Book, Client, NewPurchase};
use bookstore_db::{Database, DbConfig};

/// (first name, last name, address)
const CLIENTS: &[(&str, &str, &str)] = &[
    ("Ada", "Lovelace", "12 Marylebone Rd"),
    ("Grace", "Hopper", "1 Navy Way"),
    ("Alan", "Turing", "78 High St"),
    ("Edsger", "Dijkstra", "5 Nuenen Ln"),
    ("Barbara", "Liskov", "32 Vassar St"),
    ("Donald", "Knuth", "9 Stanford Ave"),
];

/// (title, author, publisher, year, price in cents)
const BOOKS: &[(&str, &str, &str, i32, i64)] = &[
    ("The Go Programming Language", "Alan Donovan", "Addison-Wesley", 2015, 3499),
    ("The C Programming Language", "Brian Kernighan", "Prentice Hall", 1988, 4599),
    ("Structure and Interpretation of Computer Programs", "Harold Abelson", "MIT Press", 1996, 5500),
    ("The Art of Computer Programming", "Donald Knuth", "Addison-Wesley", 1968, 18999),
    ("Programming Pearls", "Jon Bentley", "Addison-Wesley", 1999, 2899),
    ("The Rust Programming Language", "Steve Klabnik", "No Starch Press", 2019, 3995),
    ("Designing Data-Intensive Applications", "Martin Kleppmann", "O'Reilly", 2017, 4250),
    ("Refactoring", "Martin Fowler", "Addison-Wesley", 1999, 4700),
];

const LIBRARIES: &[&str] = &["Downtown", "Airport", "University"];

/// (client id, book id)
#[rustfmt::skip]
const PURCHASES: &[(i64, i64)] = &[
    (1, 1), (1, 4), (1, 6),
    (2, 1), (2, 2),
    (3, 3), (3, 4),
    (4, 1), (4, 5),
    (5, 6), (5, 7), (5, 1),
    (6, 4), (6, 8),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./bookstore_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Bookstore Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./bookstore_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Bookstore Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.clients().find_all().await?.len();
    if existing > 0 {
        println!("⚠ Database already has {} clients", existing);
        println!("  Skipping seed to avoid duplicate ids.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    for (idx, (first, last, address)) in CLIENTS.iter().enumerate() {
        let client = Client {
            id: idx as i64 + 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
            address: address.to_string(),
        };
        db.clients().insert(&client).await?;
    }
    println!("✓ Inserted {} clients", CLIENTS.len());

    for (idx, (title, author, publisher, year, price_cents)) in BOOKS.iter().enumerate() {
        let book = Book {
            id: idx as i64 + 1,
            title: title.to_string(),
            author: author.to_string(),
            publisher: publisher.to_string(),
            publication_year: *year,
            price_cents: *price_cents,
        };
        db.books().insert(&book).await?;
    }
    println!("✓ Inserted {} books", BOOKS.len());

    for (idx, (client_id, book_id)) in PURCHASES.iter().enumerate() {
        let library = LIBRARIES[idx % LIBRARIES.len()];
        let purchase = NewPurchase::new(*client_id, *book_id, library);
        if let Err(e) = db.purchases().insert(&purchase).await {
            eprintln!("Failed to insert purchase {}: {}", idx, e);
        }
    }
    println!("✓ Inserted {} purchases", PURCHASES.len());

    println!();
    println!(
        "  Book 1 sold {} copies",
        db.purchases().count_by_book_id(1).await?
    );

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
