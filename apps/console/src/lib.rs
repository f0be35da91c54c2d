//! # Bookstore Console Library
//!
//! Startup and the menu loop for the bookstore tracker console.
//!
//! ## Module Organization
//! ```text
//! bookstore_console_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── ConsoleConfig (env, bookstore.toml, defaults)
//! ├── console.rs      ◄─── Menu loop, MenuCommand
//! ├── prompt.rs       ◄─── Line reader/writer, number and price parsing
//! ├── commands/
//! │   ├── client.rs   ◄─── Menu 1, 3, 5, 7, 9
//! │   ├── book.rs     ◄─── Menu 2, 4, 6, 8, 10
//! │   ├── purchase.rs ◄─── Menu 11-14
//! │   └── report.rs   ◄─── Menu 15, 16
//! └── error.rs        ◄─── AppError, ErrorCode
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod prompt;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bookstore_db::Database;
use bookstore_service::Services;

use config::ConsoleConfig;
use console::Console;
use error::AppResult;

/// Runs the console against stdin and stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Console Startup                                   │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • BOOKSTORE_* env vars, then bookstore.toml, then defaults          │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber to stderr (stdout belongs to the menu)         │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • Create the data directory, open SQLite (WAL), run migrations      │
/// │                                                                         │
/// │  4. Run the Menu Loop ────────────────────────────────────────────────► │
/// │     • Until "0" or end of input                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    let config = ConsoleConfig::load()?;

    init_tracing(&config.log_filter);

    info!("Starting Bookstore Tracker console");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_with(config))
}

async fn run_with(config: ConsoleConfig) -> AppResult<()> {
    let db_config = config.db_config();

    if !db_config.is_in_memory() {
        if let Some(dir) = db_config.database_path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
    }

    info!(path = %db_config.database_path.display(), "Database path determined");
    let db = Database::new(db_config).await?;
    info!("Database connected and migrations applied");

    let services = Services::new(db.clone());
    let input = BufReader::new(tokio::io::stdin());
    let mut console = Console::new(services, input, tokio::io::stdout());

    let result = console.run().await;

    db.close().await;
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set (e.g. `RUST_LOG=bookstore=trace`)
/// - Otherwise `filter` (from `BOOKSTORE_LOG` or the config file)
/// - Default: `info,bookstore=debug,sqlx=warn`
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // try_init: a second call (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
