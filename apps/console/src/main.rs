//! # Bookstore Console Entry Point
//!
//! ## Startup Sequence
//! 1. Load configuration
//! 2. Initialize tracing (logging to stderr)
//! 3. Connect to database & run migrations
//! 4. Run the menu loop on stdin/stdout
//!
//! The actual setup is in lib.rs so the loop can be tested with scripted
//! input.

use std::process::ExitCode;

fn main() -> ExitCode {
    match bookstore_console_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
