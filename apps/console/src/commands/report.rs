//! # Report Commands
//!
//! ```text
//! Top 3 clients by money spent:
//! 1. Client #1: Ada Lovelace, 12 Marylebone Rd spent $15.00
//! 2. ...
//! ```

use tokio::io::{AsyncBufRead, AsyncWrite};

use bookstore_service::Services;

use crate::error::AppResult;
use crate::prompt::Prompt;

/// Menu 15.
pub async fn top_clients<R, W>(services: &Services, io: &mut Prompt<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let rows = services.purchases.report_top3_clients_by_money_spent().await?;

    io.say("Top 3 clients by money spent:").await?;
    for (rank, row) in rows.iter().enumerate() {
        io.say(format!("{}. {} spent {}", rank + 1, row.client, row.spent))
            .await?;
    }
    Ok(())
}

/// Menu 16.
pub async fn top_books<R, W>(services: &Services, io: &mut Prompt<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let rows = services.purchases.report_top3_best_selling_books().await?;

    io.say("Top 3 best-selling books:").await?;
    for (rank, row) in rows.iter().enumerate() {
        io.say(format!("{}. {} sold {} times", rank + 1, row.book, row.sales))
            .await?;
    }
    Ok(())
}
