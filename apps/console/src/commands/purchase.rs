//! # Purchase Commands

use tokio::io::{AsyncBufRead, AsyncWrite};

use bookstore_core::NewPurchase;
use bookstore_service::Services;

use crate::error::AppResult;
use crate::prompt::Prompt;

async fn read_new_purchase<R, W>(io: &mut Prompt<R, W>) -> AppResult<NewPurchase>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let client_id = io.id("Client id").await?;
    let book_id = io.id("Book id").await?;
    let library = io.field("library").await?;
    Ok(NewPurchase::new(client_id, book_id, library))
}

/// Menu 11.
pub async fn purchase_book<R, W>(services: &Services, io: &mut Prompt<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    io.say("Client{id} Book{id} Purchase{library}").await?;
    let purchase = read_new_purchase(io).await?;

    let stored = services.purchases.add(purchase).await?;
    io.say(format!("Added {}", stored)).await
}

/// Menu 12. Unknown purchase ids change nothing.
pub async fn update_purchase<R, W>(services: &Services, io: &mut Prompt<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    io.say("Purchase{id} Client{id} Book{id} Purchase{library}").await?;
    let id = io.id("Purchase id").await?;
    let purchase = read_new_purchase(io).await?.with_id(id);

    services.purchases.update(purchase).await?;
    Ok(())
}

/// Menu 13.
pub async fn delete_purchase<R, W>(services: &Services, io: &mut Prompt<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    io.say("Purchase{id}").await?;
    let id = io.id("Purchase id").await?;

    services.purchases.delete(id).await?;
    Ok(())
}

/// Menu 14.
pub async fn list_purchases<R, W>(services: &Services, io: &mut Prompt<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    for purchase in services.purchases.list().await? {
        io.say(purchase.to_string()).await?;
    }
    Ok(())
}
