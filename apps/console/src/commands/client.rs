//! # Client Commands

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::debug;

use bookstore_core::Client;
use bookstore_service::Services;

use crate::error::AppResult;
use crate::prompt::Prompt;

const CLIENT_FIELDS: &str = "Client{id, firstName, lastName, address}";

async fn read_client<R, W>(io: &mut Prompt<R, W>) -> AppResult<Client>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    io.say(CLIENT_FIELDS).await?;

    Ok(Client {
        id: io.id("Client id").await?,
        first_name: io.field("first name").await?,
        last_name: io.field("last name").await?,
        address: io.field("address").await?,
    })
}

/// Menu 1.
pub async fn add_client<R, W>(services: &Services, io: &mut Prompt<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let client = read_client(io).await?;
    let stored = services.clients.add(client).await?;
    io.say(format!("Added {}", stored)).await
}

/// Menu 3.
pub async fn list_clients<R, W>(services: &Services, io: &mut Prompt<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let clients = services.clients.list().await?;
    debug!(count = clients.len(), "Listing clients");

    for client in clients {
        io.say(client.to_string()).await?;
    }
    Ok(())
}

/// Menu 5. Unknown ids change nothing.
pub async fn update_client<R, W>(services: &Services, io: &mut Prompt<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let client = read_client(io).await?;
    services.clients.update(client).await?;
    Ok(())
}

/// Menu 7. Removes the client's purchases too.
pub async fn delete_client<R, W>(services: &Services, io: &mut Prompt<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    io.say("Client{id}").await?;
    let id = io.id("Client id").await?;

    services.purchases.cascade_delete_client(id).await?;
    Ok(())
}

/// Menu 9.
pub async fn filter_clients<R, W>(services: &Services, io: &mut Prompt<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    io.say("Search clients:").await?;
    let needle = io.field("search text").await?;

    let found = services.clients.filter(&needle).await?;
    if found.is_empty() {
        return io.say("No result!").await;
    }

    for client in found {
        io.say(client.to_string()).await?;
    }
    Ok(())
}
