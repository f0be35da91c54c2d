//! # Book Commands

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::debug;

use bookstore_core::Book;
use bookstore_service::Services;

use crate::error::AppResult;
use crate::prompt::Prompt;

const BOOK_FIELDS: &str = "Book{id, title, author, publisher, publicationYear, price}";

async fn read_book<R, W>(io: &mut Prompt<R, W>) -> AppResult<Book>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    io.say(BOOK_FIELDS).await?;

    Ok(Book {
        id: io.id("Book id").await?,
        title: io.field("title").await?,
        author: io.field("author").await?,
        publisher: io.field("publisher").await?,
        publication_year: io.year("Publication year").await?,
        price_cents: io.money("Price").await?.cents(),
    })
}

/// Menu 2.
pub async fn add_book<R, W>(services: &Services, io: &mut Prompt<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let book = read_book(io).await?;
    let stored = services.books.add(book).await?;
    io.say(format!("Added {}", stored)).await
}

/// Menu 4.
pub async fn list_books<R, W>(services: &Services, io: &mut Prompt<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let books = services.books.list().await?;
    debug!(count = books.len(), "Listing books");

    for book in books {
        io.say(book.to_string()).await?;
    }
    Ok(())
}

/// Menu 6. Unknown ids change nothing.
pub async fn update_book<R, W>(services: &Services, io: &mut Prompt<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let book = read_book(io).await?;
    services.books.update(book).await?;
    Ok(())
}

/// Menu 8. Removes every purchase of the book too.
pub async fn delete_book<R, W>(services: &Services, io: &mut Prompt<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    io.say("Book{id}").await?;
    let id = io.id("Book id").await?;

    services.purchases.cascade_delete_book(id).await?;
    Ok(())
}

/// Menu 10.
pub async fn filter_books<R, W>(services: &Services, io: &mut Prompt<R, W>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    io.say("Search books:").await?;
    let needle = io.field("search text").await?;

    let found = services.books.filter(&needle).await?;
    if found.is_empty() {
        return io.say("No result!").await;
    }

    for book in found {
        io.say(book.to_string()).await?;
    }
    Ok(())
}
