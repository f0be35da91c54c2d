//! # Line Prompt
//!
//! Line-oriented reader and writer shared by every command.
//!
//! Each command prints a header naming its fields, then reads one field
//! per line:
//!
//! ```text
//! Book{id, title, author, publisher, publicationYear, price}
//! 7
//! The Go Programming Language
//! Alan Donovan
//! Addison-Wesley
//! 2015
//! 34.99
//! ```

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use bookstore_core::Money;

use crate::error::{AppError, AppResult};

/// Line reader over any async input, writer over any async output.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R, W> Prompt<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    /// Reads one line without its line ending. `None` at end of input.
    pub async fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Reads a field that must be present. End of input is an input error.
    pub async fn field(&mut self, name: &str) -> AppResult<String> {
        self.read_line()
            .await?
            .ok_or_else(|| AppError::input(format!("Input ended before {} was entered", name)))
    }

    /// Reads a whole number.
    pub async fn id(&mut self, name: &str) -> AppResult<i64> {
        let text = self.field(name).await?;
        text.trim()
            .parse()
            .map_err(|_| AppError::input(format!("{} must be a whole number, got '{}'", name, text)))
    }

    /// Reads a year.
    pub async fn year(&mut self, name: &str) -> AppResult<i32> {
        let text = self.field(name).await?;
        text.trim()
            .parse()
            .map_err(|_| AppError::input(format!("{} must be a year, got '{}'", name, text)))
    }

    /// Reads a decimal amount such as `12`, `12.5` or `12.50`.
    pub async fn money(&mut self, name: &str) -> AppResult<Money> {
        let text = self.field(name).await?;
        text.trim()
            .parse::<Money>()
            .map_err(|e| AppError::input(format!("{}: {}", name, e)))
    }

    /// Writes one line.
    pub async fn say(&mut self, line: impl AsRef<str>) -> AppResult<()> {
        self.output.write_all(line.as_ref().as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        Ok(())
    }

    pub async fn flush(&mut self) -> AppResult<()> {
        self.output.flush().await?;
        Ok(())
    }

    /// Gives back the output (tests read what was printed).
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn prompt(input: &str) -> Prompt<&[u8], Vec<u8>> {
        Prompt::new(input.as_bytes(), Vec::new())
    }

    #[tokio::test]
    async fn test_read_line_strips_line_endings() {
        let mut p = prompt("first\r\nsecond\nlast");

        assert_eq!(p.read_line().await.unwrap().as_deref(), Some("first"));
        assert_eq!(p.read_line().await.unwrap().as_deref(), Some("second"));
        assert_eq!(p.read_line().await.unwrap().as_deref(), Some("last"));
        assert_eq!(p.read_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_numbers() {
        let mut p = prompt("42\n 2015 \n12.5\nabc\n");

        assert_eq!(p.id("Book id").await.unwrap(), 42);
        assert_eq!(p.year("Publication year").await.unwrap(), 2015);
        assert_eq!(p.money("Price").await.unwrap(), Money::from_cents(1250));

        let err = p.id("Client id").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InputError);
        assert_eq!(err.message, "Client id must be a whole number, got 'abc'");
    }

    #[tokio::test]
    async fn test_field_at_end_of_input() {
        let mut p = prompt("");
        let err = p.field("library").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InputError);
    }

    #[tokio::test]
    async fn test_say_writes_lines() {
        let mut p = prompt("");
        p.say("hello").await.unwrap();
        p.say(String::from("world")).await.unwrap();

        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "hello\nworld\n");
    }
}
