//! Interactive postcode prompt.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Text shown before reading the postcode.
pub const PROMPT: &str = "Enter your postcode: ";

/// Show the prompt and read a single line of input.
///
/// The input is taken by value and released when this returns, on every
/// path. End of input yields an empty string; nothing is retried.
pub async fn read_postcode<R, W>(mut input: R, output: &mut W) -> std::io::Result<String>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;

    let mut line = String::new();
    input.read_line(&mut line).await?;

    Ok(line)
}
