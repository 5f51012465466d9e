//! Stop name output.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::domain::StopPoint;

/// Write each stop's name on its own line, in the order given.
///
/// An empty slice writes nothing.
pub async fn display_stop_points<W>(output: &mut W, stops: &[StopPoint]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    for stop in stops {
        output.write_all(stop.display_name().as_bytes()).await?;
        output.write_all(b"\n").await?;
    }
    output.flush().await
}
