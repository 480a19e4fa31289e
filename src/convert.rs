//! The run loop: line transport in, serialized records out.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::stream::CopyStream;
use crate::Result;

/// Drives a [`CopyStream`] from a line source to a JSON sink.
///
/// Generic over the reader and writer so the binary can hand it
/// stdin/stdout while tests run it over in-memory buffers.
pub struct Converter<R, W> {
    reader: R,
    sink: W,
    stream: CopyStream,
}

impl<R, W> Converter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, sink: W) -> Self {
        Self {
            reader,
            sink,
            stream: CopyStream::new(),
        }
    }

    /// Consumes the input to end-of-stream, writing one JSON value per
    /// produced record, each on its own line, in generation order.
    ///
    /// Each line is fully processed and its record (if any) written and
    /// flushed before the next line is read; nothing is accumulated.
    pub async fn run(self) -> Result<()> {
        let Self {
            reader,
            mut sink,
            mut stream,
        } = self;

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if let Some(record) = stream.feed(&line) {
                let mut buf = serde_json::to_vec(&record)?;
                buf.push(b'\n');
                sink.write_all(&buf).await?;
                sink.flush().await?;
            }
        }

        debug!(state = ?stream.state(), "input stream ended");
        Ok(())
    }
}
