use std::path::Path;

use bytes::{Bytes, BytesMut};
use tokio::fs::File;
use tokio_stream::StreamExt;
use tokio_util::codec::{Decoder, FramedRead};

use crate::{error::IngestError, parser::parse_chunk, record::CourseRecord};

// Tokio MAX_BUF for blocking IO: https://github.com/tokio-rs/tokio/blob/master/tokio/src/io/blocking.rs#L26
static BUFFER_SIZE: usize = 2 * 1024 * 1024;

/// Yields everything buffered up to and including the last newline, so each
/// chunk holds whole lines only. A trailing unterminated line is flushed at EOF.
pub struct LineChunkDecoder;

impl Decoder for LineChunkDecoder {
    type Item = Bytes;
    type Error = std::io::Error;

    #[inline]
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match memchr::memrchr(b'\n', src) {
            Some(index) => Ok(Some(src.split_to(index + 1).freeze())),
            None => Ok(None),
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(src)? {
            Some(chunk) => Ok(Some(chunk)),
            None if src.is_empty() => Ok(None),
            None => Ok(Some(src.split().freeze())),
        }
    }
}

/// Reads a course file with tokio, parsing each chunk on a blocking task.
/// Records come back in file order.
pub async fn read_records(path: impl AsRef<Path>) -> Result<Vec<CourseRecord>, IngestError> {
    let path = path.as_ref();
    let file = File::open(path)
        .await
        .map_err(|error| IngestError::io(path, error))?;
    let mut framed = FramedRead::with_capacity(file, LineChunkDecoder, BUFFER_SIZE);

    let mut tasks = Vec::new();
    let mut next_line = 1;
    while let Some(chunk) = framed.next().await {
        let chunk = chunk.map_err(|error| IngestError::io(path, error))?;
        let first_line = next_line;
        next_line += memchr::memchr_iter(b'\n', &chunk).count();
        tasks.push(tokio::task::spawn_blocking(move || {
            parse_chunk(&chunk, first_line)
        }));
    }
    tracing::debug!(path = %path.display(), chunks = tasks.len(), "file decoded");

    let mut records = Vec::new();
    for task in tasks {
        records.extend(task.await??);
    }
    Ok(records)
}
