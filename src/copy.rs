//! Bounded byte copying between streams

use std::io::{ErrorKind, Read, Write};

use thiserror::Error;

/// Chunk size for stream copies.
const COPY_BUF_SIZE: usize = 8 * 1024;

/// Error from a bounded copy.
#[derive(Debug, Error)]
pub enum CopyError {
    /// The source held more bytes than the configured limit. Bytes up to
    /// the last full chunk below the limit may already be written.
    #[error("copy exceeded limit of {limit} bytes")]
    LimitExceeded { limit: u64 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Copy `reader` to `writer` until EOF, returning the bytes written.
///
/// With `Some(limit)`, a source holding more than `limit` bytes fails with
/// [`CopyError::LimitExceeded`] instead of writing past the cap; the chunk
/// that would cross the limit is not written.
pub fn copy_limited<R, W>(
    reader: &mut R,
    writer: &mut W,
    limit: Option<u64>,
) -> Result<u64, CopyError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = [0u8; COPY_BUF_SIZE];
    let mut written: u64 = 0;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(written),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if let Some(limit) = limit {
            if written + n as u64 > limit {
                return Err(CopyError::LimitExceeded { limit });
            }
        }
        writer.write_all(&buf[..n])?;
        written += n as u64;
    }
}
