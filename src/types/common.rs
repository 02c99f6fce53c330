//! Object content sources.

use crate::error::{StorageError, TransferError};
use bytes::Bytes;
use std::fmt;
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Readable content with a declared length, uploaded by `create`.
///
/// The source is drained into memory before the request is issued. A source
/// that ends before its declared length fails the upload instead of sending
/// a truncated body.
pub struct ObjectContent {
    reader: Box<dyn AsyncRead + Send + Unpin>,
    length: u64,
}

impl ObjectContent {
    /// Wrap a reader expected to yield exactly `length` bytes.
    pub fn new<R>(reader: R, length: u64) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        Self {
            reader: Box::new(reader),
            length,
        }
    }

    /// Content held in memory.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        let length = bytes.len() as u64;
        Self::new(std::io::Cursor::new(bytes), length)
    }

    /// Declared length in bytes.
    pub fn len(&self) -> u64 {
        self.length
    }

    /// Whether the declared length is zero.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Read exactly the declared number of bytes.
    ///
    /// The buffer is reserved up front; a declared length that cannot be
    /// reserved fails with [`TransferError::ContentTooLarge`].
    pub async fn drain(self) -> Result<Bytes, StorageError> {
        let expected = self.length;
        let too_large = || TransferError::ContentTooLarge { length: expected };

        let capacity = usize::try_from(expected).map_err(|_| too_large())?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity).map_err(|_| too_large())?;

        self.reader
            .take(expected)
            .read_to_end(&mut buf)
            .await
            .map_err(|source| TransferError::ContentRead { expected, source })?;

        if buf.len() as u64 != expected {
            return Err(TransferError::ContentRead {
                expected,
                source: io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("source ended after {} bytes", buf.len()),
                ),
            }
            .into());
        }

        Ok(Bytes::from(buf))
    }
}

impl fmt::Debug for ObjectContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectContent")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl From<Bytes> for ObjectContent {
    fn from(bytes: Bytes) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for ObjectContent {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<String> for ObjectContent {
    fn from(text: String) -> Self {
        Self::from_bytes(text)
    }
}

impl From<&'static str> for ObjectContent {
    fn from(text: &'static str) -> Self {
        Self::from_bytes(text)
    }
}

impl From<&'static [u8]> for ObjectContent {
    fn from(bytes: &'static [u8]) -> Self {
        Self::from_bytes(bytes)
    }
}
