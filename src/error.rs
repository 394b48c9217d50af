use std::io;

/// Convenient alias for results produced by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can be produced while reading or writing varints.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The byte source failed or ended before a varint was complete.
    #[error("failed to read varint byte: {0}")]
    Read(#[source] io::Error),

    /// The byte sink rejected encoded output.
    #[error("failed to write varint: {0}")]
    Write(#[source] io::Error),

    /// The varint needs more than ten bytes or carries bits beyond bit 63.
    #[error("varint overflows 64 bits after {consumed} bytes")]
    Overflow {
        /// Number of bytes scanned before the overflow was detected.
        consumed: usize,
    },

    /// The input slice ended in the middle of a varint.
    #[error("unexpected end of input while decoding varint")]
    Incomplete,

    /// A length prefix announced more bytes than the reader accepts.
    #[error("length prefix {len} exceeds limit of {max} bytes")]
    LengthLimit {
        /// Length announced by the prefix.
        len: u64,
        /// Configured maximum.
        max: usize,
    },
}

impl Error {
    pub(crate) fn read(err: io::Error) -> Self {
        Self::Read(err)
    }

    pub(crate) fn write(err: io::Error) -> Self {
        Self::Write(err)
    }

    pub(crate) fn overflow(consumed: usize) -> Self {
        tracing::debug!(consumed, "rejecting overlong varint");
        Self::Overflow { consumed }
    }

    /// Returns `true` for failures caused by malformed varint content rather
    /// than by the byte source or sink.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Overflow { .. } | Self::LengthLimit { .. })
    }
}
