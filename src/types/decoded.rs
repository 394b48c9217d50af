use crate::error::Error;

/// Outcome of decoding a varint from an in-memory buffer.
///
/// Buffer decoding distinguishes three cases that callers handle differently:
/// a complete value, a buffer that ends before the varint does (retry with
/// more bytes), and malformed input that can never decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded<T> {
    /// A value was decoded from the first `len` bytes of the input.
    Complete {
        /// Decoded value.
        value: T,
        /// Bytes consumed, between 1 and [`VARINT_MAX_LEN`](crate::VARINT_MAX_LEN)
        /// for plain varints.
        len: usize,
    },
    /// The input ended before the terminating byte.
    Incomplete,
    /// The varint exceeds the 64-bit range.
    Overflow {
        /// Bytes scanned before the overflow was detected.
        consumed: usize,
    },
}

impl<T> Decoded<T> {
    /// Returns the decoded value, if complete.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Complete { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns `true` if a value was decoded.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    /// Signed byte count in the classic Go/protobuf convention: positive on
    /// success, `0` when more input is needed, and the negated number of
    /// scanned bytes on overflow.
    pub fn bytes_read(&self) -> isize {
        match *self {
            Self::Complete { len, .. } => len as isize,
            Self::Incomplete => 0,
            Self::Overflow { consumed } => -(consumed as isize),
        }
    }

    /// Maps the decoded value, leaving the byte counts untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Decoded<U> {
        match self {
            Self::Complete { value, len } => Decoded::Complete {
                value: f(value),
                len,
            },
            Self::Incomplete => Decoded::Incomplete,
            Self::Overflow { consumed } => Decoded::Overflow { consumed },
        }
    }

    /// Converts into a `Result` carrying the value and consumed length.
    pub fn into_result(self) -> Result<(T, usize), Error> {
        match self {
            Self::Complete { value, len } => Ok((value, len)),
            Self::Incomplete => Err(Error::Incomplete),
            Self::Overflow { consumed } => Err(Error::overflow(consumed)),
        }
    }
}
