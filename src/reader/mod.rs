//! Stateful varint reader over a blocking byte source.

use std::io::Read;

use crate::encoding::{UvarintAccumulator, zigzag_decode};
use crate::error::{Error, Result};
use crate::util::read_byte;

/// Default upper bound for length-prefixed payloads (16 MiB).
pub const DEFAULT_MAX_PREFIXED_LEN: usize = 16 * 1024 * 1024;

/// Controls how a [`VarintReader`] accepts length-prefixed payloads.
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Largest payload accepted by [`VarintReader::read_prefixed`]. Longer
    /// prefixes are rejected before any allocation.
    pub max_prefixed_len: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_prefixed_len: DEFAULT_MAX_PREFIXED_LEN,
        }
    }
}

/// Builder used to configure and construct a [`VarintReader`].
pub struct ReaderBuilder<R: Read> {
    source: R,
    options: ReaderOptions,
}

impl<R: Read> ReaderBuilder<R> {
    /// Creates a new builder for the given source.
    pub fn new(source: R) -> Self {
        Self {
            source,
            options: ReaderOptions::default(),
        }
    }

    /// Overrides reader options wholesale.
    pub fn options(mut self, options: ReaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the largest accepted length-prefixed payload.
    pub fn max_prefixed_len(mut self, max: usize) -> Self {
        self.options.max_prefixed_len = max;
        self
    }

    /// Consumes the builder, constructing the reader.
    pub fn build(self) -> VarintReader<R> {
        VarintReader {
            source: self.source,
            options: self.options,
            position: 0,
        }
    }
}

/// Reads varints and length-prefixed payloads from a [`Read`] source while
/// tracking how many bytes have been consumed.
///
/// Bytes are pulled one at a time while decoding a varint, so wrap slow
/// sources in a [`std::io::BufReader`].
pub struct VarintReader<R: Read> {
    source: R,
    options: ReaderOptions,
    position: u64,
}

impl<R: Read> VarintReader<R> {
    /// Creates a reader with default options.
    pub fn new(source: R) -> Self {
        ReaderBuilder::new(source).build()
    }

    /// Creates a new builder for the given source.
    pub fn builder(source: R) -> ReaderBuilder<R> {
        ReaderBuilder::new(source)
    }

    /// Returns the reader options used to configure this reader.
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Total bytes consumed from the source by this reader.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Reads an unsigned varint.
    ///
    /// On failure the bytes already pulled from the source are still counted
    /// in [`position`](Self::position).
    pub fn read_uvarint(&mut self) -> Result<u64> {
        let mut acc = UvarintAccumulator::default();
        loop {
            let byte = read_byte(&mut self.source)?;
            self.position += 1;
            if let Some(value) = acc.push(byte)? {
                return Ok(value);
            }
        }
    }

    /// Reads a zig-zag encoded signed varint.
    pub fn read_svarint(&mut self) -> Result<i64> {
        self.read_uvarint().map(zigzag_decode)
    }

    /// Reads a length-prefixed payload into a fresh buffer.
    pub fn read_prefixed(&mut self) -> Result<Vec<u8>> {
        let mut payload = Vec::new();
        self.read_prefixed_into(&mut payload)?;
        Ok(payload)
    }

    /// Reads a length-prefixed payload, appending it to `out`. Returns the
    /// payload length.
    pub fn read_prefixed_into(&mut self, out: &mut Vec<u8>) -> Result<usize> {
        let announced = self.read_uvarint()?;
        let max = self.options.max_prefixed_len;
        let len = match usize::try_from(announced) {
            Ok(len) if len <= max => len,
            _ => {
                tracing::debug!(len = announced, max, "length prefix over limit");
                return Err(Error::LengthLimit {
                    len: announced,
                    max,
                });
            }
        };

        let start = out.len();
        out.resize(start + len, 0);
        if let Err(err) = self.source.read_exact(&mut out[start..]) {
            out.truncate(start);
            return Err(Error::read(err));
        }
        self.position += len as u64;
        Ok(len)
    }

    /// Returns a shared reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Returns a mutable reference to the underlying source.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Consumes the reader, yielding the underlying source.
    pub fn into_inner(self) -> R {
        self.source
    }
}
