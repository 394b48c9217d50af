//! Stateful varint writer over a blocking byte sink.

use std::io::Write;

use crate::encoding::{encoded_len_u64, to_svarint, to_uvarint};
use crate::error::{Error, Result};
use crate::reader::DEFAULT_MAX_PREFIXED_LEN;

/// Options controlling [`VarintWriter`] behaviour.
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// Largest payload accepted by [`VarintWriter::write_prefixed`]. Keep in
    /// step with the peer's [`ReaderOptions`](crate::ReaderOptions).
    pub max_prefixed_len: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            max_prefixed_len: DEFAULT_MAX_PREFIXED_LEN,
        }
    }
}

/// Builder used to configure and construct a [`VarintWriter`].
pub struct WriterBuilder<W: Write> {
    sink: W,
    options: WriterOptions,
}

impl<W: Write> WriterBuilder<W> {
    /// Creates a builder for the given sink.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            options: WriterOptions::default(),
        }
    }

    /// Overrides writer options wholesale.
    pub fn options(mut self, options: WriterOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the largest accepted length-prefixed payload.
    pub fn max_prefixed_len(mut self, max: usize) -> Self {
        self.options.max_prefixed_len = max;
        self
    }

    /// Consumes the builder, constructing the writer.
    pub fn build(self) -> VarintWriter<W> {
        VarintWriter {
            sink: self.sink,
            options: self.options,
            written: 0,
        }
    }
}

/// Writes varints and length-prefixed payloads to a [`Write`] sink.
pub struct VarintWriter<W: Write> {
    sink: W,
    options: WriterOptions,
    written: u64,
}

impl<W: Write> VarintWriter<W> {
    /// Creates a writer with default options.
    pub fn new(sink: W) -> Self {
        WriterBuilder::new(sink).build()
    }

    /// Creates a builder for the supplied sink.
    pub fn builder(sink: W) -> WriterBuilder<W> {
        WriterBuilder::new(sink)
    }

    /// Total bytes handed to the sink by this writer.
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Writes an unsigned varint.
    pub fn write_uvarint(&mut self, value: u64) -> Result<usize> {
        let encoded = to_uvarint(value);
        self.put(&encoded)
    }

    /// Writes a zig-zag encoded signed varint.
    pub fn write_svarint(&mut self, value: i64) -> Result<usize> {
        let encoded = to_svarint(value);
        self.put(&encoded)
    }

    /// Writes `payload` preceded by its varint length.
    pub fn write_prefixed(&mut self, payload: &[u8]) -> Result<usize> {
        let max = self.options.max_prefixed_len;
        if payload.len() > max {
            tracing::debug!(len = payload.len(), max, "refusing oversized payload");
            return Err(Error::LengthLimit {
                len: payload.len() as u64,
                max,
            });
        }
        let header = self.write_uvarint(payload.len() as u64)?;
        debug_assert_eq!(header, encoded_len_u64(payload.len() as u64));
        Ok(header + self.put(payload)?)
    }

    /// Writes a UTF-8 string preceded by its byte length.
    pub fn write_str(&mut self, value: &str) -> Result<usize> {
        self.write_prefixed(value.as_bytes())
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush().map_err(Error::write)
    }

    /// Flushes and returns the underlying sink.
    pub fn finish(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.sink)
    }

    /// Returns a shared reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    fn put(&mut self, bytes: &[u8]) -> Result<usize> {
        self.sink.write_all(bytes).map_err(Error::write)?;
        self.written += bytes.len() as u64;
        Ok(bytes.len())
    }
}
