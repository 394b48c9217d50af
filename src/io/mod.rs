//! Stream decoding and encoding over `std::io` and `bytes` traits.

use std::io::{Read, Write};

use crate::encoding::{UvarintAccumulator, to_svarint, to_uvarint, zigzag_decode};
use crate::error::{Error, Result};
use crate::util::read_byte;

mod buf;

pub use buf::{BufMutVarint, BufVarint};

/// Reads an unsigned varint from `reader`, one byte per read call.
///
/// Any failed read, including end of input before the terminating byte, is
/// reported as [`Error::Read`]. At most ten bytes are consumed; a varint that
/// does not fit in 64 bits fails with [`Error::Overflow`].
pub fn read_uvarint<R: Read + ?Sized>(reader: &mut R) -> Result<u64> {
    let mut acc = UvarintAccumulator::default();
    loop {
        let byte = read_byte(reader)?;
        if let Some(value) = acc.push(byte)? {
            return Ok(value);
        }
    }
}

/// Reads a zig-zag encoded signed varint from `reader`.
pub fn read_svarint<R: Read + ?Sized>(reader: &mut R) -> Result<i64> {
    read_uvarint(reader).map(zigzag_decode)
}

/// Writes `value` as an unsigned varint, returning the number of bytes written.
pub fn write_uvarint<W: Write + ?Sized>(writer: &mut W, value: u64) -> Result<usize> {
    let encoded = to_uvarint(value);
    writer.write_all(&encoded).map_err(Error::write)?;
    Ok(encoded.len())
}

/// Writes `value` as a zig-zag encoded varint, returning the number of bytes written.
pub fn write_svarint<W: Write + ?Sized>(writer: &mut W, value: i64) -> Result<usize> {
    let encoded = to_svarint(value);
    writer.write_all(&encoded).map_err(Error::write)?;
    Ok(encoded.len())
}

/// Varint decoding for every [`Read`] implementation.
pub trait ReadVarint: Read {
    /// See [`read_uvarint`].
    fn read_uvarint(&mut self) -> Result<u64> {
        read_uvarint(self)
    }

    /// See [`read_svarint`].
    fn read_svarint(&mut self) -> Result<i64> {
        read_svarint(self)
    }
}

impl<R: Read + ?Sized> ReadVarint for R {}

/// Varint encoding for every [`Write`] implementation.
pub trait WriteVarint: Write {
    /// See [`write_uvarint`].
    fn write_uvarint(&mut self, value: u64) -> Result<usize> {
        write_uvarint(self, value)
    }

    /// See [`write_svarint`].
    fn write_svarint(&mut self, value: i64) -> Result<usize> {
        write_svarint(self, value)
    }
}

impl<W: Write + ?Sized> WriteVarint for W {}
