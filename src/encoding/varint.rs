use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::types::Decoded;

/// Maximum number of bytes that a u64 varint can occupy.
pub const VARINT_MAX_LEN: usize = 10;

/// Inline storage large enough for any encoded u64.
pub type EncodedVarint = SmallVec<[u8; VARINT_MAX_LEN]>;

const CONTINUATION: u8 = 0x80;
const PAYLOAD_MASK: u8 = 0x7f;

/// Feeds the encoding of `value` to `emit`, least-significant group first.
#[inline]
pub(crate) fn emit_uvarint<F: FnMut(u8)>(mut value: u64, mut emit: F) -> usize {
    let mut written = 0;
    loop {
        let mut byte = (value as u8) & PAYLOAD_MASK;
        value >>= 7;
        written += 1;
        if value != 0 {
            byte |= CONTINUATION;
            emit(byte);
        } else {
            emit(byte);
            return written;
        }
    }
}

/// Encodes the given value as an unsigned LEB128 varint and appends it to `out`.
pub fn encode_uvarint(value: u64, out: &mut Vec<u8>) -> usize {
    emit_uvarint(value, |byte| out.push(byte))
}

/// Encodes `value` into inline storage without touching the heap.
pub fn to_uvarint(value: u64) -> EncodedVarint {
    let mut out = EncodedVarint::new();
    emit_uvarint(value, |byte| out.push(byte));
    out
}

/// Encodes `value` at the start of `out`, returning the number of bytes
/// written, or `None` if `out` is too short to hold the encoding.
pub fn encode_uvarint_slice(value: u64, out: &mut [u8]) -> Option<usize> {
    let encoded = to_uvarint(value);
    let dest = out.get_mut(..encoded.len())?;
    dest.copy_from_slice(&encoded);
    Some(encoded.len())
}

/// Decodes a u64 varint from the start of `input`.
///
/// Returns [`Decoded::Incomplete`] when `input` ends before the terminating
/// byte and [`Decoded::Overflow`] when the value cannot fit in 64 bits: either
/// the tenth byte carries more than bit 63, or an eleventh byte is reached.
pub fn decode_uvarint(input: &[u8]) -> Decoded<u64> {
    let mut value = 0u64;
    for (i, &byte) in input.iter().enumerate() {
        if i == VARINT_MAX_LEN {
            return Decoded::Overflow { consumed: i + 1 };
        }
        if byte & CONTINUATION == 0 {
            if i == VARINT_MAX_LEN - 1 && byte > 1 {
                return Decoded::Overflow { consumed: i + 1 };
            }
            return Decoded::Complete {
                value: value | (u64::from(byte) << (i * 7)),
                len: i + 1,
            };
        }
        value |= u64::from(byte & PAYLOAD_MASK) << (i * 7);
    }
    Decoded::Incomplete
}

/// Decodes a u64 varint from the provided byte slice, advancing the slice on success.
///
/// The slice is left untouched on failure.
pub fn decode_uvarint_advance(input: &mut &[u8]) -> Result<u64> {
    match decode_uvarint(input) {
        Decoded::Complete { value, len } => {
            *input = &input[len..];
            Ok(value)
        }
        Decoded::Incomplete => Err(Error::Incomplete),
        Decoded::Overflow { consumed } => Err(Error::overflow(consumed)),
    }
}

/// Incremental decoder state for sources that hand out one byte at a time.
///
/// Unlike [`decode_uvarint`], which can look ahead, this gives up after ten
/// continuation bytes so a stream is never read past the longest valid varint.
#[derive(Debug, Default)]
pub(crate) struct UvarintAccumulator {
    value: u64,
    index: usize,
}

impl UvarintAccumulator {
    /// Feeds the next byte, returning the value once the terminator arrives.
    #[inline]
    pub(crate) fn push(&mut self, byte: u8) -> Result<Option<u64>> {
        let shift = self.index * 7;
        if byte & CONTINUATION == 0 {
            if self.index == VARINT_MAX_LEN - 1 && byte > 1 {
                return Err(Error::overflow(self.index + 1));
            }
            return Ok(Some(self.value | (u64::from(byte) << shift)));
        }
        self.value |= u64::from(byte & PAYLOAD_MASK) << shift;
        self.index += 1;
        if self.index == VARINT_MAX_LEN {
            return Err(Error::overflow(self.index));
        }
        Ok(None)
    }
}
