use crate::encoding::varint::{
    EncodedVarint, decode_uvarint, decode_uvarint_advance, encode_uvarint, to_uvarint,
};
use crate::error::Result;
use crate::types::Decoded;

/// Maps a signed integer onto the unsigned range so small magnitudes stay small.
///
/// `0 -> 0`, `-1 -> 1`, `1 -> 2`, `-2 -> 3`, ... The arithmetic shift keeps
/// `i64::MIN` in range.
#[inline]
pub const fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag_encode`].
#[inline]
pub const fn zigzag_decode(raw: u64) -> i64 {
    let magnitude = (raw >> 1) as i64;
    if raw & 1 != 0 { !magnitude } else { magnitude }
}

/// Encodes a signed integer using ZigZag + varint encoding.
pub fn encode_svarint(value: i64, out: &mut Vec<u8>) -> usize {
    encode_uvarint(zigzag_encode(value), out)
}

/// Encodes a signed integer into inline storage.
pub fn to_svarint(value: i64) -> EncodedVarint {
    to_uvarint(zigzag_encode(value))
}

/// Decodes a signed ZigZag/varint integer from the start of `input`.
pub fn decode_svarint(input: &[u8]) -> Decoded<i64> {
    decode_uvarint(input).map(zigzag_decode)
}

/// Decodes a signed varint, advancing the slice on success.
pub fn decode_svarint_advance(input: &mut &[u8]) -> Result<i64> {
    decode_uvarint_advance(input).map(zigzag_decode)
}
