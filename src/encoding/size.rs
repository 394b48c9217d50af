//! Closed-form encoded-length calculations.
//!
//! Each function derives the byte count from the bit width of the value, so
//! buffers can be sized before encoding without running the encoder.

use crate::encoding::varint_signed::zigzag_encode;

/// Number of bytes [`encode_uvarint`](crate::encode_uvarint) writes for a 32-bit value (1..=5).
#[inline]
pub const fn encoded_len_u32(value: u32) -> usize {
    let bits = 32 - (value | 1).leading_zeros() as usize;
    (bits + 6) / 7
}

/// Number of bytes [`encode_uvarint`](crate::encode_uvarint) writes for `value` (1..=10).
#[inline]
pub const fn encoded_len_u64(value: u64) -> usize {
    let bits = 64 - (value | 1).leading_zeros() as usize;
    (bits + 6) / 7
}

/// Size of `value` when its two's-complement bit pattern is encoded as an
/// unsigned varint. Every negative value takes the full ten bytes.
///
/// This is not the size of the zig-zag encoding; use
/// [`encoded_len_svarint`] for values written with
/// [`encode_svarint`](crate::encode_svarint).
#[inline]
pub const fn encoded_len_i64(value: i64) -> usize {
    encoded_len_u64(value as u64)
}

/// Size of a signed 32-bit value encoded as its sign-extended 64-bit pattern.
///
/// Non-negative values match [`encoded_len_u32`]; negative values take ten
/// bytes, as in the protobuf `int32` wire type.
#[inline]
pub const fn encoded_len_i32(value: i32) -> usize {
    encoded_len_i64(value as i64)
}

/// Number of bytes [`encode_svarint`](crate::encode_svarint) writes for `value`.
#[inline]
pub const fn encoded_len_svarint(value: i64) -> usize {
    encoded_len_u64(zigzag_encode(value))
}

/// Total size of a payload of `payload_len` bytes preceded by its varint length.
#[inline]
pub const fn encoded_len_prefixed(payload_len: usize) -> usize {
    encoded_len_u64(payload_len as u64) + payload_len
}
