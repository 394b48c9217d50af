//! Encoding helpers (varints, zig-zag encoding, size estimation, counting).

mod count;
mod prefixed;
mod size;
mod varint;
mod varint_signed;

#[cfg(feature = "simd")]
pub(crate) use count::count_scalar;
pub(crate) use varint::{UvarintAccumulator, emit_uvarint};

pub use count::count_varints;
pub use prefixed::{decode_prefixed, encode_prefixed};
pub use size::{
    encoded_len_i32, encoded_len_i64, encoded_len_prefixed, encoded_len_svarint, encoded_len_u32,
    encoded_len_u64,
};
pub use varint::{
    EncodedVarint, VARINT_MAX_LEN, decode_uvarint, decode_uvarint_advance, encode_uvarint,
    encode_uvarint_slice, to_uvarint,
};
pub use varint_signed::{
    decode_svarint, decode_svarint_advance, encode_svarint, to_svarint, zigzag_decode,
    zigzag_encode,
};
