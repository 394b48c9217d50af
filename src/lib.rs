#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Encoding helpers: varint and zig-zag codecs, size estimation, counting.
pub mod encoding;
/// Shared error and result types.
pub mod error;
/// Stream decoding over `std::io` and `bytes` traits.
pub mod io;
/// Stateful reader for varints and length-prefixed payloads.
pub mod reader;
/// Decoding outcomes and display helpers.
pub mod types;
/// Miscellaneous helpers consumed by readers and the command-line tool.
pub mod util;
/// Stateful writer for varints and length-prefixed payloads.
pub mod writer;

#[cfg(feature = "async")]
pub mod async_support;
#[cfg(feature = "simd")]
mod simd;

#[cfg(feature = "async")]
pub use async_support::{
    read_prefixed_async, read_svarint_async, read_uvarint_async, write_prefixed_async,
    write_svarint_async, write_uvarint_async,
};
pub use encoding::{
    EncodedVarint, VARINT_MAX_LEN, count_varints, decode_prefixed, decode_svarint,
    decode_svarint_advance, decode_uvarint, decode_uvarint_advance, encode_prefixed,
    encode_svarint, encode_uvarint, encode_uvarint_slice, encoded_len_i32, encoded_len_i64,
    encoded_len_prefixed, encoded_len_svarint, encoded_len_u32, encoded_len_u64, to_svarint,
    to_uvarint, zigzag_decode, zigzag_encode,
};
pub use error::{Error, Result};
pub use io::{
    BufMutVarint, BufVarint, ReadVarint, WriteVarint, read_svarint, read_uvarint, write_svarint,
    write_uvarint,
};
pub use reader::{ReaderBuilder, ReaderOptions, VarintReader};
pub use types::{BinaryChunks, Decoded};
pub use writer::{VarintWriter, WriterBuilder, WriterOptions};
