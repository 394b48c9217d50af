mod chunks;
mod decoded;

pub use chunks::BinaryChunks;
pub use decoded::Decoded;
