use crate::encoding::varint::{decode_uvarint, encode_uvarint};
use crate::types::Decoded;

/// Appends `payload` to `out`, preceded by its length as a uvarint.
///
/// Returns the total number of bytes appended.
pub fn encode_prefixed(payload: &[u8], out: &mut Vec<u8>) -> usize {
    out.reserve(super::encoded_len_prefixed(payload.len()));
    let header = encode_uvarint(payload.len() as u64, out);
    out.extend_from_slice(payload);
    header + payload.len()
}

/// Splits a length-prefixed payload off the start of `input`.
///
/// On success the payload borrows from `input` and `len` covers both the
/// prefix and the payload. A prefix announcing more bytes than `input` holds
/// yields [`Decoded::Incomplete`].
pub fn decode_prefixed(input: &[u8]) -> Decoded<&[u8]> {
    let (payload_len, header) = match decode_uvarint(input) {
        Decoded::Complete { value, len } => (value, len),
        Decoded::Incomplete => return Decoded::Incomplete,
        Decoded::Overflow { consumed } => return Decoded::Overflow { consumed },
    };
    let available = &input[header..];
    if (available.len() as u64) < payload_len {
        return Decoded::Incomplete;
    }
    let payload_len = payload_len as usize;
    Decoded::Complete {
        value: &available[..payload_len],
        len: header + payload_len,
    }
}
