use std::io::Read;

use crate::error::{Error, Result};

/// Reads exactly one byte, retrying on interruption.
#[inline]
pub(crate) fn read_byte<R: Read + ?Sized>(reader: &mut R) -> Result<u8> {
    let mut buf = [0u8; 1];
    reader.read_exact(&mut buf).map_err(Error::read)?;
    Ok(buf[0])
}

/// Parses a hex string, ignoring ASCII whitespace and an optional `0x` prefix.
pub fn parse_hex(text: &str) -> std::result::Result<Vec<u8>, hex::FromHexError> {
    let compact: String = text.split_ascii_whitespace().collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);
    hex::decode(digits)
}
