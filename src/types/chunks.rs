use std::fmt;

/// Renders bytes as space-separated, zero-padded binary octets.
///
/// ```
/// use varint_codec::{BinaryChunks, to_uvarint};
///
/// assert_eq!(BinaryChunks(&to_uvarint(300)).to_string(), "10101100 00000010");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BinaryChunks<'a>(pub &'a [u8]);

impl fmt::Display for BinaryChunks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, byte) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:08b}")?;
        }
        Ok(())
    }
}
