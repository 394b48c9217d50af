use std::io::IoSlice;

use bytes::{Buf, BufMut};

use crate::encoding::{VARINT_MAX_LEN, decode_uvarint, emit_uvarint, zigzag_decode, zigzag_encode};
use crate::error::{Error, Result};
use crate::types::Decoded;

/// Enough bytes to decide any varint: ten payload bytes plus the one that
/// proves overflow.
const WINDOW_LEN: usize = VARINT_MAX_LEN + 1;

/// Varint decoding for [`bytes::Buf`] cursors.
pub trait BufVarint: Buf {
    /// Decodes an unsigned varint and advances past it.
    ///
    /// The cursor moves only on success, whether or not the varint spans
    /// chunks, so [`Error::Incomplete`] can be retried once more data has
    /// been appended. Overflow is reported exactly as by
    /// [`decode_uvarint`](crate::decode_uvarint).
    ///
    /// Buffers whose `chunks_vectored` exposes only the first chunk are read
    /// through byte by byte when the varint crosses into a hidden chunk; for
    /// those the cursor ends past the bytes inspected.
    fn get_uvarint(&mut self) -> Result<u64> {
        let chunk = self.chunk();
        let outcome = if chunk.len() == self.remaining() || chunk.len() >= WINDOW_LEN {
            decode_uvarint(chunk)
        } else {
            let mut window = [0u8; WINDOW_LEN];
            let filled = peek_window(self, &mut window);
            match decode_uvarint(&window[..filled]) {
                Decoded::Incomplete if filled < self.remaining() => {
                    return get_uvarint_hidden(self);
                }
                outcome => outcome,
            }
        };
        finish(self, outcome)
    }

    /// Decodes a zig-zag encoded signed varint and advances past it.
    fn get_svarint(&mut self) -> Result<i64> {
        self.get_uvarint().map(zigzag_decode)
    }
}

impl<B: Buf + ?Sized> BufVarint for B {}

fn finish<B: Buf + ?Sized>(buf: &mut B, outcome: Decoded<u64>) -> Result<u64> {
    match outcome {
        Decoded::Complete { value, len } => {
            buf.advance(len);
            Ok(value)
        }
        Decoded::Incomplete => Err(Error::Incomplete),
        Decoded::Overflow { consumed } => Err(Error::overflow(consumed)),
    }
}

/// Copies up to `window.len()` leading bytes without moving the cursor.
fn peek_window<B: Buf + ?Sized>(buf: &B, window: &mut [u8]) -> usize {
    let mut slices = [IoSlice::new(&[]); WINDOW_LEN];
    let count = buf.chunks_vectored(&mut slices);
    let mut filled = 0;
    for slice in &slices[..count] {
        let take = slice.len().min(window.len() - filled);
        window[filled..filled + take].copy_from_slice(&slice[..take]);
        filled += take;
        if filled == window.len() {
            break;
        }
    }
    filled
}

fn get_uvarint_hidden<B: Buf + ?Sized>(buf: &mut B) -> Result<u64> {
    let mut window = [0u8; WINDOW_LEN];
    let mut filled = 0;
    while filled < WINDOW_LEN && buf.has_remaining() {
        let byte = buf.get_u8();
        window[filled] = byte;
        filled += 1;
        if byte & 0x80 == 0 {
            break;
        }
    }
    match decode_uvarint(&window[..filled]) {
        Decoded::Complete { value, .. } => Ok(value),
        Decoded::Incomplete => Err(Error::Incomplete),
        Decoded::Overflow { consumed } => Err(Error::overflow(consumed)),
    }
}

/// Varint encoding for [`bytes::BufMut`] sinks.
pub trait BufMutVarint: BufMut {
    /// Appends `value` as an unsigned varint, returning the bytes written.
    fn put_uvarint(&mut self, value: u64) -> usize {
        emit_uvarint(value, |byte| self.put_u8(byte))
    }

    /// Appends `value` as a zig-zag encoded varint, returning the bytes written.
    fn put_svarint(&mut self, value: i64) -> usize {
        self.put_uvarint(zigzag_encode(value))
    }

    /// Appends `payload` preceded by its varint length.
    fn put_prefixed(&mut self, payload: &[u8]) -> usize {
        let header = self.put_uvarint(payload.len() as u64);
        self.put_slice(payload);
        header + payload.len()
    }
}

impl<B: BufMut + ?Sized> BufMutVarint for B {}
