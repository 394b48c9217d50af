/// Minimum buffer size before counting is split across the rayon pool.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 1 << 20;
#[cfg(feature = "parallel")]
const PARALLEL_CHUNK: usize = 1 << 16;

/// Counts the varints packed back to back in `buf`.
///
/// Every varint ends with exactly one byte whose continuation bit is clear, so
/// counting those bytes counts the varints without decoding them. A truncated
/// varint at the end of `buf` has no terminator and is not counted.
pub fn count_varints(buf: &[u8]) -> usize {
    #[cfg(feature = "parallel")]
    {
        if buf.len() >= PARALLEL_THRESHOLD {
            use rayon::prelude::*;
            return buf.par_chunks(PARALLEL_CHUNK).map(count_chunk).sum();
        }
    }
    count_chunk(buf)
}

cfg_if::cfg_if! {
    if #[cfg(feature = "simd")] {
        fn count_chunk(buf: &[u8]) -> usize {
            crate::simd::count_terminators(buf).unwrap_or_else(|| count_scalar(buf))
        }
    } else {
        fn count_chunk(buf: &[u8]) -> usize {
            count_scalar(buf)
        }
    }
}

#[inline]
pub(crate) fn count_scalar(buf: &[u8]) -> usize {
    buf.iter().filter(|&&byte| byte & 0x80 == 0).count()
}
