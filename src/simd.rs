//! SIMD-accelerated helpers used by the crate when the `simd` feature is enabled.

/// Counts bytes with the continuation bit clear using architecture specific
/// SIMD instructions. Returns `None` if the architecture is unsupported or the
/// required hardware feature is unavailable at runtime.
pub(crate) fn count_terminators(data: &[u8]) -> Option<usize> {
    #[cfg(target_arch = "x86_64")]
    {
        if std::arch::is_x86_feature_detected!("sse2") {
            unsafe {
                return Some(count_terminators_x86_sse2(data));
            }
        }
    }
    let _ = data;
    None
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse2")]
unsafe fn count_terminators_x86_sse2(data: &[u8]) -> usize {
    use std::arch::x86_64::*;

    let mut blocks = data.chunks_exact(16);
    let mut count = 0usize;

    for block in &mut blocks {
        let ptr = block.as_ptr() as *const __m128i;
        let bytes = unsafe { _mm_loadu_si128(ptr) };
        // movemask gathers bit 7 of each lane, i.e. the continuation flags.
        let continuation = _mm_movemask_epi8(bytes) as u32;
        count += 16 - continuation.count_ones() as usize;
    }

    count + crate::encoding::count_scalar(blocks.remainder())
}
