//! Chunk/bit arithmetic shared by construction and indexing.
//!
//! Everything here is `const`, so it can size arrays in type position:
//! `FixedBitSet<{ chunks_for::<u64>(100) }>`.

use crate::chunk::Chunk;

/// Minimum number of `C` chunks whose combined width is at least `bits`.
pub const fn chunks_for<C: Chunk>(bits: usize) -> usize {
    bits.div_ceil(C::BITS)
}

/// Exact number of bits held by `chunks` chunks of type `C`.
///
/// `bits_for::<C>(chunks_for::<C>(n)) >= n`, with equality only when `n` is a
/// multiple of `C::BITS`.
pub const fn bits_for<C: Chunk>(chunks: usize) -> usize {
    chunks * C::BITS
}

/// Splits a bit index into `(chunk_index, bit_offset)`.
pub const fn split_index<C: Chunk>(index: usize) -> (usize, usize) {
    (index / C::BITS, index % C::BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_up_to_whole_chunks() {
        assert_eq!(chunks_for::<u64>(0), 0);
        assert_eq!(chunks_for::<u64>(1), 1);
        assert_eq!(chunks_for::<u64>(10), 1);
        assert_eq!(chunks_for::<u64>(64), 1);
        assert_eq!(chunks_for::<u64>(65), 2);
        assert_eq!(chunks_for::<u8>(17), 3);
        assert_eq!(chunks_for::<u128>(129), 2);
    }

    #[test]
    fn bits_for_is_exact() {
        assert_eq!(bits_for::<u64>(0), 0);
        assert_eq!(bits_for::<u64>(1), 64);
        assert_eq!(bits_for::<u64>(2), 128);
        assert_eq!(bits_for::<u16>(3), 48);
    }

    #[test]
    fn round_trip_only_exact_on_multiples() {
        assert_eq!(bits_for::<u64>(chunks_for::<u64>(128)), 128);
        assert_eq!(bits_for::<u64>(chunks_for::<u64>(65)), 128);
        assert_eq!(bits_for::<u32>(chunks_for::<u32>(33)), 64);
    }

    #[test]
    fn split() {
        assert_eq!(split_index::<u64>(0), (0, 0));
        assert_eq!(split_index::<u64>(63), (0, 63));
        assert_eq!(split_index::<u64>(70), (1, 6));
        assert_eq!(split_index::<u8>(17), (2, 1));
    }

    #[test]
    fn usable_in_const_context() {
        const CHUNKS: usize = chunks_for::<u32>(100);
        let storage = [0u32; CHUNKS];
        assert_eq!(storage.len(), 4);
    }
}
