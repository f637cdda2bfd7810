use crate::{
    chunk::Chunk,
    error::{OutOfRangeSnafu, Result},
    sizing::{bits_for, split_index},
};

/// A set of bit flags packed into `CHUNKS` chunks of type `C`.
///
/// Capacity is `CHUNKS * C::BITS`, which is the requested bit count rounded up
/// to whole chunks. The slack bits past the requested count are ordinary bits.
/// Use [`chunks_for`](crate::chunks_for) or [`bitset_type!`](crate::bitset_type)
/// to size the set from a bit count:
///
/// ```
/// use fixed_bitset::{bitset_type, chunks_for, FixedBitSet};
///
/// let mut visited: FixedBitSet<{ chunks_for::<u64>(100) }> = FixedBitSet::new();
/// visited.set(42)?;
/// assert!(visited.test(42)?);
/// assert_eq!(visited.capacity(), 128);
///
/// let flags = <bitset_type!(u8; 12)>::new();
/// assert_eq!(flags.capacity(), 16);
/// # Ok::<(), fixed_bitset::Error>(())
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct FixedBitSet<const CHUNKS: usize, C: Chunk = u64> {
    chunks: [C; CHUNKS],
}

impl<const CHUNKS: usize, C: Chunk> Default for FixedBitSet<CHUNKS, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CHUNKS: usize, C: Chunk> FixedBitSet<CHUNKS, C> {
    pub const CAPACITY: usize = bits_for::<C>(CHUNKS);

    /// A set with every bit off.
    pub const fn new() -> Self {
        Self {
            chunks: [C::ZERO; CHUNKS],
        }
    }

    /// Adopts existing storage; capacity follows from the array length.
    pub const fn from_chunks(chunks: [C; CHUNKS]) -> Self {
        Self { chunks }
    }

    pub const fn chunks(&self) -> usize {
        CHUNKS
    }

    pub const fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    pub const fn as_chunks(&self) -> &[C; CHUNKS] {
        &self.chunks
    }

    pub fn into_chunks(self) -> [C; CHUNKS] {
        self.chunks
    }

    fn locate(&self, index: usize) -> Result<(usize, C)> {
        if index >= Self::CAPACITY {
            log::trace!(
                "rejecting bit index {} on a set of {} bits",
                index,
                Self::CAPACITY
            );
            return OutOfRangeSnafu {
                index,
                capacity: Self::CAPACITY,
            }
            .fail();
        }
        let (chunk, offset) = split_index::<C>(index);
        Ok((chunk, C::mask(offset)))
    }

    /// Turns bit `index` on.
    pub fn set(&mut self, index: usize) -> Result<()> {
        let (chunk, mask) = self.locate(index)?;
        self.chunks[chunk] |= mask;
        Ok(())
    }

    /// Turns bit `index` off.
    pub fn clear(&mut self, index: usize) -> Result<()> {
        let (chunk, mask) = self.locate(index)?;
        self.chunks[chunk] &= !mask;
        Ok(())
    }

    /// Flips bit `index`.
    pub fn toggle(&mut self, index: usize) -> Result<()> {
        let (chunk, mask) = self.locate(index)?;
        self.chunks[chunk] ^= mask;
        Ok(())
    }

    pub fn test(&self, index: usize) -> Result<bool> {
        let (chunk, mask) = self.locate(index)?;
        Ok(self.chunks[chunk] & mask != C::ZERO)
    }

    /// ***Panics*** if `index` is out of range.
    pub fn insert(&mut self, index: usize) {
        self.set(index).unwrap_or_else(|e| panic!("{}", e))
    }

    /// ***Panics*** if `index` is out of range.
    pub fn remove(&mut self, index: usize) {
        self.clear(index).unwrap_or_else(|e| panic!("{}", e))
    }

    /// ***Panics*** if `index` is out of range.
    pub fn flip(&mut self, index: usize) {
        self.toggle(index).unwrap_or_else(|e| panic!("{}", e))
    }

    /// ***Panics*** if `index` is out of range.
    pub fn contains(&self, index: usize) -> bool {
        self.test(index).unwrap_or_else(|e| panic!("{}", e))
    }
}
