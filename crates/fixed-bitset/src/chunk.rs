use core::{
    fmt::Debug,
    hash::Hash,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl},
};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width unsigned integer used as the storage unit of a
/// [`FixedBitSet`](crate::FixedBitSet).
///
/// Sealed; implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`.
pub trait Chunk
where
    Self: sealed::Sealed
        + Sized
        + Copy
        + Eq
        + Hash
        + Debug
        + Not<Output = Self>
        + BitAnd<Output = Self>
        + BitOr<Output = Self>
        + BitXor<Output = Self>
        + BitAndAssign
        + BitOrAssign
        + BitXorAssign
        + Shl<usize, Output = Self>,
{
    /// Number of bits held by one chunk.
    const BITS: usize;
    const ZERO: Self;
    const ONE: Self;

    /// The single-bit mask for `offset`, which must be below [`Self::BITS`].
    fn mask(offset: usize) -> Self {
        debug_assert!(offset < Self::BITS);
        Self::ONE << offset
    }
}

macro_rules! impl_chunk {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Chunk for $ty {
                const BITS: usize = <$ty>::BITS as usize;
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )*
    };
}

impl_chunk!(u8, u16, u32, u64, u128, usize);
