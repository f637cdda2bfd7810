#![cfg_attr(not(test), no_std)]

mod bitset;
pub mod chunk;
mod error;
pub mod sizing;

pub use crate::{
    bitset::FixedBitSet,
    chunk::Chunk,
    error::{Error, Result},
    sizing::{bits_for, chunks_for},
};

/// Names the type of a [`FixedBitSet`] holding at least `bits` bits.
///
/// `bitset_type!(bits)` uses `u64` chunks, `bitset_type!(chunk; bits)` picks
/// the chunk type.
#[macro_export]
macro_rules! bitset_type {
    ($bits:expr) => {
        $crate::FixedBitSet<{ $crate::chunks_for::<u64>($bits) }, u64>
    };
    ($chunk:ty; $bits:expr) => {
        $crate::FixedBitSet<{ $crate::chunks_for::<$chunk>($bits) }, $chunk>
    };
}
