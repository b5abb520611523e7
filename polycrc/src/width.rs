//! Integer width abstractions.
//!
//! The engine is written once against two traits:
//!
//! - [`Word`]: anything that can be fed as input. It only needs a bit width and
//!   a way to read its value, so callers can implement it for packed types
//!   narrower than a byte.
//! - [`Register`]: the type holding the generator, the running remainder and
//!   table entries. Implemented for the unsigned primitives.
//!
//! Shifts on a [`Register`] saturate: shifting by the full width or more yields
//! zero instead of panicking. This lets a degree-64 polynomial live in a `u64`.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, BitXorAssign};

/// An input word of a fixed bit width.
pub trait Word: Copy {
    /// Width of the word in bits.
    const BITS: u32;

    /// The word's value. Only the low [`Word::BITS`] bits may be set.
    fn to_u128(self) -> u128;
}

/// An unsigned integer used as generator, remainder and table entry.
pub trait Register:
    Word
    + Eq
    + fmt::Debug
    + fmt::LowerHex
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + BitXorAssign
{
    /// All bits clear.
    const ZERO: Self;
    /// Only bit 0 set.
    const ONE: Self;
    /// All bits set.
    const MAX: Self;

    /// Left shift that yields zero once `n >= Self::BITS`.
    fn shift_left(self, n: u32) -> Self;

    /// Right shift that yields zero once `n >= Self::BITS`.
    fn shift_right(self, n: u32) -> Self;

    /// Truncating conversion from a `u128`.
    fn from_u128(value: u128) -> Self;

    /// Mask with the low `bits` bits set.
    #[inline]
    fn low_mask(bits: u32) -> Self {
        Self::MAX.shift_right(Self::BITS.saturating_sub(bits))
    }

    /// Value as a table index.
    #[inline(always)]
    fn to_index(self) -> usize {
        self.to_u128() as usize
    }

    /// Whether the bits selected by `mask` are all clear.
    #[inline(always)]
    fn is_clear(self, mask: Self) -> bool {
        self & mask == Self::ZERO
    }
}

/// Move a word into a register type, keeping its low bits.
#[inline(always)]
pub fn widen<W: Word, R: Register>(word: W) -> R {
    R::from_u128(word.to_u128())
}

macro_rules! impl_width {
    ($($t:ty),* $(,)?) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline(always)]
                fn to_u128(self) -> u128 {
                    self as u128
                }
            }

            impl Register for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;

                #[inline(always)]
                fn shift_left(self, n: u32) -> Self {
                    self.checked_shl(n).unwrap_or(0)
                }

                #[inline(always)]
                fn shift_right(self, n: u32) -> Self {
                    self.checked_shr(n).unwrap_or(0)
                }

                #[inline(always)]
                fn from_u128(value: u128) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_width!(u8, u16, u32, u64, u128);
