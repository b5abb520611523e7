//! Generator polynomial normalization.
//!
//! A polynomial of degree `n` has `n + 1` coefficients, but the leading one is
//! always 1 and is never stored: the generator value carries only the low `n`
//! coefficients. That is what lets CRC-8 polynomials fit in a `u8` and CRC-64
//! polynomials in a `u64`.
//!
//! [`normalize`] checks a `(degree, generator, chunk_size)` triple and derives
//! the constants every divider works with.

use crate::error::{CrcError, Result};
use crate::width::Register;

/// Working parameters derived from a polynomial and a chunk size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized<R> {
    /// Degree of the polynomial.
    pub degree: u32,
    /// Generator masked to `degree` bits.
    pub generator: R,
    /// Left shift that aligns a chunk's top bit with bit `degree - 1`.
    pub shift: u32,
    /// Bit `degree - 1`, the bit that decides each division step.
    pub carry_bit: R,
    /// Mask with the low `degree` bits set.
    pub remainder_mask: R,
}

impl<R: Register> Normalized<R> {
    /// One bit of polynomial division.
    #[inline(always)]
    pub fn step(&self, remainder: R) -> R {
        if remainder.is_clear(self.carry_bit) {
            remainder.shift_left(1)
        } else {
            remainder.shift_left(1) ^ self.generator
        }
    }

    /// `count` bits of polynomial division.
    #[inline]
    pub fn steps(&self, mut remainder: R, count: u32) -> R {
        for _ in 0..count {
            remainder = self.step(remainder);
        }
        remainder
    }

    /// Clear every bit at or above `degree`.
    #[inline(always)]
    pub fn mask(&self, remainder: R) -> R {
        remainder & self.remainder_mask
    }
}

/// Validate a polynomial against a chunk size and derive its working parameters.
///
/// Fails with [`CrcError::InvalidPolynomial`] when `degree` is zero, when it
/// exceeds the width of `R`, or when `chunk_size > degree`.
///
/// # Example
///
/// ```
/// use polycrc::normalize;
///
/// // CRC-8/SMBUS, 8-bit chunks
/// let params = normalize(8, 0x07u8, 8).unwrap();
/// assert_eq!(params.shift, 0);
/// assert_eq!(params.carry_bit, 0x80);
/// assert_eq!(params.remainder_mask, 0xFF);
/// ```
pub fn normalize<R: Register>(degree: u32, generator: R, chunk_size: u32) -> Result<Normalized<R>> {
    if degree == 0 {
        return Err(CrcError::invalid_polynomial(
            degree,
            "degree must be at least 1",
        ));
    }
    if degree > R::BITS {
        return Err(CrcError::invalid_polynomial(
            degree,
            format!("generator too small for degree ({} bit register)", R::BITS),
        ));
    }
    if chunk_size > degree {
        return Err(CrcError::invalid_polynomial(
            degree,
            format!("polynomial smaller than data chunk ({chunk_size} bits)"),
        ));
    }

    let remainder_mask = R::low_mask(degree);
    Ok(Normalized {
        degree,
        generator: generator & remainder_mask,
        shift: degree - chunk_size,
        carry_bit: R::ONE.shift_left(degree - 1),
        remainder_mask,
    })
}
