//! Bit-serial polynomial division.
//!
//! No tables, one division step per input bit. Slow, but every table-driven
//! divider in this crate is checked against it.

use crate::error::Result;
use crate::normalize::normalize;
use crate::width::{Register, Word, widen};

/// Divide a word stream by the generator one bit at a time.
///
/// Each word is XORed into the top of the remainder and then carried through
/// `W::BITS` division steps. Requires `degree >= W::BITS`.
///
/// # Example
///
/// ```
/// use polycrc::divide_no_table;
///
/// // CRC-16/XMODEM check value
/// let crc = divide_no_table(16, 0x1021u16, b"123456789").unwrap();
/// assert_eq!(crc, 0x31C3);
/// ```
pub fn divide_no_table<W: Word, R: Register>(degree: u32, generator: R, data: &[W]) -> Result<R> {
    let params = normalize(degree, generator, W::BITS)?;

    let mut remainder = R::ZERO;
    for &word in data {
        remainder ^= widen::<W, R>(word).shift_left(params.shift);
        remainder = params.steps(remainder, W::BITS);
    }

    Ok(params.mask(remainder))
}
