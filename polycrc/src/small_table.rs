//! Table-driven division with several lookups per input word.
//!
//! A table narrower than the input words trades speed for memory: a 4-bit
//! table has 16 entries and needs two lookups per byte, where a byte table
//! has 256 entries and needs one.

use crate::error::{CrcError, Result};
use crate::normalize::normalize;
use crate::table::table_width;
use crate::width::{Register, Word, widen};

/// Divide a word stream using a table narrower than the words.
///
/// The table width (`block_size`) must divide `W::BITS` exactly. Each word is
/// consumed in `W::BITS / block_size` blocks, most significant block first.
/// The result is identical to [`divide_no_table`](crate::divide_no_table).
///
/// # Example
///
/// ```
/// use polycrc::{build_table, divide_small_table};
///
/// // CRC-16/XMODEM with a 16-entry table
/// let table = build_table(16, 0x1021u16, 4).unwrap();
/// let crc = divide_small_table(16, 0x1021u16, b"123456789", &table).unwrap();
/// assert_eq!(crc, 0x31C3);
/// ```
pub fn divide_small_table<W: Word, R: Register>(
    degree: u32,
    generator: R,
    data: &[W],
    table: &[R],
) -> Result<R> {
    let block_size = table_width(table)?;
    if block_size > W::BITS {
        return Err(CrcError::table_shape(format!(
            "table too large for input words: {block_size}-bit table, {}-bit words",
            W::BITS
        )));
    }
    if block_size == 0 || W::BITS % block_size != 0 {
        return Err(CrcError::table_shape(format!(
            "{block_size}-bit table is not an exact divisor of {}-bit words",
            W::BITS
        )));
    }
    // Whole words must still fit the polynomial, as for the bit-serial divider.
    normalize(degree, generator, W::BITS)?;
    let params = normalize(degree, generator, block_size)?;

    let blocks = W::BITS / block_size;
    let block_mask = R::low_mask(block_size);
    let mut remainder = R::ZERO;
    for &word in data {
        let mut buffer = widen::<W, R>(word);
        for _ in 0..blocks {
            let block = buffer.shift_right(W::BITS - block_size) & block_mask;
            remainder ^= block.shift_left(params.shift);
            let index = remainder.shift_right(params.shift).to_index();
            remainder = params.mask(remainder.shift_left(block_size) ^ table[index]);
            buffer = buffer.shift_left(block_size);
        }
    }

    Ok(remainder)
}
