//! Table-driven division with one lookup per group of input words.
//!
//! A table wider than the input words consumes `block_size / W::BITS` words
//! per lookup. When the stream length is not a multiple of that group size,
//! the last group is short: its missing low-order words are treated as absent
//! input, not as zeros. Both the shift that selects the table index and the
//! shift applied before the combine shrink by the missing bits.
//!
//! This works because entry `i` of any table is `i(x) * x^degree mod G(x)`
//! whatever the table width, so a short group of `n` bits can be looked up
//! directly by its `n`-bit value.

use crate::error::{CrcError, Result};
use crate::normalize::normalize;
use crate::table::table_width;
use crate::width::{Register, Word, widen};

/// Divide a word stream using a table wider than the words.
///
/// The table width (`block_size`) must be an exact multiple of `W::BITS` and
/// must not exceed `degree`. The result is identical to
/// [`divide_no_table`](crate::divide_no_table) for any stream length.
///
/// # Example
///
/// ```
/// use polycrc::{build_table, divide_big_table};
///
/// // CRC-16/XMODEM, two bytes per lookup, odd stream length
/// let table = build_table(16, 0x1021u16, 16).unwrap();
/// let crc = divide_big_table(16, 0x1021u16, b"123456789", &table).unwrap();
/// assert_eq!(crc, 0x31C3);
/// ```
pub fn divide_big_table<W: Word, R: Register>(
    degree: u32,
    generator: R,
    data: &[W],
    table: &[R],
) -> Result<R> {
    let block_size = table_width(table)?;
    if block_size == 0 || block_size % W::BITS != 0 {
        return Err(CrcError::table_shape(format!(
            "{block_size}-bit table is not an exact multiple of {}-bit words",
            W::BITS
        )));
    }
    if block_size > degree {
        return Err(CrcError::table_shape(format!(
            "{block_size}-bit table is wider than the degree {degree} polynomial"
        )));
    }
    let params = normalize(degree, generator, block_size)?;

    let group = (block_size / W::BITS) as usize;
    let mut remainder = R::ZERO;
    for words in data.chunks(group) {
        let missing = (group - words.len()) as u32 * W::BITS;

        let mut block = R::ZERO;
        for &word in words {
            block = block.shift_left(W::BITS) | widen::<W, R>(word);
        }

        let shift = params.shift + missing;
        remainder ^= block.shift_left(shift);
        let index = remainder.shift_right(shift).to_index();
        remainder = params.mask(remainder.shift_left(block_size - missing) ^ table[index]);
    }

    Ok(remainder)
}
