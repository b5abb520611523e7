//! Table-driven division with one lookup per input word.

use crate::error::{CrcError, Result};
use crate::normalize::normalize;
use crate::width::{Register, Word, widen};

/// Divide a word stream using a table exactly as wide as the words.
///
/// `table` must have `2^W::BITS` entries, as produced by
/// [`build_table(degree, generator, W::BITS)`](crate::build_table). The result
/// is identical to [`divide_no_table`](crate::divide_no_table).
///
/// # Example
///
/// ```
/// use polycrc::{build_table, divide_word_table};
///
/// let table = build_table(8, 0x07u8, 8).unwrap();
/// let crc = divide_word_table(8, 0x07u8, &[0x01u8, 0x02, 0x03], &table).unwrap();
/// assert_eq!(crc, 0x48);
/// ```
pub fn divide_word_table<W: Word, R: Register>(
    degree: u32,
    generator: R,
    data: &[W],
    table: &[R],
) -> Result<R> {
    if 1usize.checked_shl(W::BITS) != Some(table.len()) {
        return Err(CrcError::table_shape(format!(
            "wrong sized table: {} entries for {}-bit words",
            table.len(),
            W::BITS
        )));
    }
    let params = normalize(degree, generator, W::BITS)?;

    let mut remainder = R::ZERO;
    for &word in data {
        remainder ^= widen::<W, R>(word).shift_left(params.shift);
        let index = remainder.shift_right(params.shift).to_index();
        remainder = params.mask(remainder.shift_left(W::BITS) ^ table[index]);
    }

    Ok(remainder)
}
