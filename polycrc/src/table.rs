//! Lookup table construction.
//!
//! A table of width `k` holds, for every `k`-bit chunk value `i`, the
//! remainder left after running `k` steps of the bit-serial division on `i`
//! aligned to the top of the register. In polynomial terms entry `i` is
//! `i(x) * x^degree mod G(x)`, so a single lookup replaces `k` division steps.
//!
//! Tables are plain `Vec`s. Nothing mutates them after construction, so one
//! table can serve any number of division calls, from any number of threads.

use log::debug;

use crate::error::{CrcError, Result};
use crate::normalize::normalize;
use crate::width::Register;

/// Widest table [`build_table`] accepts, in bits.
pub const MAX_TABLE_BITS: u32 = 32;

/// Build the lookup table for `table_size`-bit chunks.
///
/// The result has `2^table_size` entries. Entries are not masked to `degree`
/// bits; the dividers mask after every combine.
///
/// Fails with [`CrcError::TableSizeExceeded`] above [`MAX_TABLE_BITS`], and
/// with [`CrcError::InvalidPolynomial`] when `table_size > degree`.
///
/// # Example
///
/// ```
/// use polycrc::build_table;
///
/// let table = build_table(32, 0x04C11DB7u32, 8).unwrap();
/// assert_eq!(table.len(), 256);
/// assert_eq!(table[1], 0x04C11DB7);
/// ```
pub fn build_table<R: Register>(degree: u32, generator: R, table_size: u32) -> Result<Vec<R>> {
    if table_size > MAX_TABLE_BITS {
        return Err(CrcError::table_size_exceeded(table_size, MAX_TABLE_BITS));
    }
    let params = normalize(degree, generator, table_size)?;

    let entries = 1u64 << table_size;
    debug!(
        "building CRC table: degree={degree} generator={:#x} width={table_size} entries={entries}",
        params.generator
    );

    Ok((0..entries)
        .map(|chunk| {
            let aligned = R::from_u128(u128::from(chunk)).shift_left(params.shift);
            params.steps(aligned, table_size)
        })
        .collect())
}

/// Width in bits of a table, derived from its length.
///
/// Fails with [`CrcError::TableShapeMismatch`] unless the length is a power
/// of two.
pub fn table_width<R>(table: &[R]) -> Result<u32> {
    if table.len().is_power_of_two() {
        Ok(table.len().trailing_zeros())
    } else {
        Err(CrcError::table_shape(format!(
            "table length {} is not a power of two",
            table.len()
        )))
    }
}
