//! Matching a table to the divider that can use it.
//!
//! A table's width relative to the input word width decides which divider
//! consumes it:
//!
//! | table width          | layout  | divider                 |
//! |----------------------|---------|-------------------------|
//! | `== W::BITS`         | `Word`  | [`divide_word_table`]   |
//! | divides `W::BITS`    | `Small` | [`divide_small_table`]  |
//! | multiple of `W::BITS`| `Big`   | [`divide_big_table`]    |

use log::trace;

use crate::big_table::divide_big_table;
use crate::error::{CrcError, Result};
use crate::small_table::divide_small_table;
use crate::table::table_width;
use crate::width::{Register, Word};
use crate::word_table::divide_word_table;

/// How a table of a given width is applied to input words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    /// One lookup per word.
    Word,
    /// Several lookups per word.
    Small {
        /// Table lookups spent on each word.
        lookups_per_word: u32,
    },
    /// One lookup per group of words.
    Big {
        /// Words consumed by each table lookup.
        words_per_lookup: u32,
    },
}

impl TableLayout {
    /// Pick the layout for a `table_bits`-wide table over `word_bits`-wide words.
    ///
    /// Fails with [`CrcError::TableShapeMismatch`] when the widths are not
    /// exact divisors or multiples of each other, or when a wide table exceeds
    /// `degree`.
    pub fn classify(table_bits: u32, word_bits: u32, degree: u32) -> Result<Self> {
        if table_bits == 0 || word_bits == 0 {
            return Err(CrcError::table_shape("zero-width table or word"));
        }

        if table_bits == word_bits {
            Ok(Self::Word)
        } else if table_bits < word_bits {
            if word_bits % table_bits != 0 {
                return Err(CrcError::table_shape(format!(
                    "{table_bits}-bit table is not an exact divisor of {word_bits}-bit words"
                )));
            }
            Ok(Self::Small {
                lookups_per_word: word_bits / table_bits,
            })
        } else {
            if table_bits % word_bits != 0 {
                return Err(CrcError::table_shape(format!(
                    "{table_bits}-bit table is not an exact multiple of {word_bits}-bit words"
                )));
            }
            if table_bits > degree {
                return Err(CrcError::table_shape(format!(
                    "{table_bits}-bit table is wider than the degree {degree} polynomial"
                )));
            }
            Ok(Self::Big {
                words_per_lookup: table_bits / word_bits,
            })
        }
    }
}

/// Divide a word stream with whichever table divider fits the table.
///
/// # Example
///
/// ```
/// use polycrc::{build_table, divide_with_table};
///
/// for width in [2, 4, 8, 16] {
///     let table = build_table(16, 0x1021u16, width).unwrap();
///     assert_eq!(divide_with_table(16, 0x1021u16, b"123456789", &table).unwrap(), 0x31C3);
/// }
/// ```
pub fn divide_with_table<W: Word, R: Register>(
    degree: u32,
    generator: R,
    data: &[W],
    table: &[R],
) -> Result<R> {
    let table_bits = table_width(table)?;
    let layout = TableLayout::classify(table_bits, W::BITS, degree)?;
    trace!(
        "dividing {} words of {} bits with a {table_bits}-bit table: {layout:?}",
        data.len(),
        W::BITS
    );

    match layout {
        TableLayout::Word => divide_word_table(degree, generator, data, table),
        TableLayout::Small { .. } => divide_small_table(degree, generator, data, table),
        TableLayout::Big { .. } => divide_big_table(degree, generator, data, table),
    }
}
