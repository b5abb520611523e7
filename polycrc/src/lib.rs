//! # polycrc
//!
//! Configurable-width CRC computation by polynomial division over GF(2).
//!
//! Any degree, any generator, any input word width. One bit-serial reference
//! divider and three table-driven dividers that must agree with it bit for
//! bit:
//!
//! - [`normalize`]: validates a polynomial and derives its working constants
//! - [`divide_no_table`]: bit-serial reference division
//! - [`build_table`]: lookup table for a chosen chunk width
//! - [`divide_word_table`]: table as wide as the input words
//! - [`divide_small_table`]: table narrower than the input words
//! - [`divide_big_table`]: table wider than the input words
//! - [`divide_with_table`]: picks the divider matching a table's width
//!
//! ## Conventions
//!
//! The generator holds the low `degree` coefficients of the polynomial; the
//! leading coefficient is implicit. Division is MSB-first, the remainder
//! starts at zero and nothing is reflected or inverted. Standard CRCs that use
//! an initial value, reflection or a final XOR are built on top by the caller.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ divide_with_table / Polynomial                           │
//! ├──────────────┬──────────────┬──────────────┬─────────────┤
//! │ word_table   │ small_table  │ big_table    │ reference   │
//! ├──────────────┴──────────────┴──────────────┤             │
//! │ table (build_table)                        │             │
//! ├────────────────────────────────────────────┴─────────────┤
//! │ normalize                                                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use polycrc::{build_table, divide_big_table, divide_no_table, divide_small_table};
//!
//! // CRC-32 polynomial over bytes, zero initial value
//! let data = b"123456789";
//! let reference = divide_no_table(32, 0x04C11DB7u32, data).unwrap();
//! assert_eq!(reference, 0x89A1897F);
//!
//! let nibbles = build_table(32, 0x04C11DB7u32, 4).unwrap();
//! assert_eq!(divide_small_table(32, 0x04C11DB7u32, data, &nibbles).unwrap(), reference);
//!
//! let pairs = build_table(32, 0x04C11DB7u32, 16).unwrap();
//! assert_eq!(divide_big_table(32, 0x04C11DB7u32, data, &pairs).unwrap(), reference);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod big_table;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod polynomial;
pub mod reference;
pub mod small_table;
pub mod table;
pub mod width;
pub mod word_table;

// Re-exports for convenience
pub use big_table::divide_big_table;
pub use error::{CrcError, Result};
pub use layout::{TableLayout, divide_with_table};
pub use normalize::{Normalized, normalize};
pub use polynomial::Polynomial;
pub use reference::divide_no_table;
pub use small_table::divide_small_table;
pub use table::{MAX_TABLE_BITS, build_table, table_width};
pub use width::{Register, Word};
pub use word_table::divide_word_table;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CrcError, Result};
    pub use crate::layout::divide_with_table;
    pub use crate::polynomial::Polynomial;
    pub use crate::reference::divide_no_table;
    pub use crate::table::build_table;
    pub use crate::width::{Register, Word};
}
