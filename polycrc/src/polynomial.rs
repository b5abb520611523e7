//! Validated polynomial configuration.

use crate::error::Result;
use crate::layout::divide_with_table;
use crate::normalize::{Normalized, normalize};
use crate::reference::divide_no_table;
use crate::table::build_table;
use crate::width::{Register, Word};

/// A generator polynomial checked against its register type.
///
/// Bundles `degree` and `generator` so they are validated once and passed
/// around together. Every method delegates to the matching free function.
///
/// # Example
///
/// ```
/// use polycrc::Polynomial;
///
/// // CRC-32 polynomial, leading coefficient implicit
/// let poly = Polynomial::new(32, 0x04C11DB7u32).unwrap();
/// let table = poly.build_table(8).unwrap();
///
/// let slow = poly.divide(b"123456789").unwrap();
/// let fast = poly.divide_with_table(b"123456789", &table).unwrap();
/// assert_eq!(slow, fast);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Polynomial<R> {
    degree: u32,
    generator: R,
}

impl<R: Register> Polynomial<R> {
    /// Create a polynomial, masking the generator to `degree` bits.
    pub fn new(degree: u32, generator: R) -> Result<Self> {
        let params = normalize(degree, generator, 0)?;
        Ok(Self {
            degree,
            generator: params.generator,
        })
    }

    /// Degree of the polynomial, which is also the CRC width in bits.
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Generator coefficients without the implicit leading one.
    pub fn generator(&self) -> R {
        self.generator
    }

    /// Working parameters for `chunk_size`-bit chunks.
    pub fn normalize(&self, chunk_size: u32) -> Result<Normalized<R>> {
        normalize(self.degree, self.generator, chunk_size)
    }

    /// Lookup table for `table_size`-bit chunks.
    pub fn build_table(&self, table_size: u32) -> Result<Vec<R>> {
        build_table(self.degree, self.generator, table_size)
    }

    /// Bit-serial division of `data`.
    pub fn divide<W: Word>(&self, data: &[W]) -> Result<R> {
        divide_no_table(self.degree, self.generator, data)
    }

    /// Table-driven division of `data` with the divider that fits `table`.
    pub fn divide_with_table<W: Word>(&self, data: &[W], table: &[R]) -> Result<R> {
        divide_with_table(self.degree, self.generator, data, table)
    }
}
