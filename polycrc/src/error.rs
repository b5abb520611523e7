//! Error types for CRC engine operations.
//!
//! Every failure in this crate is a caller configuration error: a polynomial
//! that does not fit its register, a table that is too large to build, or a
//! table whose shape does not match the input words. All of them are detected
//! before any division work starts.

use thiserror::Error;

/// The main error type for CRC engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrcError {
    /// The polynomial cannot be used with the requested register or chunk size.
    #[error("Invalid polynomial of degree {degree}: {message}")]
    InvalidPolynomial {
        /// Degree of the rejected polynomial.
        degree: u32,
        /// Description of the violated constraint.
        message: String,
    },

    /// Requested table width cannot be built.
    #[error("Table too large: {requested} bits requested, maximum is {max}")]
    TableSizeExceeded {
        /// Requested table width in bits.
        requested: u32,
        /// Largest table width that can be built.
        max: u32,
    },

    /// Table length or width does not fit the divider it was given to.
    #[error("Table shape mismatch: {message}")]
    TableShapeMismatch {
        /// Description of the mismatch.
        message: String,
    },
}

/// Result type alias for CRC engine operations.
pub type Result<T> = std::result::Result<T, CrcError>;

impl CrcError {
    /// Create an invalid polynomial error.
    pub fn invalid_polynomial(degree: u32, message: impl Into<String>) -> Self {
        Self::InvalidPolynomial {
            degree,
            message: message.into(),
        }
    }

    /// Create a table size exceeded error.
    pub fn table_size_exceeded(requested: u32, max: u32) -> Self {
        Self::TableSizeExceeded { requested, max }
    }

    /// Create a table shape mismatch error.
    pub fn table_shape(message: impl Into<String>) -> Self {
        Self::TableShapeMismatch {
            message: message.into(),
        }
    }
}
