//! Error types for erasure coding operations

use thiserror::Error;

/// Which abscissa list a construction error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbscissaSide {
    Input,
    Output,
}

impl std::fmt::Display for AbscissaSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbscissaSide::Input => write!(f, "input"),
            AbscissaSide::Output => write!(f, "output"),
        }
    }
}

/// Errors raised by the field, the interpolator and the coder.
///
/// Every variant is a caller bug: the offending call is aborted and no
/// partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodingError {
    /// Row count does not match the coder's degree or output count
    #[error("Wrong number of rows: {actual} for coder expecting {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Rows within one matrix (or a delta and its output rows) differ in length
    #[error("Ragged input matrix: row {row} has length {actual}, expected {expected}")]
    RaggedInput {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Flat buffer length is not rows × row length
    #[error("Buffer of {actual} bytes cannot hold {expected} bytes of rows")]
    BufferLength { expected: usize, actual: usize },

    /// Update index is not a valid input index
    #[error("Abscissa index {index} out of range for polynomial of degree {degree}")]
    IndexOutOfRange { index: usize, degree: usize },

    /// An abscissa list passed to the coder was empty
    #[error("No {side} abscissae given")]
    EmptyAbscissae { side: AbscissaSide },

    /// Two input abscissae coincide, so the interpolating polynomial is not unique
    #[error("Input abscissa {abscissa} appears at positions {first} and {second}")]
    DuplicateAbscissa {
        abscissa: u8,
        first: usize,
        second: usize,
    },

    /// Characteristic polynomial is not of degree 8
    #[error("Characteristic polynomial {0:#05x} is not of degree 8")]
    InvalidPolynomial(u16),

    /// The element 2 does not generate all 255 nonzero elements
    #[error("Element 2 has order {order} under polynomial {polynomial:#05x}, expected 255")]
    NonPrimitivePolynomial { polynomial: u16, order: usize },
}

/// Type alias for Result with CodingError
pub type Result<T> = std::result::Result<T, CodingError>;
