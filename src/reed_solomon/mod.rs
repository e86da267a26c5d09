//! Reed-Solomon Erasure Coding Module
//!
//! This module provides a systematic Reed-Solomon erasure code over GF(2^8)
//! with characteristic polynomial 0x11D. Any `k` of the coded blocks suffice
//! to reconstruct the rest by Lagrange interpolation.

pub mod coder;
pub mod error;
pub mod galois;
pub mod kernel;
pub mod lagrange;
pub mod rows;

pub use coder::*;
pub use error::*;
pub use galois::*;
pub use lagrange::CoefficientMatrix;
pub use rows::RowMatrix;
