//! Lagrange interpolation coefficients
//!
//! Given input abscissae `x_0..x_{k-1}` and output abscissae `y_0..y_{n-1}`,
//! the coefficient matrix `M` has one row per input and one column per output:
//!
//! ```text
//! M[i][j] = Π_{k≠i} (y_j - x_k) / (x_i - x_k)
//! ```
//!
//! `M[i][j]` is the i'th Lagrange basis polynomial evaluated at `y_j`, so the
//! value of the interpolating polynomial at `y_j` is `Σ_i d_i · M[i][j]`.
//! Subtraction is XOR in GF(2^8).

use super::error::{CodingError, Result};
use super::galois::GaloisField;

/// Immutable `degree × num_outputs` table of Lagrange coefficients, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoefficientMatrix {
    degree: usize,
    num_outputs: usize,
    data: Vec<u8>,
}

impl CoefficientMatrix {
    /// Number of input abscissae (rows)
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of output abscissae (columns)
    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// Coefficient for input `i` at output `j`
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.data[i * self.num_outputs + j]
    }

    /// All output coefficients for input `i`
    #[inline]
    pub fn row(&self, i: usize) -> &[u8] {
        &self.data[i * self.num_outputs..(i + 1) * self.num_outputs]
    }
}

/// The i'th Lagrange basis polynomial through `inputs`, evaluated at `x`.
///
/// # Panics
/// Panics if `inputs[i]` coincides with another input abscissa.
pub fn lagrange_coefficient(field: &GaloisField, inputs: &[u8], i: usize, x: u8) -> u8 {
    let xi = inputs[i];
    inputs
        .iter()
        .enumerate()
        .filter(|&(k, _)| k != i)
        .fold(1u8, |acc, (_, &xk)| {
            let factor = field.multiply(field.sub(x, xk), field.inverse(field.sub(xi, xk)));
            field.multiply(acc, factor)
        })
}

/// Find the first pair of coinciding abscissae, if any
pub fn find_duplicate(abscissae: &[u8]) -> Option<(u8, usize, usize)> {
    let mut seen = [None::<usize>; 256];
    for (pos, &x) in abscissae.iter().enumerate() {
        if let Some(first) = seen[x as usize] {
            return Some((x, first, pos));
        }
        seen[x as usize] = Some(pos);
    }
    None
}

/// Build the coefficient matrix mapping values at `inputs` to values at `outputs`.
///
/// Input abscissae must be pairwise distinct; output abscissae may repeat.
/// Either list may be empty, giving an empty matrix.
pub fn interpolation_matrix(
    field: &GaloisField,
    inputs: &[u8],
    outputs: &[u8],
) -> Result<CoefficientMatrix> {
    if let Some((abscissa, first, second)) = find_duplicate(inputs) {
        return Err(CodingError::DuplicateAbscissa {
            abscissa,
            first,
            second,
        });
    }

    let mut data = Vec::with_capacity(inputs.len() * outputs.len());
    for i in 0..inputs.len() {
        data.extend(
            outputs
                .iter()
                .map(|&x| lagrange_coefficient(field, inputs, i, x)),
        );
    }

    Ok(CoefficientMatrix {
        degree: inputs.len(),
        num_outputs: outputs.len(),
        data,
    })
}
