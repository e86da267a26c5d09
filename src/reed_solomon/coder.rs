//! Systematic Reed-Solomon erasure coder over GF(2^8)
//!
//! ## Overview
//!
//! An [`ErasureCoder`] is built from a list of input abscissae and a list of
//! output abscissae. Coding treats column `j` of the `k` input rows as the
//! values of a polynomial of degree `< k` at the input abscissae, and
//! evaluates that polynomial at every output abscissa.
//!
//! Encoding and decoding are the same operation. To recover lost blocks,
//! build a new coder whose inputs are the abscissae of any `k` surviving
//! blocks and whose outputs are the abscissae of the missing ones.
//!
//! ```
//! use rscoder::reed_solomon::ErasureCoder;
//!
//! let encoder = ErasureCoder::new(&[0, 1, 2], &[3, 4])?;
//! let data = vec![vec![1u8, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
//! let parity = encoder.code_rows(&data)?;
//!
//! // lose rows 1 and 2, recover them from row 0 and the parity rows
//! let decoder = ErasureCoder::new(&[0, 3, 4], &[1, 2])?;
//! let recovered = decoder.code_rows(&[&data[0], &parity[0], &parity[1]])?;
//! assert_eq!(recovered, vec![data[1].clone(), data[2].clone()]);
//! # Ok::<(), rscoder::reed_solomon::CodingError>(())
//! ```
//!
//! ## Incremental updates
//!
//! Coding is linear over XOR, so changing one input row by `delta` changes
//! every output row by `delta` times that input's coefficient.
//! [`ErasureCoder::update`] applies exactly that term in place, without
//! looking at any other input.

use super::error::{AbscissaSide, CodingError, Result};
use super::galois::{galois_field, GaloisField};
use super::kernel::{multiply_add, process_row, WriteOp};
use super::lagrange::{interpolation_matrix, CoefficientMatrix};
use super::rows::{check_row_lengths, RowMatrix};
use log::{debug, trace};

/// Encoder/decoder computing P(outputs) from P(inputs)
#[derive(Debug, Clone)]
pub struct ErasureCoder {
    field: GaloisField,
    interp: CoefficientMatrix,
}

impl ErasureCoder {
    /// Build a coder over the standard GF(2^8) field.
    ///
    /// Fails if either abscissa list is empty or if two input abscissae coincide.
    pub fn new(inputs: &[u8], outputs: &[u8]) -> Result<Self> {
        Self::with_field(*galois_field(), inputs, outputs)
    }

    /// Build a coder over an explicitly constructed field
    pub fn with_field(field: GaloisField, inputs: &[u8], outputs: &[u8]) -> Result<Self> {
        if inputs.is_empty() {
            return Err(CodingError::EmptyAbscissae {
                side: AbscissaSide::Input,
            });
        }
        if outputs.is_empty() {
            return Err(CodingError::EmptyAbscissae {
                side: AbscissaSide::Output,
            });
        }

        let interp = interpolation_matrix(&field, inputs, outputs)?;
        debug!(
            "Built erasure coder: inputs {:?} -> outputs {:?} (poly {:#05x})",
            inputs,
            outputs,
            field.polynomial()
        );

        Ok(Self { field, interp })
    }

    /// Degree of the interpolated polynomial, equal to the number of inputs
    pub fn degree(&self) -> usize {
        self.interp.degree()
    }

    /// Number of output rows produced per call to [`code`](Self::code)
    pub fn num_outputs(&self) -> usize {
        self.interp.num_outputs()
    }

    /// The Lagrange coefficient matrix this coder applies
    pub fn coefficients(&self) -> &CoefficientMatrix {
        &self.interp
    }

    /// The field the coefficients and products are computed in
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// Evaluate the polynomial through `input` at every output abscissa.
    ///
    /// `input` must have exactly [`degree`](Self::degree) rows. The result has
    /// [`num_outputs`](Self::num_outputs) rows of the same length as the input rows.
    pub fn code(&self, input: &RowMatrix) -> Result<RowMatrix> {
        if input.rows() != self.degree() {
            return Err(CodingError::ShapeMismatch {
                expected: self.degree(),
                actual: input.rows(),
            });
        }

        let mut output = RowMatrix::zeroed(self.num_outputs(), input.row_len());
        for k in 0..self.num_outputs() {
            let out_row = output.row_mut(k);
            for (i, in_row) in input.iter().enumerate() {
                let op = if i == 0 { WriteOp::Direct } else { WriteOp::Add };
                process_row(&self.field, self.interp.get(i, k), in_row, out_row, op);
            }
        }

        Ok(output)
    }

    /// [`code`](Self::code) over a plain sequence of rows.
    ///
    /// The row count is checked before row lengths, so a short ragged input
    /// reports [`CodingError::ShapeMismatch`].
    pub fn code_rows<R: AsRef<[u8]>>(&self, rows: &[R]) -> Result<Vec<Vec<u8>>> {
        if rows.len() != self.degree() {
            return Err(CodingError::ShapeMismatch {
                expected: self.degree(),
                actual: rows.len(),
            });
        }
        let input = RowMatrix::from_rows(rows)?;
        Ok(self.code(&input)?.into_rows())
    }

    /// Apply a change of input row `index` to already coded `output`, in place.
    ///
    /// `delta` is the XOR of the row's old and new contents. Starting from a
    /// zeroed `output` and applying the rows one by one accumulates the same
    /// result as a full [`code`](Self::code).
    pub fn update(&self, index: usize, delta: &[u8], output: &mut RowMatrix) -> Result<()> {
        self.check_update_shape(index, output.rows())?;
        if output.row_len() != delta.len() {
            return Err(CodingError::RaggedInput {
                row: 0,
                expected: delta.len(),
                actual: output.row_len(),
            });
        }

        trace!("Updating input {} with {} byte delta", index, delta.len());
        for (k, &coefficient) in self.interp.row(index).iter().enumerate() {
            multiply_add(&self.field, coefficient, delta, output.row_mut(k));
        }
        Ok(())
    }

    /// [`update`](Self::update) over a plain sequence of output rows
    pub fn update_rows<R: AsRef<[u8]> + AsMut<[u8]>>(
        &self,
        index: usize,
        delta: &[u8],
        output: &mut [R],
    ) -> Result<()> {
        self.check_update_shape(index, output.len())?;
        check_row_lengths(output, delta.len())?;

        trace!("Updating input {} with {} byte delta", index, delta.len());
        for (row, &coefficient) in output.iter_mut().zip(self.interp.row(index)) {
            multiply_add(&self.field, coefficient, delta, row.as_mut());
        }
        Ok(())
    }

    fn check_update_shape(&self, index: usize, rows: usize) -> Result<()> {
        if index >= self.degree() {
            return Err(CodingError::IndexOutOfRange {
                index,
                degree: self.degree(),
            });
        }
        if rows != self.num_outputs() {
            return Err(CodingError::ShapeMismatch {
                expected: self.num_outputs(),
                actual: rows,
            });
        }
        Ok(())
    }
}
