//! Byte-row matrices
//!
//! A [`RowMatrix`] holds a set of equal-length byte rows in one contiguous
//! row-major buffer. Row lengths are validated once, when the matrix is built,
//! so the coder never has to deal with ragged input.

use super::error::{CodingError, Result};

/// Equal-length byte rows, one field element per column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowMatrix {
    rows: usize,
    row_len: usize,
    data: Vec<u8>,
}

impl RowMatrix {
    /// All-zero matrix of `rows` rows of `row_len` bytes
    pub fn zeroed(rows: usize, row_len: usize) -> Self {
        Self {
            rows,
            row_len,
            data: vec![0; rows * row_len],
        }
    }

    /// Copy a sequence of rows, checking every row against the first one's length
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let row_len = rows.first().map_or(0, |r| r.as_ref().len());
        check_row_lengths(rows, row_len)?;

        let mut data = Vec::with_capacity(rows.len() * row_len);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }

        Ok(Self {
            rows: rows.len(),
            row_len,
            data,
        })
    }

    /// Wrap an existing row-major buffer of exactly `rows * row_len` bytes
    pub fn from_flat(data: Vec<u8>, rows: usize, row_len: usize) -> Result<Self> {
        if data.len() != rows * row_len {
            return Err(CodingError::BufferLength {
                expected: rows * row_len,
                actual: data.len(),
            });
        }
        Ok(Self {
            rows,
            row_len,
            data,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Length of every row in bytes
    pub fn row_len(&self) -> usize {
        self.row_len
    }

    /// True if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Row `i`, `row_len` bytes long
    #[inline]
    pub fn row(&self, i: usize) -> &[u8] {
        &self.data[i * self.row_len..(i + 1) * self.row_len]
    }

    /// Mutable row `i`
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [u8] {
        &mut self.data[i * self.row_len..(i + 1) * self.row_len]
    }

    /// Iterate over the rows in order
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// The underlying row-major buffer
    pub fn as_flat(&self) -> &[u8] {
        &self.data
    }

    /// Split into owned rows
    pub fn into_rows(self) -> Vec<Vec<u8>> {
        self.iter().map(<[u8]>::to_vec).collect()
    }
}

/// Check that every row in `rows` is `expected` bytes long
pub(crate) fn check_row_lengths<R: AsRef<[u8]>>(rows: &[R], expected: usize) -> Result<()> {
    match rows
        .iter()
        .position(|r| r.as_ref().len() != expected)
    {
        Some(row) => Err(CodingError::RaggedInput {
            row,
            expected,
            actual: rows[row].as_ref().len(),
        }),
        None => Ok(()),
    }
}
