//! Scalar GF(2^8) row kernels
//!
//! The coder spends all of its time in one operation: take a byte row,
//! multiply every byte by a single coefficient, and XOR the products into an
//! output row. Rather than doing a log/exp lookup per byte, the kernel
//! expands the coefficient into a 256-entry product table once and then
//! does a single lookup per byte.
//!
//! Coefficients 0 and 1 skip the table entirely, and rows shorter than
//! [`TABLE_THRESHOLD`] use the log/exp multiply directly since building the
//! table would cost more than it saves.

use super::galois::GaloisField;

/// Rows at least this long get a product table
pub const TABLE_THRESHOLD: usize = 64;

/// Specifies how to combine the multiplication result with the output buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    /// Direct write: output = coefficient * input (replaces contents)
    Direct,
    /// Accumulate: output = output XOR (coefficient * input)
    Add,
}

/// Multiply `input` by `coefficient` into `output`.
///
/// Processes `min(input.len(), output.len())` bytes.
#[inline]
pub fn process_row(
    field: &GaloisField,
    coefficient: u8,
    input: &[u8],
    output: &mut [u8],
    op: WriteOp,
) {
    let len = input.len().min(output.len());
    let (input, output) = (&input[..len], &mut output[..len]);

    match (coefficient, op) {
        (0, WriteOp::Add) => {}
        (0, WriteOp::Direct) => output.fill(0),
        (1, WriteOp::Add) => xor_into(input, output),
        (1, WriteOp::Direct) => output.copy_from_slice(input),
        (_, WriteOp::Direct) if len < TABLE_THRESHOLD => {
            for (out, &x) in output.iter_mut().zip(input) {
                *out = field.multiply(coefficient, x);
            }
        }
        (_, WriteOp::Add) if len < TABLE_THRESHOLD => {
            for (out, &x) in output.iter_mut().zip(input) {
                *out ^= field.multiply(coefficient, x);
            }
        }
        (_, op) => {
            let table = field.mul_table(coefficient);
            match op {
                WriteOp::Direct => {
                    for (out, &x) in output.iter_mut().zip(input) {
                        *out = table[x as usize];
                    }
                }
                WriteOp::Add => {
                    for (out, &x) in output.iter_mut().zip(input) {
                        *out ^= table[x as usize];
                    }
                }
            }
        }
    }
}

/// output ^= coefficient * input
#[inline]
pub fn multiply_add(field: &GaloisField, coefficient: u8, input: &[u8], output: &mut [u8]) {
    process_row(field, coefficient, input, output, WriteOp::Add);
}

/// output ^= input
#[inline]
pub fn xor_into(input: &[u8], output: &mut [u8]) {
    for (out, &x) in output.iter_mut().zip(input) {
        *out ^= x;
    }
}
