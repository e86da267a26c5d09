//! Erasure Coder Tests
//!
//! Encoding, incremental update, recovery and shape validation.

use rscoder::reed_solomon::{AbscissaSide, CodingError, ErasureCoder, GaloisField, RowMatrix};

fn original_rows() -> Vec<Vec<u8>> {
    vec![
        vec![1, 2, 3, 4, 5],
        vec![41, 42, 43, 44, 45],
        vec![11, 22, 33, 44, 55],
    ]
}

fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}

// ============================================================================
// End-to-end Scenario
// ============================================================================

#[test]
fn test_encode_update_recover() {
    let mut input = original_rows();

    // encodes 3 blocks into the 3 originals plus 2 code blocks
    let coder = ErasureCoder::new(&[0, 1, 2], &[0, 1, 2, 3, 4]).unwrap();
    assert_eq!(coder.degree(), 3);
    assert_eq!(coder.num_outputs(), 5);

    let mut output = coder.code_rows(&input).unwrap();
    for i in 0..3 {
        assert_eq!(output[i], input[i]);
    }

    let updated = vec![51, 62, 73, 84, 95];
    let delta = xor(&input[1], &updated);
    input[1] = updated;
    coder.update_rows(1, &delta, &mut output).unwrap();

    for i in 0..3 {
        assert_eq!(output[i], input[i], "output row {} after update", i);
    }

    // reconstruct 1 and 2 from 0 and the two code blocks
    let decoder = ErasureCoder::new(&[0, 3, 4], &[1, 2]).unwrap();
    let recovered = decoder
        .code_rows(&[&output[0], &output[3], &output[4]])
        .unwrap();
    assert_eq!(recovered[0], input[1]);
    assert_eq!(recovered[1], input[2]);
}

#[test]
fn test_recovery_from_every_subset() {
    let abscissae = [0u8, 1, 2, 3, 4];
    let input = original_rows();
    let coded = ErasureCoder::new(&abscissae[..3], &abscissae)
        .unwrap()
        .code_rows(&input)
        .unwrap();

    for a in 0..5 {
        for b in a + 1..5 {
            for c in b + 1..5 {
                let kept = [a, b, c];
                let missing: Vec<usize> = (0..5).filter(|p| !kept.contains(p)).collect();

                let in_x: Vec<u8> = kept.iter().map(|&p| abscissae[p]).collect();
                let out_x: Vec<u8> = missing.iter().map(|&p| abscissae[p]).collect();
                let rows: Vec<&Vec<u8>> = kept.iter().map(|&p| &coded[p]).collect();

                let recovered = ErasureCoder::new(&in_x, &out_x)
                    .unwrap()
                    .code_rows(&rows)
                    .unwrap();
                for (row, &p) in recovered.iter().zip(&missing) {
                    assert_eq!(row, &coded[p], "kept {:?}, recovering {}", kept, p);
                }
            }
        }
    }
}

#[test]
fn test_new_code_block_from_any_subset() {
    // a fresh code block at 7 built from 0,3,5 decodes like any other
    let input = original_rows();
    let coded = ErasureCoder::new(&[0, 1, 2], &[0, 1, 2, 3, 5])
        .unwrap()
        .code_rows(&input)
        .unwrap();

    let rs7 = ErasureCoder::new(&[0, 3, 5], &[7])
        .unwrap()
        .code_rows(&[&coded[0], &coded[3], &coded[4]])
        .unwrap();
    let recovered = ErasureCoder::new(&[0, 3, 7], &[2])
        .unwrap()
        .code_rows(&[&coded[0], &coded[3], &rs7[0]])
        .unwrap();
    assert_eq!(recovered[0], input[2]);
}

#[test]
fn test_systematic_outputs_in_any_position() {
    let input = original_rows();
    let coder = ErasureCoder::new(&[9, 100, 250], &[9, 100, 250, 1, 2, 3]).unwrap();
    let output = coder.code_rows(&input).unwrap();
    assert_eq!(&output[..3], &input[..]);
}

#[test]
fn test_custom_field() {
    let field = GaloisField::with_polynomial(0x14D).unwrap();
    let input = original_rows();
    let coded = ErasureCoder::with_field(field, &[0, 1, 2], &[3, 4])
        .unwrap()
        .code_rows(&input)
        .unwrap();
    let recovered = ErasureCoder::with_field(field, &[1, 3, 4], &[0, 2])
        .unwrap()
        .code_rows(&[&input[1], &coded[0], &coded[1]])
        .unwrap();
    assert_eq!(recovered, vec![input[0].clone(), input[2].clone()]);
}

#[test]
fn test_single_input_repeats_row() {
    // degree 1: the polynomial is constant
    let coder = ErasureCoder::new(&[42], &[0, 1, 255]).unwrap();
    let output = coder.code_rows(&[[5u8, 6, 7]]).unwrap();
    assert_eq!(output, vec![vec![5, 6, 7]; 3]);
}

// ============================================================================
// Shape Validation
// ============================================================================

#[test]
fn test_code_wrong_number_of_rows() {
    let coder = ErasureCoder::new(&[0, 1, 2], &[0, 1, 2, 3, 4]).unwrap();
    assert_eq!(
        coder.code_rows(&[vec![1u8]]),
        Err(CodingError::ShapeMismatch {
            expected: 3,
            actual: 1
        })
    );
}

#[test]
fn test_code_ragged_input() {
    let coder = ErasureCoder::new(&[0, 1, 2], &[0, 1, 2, 3, 4]).unwrap();
    assert_eq!(
        coder.code_rows(&[vec![1u8, 2], vec![1], vec![1]]),
        Err(CodingError::RaggedInput {
            row: 1,
            expected: 2,
            actual: 1
        })
    );
}

#[test]
fn test_update_bad_index() {
    let coder = ErasureCoder::new(&[0, 1, 2], &[0, 1, 2, 3, 4]).unwrap();
    let mut output = vec![vec![0u8]; 5];
    assert_eq!(
        coder.update_rows(3, &[1], &mut output),
        Err(CodingError::IndexOutOfRange {
            index: 3,
            degree: 3
        })
    );
}

#[test]
fn test_update_ragged_output() {
    let coder = ErasureCoder::new(&[0, 1, 2], &[0, 1, 2, 3, 4]).unwrap();
    let mut output = vec![vec![0u8], vec![0], vec![0, 2], vec![0], vec![0]];
    assert_eq!(
        coder.update_rows(0, &[1], &mut output),
        Err(CodingError::RaggedInput {
            row: 2,
            expected: 1,
            actual: 2
        })
    );
    // nothing was touched
    assert_eq!(output[0], vec![0]);
}

#[test]
fn test_update_wrong_number_of_outputs() {
    let coder = ErasureCoder::new(&[0, 1, 2], &[0, 1, 2, 3, 4]).unwrap();
    let mut output = vec![vec![0u8]; 4];
    assert_eq!(
        coder.update_rows(0, &[1], &mut output),
        Err(CodingError::ShapeMismatch {
            expected: 5,
            actual: 4
        })
    );
}

#[test]
fn test_construction_errors() {
    assert_eq!(
        ErasureCoder::new(&[], &[0]).unwrap_err(),
        CodingError::EmptyAbscissae {
            side: AbscissaSide::Input
        }
    );
    assert_eq!(
        ErasureCoder::new(&[0, 1], &[]).unwrap_err(),
        CodingError::EmptyAbscissae {
            side: AbscissaSide::Output
        }
    );
    assert_eq!(
        ErasureCoder::new(&[3, 8, 3], &[1]).unwrap_err(),
        CodingError::DuplicateAbscissa {
            abscissa: 3,
            first: 0,
            second: 2
        }
    );
}

#[test]
fn test_error_messages() {
    let err = CodingError::ShapeMismatch {
        expected: 3,
        actual: 1,
    };
    assert_eq!(err.to_string(), "Wrong number of rows: 1 for coder expecting 3");

    let err = CodingError::EmptyAbscissae {
        side: AbscissaSide::Output,
    };
    assert_eq!(err.to_string(), "No output abscissae given");
}

// ============================================================================
// RowMatrix API
// ============================================================================

#[test]
fn test_row_matrix_code_and_update() {
    let coder = ErasureCoder::new(&[0, 1, 2], &[3, 4]).unwrap();
    let mut input = RowMatrix::from_rows(&original_rows()).unwrap();
    let mut output = coder.code(&input).unwrap();
    assert_eq!(output.rows(), 2);
    assert_eq!(output.row_len(), 5);

    let delta = [0xFFu8, 0, 0x10, 0, 1];
    for (b, d) in input.row_mut(2).iter_mut().zip(delta) {
        *b ^= d;
    }
    coder.update(2, &delta, &mut output).unwrap();
    assert_eq!(output, coder.code(&input).unwrap());
}
