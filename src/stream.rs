//! Block-wise coding of byte streams
//!
//! Reads fixed-size blocks from each of `degree` sources, codes them, and
//! writes one block to each of `num_outputs` sinks, until every source is
//! exhausted. Short blocks are zero-padded to the longest block read in the
//! same round, so every output ends up as long as the longest input.
//!
//! Original lengths and abscissae are not recorded anywhere; callers keep
//! track of them out of band.

use crate::reed_solomon::{CodingError, ErasureCoder, RowMatrix};
use log::debug;
use std::io::{self, Read, Write};
use thiserror::Error;

/// Errors from stream coding
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("Expected {expected} input streams, got {actual}")]
    SourceCount { expected: usize, actual: usize },

    #[error("Expected {expected} output streams, got {actual}")]
    SinkCount { expected: usize, actual: usize },

    #[error("Block size must be nonzero")]
    BlockSize,

    #[error("Error reading from input {index}: {source}")]
    Read { index: usize, source: io::Error },

    #[error("Error writing to output {index}: {source}")]
    Write { index: usize, source: io::Error },

    #[error(transparent)]
    Coding(#[from] CodingError),
}

pub type Result<T> = std::result::Result<T, StreamError>;

/// What a call to [`encode_streams`] did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Number of blocks coded
    pub rounds: usize,
    /// Bytes consumed from each source
    pub bytes_read: Vec<u64>,
    /// Bytes written to every sink (all sinks receive the same amount)
    pub bytes_written: u64,
}

/// Fill `buf` from `reader`, stopping early only at end of stream
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Code `sources` into `sinks` one `block_size` block at a time.
///
/// `sources.len()` must equal the coder's degree and `sinks.len()` its
/// number of outputs. Sinks are not flushed.
pub fn encode_streams<R: Read, W: Write>(
    coder: &ErasureCoder,
    sources: &mut [R],
    sinks: &mut [W],
    block_size: usize,
) -> Result<StreamSummary> {
    if sources.len() != coder.degree() {
        return Err(StreamError::SourceCount {
            expected: coder.degree(),
            actual: sources.len(),
        });
    }
    if sinks.len() != coder.num_outputs() {
        return Err(StreamError::SinkCount {
            expected: coder.num_outputs(),
            actual: sinks.len(),
        });
    }
    if block_size == 0 {
        return Err(StreamError::BlockSize);
    }

    let mut summary = StreamSummary {
        bytes_read: vec![0; sources.len()],
        ..Default::default()
    };
    let mut exhausted = vec![false; sources.len()];
    let mut blocks = RowMatrix::zeroed(sources.len(), block_size);

    loop {
        let mut max_n = 0;
        for (index, source) in sources.iter_mut().enumerate() {
            let block = blocks.row_mut(index);
            block.fill(0);
            if exhausted[index] {
                continue;
            }
            let n = read_full(source, block).map_err(|source| StreamError::Read { index, source })?;
            if n < block_size {
                exhausted[index] = true;
            }
            summary.bytes_read[index] += n as u64;
            max_n = max_n.max(n);
        }

        if max_n == 0 {
            break;
        }

        // only the final, short round needs its rows cut down
        let truncated;
        let input = if max_n == block_size {
            &blocks
        } else {
            let rows: Vec<&[u8]> = blocks.iter().map(|b| &b[..max_n]).collect();
            truncated = RowMatrix::from_rows(&rows)?;
            &truncated
        };

        let output = coder.code(input)?;
        for (index, (sink, row)) in sinks.iter_mut().zip(output.iter()).enumerate() {
            sink.write_all(row)
                .map_err(|source| StreamError::Write { index, source })?;
        }

        summary.rounds += 1;
        summary.bytes_written += max_n as u64;
        debug!(
            "Round {}: coded {} byte block ({} of {} inputs exhausted)",
            summary.rounds,
            max_n,
            exhausted.iter().filter(|&&e| e).count(),
            exhausted.len()
        );

        if exhausted.iter().all(|&e| e) {
            break;
        }
    }

    Ok(summary)
}
