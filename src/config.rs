//! Configuration for stream coding

use crate::reed_solomon::{CodingError, ErasureCoder};
use thiserror::Error;

/// Default block size: 128 KiB
pub const DEFAULT_BLOCK_SIZE: usize = 128 * 1024;

/// Errors from building or validating a configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid abscissa {value:?}: expected an integer in 0..=255")]
    InvalidAbscissa { value: String },

    #[error("Please specify both input and output abscissae -i <byte>,... and -o <byte>,...")]
    MissingAbscissae,

    #[error("Block size must be nonzero")]
    ZeroBlockSize,

    #[error(transparent)]
    Coding(#[from] CodingError),
}

/// Parse a comma separated list of byte values, e.g. `"0,1,2"`.
///
/// An empty string gives an empty list.
pub fn parse_abscissae(s: &str) -> Result<Vec<u8>, ConfigError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|v| {
            v.trim().parse::<u8>().map_err(|_| ConfigError::InvalidAbscissa {
                value: v.to_string(),
            })
        })
        .collect()
}

/// Abscissae and block size for one coding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoderConfig {
    pub input_abscissae: Vec<u8>,
    pub output_abscissae: Vec<u8>,
    /// Bytes read from every input per round
    pub block_size: usize,
}

impl Default for CoderConfig {
    fn default() -> Self {
        Self {
            input_abscissae: Vec::new(),
            output_abscissae: Vec::new(),
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl CoderConfig {
    pub fn new(input_abscissae: Vec<u8>, output_abscissae: Vec<u8>, block_size: usize) -> Self {
        Self {
            input_abscissae,
            output_abscissae,
            block_size,
        }
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let abscissae = |id: &str| {
            matches
                .get_one::<Vec<u8>>(id)
                .cloned()
                .unwrap_or_default()
        };

        let block_size = matches
            .get_one::<usize>("block_size")
            .copied()
            .unwrap_or(DEFAULT_BLOCK_SIZE);

        Self::new(abscissae("inputs"), abscissae("outputs"), block_size)
    }

    /// Number of file operands the configuration expects
    pub fn stream_count(&self) -> usize {
        self.input_abscissae.len() + self.output_abscissae.len()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_abscissae.is_empty() || self.output_abscissae.is_empty() {
            return Err(ConfigError::MissingAbscissae);
        }
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        Ok(())
    }

    /// Validate and build the coder this configuration describes
    pub fn build_coder(&self) -> Result<ErasureCoder, ConfigError> {
        self.validate()?;
        Ok(ErasureCoder::new(
            &self.input_abscissae,
            &self.output_abscissae,
        )?)
    }
}
