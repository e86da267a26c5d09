//! Systematic Reed-Solomon erasure coding over GF(2^8).
//!
//! The [`reed_solomon`] module holds the pure computational core: field
//! arithmetic, Lagrange coefficient matrices and the [`ErasureCoder`].
//! [`stream`] drives a coder over readers and writers block by block, and
//! [`config`]/[`args`] back the `rsc` command-line tool.

pub mod args;
pub mod config;
pub mod reed_solomon;
pub mod stream;

pub use args::parse_args;
pub use config::CoderConfig;
pub use reed_solomon::{CodingError, ErasureCoder, RowMatrix};
pub use stream::{encode_streams, StreamSummary};
