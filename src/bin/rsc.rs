//! Command-line Reed-Solomon encoder/decoder
//!
//! Encodes the named input files to the named output files by interpolating
//! a polynomial in GF(2^8) through the bytes of input file `i` at the i'th
//! abscissa given to `-i`, and evaluating it at the abscissae given to `-o`.
//!
//! ```text
//! rsc -i 0,1,2 -o 3,4,5 foo0 foo1 foo2 foo.rs3 foo.rs4 foo.rs5
//! ```
//!
//! produces three code files. Any three of the six then recover the rest:
//!
//! ```text
//! rsc -i 0,3,5 -o 1 foo0 foo.rs3 foo.rs5 foo1
//! ```
//!
//! Outputs are zero-padded to the longest input, so recovered files may be
//! longer than the originals. Original lengths, the degree and the abscissa
//! of every file have to be tracked separately.

use anyhow::{bail, Context, Result};
use log::info;
use rscoder::{encode_streams, parse_args, CoderConfig};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = parse_args();
    let config = CoderConfig::from_args(&matches);
    let files: Vec<&String> = matches
        .get_many::<String>("files")
        .map(|values| values.collect())
        .unwrap_or_default();

    config.validate()?;
    if files.len() != config.stream_count() {
        bail!(
            "Please specify as many input and output files as values to -i and -o \
             (expected {}, got {})",
            config.stream_count(),
            files.len()
        );
    }

    let coder = config.build_coder()?;
    let (input_paths, output_paths) = files.split_at(coder.degree());

    let mut sources = input_paths
        .iter()
        .map(|path| {
            File::open(path).with_context(|| format!("Could not open {} for reading", path))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut sinks = output_paths
        .iter()
        .map(|path| {
            File::create(path)
                .map(BufWriter::new)
                .with_context(|| format!("Could not open {} for writing", path))
        })
        .collect::<Result<Vec<_>>>()?;

    let summary = encode_streams(&coder, &mut sources, &mut sinks, config.block_size)
        .context("Coding failed")?;

    for (sink, path) in sinks.iter_mut().zip(output_paths) {
        sink.flush()
            .with_context(|| format!("Error closing {}", path))?;
    }

    info!(
        "Coded {} blocks, {} bytes per output",
        summary.rounds, summary.bytes_written
    );
    Ok(())
}
