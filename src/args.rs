use crate::config::parse_abscissae;
use clap::{value_parser, Arg, Command};

/// Command-line definition for `rsc`
pub fn build_cli() -> Command {
    Command::new("rsc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon encode/decode files over GF(2^8)")
        .long_about(
            "Reed-Solomon encodes or decodes files over GF(2^8).\n\n\
             Interpolates a polynomial through the bytes of each input file, taken at the \
             abscissae given with -i, and evaluates it at the abscissae given with -o to \
             produce the output files. Any k of the files together with their abscissae \
             reconstruct the others. Outputs are zero-padded to the longest input.",
        )
        .arg(
            Arg::new("inputs")
                .short('i')
                .long("inputs")
                .help("Comma separated input abscissae, one per input file")
                .value_name("BYTE,...")
                .required(true)
                .value_parser(|s: &str| parse_abscissae(s).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::new("outputs")
                .short('o')
                .long("outputs")
                .help("Comma separated output abscissae, one per output file")
                .value_name("BYTE,...")
                .required(true)
                .value_parser(|s: &str| parse_abscissae(s).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::new("block_size")
                .short('s')
                .long("block-size")
                .help("Bytes read from every input per round (default: 131072)")
                .value_name("BYTES")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("files")
                .help("Input files followed by output files")
                .required(true)
                .num_args(1..),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_cli().get_matches()
}
