use std::path::PathBuf;

use clap::{value_parser, Arg, Command};

pub fn build_cli() -> Command {
    Command::new("combine_barcodes")
        .version("0.1.0")
        .about("Combine forward and reverse index reads into a single barcode file")
        .arg_required_else_help(true)
        .arg(
            Arg::new("dir")
                .help("Run directory containing the index read files")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
}
