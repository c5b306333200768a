//! Command-line interface for marklet
//! Converts a restricted Markdown dialect into HTML.
//!
//! Usage:
//!   marklet `<input.md>` `<output.html>`

use clap::{Arg, Command};
use std::path::Path;

fn main() {
    env_logger::init();

    let matches = Command::new("marklet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a restricted Markdown dialect into HTML")
        .arg(
            Arg::new("input")
                .help("Path to the Markdown file to convert")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Path the HTML output is written to")
                .required(true)
                .index(2),
        )
        .get_matches();

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let output = matches
        .get_one::<String>("output")
        .expect("output is required");

    if let Err(err) = marklet_core::convert_file(Path::new(input), Path::new(output)) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
