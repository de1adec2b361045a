//! Bill Splitter CLI
//!
//! Reads a restaurant bill in JSON form, splits it among the people named
//! on it, and writes a per-person settlement as JSON or a text report.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --input=bill.json --output=result.json
//! cargo run -- --input=bills/ --output=results/ --format=text
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use bill_splitter::{processor, Result};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = processor::Options::parse(env::args().skip(1))?;
    processor::run(&options)
}
