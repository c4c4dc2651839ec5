//! Minimum-Cost Transportation Binary
//!
//! Solves a transportation table read from a JSON file, generated at
//! random, or typed in at the prompt, and prints the allocation trace.

use clap::Parser;
use mincost::*;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    log(args.level(), args.log_file.as_deref())?;
    args.run()
}
