//! Command-line front end.
//!
//! - `solve <FILE>` reads a JSON table
//! - `random` generates seeded tables, in parallel when `--count` > 1
//! - `prompt` asks for every field on the terminal
mod args;
mod batch;
mod prompt;

pub use args::*;
pub use batch::*;
pub use prompt::*;
