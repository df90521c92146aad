/// CLI layer: argument parsing and output formatting.
pub mod args;
pub mod output;

pub use args::{Cli, Command, CommonArgs};
pub use output::{OutputFormat, write_error};
