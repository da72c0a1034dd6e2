//! Subcommand implementations.

mod build;
mod checksum;
mod completions;
mod parse;

pub use build::run_build;
pub use checksum::run_checksum;
pub use completions::run_completions;
pub use parse::run_parse;
