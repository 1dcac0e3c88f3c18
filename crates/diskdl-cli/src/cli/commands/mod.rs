//! CLI command handlers, one file per command.

mod checksum;
mod completions;
mod config;
mod get;
mod resolve;

pub use checksum::run_checksum;
pub use completions::run_completions;
pub use config::run_config;
pub use get::{run_get, GetArgs};
#[cfg(test)]
pub(crate) use get::target_dir;
pub use resolve::run_resolve;
