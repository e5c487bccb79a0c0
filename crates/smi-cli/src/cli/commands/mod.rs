//! CLI command handlers, one file per subcommand.

mod config;
mod import;
mod inspect;

pub use config::run_config;
pub use import::{run_import, ImportArgs};
pub use inspect::run_inspect;
