//! CLI command handlers. Each command is in its own file.

mod config;
mod import;
mod list;

pub use config::run_config;
pub use import::{run_import, ImportArgs};
pub use list::run_list;
