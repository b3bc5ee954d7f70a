pub mod args;
pub mod cli_adapter;

pub use args::Cli;
pub use cli_adapter::{CliAdapter, CliError};
