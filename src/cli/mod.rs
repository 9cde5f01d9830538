pub mod args;
pub mod runner;

pub use args::{get_log_level_from_verbose, parse_cli, print_usage, Args};
pub use runner::{run, Runner};
