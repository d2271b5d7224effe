//! Command-line surface: argument parsing, the scaffolding runner and the
//! closing report.

pub mod args;
pub mod report;
pub mod runner;

pub use args::{
    get_log_level_from_verbose, normalize_legacy_flags, parse_cli, Args, Cli, Commands,
    CommonArgs, InitArgs,
};
pub use runner::{run, Runner};
