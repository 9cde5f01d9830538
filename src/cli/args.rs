use crate::constants::verbosity;
use clap::{CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for goinit.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "goinit", author, version, about, long_about = None)]
pub struct Args {
    /// Name of the project directory; only the last path component is used.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Init project with a Taskfile.
    #[arg(short, long)]
    pub taskfile: bool,

    /// Init project with a Makefile.
    #[arg(short, long)]
    pub makefile: bool,

    /// Init project with a Dockerfile.
    #[arg(short, long)]
    pub dockerfile: bool,

    /// Go module name (default: project name).
    #[arg(long = "module", visible_alias = "gm", value_name = "MODULE")]
    pub module: Option<String>,

    /// Directory in which the project is created (default: current directory).
    #[arg(short = 'C', long = "parent-dir", value_name = "DIR")]
    pub parent_dir: Option<PathBuf>,

    /// Defaults file (JSON or YAML).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Parse command line arguments. `--help` and `--version` exit here.
pub fn parse_cli() -> Args {
    Args::parse()
}

/// Prints the usage text to stderr.
pub fn print_usage() {
    let mut command = Args::command().help_template(HELP_TEMPLATE);
    let help = command.render_help();
    eprintln!("{help}");
}

/// Map `-v` counts to the appropriate log level. Warnings are always shown.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Warn,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
