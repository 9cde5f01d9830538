use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to parse JSON config. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML config. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Cannot read config file '{path}'. Original error: {e}")]
    ConfigReadError { path: String, e: std::io::Error },

    #[error("No project name specified.")]
    MissingProjectNameError,

    #[error("Invalid project name: '{name}'.")]
    InvalidProjectNameError { name: String },

    #[error("Cannot proceed: target directory '{target_dir}' already exists.")]
    TargetDirectoryExistsError { target_dir: String },

    #[error("Cannot proceed: file '{path}' already exists.")]
    FileExistsError { path: String },

    #[error("Unknown template: '{name}'.")]
    TemplateNotFoundError { name: String },

    /// A required executable could not be located on `PATH`.
    #[error("{tool} not found")]
    ToolNotFoundError { tool: String },

    /// The command has executed but finished with an error.
    #[error("Command '{command}' failed with status: {status}. {stderr}")]
    CommandExecutionError {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Convenience type alias for Results with goinit's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and the usage, then exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message and the usage text to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    crate::cli::print_usage();
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
