/// Handles argument parsing and the project creation workflow.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across the crate.
pub mod constants;

/// Optional user defaults file.
pub mod config;

/// Template rendering functionality.
pub mod renderer;

/// Embedded project file templates.
pub mod templates;

/// Lookup and execution of external tools such as `go` and `git`.
pub mod toolchain;

/// A set of helpers for working with the file system.
pub mod ioutils;
