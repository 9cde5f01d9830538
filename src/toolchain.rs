use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Access to the external executables a project is initialised with.
pub trait Toolchain {
    /// Returns whether `program` can be found on the system.
    fn exists(&self, program: &str) -> bool;

    /// Runs `program` with `args` inside `dir` and waits for it to finish.
    ///
    /// # Returns
    /// * `Result<()>` - Error if the program is missing or exits unsuccessfully
    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<()>;
}

impl<T: Toolchain + ?Sized> Toolchain for &T {
    fn exists(&self, program: &str) -> bool {
        (**self).exists(program)
    }

    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<()> {
        (**self).run(dir, program, args)
    }
}

/// Toolchain backed by the executables on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemToolchain;

impl Toolchain for SystemToolchain {
    fn exists(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<()> {
        let command_line = format_command(program, args);
        log::debug!("Running '{command_line}' in {}", dir.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    Error::ToolNotFoundError { tool: program.to_string() }
                }
                _ => Error::IoError(e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stdout.trim().is_empty() {
            log::debug!("{program} stdout: {}", stdout.trim());
        }
        if !stderr.trim().is_empty() {
            log::debug!("{program} stderr: {}", stderr.trim());
        }

        if !output.status.success() {
            return Err(Error::CommandExecutionError {
                command: command_line,
                status: output.status,
                stderr: stderr.trim().to_string(),
            });
        }
        Ok(())
    }
}

/// Toolchain that only reports the commands it would run.
///
/// Lookups are forwarded so missing tools are still reported.
pub struct DryRunToolchain<T: Toolchain> {
    inner: T,
}

impl<T: Toolchain> DryRunToolchain<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: Toolchain> Toolchain for DryRunToolchain<T> {
    fn exists(&self, program: &str) -> bool {
        self.inner.exists(program)
    }

    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<()> {
        log::info!("[dry-run] would run '{}' in {}", format_command(program, args), dir.display());
        Ok(())
    }
}

/// Checks that every program in `required` is available.
pub fn ensure_tools(toolchain: &dyn Toolchain, required: &[&str]) -> Result<()> {
    for program in required {
        if !toolchain.exists(program) {
            return Err(Error::ToolNotFoundError { tool: program.to_string() });
        }
        log::trace!("Found required tool {program}");
    }
    Ok(())
}

fn format_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ")
}
