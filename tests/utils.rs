#![allow(dead_code)]

use goinit::cli::Args;
use goinit::error::{Error, Result};
use goinit::toolchain::Toolchain;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// A single recorded toolchain invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub dir: PathBuf,
    pub program: String,
    pub args: Vec<String>,
}

/// Toolchain double that records calls instead of spawning processes.
///
/// `go` writes a `go.mod` and `git` creates `.git`, mimicking the real tools.
#[derive(Default)]
pub struct RecordingToolchain {
    /// Programs reported as absent from the system.
    pub missing: Vec<&'static str>,
    /// Programs whose invocation fails.
    pub failing: Vec<&'static str>,
    /// Extra files `git init` leaves behind in the project directory.
    pub git_init_creates: Vec<&'static str>,
    pub(crate) calls: RefCell<Vec<Call>>,
}

impl RecordingToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|call| std::iter::once(call.program).chain(call.args).collect::<Vec<_>>().join(" "))
            .collect()
    }
}

impl Toolchain for RecordingToolchain {
    fn exists(&self, program: &str) -> bool {
        !self.missing.contains(&program)
    }

    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<()> {
        self.calls.borrow_mut().push(Call {
            dir: dir.to_path_buf(),
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        });

        if self.failing.contains(&program) {
            return Err(Error::ToolNotFoundError { tool: program.to_string() });
        }

        match (program, args) {
            ("go", ["mod", "init", module]) => {
                std::fs::write(dir.join("go.mod"), format!("module {module}\n\ngo 1.22\n"))?;
            }
            ("git", ["init", ..]) => {
                std::fs::create_dir(dir.join(".git"))?;
                for name in &self.git_init_creates {
                    std::fs::write(dir.join(name), "pre-existing\n")?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Args for creating `project_name` below `parent_dir` with every option off.
pub fn args_for(project_name: &str, parent_dir: &Path) -> Args {
    Args {
        project_name: Some(project_name.to_string()),
        parent_dir: Some(parent_dir.to_path_buf()),
        ..Default::default()
    }
}

pub fn read(path: impl AsRef<Path>) -> String {
    std::fs::read_to_string(path.as_ref())
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.as_ref().display()))
}
