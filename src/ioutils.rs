use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Computes the project directory and ensures nothing is there yet.
pub fn get_target_dir<P: AsRef<Path>>(parent_dir: P, project_name: &str) -> Result<PathBuf> {
    let target_dir = parent_dir.as_ref().join(project_name);
    if target_dir.exists() {
        return Err(Error::TargetDirectoryExistsError {
            target_dir: target_dir.display().to_string(),
        });
    }
    Ok(target_dir)
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Writes `content` to a file that must not exist yet.
///
/// Any existing entry at `dest_path`, including a dangling symlink, is an error.
pub fn write_new_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest_path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => {
                Error::FileExistsError { path: dest_path.display().to_string() }
            }
            _ => Error::IoError(e),
        })?;
    file.write_all(content.as_bytes()).map_err(Error::IoError)
}
