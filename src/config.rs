//! Optional defaults file loading

use crate::constants::{DEFAULT_GO_VERSION, DEFAULT_INITIAL_BRANCH, JSON_CONFIG_EXTENSION};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// User defaults applied underneath the command line flags.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Prefix joined with the project name to form the Go module path,
    /// e.g. `github.com/someone`.
    #[serde(default)]
    pub module_prefix: Option<String>,
    #[serde(default = "get_default_initial_branch")]
    pub initial_branch: String,
    #[serde(default = "get_default_go_version")]
    pub go_version: String,
    #[serde(default)]
    pub taskfile: bool,
    #[serde(default)]
    pub makefile: bool,
    #[serde(default)]
    pub dockerfile: bool,
    /// Directory holding files that replace the built-in templates of the same name.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            module_prefix: None,
            initial_branch: get_default_initial_branch(),
            go_version: get_default_go_version(),
            taskfile: false,
            makefile: false,
            dockerfile: false,
            templates_dir: None,
        }
    }
}

impl Config {
    /// Loads the config from `path`, or returns the defaults when no path is given.
    ///
    /// Files ending in `.json` are parsed as JSON, anything else as YAML.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigReadError {
            path: path.display().to_string(),
            e,
        })?;
        log::debug!("Loaded config from {}", path.display());

        Self::parse(&content, path.extension().and_then(|ext| ext.to_str()))
    }

    fn parse(content: &str, extension: Option<&str>) -> Result<Self> {
        let config: Self = match extension {
            Some(JSON_CONFIG_EXTENSION) => serde_json::from_str(content)?,
            _ if content.trim().is_empty() => Self::default(),
            _ => serde_yaml::from_str(content)?,
        };
        Ok(config)
    }

    /// Resolves the Go module path for `project_name`.
    ///
    /// An explicit module wins over the configured prefix.
    pub fn module_name(&self, explicit: Option<&str>, project_name: &str) -> String {
        match (explicit.filter(|m| !m.is_empty()), &self.module_prefix) {
            (Some(module), _) => module.to_string(),
            (None, Some(prefix)) if !prefix.is_empty() => {
                format!("{}/{}", prefix.trim_end_matches('/'), project_name)
            }
            _ => project_name.to_string(),
        }
    }
}

fn get_default_initial_branch() -> String {
    DEFAULT_INITIAL_BRANCH.to_string()
}

fn get_default_go_version() -> String {
    DEFAULT_GO_VERSION.to_string()
}
