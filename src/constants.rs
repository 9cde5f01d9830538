//! Constants used throughout the goinit application

/// Output file names of the generated project files
pub mod files {
    pub const GITIGNORE: &str = ".gitignore";
    pub const README: &str = "README.md";
    pub const MAIN_GO: &str = "main.go";
    pub const TASKFILE: &str = "Taskfile.yml";
    pub const MAKEFILE: &str = "Makefile";
    pub const DOCKERFILE: &str = "Dockerfile";
}

/// External executables goinit relies on
pub mod tools {
    pub const GIT: &str = "git";
    pub const GO: &str = "go";
    pub const TASK: &str = "task";
    pub const MAKE: &str = "make";
    pub const DOCKER: &str = "docker";

    /// Tools that must be present before anything is created.
    pub const REQUIRED: &[&str] = &[GIT, GO];
}

/// Default branch passed to `git init`
pub const DEFAULT_INITIAL_BRANCH: &str = "main";

/// Default Go version used by the Dockerfile base image
pub const DEFAULT_GO_VERSION: &str = "1.22";

/// Extension that selects the JSON parser for config files
pub const JSON_CONFIG_EXTENSION: &str = "json";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
