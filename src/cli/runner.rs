use crate::{
    cli::Args,
    config::Config,
    constants::{tools, DEFAULT_INITIAL_BRANCH},
    error::{Error, Result},
    ioutils::{create_dir_all, get_target_dir, write_new_file},
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    templates::{
        add_templates_in_renderer, feature_file, mandatory_files, Feature, ProjectFile,
        TemplateContext,
    },
    toolchain::{ensure_tools, DryRunToolchain, SystemToolchain, Toolchain},
};
use log::{error, info, warn};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Main CLI runner that creates a project step by step
pub struct Runner<'a> {
    args: Args,
    toolchain: &'a dyn Toolchain,
}

impl<'a> Runner<'a> {
    pub fn new(args: Args, toolchain: &'a dyn Toolchain) -> Self {
        Self { args, toolchain }
    }

    /// Executes the complete project creation workflow.
    ///
    /// Mandatory steps stop at the first error. Optional files only log a
    /// warning when they cannot be created.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - The directory of the new project
    pub fn run(self) -> Result<PathBuf> {
        let project_name = resolve_project_name(self.args.project_name.as_deref())?;
        let config = Config::load(self.args.config.as_deref())?;

        ensure_tools(self.toolchain, tools::REQUIRED)?;

        let parent_dir = match &self.args.parent_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        let target_dir = get_target_dir(&parent_dir, &project_name).inspect_err(|_| {
            error!("target dir {} already exists", parent_dir.join(&project_name).display())
        })?;

        let module_name = config.module_name(self.args.module.as_deref(), &project_name);
        let mut engine = MiniJinjaRenderer::new();
        add_templates_in_renderer(&mut engine, config.templates_dir.as_deref())?;
        let context = TemplateContext {
            project_name: &project_name,
            module_name: &module_name,
            go_version: &config.go_version,
        }
        .to_json();

        info!("Creating project in {}", target_dir.display());
        self.step("create target dir", || self.create_project_dir(&target_dir))?;

        self.step("init go module", || {
            log::debug!("Set go module to {module_name}");
            self.toolchain.run(&target_dir, tools::GO, &["mod", "init", module_name.as_str()])
        })?;

        self.step("init git repo", || {
            let branch = initial_branch_arg(&config.initial_branch);
            self.toolchain.run(&target_dir, tools::GIT, &["init", branch.as_str()])
        })?;

        for file in mandatory_files() {
            self.step(&format!("create {}", file.name), || {
                self.write_project_file(&engine, file, &target_dir, &context)
            })?;
        }

        for feature in self.enabled_features(&config) {
            self.create_optional_file(feature, &engine, &target_dir, &context);
        }

        if self.args.dry_run {
            println!("Dry run completed for {}.", target_dir.display());
        } else {
            println!("Project {project_name} created successfully in {}.", target_dir.display());
        }
        Ok(target_dir)
    }

    /// Runs a mandatory step, logging which one failed.
    fn step<T>(&self, description: &str, action: impl FnOnce() -> Result<T>) -> Result<T> {
        info!("{}", capitalize(description));
        action().inspect_err(|e| error!("{description} failed: {e}"))
    }

    fn create_optional_file(
        &self,
        feature: Feature,
        engine: &dyn TemplateRenderer,
        target_dir: &Path,
        context: &serde_json::Value,
    ) {
        if !self.toolchain.exists(feature.tool()) {
            warn!("{} binary does not exist on this system", feature.tool());
        }

        let file = feature_file(feature);
        info!("Create {}", file.name);
        if let Err(e) = self.write_project_file(engine, file, target_dir, context) {
            warn!("create {} failed: {e}", file.name);
        }
    }

    fn create_project_dir(&self, target_dir: &Path) -> Result<()> {
        if self.args.dry_run {
            info!("[dry-run] would create directory {}", target_dir.display());
            return Ok(());
        }
        create_dir_all(target_dir)
    }

    fn write_project_file(
        &self,
        engine: &dyn TemplateRenderer,
        file: &ProjectFile,
        target_dir: &Path,
        context: &serde_json::Value,
    ) -> Result<()> {
        let content = engine.render_named(file.name, context)?;
        let dest_path = target_dir.join(file.name);
        if self.args.dry_run {
            info!("[dry-run] would write {} ({} bytes)", dest_path.display(), content.len());
            return Ok(());
        }
        write_new_file(&content, dest_path)
    }

    /// Features requested on the command line or enabled in the config, in generation order.
    fn enabled_features(&self, config: &Config) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|feature| match feature {
                Feature::Taskfile => self.args.taskfile || config.taskfile,
                Feature::Makefile => self.args.makefile || config.makefile,
                Feature::Dockerfile => self.args.dockerfile || config.dockerfile,
            })
            .collect()
    }
}

/// Extracts the project directory name from the user supplied argument.
///
/// Only the last path component is kept, so `work/demo` yields `demo`.
pub fn resolve_project_name(raw: Option<&str>) -> Result<String> {
    let raw = raw.map(str::trim).filter(|name| !name.is_empty());
    let raw = raw.ok_or(Error::MissingProjectNameError)?;

    Path::new(raw)
        .file_name()
        .and_then(OsStr::to_str)
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidProjectNameError { name: raw.to_string() })
}

fn initial_branch_arg(branch: &str) -> String {
    let branch = if branch.trim().is_empty() { DEFAULT_INITIAL_BRANCH } else { branch.trim() };
    format!("--initial-branch={branch}")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    if args.dry_run {
        let toolchain = DryRunToolchain::new(SystemToolchain);
        Runner::new(args, &toolchain).run()?;
    } else {
        Runner::new(args, &SystemToolchain).run()?;
    }
    Ok(())
}
