//! Built-in project file templates and their registration in a renderer.

use crate::constants::{files, tools};
use crate::error::Result;
use crate::renderer::TemplateRenderer;
use serde_json::json;
use std::fmt::Display;
use std::path::Path;

/// Optional files that are only generated when requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Taskfile,
    Makefile,
    Dockerfile,
}

impl Feature {
    /// All features, in generation order.
    pub const ALL: [Feature; 3] = [Feature::Taskfile, Feature::Makefile, Feature::Dockerfile];

    /// The executable that consumes the generated file.
    pub fn tool(&self) -> &'static str {
        match self {
            Feature::Taskfile => tools::TASK,
            Feature::Makefile => tools::MAKE,
            Feature::Dockerfile => tools::DOCKER,
        }
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Feature::Taskfile => "taskfile",
            Feature::Makefile => "makefile",
            Feature::Dockerfile => "dockerfile",
        };
        write!(f, "{s}")
    }
}

/// A file written into a new project.
#[derive(Debug)]
pub struct ProjectFile {
    /// Output file name, also the name the template is registered under.
    pub name: &'static str,
    /// Embedded template source.
    pub source: &'static str,
    /// `None` for files every project gets.
    pub feature: Option<Feature>,
}

const GITIGNORE: ProjectFile = ProjectFile {
    name: files::GITIGNORE,
    source: include_str!("../templates/gitignore.j2"),
    feature: None,
};

const README: ProjectFile = ProjectFile {
    name: files::README,
    source: include_str!("../templates/README.md.j2"),
    feature: None,
};

const MAIN_GO: ProjectFile = ProjectFile {
    name: files::MAIN_GO,
    source: include_str!("../templates/main.go.j2"),
    feature: None,
};

const TASKFILE: ProjectFile = ProjectFile {
    name: files::TASKFILE,
    source: include_str!("../templates/Taskfile.yml.j2"),
    feature: Some(Feature::Taskfile),
};

const MAKEFILE: ProjectFile = ProjectFile {
    name: files::MAKEFILE,
    source: include_str!("../templates/Makefile.j2"),
    feature: Some(Feature::Makefile),
};

const DOCKERFILE: ProjectFile = ProjectFile {
    name: files::DOCKERFILE,
    source: include_str!("../templates/Dockerfile.j2"),
    feature: Some(Feature::Dockerfile),
};

/// Every file goinit knows how to generate, mandatory files first.
pub const PROJECT_FILES: &[ProjectFile] =
    &[GITIGNORE, README, MAIN_GO, TASKFILE, MAKEFILE, DOCKERFILE];

/// Files generated for every project.
pub fn mandatory_files() -> impl Iterator<Item = &'static ProjectFile> {
    PROJECT_FILES.iter().filter(|file| file.feature.is_none())
}

/// The file generated for `feature`.
pub fn feature_file(feature: Feature) -> &'static ProjectFile {
    match feature {
        Feature::Taskfile => &TASKFILE,
        Feature::Makefile => &MAKEFILE,
        Feature::Dockerfile => &DOCKERFILE,
    }
}

/// Values available to every template.
#[derive(Debug)]
pub struct TemplateContext<'a> {
    pub project_name: &'a str,
    pub module_name: &'a str,
    pub go_version: &'a str,
}

impl TemplateContext<'_> {
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "project_name": self.project_name,
            "module_name": self.module_name,
            "go_version": self.go_version,
        })
    }
}

/// Registers the built-in templates, then any same-named replacements from `overrides_dir`.
pub fn add_templates_in_renderer(
    engine: &mut dyn TemplateRenderer,
    overrides_dir: Option<&Path>,
) -> Result<()> {
    for file in PROJECT_FILES {
        engine.add_template(file.name, file.source)?;
    }

    let Some(overrides_dir) = overrides_dir else {
        return Ok(());
    };
    for file in PROJECT_FILES {
        let path = overrides_dir.join(file.name);
        if path.is_file() {
            log::debug!("Overriding template {} with {}", file.name, path.display());
            let content = std::fs::read_to_string(&path)?;
            engine.add_template(file.name, &content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MiniJinjaRenderer;

    fn context() -> serde_json::Value {
        TemplateContext {
            project_name: "demo",
            module_name: "github.com/someone/demo",
            go_version: "1.22",
        }
        .to_json()
    }

    fn rendered(name: &str) -> String {
        let mut engine = MiniJinjaRenderer::new();
        add_templates_in_renderer(&mut engine, None).unwrap();
        engine.render_named(name, &context()).unwrap()
    }

    #[test]
    fn mandatory_files_in_order() {
        let names: Vec<_> = mandatory_files().map(|f| f.name).collect();
        assert_eq!(names, vec![".gitignore", "README.md", "main.go"]);
    }

    #[test]
    fn every_feature_has_a_file() {
        for feature in Feature::ALL {
            assert_eq!(feature_file(feature).feature, Some(feature), "wrong file for {feature}");
            assert!(PROJECT_FILES.iter().any(|f| f.name == feature_file(feature).name));
        }
        assert_eq!(feature_file(Feature::Makefile).name, "Makefile");
        assert_eq!(Feature::Dockerfile.tool(), "docker");
    }

    #[test]
    fn readme_has_project_heading() {
        assert_eq!(rendered("README.md"), "# demo\n\n");
    }

    #[test]
    fn main_go_greets_project() {
        let main_go = rendered("main.go");
        assert!(main_go.starts_with("package main\n"));
        assert!(main_go.contains(r#"fmt.Println("Hello demo")"#));
    }

    #[test]
    fn gitignore_is_static() {
        let gitignore = rendered(".gitignore");
        assert!(gitignore.contains("bin/\n"));
        assert!(gitignore.contains(".envrc\n"));
    }

    #[test]
    fn makefile_keeps_make_variables() {
        let makefile = rendered("Makefile");
        assert!(makefile.contains("${MAKEFILE_LIST}"));
        assert!(makefile.contains("-o=./bin/demo ."));
        assert!(makefile.contains("\tgo fmt ./...\n"));
    }

    #[test]
    fn taskfile_keeps_task_variables() {
        let taskfile = rendered("Taskfile.yml");
        assert!(taskfile.contains("APP_NAME: demo\n"));
        assert!(taskfile.contains("./bin/{{.APP_NAME}} {{.CLI_ARGS}}"));
    }

    #[test]
    fn dockerfile_uses_go_version() {
        let dockerfile = rendered("Dockerfile");
        assert!(dockerfile.starts_with("FROM golang:1.22-alpine AS build\n"));
        assert!(dockerfile.contains(r#"ENTRYPOINT ["/usr/local/bin/demo"]"#));
    }

    #[test]
    fn overrides_replace_builtin_templates() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("README.md"), "Custom {{ module_name }}\n").unwrap();

        let mut engine = MiniJinjaRenderer::new();
        add_templates_in_renderer(&mut engine, Some(tmp.path())).unwrap();

        assert_eq!(
            engine.render_named("README.md", &context()).unwrap(),
            "Custom github.com/someone/demo\n"
        );
        assert!(engine.render_named("main.go", &context()).unwrap().contains("Hello demo"));
    }
}
