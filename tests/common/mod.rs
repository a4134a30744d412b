// Shared helpers for integration tests.
//
// Provides a temporary target directory plus an isolated settings file, and
// a fluent builder so each test can seed stored defaults or pre-existing
// project files without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use forge_cli::cli::GlobalOpts;
use forge_cli::commands::CommandSetup;
use forge_cli::commands::new::{self, ScaffoldRequest};
use forge_cli::exec::SystemExecutor;
use forge_cli::logging::Logger;
use forge_cli::tasks::{Collaborators, ReconcileMode};

/// Name of the project directory created under the temporary root.
pub const PROJECT_DIR: &str = "demo";

/// An isolated scaffold target backed by a [`tempfile::TempDir`].
///
/// The target is `<tmp>/demo` and does not exist until a run creates it.
/// Stored settings live in `<tmp>/settings/config.toml`.
pub struct IntegrationTestContext {
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Project root.
    pub fn target(&self) -> PathBuf {
        self.root.path().join(PROJECT_DIR)
    }

    /// Settings file used by every run.
    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("settings").join("config.toml")
    }

    pub fn global(&self) -> GlobalOpts {
        GlobalOpts {
            config: Some(self.config_path()),
        }
    }

    /// A fresh-mode request with git and venv disabled.
    pub fn request(&self, input: &[(&str, &str)]) -> ScaffoldRequest {
        ScaffoldRequest {
            target: self.target(),
            input: input
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect::<BTreeMap<_, _>>(),
            mode: ReconcileMode::Fresh,
            dry_run: false,
            collaborators: Collaborators {
                init_repository: false,
                bootstrap_environment: false,
            },
        }
    }

    /// Run the scaffold pipeline with a fresh logger.
    pub fn scaffold(&self, request: &ScaffoldRequest) -> anyhow::Result<()> {
        let log = Arc::new(Logger::with_log_file(None));
        let setup = CommandSetup::init(&self.global(), &log)?;
        new::scaffold(&setup, request, &log, Arc::new(SystemExecutor))
    }

    /// Path of `rel` inside the project.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.target().join(rel)
    }

    /// Contents of `rel` inside the project.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path(rel))
            .unwrap_or_else(|e| panic!("read {rel}: {e}"))
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    pub fn is_dir(&self, rel: &str) -> bool {
        self.path(rel).is_dir()
    }
}

/// Write `content` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(&path, content).expect("write file");
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Write the stored settings file.
    pub fn with_settings(self, content: &str) -> Self {
        let path = self.ctx.config_path();
        std::fs::create_dir_all(path.parent().expect("settings parent")).expect("create settings dir");
        std::fs::write(&path, content).expect("write settings");
        self
    }

    /// Place a file in the target before any run.
    pub fn with_project_file(self, rel: &str, content: &str) -> Self {
        write_file(&self.ctx.target(), rel, content);
        self
    }

    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
