//! Python virtual-environment bootstrap for pip projects.
//!
//! Every step is advisory: failures are logged as warnings and reported in
//! the returned [`BootstrapOutcome`], never propagated.
use std::path::{Path, PathBuf};

use crate::config::manifest::DEPENDENCY_LIST_PATHS;
use crate::exec::Executor;
use crate::logging::Log;

/// Virtual-environment directory inside the project root.
pub const VENV_DIR: &str = ".venv";

/// Interpreters tried, in order.
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

const PRE_COMMIT_CONFIG: &str = ".pre-commit-config.yaml";

/// What the bootstrap achieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Every step succeeded.
    Ready,
    /// Nothing was attempted.
    Skipped(String),
    /// Some steps failed; one warning per failure.
    Degraded(Vec<String>),
}

/// Path of an executable inside the virtual environment.
#[must_use]
pub fn venv_executable(root: &Path, name: &str) -> PathBuf {
    let venv = root.join(VENV_DIR);
    if cfg!(windows) {
        venv.join("Scripts").join(format!("{name}.exe"))
    } else {
        venv.join("bin").join(name)
    }
}

/// Create `.venv`, install the dependency lists present in `root`, and
/// install the pre-commit hooks.
pub fn bootstrap(root: &Path, executor: &dyn Executor, log: &dyn Log) -> BootstrapOutcome {
    let Some(python) = PYTHON_CANDIDATES.iter().find(|p| executor.which(p)) else {
        let reason = "no python interpreter found on PATH".to_string();
        log.warn(&reason);
        return BootstrapOutcome::Skipped(reason);
    };

    log.info(&format!("creating virtual environment with {python}"));
    if let Err(e) = executor.run_in(root, python, &["-m", "venv", VENV_DIR]) {
        let warning = format!("virtual environment not created: {e:#}");
        log.warn(&warning);
        return BootstrapOutcome::Degraded(vec![warning]);
    }

    let mut warnings = Vec::new();
    let pip = venv_executable(root, "pip");
    let pip = pip.to_string_lossy();
    for list in DEPENDENCY_LIST_PATHS {
        if !root.join(list).is_file() {
            continue;
        }
        log.info(&format!("installing {list}"));
        if let Err(e) = executor.run_in(root, &pip, &["install", "-r", list]) {
            let warning = format!("failed to install {list}: {e:#}");
            log.warn(&warning);
            warnings.push(warning);
        }
    }

    let pre_commit = venv_executable(root, "pre-commit");
    if root.join(PRE_COMMIT_CONFIG).is_file() && pre_commit.is_file() {
        log.info("installing pre-commit hooks");
        if let Err(e) = executor.run_in(root, &pre_commit.to_string_lossy(), &["install"]) {
            let warning = format!("pre-commit hooks not installed: {e:#}");
            log.warn(&warning);
            warnings.push(warning);
        }
    } else {
        log.debug("pre-commit not available in the virtual environment");
    }

    if warnings.is_empty() {
        BootstrapOutcome::Ready
    } else {
        BootstrapOutcome::Degraded(warnings)
    }
}
