use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::config::PackageManager;
use crate::environment::{self, BootstrapOutcome, VENV_DIR};

/// Create the virtual environment and install dependencies (pip projects only).
///
/// Never fails the run: problems are warnings.
#[derive(Debug)]
pub struct BootstrapEnvironment;

impl Task for BootstrapEnvironment {
    fn name(&self) -> &str {
        "Bootstrap environment"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.collaborators.bootstrap_environment
            && ctx.render.package_manager == PackageManager::Pip
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        if ctx.dry_run {
            ctx.log
                .dry_run(&format!("would create {VENV_DIR} and install dependencies"));
            return Ok(TaskResult::DryRun);
        }
        Ok(
            match environment::bootstrap(&ctx.root, ctx.executor.as_ref(), ctx.log.as_ref()) {
                BootstrapOutcome::Ready => TaskResult::Ok,
                BootstrapOutcome::Skipped(reason) => TaskResult::Skipped(reason),
                BootstrapOutcome::Degraded(warnings) => TaskResult::Skipped(format!(
                    "completed with {} warning(s)",
                    warnings.len()
                )),
            },
        )
    }
}
