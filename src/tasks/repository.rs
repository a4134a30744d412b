use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::vcs;

/// Initialize a git repository with `main` and `develop` branches.
#[derive(Debug)]
pub struct InitRepository;

impl Task for InitRepository {
    fn name(&self) -> &str {
        "Initialize repository"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.collaborators.init_repository
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        if vcs::is_repository(&ctx.root) {
            return Ok(TaskResult::Skipped(
                "repository already initialized".to_string(),
            ));
        }
        if ctx.dry_run {
            ctx.log.dry_run(&format!(
                "would initialize repository on {} and check out {}",
                vcs::INITIAL_BRANCH,
                vcs::WORKING_BRANCH
            ));
            return Ok(TaskResult::DryRun);
        }
        let commit = vcs::init_repository(&ctx.root, &ctx.render.author_name)?;
        ctx.log.info(&format!(
            "committed {commit} on {}, checked out {}",
            vcs::INITIAL_BRANCH,
            vcs::WORKING_BRANCH
        ));
        Ok(TaskResult::Ok)
    }
}
