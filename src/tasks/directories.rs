use anyhow::Result;

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::resources::directory::DirectoryResource;

/// Create every directory in the manifest, in order.
#[derive(Debug)]
pub struct CreateDirectories;

impl Task for CreateDirectories {
    fn name(&self) -> &str {
        "Create directories"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.manifest.directories.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let resources = ctx
            .manifest
            .directories
            .iter()
            .map(|dir| DirectoryResource::new(&ctx.root, dir));
        process_resources(ctx, resources, &ProcessOpts::create_missing("create"))
    }
}
