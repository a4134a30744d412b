use anyhow::Result;

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::resources::file::FileResource;

/// Write every manifest file according to the reconciliation mode.
///
/// A file that fails to render is reported and skipped; the remaining files
/// are still written and the task fails at the end.
#[derive(Debug)]
pub struct WriteFiles;

impl Task for WriteFiles {
    fn name(&self) -> &str {
        "Write files"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.manifest.files.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let resources = ctx.manifest.files.iter().map(|file| {
            FileResource::new(
                &ctx.root,
                &file.path,
                &file.source,
                &ctx.vars,
                ctx.templates.as_ref(),
            )
        });
        process_resources(
            ctx,
            resources,
            &ProcessOpts::for_mode("write", ctx.mode).no_bail(),
        )
    }
}
