pub mod config;
pub mod new;
pub mod profiles;
pub mod version;

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::GlobalOpts;
use crate::config::{ProfileRegistry, Settings};
use crate::logging::Logger;
use crate::tasks::{self, Context, Task};
use crate::templates::TemplateStore;
use crate::templates::personas::PersonaTable;

/// Shared state produced by the common command setup sequence.
///
/// Loads the embedded profiles and templates, validates the persona table
/// against the templates, and reads stored settings.
#[derive(Debug)]
pub struct CommandSetup {
    pub registry: ProfileRegistry,
    pub templates: Arc<TemplateStore>,
    pub personas: PersonaTable,
    pub settings: Settings,
    pub settings_path: Option<PathBuf>,
}

impl CommandSetup {
    /// Load every startup resource.
    ///
    /// An unreadable settings file is reported and treated as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded profiles or templates are invalid, or
    /// if a persona variant is missing from the templates.
    pub fn init(global: &GlobalOpts, log: &Logger) -> Result<Self> {
        let registry = ProfileRegistry::builtin().context("loading built-in profiles")?;
        let templates = TemplateStore::builtin().context("loading built-in templates")?;
        let personas = PersonaTable::builtin();
        personas
            .validate(&templates)
            .context("validating persona table")?;
        log.debug(&format!(
            "{} profiles, {} templates",
            registry.names().len(),
            templates.names().len()
        ));

        let settings_path = settings_path(global);
        let settings = match settings_path.as_deref() {
            Some(path) => Settings::load(path).unwrap_or_else(|e| {
                log.warn(&format!("ignoring stored settings: {e}"));
                Settings::default()
            }),
            None => Settings::default(),
        };

        Ok(Self {
            registry,
            templates: Arc::new(templates),
            personas,
            settings,
            settings_path,
        })
    }
}

/// `--config` if given, else the platform default location.
#[must_use]
pub fn settings_path(global: &GlobalOpts) -> Option<PathBuf> {
    global.config.clone().or_else(Settings::default_path)
}

/// Execute every task in order, print the summary, and bail if any task failed.
///
/// # Errors
///
/// Returns an error if one or more tasks recorded a failure.
pub fn run_tasks_to_completion<'a>(
    tasks: impl IntoIterator<Item = &'a dyn Task>,
    ctx: &Context,
    log: &Logger,
) -> Result<()> {
    for task in tasks {
        tasks::execute(task, ctx);
    }

    log.print_summary();

    let count = log.failure_count();
    if count > 0 {
        anyhow::bail!("{count} task(s) failed");
    }
    Ok(())
}
