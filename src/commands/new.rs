//! Command: scaffold a project.
use anyhow::{Context as _, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{CommandSetup, run_tasks_to_completion, version};
use crate::cli::{GlobalOpts, NewOpts};
use crate::config::render_context::{
    AUTHOR_NAME, LICENSE, PACKAGE_MANAGER, PERSONA, PROFILE, PROJECT_NAME, PYTHON_VERSION,
};
use crate::config::{Manifest, RenderContext};
use crate::exec::{Executor, SystemExecutor};
use crate::logging::{Log, Logger};
use crate::resources::fs::check_greenfield;
use crate::tasks::{self, Collaborators, Context, ReconcileMode};
use crate::templates::TemplateRenderer;
use crate::wizard;

/// Everything a scaffold run needs besides the loaded startup resources.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// Absolute project root.
    pub target: PathBuf,
    /// Raw key/value input (flags or wizard answers).
    pub input: BTreeMap<String, String>,
    pub mode: ReconcileMode,
    pub dry_run: bool,
    pub collaborators: Collaborators,
}

impl ScaffoldRequest {
    /// Build a request from command-line options.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_opts(opts: &NewOpts) -> Result<Self> {
        let target = resolve_target(opts.target.as_deref())?;
        let input = flag_input(opts, &target);
        Ok(Self {
            target,
            input,
            mode: ReconcileMode::from_flags(opts.update, opts.force),
            dry_run: opts.dry_run,
            collaborators: Collaborators {
                init_repository: !opts.no_git,
                bootstrap_environment: !opts.no_venv,
            },
        })
    }
}

/// Run the new command.
///
/// # Errors
///
/// Returns an error if setup fails, the fresh-mode target is not empty, the
/// wizard fails, or any task fails.
pub fn run(global: &GlobalOpts, opts: &NewOpts, log: &Arc<Logger>) -> Result<()> {
    log.info(&format!("forge {}", version::version()));
    let setup = CommandSetup::init(global, log)?;
    let mut request = ScaffoldRequest::from_opts(opts)?;

    if opts.interactive {
        // Gate before prompting so the user is not asked questions for nothing.
        if request.mode == ReconcileMode::Fresh {
            check_greenfield(&request.target)?;
        }
        let defaults = RenderContext::build(&request.input, &setup.settings);
        let profiles = setup.registry.names();
        let personas = setup.personas.names();
        request.input = wizard::run(
            &mut std::io::stdin().lock(),
            &mut std::io::stdout(),
            &defaults,
            &wizard::Choices {
                profiles: &profiles,
                personas: &personas,
            },
        )?;
    }

    scaffold(&setup, &request, log, Arc::new(SystemExecutor))
}

/// Resolve the manifest and reconcile `request.target` with it.
///
/// # Errors
///
/// Returns an error if the fresh-mode target is not empty, a manifest path is
/// unsafe, the target cannot be created, or any task fails.
pub fn scaffold(
    setup: &CommandSetup,
    request: &ScaffoldRequest,
    log: &Arc<Logger>,
    executor: Arc<dyn Executor>,
) -> Result<()> {
    if request.mode == ReconcileMode::Fresh {
        check_greenfield(&request.target)?;
    }

    log.stage("Resolving manifest");
    let mut render = RenderContext::build(&request.input, &setup.settings);
    if !setup.registry.contains(&render.profile) {
        log.warn(&format!(
            "unknown profile '{}', using '{}'",
            render.profile,
            setup.registry.default_name()
        ));
        render.profile = setup.registry.default_name().to_string();
    }
    let profile = setup.registry.get(&render.profile);
    if !setup.personas.names().contains(&render.persona.as_str()) {
        log.warn(&format!(
            "unknown persona '{}': behavior rules will not render",
            render.persona
        ));
    }
    log.info(&format!(
        "profile: {}, persona: {}, package manager: {}",
        render.profile, render.persona, render.package_manager
    ));

    let manifest = Manifest::resolve(
        profile,
        &render.persona,
        render.package_manager,
        &setup.personas,
    )?;
    log.info(&format!(
        "{} directories, {} files",
        manifest.directories.len(),
        manifest.files.len()
    ));

    if !request.dry_run {
        std::fs::create_dir_all(&request.target)
            .with_context(|| format!("creating {}", request.target.display()))?;
    }

    let templates: Arc<dyn TemplateRenderer> = Arc::clone(&setup.templates) as _;
    let ctx = Context::new(
        request.target.clone(),
        manifest,
        render,
        templates,
        request.mode,
        Arc::clone(log) as Arc<dyn Log>,
        request.dry_run,
        executor,
    )
    .with_collaborators(request.collaborators);

    let all_tasks = tasks::all_scaffold_tasks();
    run_tasks_to_completion(all_tasks.iter().map(AsRef::as_ref), &ctx, log)
}

/// Absolute target directory; canonical when it already exists.
fn resolve_target(target: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("determining current directory")?;
    let target = target.map_or_else(|| cwd.clone(), |t| cwd.join(t));
    Ok(dunce::canonicalize(&target).unwrap_or(target))
}

/// Map the context flags to builder keys. The project name defaults to the
/// target directory's name.
fn flag_input(opts: &NewOpts, target: &Path) -> BTreeMap<String, String> {
    let dir_name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned());
    [
        (PROJECT_NAME, opts.name.clone().or(dir_name)),
        (AUTHOR_NAME, opts.author.clone()),
        (LICENSE, opts.license.clone()),
        (PYTHON_VERSION, opts.python_version.clone()),
        (PACKAGE_MANAGER, opts.package_manager.clone()),
        (PROFILE, opts.profile.clone()),
        (PERSONA, opts.persona.clone()),
    ]
    .into_iter()
    .filter_map(|(k, v)| v.map(|v| (k.to_string(), v)))
    .collect()
}
