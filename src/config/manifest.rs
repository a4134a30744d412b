//! Resolution of a profile into the concrete manifest for one run.
use std::path::{Component, Path, PathBuf};

use super::profiles::{ContentSource, Profile};
use super::render_context::PackageManager;
use crate::error::ScaffoldError;
use crate::templates::personas::{PersonaTable, STANDARD_PERSONA};

/// Behavior-rules file whose template depends on the persona.
pub const BEHAVIOR_RULES_PATH: &str = ".agent/rules/ai_behavior.md";

/// Dependency lists that only make sense for pip projects.
pub const DEPENDENCY_LIST_PATHS: [&str; 2] = ["requirements.txt", "requirements-dev.txt"];

/// Ignore-rules file written after the manifest.
pub const IGNORE_RULES_PATH: &str = ".gitignore";

/// Template rendered into [`IGNORE_RULES_PATH`].
pub const IGNORE_RULES_TEMPLATE: &str = ".gitignore.j2";

/// Normalize a relative path, dropping `.` components.
///
/// # Errors
///
/// Returns [`ScaffoldError::UnsafePath`] for empty, absolute or `..` paths.
pub fn normalize_relative(path: &str) -> Result<PathBuf, ScaffoldError> {
    let mut out = PathBuf::new();
    for component in Path::new(path).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ScaffoldError::UnsafePath(path.to_string()));
            }
        }
    }
    if out.as_os_str().is_empty() {
        return Err(ScaffoldError::UnsafePath(path.to_string()));
    }
    Ok(out)
}

/// A file to materialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFile {
    /// Path relative to the target root.
    pub path: PathBuf,
    pub source: ContentSource,
}

/// Directories and files for one scaffold run, after persona and package
/// manager adjustments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Name of the profile this was resolved from.
    pub profile: String,
    /// Directories in creation order. Duplicates are allowed.
    pub directories: Vec<PathBuf>,
    pub files: Vec<ManifestFile>,
}

impl Manifest {
    /// Resolve `profile` for the given persona and package manager.
    ///
    /// The profile is consumed by value so the registry's definition is never
    /// touched. The template store is not consulted: an unknown persona
    /// produces a template identifier that fails when rendered.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::UnsafePath`] if a path escapes the root.
    pub fn resolve(
        profile: Profile,
        persona: &str,
        package_manager: PackageManager,
        personas: &PersonaTable,
    ) -> Result<Self, ScaffoldError> {
        let mut files = profile.files;

        if persona != STANDARD_PERSONA
            && let Some(entry) = files.iter_mut().find(|f| f.path == BEHAVIOR_RULES_PATH)
            && let ContentSource::Template(base) = &entry.source
        {
            entry.source = ContentSource::Template(personas.variant(base, persona));
        }

        if package_manager != PackageManager::Pip {
            files.retain(|f| !DEPENDENCY_LIST_PATHS.contains(&f.path.as_str()));
        }

        let directories = profile
            .structure
            .iter()
            .map(|dir| normalize_relative(dir))
            .collect::<Result<Vec<_>, _>>()?;

        let files = files
            .into_iter()
            .map(|f| {
                Ok(ManifestFile {
                    path: normalize_relative(&f.path)?,
                    source: f.source,
                })
            })
            .collect::<Result<Vec<_>, ScaffoldError>>()?;

        Ok(Self {
            profile: profile.name,
            directories,
            files,
        })
    }

    /// Look up a file by its relative path.
    #[must_use]
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&ManifestFile> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path == path)
    }

    /// One line per entry: `dir/` for directories, `path [kind]` for files.
    #[must_use]
    pub fn listing(&self) -> Vec<String> {
        let dirs = self
            .directories
            .iter()
            .map(|d| format!("{}/", d.to_string_lossy().replace('\\', "/")));
        let files = self.files.iter().map(|f| {
            let detail = match &f.source {
                ContentSource::Template(id) => format!("template {id}"),
                other => other.kind().to_string(),
            };
            format!("{} [{detail}]", f.path.to_string_lossy().replace('\\', "/"))
        });
        dirs.chain(files).collect()
    }
}
