//! Built-in project profiles and the registry that serves them.
//!
//! Profiles are declared in `conf/profiles.toml`, embedded at build time and
//! validated once at startup. The registry hands out owned copies so callers
//! can adjust a profile without affecting the shared definitions.
use serde::Deserialize;
use std::collections::BTreeSet;

use super::manifest::normalize_relative;
use super::toml_loader::parse_document;
use crate::error::ConfigError;

const BUILTIN_PROFILES: &str = include_str!("../../conf/profiles.toml");
const BUILTIN_SOURCE_NAME: &str = "conf/profiles.toml";

/// Where a file's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Zero-length file.
    Empty,
    /// Literal text written as-is (surrounding whitespace trimmed).
    Raw(String),
    /// Template identifier rendered with the active render context.
    Template(String),
}

impl ContentSource {
    /// Short label used in logs and manifest listings.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Raw(_) => "raw",
            Self::Template(_) => "template",
        }
    }
}

/// A file declared by a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Normalized path relative to the project root, `/`-separated.
    pub path: String,
    /// Content source.
    pub source: ContentSource,
}

/// A named project layout: directories to create and files to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub description: String,
    /// Directories relative to the project root, in creation order.
    pub structure: Vec<String>,
    /// Files in write order. Paths are unique.
    pub files: Vec<FileEntry>,
}

impl Profile {
    /// Look up a file entry by its normalized path.
    #[must_use]
    pub fn file(&self, path: &str) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.path == path)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfilesDocument {
    default: String,
    #[serde(default)]
    common_files: Vec<FileDef>,
    profiles: Vec<ProfileDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileDef {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    structure: Vec<String>,
    #[serde(default)]
    files: Vec<FileDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileDef {
    path: String,
    template: Option<String>,
    raw: Option<String>,
}

impl FileDef {
    fn into_entry(self, profile: &str) -> Result<FileEntry, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidProfile {
            name: profile.to_string(),
            reason,
        };

        let path = normalize_relative(&self.path)
            .map_err(|e| invalid(e.to_string()))?
            .to_string_lossy()
            .replace('\\', "/");

        let source = match (self.template, self.raw) {
            (Some(_), Some(_)) => {
                return Err(invalid(format!(
                    "{path} declares both a template and raw content"
                )));
            }
            (Some(id), None) => ContentSource::Template(id),
            (None, Some(text)) => ContentSource::Raw(text),
            (None, None) => ContentSource::Empty,
        };

        Ok(FileEntry { path, source })
    }
}

impl ProfileDef {
    fn into_profile(self, common: &[FileDef]) -> Result<Profile, ConfigError> {
        let name = self.name;
        if name.trim().is_empty() {
            return Err(ConfigError::InvalidProfile {
                name,
                reason: "empty profile name".to_string(),
            });
        }

        let structure = self
            .structure
            .iter()
            .map(|dir| {
                normalize_relative(dir)
                    .map(|p| p.to_string_lossy().replace('\\', "/"))
                    .map_err(|e| ConfigError::InvalidProfile {
                        name: name.clone(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut files = Vec::with_capacity(common.len() + self.files.len());
        let mut seen = BTreeSet::new();
        for def in common.iter().cloned().chain(self.files) {
            let entry = def.into_entry(&name)?;
            if !seen.insert(entry.path.clone()) {
                return Err(ConfigError::InvalidProfile {
                    name,
                    reason: format!("duplicate file path {}", entry.path),
                });
            }
            files.push(entry);
        }

        Ok(Profile {
            name,
            description: self.description,
            structure,
            files,
        })
    }
}

/// Immutable set of profiles keyed by name, with a designated default.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<Profile>,
    default: Profile,
}

impl ProfileRegistry {
    /// Load the profiles embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document fails validation.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml(BUILTIN_PROFILES, BUILTIN_SOURCE_NAME)
    }

    /// Parse and validate a profiles document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not parse, a profile name is
    /// duplicated, a file path is unsafe or duplicated within a profile, a file
    /// declares two content sources, or the default profile is missing.
    pub fn from_toml(content: &str, source_name: &str) -> Result<Self, ConfigError> {
        let doc: ProfilesDocument = parse_document(content, source_name)?;
        let profiles = doc
            .profiles
            .into_iter()
            .map(|def| def.into_profile(&doc.common_files))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(profiles, &doc.default)
    }

    /// Build a registry from already constructed profiles.
    ///
    /// # Errors
    ///
    /// Returns an error if two profiles share a name or `default` is absent.
    pub fn new(profiles: Vec<Profile>, default: &str) -> Result<Self, ConfigError> {
        let mut names = BTreeSet::new();
        for profile in &profiles {
            if !names.insert(profile.name.as_str()) {
                return Err(ConfigError::InvalidProfile {
                    name: profile.name.clone(),
                    reason: "defined more than once".to_string(),
                });
            }
        }

        let default = profiles
            .iter()
            .find(|p| p.name == default)
            .cloned()
            .ok_or_else(|| ConfigError::MissingDefault(default.to_string()))?;

        Ok(Self { profiles, default })
    }

    /// Return a copy of the named profile, or of the default profile when the
    /// name is unknown. Never fails.
    #[must_use]
    pub fn get(&self, name: &str) -> Profile {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .unwrap_or(&self.default)
            .clone()
    }

    /// Whether `name` is a registered profile.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.profiles.iter().any(|p| p.name == name)
    }

    /// Name of the fallback profile.
    #[must_use]
    pub fn default_name(&self) -> &str {
        &self.default.name
    }

    /// Profile names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    /// Iterate over the definitions without copying them.
    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }
}
