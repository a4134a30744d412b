//! Variables available to every template.
//!
//! A [`RenderContext`] is built from three layers, highest priority first:
//! explicit input (flags or wizard answers), stored settings, and the
//! built-in fallbacks. Empty or unparseable values fall through to the next
//! layer, so building never fails.
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::store::Settings;

pub const PROJECT_NAME: &str = "project_name";
pub const AUTHOR_NAME: &str = "author_name";
pub const LICENSE: &str = "license";
pub const PYTHON_VERSION: &str = "python_version";
pub const PACKAGE_MANAGER: &str = "package_manager";
pub const PROFILE: &str = "profile";
pub const PERSONA: &str = "persona";

/// Keys that may be persisted with `forge config set`.
pub const SETTING_KEYS: &[&str] = &[
    AUTHOR_NAME,
    LICENSE,
    PYTHON_VERSION,
    PACKAGE_MANAGER,
    PROFILE,
    PERSONA,
];

/// Python dependency tool the generated project uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PackageManager {
    #[default]
    Pip,
    Poetry,
    Uv,
}

impl PackageManager {
    pub const ALL: [Self; 3] = [Self::Pip, Self::Poetry, Self::Uv];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pip => "pip",
            Self::Poetry => "poetry",
            Self::Uv => "uv",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pip" => Ok(Self::Pip),
            "poetry" => Ok(Self::Poetry),
            "uv" => Ok(Self::Uv),
            other => Err(format!("unknown package manager: {other}")),
        }
    }
}

/// Resolved template variables for one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub project_name: String,
    pub author_name: String,
    pub license: String,
    pub python_version: String,
    pub package_manager: PackageManager,
    pub profile: String,
    pub persona: String,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            project_name: "ai_project".to_string(),
            author_name: "User".to_string(),
            license: "MIT".to_string(),
            python_version: "3.11".to_string(),
            package_manager: PackageManager::Pip,
            profile: "fullstack".to_string(),
            persona: "standard".to_string(),
        }
    }
}

impl RenderContext {
    /// Merge input over stored settings over fallbacks.
    #[must_use]
    pub fn build(input: &BTreeMap<String, String>, stored: &Settings) -> Self {
        let fallback = Self::default();
        let layers = |key: &str| {
            let given = input.get(key).map(String::as_str);
            [given, stored.get(key)]
                .into_iter()
                .flatten()
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };
        let text = |key: &str, default: String| layers(key).next().map_or(default, str::to_string);

        let package_manager = layers(PACKAGE_MANAGER)
            .find_map(|v| v.parse().ok())
            .unwrap_or(fallback.package_manager);

        Self {
            project_name: text(PROJECT_NAME, fallback.project_name),
            author_name: text(AUTHOR_NAME, fallback.author_name),
            license: text(LICENSE, fallback.license),
            python_version: text(PYTHON_VERSION, fallback.python_version),
            package_manager,
            profile: text(PROFILE, fallback.profile),
            persona: text(PERSONA, fallback.persona),
        }
    }

    /// Flatten into the variable map handed to the template engine.
    #[must_use]
    pub fn to_vars(&self) -> BTreeMap<String, String> {
        [
            (PROJECT_NAME, self.project_name.clone()),
            (AUTHOR_NAME, self.author_name.clone()),
            (LICENSE, self.license.clone()),
            (PYTHON_VERSION, self.python_version.clone()),
            (PACKAGE_MANAGER, self.package_manager.to_string()),
            (PROFILE, self.profile.clone()),
            (PERSONA, self.persona.clone()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }
}
