//! TOML document loading shared by the profile registry and the settings store.
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::ConfigError;

/// Load a TOML file into `T`.
///
/// A missing file deserializes from an empty document, so `T` should accept
/// an empty table (maps, or structs whose fields are all `#[serde(default)]`).
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file exists but cannot be read, and
/// [`ConfigError::Parse`] if its content is not valid for `T`.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        return parse_document("", &path.display().to_string());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document(&content, &path.display().to_string())
}

/// Parse a TOML document held in memory.
///
/// `source_name` only appears in error messages.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the content is not valid for `T`.
pub fn parse_document<T: DeserializeOwned>(
    content: &str,
    source_name: &str,
) -> Result<T, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse {
        source_name: source_name.to_string(),
        message: e.message().to_string(),
    })
}
