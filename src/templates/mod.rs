//! Template store and rendering.
//!
//! Every template is compiled into the binary (see [`assets`]) and loaded into
//! a single [`tera::Tera`] instance at startup. Rendering goes through the
//! [`TemplateRenderer`] trait so reconciliation can be tested against a mock.
pub mod assets;
pub mod personas;

use std::collections::BTreeMap;
use std::error::Error as _;
use std::fmt;

use crate::error::TemplateError;

/// Renders a template identifier with a flat variable map.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Whether `id` names a loaded template.
    fn contains(&self, id: &str) -> bool;

    /// Render `id` with `vars`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] for unknown identifiers and
    /// [`TemplateError::Render`] when the engine fails.
    fn render(&self, id: &str, vars: &BTreeMap<String, String>) -> Result<String, TemplateError>;
}

/// Tera-backed template store.
pub struct TemplateStore {
    tera: tera::Tera,
}

impl fmt::Debug for TemplateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateStore")
            .field("templates", &self.names())
            .finish()
    }
}

impl TemplateStore {
    /// Load the templates embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Load`] if any template fails to parse.
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::from_sources(assets::BUILTIN_TEMPLATES.iter().copied())
    }

    /// Build a store from `(identifier, source)` pairs. Output is never
    /// HTML-escaped.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Load`] if any template fails to parse.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, TemplateError> {
        let mut tera = tera::Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(sources)
            .map_err(|e| TemplateError::Load(error_chain(&e)))?;
        Ok(Self { tera })
    }

    /// Loaded identifiers, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }
}

impl TemplateRenderer for TemplateStore {
    fn contains(&self, id: &str) -> bool {
        self.tera.get_template_names().any(|name| name == id)
    }

    fn render(&self, id: &str, vars: &BTreeMap<String, String>) -> Result<String, TemplateError> {
        if !self.contains(id) {
            return Err(TemplateError::NotFound(id.to_string()));
        }
        let mut context = tera::Context::new();
        for (key, value) in vars {
            context.insert(key.as_str(), value);
        }
        self.tera
            .render(id, &context)
            .map_err(|e| TemplateError::Render {
                template: id.to_string(),
                message: error_chain(&e),
            })
    }
}

/// Tera reports the useful detail in nested sources; join them.
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
