//! Persona variants of the behavior-rules template.
use std::collections::{BTreeMap, BTreeSet};

use super::TemplateRenderer;
use crate::error::TemplateError;

/// Persona that keeps the profile's own behavior rules.
pub const STANDARD_PERSONA: &str = "standard";

const BUILTIN_VARIANTS: &[(&str, &str, &str)] = &[
    (
        ".agent/rules/ai_behavior_fullstack.md.j2",
        "architect",
        ".agent/rules/ai_behavior_fullstack_architect.md.j2",
    ),
    (
        ".agent/rules/ai_behavior_web.md.j2",
        "architect",
        ".agent/rules/ai_behavior_web_architect.md.j2",
    ),
    (
        ".agent/rules/ai_behavior_system.md.j2",
        "architect",
        ".agent/rules/ai_behavior_system_architect.md.j2",
    ),
];

/// Explicit `(base template, persona) -> variant template` mapping.
#[derive(Debug, Clone, Default)]
pub struct PersonaTable {
    variants: BTreeMap<(String, String), String>,
}

impl PersonaTable {
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_VARIANTS.iter().copied())
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>) -> Self {
        Self {
            variants: entries
                .into_iter()
                .map(|(base, persona, variant)| {
                    ((base.to_string(), persona.to_string()), variant.to_string())
                })
                .collect(),
        }
    }

    /// Known persona names, `standard` first.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let others: BTreeSet<&str> = self
            .variants
            .keys()
            .map(|(_, persona)| persona.as_str())
            .filter(|p| *p != STANDARD_PERSONA)
            .collect();
        std::iter::once(STANDARD_PERSONA).chain(others).collect()
    }

    #[must_use]
    pub fn lookup(&self, base: &str, persona: &str) -> Option<&str> {
        self.variants
            .get(&(base.to_string(), persona.to_string()))
            .map(String::as_str)
    }

    /// Template identifier for `base` under `persona`.
    ///
    /// Without a table entry the result is an identifier no store holds, so
    /// rendering it fails instead of silently using the base rules.
    #[must_use]
    pub fn variant(&self, base: &str, persona: &str) -> String {
        self.lookup(base, persona)
            .map_or_else(|| format!("{base}#persona={persona}"), str::to_string)
    }

    /// Check that every variant in the table is present in `store`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingPersonaVariant`] for the first absent variant.
    pub fn validate(&self, store: &dyn TemplateRenderer) -> Result<(), TemplateError> {
        for ((base, persona), variant) in &self.variants {
            if !store.contains(variant) {
                return Err(TemplateError::MissingPersonaVariant {
                    base: base.clone(),
                    persona: persona.clone(),
                    variant: variant.clone(),
                });
            }
        }
        Ok(())
    }
}
