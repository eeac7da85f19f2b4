//! The resolution engine: merge defaults, overrides, and suggestions into
//! the active value mapping.
//!
//! [`Config`] is constructed once with the compiled-in defaults, suggestions,
//! and docs plus the path of the override store. Every query re-reads the
//! store, so no in-memory state is authoritative across calls.

use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::store::OverrideStore;
use crate::suggest;
use crate::template;
use crate::vars::{self, Default, Doc, Override, Suggestion, validate_and_map};

/// The category name that always sorts first in documentation listings.
const MAIN_CATEGORY: &str = "main";

/// Result of a resolution pass: the active mapping plus two diagnostic diffs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Post-template-substitution value for every default-declared name.
    pub active: BTreeMap<String, String>,
    /// Suggestions whose value differs from the resolved active value.
    pub differing_suggestions: BTreeMap<String, Suggestion>,
    /// Defaults shadowed by an override with a different value.
    pub differing_defaults: BTreeMap<String, Default>,
}

/// A documented variable within a category listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntry {
    /// Dot-segmented variable name.
    pub name: String,
    /// Documentation text.
    pub text: String,
    /// The variable's compiled-in default value, when one exists.
    pub default_value: Option<String>,
}

/// One category of documented variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocCategory {
    /// Category name (the first dot segment of its members).
    pub name: String,
    /// Entries sorted by variable name.
    pub entries: Vec<DocEntry>,
}

/// Interface to the layered platform configuration.
#[derive(Debug)]
pub struct Config {
    store: OverrideStore,
    defaults: Vec<Default>,
    suggestions: Vec<Suggestion>,
    docs: Vec<Doc>,
}

impl Config {
    /// Construct the engine over `store` with the compiled-in collections.
    #[must_use]
    pub fn new(
        store: OverrideStore,
        defaults: Vec<Default>,
        suggestions: Vec<Suggestion>,
        docs: Vec<Doc>,
    ) -> Self {
        Self {
            store,
            defaults,
            suggestions,
            docs,
        }
    }

    /// Resolve the active value of every default-declared variable.
    ///
    /// Overrides win over defaults when their values differ; the merged
    /// mapping is then template-expanded, and suggestions are diffed against
    /// the expanded values. Names present only as overrides are excluded
    /// from the active mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any collection fails name validation, the
    /// store cannot be read, or template expansion fails.
    pub fn resolve(&self) -> Result<Resolution, ConfigError> {
        let defaults_by_name = validate_and_map(self.defaults.iter().cloned())?;
        let overrides_by_name = validate_and_map(self.store.list()?)?;
        let suggestions_by_name = validate_and_map(self.suggestions.iter().cloned())?;

        let mut active = BTreeMap::new();
        let mut differing_defaults = BTreeMap::new();
        for (name, default) in &defaults_by_name {
            match overrides_by_name.get(name) {
                Some(Override { value, .. }) if *value != default.value => {
                    differing_defaults.insert(name.clone(), default.clone());
                    active.insert(name.clone(), value.clone());
                }
                _ => {
                    active.insert(name.clone(), default.value.clone());
                }
            }
        }

        let active = template::render_values(&active)?;

        let mut differing_suggestions = BTreeMap::new();
        for (name, value) in &active {
            if let Some(suggestion) = suggestions_by_name.get(name) {
                if suggestion.value != *value {
                    differing_suggestions.insert(name.clone(), suggestion.clone());
                }
            }
        }

        tracing::debug!(
            active = active.len(),
            overridden = differing_defaults.len(),
            suggested = differing_suggestions.len(),
            "resolved active values"
        );
        Ok(Resolution {
            active,
            differing_suggestions,
            differing_defaults,
        })
    }

    /// All persisted overrides, in name order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Store`] if the store cannot be read.
    pub fn list_overrides(&self) -> Result<Vec<Override>, ConfigError> {
        Ok(self.store.list()?)
    }

    /// Persist an override for `name`.
    ///
    /// This is the raw store operation; CLI paths driven by a caller-supplied
    /// key call [`Config::require_known`] first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Store`] if the store cannot be rewritten.
    pub fn set_override(&self, name: &str, value: &str) -> Result<(), ConfigError> {
        Ok(self.store.set(name, value)?)
    }

    /// Remove the override for `name`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Store`] if the store cannot be rewritten.
    pub fn delete_override(&self, name: &str) -> Result<(), ConfigError> {
        Ok(self.store.delete(name)?)
    }

    /// Fail unless `key` names a compiled-in default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownVariable`] carrying close-match
    /// suggestions when `key` matches no default name.
    pub fn require_known(&self, key: &str) -> Result<(), ConfigError> {
        if self.defaults.iter().any(|d| d.name == key) {
            return Ok(());
        }
        Err(ConfigError::UnknownVariable {
            key: key.to_string(),
            suggestions: suggest::close_matches(
                key,
                self.defaults.iter().map(|d| d.name.as_str()),
            ),
        })
    }

    /// Enable a service by convention: set `<service>.enabled` to `"True"`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Store`] if the store cannot be rewritten.
    pub fn enable(&self, service: &str) -> Result<(), ConfigError> {
        self.set_override(&format!("{service}.enabled"), "True")
    }

    /// Disable a service by convention: delete its `<service>.enabled` override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Store`] if the store cannot be rewritten.
    pub fn disable(&self, service: &str) -> Result<(), ConfigError> {
        self.delete_override(&format!("{service}.enabled"))
    }

    /// Documentation entries grouped by category.
    ///
    /// The `"main"` category comes first, the rest alphabetically; entries
    /// within a category are sorted by name. Each entry carries the
    /// variable's default value when one is compiled in.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the docs or defaults fail name validation.
    pub fn docs_by_category(&self) -> Result<Vec<DocCategory>, ConfigError> {
        let defaults_by_name = validate_and_map(self.defaults.iter().cloned())?;
        let docs_by_name = validate_and_map(self.docs.iter().cloned())?;

        let mut categories: BTreeMap<String, Vec<DocEntry>> = BTreeMap::new();
        for (name, doc) in docs_by_name {
            let entry = DocEntry {
                default_value: defaults_by_name.get(&name).map(|d| d.value.clone()),
                text: doc.text,
                name: name.clone(),
            };
            categories
                .entry(vars::category(&name).to_string())
                .or_default()
                .push(entry);
        }

        let mut ordered: Vec<DocCategory> = Vec::with_capacity(categories.len());
        if let Some(entries) = categories.remove(MAIN_CATEGORY) {
            ordered.push(DocCategory {
                name: MAIN_CATEGORY.to_string(),
                entries,
            });
        }
        for (name, entries) in categories {
            ordered.push(DocCategory { name, entries });
        }
        Ok(ordered)
    }
}
