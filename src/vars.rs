//! Variable record types and name validation.
//!
//! A platform variable has three incarnations plus documentation:
//!
//! - [`Default`] — compiled-in baseline value, supplied at engine construction.
//! - [`Override`] — user-set value read from the persisted override store.
//! - [`Suggestion`] — proposed replacement value with a reason; diagnostic
//!   only, never authoritative.
//! - [`Doc`] — documentation text for a variable.
//!
//! [`validate_and_map`] turns any collection of these records into a map
//! keyed by name, rejecting malformed and duplicate names.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::ConfigError;

/// A compiled-in baseline value for a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Default {
    /// Dot-segmented variable name (e.g., `"main.home"`).
    pub name: String,
    /// Baseline value; may contain `{{...}}` references.
    pub value: String,
}

/// A user-set value replacing a default when present and different.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    /// Dot-segmented variable name.
    pub name: String,
    /// Override value; may contain `{{...}}` references.
    pub value: String,
}

/// An externally proposed replacement value, used only as a diagnostic hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Dot-segmented variable name.
    pub name: String,
    /// Suggested value.
    pub value: String,
    /// Human-readable reason for the suggestion.
    pub why: String,
}

/// Documentation text for a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doc {
    /// Dot-segmented variable name.
    pub name: String,
    /// Documentation text.
    pub text: String,
}

impl Default {
    /// Construct a default from string-like parts.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Override {
    /// Construct an override from string-like parts.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Suggestion {
    /// Construct a suggestion from string-like parts.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        why: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            why: why.into(),
        }
    }
}

impl Doc {
    /// Construct a doc entry from string-like parts.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A record carrying a variable name, usable with [`validate_and_map`].
pub trait Named: fmt::Debug {
    /// The dot-segmented variable name of this record.
    fn name(&self) -> &str;
}

impl Named for Default {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Override {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Suggestion {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Doc {
    fn name(&self) -> &str {
        &self.name
    }
}

/// The category of a dot-segmented name: everything before the first dot.
///
/// A name without a dot is its own category.
#[must_use]
pub fn category(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// Map records by name, rejecting malformed and duplicate names.
///
/// Names must not contain a space or a triple underscore. Each name may
/// appear at most once in the input collection.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidName`] for a forbidden substring and
/// [`ConfigError::DuplicateName`] (carrying renderings of both conflicting
/// records) for a repeated name.
pub fn validate_and_map<T, I>(records: I) -> Result<BTreeMap<String, T>, ConfigError>
where
    T: Named,
    I: IntoIterator<Item = T>,
{
    let mut by_name: BTreeMap<String, T> = BTreeMap::new();
    for record in records {
        let name = record.name().to_string();
        for forbidden in ["___", " "] {
            if name.contains(forbidden) {
                return Err(ConfigError::InvalidName { name, forbidden });
            }
        }
        if let Some(existing) = by_name.get(&name) {
            return Err(ConfigError::DuplicateName {
                first: format!("{existing:?}"),
                second: format!("{record:?}"),
                name,
            });
        }
        by_name.insert(name, record);
    }
    Ok(by_name)
}
