//! Mustache-style `{{name}}` expansion between variable values.
//!
//! Values may reference other variables by dot-segmented name, e.g.
//!
//! ```text
//! main.home       = /opt/platform
//! fooservice.home = {{main.home}}/fooservice
//! fooservice.bin  = {{fooservice.home}}/bin
//! ```
//!
//! [`render_values`] repeats substitution passes over the whole mapping until
//! no value changes, so chains of references resolve without any explicit
//! dependency ordering. Expansion is purely textual.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::TemplateError;

/// Upper bound on substitution passes before declaring a cycle.
const MAX_SUBSTITUTION_RUNS: usize = 10;

/// Matches a `{{reference}}` with optional inner whitespace.
#[allow(clippy::expect_used)]
static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([^{}\s]+)\s*\}\}").expect("reference pattern is valid"));

/// Expand every `{{name}}` reference in `values` against `values` itself.
///
/// Returns a new mapping with the same key set; the input is not mutated.
/// Nested references are supported by iterating passes to a fixed point.
///
/// # Errors
///
/// Returns [`TemplateError::UnknownReference`] when a value references a name
/// absent from the mapping, and [`TemplateError::Cycle`] when the mapping has
/// not stabilised after [`MAX_SUBSTITUTION_RUNS`] passes.
pub fn render_values(
    values: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, String>, TemplateError> {
    let mut current = values.clone();
    for run in 0..MAX_SUBSTITUTION_RUNS {
        let mut next = BTreeMap::new();
        let mut changed = false;
        for (name, value) in &current {
            let rendered = render_one(name, value, &current)?;
            changed = changed || rendered != *value;
            next.insert(name.clone(), rendered);
        }
        if !changed {
            // A fixed point with references left can only come from a cycle:
            // unknown references have already failed, and a reference to a
            // live name would have kept substituting.
            let unresolved = leftover_references(&next);
            if !unresolved.is_empty() {
                return Err(TemplateError::Cycle { names: unresolved });
            }
            tracing::debug!(runs = run, "template mapping reached fixed point");
            return Ok(next);
        }
        current = next;
    }
    Err(TemplateError::Cycle {
        names: leftover_references(&current),
    })
}

/// Names of variables whose values still contain a `{{...}}` reference.
fn leftover_references(values: &BTreeMap<String, String>) -> Vec<String> {
    values
        .iter()
        .filter(|(_, value)| REFERENCE.is_match(value))
        .map(|(name, _)| name.clone())
        .collect()
}

/// Substitute one pass of references in a single value.
fn render_one(
    name: &str,
    value: &str,
    values: &BTreeMap<String, String>,
) -> Result<String, TemplateError> {
    let mut missing: Option<String> = None;
    let rendered = REFERENCE.replace_all(value, |caps: &Captures<'_>| {
        let reference = caps.get(1).map_or("", |m| m.as_str());
        values.get(reference).cloned().unwrap_or_else(|| {
            if missing.is_none() {
                missing = Some(reference.to_string());
            }
            String::new()
        })
    });
    match missing {
        Some(reference) => Err(TemplateError::UnknownReference {
            name: name.to_string(),
            reference,
        }),
        None => Ok(rendered.into_owned()),
    }
}
