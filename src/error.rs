//! Domain-specific error types for the configuration engine.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Internal modules return typed errors ([`ConfigError`], [`TemplateError`],
//! [`StoreError`]) while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! ConfigError
//! ├── InvalidName / DuplicateName — name validation failures
//! ├── UnknownVariable             — caller-supplied key with no default
//! ├── Template(TemplateError)     — {{...}} expansion failures
//! └── Store(StoreError)           — override store I/O and lock failures
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the configuration engine.
///
/// Aggregates template and store sub-errors and is convertible to
/// [`anyhow::Error`] for use at CLI command boundaries.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable name contains a forbidden substring.
    #[error("invalid variable name \"{name}\": contains \"{forbidden}\"")]
    InvalidName {
        /// The offending variable name.
        name: String,
        /// The forbidden substring found in the name (`" "` or `"___"`).
        forbidden: &'static str,
    },

    /// Two records in the same collection share a name.
    #[error("duplicate variable name \"{name}\":\n{second} duplicates {first}")]
    DuplicateName {
        /// The repeated name.
        name: String,
        /// Rendering of the record seen first.
        first: String,
        /// Rendering of the record that collided with it.
        second: String,
    },

    /// A caller-supplied key has no matching default.
    #[error("unknown variable name \"{key}\"{}", format_suggestions(.suggestions))]
    UnknownVariable {
        /// The unrecognized key.
        key: String,
        /// Best-effort close matches among the default names (best first).
        suggestions: Vec<String>,
    },

    /// Template expansion failed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The override store could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that arise during `{{...}}` template expansion.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// A value references a variable name absent from the mapping.
    #[error("template reference {{{{{reference}}}}} in \"{name}\" does not match any variable")]
    UnknownReference {
        /// Name of the variable whose value holds the reference.
        name: String,
        /// The referenced name that could not be found.
        reference: String,
    },

    /// Substitution did not reach a fixed point within the run limit.
    #[error("circular template references involving: {}", .names.join(", "))]
    Cycle {
        /// Variables still holding unexpanded references after the last run.
        names: Vec<String>,
    },
}

/// Errors that arise from the persisted override store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// An I/O operation on the store or its temp file failed.
    #[error("cannot {action} store file {}: {source}", .path.display())]
    Io {
        /// What the store was doing (e.g. `"read"`, `"create"`, `"rename"`).
        action: &'static str,
        /// Path of the file involved.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The exclusive store lock could not be acquired or released.
    #[error("cannot lock store file {}: {source}", .path.display())]
    Lock {
        /// Path of the lock file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A line in the store file is not a `name=value` pair.
    #[error("malformed line {line} in store file {}: {text}", .path.display())]
    Parse {
        /// Path of the store file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// The offending line text.
        text: String,
    },

    /// A name or value cannot round-trip through the line-oriented format.
    #[error("cannot store {what} {text:?}: {reason}")]
    Unstorable {
        /// Which half of the pair is at fault (`"name"` or `"value"`).
        what: &'static str,
        /// The offending text.
        text: String,
        /// What makes it unrepresentable.
        reason: &'static str,
    },
}

/// Render the `(did you mean: ...)` suffix for [`ConfigError::UnknownVariable`].
fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn invalid_name_display() {
        let e = ConfigError::InvalidName {
            name: "bad name".to_string(),
            forbidden: " ",
        };
        assert_eq!(
            e.to_string(),
            "invalid variable name \"bad name\": contains \" \""
        );
    }

    #[test]
    fn duplicate_name_display() {
        let e = ConfigError::DuplicateName {
            name: "main.home".to_string(),
            first: "Default { name: \"main.home\", value: \"/opt/a\" }".to_string(),
            second: "Default { name: \"main.home\", value: \"/opt/b\" }".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("duplicate variable name \"main.home\""));
        assert!(msg.contains("duplicates"));
    }

    #[test]
    fn unknown_variable_without_suggestions_display() {
        let e = ConfigError::UnknownVariable {
            key: "zzz".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(e.to_string(), "unknown variable name \"zzz\"");
    }

    #[test]
    fn unknown_variable_with_suggestions_display() {
        let e = ConfigError::UnknownVariable {
            key: "hots.name".to_string(),
            suggestions: vec!["host.name".to_string()],
        };
        assert_eq!(
            e.to_string(),
            "unknown variable name \"hots.name\" (did you mean: host.name?)"
        );
    }

    #[test]
    fn template_unknown_reference_display() {
        let e = TemplateError::UnknownReference {
            name: "net.url".to_string(),
            reference: "net.hots".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "template reference {{net.hots}} in \"net.url\" does not match any variable"
        );
    }

    #[test]
    fn template_cycle_display() {
        let e = TemplateError::Cycle {
            names: vec!["a.x".to_string(), "b.y".to_string()],
        };
        assert_eq!(
            e.to_string(),
            "circular template references involving: a.x, b.y"
        );
    }

    #[test]
    fn store_io_display() {
        let e = StoreError::Io {
            action: "read",
            path: PathBuf::from("/etc/platform.properties"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(e.to_string().contains("cannot read store file"));
        assert!(e.to_string().contains("/etc/platform.properties"));
    }

    #[test]
    fn store_io_has_source() {
        use std::error::Error as StdError;
        let e = StoreError::Io {
            action: "read",
            path: PathBuf::from("p"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn store_parse_display() {
        let e = StoreError::Parse {
            path: PathBuf::from("over.properties"),
            line: 3,
            text: "not a pair".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "malformed line 3 in store file over.properties: not a pair"
        );
    }

    #[test]
    fn store_unstorable_display() {
        let e = StoreError::Unstorable {
            what: "value",
            text: "-Xms512m\n-Xmx1024m".to_string(),
            reason: "contains a line break",
        };
        assert_eq!(
            e.to_string(),
            "cannot store value \"-Xms512m\\n-Xmx1024m\": contains a line break"
        );
    }

    #[test]
    fn config_error_from_template_error() {
        let e: ConfigError = TemplateError::Cycle {
            names: vec!["x".to_string()],
        }
        .into();
        assert!(matches!(e, ConfigError::Template(_)));
    }

    #[test]
    fn config_error_from_store_error() {
        let e: ConfigError = StoreError::Parse {
            path: PathBuf::from("p"),
            line: 1,
            text: String::new(),
        }
        .into();
        assert!(matches!(e, ConfigError::Store(_)));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<ConfigError>();
        assert_send_sync::<TemplateError>();
        assert_send_sync::<StoreError>();
    }

    #[test]
    fn config_error_converts_to_anyhow() {
        let e = ConfigError::InvalidName {
            name: "a b".to_string(),
            forbidden: " ",
        };
        let _anyhow_err: anyhow::Error = e.into();
    }
}
