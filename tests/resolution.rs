#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end tests for the resolution pipeline over a real store file:
//! default/override layering, template expansion, diagnostic diffs, and the
//! unknown-key guard.

mod common;

use platform_config::error::ConfigError;
use platform_config::vars::{Default, Suggestion};

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

/// With no overrides, active values are the template-expanded defaults.
#[test]
fn net_scenario_without_overrides() {
    let env = common::engine(common::net_defaults(), Vec::new(), Vec::new());
    let resolution = env.config.resolve().expect("resolve");
    assert_eq!(resolution.active.get("net.host").expect("host"), "x");
    assert_eq!(
        resolution.active.get("net.url").expect("url"),
        "http://x/api"
    );
    assert!(resolution.differing_defaults.is_empty());
}

/// An override flows through every template that references the variable.
#[test]
fn net_scenario_with_host_override() {
    let env = common::engine(common::net_defaults(), Vec::new(), Vec::new());
    env.config.set_override("net.host", "y").expect("set");
    let resolution = env.config.resolve().expect("resolve");
    assert_eq!(resolution.active.get("net.host").expect("host"), "y");
    assert_eq!(
        resolution.active.get("net.url").expect("url"),
        "http://y/api"
    );
    let overridden: Vec<&str> = resolution
        .differing_defaults
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(overridden, vec!["net.host"]);
}

// ---------------------------------------------------------------------------
// Structural properties
// ---------------------------------------------------------------------------

/// The active mapping holds exactly one entry per default name.
#[test]
fn active_mapping_covers_exactly_the_default_names() {
    let env = common::engine(common::net_defaults(), Vec::new(), Vec::new());
    env.config.set_override("net.host", "y").expect("set");
    env.config.set_override("orphan.key", "v").expect("set");
    let resolution = env.config.resolve().expect("resolve");
    let mut names: Vec<&str> = resolution.active.keys().map(String::as_str).collect();
    names.sort();
    assert_eq!(names, vec!["net.host", "net.url"]);
}

/// Deleting an override reverts the variable to its default.
#[test]
fn delete_override_reverts_resolution() {
    let env = common::engine(common::net_defaults(), Vec::new(), Vec::new());
    env.config.set_override("net.host", "y").expect("set");
    env.config.delete_override("net.host").expect("delete");
    let resolution = env.config.resolve().expect("resolve");
    assert_eq!(resolution.active.get("net.host").expect("host"), "x");
    assert_eq!(
        resolution.active.get("net.url").expect("url"),
        "http://x/api"
    );
}

/// A suggestion differing from the *resolved* value is reported; one equal
/// to it is not.
#[test]
fn suggestions_diff_against_resolved_values() {
    let suggestions = vec![
        Suggestion::new("net.url", "http://x/api", "already active, suppressed"),
        Suggestion::new("net.host", "search01", "move search off this box"),
    ];
    let env = common::engine(common::net_defaults(), suggestions, Vec::new());
    let resolution = env.config.resolve().expect("resolve");
    let suggested: Vec<&str> = resolution
        .differing_suggestions
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(suggested, vec!["net.host"]);
}

/// Re-resolving after no store change yields identical output.
#[test]
fn resolution_is_stable_across_calls() {
    let env = common::engine(common::net_defaults(), Vec::new(), Vec::new());
    env.config.set_override("net.host", "y").expect("set");
    let first = env.config.resolve().expect("first resolve");
    let second = env.config.resolve().expect("second resolve");
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Validation failures
// ---------------------------------------------------------------------------

/// Malformed names fail resolution no matter which collection carries them.
#[test]
fn invalid_names_fail_in_any_collection() {
    let env = common::engine(
        vec![Default::new("has space", "v")],
        Vec::new(),
        Vec::new(),
    );
    assert!(matches!(
        env.config.resolve(),
        Err(ConfigError::InvalidName { .. })
    ));

    let env = common::engine(
        common::net_defaults(),
        vec![Suggestion::new("triple___under", "v", "why")],
        Vec::new(),
    );
    assert!(matches!(
        env.config.resolve(),
        Err(ConfigError::InvalidName { .. })
    ));
}

/// Duplicate defaults abort before any value is resolved.
#[test]
fn duplicate_defaults_fail() {
    let env = common::engine(
        vec![Default::new("a.x", "1"), Default::new("a.x", "2")],
        Vec::new(),
        Vec::new(),
    );
    assert!(matches!(
        env.config.resolve(),
        Err(ConfigError::DuplicateName { .. })
    ));
}

// ---------------------------------------------------------------------------
// Unknown-key guard
// ---------------------------------------------------------------------------

/// A near-miss key is rejected with the close default name suggested.
#[test]
fn unknown_key_suggests_close_match() {
    let defaults = vec![
        Default::new("host.name", "web01"),
        Default::new("host.domain", "example.com"),
    ];
    let env = common::engine(defaults, Vec::new(), Vec::new());
    let err = env
        .config
        .require_known("hots.name")
        .expect_err("typo should be rejected");
    match err {
        ConfigError::UnknownVariable { suggestions, .. } => {
            assert!(suggestions.contains(&"host.name".to_string()));
        }
        other => panic!("expected UnknownVariable, got {other:?}"),
    }
}

/// A key with no close match is rejected with an empty suggestion list.
#[test]
fn unknown_key_with_no_close_match_has_no_suggestions() {
    let env = common::engine(common::net_defaults(), Vec::new(), Vec::new());
    let err = env
        .config
        .require_known("qqqqqqqq")
        .expect_err("unknown key should be rejected");
    assert!(matches!(
        err,
        ConfigError::UnknownVariable { ref suggestions, .. } if suggestions.is_empty()
    ));
}
