// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed override store and engine so each
// integration test can set up an isolated environment without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use platform_config::config::Config;
use platform_config::store::OverrideStore;
use platform_config::vars::{Default, Doc, Suggestion};

/// A temp-dir-backed engine; the directory is removed when this is dropped.
pub struct TestEngine {
    pub dir: tempfile::TempDir,
    pub config: Config,
}

/// Build an engine over a fresh store file in a temporary directory.
pub fn engine(
    defaults: Vec<Default>,
    suggestions: Vec<Suggestion>,
    docs: Vec<Doc>,
) -> TestEngine {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = OverrideStore::new(dir.path().join("overrides.properties"));
    TestEngine {
        config: Config::new(store, defaults, suggestions, docs),
        dir,
    }
}

/// The two-variable network catalog used by the concrete scenarios.
pub fn net_defaults() -> Vec<Default> {
    vec![
        Default::new("net.host", "x"),
        Default::new("net.url", "http://{{net.host}}/api"),
    ]
}
