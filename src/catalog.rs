//! Compiled-in variable catalog wired into the `platconf` binary.
//!
//! The engine itself is catalog-agnostic; these are the statically-set
//! defaults, suggestions, and docs for the platform services this binary
//! manages. Runtime-generated values (timestamps and the like) deliberately
//! do not appear here; they belong to the startup process.

use crate::vars::{Default, Doc, Suggestion};

/// The compiled-in default value for every platform variable.
#[must_use]
pub fn defaults() -> Vec<Default> {
    vec![
        Default::new("main.home", "/opt/platform"),
        Default::new("main.data_dir", "{{main.home}}/var/data"),
        Default::new("main.log_dir", "{{main.home}}/var/logs"),
        Default::new("search.host", "localhost"),
        Default::new("search.port", "9200"),
        Default::new("search.url", "http://{{search.host}}:{{search.port}}"),
        Default::new("webapp.bind_host", "0.0.0.0"),
        Default::new("webapp.http_port", "8080"),
        Default::new("webapp.max_heap_size", "1024"),
        Default::new("webapp.work_dir", "{{main.data_dir}}/webapp"),
    ]
}

/// Suggested replacement values, shown during setup when they differ from
/// the active value.
#[must_use]
pub fn suggestions() -> Vec<Suggestion> {
    vec![Suggestion::new(
        "webapp.max_heap_size",
        "2048",
        "Hosts with more than 4GB of memory should give the web application a larger heap.",
    )]
}

/// Documentation for every catalog variable.
#[must_use]
pub fn docs() -> Vec<Doc> {
    vec![
        Doc::new("main.home", "Installation root for the platform."),
        Doc::new(
            "main.data_dir",
            "Directory holding persistent service data.",
        ),
        Doc::new("main.log_dir", "Directory holding service log files."),
        Doc::new("search.host", "Hostname of the search backend."),
        Doc::new("search.port", "TCP port of the search backend."),
        Doc::new(
            "search.url",
            "Base URL services use to reach the search backend.",
        ),
        Doc::new(
            "webapp.bind_host",
            "Address the web application binds its listener to.",
        ),
        Doc::new(
            "webapp.http_port",
            "Port the web application listens on for HTTP.",
        ),
        Doc::new(
            "webapp.max_heap_size",
            "Maximum JVM heap size for the web application, in megabytes.",
        ),
        Doc::new(
            "webapp.work_dir",
            "Scratch directory for the web application.",
        ),
    ]
}
