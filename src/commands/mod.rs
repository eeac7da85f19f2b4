//! Top-level subcommand orchestration.
//!
//! Each submodule exposes a `run` function taking the engine and its parsed
//! options. All resolution logic lives in [`crate::config`]; these modules
//! only render the structured data it returns.

pub mod docs;
pub mod list;
pub mod service;
pub mod vars;
