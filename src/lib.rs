//! Layered configuration resolution engine for a service platform.
//!
//! Variables shared among platform services have three incarnations:
//! compiled-in **defaults**, user-persisted **overrides**, and diagnostic
//! **suggestions**. The engine layers them into the active value mapping,
//! expanding `{{dotted.name}}` template references between values along the
//! way.
//!
//! The public API is organised into small layers:
//!
//! - **[`vars`]** — record types and name validation
//! - **[`template`]** — `{{name}}` expansion to a fixed point
//! - **[`store`]** — the lock-guarded, atomically rewritten override store
//! - **[`suggest`]** — close-match hints for mistyped names
//! - **[`config`]** — the resolver composing the above
//! - **[`commands`]** — CLI subcommand glue over the resolver
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod store;
pub mod suggest;
pub mod template;
pub mod vars;
