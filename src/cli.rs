//! Command-line interface definitions for the `platconf` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the platform configuration manager.
#[derive(Parser, Debug)]
#[command(
    name = "platconf",
    about = "Manage layered configuration for platform services",
    version
)]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose diagnostic output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path of the override store file
    #[arg(
        long,
        global = true,
        default_value = "platform.properties",
        value_name = "FILE"
    )]
    pub store: PathBuf,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List active variable values
    List(ListOpts),
    /// Set a variable override
    Set(SetOpts),
    /// Delete a variable override
    #[command(name = "del")]
    Delete(DeleteOpts),
    /// Enable a service
    Enable(ServiceOpts),
    /// Disable a service
    Disable(ServiceOpts),
    /// Show documentation for every variable
    Doc,
}

/// Options for the `list` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ListOpts {
    /// Show every variable, not just those with differing overrides
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Print plain name=value lines
    #[arg(short = 'p', long)]
    pub as_props: bool,

    /// Only list variables whose name contains this substring
    pub substring_match: Option<String>,
}

/// Options for the `set` subcommand.
#[derive(Parser, Debug, Clone)]
#[command(after_help = "If the value starts with a dash, surround it with quotes and add a \
                        leading space, i.e. \" -Dmyoption\".")]
pub struct SetOpts {
    /// Variable name to override
    pub name: String,
    /// Override value
    pub value: String,
}

/// Options for the `del` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct DeleteOpts {
    /// Variable name whose override is removed
    pub name: String,
}

/// Options for the `enable` and `disable` subcommands.
#[derive(Parser, Debug, Clone)]
pub struct ServiceOpts {
    /// Service name
    pub service_name: String,
}
