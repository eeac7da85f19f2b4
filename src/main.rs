//! `platconf` binary entry point.

use anyhow::Result;
use clap::Parser;

use platform_config::cli;
use platform_config::commands;
use platform_config::{catalog, config::Config, store::OverrideStore};

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    init_tracing(args.verbose);

    let store = OverrideStore::new(&args.store);
    let config = Config::new(
        store,
        catalog::defaults(),
        catalog::suggestions(),
        catalog::docs(),
    );

    match args.command {
        cli::Command::List(opts) => commands::list::run(&config, &opts),
        cli::Command::Set(opts) => commands::vars::set(&config, &opts),
        cli::Command::Delete(opts) => commands::vars::delete(&config, &opts),
        cli::Command::Enable(opts) => commands::service::enable(&config, &opts),
        cli::Command::Disable(opts) => commands::service::disable(&config, &opts),
        cli::Command::Doc => commands::docs::run(&config),
    }
}

/// Initialise the tracing subscriber; `-v` raises the default level to debug.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
