//! The `enable` and `disable` subcommands.
//!
//! Enabled state is a convention over the override store: a service is
//! enabled while a `<service>.enabled` override exists, and callers reading
//! the active mapping treat absence as disabled.

use anyhow::Result;

use crate::cli::ServiceOpts;
use crate::config::Config;

/// Run the enable command.
///
/// # Errors
///
/// Returns an error if the store cannot be rewritten.
pub fn enable(config: &Config, opts: &ServiceOpts) -> Result<()> {
    config.enable(&opts.service_name)?;
    println!("{} enabled", opts.service_name);
    Ok(())
}

/// Run the disable command.
///
/// # Errors
///
/// Returns an error if the store cannot be rewritten.
pub fn disable(config: &Config, opts: &ServiceOpts) -> Result<()> {
    config.disable(&opts.service_name)?;
    println!("{} disabled", opts.service_name);
    Ok(())
}
