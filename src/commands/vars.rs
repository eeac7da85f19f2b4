//! The `set` and `del` subcommands: edit variable overrides.

use anyhow::Result;

use crate::cli::{DeleteOpts, SetOpts};
use crate::config::Config;

/// Run the set command.
///
/// # Errors
///
/// Returns an error if the name is not a known variable (with close-match
/// hints in the message) or the store cannot be rewritten.
pub fn set(config: &Config, opts: &SetOpts) -> Result<()> {
    config.require_known(&opts.name)?;
    config.set_override(&opts.name, &opts.value)?;
    println!("{} set to \"{}\"", opts.name, opts.value);
    Ok(())
}

/// Run the del command.
///
/// # Errors
///
/// Returns an error if the name is not a known variable or the store cannot
/// be rewritten.
pub fn delete(config: &Config, opts: &DeleteOpts) -> Result<()> {
    config.require_known(&opts.name)?;
    config.delete_override(&opts.name)?;
    println!("{} override removed", opts.name);
    Ok(())
}
