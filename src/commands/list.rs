//! The `list` subcommand: print active variable values.

use anyhow::Result;

use crate::cli::ListOpts;
use crate::config::Config;

/// Run the list command.
///
/// By default only variables with a differing override are shown; `--all`
/// lists every variable, and `--as-props` switches to `name=value` output.
///
/// # Errors
///
/// Returns an error if resolution fails.
pub fn run(config: &Config, opts: &ListOpts) -> Result<()> {
    let resolution = config.resolve()?;

    let mut names: Vec<&String> = if opts.all {
        resolution.active.keys().collect()
    } else {
        resolution.differing_defaults.keys().collect()
    };
    if let Some(substring) = &opts.substring_match {
        names.retain(|name| name.contains(substring.as_str()));
    }
    if names.is_empty() {
        return Ok(());
    }

    let column_width = names.iter().map(|name| name.len()).max().unwrap_or(0) + 1;
    for name in names {
        let Some(value) = resolution.active.get(name) else {
            continue;
        };
        if opts.as_props {
            println!("{name}={value}");
        } else if let Some(default) = resolution.differing_defaults.get(name) {
            println!("{name:column_width$} {value} (default is {})", default.value);
        } else {
            println!("{name:column_width$} {value}");
        }
    }
    Ok(())
}
