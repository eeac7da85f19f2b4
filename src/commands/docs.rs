//! The `doc` subcommand: print the categorized variable documentation.

use anyhow::Result;

use crate::config::Config;

/// Run the doc command.
///
/// # Errors
///
/// Returns an error if the docs or defaults fail validation.
pub fn run(config: &Config) -> Result<()> {
    for category in config.docs_by_category()? {
        println!("{}", title_case(&category.name));
        println!("{}", "-".repeat(category.name.len()));
        for entry in &category.entries {
            println!("    {}", entry.name);
            println!("        {}", entry.text);
            if let Some(default_value) = &entry.default_value {
                println!("            Default: {default_value}");
            }
            println!();
        }
        println!();
    }
    Ok(())
}

/// Capitalize the first character of a category name for display.
fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
