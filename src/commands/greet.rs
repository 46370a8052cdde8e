use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use crate::config;
use crate::greeting;

/// Emit a single greeting to stdout or to a file.
pub fn run(name: Option<String>, output: Option<PathBuf>) -> Result<()> {
    let name = name.unwrap_or_else(config::get_default_name);

    match output {
        Some(path) => {
            debug!(name = %name, path = %path.display(), "greeting to file");
            greeting::greet(&name, Some(&path))
                .with_context(|| format!("Failed to write greeting to {}", path.display()))?;
            println!("{} {}", "Greeting written to".green(), path.display());
        }
        None => {
            greeting::greet(&name, None)?;
        }
    }

    Ok(())
}
