use anyhow::Result;
use tracing::debug;

use crate::config;
use crate::repeat::repeated_greetings;

/// Validate inputs and emit the greeting `repetitions` times on stdout.
///
/// Validation and unimplemented-feature errors bubble up untouched so the
/// caller sees the library's exact message.
pub fn run(name: Option<String>, repetitions: i32, capitalize: bool) -> Result<()> {
    let name = name.unwrap_or_else(config::get_default_name);

    debug!(name = %name, repetitions, capitalize, "repeat command");
    repeated_greetings(&name, repetitions, capitalize)?;

    Ok(())
}
