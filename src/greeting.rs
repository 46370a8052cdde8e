use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Format the greeting message for a name.
///
/// Single source of truth for the message text so the console and file
/// paths cannot drift apart.
pub fn format_greeting(name: &str) -> String {
    format!("Hello {} !", name)
}

/// Greet a name, either on stdout (default) or into a file.
///
/// The console path appends the platform line terminator; the file path
/// writes the bare message with no trailing newline. The file handle is
/// scoped and released on every exit path.
pub fn greet(name: &str, file: Option<&Path>) -> io::Result<()> {
    let msg = format_greeting(name);
    match file {
        Some(path) => {
            debug!(path = %path.display(), "writing greeting to file");
            let mut fh = File::create(path)?;
            fh.write_all(msg.as_bytes())?;
        }
        None => {
            debug!("writing greeting to stdout");
            println!("{}", msg);
        }
    }
    Ok(())
}

/// Greet into any writer, message plus newline.
///
/// Stream-parameter twin of [`greet`]; both go through [`format_greeting`],
/// so the message text is byte-identical for the same name.
pub fn greet_to(name: &str, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", format_greeting(name))
}
