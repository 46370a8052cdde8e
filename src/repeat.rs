use tracing::debug;

use crate::error::{GreetingsError, GreetingsResult};
use crate::greeting::greet;

/// Greet `name` on stdout `repetitions` times.
///
/// The capitalize flag is checked first, then the repetition count; both
/// fail before any greeting is emitted. Returns 0 once every greeting has
/// been written.
pub fn repeated_greetings(name: &str, repetitions: i32, capitalize: bool) -> GreetingsResult<i32> {
    if capitalize {
        return Err(GreetingsError::CapitalizeUnimplemented);
    }
    if repetitions <= 0 {
        return Err(GreetingsError::InvalidRepetitions(repetitions));
    }

    debug!(name, repetitions, "emitting greetings");
    for _ in 0..repetitions {
        greet(name, None)?;
    }
    Ok(0)
}
