pub type GreetingsResult<T> = Result<T, GreetingsError>;

#[derive(Debug, thiserror::Error)]
pub enum GreetingsError {
    /// Caller passed a non-positive repetition count; fix the input and retry.
    #[error("Expected a strictly positive value for repetitions, got {0}")]
    InvalidRepetitions(i32),

    /// Capitalization is a declared feature gap, not a usage mistake. No
    /// casing semantics are defined, so callers must not work around this.
    #[error("Capitalization is not implemented yet !")]
    CapitalizeUnimplemented,

    /// Native I/O failures pass through unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_repetitions_message_echoes_value() {
        let err = GreetingsError::InvalidRepetitions(-1);
        assert_eq!(
            err.to_string(),
            "Expected a strictly positive value for repetitions, got -1"
        );
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let expected = io_err.to_string();
        let err: GreetingsError = io_err.into();
        assert_eq!(err.to_string(), expected);
    }
}
