//! Crate-level error types.

use std::fmt;

/// Errors produced by the chasecam crate.
///
/// Only configuration I/O is fallible; a camera tick never errors.
#[derive(Debug)]
pub enum ChaseCamError {
    /// Generic I/O failure while reading or writing a preset.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ChaseCamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ChaseCamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for ChaseCamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = ChaseCamError::OptionsParse("bad key".to_owned());
        assert_eq!(err.to_string(), "options parse error: bad key");
    }

    #[test]
    fn io_errors_expose_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ChaseCamError::from(io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
