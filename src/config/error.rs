//! Configuration loading errors.

use std::fmt;

/// Error loading or parsing a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadError {
    /// The file could not be read.
    Io(String),
    /// The YAML contents could not be parsed.
    Parse(String),
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigLoadError::Io(msg) => write!(f, "failed to read config file: {}", msg),
            ConfigLoadError::Parse(msg) => write!(f, "failed to parse config file: {}", msg),
        }
    }
}

impl std::error::Error for ConfigLoadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConfigLoadError::Parse("bad indent".to_string());
        assert!(err.to_string().contains("bad indent"));
    }
}
