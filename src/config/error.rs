//! Configuration loading errors.

/// Failure to read or parse a [`RupaConfig`](super::RupaConfig) file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigLoadError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(String),
    /// Config file is not valid YAML for the config schema
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_messages_and_conversion() {
        let err = ConfigLoadError::Parse("bad indent".to_string());
        assert_eq!(err.to_string(), "Parse error: bad indent");

        let wrapped: Error = ConfigLoadError::Io("missing".to_string()).into();
        assert_eq!(wrapped.to_string(), "Config error: IO error: missing");
    }
}
