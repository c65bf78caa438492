use thiserror::Error;

/// Unified error type for gdata-version operations
#[derive(Error, Debug)]
pub enum VersionMapError {
    #[error("No version matching <major>.<minor>[<letter><digits>] found in '{input}'")]
    PatternMismatch { input: String },

    #[error("Missing required argument: source version")]
    MissingArgument,

    #[error("Mapping '{input}' yields a negative version ({major}.{minor})")]
    NegativeComponent {
        input: String,
        major: i128,
        minor: i128,
    },

    #[error("{component} version '{value}' is out of range")]
    ComponentOutOfRange {
        component: &'static str,
        value: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid version pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenience type alias for Results in gdata-version
pub type Result<T> = std::result::Result<T, VersionMapError>;

impl VersionMapError {
    /// Create a pattern mismatch error for the given input
    pub fn pattern_mismatch(input: impl Into<String>) -> Self {
        VersionMapError::PatternMismatch {
            input: input.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionMapError::Config(msg.into())
    }

    /// Create an out-of-range error for a numeric component
    pub fn out_of_range(component: &'static str, value: impl Into<String>) -> Self {
        VersionMapError::ComponentOutOfRange {
            component,
            value: value.into(),
        }
    }
}

impl From<toml::de::Error> for VersionMapError {
    fn from(err: toml::de::Error) -> Self {
        VersionMapError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VersionMapError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VersionMapError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_pattern_mismatch_names_input() {
        let err = VersionMapError::pattern_mismatch("nightly");
        assert!(err.to_string().contains("'nightly'"));
    }

    #[test]
    fn test_negative_component_display() {
        let err = VersionMapError::NegativeComponent {
            input: "2.0".to_string(),
            major: -1,
            minor: 9,
        };
        assert_eq!(
            err.to_string(),
            "Mapping '2.0' yields a negative version (-1.9)"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let err = VersionMapError::out_of_range("Major", "99999999999999999999999");
        assert_eq!(
            err.to_string(),
            "Major version '99999999999999999999999' is out of range"
        );
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (VersionMapError::config("x"), "Configuration error"),
            (VersionMapError::pattern_mismatch("x"), "No version matching"),
            (VersionMapError::MissingArgument, "Missing required argument"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_toml_error_becomes_config_error() {
        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: VersionMapError = toml_err.into();
        assert!(matches!(err, VersionMapError::Config(_)));
    }
}
