use std::io;
use thiserror::Error;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Unified error type for all report operations
#[derive(Debug, Error)]
pub enum ReportError {
    // Archive model errors
    #[error("File not found in archive: {0}")]
    FileNotFound(String),

    #[error("Could not evaluate embedded file {path}: {reason}")]
    EvaluationFailed { path: String, reason: String },

    // Requirement errors
    #[error("Unknown requirement type: {0}")]
    UnknownRequirementType(String),

    #[error("Malformed requirement record: {0}")]
    MalformedRequirement(String),

    #[error("Requirements descriptor is not a list")]
    DescriptorNotList,

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(String),
}

impl From<toml::de::Error> for ReportError {
    fn from(err: toml::de::Error) -> Self {
        ReportError::TomlError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_error() {
        let err = ReportError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(matches!(err, ReportError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: closed");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ReportError::UnknownRequirementType("foo".into()).to_string(),
            "Unknown requirement type: foo"
        );
        assert_eq!(
            ReportError::FileNotFound(".box/.requirements.php".into()).to_string(),
            "File not found in archive: .box/.requirements.php"
        );
    }
}
