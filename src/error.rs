//! Error types for specification loading and validation.
//!
//! A bad specification aborts the whole synthesis before any
//! electromagnetic calculation or geometry construction runs; a partial
//! fabrication outline is worse than no outline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating a design specification.
#[derive(Error, Debug)]
pub enum SpecError {
    /// Specification file could not be read.
    #[error("failed to read specification file: {path}")]
    ReadError {
        /// Path to the specification file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Specification file could not be parsed.
    #[error("failed to parse specification file: {path}")]
    ParseError {
        /// Path to the specification file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Specification file not found.
    #[error("specification file not found: {path}")]
    NotFound {
        /// Path where the specification file was expected.
        path: PathBuf,
    },

    /// A parameter value is out of its physical range.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Description of the validation failure.
        message: String,
    },

    /// The requested array configuration has no known feed topology.
    #[error("unsupported array configuration: {message}")]
    UnsupportedTopology {
        /// Description of the unsupported combination.
        message: String,
    },
}

impl SpecError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an unsupported topology error.
    pub fn unsupported_topology(message: impl Into<String>) -> Self {
        Self::UnsupportedTopology {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_error_display() {
        let error = SpecError::NotFound {
            path: PathBuf::from("/path/to/antenna.json"),
        };
        let msg = error.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("antenna.json"));
    }

    #[test]
    fn invalid_parameter_display() {
        let error = SpecError::invalid_parameter("frequency", "must be positive");
        let msg = error.to_string();
        assert!(msg.contains("frequency"));
        assert!(msg.contains("must be positive"));
    }

    #[test]
    fn unsupported_topology_display() {
        let error = SpecError::unsupported_topology("patch_count 3 has no feed layout");
        assert!(error.to_string().contains("patch_count 3"));
    }
}
