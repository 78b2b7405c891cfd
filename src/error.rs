// Error types module

use thiserror::Error;

/// Errors raised while rewriting a CDN image URL
///
/// None of these escape [`crate::optimize`] or [`crate::optimize_by_size`];
/// they exist so the fallible core can be inspected and tested directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizerError {
    /// The string could not be parsed as an absolute, path-bearing URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The URL path has no segment equal to the upload marker
    #[error("URL path has no '{marker}' segment")]
    MissingUploadMarker { marker: String },

    /// A request field would produce a malformed directive segment
    #[error("Invalid {field}: {message}")]
    InvalidRequest { field: String, message: String },

    /// Size preset name is not one of the known presets
    #[error("Unknown size preset: {name}")]
    UnknownPreset { name: String },
}

impl OptimizerError {
    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        OptimizerError::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn missing_upload_marker(marker: impl Into<String>) -> Self {
        OptimizerError::MissingUploadMarker {
            marker: marker.into(),
        }
    }

    pub fn invalid_request(field: impl Into<String>, message: impl Into<String>) -> Self {
        OptimizerError::InvalidRequest {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn unknown_preset(name: impl Into<String>) -> Self {
        OptimizerError::UnknownPreset { name: name.into() }
    }
}

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Environment variable '{name}' is referenced but not set")]
    MissingEnvVar { name: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
