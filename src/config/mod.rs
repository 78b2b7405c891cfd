// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    DEFAULT_FORMAT, DEFAULT_HOST_MARKER, DEFAULT_PLACEHOLDER, DEFAULT_QUALITY,
    DEFAULT_UPLOAD_MARKER, DEFAULT_WIDTH,
};
use crate::error::ConfigError;
use crate::image_url::{OutputFormat, TransformRequest};

pub mod presets;

pub use presets::PresetWidths;

/// Optimizer configuration
///
/// Every field has a default, so an empty YAML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Substring a URL must contain to be treated as a CDN URL
    #[serde(default = "default_host_marker")]
    pub host_marker: String,

    /// Path segment after which transformations are inserted
    #[serde(default = "default_upload_marker")]
    pub upload_marker: String,

    /// Returned for empty input
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default)]
    pub defaults: TransformDefaults,

    #[serde(default)]
    pub presets: PresetWidths,
}

/// Values used for request fields the caller leaves unset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformDefaults {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_quality")]
    pub quality: String,

    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for TransformDefaults {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            quality: DEFAULT_QUALITY.to_string(),
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

impl TransformDefaults {
    /// Request carrying these defaults and no height
    pub fn to_request(&self) -> TransformRequest {
        TransformRequest {
            width: self.width,
            height: None,
            quality: self.quality.clone(),
            format: OutputFormat::from(self.format.as_str()),
        }
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            host_marker: DEFAULT_HOST_MARKER.to_string(),
            upload_marker: DEFAULT_UPLOAD_MARKER.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            defaults: TransformDefaults::default(),
            presets: PresetWidths::default(),
        }
    }
}

fn default_host_marker() -> String {
    DEFAULT_HOST_MARKER.to_string()
}

fn default_upload_marker() -> String {
    DEFAULT_UPLOAD_MARKER.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_quality() -> String {
    DEFAULT_QUALITY.to_string()
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl OptimizerConfig {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, ConfigError> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let mut missing = None;
        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                missing.get_or_insert_with(|| var_name.to_string());
                String::new()
            })
        });

        if let Some(name) = missing {
            return Err(ConfigError::MissingEnvVar { name });
        }

        // An empty document deserializes to unit, not a mapping
        if substituted.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&substituted)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host_marker.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "host_marker cannot be empty".to_string(),
            ));
        }

        if self.upload_marker.is_empty() {
            return Err(ConfigError::Invalid(
                "upload_marker cannot be empty".to_string(),
            ));
        }

        if self.upload_marker.contains('/') {
            return Err(ConfigError::Invalid(format!(
                "upload_marker '{}' must be a single path segment",
                self.upload_marker
            )));
        }

        if self.placeholder.is_empty() {
            return Err(ConfigError::Invalid(
                "placeholder cannot be empty".to_string(),
            ));
        }

        if self.defaults.width == 0 {
            return Err(ConfigError::Invalid(
                "defaults.width must be greater than 0".to_string(),
            ));
        }

        if self.defaults.quality.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "defaults.quality cannot be empty".to_string(),
            ));
        }

        self.presets.validate()
    }
}
