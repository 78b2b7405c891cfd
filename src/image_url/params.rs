//! Transformation request values
//!
//! A [`TransformRequest`] is built once per call and never mutated by the
//! optimizer. Unset fields take the documented defaults.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    CARD_WIDTH, DEFAULT_QUALITY, DEFAULT_WIDTH, LARGE_WIDTH, MEDIUM_WIDTH, THUMBNAIL_WIDTH,
};
use crate::error::OptimizerError;

/// Requested output format
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Let the CDN pick the best format for the client (`f_auto`)
    #[default]
    Auto,
    /// Explicit format token (`f_webp`, `f_png`, ...)
    Named(String),
}

impl OutputFormat {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Auto => "auto",
            Self::Named(name) => name,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("auto") {
            OutputFormat::Auto
        } else {
            OutputFormat::Named(s.to_string())
        }
    }
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OutputFormat::from(s))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size and encoding intent for one rewritten URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRequest {
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels; switches from scale to crop-fill
    pub height: Option<u32>,
    /// Quality token (`auto`, `auto:good`, `80`, ...)
    pub quality: String,
    /// Output format
    pub format: OutputFormat,
}

impl Default for TransformRequest {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: None,
            quality: DEFAULT_QUALITY.to_string(),
            format: OutputFormat::Auto,
        }
    }
}

impl TransformRequest {
    /// Request with the given width and default everything else
    pub fn with_width(width: u32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = quality.into();
        self
    }

    pub fn format(mut self, format: impl Into<OutputFormat>) -> Self {
        self.format = format.into();
        self
    }

    /// Height that should produce a crop-fill directive
    ///
    /// A zero height carries no size intent and is treated as absent.
    pub fn crop_height(&self) -> Option<u32> {
        self.height.filter(|h| *h > 0)
    }

    /// Check that every field renders into a single well-formed directive
    pub fn validate(&self) -> Result<(), OptimizerError> {
        if self.width == 0 {
            return Err(OptimizerError::invalid_request(
                "width",
                "must be greater than 0",
            ));
        }

        if self.quality.trim().is_empty() {
            return Err(OptimizerError::invalid_request("quality", "cannot be empty"));
        }
        validate_token("quality", &self.quality)?;

        if let OutputFormat::Named(name) = &self.format {
            validate_token("format", name)?;
        }

        Ok(())
    }
}

/// Characters that would split the directive segment or end the URL path
const FORBIDDEN_TOKEN_CHARS: [char; 4] = ['/', '\\', '?', '#'];

fn validate_token(field: &str, token: &str) -> Result<(), OptimizerError> {
    match token.chars().find(|c| FORBIDDEN_TOKEN_CHARS.contains(c)) {
        Some(c) => Err(OptimizerError::invalid_request(
            field,
            format!("'{}' contains forbidden character '{}'", token, c),
        )),
        None => Ok(()),
    }
}

/// Named width shorthands used by the site's layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizePreset {
    Thumbnail,
    #[default]
    Card,
    Medium,
    Large,
}

impl SizePreset {
    pub const ALL: [SizePreset; 4] = [
        SizePreset::Thumbnail,
        SizePreset::Card,
        SizePreset::Medium,
        SizePreset::Large,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail",
            Self::Card => "card",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Built-in width for this preset
    pub fn width(&self) -> u32 {
        match self {
            Self::Thumbnail => THUMBNAIL_WIDTH,
            Self::Card => CARD_WIDTH,
            Self::Medium => MEDIUM_WIDTH,
            Self::Large => LARGE_WIDTH,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Lenient lookup: unknown names resolve to [`SizePreset::Card`]
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }
}

impl FromStr for SizePreset {
    type Err = OptimizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| OptimizerError::unknown_preset(s))
    }
}

impl fmt::Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
