//! Transformation directive segments
//!
//! The CDN reads a path segment such as `w_400,c_scale,q_auto,f_auto`
//! placed directly after the upload marker. Token order follows the CDN's
//! grammar: width, crop or scale, quality, format.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::params::TransformRequest;
use crate::constants::{DIRECTIVE_DELIMITER, DIRECTIVE_SEPARATOR};

static VERSION_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v\d+$").expect("version pattern is valid"));

/// Ordered directive tokens for one transformation segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveSet {
    tokens: Vec<String>,
}

impl DirectiveSet {
    pub fn from_request(request: &TransformRequest) -> Self {
        let mut tokens = Vec::with_capacity(5);

        tokens.push(format!("w_{}", request.width));

        match request.crop_height() {
            Some(height) => {
                tokens.push(format!("h_{}", height));
                tokens.push("c_fill".to_string());
            }
            None => tokens.push("c_scale".to_string()),
        }

        tokens.push(format!("q_{}", request.quality));

        if request.format.is_auto() {
            tokens.push("f_auto".to_string());
        } else {
            tokens.push(format!("f_{}", request.format.as_str()));
        }

        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Render as a single path segment
    pub fn to_segment(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DirectiveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", DIRECTIVE_SEPARATOR)?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

/// Whether a segment is a version pin such as `v1699999999`
pub fn is_version_segment(segment: &str) -> bool {
    VERSION_SEGMENT.is_match(segment)
}

/// Whether the segment after the upload marker already holds transformations
///
/// Shape-based: anything that is not a version pin and contains `_` counts.
/// A public id folder with an underscore in that position is misclassified
/// and would be overwritten.
pub fn is_transformation_segment(segment: &str) -> bool {
    !is_version_segment(segment) && segment.contains(DIRECTIVE_DELIMITER)
}
