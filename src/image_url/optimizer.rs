//! CDN image URL optimizer
//!
//! Decision sequence for every call:
//! 1. no usable reference → placeholder path
//! 2. URL without the CDN host marker → returned unchanged
//! 3. CDN URL without the upload marker → returned unchanged
//! 4. otherwise the directive segment is inserted after the marker, or
//!    replaces the transformation segment already there
//!
//! Parse failures and requests that would render a malformed directive
//! segment are logged and fall back to the original URL. The public entry
//! points never return an error and never panic.

use std::sync::LazyLock;

use super::directive::DirectiveSet;
use super::params::{SizePreset, TransformRequest};
use super::resource::ResourceUrl;
use crate::config::OptimizerConfig;
use crate::error::OptimizerError;

static DEFAULT_OPTIMIZER: LazyLock<ImageUrlOptimizer> = LazyLock::new(ImageUrlOptimizer::default);

/// Rewrites CDN image URLs according to an [`OptimizerConfig`]
#[derive(Debug, Clone, Default)]
pub struct ImageUrlOptimizer {
    config: OptimizerConfig,
}

impl ImageUrlOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Request built from the configured defaults
    pub fn default_request(&self) -> TransformRequest {
        self.config.defaults.to_request()
    }

    /// Whether `url` is addressed to the configured CDN
    pub fn is_cdn_url(&self, url: &str) -> bool {
        url.contains(self.config.host_marker.as_str())
    }

    /// Rewrite `url` for `request`, falling back instead of failing
    pub fn optimize(&self, url: Option<&str>, request: &TransformRequest) -> String {
        let url = match url {
            Some(url) if !url.is_empty() => url,
            _ => return self.config.placeholder.clone(),
        };

        if !self.is_cdn_url(url) {
            tracing::debug!(url = %url, "Not a CDN URL, passing through");
            return url.to_string();
        }

        match self.try_optimize(url, request) {
            Ok(optimized) => optimized,
            Err(OptimizerError::MissingUploadMarker { marker }) => {
                tracing::debug!(
                    url = %url,
                    marker = %marker,
                    "CDN URL has no upload marker, passing through"
                );
                url.to_string()
            }
            Err(e) => {
                tracing::warn!(
                    url = %url,
                    error = %e,
                    "Failed to optimize image URL, returning original"
                );
                url.to_string()
            }
        }
    }

    /// Fallible core of [`optimize`](Self::optimize)
    ///
    /// Does not check the host marker; the caller decides which URLs are
    /// worth rewriting. Requests failing [`TransformRequest::validate`] are
    /// rejected before the URL is parsed.
    pub fn try_optimize(
        &self,
        url: &str,
        request: &TransformRequest,
    ) -> Result<String, OptimizerError> {
        request.validate()?;
        let resource = ResourceUrl::parse(url, &self.config.upload_marker)?;
        let directives = DirectiveSet::from_request(request);
        Ok(resource.apply(&directives))
    }

    /// Rewrite `url` at the width of a named preset
    ///
    /// Unknown preset names use the card width. Quality and format come
    /// from the configured defaults.
    pub fn optimize_by_size(&self, url: Option<&str>, preset: &str) -> String {
        let request = TransformRequest {
            width: self.config.presets.resolve(preset),
            ..self.default_request()
        };
        self.optimize(url, &request)
    }

    pub fn optimize_with_preset(&self, url: Option<&str>, preset: SizePreset) -> String {
        let request = TransformRequest {
            width: self.config.presets.width(preset),
            ..self.default_request()
        };
        self.optimize(url, &request)
    }
}

/// Rewrite a Cloudinary URL with the built-in configuration
///
/// ```
/// use image_url_optimizer::{optimize, TransformRequest};
///
/// let url = "http://res.cloudinary.com/demo/image/upload/v1/sample.jpg";
/// assert_eq!(
///     optimize(Some(url), &TransformRequest::default()),
///     "https://res.cloudinary.com/demo/image/upload/w_400,c_scale,q_auto,f_auto/v1/sample.jpg"
/// );
/// assert_eq!(optimize(None, &TransformRequest::default()), "/placeholder.svg");
/// ```
pub fn optimize(url: Option<&str>, request: &TransformRequest) -> String {
    DEFAULT_OPTIMIZER.optimize(url, request)
}

/// Rewrite a Cloudinary URL at a preset width with the built-in configuration
pub fn optimize_by_size(url: Option<&str>, preset: &str) -> String {
    DEFAULT_OPTIMIZER.optimize_by_size(url, preset)
}
