//! CDN resource URL parsing and reassembly
//!
//! A resource URL looks like
//! `https://res.cloudinary.com/{cloud}/image/upload/[{transformations}/][v{version}/]{public_id}`.
//! Parsing is explicit and fallible; callers decide what a failure means.

use std::borrow::Cow;

use url::Url;

use super::directive::{is_transformation_segment, DirectiveSet};
use crate::error::OptimizerError;

const INSECURE_PREFIX: &str = "http://";
const SECURE_SCHEME: &str = "https";

/// Rewrite a leading `http://` to `https://`
pub fn upgrade_scheme(url: &str) -> Cow<'_, str> {
    match url.get(..INSECURE_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(INSECURE_PREFIX) => Cow::Owned(format!(
            "{}://{}",
            SECURE_SCHEME,
            &url[INSECURE_PREFIX.len()..]
        )),
        _ => Cow::Borrowed(url),
    }
}

/// A parsed CDN URL with its upload marker located
#[derive(Debug, Clone)]
pub struct ResourceUrl {
    url: Url,
    segments: Vec<String>,
    marker_index: usize,
}

impl ResourceUrl {
    /// Parse `raw` and locate the `upload_marker` path segment
    ///
    /// The scheme is upgraded to https before parsing. Empty path segments
    /// are dropped.
    pub fn parse(raw: &str, upload_marker: &str) -> Result<Self, OptimizerError> {
        let secure = upgrade_scheme(raw);
        let mut url = Url::parse(&secure).map_err(|e| OptimizerError::invalid_url(raw, e))?;

        if url.cannot_be_a_base() {
            return Err(OptimizerError::invalid_url(raw, "URL cannot carry a path"));
        }

        if url.scheme() != SECURE_SCHEME {
            let scheme = url.scheme().to_string();
            url.set_scheme(SECURE_SCHEME).map_err(|()| {
                OptimizerError::invalid_url(
                    raw,
                    format!("scheme '{}' cannot be upgraded to https", scheme),
                )
            })?;
        }

        let segments: Vec<String> = url
            .path_segments()
            .map(|parts| {
                parts
                    .filter(|part| !part.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let marker_index = segments
            .iter()
            .position(|segment| segment == upload_marker)
            .ok_or_else(|| OptimizerError::missing_upload_marker(upload_marker))?;

        Ok(Self {
            url,
            segments,
            marker_index,
        })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn marker_index(&self) -> usize {
        self.marker_index
    }

    /// Transformation segment already following the upload marker, if any
    pub fn existing_transformation(&self) -> Option<&str> {
        self.segments
            .get(self.marker_index + 1)
            .map(String::as_str)
            .filter(|segment| is_transformation_segment(segment))
    }

    /// Apply `directives` and serialize the result
    ///
    /// An existing transformation segment is superseded in place, never
    /// merged. Otherwise the new segment goes directly after the marker.
    pub fn apply(mut self, directives: &DirectiveSet) -> String {
        let segment = directives.to_segment();
        let slot = self.marker_index + 1;

        if self.existing_transformation().is_some() {
            self.segments[slot] = segment;
        } else {
            self.segments.insert(slot, segment);
        }

        let path = format!("/{}", self.segments.join("/"));
        self.url.set_path(&path);
        String::from(self.url)
    }
}
