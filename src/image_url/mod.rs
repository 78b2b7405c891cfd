//! Cloudinary image URL rewriting
//!
//! Turns a stored image reference into a URL that asks the CDN for a
//! resized, requalified variant:
//!
//! ```text
//! https://res.cloudinary.com/demo/image/upload/v123/products/abc.webp
//! https://res.cloudinary.com/demo/image/upload/w_400,c_scale,q_auto,f_auto/v123/products/abc.webp
//! ```
//!
//! Non-CDN URLs and CDN URLs that do not have the expected shape are
//! returned unchanged. Empty input maps to a placeholder path.

pub mod directive;
pub mod optimizer;
pub mod params;
pub mod resource;

pub use directive::{is_transformation_segment, is_version_segment, DirectiveSet};
pub use optimizer::{optimize, optimize_by_size, ImageUrlOptimizer};
pub use params::{OutputFormat, SizePreset, TransformRequest};
pub use resource::{upgrade_scheme, ResourceUrl};
