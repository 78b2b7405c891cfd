// Constants module - centralized default values for configuration
//
// These mirror the CDN's URL grammar and the site's image sizing conventions.
// Keeping them here lets the config layer and the optimizer share one source.

// =============================================================================
// CDN URL grammar
// =============================================================================

/// Substring identifying a Cloudinary-hosted URL
pub const DEFAULT_HOST_MARKER: &str = "cloudinary.com";

/// Path segment separating the account/asset-type prefix from
/// the transformation, version and public id suffix
pub const DEFAULT_UPLOAD_MARKER: &str = "upload";

/// Separator between directive tokens inside one path segment
pub const DIRECTIVE_SEPARATOR: char = ',';

/// Character every directive token contains (`w_400`, `q_auto`)
pub const DIRECTIVE_DELIMITER: char = '_';

// =============================================================================
// Output defaults
// =============================================================================

/// Returned when the caller has no usable image reference
pub const DEFAULT_PLACEHOLDER: &str = "/placeholder.svg";

/// Default requested width in pixels
pub const DEFAULT_WIDTH: u32 = 400;

/// Default quality token
pub const DEFAULT_QUALITY: &str = "auto";

/// Default format token
pub const DEFAULT_FORMAT: &str = "auto";

// =============================================================================
// Size presets
// =============================================================================

/// Thumbnail preset width in pixels
pub const THUMBNAIL_WIDTH: u32 = 294;

/// Card preset width in pixels (also the fallback for unknown presets)
pub const CARD_WIDTH: u32 = 400;

/// Medium preset width in pixels
pub const MEDIUM_WIDTH: u32 = 600;

/// Large preset width in pixels
pub const LARGE_WIDTH: u32 = 800;
