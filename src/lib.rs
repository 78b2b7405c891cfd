// Image URL Optimizer Library

pub mod config;
pub mod constants;
pub mod error;
pub mod image_url;
pub mod logging;

pub use config::{OptimizerConfig, PresetWidths, TransformDefaults};
pub use error::{ConfigError, OptimizerError};
pub use image_url::{
    optimize, optimize_by_size, DirectiveSet, ImageUrlOptimizer, OutputFormat, SizePreset,
    TransformRequest,
};
