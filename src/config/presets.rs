// Size preset width configuration

use serde::{Deserialize, Serialize};

use crate::constants::{CARD_WIDTH, LARGE_WIDTH, MEDIUM_WIDTH, THUMBNAIL_WIDTH};
use crate::error::ConfigError;
use crate::image_url::SizePreset;

/// Pixel width for each named size preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetWidths {
    #[serde(default = "default_thumbnail")]
    pub thumbnail: u32,
    #[serde(default = "default_card")]
    pub card: u32,
    #[serde(default = "default_medium")]
    pub medium: u32,
    #[serde(default = "default_large")]
    pub large: u32,
}

impl Default for PresetWidths {
    fn default() -> Self {
        Self {
            thumbnail: THUMBNAIL_WIDTH,
            card: CARD_WIDTH,
            medium: MEDIUM_WIDTH,
            large: LARGE_WIDTH,
        }
    }
}

impl PresetWidths {
    pub fn width(&self, preset: SizePreset) -> u32 {
        match preset {
            SizePreset::Thumbnail => self.thumbnail,
            SizePreset::Card => self.card,
            SizePreset::Medium => self.medium,
            SizePreset::Large => self.large,
        }
    }

    /// Width for a preset name; unknown names use the card width
    pub fn resolve(&self, name: &str) -> u32 {
        self.width(SizePreset::resolve(name))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for preset in SizePreset::ALL {
            if self.width(preset) == 0 {
                return Err(ConfigError::Invalid(format!(
                    "preset '{}' width must be greater than 0",
                    preset
                )));
            }
        }
        Ok(())
    }
}

fn default_thumbnail() -> u32 {
    THUMBNAIL_WIDTH
}

fn default_card() -> u32 {
    CARD_WIDTH
}

fn default_medium() -> u32 {
    MEDIUM_WIDTH
}

fn default_large() -> u32 {
    LARGE_WIDTH
}
