//! Presentation settings and preferences
//!
//! Nothing here changes the simulation's outcome; it only decides how a
//! frame is drawn.

use serde::{Deserialize, Serialize};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Normalized RGBA for vertex data
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            alpha,
        ]
    }
}

/// Colors for game elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Open corridor
    pub cave: Rgb,
    /// Solid rock (frame background)
    pub walls: Rgb,
    pub player: Rgb,
    pub coin: Rgb,
    pub star: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            cave: Rgb::BLACK,
            walls: Rgb(30, 30, 30),
            player: Rgb::WHITE,
            coin: Rgb(200, 200, 0),
            star: Rgb::WHITE,
        }
    }
}

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Triangle-fan slices used for circles and ellipses
    pub fn curve_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 8,
            QualityPreset::Medium => 16,
            QualityPreset::High => 32,
        }
    }

    /// Whether to draw the starfield backdrop
    pub fn starfield_enabled(&self) -> bool {
        match self {
            QualityPreset::Low => false,
            QualityPreset::Medium => true,
            QualityPreset::High => true,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub quality: QualityPreset,
    pub palette: Palette,

    /// Draw the player's fading afterimage
    pub trails: bool,
    /// Starfield backdrop (also gated by the quality preset)
    pub starfield: bool,

    /// Where a display backend writes screenshots
    pub screenshot_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            palette: Palette::default(),
            trails: true,
            starfield: true,
            screenshot_path: "soar.png".to_string(),
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective starfield toggle (respects the quality preset)
    pub fn effective_starfield(&self) -> bool {
        self.starfield && self.quality.starfield_enabled()
    }
}
