//! Data-driven game balance
//!
//! Every gameplay number lives here with its classic default. A tuning file
//! is plain JSON; fields that are left out keep their defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::geom::Rect;

/// Error loading or validating a tuning file
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read tuning file: {err}"),
            Self::Parse(err) => write!(f, "malformed tuning JSON: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Surface ===
    /// Display (and scroll boundary) size in pixels
    pub display_size: [i32; 2],
    pub player_size: [i32; 2],

    // === Cave generation ===
    pub cell_size: i32,
    /// Narrowest gap, in cells
    pub gap_minimum: i32,
    /// Closed rows left when the gap is widest
    pub gap_margin: i32,
    /// Largest per-column change of top row and gap size, in cells
    pub max_step: i32,
    /// Wall-hit band as fractions of the column count
    pub band_start: f64,
    pub band_end: f64,

    // === Player ===
    pub player_speed: f32,
    pub start_angle: f32,
    pub gravity_step: f32,
    pub thrust_step: f32,
    pub trail_decay: i32,

    // === Pickups and backdrop ===
    pub coin_spawn_chance: f64,
    pub star_count: usize,

    // === Pacing ===
    pub frame_rate: u32,
    pub distance_unit: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            display_size: DISPLAY_SIZE,
            player_size: PLAYER_SIZE,

            cell_size: CELL_SIZE,
            gap_minimum: GAP_MINIMUM,
            gap_margin: GAP_MARGIN,
            max_step: MAX_STEP,
            band_start: BAND_START,
            band_end: BAND_END,

            player_speed: PLAYER_SPEED,
            start_angle: START_ANGLE,
            gravity_step: GRAVITY_STEP,
            thrust_step: THRUST_STEP,
            trail_decay: TRAIL_DECAY,

            coin_spawn_chance: COIN_SPAWN_CHANCE,
            star_count: STAR_COUNT,

            frame_rate: FRAME_RATE,
            distance_unit: DISTANCE_UNIT,
        }
    }
}

impl Tuning {
    /// The display surface, anchored at the origin
    pub fn boundary(&self) -> Rect {
        Rect::new(0, 0, self.display_size[0], self.display_size[1])
    }

    /// Starting player rectangle, centered on the display
    pub fn player_rect(&self) -> Rect {
        let [dw, dh] = self.display_size;
        let [pw, ph] = self.player_size;
        let x = (dw as f32 / 2.0 - pw as f32 / 2.0).round() as i32;
        let y = (dh as f32 / 2.0 - ph as f32 / 2.0).round() as i32;
        Rect::new(x, y, pw, ph)
    }

    /// Number of cell rows on the display (rounded)
    pub fn rows(&self) -> i32 {
        (self.display_size[1] as f64 / self.cell_size as f64).round() as i32
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> TuningError {
            TuningError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if self.display_size.iter().any(|&d| d <= 0) {
            return Err(invalid("display_size", "dimensions must be positive"));
        }
        if self.player_size.iter().any(|&d| d <= 0) {
            return Err(invalid("player_size", "dimensions must be positive"));
        }
        if self.cell_size <= 0 {
            return Err(invalid("cell_size", "must be positive"));
        }
        if self.gap_minimum < 1 {
            return Err(invalid("gap_minimum", "must be at least one cell"));
        }
        let gap_maximum = self.rows() - self.gap_margin;
        if self.gap_minimum > gap_maximum {
            return Err(invalid(
                "gap_minimum",
                format!("{} exceeds the widest possible gap {gap_maximum}", self.gap_minimum),
            ));
        }
        if self.max_step < 0 {
            return Err(invalid("max_step", "must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.band_start)
            || !(0.0..=1.0).contains(&self.band_end)
            || self.band_start >= self.band_end
        {
            return Err(invalid("band_start", "band must satisfy 0 <= start < end <= 1"));
        }
        if !(0.0..=1.0).contains(&self.coin_spawn_chance) {
            return Err(invalid("coin_spawn_chance", "must be a probability"));
        }
        if self.trail_decay <= 0 {
            return Err(invalid("trail_decay", "must be positive"));
        }
        if self.frame_rate == 0 {
            return Err(invalid("frame_rate", "must be positive"));
        }
        if self.distance_unit <= 0.0 {
            return Err(invalid("distance_unit", "must be positive"));
        }
        Ok(())
    }

    /// Parse and validate tuning JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.rows(), 35);
        assert_eq!(tuning.player_rect(), Rect::new(475, 325, 50, 50));
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::default();
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "player_speed": 12.5, "gap_minimum": 8 }"#).unwrap();
        assert_eq!(tuning.player_speed, 12.5);
        assert_eq!(tuning.gap_minimum, 8);
        assert_eq!(tuning.cell_size, CELL_SIZE);
        assert_eq!(tuning.coin_spawn_chance, COIN_SPAWN_CHANCE);
    }

    #[test]
    fn test_rejects_impossible_gap() {
        let err = Tuning::from_json(r#"{ "gap_minimum": 40 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "gap_minimum", .. }));
    }

    #[test]
    fn test_rejects_inverted_band() {
        let err = Tuning::from_json(r#"{ "band_start": 0.7, "band_end": 0.2 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "band_start", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("malformed tuning JSON"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::load("/definitely/not/here/tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }
}
