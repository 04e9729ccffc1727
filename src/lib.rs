//! Soar - a side-scrolling cave flyer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (cave generation, player, coins, tick)
//! - `geom`: Pixel rectangles and unit types
//! - `renderer`: Backend-agnostic drawing and mesh tessellation
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation preferences

pub mod geom;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use geom::{Cells, HalfTurns, Rect};
pub use settings::{Palette, QualityPreset, Rgb, Settings};
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Default gameplay constants (see [`Tuning`] for the runtime values)
pub mod consts {
    /// Display surface size in pixels
    pub const DISPLAY_SIZE: [i32; 2] = [1000, 700];
    pub const PLAYER_SIZE: [i32; 2] = [50, 50];

    /// Width of one cave column, and the size of a coin
    pub const CELL_SIZE: i32 = 20;
    /// Narrowest gap the generator may produce, in cells
    pub const GAP_MINIMUM: i32 = 10;
    /// Rows kept closed at the top and bottom when the gap is at its widest
    pub const GAP_MARGIN: i32 = 2;
    /// Largest row/gap change between neighbouring columns, in cells
    pub const MAX_STEP: i32 = 1;

    /// Fraction of the column count where the wall-hit band starts and ends
    pub const BAND_START: f64 = 0.3;
    pub const BAND_END: f64 = 0.6;

    /// Player speed in pixels per tick
    pub const PLAYER_SPEED: f32 = 10.0;
    /// Starting heading (half-turns): flying right
    pub const START_ANGLE: f32 = 0.5;
    /// Per-tick clockwise rotation pulling the nose down
    pub const GRAVITY_STEP: f32 = -0.01;
    /// Per-tick counter-clockwise rotation while thrusting
    pub const THRUST_STEP: f32 = 0.02;
    /// Pixels a trail ghost shrinks by each tick
    pub const TRAIL_DECAY: i32 = 1;

    /// Per-tick probability of a coin spawning
    pub const COIN_SPAWN_CHANCE: f64 = 0.02;
    pub const STAR_COUNT: usize = 350;

    /// Nominal frame rate; one tick per frame
    pub const FRAME_RATE: u32 = 30;
    /// Pixels of horizontal travel per distance point
    pub const DISTANCE_UNIT: f32 = 10.0;
}

/// Convert a speed and heading into a per-tick displacement.
///
/// Heading 0 is straight down, so `x` follows the sine and `y` the cosine.
#[inline]
pub fn heading_to_vector(speed: f32, heading: HalfTurns) -> Vec2 {
    let theta = heading.radians();
    Vec2::new(speed * theta.sin(), speed * theta.cos())
}
