//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only, passed in explicitly
//! - Stable iteration order (oldest to newest)
//! - No rendering or platform dependencies

pub mod cave;
pub mod coins;
pub mod player;
pub mod stars;
pub mod state;
pub mod tick;

pub use cave::{Cave, CavePiece, GapLimits};
pub use coins::{Coin, CoinManager};
pub use player::Player;
pub use stars::{Star, Starfield};
pub use state::{GamePhase, GameState};
pub use tick::{GameEvent, TickInput, autopilot_thrust, tick};
