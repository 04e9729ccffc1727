//! Game state and session bookkeeping
//!
//! Everything one run mutates lives in [`GameState`] and is only changed by
//! [`tick`](super::tick::tick).

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cave::Cave;
use super::coins::CoinManager;
use super::player::Player;
use super::stars::Starfield;
use crate::geom::Rect;
use crate::settings::Palette;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Flying
    Playing,
    /// Hit a wall or quit
    GameOver,
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// The run's only random source
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Scroll boundary (the display surface)
    pub boundary: Rect,
    pub cave: Cave,
    pub coins: CoinManager,
    pub starfield: Starfield,
    pub player: Player,
    /// Horizontal progress in distance units
    pub distance: i64,
    /// Coins collected
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
}

impl GameState {
    /// Start a run with the given seed
    pub fn new(seed: u64, tuning: Tuning, palette: &Palette) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let boundary = tuning.boundary();

        let cave = Cave::from_tuning(boundary, palette.cave, &tuning, &mut rng);
        let starfield = Starfield::generate(boundary, tuning.star_count, palette.star, &mut rng);
        let coins = CoinManager::new(boundary, tuning.coin_spawn_chance, palette.coin);
        let player = Player::from_tuning(tuning.player_rect(), &tuning);

        log::info!(
            "New run: seed {seed}, {}x{} surface, {} cave columns",
            boundary.w,
            boundary.h,
            cave.len()
        );

        Self {
            seed,
            rng,
            tuning,
            boundary,
            cave,
            coins,
            starfield,
            player,
            distance: 0,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Console status line: `"{distance} - {score}"`
    pub fn status_line(&self) -> String {
        format!("{} - {}", self.distance, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_run_starts_clean() {
        let state = GameState::new(1234, Tuning::default(), &Palette::default());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.cave.len(), 50);
        assert_eq!(state.starfield.len(), 350);
        assert!(state.coins.coins().is_empty());
        assert_eq!(state.player.rect, Rect::new(475, 325, 50, 50));
        assert_eq!(state.status_line(), "0 - 0");
    }
}
