//! Coin pickups
//!
//! Coins appear at random inside the newest cave column, ride the scroll
//! with the rest of the world, and are collected on contact.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::cave::Cave;
use super::player::Player;
use crate::geom::Rect;
use crate::settings::Rgb;

/// A single pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub rect: Rect,
    pub color: Rgb,
}

impl Coin {
    pub fn translate(&mut self, delta: IVec2) {
        self.rect.translate(delta);
    }

    pub fn touches(&self, body: &Rect) -> bool {
        self.rect.intersects(body)
    }
}

/// Spawns, scrolls and collects coins
#[derive(Debug, Clone)]
pub struct CoinManager {
    boundary: Rect,
    spawn_chance: f64,
    color: Rgb,
    pub(crate) coins: Vec<Coin>,
}

impl CoinManager {
    pub fn new(boundary: Rect, spawn_chance: f64, color: Rgb) -> Self {
        Self {
            boundary,
            spawn_chance,
            color,
            coins: Vec::new(),
        }
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// Advance one tick and return how many coins the player collected.
    ///
    /// Collected and scrolled-out coins are dropped in one pass; a new coin
    /// may then spawn in the cave's newest column.
    pub fn update<R: Rng>(
        &mut self,
        movement: IVec2,
        player: &Player,
        cave: &Cave,
        rng: &mut R,
    ) -> u32 {
        let boundary = self.boundary;
        let mut picked = 0;

        self.coins.retain_mut(|coin| {
            coin.translate(movement);
            if coin.touches(&player.rect) {
                picked += 1;
                false
            } else {
                boundary.intersects(&coin.rect)
            }
        });

        if rng.random::<f64>() <= self.spawn_chance {
            self.spawn(cave, rng);
        }

        picked
    }

    /// Drop a one-cell coin somewhere in the newest column's gap
    fn spawn<R: Rng>(&mut self, cave: &Cave, rng: &mut R) {
        let Some(piece) = cave.newest() else {
            return;
        };

        let size = cave.cell_size();
        let y = rng.random_range(piece.rect.top()..=piece.rect.bottom());
        self.coins.push(Coin {
            rect: Rect::new(piece.rect.x, y, size, size),
            color: self.color,
        });
    }
}
