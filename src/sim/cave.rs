//! Procedural cave corridor
//!
//! The corridor is a run of one-cell-wide columns laid edge to edge. Each
//! column's rectangle marks the open gap at that position; everything above
//! and below it is rock. Columns are grown at the right edge of the screen,
//! scrolled left with the world, and retired once they leave the boundary.

use std::collections::VecDeque;

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::geom::{Cells, Rect};
use crate::settings::Rgb;
use crate::tuning::Tuning;

/// One column of the corridor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CavePiece {
    pub rect: Rect,
    pub color: Rgb,
}

impl CavePiece {
    pub fn translate(&mut self, delta: IVec2) {
        self.rect.translate(delta);
    }

    /// Grid row of the gap's top edge
    pub fn top_row(&self, cell_size: i32) -> Cells {
        Cells::from_pixels(self.rect.y, cell_size)
    }

    /// Gap height in cells
    pub fn gap_size(&self, cell_size: i32) -> Cells {
        Cells::from_pixels(self.rect.h, cell_size)
    }
}

/// Bounds on how the corridor may vary, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapLimits {
    pub minimum: Cells,
    pub maximum: Cells,
    /// Largest change of top row and of gap size between neighbours
    pub max_step: Cells,
}

/// The scrolling cave corridor
#[derive(Debug, Clone)]
pub struct Cave {
    boundary: Rect,
    cell_size: i32,
    cols: Cells,
    rows: Cells,
    color: Rgb,
    limits: GapLimits,
    band: (f64, f64),
    /// Oldest (leftmost) first
    pub(crate) pieces: VecDeque<CavePiece>,
}

impl Cave {
    /// Build a corridor with the default generation parameters
    pub fn new<R: Rng>(boundary: Rect, cell_size: i32, color: Rgb, rng: &mut R) -> Self {
        let tuning = Tuning {
            cell_size,
            ..Tuning::default()
        };
        Self::from_tuning(boundary, color, &tuning, rng)
    }

    /// Build a corridor and pre-fill it across the whole boundary width
    pub fn from_tuning<R: Rng>(
        boundary: Rect,
        color: Rgb,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Self {
        let mut cave = Self::empty(boundary, color, tuning);

        let shift = IVec2::new(-cave.cell_size, 0);
        for _ in 0..cave.cols.0 {
            cave.spawn_piece(rng);
            cave.shift(shift);
        }

        log::debug!(
            "Cave pre-filled: {} pieces, {}x{} cells, gap {}..={}",
            cave.pieces.len(),
            cave.cols.0,
            cave.rows.0,
            cave.limits.minimum.0,
            cave.limits.maximum.0
        );
        cave
    }

    /// A corridor with no pieces yet
    pub fn empty(boundary: Rect, color: Rgb, tuning: &Tuning) -> Self {
        let cell_size = tuning.cell_size.max(1);
        let cols = Cells((boundary.w as f64 / cell_size as f64).round() as i32);
        let rows = Cells((boundary.h as f64 / cell_size as f64).round() as i32);
        let minimum = Cells(tuning.gap_minimum.max(1));
        // A boundary too short for the margin still gets a usable range
        let maximum = Cells((rows.0 - tuning.gap_margin).max(minimum.0));

        Self {
            boundary,
            cell_size,
            cols,
            rows,
            color,
            limits: GapLimits {
                minimum,
                maximum,
                max_step: Cells(tuning.max_step.max(0)),
            },
            band: (tuning.band_start, tuning.band_end),
            pieces: VecDeque::new(),
        }
    }

    pub fn boundary(&self) -> Rect {
        self.boundary
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Boundary size in cells as `[cols, rows]`
    pub fn scale(&self) -> [Cells; 2] {
        [self.cols, self.rows]
    }

    pub fn limits(&self) -> GapLimits {
        self.limits
    }

    pub fn pieces(&self) -> impl ExactSizeIterator<Item = &CavePiece> {
        self.pieces.iter()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The most recently generated piece
    pub fn newest(&self) -> Option<&CavePiece> {
        self.pieces.back()
    }

    /// Advance one tick: scroll, retire, grow, then test the player.
    ///
    /// Returns true when the player has touched rock.
    pub fn update<R: Rng>(&mut self, movement: IVec2, player: &Player, rng: &mut R) -> bool {
        self.shift(movement);
        self.retire_oldest();
        self.extend(rng);
        self.hits_wall(&player.rect)
    }

    /// Move every piece by `delta` (the world scrolls, not the camera)
    pub(crate) fn shift(&mut self, delta: IVec2) {
        for piece in &mut self.pieces {
            piece.translate(delta);
        }
    }

    /// Drop the oldest piece once it no longer overlaps the boundary.
    ///
    /// Scroll steps are under one column wide, so one removal per tick keeps up.
    pub(crate) fn retire_oldest(&mut self) -> bool {
        let expired = self
            .pieces
            .front()
            .is_some_and(|piece| !self.boundary.intersects(&piece.rect));
        if expired {
            self.pieces.pop_front();
        }
        expired
    }

    /// Grow one piece when the newest has scrolled into view
    pub(crate) fn extend<R: Rng>(&mut self, rng: &mut R) -> bool {
        let needed = self
            .pieces
            .back()
            .is_none_or(|piece| self.boundary.intersects(&piece.rect));
        if needed {
            self.spawn_piece(rng);
        }
        needed
    }

    /// Append the next column.
    ///
    /// The first column is centered with a random gap. Every later column
    /// moves its top row by at most `max_step` and changes its gap by no more
    /// than the row moved, so neighbouring columns never jump.
    pub fn spawn_piece<R: Rng>(&mut self, rng: &mut R) {
        let cell = self.cell_size;
        let GapLimits {
            minimum,
            maximum,
            max_step,
        } = self.limits;

        let (x, y, gap) = match self.pieces.back() {
            None => {
                let gap = Cells(rng.random_range(minimum.0..=maximum.0));
                // Centered in pixels; an odd leftover sits half a cell off the grid
                let y = (self.rows - gap).to_pixels(cell) / 2;
                (self.boundary.right(), y, gap)
            }
            Some(prev) => {
                let step = rng.random_range(0..=max_step.0);
                let difference = Cells(if rng.random_bool(0.5) { step } else { -step });
                let top = prev.top_row(cell) + difference;

                let prev_gap = prev.gap_size(cell);
                let spread = difference.abs();
                let gap = rng.random_range((prev_gap - spread).0..=(prev_gap + spread).0);
                let gap = Cells(gap.clamp(minimum.0, maximum.0));

                (prev.rect.right(), top.to_pixels(cell), gap)
            }
        };

        self.pieces.push_back(CavePiece {
            rect: Rect::new(x, y, cell, gap.to_pixels(cell)),
            color: self.color,
        });
    }

    /// Index range of the pieces checked for wall hits, clamped to the
    /// current length
    fn band_range(&self) -> std::ops::Range<usize> {
        let cols = self.cols.0.max(0) as f64;
        let len = self.pieces.len();
        let end = ((cols * self.band.1) as usize).min(len);
        let start = ((cols * self.band.0) as usize).min(end);
        start..end
    }

    /// Pieces around the player's fixed screen column
    pub fn band(&self) -> impl Iterator<Item = &CavePiece> {
        self.pieces.range(self.band_range())
    }

    /// Corner-coverage wall test.
    ///
    /// Each corner of `body` must lie inside some band piece's gap; one
    /// uncovered corner means the body is in rock. An empty band covers nothing.
    pub fn hits_wall(&self, body: &Rect) -> bool {
        let corners = body.corners();
        let mut covered = [false; 4];

        for piece in self.band() {
            for (flag, corner) in covered.iter_mut().zip(corners) {
                if piece.rect.contains_point(corner) {
                    *flag = true;
                }
            }
        }

        covered.contains(&false)
    }
}
