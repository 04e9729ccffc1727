//! The flying player
//!
//! The player holds a fixed screen position. Its heading turns under a
//! constant downward torque and the operator's thrust, and the resulting
//! displacement is handed back to the caller to scroll the world.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::geom::{HalfTurns, Rect};
use crate::heading_to_vector;
use crate::tuning::Tuning;

/// The player's craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Velocity heading
    pub angle: HalfTurns,
    /// Pixels per tick
    pub speed: f32,
    /// Afterimage rectangles (newest last)
    pub trail: Vec<Rect>,
    /// Pixels each afterimage shrinks per tick
    pub trail_decay: i32,
    gravity_step: f32,
    thrust_step: f32,
}

impl Player {
    pub fn new(rect: Rect) -> Self {
        Self::from_tuning(rect, &Tuning::default())
    }

    pub fn from_tuning(rect: Rect, tuning: &Tuning) -> Self {
        Self {
            rect,
            angle: HalfTurns(tuning.start_angle),
            speed: tuning.player_speed,
            trail: Vec::new(),
            trail_decay: tuning.trail_decay,
            gravity_step: tuning.gravity_step,
            thrust_step: tuning.thrust_step,
        }
    }

    /// Displacement for the current heading
    pub fn velocity(&self) -> Vec2 {
        heading_to_vector(self.speed, self.angle)
    }

    /// Advance one tick and return this tick's displacement.
    ///
    /// The player itself does not travel: the caller scrolls the world by
    /// the negated displacement. Gravity and the trail still advance.
    pub fn update(&mut self) -> Vec2 {
        let delta = self.velocity();

        self.move_by(0, 0, &[]);
        self.update_trail((-delta).as_ivec2());

        delta
    }

    /// Constant downward torque
    pub fn apply_gravity(&mut self) {
        self.angle = self.angle.rotated(self.gravity_step);
    }

    /// Operator thrust, turning the nose up against gravity
    pub fn thrust(&mut self) {
        self.angle = self.angle.rotated(self.thrust_step);
    }

    /// Move with axis-separated collision response, then apply gravity.
    ///
    /// X resolves before Y; each axis snaps the leading edge flush against
    /// any obstacle it ends up overlapping.
    pub fn move_by(&mut self, dx: i32, dy: i32, obstacles: &[Rect]) {
        if dx != 0 {
            self.move_single_axis(dx, 0, obstacles);
        }
        if dy != 0 {
            self.move_single_axis(0, dy, obstacles);
        }

        self.apply_gravity();
    }

    fn move_single_axis(&mut self, dx: i32, dy: i32, obstacles: &[Rect]) {
        self.rect.translate(IVec2::new(dx, dy));

        for wall in obstacles {
            if !self.rect.intersects(wall) {
                continue;
            }
            if dx > 0 {
                self.rect.set_right(wall.left());
            }
            if dx < 0 {
                self.rect.set_left(wall.right());
            }
            if dy > 0 {
                self.rect.set_bottom(wall.top());
            }
            if dy < 0 {
                self.rect.set_top(wall.bottom());
            }
        }
    }

    /// Scroll and shrink the afterimages, dropping spent ones, then record
    /// the current position
    pub fn update_trail(&mut self, delta: IVec2) {
        let decay = self.trail_decay;
        self.trail.retain_mut(|ghost| {
            *ghost = ghost.translated(delta).inflated(-decay, -decay);
            ghost.w > decay && ghost.h > decay
        });

        self.trail.push(self.rect);
    }
}
