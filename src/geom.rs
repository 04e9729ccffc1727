//! Pixel-space geometry and unit types
//!
//! World geometry lives on an integer pixel grid, the same way a raster
//! surface does. Grid rows and gap sizes are whole [`Cells`]; headings are
//! [`HalfTurns`]. Keeping the three apart stops pixel/cell/angle mix-ups in
//! the generator arithmetic.

use std::ops::{Add, Sub};

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A whole number of grid cells (rows, columns or gap heights)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Cells(pub i32);

impl Cells {
    /// Cells covered by a pixel offset, rounding toward negative infinity
    #[inline]
    pub fn from_pixels(px: i32, cell_size: i32) -> Self {
        Cells(px.div_euclid(cell_size))
    }

    #[inline]
    pub fn to_pixels(self, cell_size: i32) -> i32 {
        self.0 * cell_size
    }

    #[inline]
    pub fn abs(self) -> Self {
        Cells(self.0.abs())
    }
}

impl Add for Cells {
    type Output = Cells;

    fn add(self, rhs: Cells) -> Cells {
        Cells(self.0 + rhs.0)
    }
}

impl Sub for Cells {
    type Output = Cells;

    fn sub(self, rhs: Cells) -> Cells {
        Cells(self.0 - rhs.0)
    }
}

/// Heading in half-turns: 1.0 is π radians, a full rotation is 2.0.
///
/// 0 points straight down the screen and values grow counter-clockwise,
/// so 0.5 is "right" and 1.0 is "up".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct HalfTurns(pub f32);

impl HalfTurns {
    /// One full rotation
    pub const FULL: f32 = 2.0;

    #[inline]
    pub fn radians(self) -> f32 {
        self.0 * std::f32::consts::PI
    }

    /// Rotate by `amount` (positive is counter-clockwise) and roll over.
    ///
    /// Crossing zero snaps to a full turn and crossing a full turn snaps to
    /// zero. Steps are small, so the snap is not noticeable in play.
    pub fn rotated(self, amount: f32) -> Self {
        let angle = self.0 + amount;
        if angle <= 0.0 {
            HalfTurns(Self::FULL)
        } else if angle >= Self::FULL {
            HalfTurns(0.0)
        } else {
            HalfTurns(angle)
        }
    }
}

/// Axis-aligned integer rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    pub fn top_left(&self) -> IVec2 {
        IVec2::new(self.left(), self.top())
    }

    pub fn top_right(&self) -> IVec2 {
        IVec2::new(self.right(), self.top())
    }

    pub fn bottom_left(&self) -> IVec2 {
        IVec2::new(self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> IVec2 {
        IVec2::new(self.right(), self.bottom())
    }

    /// Corners in the order top-left, top-right, bottom-left, bottom-right.
    ///
    /// The right and bottom corners sit one past the last covered pixel.
    pub fn corners(&self) -> [IVec2; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_left(),
            self.bottom_right(),
        ]
    }

    /// Center point (integer division)
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub fn translate(&mut self, delta: IVec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    pub fn translated(mut self, delta: IVec2) -> Self {
        self.translate(delta);
        self
    }

    /// Grow (or shrink, for negative amounts) around the center
    pub fn inflated(self, dw: i32, dh: i32) -> Self {
        Self {
            x: self.x - dw / 2,
            y: self.y - dh / 2,
            w: self.w + dw,
            h: self.h + dh,
        }
    }

    /// True when the interiors overlap. Shared edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && self.y < other.bottom()
            && self.right() > other.x
            && self.bottom() > other.y
    }

    /// Half-open containment: left/top edges inside, right/bottom outside
    pub fn contains_point(&self, point: IVec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}
