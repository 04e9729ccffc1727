//! Backend-agnostic rendering
//!
//! The simulation never draws. A display backend implements [`Canvas`] and
//! [`draw_frame`] issues one frame's draw calls back to front.

pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use mesh::MeshCanvas;
pub use vertex::Vertex;

use glam::IVec2;

use crate::geom::Rect;
use crate::settings::{Rgb, Settings};
use crate::sim::GameState;

/// Filled-shape drawing surface provided by a display backend
pub trait Canvas {
    /// Clear the whole surface
    fn fill(&mut self, color: Rgb);
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
    /// Ellipse inscribed in `bounds`
    fn fill_ellipse(&mut self, bounds: Rect, color: Rgb);
    fn fill_circle(&mut self, center: IVec2, radius: i32, color: Rgb);
}

/// Draw one frame: rock, corridor, stars, coins, then the player and trail
pub fn draw_frame<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState, settings: &Settings) {
    let palette = &settings.palette;

    // Rock everywhere; the corridor is cut out of it
    canvas.fill(palette.walls);

    for piece in state.cave.pieces() {
        canvas.fill_rect(piece.rect, piece.color);
    }

    if settings.effective_starfield() {
        for star in &state.starfield.stars {
            canvas.fill_rect(star.rect, star.color);
        }
    }

    for coin in state.coins.coins() {
        let radius = (coin.rect.w as f32 / 2.0).round() as i32;
        canvas.fill_circle(coin.rect.center(), radius, coin.color);
    }

    canvas.fill_ellipse(state.player.rect, palette.player);
    if settings.trails {
        for ghost in &state.player.trail {
            canvas.fill_ellipse(*ghost, palette.player);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Palette, QualityPreset};
    use crate::sim::{Coin, TickInput, tick};
    use crate::tuning::Tuning;

    #[derive(Debug, PartialEq)]
    enum Call {
        Fill(Rgb),
        Rect(Rect, Rgb),
        Ellipse(Rect, Rgb),
        Circle(IVec2, i32, Rgb),
    }

    #[derive(Default)]
    struct Recorder(Vec<Call>);

    impl Canvas for Recorder {
        fn fill(&mut self, color: Rgb) {
            self.0.push(Call::Fill(color));
        }
        fn fill_rect(&mut self, rect: Rect, color: Rgb) {
            self.0.push(Call::Rect(rect, color));
        }
        fn fill_ellipse(&mut self, bounds: Rect, color: Rgb) {
            self.0.push(Call::Ellipse(bounds, color));
        }
        fn fill_circle(&mut self, center: IVec2, radius: i32, color: Rgb) {
            self.0.push(Call::Circle(center, radius, color));
        }
    }

    fn state() -> GameState {
        GameState::new(77, Tuning::default(), &Palette::default())
    }

    #[test]
    fn test_frame_draw_order() {
        let mut state = state();
        state.coins.coins.push(Coin {
            rect: Rect::new(600, 100, 20, 20),
            color: Rgb(200, 200, 0),
        });
        let settings = Settings::default();

        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &state, &settings);

        let calls = &canvas.0;
        assert_eq!(calls[0], Call::Fill(settings.palette.walls));
        // Cave columns, then stars
        let rects = 1 + state.cave.len() + state.starfield.len();
        assert!(calls[1..rects].iter().all(|c| matches!(c, Call::Rect(..))));
        assert_eq!(
            calls[rects],
            Call::Circle(IVec2::new(610, 110), 10, Rgb(200, 200, 0))
        );
        assert_eq!(
            calls[rects + 1],
            Call::Ellipse(state.player.rect, settings.palette.player)
        );
        assert_eq!(calls.len(), rects + 2);
    }

    #[test]
    fn test_trail_and_stars_toggles() {
        let mut state = state();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.trail.len(), 1);

        let mut settings = Settings::from_preset(QualityPreset::Low);
        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &state, &settings);
        let with_trail = canvas.0.len();
        let ellipses = canvas
            .0
            .iter()
            .filter(|c| matches!(c, Call::Ellipse(..)))
            .count();
        assert_eq!(ellipses, 2);

        settings.trails = false;
        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &state, &settings);
        assert_eq!(canvas.0.len(), with_trail - 1);
        // Low quality skips the starfield entirely
        let rects = canvas.0.iter().filter(|c| matches!(c, Call::Rect(..))).count();
        assert_eq!(rects, state.cave.len());
    }

    #[test]
    fn test_mesh_canvas_frame() {
        let state = state();
        let settings = Settings::default();
        let mut canvas = MeshCanvas::new(settings.quality.curve_segments());
        draw_frame(&mut canvas, &state, &settings);

        let rects = state.cave.len() + state.starfield.len();
        let curves = settings.quality.curve_segments() as usize;
        assert_eq!(canvas.triangle_count(), rects * 2 + curves);
    }
}
