//! Static starfield backdrop (decorative, no gameplay effect)

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geom::Rect;
use crate::settings::Rgb;

/// Star edge lengths; small stars are four times as common
const STAR_SIZES: [i32; 6] = [2, 2, 2, 2, 3, 4];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub rect: Rect,
    pub color: Rgb,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Scatter `count` square stars over the boundary
    pub fn generate<R: Rng>(boundary: Rect, count: usize, color: Rgb, rng: &mut R) -> Self {
        let stars = (0..count)
            .map(|_| {
                let x = boundary.x + rng.random_range(0..=boundary.w);
                let y = boundary.y + rng.random_range(0..=boundary.h);
                let size = STAR_SIZES[rng.random_range(0..STAR_SIZES.len())];
                Star {
                    rect: Rect::new(x, y, size, size),
                    color,
                }
            })
            .collect();

        Self { stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_starfield_covers_boundary() {
        let boundary = Rect::new(0, 0, 1000, 700);
        let mut rng = Pcg32::seed_from_u64(2019);
        let field = Starfield::generate(boundary, 350, Rgb::WHITE, &mut rng);

        assert_eq!(field.len(), 350);
        for star in &field.stars {
            assert!(matches!(star.rect.w, 2..=4));
            assert_eq!(star.rect.w, star.rect.h);
            assert!(star.rect.x >= 0 && star.rect.x <= boundary.w);
            assert!(star.rect.y >= 0 && star.rect.y <= boundary.h);
        }
        // Small stars dominate
        let small = field.stars.iter().filter(|s| s.rect.w == 2).count();
        assert!(small > 350 / 2, "only {small} small stars");
    }

    #[test]
    fn test_zero_stars() {
        let mut rng = Pcg32::seed_from_u64(0);
        let field = Starfield::generate(Rect::new(0, 0, 10, 10), 0, Rgb::WHITE, &mut rng);
        assert!(field.is_empty());
    }
}
