//! Fixed-step simulation tick
//!
//! One call is one frame: steer, fly, scroll the world, collect, collide.

use super::state::{GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Thrust held: turn the nose up
    pub thrust: bool,
    /// Report distance and score
    pub print_status: bool,
    /// Ask the display backend to save the frame
    pub screenshot: bool,
    /// End the run
    pub quit: bool,
    /// Let the autopilot decide `thrust`
    pub autopilot: bool,
}

/// Things that happened during a tick, for the outer loop to act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    CoinCollected { count: u32 },
    WallHit { distance: i64, score: u64 },
    Status { distance: i64, score: u64 },
    ScreenshotRequested,
    Quit,
}

/// Advance the game by one frame.
///
/// Does nothing once the run is over. A wall hit or quit ends the run after
/// the rest of the tick completes.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_over() {
        return events;
    }

    let thrust = if input.autopilot {
        autopilot_thrust(state)
    } else {
        input.thrust
    };
    if thrust {
        state.player.thrust();
    }

    let delta = state.player.update();
    state.distance += (delta.x / state.tuning.distance_unit).round() as i64;

    // The player holds still; the world moves the other way
    let movement = (-delta).as_ivec2();

    let picked = state
        .coins
        .update(movement, &state.player, &state.cave, &mut state.rng);
    if picked > 0 {
        state.score += u64::from(picked);
        events.push(GameEvent::CoinCollected { count: picked });
    }

    if state.cave.update(movement, &state.player, &mut state.rng) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Hit the cave wall after {} ticks: {}",
            state.time_ticks + 1,
            state.status_line()
        );
        events.push(GameEvent::WallHit {
            distance: state.distance,
            score: state.score,
        });
    }

    if input.print_status {
        events.push(GameEvent::Status {
            distance: state.distance,
            score: state.score,
        });
    }
    if input.screenshot {
        events.push(GameEvent::ScreenshotRequested);
    }
    if input.quit {
        state.phase = GamePhase::GameOver;
        log::info!("Run ended by quit: {}", state.status_line());
        events.push(GameEvent::Quit);
    }

    state.time_ticks += 1;
    events
}

/// Autopilot: hold the nose toward the middle of the gap under the player.
///
/// Targets a heading above level when the player sits low in the gap and
/// below level when it sits high, and thrusts whenever the nose is under
/// the target.
pub fn autopilot_thrust(state: &GameState) -> bool {
    let body = state.player.rect;
    let center = body.center();

    let gap = state
        .cave
        .band()
        .find(|piece| piece.rect.left() <= center.x && center.x < piece.rect.right())
        .or_else(|| state.cave.band().next())
        .map(|piece| piece.rect);
    let Some(gap) = gap else {
        return false;
    };

    let offset = (center.y - gap.center().y) as f32 / gap.h.max(1) as f32;
    let target = 0.5 + offset.clamp(-0.4, 0.4) * 0.5;
    state.player.angle.0 < target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Rect;
    use crate::settings::{Palette, Rgb};
    use crate::sim::cave::CavePiece;
    use crate::sim::coins::Coin;
    use crate::tuning::Tuning;

    fn new_state(seed: u64) -> GameState {
        GameState::new(seed, Tuning::default(), &Palette::default())
    }

    /// Replace the corridor with 50 identical columns
    fn flatten_cave(state: &mut GameState, y: i32, h: i32) {
        state.cave.pieces.clear();
        for i in 0..50 {
            state.cave.pieces.push_back(CavePiece {
                rect: Rect::new(i * 20, y, 20, h),
                color: Rgb::BLACK,
            });
        }
    }

    #[test]
    fn test_open_corridor_keeps_playing() {
        let mut state = new_state(1);
        flatten_cave(&mut state, 0, 700);

        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 1);
        // Level flight covers one distance unit per tick
        assert_eq!(state.distance, 1);
    }

    #[test]
    fn test_wall_hit_ends_run() {
        let mut state = new_state(2);
        flatten_cave(&mut state, 0, 200);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            events,
            vec![GameEvent::WallHit {
                distance: 1,
                score: 0
            }]
        );

        // Nothing moves after the run ends
        let ticks = state.time_ticks;
        assert!(tick(&mut state, &TickInput::default()).is_empty());
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_coin_pickup_scores() {
        let mut state = new_state(3);
        flatten_cave(&mut state, 0, 700);
        state.coins.coins.push(Coin {
            rect: state.player.rect,
            color: Rgb(200, 200, 0),
        });

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::CoinCollected { count: 1 }));
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_status_screenshot_and_quit() {
        let mut state = new_state(4);
        flatten_cave(&mut state, 0, 700);

        let input = TickInput {
            print_status: true,
            screenshot: true,
            quit: true,
            ..Default::default()
        };
        let events = tick(&mut state, &input);
        assert_eq!(
            events,
            vec![
                GameEvent::Status {
                    distance: 1,
                    score: 0
                },
                GameEvent::ScreenshotRequested,
                GameEvent::Quit,
            ]
        );
        assert!(state.is_over());
    }

    #[test]
    fn test_thrust_turns_nose_up() {
        let mut state = new_state(5);
        flatten_cave(&mut state, 0, 700);
        let input = TickInput {
            thrust: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert!((state.player.angle.0 - 0.51).abs() < 1e-6);

        tick(&mut state, &TickInput::default());
        assert!((state.player.angle.0 - 0.50).abs() < 1e-6);
    }

    #[test]
    fn test_autopilot_climbs_toward_high_gap() {
        let mut state = new_state(6);
        flatten_cave(&mut state, 0, 200);
        assert!(autopilot_thrust(&state));

        flatten_cave(&mut state, 500, 200);
        assert!(!autopilot_thrust(&state));
    }

    #[test]
    fn test_autopilot_without_band_does_nothing() {
        let mut state = new_state(7);
        state.cave.pieces.clear();
        assert!(!autopilot_thrust(&state));
    }

    #[test]
    fn test_determinism() {
        // Two runs with the same seed and inputs stay identical
        let mut a = new_state(99999);
        let mut b = new_state(99999);

        let inputs = [
            TickInput {
                thrust: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                autopilot: true,
                ..Default::default()
            },
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            assert_eq!(tick(&mut a, input), tick(&mut b, input));
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.distance, b.distance);
        assert_eq!(a.score, b.score);
        assert_eq!(a.player.angle, b.player.angle);
        assert!(a.cave.pieces().eq(b.cave.pieces()));
        assert_eq!(a.coins.coins(), b.coins.coins());
    }

    #[test]
    fn test_autopilot_run_keeps_corridor_contiguous() {
        let mut state = new_state(2024);
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..1800 {
            tick(&mut state, &input);
            if state.is_over() {
                break;
            }
        }

        let pieces: Vec<_> = state.cave.pieces().collect();
        for pair in pieces.windows(2) {
            assert_eq!(pair[1].rect.x, pair[0].rect.right());
        }
        assert!(state.time_ticks <= 1800);
    }
}
