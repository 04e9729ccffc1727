//! Soar entry point
//!
//! Runs a headless session: the autopilot flies, every frame is tessellated
//! into a mesh, and the final `"{distance} - {score}"` line is printed.
//!
//! Usage: `soar [SEED] [TUNING_JSON]`

use std::time::{SystemTime, UNIX_EPOCH};

use soar::renderer::{MeshCanvas, draw_frame};
use soar::sim::{GameEvent, GameState, TickInput, tick};
use soar::{Settings, Tuning};

/// Simulated seconds before the headless run stops on its own
const SESSION_SECONDS: u64 = 60;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(clock_seed);
    let tuning = match args.next() {
        Some(path) => Tuning::load(&path).unwrap_or_else(|err| {
            log::warn!("{err}; using default tuning");
            Tuning::default()
        }),
        None => Tuning::default(),
    };

    let settings = Settings::default();
    log::info!(
        "Soar (headless) starting: seed {seed}, {} quality",
        settings.quality.as_str()
    );

    let mut state = GameState::new(seed, tuning, &settings.palette);
    let mut canvas = MeshCanvas::new(settings.quality.curve_segments());

    let frame_rate = u64::from(state.tuning.frame_rate.max(1));
    let max_ticks = frame_rate * SESSION_SECONDS;

    while !state.is_over() {
        let input = TickInput {
            autopilot: true,
            // One status line per simulated second
            print_status: state.time_ticks % frame_rate == 0,
            quit: state.time_ticks + 1 >= max_ticks,
            ..Default::default()
        };

        for event in tick(&mut state, &input) {
            match event {
                GameEvent::Status { distance, score } => println!("{distance} - {score}"),
                GameEvent::CoinCollected { count } => log::debug!("Collected {count} coin(s)"),
                GameEvent::WallHit { .. } | GameEvent::Quit => {}
                GameEvent::ScreenshotRequested => {
                    log::warn!(
                        "No display backend to save {}",
                        settings.screenshot_path
                    );
                }
            }
        }

        draw_frame(&mut canvas, &state, &settings);
    }

    log::info!(
        "Run over after {} ticks ({} triangles in the last frame)",
        state.time_ticks,
        canvas.triangle_count()
    );
    println!("{}", state.status_line());
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
