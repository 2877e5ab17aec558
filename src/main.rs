//! Headless native driver
//!
//! Runs the simulation with a scripted ball-tracking autoplayer. Useful as a
//! smoke test and as a reference for wiring a real front end: sample input,
//! tick, snapshot, repeat.

use blockbreak::consts::TICKS_PER_SECOND;
use blockbreak::input::KeyState;
use blockbreak::sim::{GamePhase, GameState, TickInput, tick};
use blockbreak::tuning::Difficulty;

/// Give up after five simulated minutes
const MAX_TICKS: u64 = TICKS_PER_SECOND as u64 * 60 * 5;

fn main() {
    env_logger::init();

    let difficulty = std::env::args()
        .nth(1)
        .and_then(|arg| Difficulty::from_str(&arg))
        .unwrap_or_default();
    log::info!("starting headless run ({} difficulty)", difficulty.as_str());

    let mut state = GameState::with_tuning(difficulty.tuning());
    let mut keys = KeyState::default();

    for _ in 0..MAX_TICKS {
        // Track the ball with the paddle center, with a small dead zone so
        // the paddle doesn't jitter over the target
        let paddle_center = state.paddle.x + state.paddle.width / 2.0;
        keys.left = state.ball.pos.x < paddle_center - 2.0;
        keys.right = state.ball.pos.x > paddle_center + 2.0;

        let input = TickInput::sample(&keys);
        tick(&mut state, &input);

        if state.phase != GamePhase::Playing {
            break;
        }
        if state.time_ticks % (TICKS_PER_SECOND as u64 * 10) == 0 {
            let stats = state.bricks.stats();
            log::info!(
                "tick {}: score {} combo {} bricks {}/{} ({}%)",
                state.time_ticks,
                state.score.score(),
                state.score.combo(),
                stats.destroyed,
                stats.total,
                stats.percentage
            );
        }
    }

    match state.phase {
        GamePhase::GameWin => log::info!("cleared the field, final score {}", state.score.score()),
        GamePhase::GameOver => log::info!("ball lost, final score {}", state.score.score()),
        _ => log::info!("tick budget exhausted at score {}", state.score.score()),
    }

    let snapshot = state.snapshot();
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).expect("snapshot serializes")
    );
}
