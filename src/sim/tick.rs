//! Fixed cadence update loop and game state machine
//!
//! [`tick`] advances the simulation one step. The core performs no
//! scheduling: an external driver invokes one tick per frame and renders
//! from a snapshot afterwards. All physics are tick-based, not
//! delta-time-scaled, so tick rate alone determines simulation speed.

use super::collision::{self, Bounce};
use super::state::{GamePhase, GameState};
use crate::consts::{BRICK_ROWS, FIELD_HEIGHT, FIELD_WIDTH, ROW_BONUS_MULTIPLIER};
use crate::input::InputSource;

/// Input levels for a single tick
///
/// Sampled once per tick from an already-debounced source; the core places
/// no requirement on how keys are captured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub pause: bool,
    /// Resumes from pause, restarts from an end state
    pub confirm: bool,
}

impl TickInput {
    /// Sample the four level signals from an input source
    pub fn sample(source: &impl InputSource) -> Self {
        Self {
            left: source.is_left_pressed(),
            right: source.is_right_pressed(),
            pause: source.is_pause_pressed(),
            confirm: source.is_confirm_pressed(),
        }
    }
}

/// Advance the game by one tick
///
/// Physics and input only run while Playing. Paused waits for a confirm to
/// resume; the end states wait for a confirm to restart. No other
/// transitions exist.
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Playing => tick_playing(state, input),
        GamePhase::Paused => {
            if input.confirm {
                state.phase = GamePhase::Playing;
                log::info!("game resumed");
            }
        }
        GamePhase::GameOver | GamePhase::GameWin => {
            if input.confirm {
                state.reset();
            }
        }
    }
}

/// One tick of active gameplay, in fixed order: input, integration, walls,
/// paddle, bricks, end condition.
fn tick_playing(state: &mut GameState, input: &TickInput) {
    if input.pause {
        state.phase = GamePhase::Paused;
        log::info!("game paused at tick {}", state.time_ticks);
        return;
    }

    state.time_ticks += 1;

    // 1. Paddle input; each step clamps to the movement bounds
    if input.left {
        state.paddle.move_left();
    }
    if input.right {
        state.paddle.move_right();
    }

    // 2. Ball motion, then the health check. A non-finite ball is reset in
    // place rather than propagated as an error.
    state.ball.integrate();
    if !state.ball.is_finite() {
        log::warn!("non-finite ball state detected, resetting ball");
        state.ball.reset(state.tuning.ball_speed);
    }

    // 3. Walls. The bottom wall ends the run and preempts the paddle and
    // brick checks for the rest of this tick.
    let walls = collision::check_ball_wall(&state.ball, FIELD_WIDTH, FIELD_HEIGHT);
    if walls.bottom {
        state.phase = GamePhase::GameOver;
        state.score.reset_combo();
        log::info!(
            "game over at tick {} (final score {})",
            state.time_ticks,
            state.score.score()
        );
        return;
    }
    if walls.left || walls.right {
        state.ball.reverse_x();
    }
    if walls.top {
        state.ball.reverse_y();
    }

    // 4. Paddle: angle-based bounce
    if let Some(hit) = collision::check_ball_paddle(&state.ball, &state.paddle) {
        collision::apply_bounce(&mut state.ball, Bounce::Angle(hit.angle));
        log::debug!(
            "paddle bounce at {:.2} -> {:.0} degrees",
            hit.hit_position,
            hit.angle.to_degrees()
        );
    }

    // 5. Bricks: at most one resolved per tick, scanned in layout order.
    // Destroy, score with the row bonus, bounce, then ramp the ball speed.
    if let Some((idx, side)) = collision::check_ball_bricks(&state.ball, state.bricks.bricks()) {
        let brick = &mut state.bricks.bricks_mut()[idx];
        let row = brick.row;
        let base = brick.destroy();
        let awarded = state.score.add((base + row_bonus(row)) as i64);
        collision::apply_bounce(&mut state.ball, Bounce::Reflect(side));
        state
            .ball
            .ramp_speed(state.tuning.ball_speed_increment, state.tuning.ball_max_speed);
        log::debug!("brick {idx} destroyed (+{awarded})");
    }

    // 6. All-clear check, independent of the wall handling above
    if state.bricks.all_destroyed() {
        state.phase = GamePhase::GameWin;
        log::info!(
            "all bricks cleared at tick {} (final score {})",
            state.time_ticks,
            state.score.score()
        );
    }
}

/// Score bonus for a brick row; rows farther from the paddle pay more
#[inline]
fn row_bonus(row: usize) -> u32 {
    (BRICK_ROWS - row) as u32 * ROW_BONUS_MULTIPLIER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    fn playing_state() -> GameState {
        GameState::new()
    }

    fn park_ball(state: &mut GameState) {
        // Keep the ball away from everything so a tick has no collisions
        state.ball.pos = Vec2::new(400.0, 300.0);
        state.ball.vel = Vec2::new(0.0, 0.0);
        state.ball.speed = 0.0;
    }

    #[test]
    fn test_left_wall_reflects_x() {
        let mut state = playing_state();
        state.ball.pos = Vec2::new(BALL_RADIUS + 1.0, 300.0);
        state.ball.vel = Vec2::new(-2.0, 0.5);
        tick(&mut state, &TickInput::default());
        assert!(state.ball.vel.x > 0.0);
        assert_eq!(state.ball.vel.y, 0.5);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_top_wall_reflects_y() {
        let mut state = playing_state();
        state.ball.pos = Vec2::new(400.0, BALL_RADIUS + 1.0);
        state.ball.vel = Vec2::new(0.5, -2.0);
        tick(&mut state, &TickInput::default());
        assert!(state.ball.vel.y > 0.0);
    }

    #[test]
    fn test_bottom_wall_ends_the_run() {
        let mut state = playing_state();
        state.score.add(10); // score 11, combo 1
        state.ball.pos = Vec2::new(400.0, FIELD_HEIGHT - 1.0);
        state.ball.vel = Vec2::new(0.0, 5.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        // Combo resets on game over, the final score does not
        assert_eq!(state.score.combo(), 0);
        assert_eq!(state.score.score(), 11);
    }

    #[test]
    fn test_bottom_wall_preempts_other_collisions() {
        let mut state = playing_state();
        // Past the bottom AND touching the left wall in the same tick: the
        // run ends with the velocity untouched.
        state.ball.pos = Vec2::new(BALL_RADIUS, FIELD_HEIGHT - 1.0);
        state.ball.vel = Vec2::new(-1.0, 5.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.ball.vel, Vec2::new(-1.0, 5.0));
    }

    #[test]
    fn test_paddle_bounces_ball_upward() {
        let mut state = playing_state();
        let cx = state.paddle.x + state.paddle.width / 2.0;
        state.ball.pos = Vec2::new(cx, state.paddle.y - BALL_RADIUS - 2.0);
        state.ball.vel = Vec2::new(0.0, 3.0);
        tick(&mut state, &TickInput::default());
        // Center hit: straight up at unchanged speed
        assert!(state.ball.vel.y < 0.0);
        assert!(state.ball.vel.x.abs() < 1e-5);
        assert!((state.ball.vel.length() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_brick_destruction_scores_and_ramps() {
        let mut state = playing_state();
        // Aim just under the first brick (row 0), moving up
        let target = state.bricks.bricks()[0].rect;
        state.ball.pos = Vec2::new(target.center().x, target.bottom() + BALL_RADIUS);
        state.ball.vel = Vec2::new(0.0, -1.0);
        tick(&mut state, &TickInput::default());

        assert_eq!(state.bricks.active_count(), 49);
        // Row 0: base 10 + bonus (5-0)*2 = 20; combo 1 adds floor(20*0.1) = 2
        assert_eq!(state.score.score(), 22);
        assert_eq!(state.score.combo(), 1);
        // Bounced off the underside and ramped from speed 1.0 to 1.2
        assert!(state.ball.vel.y > 0.0);
        assert!((state.ball.vel.length() - 1.2).abs() < 1e-5);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_all_clear_wins_the_game() {
        let mut state = playing_state();
        park_ball(&mut state);
        for brick in state.bricks.bricks_mut() {
            brick.destroy();
        }
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameWin);
    }

    #[test]
    fn test_pause_suspends_physics() {
        let mut state = playing_state();
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);

        // Physics and input are no-ops while paused
        let pos = state.ball.pos;
        let ticks = state.time_ticks;
        let push = TickInput {
            left: true,
            right: true,
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &push);
        assert_eq!(state.ball.pos, pos);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.phase, GamePhase::Paused);

        // Confirm resumes
        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_confirm_restarts_from_game_over() {
        let mut state = playing_state();
        state.score.add(10);
        state.bricks.bricks_mut()[0].destroy();
        state.ball.pos = Vec2::new(400.0, FIELD_HEIGHT + BALL_RADIUS);
        state.ball.vel = Vec2::new(0.0, 1.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);

        // Non-confirm input in an end state is a no-op
        let push = TickInput {
            left: true,
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &push);
        assert_eq!(state.phase, GamePhase::GameOver);

        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score.score(), 0);
        assert_eq!(state.bricks.active_count(), 50);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_confirm_restarts_from_game_win() {
        let mut state = playing_state();
        park_ball(&mut state);
        for brick in state.bricks.bricks_mut() {
            brick.destroy();
        }
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameWin);

        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.bricks.active_count(), 50);
    }

    #[test]
    fn test_non_finite_ball_recovers_in_one_tick() {
        let mut state = playing_state();
        state.ball.vel = Vec2::new(f32::NAN, f32::NAN);
        tick(&mut state, &TickInput::default());
        assert!(state.ball.is_finite());
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert!((state.ball.vel.length() - state.tuning.ball_speed).abs() < 1e-5);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_paddle_input_moves_and_clamps() {
        let mut state = playing_state();
        park_ball(&mut state);
        let start_x = state.paddle.x;
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &left);
        assert_eq!(state.paddle.x, start_x - state.paddle.speed);

        for _ in 0..200 {
            tick(&mut state, &left);
        }
        assert!(state.paddle.is_at_left_boundary());
    }

    #[test]
    fn test_row_bonus_pays_more_for_upper_rows() {
        assert_eq!(row_bonus(0), 10);
        assert_eq!(row_bonus(BRICK_ROWS - 1), 2);
    }
}
