//! Game entities and owned state
//!
//! [`GameState`] exclusively owns every mutable entity. The collision module
//! borrows entities read-only; all mutation flows through the tick module on
//! a single logical thread.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::score::ScoreKeeper;
use super::snapshot::RenderSnapshot;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Update loop suspended, waiting for a resume signal
    Paused,
    /// Ball crossed the bottom wall; waiting for a confirm to restart
    GameOver,
    /// All bricks destroyed; waiting for a confirm to restart
    GameWin,
}

/// The ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Scalar speed, kept consistent with `vel`'s magnitude
    pub speed: f32,
    pub radius: f32,
}

impl Ball {
    /// Spawn at the field center, launched at the default angle
    pub fn new(speed: f32) -> Self {
        let mut ball = Self {
            pos: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
            vel: Vec2::ZERO,
            speed,
            radius: BALL_RADIUS,
        };
        ball.set_velocity_from_angle(BALL_INITIAL_ANGLE, speed);
        ball
    }

    /// Advance one tick of motion (explicit Euler, one step per tick)
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Negate the horizontal velocity component
    pub fn reverse_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Negate the vertical velocity component
    pub fn reverse_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Rewrite the velocity from an angle at the given speed
    pub fn set_velocity_from_angle(&mut self, angle: f32, speed: f32) {
        self.speed = speed;
        self.vel = Vec2::new(speed * angle.cos(), speed * angle.sin());
    }

    /// Ramp the scalar speed by `increment`, capped at `max`
    ///
    /// Both velocity components are scaled by the same ratio, preserving
    /// direction. A stationary ball is left untouched.
    pub fn ramp_speed(&mut self, increment: f32, max: f32) {
        let current = self.vel.length();
        if current <= f32::EPSILON {
            return;
        }
        let new_speed = (current + increment).min(max);
        self.vel *= new_speed / current;
        self.speed = new_speed;
        log::debug!("ball speed ramped to {new_speed:.2}");
    }

    /// Re-center the ball and restore the launch angle at the given speed
    pub fn reset(&mut self, speed: f32) {
        self.pos = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);
        self.set_velocity_from_angle(BALL_INITIAL_ANGLE, speed);
    }

    /// Bounding box of the ball (for broad-phase rectangle tests)
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x - self.radius,
            self.pos.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    /// False when position or velocity has gone NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }
}

/// The player's paddle
///
/// `y` is fixed for the paddle's whole life; only `x` moves, and it is
/// clamped into `[min_x, max_x]` on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    min_x: f32,
    max_x: f32,
}

impl Paddle {
    /// Spawn centered at the bottom of the field
    pub fn new(speed: f32) -> Self {
        Self {
            x: (FIELD_WIDTH - PADDLE_WIDTH) / 2.0,
            y: FIELD_HEIGHT - PADDLE_Y_OFFSET,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed,
            min_x: 0.0,
            max_x: FIELD_WIDTH - PADDLE_WIDTH,
        }
    }

    /// Step left, clamped at the field edge
    pub fn move_left(&mut self) {
        self.x = (self.x - self.speed).max(self.min_x);
    }

    /// Step right, clamped at the field edge
    pub fn move_right(&mut self) {
        self.x = (self.x + self.speed).min(self.max_x);
    }

    /// Bounding box of the paddle
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Center point of the paddle
    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    /// Return to the centered start position
    pub fn reset(&mut self) {
        self.x = (FIELD_WIDTH - self.width) / 2.0;
    }

    pub fn is_at_left_boundary(&self) -> bool {
        self.x <= self.min_x
    }

    pub fn is_at_right_boundary(&self) -> bool {
        self.x >= self.max_x
    }
}

/// A single destructible brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// Row index from the top; drives the color tier and the score bonus
    pub row: usize,
    /// Base point value awarded on destruction
    pub points: u32,
    destroyed: bool,
}

impl Brick {
    pub fn new(x: f32, y: f32, row: usize) -> Self {
        Self {
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
            row,
            points: POINTS_PER_BRICK,
            destroyed: false,
        }
    }

    /// Destroy the brick, returning its base point value
    ///
    /// Only the first call awards points; every later call is a no-op
    /// returning 0 until [`Brick::reset`].
    pub fn destroy(&mut self) -> u32 {
        if self.destroyed {
            return 0;
        }
        self.destroyed = true;
        self.points
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Restore the brick to its non-destroyed state
    pub fn reset(&mut self) {
        self.destroyed = false;
    }
}

/// Aggregate brick statistics for HUD display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridStats {
    pub total: usize,
    pub active: usize,
    pub destroyed: usize,
    /// Destroyed share, rounded to the nearest whole percent
    pub percentage: u32,
}

/// Row-major collection of bricks with aggregate stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out the standard grid (rows x cols with padding and margins)
    pub fn new() -> Self {
        let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLS {
                let x = BRICK_SIDE_MARGIN + col as f32 * (BRICK_WIDTH + BRICK_PADDING);
                let y = BRICK_TOP_MARGIN + row as f32 * (BRICK_HEIGHT + BRICK_PADDING);
                bricks.push(Brick::new(x, y, row));
            }
        }
        Self { bricks }
    }

    /// All bricks in layout order (the defined collision scan order)
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn bricks_mut(&mut self) -> &mut [Brick] {
        &mut self.bricks
    }

    /// Count of non-destroyed bricks
    pub fn active_count(&self) -> usize {
        self.bricks.iter().filter(|b| !b.is_destroyed()).count()
    }

    pub fn all_destroyed(&self) -> bool {
        self.active_count() == 0
    }

    /// Aggregate counts plus a rounded destroyed percentage
    pub fn stats(&self) -> GridStats {
        let total = self.bricks.len();
        let active = self.active_count();
        let destroyed = total - active;
        let percentage = if total > 0 {
            (destroyed as f32 / total as f32 * 100.0).round() as u32
        } else {
            0
        };
        GridStats {
            total,
            active,
            destroyed,
            percentage,
        }
    }

    /// Restore every brick to its non-destroyed state
    pub fn reset_all(&mut self) {
        for brick in &mut self.bricks {
            brick.reset();
        }
    }

    /// Find the live brick covering a point, if any
    pub fn brick_at(&self, x: f32, y: f32) -> Option<&Brick> {
        self.bricks
            .iter()
            .find(|b| !b.is_destroyed() && b.rect.contains_point(Vec2::new(x, y)))
    }
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    pub score: ScoreKeeper,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Balance values this run was started with
    pub tuning: Tuning,
}

impl GameState {
    /// New game with default tuning
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    /// New game with explicit tuning
    pub fn with_tuning(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Playing,
            ball: Ball::new(tuning.ball_speed),
            paddle: Paddle::new(tuning.paddle_speed),
            bricks: BrickGrid::new(),
            score: ScoreKeeper::new(),
            time_ticks: 0,
            tuning,
        }
    }

    /// Full restart: canonical positions, fresh bricks, zero score, Playing
    ///
    /// Idempotent: a second call leaves exactly the state of the first.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.score.reset_score();
        self.score.reset_combo();
        self.ball.reset(self.tuning.ball_speed);
        self.paddle.reset();
        self.bricks.reset_all();
        self.time_ticks = 0;
        log::info!(
            "game reset ({} bricks restored)",
            self.bricks.stats().total
        );
    }

    /// Read-only view for a renderer
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
