//! Block Break - a paddle-and-ball brick breaking game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, scoring, game state)
//! - `input`: Level-signal input boundary consumed once per tick
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input-device binding, and window lifecycle live outside this
//! crate. The simulation exposes read-only [`sim::RenderSnapshot`] values for
//! a renderer and samples already-debounced key signals through
//! [`input::InputSource`]; an external scheduler drives one [`sim::tick`] per
//! frame.
//!
//! Coordinates follow the canvas convention: origin at the top-left corner of
//! the play field, +y pointing down. Angles use the math convention (measured
//! from the positive X axis), so "straight up" is -π/2.

pub mod input;
pub mod sim;
pub mod tuning;

pub use tuning::{Difficulty, Tuning};

/// Game configuration constants
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Distance of the paddle's top edge from the bottom of the field
    pub const PADDLE_Y_OFFSET: f32 = 50.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_SPEED: f32 = 4.5;
    /// Speed gained per destroyed brick
    pub const BALL_SPEED_INCREMENT: f32 = 0.2;
    /// Hard cap on ball speed
    pub const BALL_MAX_SPEED: f32 = 8.0;
    /// Launch angle at spawn (45 degrees, up and to the right)
    pub const BALL_INITIAL_ANGLE: f32 = -std::f32::consts::FRAC_PI_4;

    /// Brick layout
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_PADDING: f32 = 5.0;
    pub const BRICK_TOP_MARGIN: f32 = 60.0;
    pub const BRICK_SIDE_MARGIN: f32 = 35.0;

    /// Scoring
    pub const POINTS_PER_BRICK: u32 = 10;
    /// Per-row score bonus step; rows farther from the paddle pay more
    pub const ROW_BONUS_MULTIPLIER: u32 = 2;
    /// Fraction of base points awarded per combo step
    pub const COMBO_BONUS_FRACTION: f64 = 0.1;

    /// Nominal tick rate. Pacing is the caller's job; the simulation itself
    /// is tick-based and never reads the wall clock.
    pub const TICKS_PER_SECOND: u32 = 60;
}
