//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Tick-based only, no wall-clock or delta-time scaling
//! - Single-threaded mutation through [`GameState`]
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Bounce, PaddleHit, Side, WallContact};
pub use geometry::{Circle, Rect};
pub use score::ScoreKeeper;
pub use snapshot::RenderSnapshot;
pub use state::{Ball, Brick, BrickGrid, GamePhase, GameState, GridStats, Paddle};
pub use tick::{TickInput, tick};
