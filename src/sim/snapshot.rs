//! Read-only render snapshots
//!
//! A renderer draws from these captured values; it never needs mutation
//! access to the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::{GamePhase, GameState, GridStats};

/// Ball view: position and radius only
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Brick view: placement, color tier, and liveness
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BrickView {
    pub rect: Rect,
    pub row: usize,
    pub destroyed: bool,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub combo: u32,
    pub ball: BallView,
    pub paddle: Rect,
    pub bricks: Vec<BrickView>,
    pub stats: GridStats,
}

impl RenderSnapshot {
    /// Capture a frame's worth of state by value
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            score: state.score.score(),
            combo: state.score.combo(),
            ball: BallView {
                pos: state.ball.pos,
                radius: state.ball.radius,
            },
            paddle: state.paddle.bounds(),
            bricks: state
                .bricks
                .bricks()
                .iter()
                .map(|b| BrickView {
                    rect: b.rect,
                    row: b.row,
                    destroyed: b.is_destroyed(),
                })
                .collect(),
            stats: state.bricks.stats(),
        }
    }
}
