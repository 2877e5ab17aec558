//! Collision detection between the ball and the walls, paddle, and bricks
//!
//! The tricky part of the core: intersection tests, the bounce-angle map for
//! paddle hits, and the side-resolution rule for brick hits. Everything here
//! is a stateless pure function: entities are borrowed read-only and results
//! are freshly built values. The per-pair checks stay explicit named
//! functions (wall/paddle/brick) so the ordering and tie-break rules remain
//! auditable.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};

use super::geometry::{Circle, Rect, circle_rect_collision, rect_intersect};
use super::state::{Ball, Brick, Paddle};

/// Which face of a rectangular body the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Wall contact flags for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// A paddle hit with the outgoing bounce angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleHit {
    /// Outgoing velocity angle (radians; -π/2 is straight up)
    pub angle: f32,
    /// Normalized contact point along the paddle (0 = left edge, 1 = right)
    pub hit_position: f32,
}

/// How to rewrite the ball's velocity after a contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounce {
    /// Reflect the axis implied by the struck side (walls and bricks)
    Reflect(Side),
    /// Relaunch at an exact angle, preserving current speed (paddle)
    Angle(f32),
}

/// Ball vs play-field bounds
///
/// A flag is set when the ball's circle extent reaches the corresponding
/// boundary (inclusive).
pub fn check_ball_wall(ball: &Ball, field_width: f32, field_height: f32) -> WallContact {
    WallContact {
        left: ball.pos.x - ball.radius <= 0.0,
        right: ball.pos.x + ball.radius >= field_width,
        top: ball.pos.y - ball.radius <= 0.0,
        bottom: ball.pos.y + ball.radius >= field_height,
    }
}

/// Ball vs paddle
///
/// Requires bounding-box overlap AND the ball center at or above the
/// paddle's underside. A ball already below the paddle is never bounced,
/// which prevents double bounces and tunneling back up through the paddle.
pub fn check_ball_paddle(ball: &Ball, paddle: &Paddle) -> Option<PaddleHit> {
    if !rect_intersect(&ball.bounds(), &paddle.bounds()) {
        return None;
    }
    if ball.pos.y > paddle.y + paddle.height {
        return None;
    }
    let hit_position = (ball.pos.x - paddle.x) / paddle.width;
    Some(PaddleHit {
        angle: paddle_bounce_angle(hit_position),
        hit_position,
    })
}

/// Map a paddle hit position to a bounce angle
///
/// Linear map of `[0, 1]` onto ±60° around straight up: a center hit
/// bounces vertically (-90°), the left edge gives -150°, the right edge
/// -30°.
#[inline]
pub fn paddle_bounce_angle(hit_position: f32) -> f32 {
    -FRAC_PI_2 + (hit_position - 0.5) * 2.0 * FRAC_PI_3
}

/// Ball vs a single brick
///
/// Destroyed bricks never collide. On a hit, the impact side is the axis
/// with the smaller overlap depth; ties go to Top/Bottom.
pub fn check_ball_brick(ball: &Ball, brick: &Brick) -> Option<Side> {
    if brick.is_destroyed() {
        return None;
    }
    let circle = Circle::new(ball.pos, ball.radius);
    if !circle_rect_collision(&circle, &brick.rect) {
        return None;
    }
    Some(collision_side(ball, &brick.rect))
}

/// Resolve which face of `rect` the ball struck
///
/// Compares penetration depth per axis; a Left/Right verdict requires
/// `overlap_x < overlap_y` strictly, so the Y axis wins ties.
fn collision_side(ball: &Ball, rect: &Rect) -> Side {
    let delta = ball.pos - rect.center();
    let overlap_x = rect.width / 2.0 + ball.radius - delta.x.abs();
    let overlap_y = rect.height / 2.0 + ball.radius - delta.y.abs();

    if overlap_x < overlap_y {
        if delta.x > 0.0 { Side::Right } else { Side::Left }
    } else if delta.y > 0.0 {
        Side::Bottom
    } else {
        Side::Top
    }
}

/// Ball vs the whole grid: first live hit in layout order
///
/// Iteration order is the grid's row-major layout order. When the ball
/// overlaps several bricks in one tick, the earliest one wins; this is a
/// defined tie-break, not an accident.
pub fn check_ball_bricks(ball: &Ball, bricks: &[Brick]) -> Option<(usize, Side)> {
    bricks
        .iter()
        .enumerate()
        .find_map(|(idx, brick)| check_ball_brick(ball, brick).map(|side| (idx, side)))
}

/// Rewrite the ball's velocity after a contact
///
/// The angle form rebuilds the velocity from the angle at the ball's
/// current speed; the reflect form negates the component implied by the
/// struck side.
pub fn apply_bounce(ball: &mut Ball, bounce: Bounce) {
    match bounce {
        Bounce::Angle(angle) => {
            let speed = ball.vel.length();
            ball.set_velocity_from_angle(angle, speed);
        }
        Bounce::Reflect(Side::Left | Side::Right) => ball.reverse_x(),
        Bounce::Reflect(Side::Top | Side::Bottom) => ball.reverse_y(),
    }
}
