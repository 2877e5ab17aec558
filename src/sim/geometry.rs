//! Axis-aligned geometry primitives and intersection tests
//!
//! Pure value types and pure functions; the collision module builds the
//! entity-pair checks on top of these.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (origin at top-left, +y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge X coordinate
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge Y coordinate
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point lies inside the rectangle (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// A circle in field space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Bounding box of the circle
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

/// Rectangle overlap test with strict inequalities on all four half-planes
///
/// Edge-touching rectangles do NOT count as intersecting.
#[inline]
pub fn rect_intersect(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Distance from a point to the nearest point on a rectangle
///
/// Clamps the point into the rectangle's extent and measures the Euclidean
/// distance to the clamped point (zero when the point is inside).
pub fn circle_rect_distance(center: Vec2, rect: &Rect) -> f32 {
    let closest = Vec2::new(
        center.x.clamp(rect.x, rect.right()),
        center.y.clamp(rect.y, rect.bottom()),
    );
    (center - closest).length()
}

/// Circle/rectangle overlap test
///
/// Touching counts as a collision (distance exactly equal to the radius),
/// asymmetric with [`rect_intersect`] where touching edges do not.
#[inline]
pub fn circle_rect_collision(circle: &Circle, rect: &Rect) -> bool {
    circle_rect_distance(circle.center, rect) <= circle.radius
}
