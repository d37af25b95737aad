use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in level coordinates (+x right, +y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Intersection test, inclusive-exclusive: boxes that merely touch along
    /// an edge do not overlap. Prevents false positives on exact pixel
    /// alignment (a body resting on a platform top is not colliding with it).
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }
}

/// Corrected x for a moving box overlapping `solid` on the horizontal axis:
/// a rightward mover is placed flush against the solid's left edge, a
/// leftward mover flush against its right edge.
pub fn resolve_x(moving: &Aabb, solid: &Aabb, moving_right: bool) -> f32 {
    if moving_right {
        solid.x - moving.w
    } else {
        solid.right()
    }
}

/// Corrected y for a moving box overlapping `solid` on the vertical axis:
/// a falling mover lands flush on the solid's top edge, a rising mover is
/// stopped flush under its bottom edge.
pub fn resolve_y(moving: &Aabb, solid: &Aabb, moving_down: bool) -> f32 {
    if moving_down {
        solid.y - moving.h
    } else {
        solid.bottom()
    }
}
