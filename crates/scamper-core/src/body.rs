use serde::{Deserialize, Serialize};

use crate::geometry::Aabb;
use crate::level::SurfaceKind;

/// Ground contact recorded by the collision resolver when a falling body
/// lands on a platform top. Cleared at the start of every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundContact {
    /// Index into the session's platform set.
    pub platform: usize,
    pub surface: SurfaceKind,
}

/// Kinematic body embedded by every dynamic entity: position is the AABB's
/// top-left corner, velocity is in units per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vx: f32,
    pub vy: f32,
    pub ground: Option<GroundContact>,
}

impl Body {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            vx: 0.0,
            vy: 0.0,
            ground: None,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.w, self.h)
    }

    pub fn grounded(&self) -> bool {
        self.ground.is_some()
    }

    /// Surface under the body this tick, if any.
    pub fn surface(&self) -> Option<SurfaceKind> {
        self.ground.map(|g| g.surface)
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

    /// Clamp non-finite state so a single corrupted frame cannot poison the
    /// body permanently: position falls back to the given point, velocity
    /// components reset to zero.
    pub fn sanitize(&mut self, fallback_x: f32, fallback_y: f32) {
        if !self.x.is_finite() || !self.y.is_finite() {
            tracing::warn!(x = self.x, y = self.y, "Non-finite body position reset");
            self.x = fallback_x;
            self.y = fallback_y;
        }
        if !self.vx.is_finite() {
            tracing::warn!(vx = self.vx, "Non-finite vx zeroed");
            self.vx = 0.0;
        }
        if !self.vy.is_finite() {
            tracing::warn!(vy = self.vy, "Non-finite vy zeroed");
            self.vy = 0.0;
        }
    }
}
