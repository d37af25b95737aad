use serde::{Deserialize, Serialize};

use scamper_core::geometry::Aabb;
use scamper_core::level::{Platform, PlatformKind, SurfaceKind};

/// Runtime platform: the authored definition plus current position, motion
/// progress for waypoint movers, and the displacement applied this tick
/// (consumed by the collision pass to carry riders).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformState {
    pub rect: Aabb,
    pub kind: PlatformKind,
    origin_x: f32,
    origin_y: f32,
    /// Segment parameter in [0, 1]: 0 at the authored origin, 1 at the
    /// target waypoint.
    t: f32,
    /// +1 toward the target, -1 back toward the origin.
    dir: f32,
    pub delta_x: f32,
    pub delta_y: f32,
}

impl PlatformState {
    pub fn new(platform: &Platform) -> Self {
        Self {
            rect: platform.rect,
            kind: platform.kind,
            origin_x: platform.rect.x,
            origin_y: platform.rect.y,
            t: 0.0,
            dir: 1.0,
            delta_x: 0.0,
            delta_y: 0.0,
        }
    }

    pub fn is_one_way(&self) -> bool {
        self.kind.is_one_way()
    }

    pub fn surface(&self) -> SurfaceKind {
        self.kind.surface()
    }

    /// Advance one tick of waypoint motion. Reverses exactly at each
    /// endpoint: the parameter is clamped to the segment, so the platform
    /// lands on the waypoint rather than overshooting it. Static kinds
    /// record a zero displacement.
    pub fn step(&mut self) {
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        let PlatformKind::Moving(spec) = self.kind else {
            return;
        };

        let seg_x = spec.to_x - self.origin_x;
        let seg_y = spec.to_y - self.origin_y;
        let length = (seg_x * seg_x + seg_y * seg_y).sqrt();
        if length == 0.0 || spec.speed == 0.0 {
            return;
        }

        let mut t = self.t + (spec.speed / length) * self.dir;
        if t >= 1.0 {
            t = 1.0;
            self.dir = -1.0;
        } else if t <= 0.0 {
            t = 0.0;
            self.dir = 1.0;
        }

        let new_x = self.origin_x + seg_x * t;
        let new_y = self.origin_y + seg_y * t;
        self.delta_x = new_x - self.rect.x;
        self.delta_y = new_y - self.rect.y;
        self.rect.x = new_x;
        self.rect.y = new_y;
        self.t = t;
    }
}
