use scamper_core::level::Level;
use serde::{Deserialize, Serialize};

use crate::config::CameraConfig;

/// Top-left corner of the visible viewport, in level space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
}

impl Camera {
    /// Start centered on a target point, clamped into the level.
    pub fn new(target_x: f32, target_y: f32, cfg: &CameraConfig, level: &Level) -> Self {
        Self {
            x: clamp_axis(target_x - cfg.viewport_w / 2.0, level.width, cfg.viewport_w),
            y: clamp_axis(target_y - cfg.viewport_h / 2.0, level.height, cfg.viewport_h),
        }
    }

    /// Track a target point: ease toward centering it, then clamp so the
    /// view never shows past a level edge. Smoothing of 1.0 snaps; values
    /// in (0, 1) ease by that fraction per tick; 0 freezes the camera.
    pub fn follow(&mut self, target_x: f32, target_y: f32, cfg: &CameraConfig, level: &Level) {
        let ease = cfg.smoothing.clamp(0.0, 1.0);
        let desired_x = target_x - cfg.viewport_w / 2.0;
        let desired_y = target_y - cfg.viewport_h / 2.0;
        self.x += (desired_x - self.x) * ease;
        self.y += (desired_y - self.y) * ease;
        self.x = clamp_axis(self.x, level.width, cfg.viewport_w);
        self.y = clamp_axis(self.y, level.height, cfg.viewport_h);
    }
}

fn clamp_axis(pos: f32, level_extent: f32, view_extent: f32) -> f32 {
    pos.clamp(0.0, (level_extent - view_extent).max(0.0))
}
