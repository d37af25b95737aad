use rand::Rng;
use rand::rngs::StdRng;
use scamper_core::body::Body;
use scamper_core::level::{EnemyKind, EnemySpawn, PatrolBounds};
use serde::{Deserialize, Serialize};

use crate::config::PhysicsConfig;

/// Dwell between jumper hops, in ticks (inclusive).
const JUMP_DWELL_MIN: u32 = 60;
const JUMP_DWELL_MAX: u32 = 120;
/// Jumper hop impulse relative to the player jump.
const JUMP_IMPULSE_SCALE: f32 = 0.7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    pub kind: EnemyKind,
    /// Walk direction, -1.0 or 1.0.
    pub dir: f32,
    pub patrol: Option<PatrolBounds>,
    /// Ticks until the next hop. Jumpers only; zero for walkers.
    jump_timer: u32,
    /// Top edge at the start of the tick; drives stomp classification.
    pub prev_top: f32,
}

impl Enemy {
    pub fn from_spawn(spawn: &EnemySpawn, rng: &mut StdRng) -> Self {
        let (w, h) = spawn.kind.size();
        let body = Body::new(spawn.x, spawn.y, w, h);
        let prev_top = body.top();
        let jump_timer = match spawn.kind {
            EnemyKind::Jumper => rng.random_range(JUMP_DWELL_MIN..=JUMP_DWELL_MAX),
            _ => 0,
        };
        Self {
            body,
            kind: spawn.kind,
            dir: -1.0,
            patrol: spawn.patrol,
            jump_timer,
            prev_top,
        }
    }

    pub fn speed(&self, cfg: &PhysicsConfig) -> f32 {
        cfg.enemy_base_speed * self.kind.speed_factor()
    }

    /// Drive this tick's velocities: walkers patrol between their bounds,
    /// jumpers sit out their dwell and then hop in a random direction.
    pub fn think(&mut self, cfg: &PhysicsConfig, rng: &mut StdRng) {
        match self.kind {
            EnemyKind::Basic | EnemyKind::Fast | EnemyKind::Big => {
                if let Some(patrol) = self.patrol {
                    if self.body.left() <= patrol.left {
                        self.body.x = patrol.left;
                        self.dir = 1.0;
                    } else if self.body.right() >= patrol.right {
                        self.body.x = patrol.right - self.body.w;
                        self.dir = -1.0;
                    }
                }
                self.body.vx = self.dir * self.speed(cfg);
            },
            EnemyKind::Jumper => {
                // Airborne hops coast on the impulse already applied.
                if !self.body.grounded() {
                    return;
                }
                if self.jump_timer > 0 {
                    self.jump_timer -= 1;
                    self.body.vx = 0.0;
                    return;
                }
                self.dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
                self.body.vx = self.dir * self.speed(cfg);
                self.body.vy = cfg.jump_impulse * JUMP_IMPULSE_SCALE;
                self.body.ground = None;
                self.jump_timer = rng.random_range(JUMP_DWELL_MIN..=JUMP_DWELL_MAX);
            },
        }
    }

    /// Wall contact reverses the walk.
    pub fn reverse(&mut self) {
        self.dir = -self.dir;
    }
}
