use scamper_core::level::{EnemyKind, EnemySpawn, Level};

/// Score for flattening an enemy.
pub const STOMP_SCORE: u32 = 100;
/// Score for collecting a powerup.
pub const POWERUP_SCORE: u32 = 200;
/// Score step between difficulty spawns.
pub const SPAWN_SCORE_STEP: u32 = 1000;
/// Hard cap on live enemies.
pub const MAX_ACTIVE_ENEMIES: usize = 25;

/// Horizontal gap between the view edge and a difficulty spawn.
const SPAWN_MARGIN: f32 = 40.0;

/// Rotation for threshold spawns.
const SPAWN_CYCLE: [EnemyKind; 4] = [
    EnemyKind::Fast,
    EnemyKind::Jumper,
    EnemyKind::Big,
    EnemyKind::Basic,
];

/// Score-driven difficulty: each SPAWN_SCORE_STEP of score crossed spawns
/// one extra enemy. Crossed thresholds are counted so each one triggers
/// exactly once, even when a single tick jumps the score past several.
#[derive(Debug, Clone, Copy, Default)]
pub struct Progression {
    /// Thresholds already consumed.
    consumed: u32,
    /// Rotating index into the spawn cycle.
    next_kind: usize,
}

impl Progression {
    /// Thresholds the current score has crossed but not yet consumed.
    pub fn thresholds_crossed(&self, score: u32) -> u32 {
        (score / SPAWN_SCORE_STEP).saturating_sub(self.consumed)
    }

    /// Mark one crossed threshold as handled.
    pub fn consume(&mut self) {
        self.consumed += 1;
    }

    /// Next enemy kind in the rotation, advancing it.
    pub fn next_spawn_kind(&mut self) -> EnemyKind {
        let kind = SPAWN_CYCLE[self.next_kind];
        self.next_kind = (self.next_kind + 1) % SPAWN_CYCLE.len();
        kind
    }
}

/// Place a difficulty spawn just past the right edge of the view, dropping
/// in from the level top. Near the end of the level it falls back to the
/// left edge instead, so the spawn always lands inside the level.
pub fn plan_spawn(kind: EnemyKind, level: &Level, camera_x: f32, viewport_w: f32) -> EnemySpawn {
    let (w, _) = kind.size();
    let right = camera_x + viewport_w + SPAWN_MARGIN;
    let x = if right + w <= level.width {
        right
    } else {
        (camera_x - SPAWN_MARGIN - w).max(0.0)
    };
    EnemySpawn {
        kind,
        x,
        y: 0.0,
        patrol: None,
    }
}
