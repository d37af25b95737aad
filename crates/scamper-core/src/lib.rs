pub mod body;
pub mod geometry;
pub mod intent;
pub mod level;
pub mod outcome;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::geometry::Aabb;
    use crate::intent::PlayerIntent;
    use crate::level::{
        EnemyKind, EnemySpawn, Hazard, Level, MovingSpec, PatrolBounds, Platform, PlatformKind,
        Powerup,
    };

    /// Solid platform with normal friction.
    pub fn solid(x: f32, y: f32, w: f32, h: f32) -> Platform {
        Platform::new(Aabb::new(x, y, w, h), PlatformKind::Normal)
    }

    /// One-way cloud platform.
    pub fn cloud(x: f32, y: f32, w: f32, h: f32) -> Platform {
        Platform::new(Aabb::new(x, y, w, h), PlatformKind::Cloud)
    }

    /// Solid platform with near-zero friction.
    pub fn ice(x: f32, y: f32, w: f32, h: f32) -> Platform {
        Platform::new(Aabb::new(x, y, w, h), PlatformKind::Ice)
    }

    /// Waypoint platform patrolling from (x, y) to (to_x, to_y).
    pub fn moving(x: f32, y: f32, w: f32, h: f32, to_x: f32, to_y: f32, speed: f32) -> Platform {
        Platform::new(
            Aabb::new(x, y, w, h),
            PlatformKind::Moving(MovingSpec { to_x, to_y, speed }),
        )
    }

    pub fn hazard(x: f32, y: f32, w: f32, h: f32) -> Hazard {
        Hazard {
            rect: Aabb::new(x, y, w, h),
        }
    }

    pub fn powerup(x: f32, y: f32) -> Powerup {
        Powerup {
            rect: Aabb::new(x, y, 24.0, 24.0),
        }
    }

    /// Enemy placement without authored patrol bounds.
    pub fn enemy_at(kind: EnemyKind, x: f32, y: f32) -> EnemySpawn {
        EnemySpawn {
            kind,
            x,
            y,
            patrol: None,
        }
    }

    /// Enemy placement patrolling between `left` and `right`.
    pub fn patrolling(kind: EnemyKind, x: f32, y: f32, left: f32, right: f32) -> EnemySpawn {
        EnemySpawn {
            kind,
            x,
            y,
            patrol: Some(PatrolBounds { left, right }),
        }
    }

    /// Single-screen level with one full-width ground platform. Spawn is in
    /// the air above the ground; no enemies, hazards, or powerups.
    pub fn flat_level() -> Level {
        Level {
            width: 800.0,
            height: 600.0,
            kill_plane: 700.0,
            spawn_x: 100.0,
            spawn_y: 400.0,
            theme: "test".to_string(),
            platforms: vec![solid(0.0, 560.0, 800.0, 40.0)],
            hazards: vec![],
            powerups: vec![],
            enemies: vec![],
        }
    }

    /// Wide level (4 screens) with a full-width ground platform, for camera
    /// and scrolling tests.
    pub fn scrolling_level() -> Level {
        Level {
            width: 3200.0,
            height: 600.0,
            kill_plane: 700.0,
            spawn_x: 100.0,
            spawn_y: 400.0,
            theme: "test".to_string(),
            platforms: vec![solid(0.0, 560.0, 3200.0, 40.0)],
            hazards: vec![],
            powerups: vec![],
            enemies: vec![],
        }
    }

    pub fn intent_idle() -> PlayerIntent {
        PlayerIntent::default()
    }

    pub fn intent_left() -> PlayerIntent {
        PlayerIntent {
            move_left: true,
            ..Default::default()
        }
    }

    pub fn intent_right() -> PlayerIntent {
        PlayerIntent {
            move_right: true,
            ..Default::default()
        }
    }

    /// Jump pressed this tick, no horizontal input.
    pub fn intent_jump() -> PlayerIntent {
        PlayerIntent {
            jump: true,
            ..Default::default()
        }
    }
}
