use serde::{Deserialize, Serialize};

use crate::geometry::Aabb;

/// Friction class of a platform top, consumed by the physics integrator
/// while an entity is grounded on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceKind {
    Normal,
    Ice,
}

/// Waypoint motion for a moving platform: the authored rect patrols the
/// segment from its own position to `(to_x, to_y)` and back at `speed`
/// units per tick, reversing exactly at each endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingSpec {
    pub to_x: f32,
    pub to_y: f32,
    pub speed: f32,
}

/// Behavior of a platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Solid from every side, normal friction.
    Normal,
    /// One-way: solid only for bodies arriving from above.
    Cloud,
    /// Solid from every side, near-zero friction on top.
    Ice,
    /// Solid from every side; patrols between two waypoints carrying riders.
    Moving(MovingSpec),
}

impl PlatformKind {
    /// One-way platforms only resolve collisions from above.
    pub fn is_one_way(&self) -> bool {
        matches!(self, PlatformKind::Cloud)
    }

    pub fn surface(&self) -> SurfaceKind {
        match self {
            PlatformKind::Ice => SurfaceKind::Ice,
            _ => SurfaceKind::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Aabb,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn new(rect: Aabb, kind: PlatformKind) -> Self {
        Self { rect, kind }
    }
}

/// Static hazard; contact damages the player regardless of approach side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub rect: Aabb,
}

/// Collectible granting an extra life and score; removed once collected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Powerup {
    pub rect: Aabb,
}

/// Enemy behavior variant. Determines body size, patrol speed, and which
/// AI state machine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Basic,
    Fast,
    Big,
    Jumper,
}

impl EnemyKind {
    /// Body size (width, height).
    pub fn size(&self) -> (f32, f32) {
        match self {
            EnemyKind::Basic => (36.0, 36.0),
            EnemyKind::Fast => (28.0, 28.0),
            EnemyKind::Big => (48.0, 48.0),
            EnemyKind::Jumper => (32.0, 40.0),
        }
    }

    /// Multiplier on the base patrol speed.
    pub fn speed_factor(&self) -> f32 {
        match self {
            EnemyKind::Basic => 1.0,
            EnemyKind::Fast => 1.5,
            EnemyKind::Big => 0.7,
            EnemyKind::Jumper => 1.0,
        }
    }
}

/// Horizontal x limits a walking enemy patrols between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatrolBounds {
    pub left: f32,
    pub right: f32,
}

/// Authored enemy placement. `patrol` of `None` means the enemy turns only
/// on wall hits and level bounds; jumpers ignore patrol bounds entirely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub kind: EnemyKind,
    pub x: f32,
    pub y: f32,
    pub patrol: Option<PatrolBounds>,
}

/// Static level definition consumed at session start. Immutable once
/// validated; runtime state (live enemies, uncollected powerups, moving
/// platform positions) lives in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub width: f32,
    pub height: f32,
    /// Y coordinate below which a body has fallen out of the level.
    pub kill_plane: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub theme: String,
    pub platforms: Vec<Platform>,
    pub hazards: Vec<Hazard>,
    pub powerups: Vec<Powerup>,
    pub enemies: Vec<EnemySpawn>,
}

#[derive(Debug)]
pub enum LevelError {
    NoPlatforms,
    InvalidBounds { width: f32, height: f32 },
    InvalidKillPlane(f32),
    SpawnOutOfBounds { x: f32, y: f32 },
    DegeneratePlatform { index: usize },
    WaypointOutOfBounds { index: usize },
    EnemyOutOfBounds { index: usize },
    PatrolBoundsInverted { index: usize },
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPlatforms => write!(f, "level has no platforms"),
            Self::InvalidBounds { width, height } => {
                write!(f, "invalid level bounds: {width} x {height}")
            },
            Self::InvalidKillPlane(y) => write!(f, "invalid kill plane: {y}"),
            Self::SpawnOutOfBounds { x, y } => {
                write!(f, "spawn point ({x}, {y}) outside level bounds")
            },
            Self::DegeneratePlatform { index } => {
                write!(f, "platform {index} has a degenerate or non-finite rect")
            },
            Self::WaypointOutOfBounds { index } => {
                write!(f, "moving platform {index} has a waypoint outside level bounds")
            },
            Self::EnemyOutOfBounds { index } => {
                write!(f, "enemy {index} spawns outside level bounds")
            },
            Self::PatrolBoundsInverted { index } => {
                write!(f, "enemy {index} has patrol bounds with left >= right")
            },
        }
    }
}

impl std::error::Error for LevelError {}

impl Level {
    /// Fail-fast structural validation, run once before a session starts.
    /// A level that passes never produces mid-simulation geometry surprises.
    pub fn validate(&self) -> Result<(), LevelError> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(LevelError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        if !self.kill_plane.is_finite() {
            return Err(LevelError::InvalidKillPlane(self.kill_plane));
        }
        if self.platforms.is_empty() {
            return Err(LevelError::NoPlatforms);
        }
        if !self.contains(self.spawn_x, self.spawn_y) {
            return Err(LevelError::SpawnOutOfBounds {
                x: self.spawn_x,
                y: self.spawn_y,
            });
        }

        for (index, platform) in self.platforms.iter().enumerate() {
            let r = platform.rect;
            if !r.is_finite() || r.w <= 0.0 || r.h <= 0.0 {
                return Err(LevelError::DegeneratePlatform { index });
            }
            if let PlatformKind::Moving(spec) = platform.kind {
                let target = Aabb::new(spec.to_x, spec.to_y, r.w, r.h);
                if !spec.to_x.is_finite()
                    || !spec.to_y.is_finite()
                    || !spec.speed.is_finite()
                    || spec.speed < 0.0
                    || !self.contains_rect(&r)
                    || !self.contains_rect(&target)
                {
                    return Err(LevelError::WaypointOutOfBounds { index });
                }
            }
        }

        for (index, enemy) in self.enemies.iter().enumerate() {
            if !self.contains(enemy.x, enemy.y) {
                return Err(LevelError::EnemyOutOfBounds { index });
            }
            if let Some(patrol) = enemy.patrol
                && (!patrol.left.is_finite()
                    || !patrol.right.is_finite()
                    || patrol.left >= patrol.right)
            {
                return Err(LevelError::PatrolBoundsInverted { index });
            }
        }

        Ok(())
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x.is_finite()
            && y.is_finite()
            && (0.0..self.width).contains(&x)
            && (0.0..self.height).contains(&y)
    }

    fn contains_rect(&self, rect: &Aabb) -> bool {
        rect.x >= 0.0 && rect.right() <= self.width && rect.y >= 0.0 && rect.bottom() <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::flat_level;

    #[test]
    fn flat_level_is_valid() {
        assert!(flat_level().validate().is_ok());
    }

    #[test]
    fn zero_platforms_rejected() {
        let mut level = flat_level();
        level.platforms.clear();
        assert!(
            matches!(level.validate(), Err(LevelError::NoPlatforms)),
            "A level without platforms must fail validation"
        );
    }

    #[test]
    fn non_positive_bounds_rejected() {
        let mut level = flat_level();
        level.width = 0.0;
        assert!(matches!(
            level.validate(),
            Err(LevelError::InvalidBounds { .. })
        ));

        let mut level = flat_level();
        level.height = f32::NAN;
        assert!(matches!(
            level.validate(),
            Err(LevelError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn non_finite_kill_plane_rejected() {
        let mut level = flat_level();
        level.kill_plane = f32::INFINITY;
        assert!(matches!(
            level.validate(),
            Err(LevelError::InvalidKillPlane(_))
        ));
    }

    #[test]
    fn spawn_outside_bounds_rejected() {
        let mut level = flat_level();
        level.spawn_x = level.width + 50.0;
        assert!(matches!(
            level.validate(),
            Err(LevelError::SpawnOutOfBounds { .. })
        ));
    }

    #[test]
    fn degenerate_platform_rejected() {
        let mut level = flat_level();
        level.platforms[0].rect.w = 0.0;
        assert!(matches!(
            level.validate(),
            Err(LevelError::DegeneratePlatform { index: 0 })
        ));
    }

    #[test]
    fn moving_waypoint_outside_bounds_rejected() {
        let mut level = flat_level();
        let rect = Aabb::new(100.0, 300.0, 100.0, 20.0);
        level.platforms.push(Platform::new(
            rect,
            PlatformKind::Moving(MovingSpec {
                to_x: level.width + 100.0,
                to_y: 300.0,
                speed: 2.0,
            }),
        ));
        let index = level.platforms.len() - 1;
        match level.validate() {
            Err(LevelError::WaypointOutOfBounds { index: i }) => {
                assert_eq!(i, index, "Error should name the offending platform")
            },
            other => panic!("Expected WaypointOutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn negative_moving_speed_rejected() {
        let mut level = flat_level();
        level.platforms.push(Platform::new(
            Aabb::new(100.0, 300.0, 100.0, 20.0),
            PlatformKind::Moving(MovingSpec {
                to_x: 300.0,
                to_y: 300.0,
                speed: -1.0,
            }),
        ));
        assert!(matches!(
            level.validate(),
            Err(LevelError::WaypointOutOfBounds { .. })
        ));
    }

    #[test]
    fn inverted_patrol_bounds_rejected() {
        let mut level = flat_level();
        level.enemies.push(EnemySpawn {
            kind: EnemyKind::Basic,
            x: 200.0,
            y: 400.0,
            patrol: Some(PatrolBounds {
                left: 500.0,
                right: 100.0,
            }),
        });
        assert!(matches!(
            level.validate(),
            Err(LevelError::PatrolBoundsInverted { .. })
        ));
    }

    #[test]
    fn enemy_outside_bounds_rejected() {
        let mut level = flat_level();
        level.enemies.push(EnemySpawn {
            kind: EnemyKind::Fast,
            x: -10.0,
            y: 400.0,
            patrol: None,
        });
        assert!(matches!(
            level.validate(),
            Err(LevelError::EnemyOutOfBounds { .. })
        ));
    }

    #[test]
    fn cloud_is_one_way_others_are_not() {
        assert!(PlatformKind::Cloud.is_one_way());
        assert!(!PlatformKind::Normal.is_one_way());
        assert!(!PlatformKind::Ice.is_one_way());
        assert!(
            !PlatformKind::Moving(MovingSpec {
                to_x: 0.0,
                to_y: 0.0,
                speed: 1.0
            })
            .is_one_way()
        );
    }

    #[test]
    fn only_ice_has_ice_surface() {
        assert_eq!(PlatformKind::Ice.surface(), SurfaceKind::Ice);
        assert_eq!(PlatformKind::Normal.surface(), SurfaceKind::Normal);
        assert_eq!(PlatformKind::Cloud.surface(), SurfaceKind::Normal);
    }

    #[test]
    fn enemy_stat_table() {
        assert_eq!(EnemyKind::Big.size(), (48.0, 48.0));
        assert_eq!(EnemyKind::Fast.speed_factor(), 1.5);
        assert!(
            EnemyKind::Big.speed_factor() < EnemyKind::Basic.speed_factor(),
            "Big enemies are slower than basic ones"
        );
    }

    #[test]
    fn level_json_roundtrip() {
        let level = flat_level();
        let json = serde_json::to_string(&level).unwrap();
        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(level, back, "Level must survive a serde roundtrip");
    }
}
