use serde::{Deserialize, Serialize};

/// Gravity acceleration (units/tick^2, downward).
pub const GRAVITY: f32 = 0.8;
/// Fall speed ceiling (units/tick). Kept below the thinnest solid platform
/// so a capped fall cannot tunnel through it in one tick.
pub const TERMINAL_VELOCITY: f32 = 16.0;
/// Horizontal acceleration while a direction is held (units/tick^2).
pub const MOVE_ACCEL: f32 = 0.5;
/// Maximum horizontal run speed (units/tick).
pub const MAX_RUN_SPEED: f32 = 5.0;
/// Friction deceleration on normal surfaces (units/tick^2).
pub const FRICTION_NORMAL: f32 = 0.6;
/// Friction deceleration on ice (units/tick^2).
pub const FRICTION_ICE: f32 = 0.04;
/// Horizontal deceleration while airborne (units/tick^2).
pub const AIR_DRAG: f32 = 0.1;
/// Jump impulse (units/tick; negative is up).
pub const JUMP_IMPULSE: f32 = -15.0;
/// Upward bounce applied to the player after stomping an enemy.
pub const STOMP_BOUNCE: f32 = -7.5;
/// Base enemy patrol speed (units/tick), scaled by the variant factor.
pub const ENEMY_BASE_SPEED: f32 = 2.0;

/// Lives at session start.
pub const STARTING_LIVES: u32 = 3;
/// Life cap enforced on powerup collection.
pub const MAX_LIVES: u32 = 9;
/// Invulnerability window after taking damage, in ticks (1.5 s at 60 Hz).
pub const INVULN_TICKS: u32 = 90;
/// Knockback impulse applied on damage, away from the contact source.
pub const KNOCKBACK_X: f32 = 6.0;
/// Upward component of the damage knockback.
pub const KNOCKBACK_Y: f32 = -6.0;

/// Camera viewport width.
pub const VIEWPORT_W: f32 = 800.0;
/// Camera viewport height.
pub const VIEWPORT_H: f32 = 600.0;
/// Camera smoothing per tick: 1.0 snaps to the target, values in (0, 1)
/// interpolate toward it.
pub const CAMERA_SMOOTHING: f32 = 1.0;

/// Physics tunables, loadable from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub terminal_velocity: f32,
    pub move_accel: f32,
    pub max_run_speed: f32,
    pub friction_normal: f32,
    pub friction_ice: f32,
    pub air_drag: f32,
    pub jump_impulse: f32,
    pub stomp_bounce: f32,
    pub enemy_base_speed: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            terminal_velocity: TERMINAL_VELOCITY,
            move_accel: MOVE_ACCEL,
            max_run_speed: MAX_RUN_SPEED,
            friction_normal: FRICTION_NORMAL,
            friction_ice: FRICTION_ICE,
            air_drag: AIR_DRAG,
            jump_impulse: JUMP_IMPULSE,
            stomp_bounce: STOMP_BOUNCE,
            enemy_base_speed: ENEMY_BASE_SPEED,
        }
    }
}

/// Damage and lives tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub starting_lives: u32,
    pub max_lives: u32,
    pub invuln_ticks: u32,
    pub knockback_x: f32,
    pub knockback_y: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            max_lives: MAX_LIVES,
            invuln_ticks: INVULN_TICKS,
            knockback_x: KNOCKBACK_X,
            knockback_y: KNOCKBACK_Y,
        }
    }
}

/// Camera tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub viewport_w: f32,
    pub viewport_h: f32,
    pub smoothing: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewport_w: VIEWPORT_W,
            viewport_h: VIEWPORT_H,
            smoothing: CAMERA_SMOOTHING,
        }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub physics: PhysicsConfig,
    pub combat: CombatConfig,
    pub camera: CameraConfig,
}

impl SimConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("SCAMPER_CONFIG")
            .unwrap_or_else(|_| "config/scamper.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<SimConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    SimConfig::default()
                },
            },
            Err(_) => SimConfig::default(),
        }
    }
}
