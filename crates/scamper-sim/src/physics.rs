use scamper_core::body::Body;
use scamper_core::intent::PlayerIntent;
use scamper_core::level::SurfaceKind;

use crate::config::PhysicsConfig;

/// Advance the player's velocity for one tick: horizontal acceleration
/// toward the commanded direction, surface-aware friction when idle, an
/// edge-triggered jump impulse when grounded, then gravity. Position is
/// advanced later by the collision pass.
pub fn integrate_player(body: &mut Body, intent: &PlayerIntent, cfg: &PhysicsConfig) {
    let dir = intent.move_dir();
    if dir != 0.0 {
        body.vx = (body.vx + dir * cfg.move_accel).clamp(-cfg.max_run_speed, cfg.max_run_speed);
    } else {
        apply_friction(body, cfg);
    }

    // Jump only from the ground; the intent bit is already edge-triggered,
    // so a held key cannot re-fire until the mapper sees a fresh press.
    if intent.jump && body.grounded() {
        body.vy = cfg.jump_impulse;
        body.ground = None;
    }

    apply_gravity(body, cfg);
}

/// Decelerate toward zero using the friction of whatever the body stands
/// on: normal surfaces brake hard, ice barely at all, airborne bodies get
/// a light drag.
fn apply_friction(body: &mut Body, cfg: &PhysicsConfig) {
    let friction = match body.surface() {
        Some(SurfaceKind::Ice) => cfg.friction_ice,
        Some(SurfaceKind::Normal) => cfg.friction_normal,
        None => cfg.air_drag,
    };
    if body.vx.abs() <= friction {
        body.vx = 0.0;
    } else {
        body.vx -= friction * body.vx.signum();
    }
}

/// Gravity with the terminal-velocity cap; shared by the player and
/// enemies. The cap keeps one-tick displacement below platform thickness.
pub fn apply_gravity(body: &mut Body, cfg: &PhysicsConfig) {
    body.vy = (body.vy + cfg.gravity).min(cfg.terminal_velocity);
}
