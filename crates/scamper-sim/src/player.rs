use scamper_core::body::Body;
use scamper_core::level::Level;
use serde::{Deserialize, Serialize};

use crate::config::CombatConfig;

/// Player collision box.
pub const PLAYER_W: f32 = 32.0;
pub const PLAYER_H: f32 = 48.0;

/// Which way the player faces. Tracked from movement intent and used to
/// break the knockback tie when a damage source is dead-centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

/// Player life-cycle. `Defeated` is terminal until an external reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    Alive,
    Defeated,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub body: Body,
    pub facing: Facing,
    pub lives: u32,
    /// Remaining invulnerability ticks from the last hit.
    pub invuln_ticks: u32,
    pub status: PlayerStatus,
    /// Bottom edge at the start of the tick, after rider carry. Drives
    /// stomp classification and one-way landings.
    pub prev_bottom: f32,
}

impl PlayerState {
    pub fn spawn(level: &Level, cfg: &CombatConfig) -> Self {
        let body = Body::new(level.spawn_x, level.spawn_y, PLAYER_W, PLAYER_H);
        let prev_bottom = body.bottom();
        Self {
            body,
            facing: Facing::Right,
            lives: cfg.starting_lives,
            invuln_ticks: 0,
            status: PlayerStatus::Alive,
            prev_bottom,
        }
    }

    pub fn alive(&self) -> bool {
        self.status == PlayerStatus::Alive
    }

    /// Whether contact damage applies. Kill-plane falls bypass this.
    pub fn vulnerable(&self) -> bool {
        self.invuln_ticks == 0
    }

    /// Update facing from horizontal intent; idle input keeps the last one.
    pub fn update_facing(&mut self, dir: f32) {
        if dir < 0.0 {
            self.facing = Facing::Left;
        } else if dir > 0.0 {
            self.facing = Facing::Right;
        }
    }

    /// Apply contact damage: lose a life, open the invulnerability window,
    /// and knock the player up and away from the source. Returns true when
    /// this hit defeated the player.
    pub fn take_hit(&mut self, source_cx: f32, cfg: &CombatConfig) -> bool {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.status = PlayerStatus::Defeated;
            return true;
        }
        self.invuln_ticks = cfg.invuln_ticks;
        let away = if self.body.center_x() < source_cx {
            -1.0
        } else if self.body.center_x() > source_cx {
            1.0
        } else {
            // Dead-centered source: knock backward relative to facing.
            match self.facing {
                Facing::Left => 1.0,
                Facing::Right => -1.0,
            }
        };
        self.body.vx = away * cfg.knockback_x;
        self.body.vy = cfg.knockback_y;
        self.body.ground = None;
        false
    }

    /// Crossing the kill plane costs a life regardless of invulnerability,
    /// then respawns the player at the level spawn point with the window
    /// restarted and velocity cleared. Returns true when the fall defeated
    /// the player.
    pub fn fall_out(&mut self, level: &Level, cfg: &CombatConfig) -> bool {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.status = PlayerStatus::Defeated;
            return true;
        }
        self.body = Body::new(level.spawn_x, level.spawn_y, PLAYER_W, PLAYER_H);
        self.prev_bottom = self.body.bottom();
        self.invuln_ticks = cfg.invuln_ticks;
        false
    }

    /// Collect a 1-up. Score is the caller's business; the cap is ours.
    pub fn grant_life(&mut self, cfg: &CombatConfig) {
        self.lives = (self.lives + 1).min(cfg.max_lives);
    }

    pub fn tick_invuln(&mut self) {
        self.invuln_ticks = self.invuln_ticks.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scamper_core::test_helpers::flat_level;

    fn player() -> PlayerState {
        PlayerState::spawn(&flat_level(), &CombatConfig::default())
    }

    #[test]
    fn spawn_uses_level_spawn_point_and_starting_lives() {
        let level = flat_level();
        let p = player();
        assert_eq!(p.body.x, level.spawn_x);
        assert_eq!(p.body.y, level.spawn_y);
        assert_eq!(p.lives, CombatConfig::default().starting_lives);
        assert!(p.alive());
        assert!(p.vulnerable());
    }

    #[test]
    fn hit_decrements_lives_and_opens_invuln_window() {
        let cfg = CombatConfig::default();
        let mut p = player();

        let defeated = p.take_hit(p.body.center_x() + 50.0, &cfg);

        assert!(!defeated);
        assert_eq!(p.lives, cfg.starting_lives - 1);
        assert_eq!(p.invuln_ticks, cfg.invuln_ticks);
        assert!(!p.vulnerable());
    }

    #[test]
    fn knockback_pushes_away_from_source() {
        let cfg = CombatConfig::default();

        let mut p = player();
        p.take_hit(p.body.center_x() + 50.0, &cfg);
        assert_eq!(p.body.vx, -cfg.knockback_x, "Source on the right knocks left");
        assert_eq!(p.body.vy, cfg.knockback_y, "Knockback always lifts");
        assert!(!p.body.grounded(), "Knockback breaks ground contact");

        let mut p = player();
        p.take_hit(p.body.center_x() - 50.0, &cfg);
        assert_eq!(p.body.vx, cfg.knockback_x, "Source on the left knocks right");
    }

    #[test]
    fn centered_source_knocks_backward_from_facing() {
        let cfg = CombatConfig::default();

        let mut p = player();
        p.facing = Facing::Right;
        p.take_hit(p.body.center_x(), &cfg);
        assert_eq!(p.body.vx, -cfg.knockback_x);

        let mut p = player();
        p.facing = Facing::Left;
        p.take_hit(p.body.center_x(), &cfg);
        assert_eq!(p.body.vx, cfg.knockback_x);
    }

    #[test]
    fn hit_at_one_life_is_terminal() {
        let cfg = CombatConfig::default();
        let mut p = player();
        p.lives = 1;

        let defeated = p.take_hit(0.0, &cfg);

        assert!(defeated);
        assert_eq!(p.status, PlayerStatus::Defeated);
        assert_eq!(p.lives, 0);
        assert_eq!(p.body.vx, 0.0, "Defeat applies no knockback");
    }

    #[test]
    fn fall_out_respawns_with_invulnerability_and_no_knockback() {
        let level = flat_level();
        let cfg = CombatConfig::default();
        let mut p = PlayerState::spawn(&level, &cfg);
        p.body.x = 500.0;
        p.body.y = 900.0;
        p.body.vy = 16.0;
        // Falls bypass an open window but still cost the life.
        p.invuln_ticks = 30;

        let defeated = p.fall_out(&level, &cfg);

        assert!(!defeated);
        assert_eq!(p.lives, cfg.starting_lives - 1);
        assert_eq!(p.body.x, level.spawn_x);
        assert_eq!(p.body.y, level.spawn_y);
        assert_eq!(p.body.vx, 0.0);
        assert_eq!(p.body.vy, 0.0);
        assert_eq!(p.invuln_ticks, cfg.invuln_ticks);
    }

    #[test]
    fn fall_out_at_one_life_is_terminal() {
        let level = flat_level();
        let cfg = CombatConfig::default();
        let mut p = PlayerState::spawn(&level, &cfg);
        p.lives = 1;
        p.body.y = 900.0;

        assert!(p.fall_out(&level, &cfg));
        assert_eq!(p.status, PlayerStatus::Defeated);
        assert_eq!(p.body.y, 900.0, "Defeat skips the respawn");
    }

    #[test]
    fn extra_lives_cap_at_maximum() {
        let cfg = CombatConfig::default();
        let mut p = player();
        p.lives = cfg.max_lives;

        p.grant_life(&cfg);

        assert_eq!(p.lives, cfg.max_lives);
    }

    #[test]
    fn facing_tracks_movement_and_holds_on_idle() {
        let mut p = player();
        assert_eq!(p.facing, Facing::Right);

        p.update_facing(-1.0);
        assert_eq!(p.facing, Facing::Left);
        p.update_facing(0.0);
        assert_eq!(p.facing, Facing::Left, "Idle input keeps the last facing");
        p.update_facing(1.0);
        assert_eq!(p.facing, Facing::Right);
    }

    #[test]
    fn invuln_window_counts_down_to_zero_and_stays() {
        let mut p = player();
        p.invuln_ticks = 2;

        p.tick_invuln();
        assert_eq!(p.invuln_ticks, 1);
        p.tick_invuln();
        assert!(p.vulnerable());
        p.tick_invuln();
        assert_eq!(p.invuln_ticks, 0, "Countdown saturates at zero");
    }
}
