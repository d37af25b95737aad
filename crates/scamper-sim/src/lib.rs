pub mod camera;
pub mod collision;
pub mod config;
pub mod enemy;
pub mod level_gen;
pub mod physics;
pub mod platforms;
pub mod player;
pub mod progression;

use rand::SeedableRng;
use rand::rngs::StdRng;
use smallvec::SmallVec;

use scamper_core::intent::PlayerIntent;
use scamper_core::level::{Level, LevelError, Powerup};
use scamper_core::outcome::FrameOutcome;

use camera::Camera;
use config::SimConfig;
use enemy::Enemy;
use platforms::PlatformState;
use player::{PlayerState, PlayerStatus};
use progression::{MAX_ACTIVE_ENEMIES, POWERUP_SCORE, Progression, STOMP_SCORE};

/// A single simulation run: one level, one player, the live enemies, and
/// the score-driven difficulty controller. `tick` advances everything by
/// one fixed step and reports what happened.
pub struct Session {
    level: Level,
    config: SimConfig,
    platforms: Vec<PlatformState>,
    player: PlayerState,
    enemies: Vec<Enemy>,
    powerups: Vec<Powerup>,
    camera: Camera,
    progression: Progression,
    score: u32,
    rng: StdRng,
    seed: u64,
    ticks: u64,
}

impl Session {
    /// Start a run on an authored level. Fails fast if the level is
    /// malformed rather than simulating on garbage.
    pub fn new(level: Level, config: SimConfig, seed: u64) -> Result<Self, LevelError> {
        level.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let platforms = level.platforms.iter().map(PlatformState::new).collect();
        let player = PlayerState::spawn(&level, &config.combat);
        let enemies = level
            .enemies
            .iter()
            .map(|spawn| Enemy::from_spawn(spawn, &mut rng))
            .collect();
        let powerups = level.powerups.clone();
        let camera = Camera::new(
            player.body.center_x(),
            player.body.center_y(),
            &config.camera,
            &level,
        );
        tracing::debug!(seed, theme = %level.theme, "Session started");
        Ok(Self {
            level,
            config,
            platforms,
            player,
            enemies,
            powerups,
            camera,
            progression: Progression::default(),
            score: 0,
            rng,
            seed,
            ticks: 0,
        })
    }

    /// Start a run on a procedurally generated level.
    pub fn generate(seed: u64, config: SimConfig) -> Result<Self, LevelError> {
        Self::new(level_gen::generate_level(seed), config, seed)
    }

    /// Rebuild the run on the existing level: fresh player, authored
    /// enemies and powerups, zeroed score, reseeded RNG. This is the one
    /// path out of defeat.
    pub fn reset(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = seed;
        self.platforms = self.level.platforms.iter().map(PlatformState::new).collect();
        self.player = PlayerState::spawn(&self.level, &self.config.combat);
        self.enemies = self
            .level
            .enemies
            .iter()
            .map(|spawn| Enemy::from_spawn(spawn, &mut self.rng))
            .collect();
        self.powerups = self.level.powerups.clone();
        self.camera = Camera::new(
            self.player.body.center_x(),
            self.player.body.center_y(),
            &self.config.camera,
            &self.level,
        );
        self.progression = Progression::default();
        self.score = 0;
        self.ticks = 0;
        tracing::debug!(seed, "Session reset");
    }

    /// Advance the simulation by one fixed step. After defeat the world is
    /// frozen: ticks do nothing until `reset`.
    pub fn tick(&mut self, intent: &PlayerIntent) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();
        if self.player.status == PlayerStatus::Defeated {
            return outcome;
        }
        self.ticks += 1;
        self.player.tick_invuln();

        // Platforms move first; riders pick up the displacement before
        // anything else looks at positions.
        self.step_platforms();

        // Previous-tick edges, captured after the carry. These drive the
        // one-way landing rule and stomp classification later this tick.
        self.player.prev_bottom = self.player.body.bottom();
        for enemy in &mut self.enemies {
            enemy.prev_top = enemy.body.top();
        }

        // Enemy intent.
        for enemy in &mut self.enemies {
            enemy.think(&self.config.physics, &mut self.rng);
        }

        // Player motion.
        physics::integrate_player(&mut self.player.body, intent, &self.config.physics);
        self.player.update_facing(intent.move_dir());
        collision::move_and_collide(
            &mut self.player.body,
            self.player.prev_bottom,
            &self.platforms,
        );
        collision::clamp_to_level(&mut self.player.body, &self.level);
        self.player.body.sanitize(self.level.spawn_x, self.level.spawn_y);

        // Enemy motion. Walls and level edges turn walkers around.
        for enemy in &mut self.enemies {
            physics::apply_gravity(&mut enemy.body, &self.config.physics);
            let prev_bottom = enemy.prev_top + enemy.body.h;
            let summary =
                collision::move_and_collide(&mut enemy.body, prev_bottom, &self.platforms);
            if summary.hit_wall || collision::clamp_to_level(&mut enemy.body, &self.level) {
                enemy.reverse();
            }
        }

        self.resolve_interactions(&mut outcome);

        // Camera follows the player center.
        self.camera.follow(
            self.player.body.center_x(),
            self.player.body.center_y(),
            &self.config.camera,
            &self.level,
        );

        self.spawn_for_score(&mut outcome);

        outcome
    }

    fn step_platforms(&mut self) {
        for platform in &mut self.platforms {
            platform.step();
        }
        // Riders are carried by their ground platform's displacement. The
        // binding is from last tick's landing; collision will re-establish
        // or drop it later this tick.
        if let Some(ground) = self.player.body.ground
            && let Some(platform) = self.platforms.get(ground.platform)
        {
            self.player.body.x += platform.delta_x;
            self.player.body.y += platform.delta_y;
        }
        for enemy in &mut self.enemies {
            if let Some(ground) = enemy.body.ground
                && let Some(platform) = self.platforms.get(ground.platform)
            {
                enemy.body.x += platform.delta_x;
                enemy.body.y += platform.delta_y;
            }
        }
    }

    fn resolve_interactions(&mut self, outcome: &mut FrameOutcome) {
        let combat = &self.config.combat;

        // Hazard contact wounds unless the window is open. One hit opens
        // it, so a single find is enough.
        if self.player.vulnerable()
            && let Some(hazard) = self
                .level
                .hazards
                .iter()
                .find(|hazard| hazard.rect.overlaps(&self.player.body.aabb()))
        {
            outcome.damage_taken = true;
            if self.player.take_hit(hazard.rect.center_x(), combat) {
                outcome.player_defeated = true;
            }
        }

        // Enemy contact: a stomp flattens the enemy and bounces the
        // player; anything else is side contact and wounds.
        let mut stomped: SmallVec<[usize; 8]> = SmallVec::new();
        for (index, enemy) in self.enemies.iter().enumerate() {
            if !self.player.alive() {
                break;
            }
            if !self.player.body.aabb().overlaps(&enemy.body.aabb()) {
                continue;
            }
            if collision::is_stomp(self.player.prev_bottom, enemy.prev_top) {
                stomped.push(index);
                outcome.enemies_stomped += 1;
                self.score += STOMP_SCORE;
                self.player.body.vy = self.config.physics.stomp_bounce;
                self.player.body.ground = None;
            } else if self.player.vulnerable() {
                outcome.damage_taken = true;
                if self.player.take_hit(enemy.body.center_x(), combat) {
                    outcome.player_defeated = true;
                }
            }
        }
        for &index in stomped.iter().rev() {
            self.enemies.remove(index);
        }

        // Powerups: collect on touch, gone for the rest of the run.
        if self.player.alive() {
            let player = &mut self.player;
            let score = &mut self.score;
            self.powerups.retain(|powerup| {
                if powerup.rect.overlaps(&player.body.aabb()) {
                    player.grant_life(combat);
                    *score += POWERUP_SCORE;
                    outcome.powerups_collected += 1;
                    false
                } else {
                    true
                }
            });
        }

        // Kill plane: falling out always costs a life, invulnerable or
        // not. Enemies below it (or with broken positions) are culled.
        if self.player.alive() && self.player.body.top() > self.level.kill_plane {
            outcome.damage_taken = true;
            if self.player.fall_out(&self.level, combat) {
                outcome.player_defeated = true;
            }
        }
        let kill_plane = self.level.kill_plane;
        self.enemies.retain(|enemy| {
            enemy.body.x.is_finite() && enemy.body.y.is_finite() && enemy.body.top() <= kill_plane
        });

        if outcome.player_defeated {
            tracing::debug!(ticks = self.ticks, score = self.score, "Player defeated");
        }
    }

    fn spawn_for_score(&mut self, outcome: &mut FrameOutcome) {
        if !self.player.alive() {
            return;
        }
        while self.progression.thresholds_crossed(self.score) > 0 {
            self.progression.consume();
            if self.enemies.len() >= MAX_ACTIVE_ENEMIES {
                // The threshold is spent either way; a full field eats it.
                continue;
            }
            let kind = self.progression.next_spawn_kind();
            let spawn = progression::plan_spawn(
                kind,
                &self.level,
                self.camera.x,
                self.config.camera.viewport_w,
            );
            self.enemies.push(Enemy::from_spawn(&spawn, &mut self.rng));
            outcome.enemies_spawned += 1;
            tracing::debug!(?kind, x = spawn.x, "Score threshold spawned an enemy");
        }
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn powerups(&self) -> &[Powerup] {
        &self.powerups
    }

    pub fn platforms(&self) -> &[PlatformState] {
        &self.platforms
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
