/// The level: owns every entity and runs one frame at a time.
///
/// Frame order is fixed.  The ground goes first so border flags are fresh,
/// the player goes before the boss so the player's projectiles meet the
/// boss where it stood last frame.  Collisions are resolved inside each
/// entity's own update.  All randomness comes through the injected `rng`.

use std::path::Path;

use rand::Rng;
use tracing::info;

use crate::boss::Boss;
use crate::collectible::Coin;
use crate::combat::Damageable;
use crate::config::EntityParams;
use crate::end_flag::EndFlag;
use crate::enemy::Enemy;
use crate::entities::{EntityTag, FrameInput, GameStatus};
use crate::error::LevelError;
use crate::placement::{load_placements, Placement};
use crate::platform::{FlyingPlatform, GroundPlatform};
use crate::player::Player;
use crate::power_up::{PowerUp, PowerUpKind};

#[derive(Clone, Debug)]
pub struct Level {
    pub player: Player,
    pub ground: GroundPlatform,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub power_ups: Vec<PowerUp>,
    pub flying_platforms: Vec<FlyingPlatform>,
    pub end_flag: EndFlag,
    pub boss: Option<Boss>,
    pub score: u32,
    pub frame: u64,
}

// ── Construction ──────────────────────────────────────────────────────────────

impl Level {
    /// Build a level from its placement records.  Requires exactly one
    /// PLAYER, PLATFORM and END_FLAG, and at most one ENEMY_BOSS.
    pub fn from_placements(
        placements: &[Placement],
        params: &EntityParams,
    ) -> Result<Self, LevelError> {
        let mut player = None;
        let mut ground = None;
        let mut end_flag = None;
        let mut boss = None;
        let mut enemies = Vec::new();
        let mut coins = Vec::new();
        let mut power_ups = Vec::new();
        let mut flying_platforms = Vec::new();

        for p in placements {
            let (x, y) = (f64::from(p.x), f64::from(p.y));
            match p.tag {
                EntityTag::Player => {
                    let spawned = Player::new(x, y, &params.player, params.fireball);
                    place_once(&mut player, spawned, p.tag)?;
                }
                EntityTag::Platform => {
                    let spawned = GroundPlatform::new(x, y, &params.platform, params.window_width);
                    place_once(&mut ground, spawned, p.tag)?;
                }
                EntityTag::EndFlag => {
                    place_once(&mut end_flag, EndFlag::new(x, y, &params.end_flag), p.tag)?;
                }
                EntityTag::EnemyBoss => {
                    let spawned = Boss::new(x, y, &params.boss, params.fireball);
                    place_once(&mut boss, spawned, p.tag)?;
                }
                EntityTag::Enemy => enemies.push(Enemy::new(x, y, &params.enemy)),
                EntityTag::Coin => coins.push(Coin::new(x, y, &params.coin)),
                EntityTag::DoubleScore => power_ups.push(PowerUp::new(
                    PowerUpKind::DoubleScore,
                    x,
                    y,
                    &params.double_score,
                )),
                EntityTag::InvinciblePower => power_ups.push(PowerUp::new(
                    PowerUpKind::Invincibility,
                    x,
                    y,
                    &params.invincible_power,
                )),
                EntityTag::FlyingPlatform => {
                    flying_platforms.push(FlyingPlatform::new(x, y, &params.flying_platform))
                }
            }
        }

        let mut level = Self {
            player: player.ok_or(LevelError::Missing(EntityTag::Player))?,
            ground: ground.ok_or(LevelError::Missing(EntityTag::Platform))?,
            end_flag: end_flag.ok_or(LevelError::Missing(EntityTag::EndFlag))?,
            boss,
            enemies,
            coins,
            power_ups,
            flying_platforms,
            score: 0,
            frame: 0,
        };
        // Border flags must hold before the first scroll.
        level.ground.refresh_borders(&mut level.player);
        info!(
            enemies = level.enemies.len(),
            coins = level.coins.len(),
            power_ups = level.power_ups.len(),
            flying_platforms = level.flying_platforms.len(),
            boss = level.has_boss(),
            "level populated"
        );
        Ok(level)
    }

    pub fn load(path: &Path, params: &EntityParams) -> Result<Self, LevelError> {
        Self::from_placements(&load_placements(path)?, params)
    }
}

fn place_once<T>(slot: &mut Option<T>, value: T, tag: EntityTag) -> Result<(), LevelError> {
    if slot.is_some() {
        return Err(LevelError::Duplicate(tag));
    }
    *slot = Some(value);
    Ok(())
}

// ── Per-frame update ──────────────────────────────────────────────────────────

impl Level {
    pub fn update(&mut self, input: &FrameInput, rng: &mut impl Rng) {
        self.frame += 1;
        let player = &mut self.player;

        // ── 1. Ground (refreshes border flags) ───────────────────────────────
        self.ground.update(input, player);

        // ── 2. Enemies ────────────────────────────────────────────────────────
        for enemy in &mut self.enemies {
            enemy.update(input, player);
        }

        // ── 3. Coins ─────────────────────────────────────────────────────────
        for coin in &mut self.coins {
            self.score = self.score.saturating_add(coin.update(input, player));
        }

        // ── 4. Power-ups ─────────────────────────────────────────────────────
        for power_up in &mut self.power_ups {
            power_up.update(input, player);
        }

        // ── 5. Flying platforms ──────────────────────────────────────────────
        for platform in &mut self.flying_platforms {
            platform.update(input, player);
        }

        // ── 6. Player (and its projectiles) ──────────────────────────────────
        player.update(input, self.boss.as_mut());

        // ── 7. End flag ──────────────────────────────────────────────────────
        self.end_flag.update(input, player);

        // ── 8. Boss (and its projectiles) ────────────────────────────────────
        if let Some(boss) = self.boss.as_mut() {
            boss.update(input, player, rng);
        }

        // Crossing the flag does not count while the boss stands.
        if self.boss_alive() {
            self.end_flag.reset_collision();
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn has_boss(&self) -> bool {
        self.boss.is_some()
    }

    fn boss_alive(&self) -> bool {
        self.boss.as_ref().is_some_and(|boss| !boss.is_dead())
    }

    /// The player is dead and has fallen out of view.
    pub fn is_game_over(&self, viewport_height: f64) -> bool {
        self.player.concluded_death_fall(viewport_height)
    }

    /// The end flag was reached with no boss left standing.
    pub fn is_goal_reached(&self) -> bool {
        self.end_flag.collided && !self.boss_alive()
    }

    pub fn status(&self, viewport_height: f64) -> GameStatus {
        if self.is_game_over(viewport_height) {
            GameStatus::GameOver
        } else if self.is_goal_reached() {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    pub fn player_health_display(&self) -> i64 {
        health_display(self.player.health())
    }

    pub fn boss_health_display(&self) -> Option<i64> {
        self.boss.as_ref().map(|boss| health_display(boss.health()))
    }

    /// Clear projectile kill latches and forget the boss so the next
    /// attempt starts from a freshly loaded level.
    pub fn reset(&mut self) {
        self.player.launcher.reset();
        // Dropping the boss drops its launcher and latch with it.
        self.boss = None;
        info!(score = self.score, frames = self.frame, "level reset");
    }
}

/// Health as shown on screen: hundredths, rounded.
pub fn health_display(health: f64) -> i64 {
    (health * 100.0).round() as i64
}
