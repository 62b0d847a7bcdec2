/// Health, death and ranged attacks.
///
/// An actor is alive while its health is positive.  The first hit that takes
/// it to zero latches `killed` and starts the death fall; later hits still
/// clamp at zero but never re-trigger the transition.

use rand::Rng;
use tracing::debug;

use crate::config::ProjectileParams;
use crate::entities::FrameInput;
use crate::geometry::{Collider, Position};
use crate::motion::ScrollView;
use crate::projectile::Projectile;

/// Downward speed of a dying actor.
pub const FALL_SPEED: f64 = 2.0;

/// Frames between boss throw attempts.
pub const THROW_COOLDOWN_FRAMES: u32 = 100;

// ── Vitals & damage ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Vitals {
    pub health: f64,
    /// Set once, on the hit that kills.
    pub killed: bool,
}

impl Vitals {
    pub fn new(health: f64) -> Self {
        debug_assert!(health > 0.0, "actors start alive");
        Self {
            health,
            killed: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Target was invincible; health untouched.
    Blocked,
    /// Health reduced (possibly already at zero) without a new death.
    Hit,
    /// This hit killed the target.
    Killed,
}

pub trait Damageable: Collider {
    fn vitals(&self) -> &Vitals;
    fn vitals_mut(&mut self) -> &mut Vitals;

    /// Called exactly once, on the killing hit.
    fn on_death(&mut self);

    fn is_invincible(&self) -> bool {
        false
    }

    fn health(&self) -> f64 {
        self.vitals().health
    }

    fn is_dead(&self) -> bool {
        self.vitals().health <= 0.0
    }

    /// Subtract `amount` from health, clamping at zero.
    fn apply_damage(&mut self, amount: f64) -> DamageOutcome {
        debug_assert!(amount >= 0.0, "damage must not heal");
        if self.is_invincible() {
            return DamageOutcome::Blocked;
        }
        let vitals = self.vitals_mut();
        let before = vitals.health;
        vitals.health = (before - amount).max(0.0);
        if before > 0.0 && vitals.health <= 0.0 && !vitals.killed {
            vitals.killed = true;
            self.on_death();
            DamageOutcome::Killed
        } else {
            DamageOutcome::Hit
        }
    }
}

// ── Ranged attacks ────────────────────────────────────────────────────────────

/// Kill latch for one attacker/defender pairing.  Once set, the attacker's
/// projectiles no longer resolve hits against that defender.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Encounter {
    pub target_killed: bool,
}

impl Encounter {
    pub fn reset(&mut self) {
        self.target_killed = false;
    }
}

/// An actor's projectile stock: range, live projectiles, and the encounter
/// latch they share.
#[derive(Clone, Debug)]
pub struct Launcher {
    pub activation_radius: f64,
    pub projectile: ProjectileParams,
    pub projectiles: Vec<Projectile>,
    pub encounter: Encounter,
}

impl Launcher {
    pub fn new(activation_radius: f64, projectile: ProjectileParams) -> Self {
        Self {
            activation_radius,
            projectile,
            projectiles: Vec::new(),
            encounter: Encounter::default(),
        }
    }

    /// Strictly inside the activation radius.
    pub fn in_range(&self, from: Position, target: Position) -> bool {
        from.distance(target) < self.activation_radius
    }

    /// Spawn a projectile at `from` aimed at `target`'s current side.
    /// Returns whether one was thrown.
    pub fn try_throw(&mut self, from: Position, target: Position) -> bool {
        if !self.in_range(from, target) {
            return false;
        }
        let projectile = Projectile::aimed(from, target, &self.projectile);
        debug!(x = from.x, y = from.y, direction = ?projectile.direction, "projectile thrown");
        self.projectiles.push(projectile);
        true
    }

    /// Move every projectile and resolve hits against `target`, then drop
    /// the spent ones.
    ///
    /// `view_of` is re-evaluated per projectile so a kill part-way through
    /// the list stops scroll coupling for the rest.
    pub fn advance_projectiles<T, F>(&mut self, input: &FrameInput, target: &mut T, view_of: F)
    where
        T: Damageable,
        F: Fn(&T) -> ScrollView,
    {
        for projectile in &mut self.projectiles {
            let view = view_of(target);
            projectile.advance(input, view, target, &mut self.encounter);
        }
        self.projectiles.retain(|p| !p.is_spent());
    }

    pub fn live_projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter().filter(|p| !p.resolved)
    }

    pub fn reset(&mut self) {
        self.encounter.reset();
    }
}

pub trait RangedAttacker: Collider {
    fn launcher(&self) -> &Launcher;
    fn launcher_mut(&mut self) -> &mut Launcher;

    fn throw_at(&mut self, target: Position) -> bool {
        let from = self.position();
        self.launcher_mut().try_throw(from, target)
    }
}

// ── Throw cadence ─────────────────────────────────────────────────────────────

/// Frame counter gating throw attempts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThrowCooldown {
    pub frames: u32,
    pub limit: u32,
}

impl ThrowCooldown {
    pub fn new(limit: u32) -> Self {
        Self { frames: 0, limit }
    }

    /// Count one frame.  On reaching the limit the counter resets and a fair
    /// coin decides whether this tick may attempt a throw.
    pub fn tick(&mut self, rng: &mut impl Rng) -> bool {
        self.frames += 1;
        if self.frames < self.limit {
            return false;
        }
        self.frames = 0;
        rng.gen_bool(0.5)
    }
}

impl Default for ThrowCooldown {
    fn default() -> Self {
        Self::new(THROW_COOLDOWN_FRAMES)
    }
}
