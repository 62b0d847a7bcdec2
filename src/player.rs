/// The player: jump arc, power-up timers, platform riding and death fall.
///
/// The player's x never changes; horizontal input scrolls the rest of the
/// world instead (see `motion`).  Border flags are written each frame by the
/// ground platform and read back through `scroll_view`.

use tracing::info;

use crate::boss::Boss;
use crate::combat::{Damageable, Launcher, RangedAttacker, Vitals, FALL_SPEED};
use crate::config::{PlayerParams, ProjectileParams};
use crate::entities::FrameInput;
use crate::geometry::Position;
use crate::motion::ScrollView;
use crate::{impl_collider, impl_positioned};

/// Vertical velocity at the start of a jump (upward is negative).
pub const JUMP_SPEED: f64 = -20.0;

/// Added to vertical velocity every airborne frame.
pub const GRAVITY: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Grounded,
    Jumping,
    Dying,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub position: Position,
    pub radius: f64,
    pub vitals: Vitals,
    /// Ground level; `baseline_y` falls back here after leaving a platform.
    pub initial_y: f64,
    /// The surface currently stood on.
    pub baseline_y: f64,
    pub velocity_y: f64,
    /// Active while positive.  Allowed to run negative.
    pub invincibility_timer: i32,
    /// Active while positive.
    pub double_score_timer: i32,
    /// Double-score pickups collected since the timer last ran out.
    pub active_double_scores: u32,
    pub falling_from_platform: bool,
    pub at_left_border: bool,
    pub at_right_border: bool,
    pub launcher: Launcher,
}

impl_positioned!(Player);
impl_collider!(Player);

impl Player {
    pub fn new(x: f64, y: f64, params: &PlayerParams, fireball: ProjectileParams) -> Self {
        Self {
            position: Position::new(x, y),
            radius: params.radius,
            vitals: Vitals::new(params.health),
            initial_y: y,
            baseline_y: y,
            velocity_y: 0.0,
            invincibility_timer: 0,
            double_score_timer: 0,
            active_double_scores: 0,
            falling_from_platform: false,
            at_left_border: false,
            at_right_border: false,
            launcher: Launcher::new(params.activation_radius, fireball),
        }
    }

    pub fn state(&self) -> PlayerState {
        if self.is_dead() {
            PlayerState::Dying
        } else if self.position.y == self.baseline_y && self.velocity_y == 0.0 {
            PlayerState::Grounded
        } else {
            PlayerState::Jumping
        }
    }

    pub fn scroll_view(&self) -> ScrollView {
        ScrollView {
            player_alive: !self.is_dead(),
            at_left_border: self.at_left_border,
            at_right_border: self.at_right_border,
        }
    }

    pub fn is_invincibility_active(&self) -> bool {
        self.invincibility_timer > 0
    }

    pub fn double_score_active(&self) -> bool {
        self.double_score_timer > 0
    }

    /// Dead and fallen past the bottom of the viewport.
    pub fn concluded_death_fall(&self, viewport_height: f64) -> bool {
        self.is_dead() && self.position.y > viewport_height
    }

    // ── Per-frame update ─────────────────────────────────────────────────────

    /// Advance the player one frame.  Projectiles only exist while a boss is
    /// present; they fly at it and are thrown on a fresh attack press.
    pub fn update(&mut self, input: &FrameInput, boss: Option<&mut Boss>) {
        if self.is_dead() {
            self.position.y += self.velocity_y;
        } else {
            self.advance_jump(input);
        }
        self.tick_timers();

        if let Some(boss) = boss {
            let view = self.scroll_view();
            self.launcher
                .advance_projectiles(input, boss, move |_: &Boss| view);
            if input.attack_pressed && !self.is_dead() {
                self.throw_at(boss.position);
            }
        }
    }

    /// Jump arc and gravity toward the current baseline.
    pub fn advance_jump(&mut self, input: &FrameInput) {
        if input.jump_pressed && self.position.y == self.baseline_y {
            self.velocity_y = JUMP_SPEED;
        }
        if self.position.y < self.baseline_y {
            self.velocity_y += GRAVITY;
        }
        // Never step through the surface.
        if self.position.y + self.velocity_y > self.baseline_y {
            self.position.y = self.baseline_y;
            self.falling_from_platform = false;
        }
        if self.velocity_y > 0.0 && self.position.y >= self.baseline_y {
            self.velocity_y = 0.0;
            self.position.y = self.baseline_y;
            self.falling_from_platform = false;
        }
        self.position.y += self.velocity_y;
    }

    pub fn tick_timers(&mut self) {
        self.invincibility_timer = self.invincibility_timer.saturating_sub(1);
        if self.double_score_active() {
            self.double_score_timer -= 1;
            if self.double_score_timer <= 0 {
                self.active_double_scores = 0;
            }
        }
    }

    // ── Platform riding ──────────────────────────────────────────────────────

    /// Stand on a surface at `surface_y`.
    pub fn land_on(&mut self, surface_y: f64) {
        self.baseline_y = surface_y;
        self.position.y = surface_y;
    }

    /// Walked off a platform: drop back toward the ground and ignore other
    /// platforms until grounded.
    pub fn fall_from_platform(&mut self) {
        self.falling_from_platform = true;
        self.baseline_y = self.initial_y;
    }
}

impl Damageable for Player {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn on_death(&mut self) {
        info!(x = self.position.x, y = self.position.y, "player died");
        self.velocity_y = FALL_SPEED;
    }

    fn is_invincible(&self) -> bool {
        self.is_invincibility_active()
    }
}

impl RangedAttacker for Player {
    fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    fn launcher_mut(&mut self) -> &mut Launcher {
        &mut self.launcher
    }
}
