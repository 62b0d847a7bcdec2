use rand::Rng;
use tracing::info;

use crate::combat::{Damageable, Launcher, RangedAttacker, ThrowCooldown, Vitals, FALL_SPEED};
use crate::config::{BossParams, ProjectileParams};
use crate::entities::FrameInput;
use crate::geometry::Position;
use crate::motion::Scrollable;
use crate::player::Player;
use crate::{impl_collider, impl_positioned};

/// The end-of-level boss.  Stationary apart from scrolling; every cooldown
/// period it flips a coin and, on heads, throws at the player if in range.
#[derive(Clone, Debug)]
pub struct Boss {
    pub position: Position,
    pub radius: f64,
    pub scroll_speed: f64,
    pub vitals: Vitals,
    pub velocity_y: f64,
    pub cooldown: ThrowCooldown,
    pub launcher: Launcher,
}

impl_positioned!(Boss);
impl_collider!(Boss);

impl Scrollable for Boss {
    fn scroll_speed(&self) -> f64 {
        self.scroll_speed
    }
}

impl Boss {
    pub fn new(x: f64, y: f64, params: &BossParams, fireball: ProjectileParams) -> Self {
        Self {
            position: Position::new(x, y),
            radius: params.radius,
            scroll_speed: params.scroll_speed,
            vitals: Vitals::new(params.health),
            velocity_y: 0.0,
            cooldown: ThrowCooldown::default(),
            launcher: Launcher::new(params.activation_radius, fireball),
        }
    }

    pub fn update(&mut self, input: &FrameInput, player: &mut Player, rng: &mut impl Rng) {
        self.advance_with_scroll(input, player.scroll_view());
        self.position.y += self.velocity_y;

        let ready = self.cooldown.tick(rng);
        self.launcher
            .advance_projectiles(input, player, Player::scroll_view);
        if ready && !self.is_dead() {
            self.throw_at(player.position);
        }
    }
}

impl Damageable for Boss {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn on_death(&mut self) {
        info!(x = self.position.x, y = self.position.y, "boss defeated");
        self.velocity_y = FALL_SPEED;
    }
}

impl RangedAttacker for Boss {
    fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    fn launcher_mut(&mut self) -> &mut Launcher {
        &mut self.launcher
    }
}
