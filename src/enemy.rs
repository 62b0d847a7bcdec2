use tracing::debug;

use crate::combat::{DamageOutcome, Damageable};
use crate::config::EnemyParams;
use crate::entities::FrameInput;
use crate::geometry::{Collider, Position};
use crate::motion::{Patrol, PatrolMover, Scrollable};
use crate::player::Player;
use crate::{impl_collider, impl_positioned};

/// A patrolling hazard.  Damages the player on contact, once per enemy.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub position: Position,
    pub radius: f64,
    pub scroll_speed: f64,
    pub patrol: Patrol,
    pub damage: f64,
    pub hit_player: bool,
}

impl_positioned!(Enemy);
impl_collider!(Enemy);

impl Scrollable for Enemy {
    fn scroll_speed(&self) -> f64 {
        self.scroll_speed
    }
}

impl PatrolMover for Enemy {
    fn patrol_mut(&mut self) -> &mut Patrol {
        &mut self.patrol
    }
}

impl Enemy {
    pub fn new(x: f64, y: f64, params: &EnemyParams) -> Self {
        Self {
            position: Position::new(x, y),
            radius: params.radius,
            scroll_speed: params.scroll_speed,
            patrol: Patrol::new(params.patrol.speed, params.patrol.max_displacement),
            damage: params.damage,
            hit_player: false,
        }
    }

    /// Move one frame and apply contact damage.  Touching an invincible
    /// player does not use up the enemy's hit.
    pub fn update(&mut self, input: &FrameInput, player: &mut Player) -> Option<DamageOutcome> {
        self.advance_with_scroll(input, player.scroll_view());
        self.advance_patrol();

        if self.hit_player || player.is_invincible() || !self.collides_with(&*player) {
            return None;
        }
        self.hit_player = true;
        let outcome = player.apply_damage(self.damage);
        debug!(?outcome, health = player.health(), "enemy contact");
        Some(outcome)
    }
}
