use tracing::{debug, info};

use crate::combat::{DamageOutcome, Damageable, Encounter};
use crate::config::ProjectileParams;
use crate::entities::{Direction, FrameInput};
use crate::geometry::Position;
use crate::motion::{ScrollView, Scrollable};
use crate::{impl_collider, impl_positioned};

/// A thrown fireball.  Flies in a fixed direction and resolves at most one
/// hit; once resolved it keeps moving but is no longer live.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub position: Position,
    pub radius: f64,
    pub direction: Direction,
    pub speed: f64,
    pub scroll_speed: f64,
    pub damage: f64,
    pub range: f64,
    /// Distance flown under its own speed, scrolling aside.
    pub travelled: f64,
    pub resolved: bool,
}

impl_positioned!(Projectile);
impl_collider!(Projectile);

impl Scrollable for Projectile {
    fn scroll_speed(&self) -> f64 {
        self.scroll_speed
    }
}

impl Projectile {
    /// Spawn at `from`, heading toward the side `target` is on right now.
    /// A target directly above or below counts as the right side.
    pub fn aimed(from: Position, target: Position, params: &ProjectileParams) -> Self {
        let direction = if from.x <= target.x {
            Direction::Right
        } else {
            Direction::Left
        };
        Self {
            position: from,
            radius: params.radius,
            direction,
            speed: params.speed,
            scroll_speed: params.scroll_speed,
            damage: params.damage,
            range: params.range,
            travelled: 0.0,
            resolved: false,
        }
    }

    pub fn is_live(&self) -> bool {
        !self.resolved
    }

    /// Resolved, or flown past its range without hitting anything.
    pub fn is_spent(&self) -> bool {
        self.resolved || self.travelled > self.range
    }

    /// Fly one frame, then try to resolve a hit on `target`.
    ///
    /// The projectile is consumed on contact even if the target is
    /// invincible; only the damage is blocked.
    pub fn advance<T: Damageable>(
        &mut self,
        input: &FrameInput,
        view: ScrollView,
        target: &mut T,
        encounter: &mut Encounter,
    ) -> Option<DamageOutcome> {
        self.position.x += self.direction.sign() * self.speed;
        self.travelled += self.speed;
        self.advance_with_scroll(input, view);

        if self.resolved || encounter.target_killed || !target.collides_with(&*self) {
            return None;
        }
        self.resolved = true;
        let outcome = target.apply_damage(self.damage);
        debug!(?outcome, health = target.health(), "projectile hit");
        if target.health() <= 0.0 {
            encounter.target_killed = true;
            info!("projectile finished its target");
        }
        Some(outcome)
    }
}
