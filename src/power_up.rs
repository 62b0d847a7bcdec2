/// Timed pickups.  Each kind is a plain tag; `apply_effect` is the single
/// place that knows what a kind does to the player.

use tracing::debug;

use crate::collectible::Collectible;
use crate::config::PowerUpParams;
use crate::entities::FrameInput;
use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    DoubleScore,
    Invincibility,
}

/// Start (or restart) the effect.  Timers are overwritten, never summed.
pub fn apply_effect(kind: PowerUpKind, player: &mut Player, duration: i32) {
    match kind {
        PowerUpKind::DoubleScore => {
            player.double_score_timer = duration;
            player.active_double_scores += 1;
        }
        PowerUpKind::Invincibility => {
            player.invincibility_timer = duration;
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub body: Collectible,
    pub kind: PowerUpKind,
    pub duration: i32,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, x: f64, y: f64, params: &PowerUpParams) -> Self {
        Self {
            body: Collectible::new(x, y, params.radius, params.scroll_speed),
            kind,
            duration: params.duration,
        }
    }

    /// Returns true on the frame the effect was applied.
    pub fn update(&mut self, input: &FrameInput, player: &mut Player) -> bool {
        if !self.body.update(input, player) {
            return false;
        }
        apply_effect(self.kind, player, self.duration);
        debug!(kind = ?self.kind, duration = self.duration, "power-up collected");
        true
    }
}
