use tracing::debug;

use crate::config::CoinParams;
use crate::entities::FrameInput;
use crate::geometry::{Collider, Position};
use crate::motion::{Scrollable, VerticalDrift, VerticalDrifter};
use crate::player::Player;
use crate::{impl_collider, impl_positioned};

/// Upward speed of an item after it has been picked up.
pub const COLLECT_SPEED: f64 = -10.0;

/// The body shared by coins and power-ups: scrolls with the world, floats
/// off-screen once collected, and reports the pickup exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct Collectible {
    pub position: Position,
    pub radius: f64,
    pub scroll_speed: f64,
    pub drift: VerticalDrift,
    pub collected: bool,
}

impl_positioned!(Collectible);
impl_collider!(Collectible);

impl Scrollable for Collectible {
    fn scroll_speed(&self) -> f64 {
        self.scroll_speed
    }
}

impl VerticalDrifter for Collectible {
    fn drift(&self) -> &VerticalDrift {
        &self.drift
    }
}

impl Collectible {
    pub fn new(x: f64, y: f64, radius: f64, scroll_speed: f64) -> Self {
        Self {
            position: Position::new(x, y),
            radius,
            scroll_speed,
            drift: VerticalDrift::default(),
            collected: false,
        }
    }

    /// Move one frame.  Returns true on the frame the player picks it up.
    pub fn update(&mut self, input: &FrameInput, player: &Player) -> bool {
        self.advance_with_scroll(input, player.scroll_view());
        self.advance_drift();

        if self.collected || !self.collides_with(player) {
            return false;
        }
        self.collected = true;
        self.drift.engage(COLLECT_SPEED);
        true
    }
}

// ── Coins ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub body: Collectible,
    pub value: u32,
}

impl Coin {
    pub fn new(x: f64, y: f64, params: &CoinParams) -> Self {
        Self {
            body: Collectible::new(x, y, params.radius, params.scroll_speed),
            value: params.value,
        }
    }

    /// Score earned this frame: the coin's value on pickup, doubled while
    /// double-score is active, otherwise zero.
    pub fn update(&mut self, input: &FrameInput, player: &Player) -> u32 {
        if !self.body.update(input, player) {
            return 0;
        }
        let earned = if player.double_score_active() {
            self.value.saturating_mul(2)
        } else {
            self.value
        };
        debug!(earned, "coin collected");
        earned
    }
}
