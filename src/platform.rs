/// The ground, which also fixes the world's scroll limits, and the
/// patrolling platforms the player can ride.

use crate::combat::Damageable;
use crate::config::{FlyingPlatformParams, GroundParams};
use crate::entities::FrameInput;
use crate::geometry::Position;
use crate::impl_positioned;
use crate::motion::{Patrol, PatrolMover, Scrollable};
use crate::player::Player;

/// Narrowest landing band, in pixels, for a player moving slower than that.
pub const MIN_LANDING_BAND: f64 = 1.0;

// ── Ground ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct GroundPlatform {
    pub position: Position,
    pub scroll_speed: f64,
    /// Ground x at which the world's left edge reaches the viewport.
    pub left_border: f64,
    /// Ground x at which the world's right edge reaches the viewport.
    pub right_border: f64,
}

impl_positioned!(GroundPlatform);

impl Scrollable for GroundPlatform {
    fn scroll_speed(&self) -> f64 {
        self.scroll_speed
    }
}

impl GroundPlatform {
    pub fn new(x: f64, y: f64, params: &GroundParams, viewport_width: f64) -> Self {
        Self {
            position: Position::new(x, y),
            scroll_speed: params.scroll_speed,
            left_border: x,
            right_border: x - params.width + viewport_width,
        }
    }

    /// Scroll, then refresh the player's border flags for the rest of the frame.
    pub fn update(&mut self, input: &FrameInput, player: &mut Player) {
        self.advance_with_scroll(input, player.scroll_view());
        self.refresh_borders(player);
    }

    pub fn refresh_borders(&self, player: &mut Player) {
        player.at_left_border = self.position.x >= self.left_border;
        player.at_right_border = self.position.x <= self.right_border;
    }
}

// ── Flying platforms ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct FlyingPlatform {
    pub position: Position,
    pub scroll_speed: f64,
    pub patrol: Patrol,
    pub half_length: f64,
    pub half_height: f64,
    /// The player is standing on this platform.
    pub carrying: bool,
}

impl_positioned!(FlyingPlatform);

impl Scrollable for FlyingPlatform {
    fn scroll_speed(&self) -> f64 {
        self.scroll_speed
    }
}

impl PatrolMover for FlyingPlatform {
    fn patrol_mut(&mut self) -> &mut Patrol {
        &mut self.patrol
    }
}

impl FlyingPlatform {
    pub fn new(x: f64, y: f64, params: &FlyingPlatformParams) -> Self {
        Self {
            position: Position::new(x, y),
            scroll_speed: params.scroll_speed,
            patrol: Patrol::new(params.patrol.speed, params.patrol.max_displacement),
            half_length: params.half_length,
            half_height: params.half_height,
            carrying: false,
        }
    }

    pub fn surface_y(&self) -> f64 {
        self.position.y - self.half_height
    }

    pub fn within_reach(&self, player: &Player) -> bool {
        (self.position.x - player.position.x).abs() < self.half_length
    }

    /// Whether the player is inside the band just above the top surface.
    /// The band is as deep as the player's vertical speed so a fast fall
    /// cannot step over it in one frame.
    pub fn within_landing_band(&self, player: &Player) -> bool {
        let gap = self.position.y - player.position.y;
        let depth = player.velocity_y.abs().max(MIN_LANDING_BAND);
        gap <= self.half_height && gap >= self.half_height - depth
    }

    pub fn update(&mut self, input: &FrameInput, player: &mut Player) {
        self.advance_with_scroll(input, player.scroll_view());
        self.advance_patrol();

        // Jumped clear of the surface: no longer riding this one.
        if self.carrying && self.position.y - player.position.y > self.half_height {
            self.carrying = false;
        }

        let vertical = self.within_landing_band(player);
        let horizontal = self.within_reach(player);

        if vertical && horizontal && !player.falling_from_platform && !player.is_dead() {
            player.land_on(self.surface_y());
            self.carrying = true;
        }

        if self.carrying && vertical && !horizontal {
            player.fall_from_platform();
            self.carrying = false;
        }
    }
}
