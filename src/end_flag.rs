use crate::config::MarkerParams;
use crate::entities::FrameInput;
use crate::geometry::{Collider, Position};
use crate::motion::Scrollable;
use crate::player::Player;
use crate::{impl_collider, impl_positioned};

/// The goal marker.  `collided` latches on first contact; the level may
/// clear it again while a boss still stands.
#[derive(Clone, Debug, PartialEq)]
pub struct EndFlag {
    pub position: Position,
    pub radius: f64,
    pub scroll_speed: f64,
    pub collided: bool,
}

impl_positioned!(EndFlag);
impl_collider!(EndFlag);

impl Scrollable for EndFlag {
    fn scroll_speed(&self) -> f64 {
        self.scroll_speed
    }
}

impl EndFlag {
    pub fn new(x: f64, y: f64, params: &MarkerParams) -> Self {
        Self {
            position: Position::new(x, y),
            radius: params.radius,
            scroll_speed: params.scroll_speed,
            collided: false,
        }
    }

    pub fn update(&mut self, input: &FrameInput, player: &Player) {
        self.advance_with_scroll(input, player.scroll_view());
        if self.collides_with(player) {
            self.collided = true;
        }
    }

    pub fn reset_collision(&mut self) {
        self.collided = false;
    }
}
