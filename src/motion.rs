/// Movement shared by world objects: scroll coupling, patrol bounce and
/// vertical drift.
///
/// The player never moves horizontally.  Holding a direction instead slides
/// every other object the opposite way, so the view stays centred on the
/// player while the world scrolls underneath.

use crate::entities::FrameInput;
use crate::geometry::Positioned;

// ── Scroll coupling ───────────────────────────────────────────────────────────

/// The slice of player state that decides whether and which way the world
/// scrolls this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollView {
    pub player_alive: bool,
    pub at_left_border: bool,
    pub at_right_border: bool,
}

impl ScrollView {
    /// Horizontal offset for an object scrolling at `speed`.
    ///
    /// Right takes priority; if right is held but blocked by the border, a
    /// held left is still honoured.
    pub fn offset(&self, input: &FrameInput, speed: f64) -> f64 {
        if !self.player_alive {
            return 0.0;
        }
        if input.right_held && !self.at_right_border {
            -speed
        } else if input.left_held && !self.at_left_border {
            speed
        } else {
            0.0
        }
    }
}

pub trait Scrollable: Positioned {
    fn scroll_speed(&self) -> f64;

    fn advance_with_scroll(&mut self, input: &FrameInput, view: ScrollView) {
        let dx = view.offset(input, self.scroll_speed());
        self.position_mut().x += dx;
    }
}

// ── Patrol (horizontal bounce) ────────────────────────────────────────────────

/// Back-and-forth motion bounded by a net displacement around the spawn point.
#[derive(Clone, Debug, PartialEq)]
pub struct Patrol {
    pub speed: f64,
    pub displacement: f64,
    pub max_displacement: f64,
}

impl Patrol {
    pub fn new(speed: f64, max_displacement: f64) -> Self {
        Self {
            speed,
            displacement: 0.0,
            max_displacement,
        }
    }

    fn at_limit(&self) -> bool {
        self.displacement >= self.max_displacement || self.displacement <= -self.max_displacement
    }

    /// Advance one frame and return the signed horizontal step to apply.
    /// Direction flips on the first frame that starts at or past a limit.
    pub fn step(&mut self) -> f64 {
        if self.at_limit() {
            self.speed = -self.speed;
        }
        self.displacement += self.speed;
        self.speed
    }
}

pub trait PatrolMover: Positioned {
    fn patrol_mut(&mut self) -> &mut Patrol;

    fn advance_patrol(&mut self) {
        let dx = self.patrol_mut().step();
        self.position_mut().x += dx;
    }
}

// ── Vertical drift ────────────────────────────────────────────────────────────

/// Constant vertical velocity, zero until engaged.  Never capped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VerticalDrift {
    pub speed: f64,
}

impl VerticalDrift {
    pub fn engage(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn is_engaged(&self) -> bool {
        self.speed != 0.0
    }
}

pub trait VerticalDrifter: Positioned {
    fn drift(&self) -> &VerticalDrift;

    fn advance_drift(&mut self) {
        let dy = self.drift().speed;
        self.position_mut().y += dy;
    }
}
