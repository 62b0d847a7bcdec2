/// Shared plain-data types.  No simulation logic lives here.

use std::fmt;
use std::str::FromStr;

// ── Placement tags ────────────────────────────────────────────────────────────

/// The kind of object a placement record spawns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityTag {
    Player,
    Platform,
    Enemy,
    Coin,
    EndFlag,
    DoubleScore,
    InvinciblePower,
    EnemyBoss,
    FlyingPlatform,
}

impl EntityTag {
    pub const ALL: [EntityTag; 9] = [
        EntityTag::Player,
        EntityTag::Platform,
        EntityTag::Enemy,
        EntityTag::Coin,
        EntityTag::EndFlag,
        EntityTag::DoubleScore,
        EntityTag::InvinciblePower,
        EntityTag::EnemyBoss,
        EntityTag::FlyingPlatform,
    ];

    /// The tag as written in level files.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityTag::Player => "PLAYER",
            EntityTag::Platform => "PLATFORM",
            EntityTag::Enemy => "ENEMY",
            EntityTag::Coin => "COIN",
            EntityTag::EndFlag => "END_FLAG",
            EntityTag::DoubleScore => "DOUBLE_SCORE",
            EntityTag::InvinciblePower => "INVINCIBLE_POWER",
            EntityTag::EnemyBoss => "ENEMY_BOSS",
            EntityTag::FlyingPlatform => "FLYING_PLATFORM",
        }
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityTag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or(())
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// One frame of player input, as sampled by the driver.
///
/// Directions are *held* state; jump and attack are edge-triggered and are
/// only true on the frame the key went down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left_held: bool,
    pub right_held: bool,
    pub jump_pressed: bool,
    pub attack_pressed: bool,
}

impl FrameInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn holding_left() -> Self {
        Self {
            left_held: true,
            ..Self::default()
        }
    }

    pub fn holding_right() -> Self {
        Self {
            right_held: true,
            ..Self::default()
        }
    }

    pub fn jump() -> Self {
        Self {
            jump_pressed: true,
            ..Self::default()
        }
    }

    pub fn attack() -> Self {
        Self {
            attack_pressed: true,
            ..Self::default()
        }
    }
}

// ── Direction & status ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// +1 for right, −1 for left.
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
    Won,
}
