pub mod boss;
pub mod collectible;
pub mod combat;
pub mod config;
pub mod end_flag;
pub mod enemy;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod level;
pub mod motion;
pub mod placement;
pub mod platform;
pub mod player;
pub mod power_up;
pub mod projectile;
