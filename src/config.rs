/// Game configuration.
///
/// The TOML file is flattened into dotted keys (`gameObjects.enemy.radius`)
/// and every value the simulation needs is resolved once, up front, into
/// `EntityParams`.  A missing or out-of-range value is fatal before any level
/// loads.

use std::collections::BTreeMap;
use std::path::Path;

use toml::{Table, Value};
use tracing::info;

use crate::error::ConfigError;

// ── Flat key lookup ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct GameProps {
    values: BTreeMap<String, Value>,
}

impl GameProps {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let table: Table = src.parse()?;
        let mut values = BTreeMap::new();
        flatten("", &table, &mut values);
        Ok(Self { values })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let props = Self::from_toml_str(&src)?;
        info!(path = %path.display(), keys = props.len(), "configuration loaded");
        Ok(props)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get(&self, key: &str) -> Result<&Value, ConfigError> {
        self.values
            .get(key)
            .ok_or_else(|| ConfigError::Missing(key.to_string()))
    }

    /// A real number.  Integers are accepted.
    pub fn f64(&self, key: &str) -> Result<f64, ConfigError> {
        match self.get(key)? {
            Value::Float(f) => Ok(*f),
            Value::Integer(i) => Ok(*i as f64),
            _ => Err(wrong_type(key, "a number")),
        }
    }

    pub fn i64(&self, key: &str) -> Result<i64, ConfigError> {
        match self.get(key)? {
            Value::Integer(i) => Ok(*i),
            _ => Err(wrong_type(key, "an integer")),
        }
    }

    pub fn u32(&self, key: &str) -> Result<u32, ConfigError> {
        u32::try_from(self.i64(key)?).map_err(|_| wrong_type(key, "a non-negative integer"))
    }

    pub fn i32(&self, key: &str) -> Result<i32, ConfigError> {
        i32::try_from(self.i64(key)?).map_err(|_| wrong_type(key, "a 32-bit integer"))
    }

    pub fn non_negative_i32(&self, key: &str) -> Result<i32, ConfigError> {
        match self.i32(key)? {
            n if n >= 0 => Ok(n),
            _ => Err(wrong_type(key, "a non-negative integer")),
        }
    }

    /// A finite number greater than zero.
    pub fn positive(&self, key: &str) -> Result<f64, ConfigError> {
        match self.f64(key)? {
            v if v.is_finite() && v > 0.0 => Ok(v),
            _ => Err(wrong_type(key, "a positive number")),
        }
    }

    /// A finite number, zero or greater.
    pub fn non_negative(&self, key: &str) -> Result<f64, ConfigError> {
        match self.f64(key)? {
            v if v.is_finite() && v >= 0.0 => Ok(v),
            _ => Err(wrong_type(key, "a non-negative number")),
        }
    }
}

fn wrong_type(key: &str, expected: &'static str) -> ConfigError {
    ConfigError::WrongType {
        key: key.to_string(),
        expected,
    }
}

fn flatten(prefix: &str, table: &Table, out: &mut BTreeMap<String, Value>) {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            Value::Table(inner) => flatten(&key, inner, out),
            other => {
                out.insert(key, other.clone());
            }
        }
    }
}

// ── Typed parameters ──────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatrolParams {
    pub speed: f64,
    pub max_displacement: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerParams {
    pub radius: f64,
    pub health: f64,
    pub activation_radius: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundParams {
    pub scroll_speed: f64,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyParams {
    pub radius: f64,
    pub scroll_speed: f64,
    pub patrol: PatrolParams,
    pub damage: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoinParams {
    pub radius: f64,
    pub scroll_speed: f64,
    pub value: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerParams {
    pub radius: f64,
    pub scroll_speed: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerUpParams {
    pub radius: f64,
    pub scroll_speed: f64,
    /// Frames the effect lasts once picked up.
    pub duration: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BossParams {
    pub radius: f64,
    pub scroll_speed: f64,
    pub health: f64,
    pub activation_radius: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileParams {
    pub radius: f64,
    pub speed: f64,
    pub damage: f64,
    /// World scroll speed; projectiles track the ground.
    pub scroll_speed: f64,
    /// Flight distance after which a projectile is dropped.
    pub range: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlyingPlatformParams {
    pub scroll_speed: f64,
    pub patrol: PatrolParams,
    pub half_length: f64,
    pub half_height: f64,
}

/// Every per-type parameter the simulation reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityParams {
    pub window_width: f64,
    pub window_height: f64,
    pub player: PlayerParams,
    pub platform: GroundParams,
    pub enemy: EnemyParams,
    pub coin: CoinParams,
    pub end_flag: MarkerParams,
    pub double_score: PowerUpParams,
    pub invincible_power: PowerUpParams,
    pub boss: BossParams,
    pub fireball: ProjectileParams,
    pub flying_platform: FlyingPlatformParams,
}

impl EntityParams {
    /// Resolve and range-check every parameter.  Sizes and health must be
    /// positive; speeds, damage, ranges and durations must not be negative.
    pub fn from_props(props: &GameProps) -> Result<Self, ConfigError> {
        let window_width = props.positive("windowWidth")?;
        let platform = GroundParams {
            scroll_speed: props.non_negative("gameObjects.platform.speed")?,
            width: props.positive("gameObjects.platform.width")?,
        };

        Ok(Self {
            window_width,
            window_height: props.positive("windowHeight")?,
            player: PlayerParams {
                radius: props.positive("gameObjects.player.radius")?,
                health: props.positive("gameObjects.player.health")?,
                activation_radius: props.non_negative("gameObjects.player.activationRadius")?,
            },
            platform,
            enemy: EnemyParams {
                radius: props.positive("gameObjects.enemy.radius")?,
                scroll_speed: props.non_negative("gameObjects.enemy.speed")?,
                patrol: patrol(props, "gameObjects.enemy")?,
                damage: props.non_negative("gameObjects.enemy.damageSize")?,
            },
            coin: CoinParams {
                radius: props.positive("gameObjects.coin.radius")?,
                scroll_speed: props.non_negative("gameObjects.coin.speed")?,
                value: props.u32("gameObjects.coin.value")?,
            },
            end_flag: MarkerParams {
                radius: props.positive("gameObjects.endFlag.radius")?,
                scroll_speed: props.non_negative("gameObjects.endFlag.speed")?,
            },
            double_score: power_up(props, "gameObjects.doubleScore")?,
            invincible_power: power_up(props, "gameObjects.invinciblePower")?,
            boss: BossParams {
                radius: props.positive("gameObjects.enemyBoss.radius")?,
                scroll_speed: props.non_negative("gameObjects.enemyBoss.speed")?,
                health: props.positive("gameObjects.enemyBoss.health")?,
                activation_radius: props.non_negative("gameObjects.enemyBoss.activationRadius")?,
            },
            fireball: ProjectileParams {
                radius: props.positive("gameObjects.fireball.radius")?,
                speed: props.non_negative("gameObjects.fireball.speed")?,
                damage: props.non_negative("gameObjects.fireball.damageSize")?,
                scroll_speed: platform.scroll_speed,
                range: window_width,
            },
            flying_platform: FlyingPlatformParams {
                scroll_speed: props.non_negative("gameObjects.flyingPlatform.speed")?,
                patrol: patrol(props, "gameObjects.flyingPlatform")?,
                half_length: props.positive("gameObjects.flyingPlatform.halfLength")?,
                half_height: props.positive("gameObjects.flyingPlatform.halfHeight")?,
            },
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_props(&GameProps::load(path)?)
    }
}

fn patrol(props: &GameProps, section: &str) -> Result<PatrolParams, ConfigError> {
    Ok(PatrolParams {
        speed: props.non_negative(&format!("{section}.randomSpeed"))?,
        max_displacement: props.non_negative(&format!("{section}.maxRandomDisplacementX"))?,
    })
}

fn power_up(props: &GameProps, section: &str) -> Result<PowerUpParams, ConfigError> {
    Ok(PowerUpParams {
        radius: props.positive(&format!("{section}.radius"))?,
        scroll_speed: props.non_negative(&format!("{section}.speed"))?,
        duration: props.non_negative_i32(&format!("{section}.maxFrames"))?,
    })
}
