use std::io::Write;
use std::path::Path;

use side_scroller::config::*;
use side_scroller::error::ConfigError;

use tempfile::NamedTempFile;

const BUNDLED: &str = include_str!("../res/app.toml");

fn props() -> GameProps {
    GameProps::from_toml_str(BUNDLED).unwrap()
}

// ── Flat key lookup ───────────────────────────────────────────────────────────

#[test]
fn nested_tables_flatten_to_dotted_keys() {
    let props = props();
    assert!(props.contains("windowWidth"));
    assert!(props.contains("gameObjects.enemy.damageSize"));
    assert!(!props.contains("gameObjects.enemy"));
    assert!(!props.is_empty());
}

#[test]
fn integers_read_as_reals() {
    let props = props();
    assert_eq!(props.f64("gameObjects.player.radius").unwrap(), 40.0);
    assert_eq!(props.f64("gameObjects.enemy.damageSize").unwrap(), 0.3);
    assert_eq!(props.i64("gameObjects.coin.value").unwrap(), 10);
}

#[test]
fn reals_do_not_read_as_integers() {
    let err = props().i64("gameObjects.player.health").unwrap_err();
    assert!(matches!(err, ConfigError::WrongType { .. }), "{err}");
}

#[test]
fn string_where_number_expected_is_wrong_type() {
    let props = GameProps::from_toml_str("[gameObjects.coin]\nradius = \"big\"").unwrap();
    let err = props.f64("gameObjects.coin.radius").unwrap_err();
    match err {
        ConfigError::WrongType { key, .. } => assert_eq!(key, "gameObjects.coin.radius"),
        other => panic!("unexpected {other}"),
    }
}

#[test]
fn negative_count_is_wrong_type() {
    let props = GameProps::from_toml_str("[gameObjects.coin]\nvalue = -3").unwrap();
    assert!(matches!(
        props.u32("gameObjects.coin.value"),
        Err(ConfigError::WrongType { .. })
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = GameProps::from_toml_str("windowWidth = = 3").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

// ── Typed parameters ──────────────────────────────────────────────────────────

#[test]
fn bundled_config_resolves_every_parameter() {
    let params = EntityParams::from_props(&props()).unwrap();
    assert_eq!(params.window_width, 1024.0);
    assert_eq!(params.window_height, 768.0);
    assert_eq!(params.player.activation_radius, 500.0);
    assert_eq!(params.enemy.patrol.speed, 1.0);
    assert_eq!(params.enemy.patrol.max_displacement, 50.0);
    assert_eq!(params.coin.value, 10);
    assert_eq!(params.double_score.duration, 500);
    assert_eq!(params.boss.radius, 70.0);
    assert_eq!(params.flying_platform.half_height, 20.0);
}

#[test]
fn projectiles_scroll_with_the_ground() {
    let params = EntityParams::from_props(&props()).unwrap();
    assert_eq!(params.fireball.scroll_speed, params.platform.scroll_speed);
    assert_eq!(params.fireball.damage, 0.5);
}

#[test]
fn missing_key_is_named() {
    let trimmed: String = BUNDLED
        .lines()
        .filter(|line| !line.starts_with("value"))
        .map(|line| format!("{line}\n"))
        .collect();
    let props = GameProps::from_toml_str(&trimmed).unwrap();
    let err = EntityParams::from_props(&props).unwrap_err();
    match err {
        ConfigError::Missing(key) => assert_eq!(key, "gameObjects.coin.value"),
        other => panic!("unexpected {other}"),
    }
}

/// The bundled config with one key in one section replaced.
fn with_value(section: &str, key: &str, value: &str) -> String {
    let mut current = String::new();
    let mut out = String::new();
    for line in BUNDLED.lines() {
        if line.starts_with('[') {
            current = line.trim_matches(|c| c == '[' || c == ']').to_string();
        }
        if current == section && line.starts_with(&format!("{key} ")) {
            out.push_str(&format!("{key} = {value}\n"));
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

fn rejected_key(section: &str, key: &str, value: &str) -> String {
    let props = GameProps::from_toml_str(&with_value(section, key, value)).unwrap();
    match EntityParams::from_props(&props) {
        Err(ConfigError::WrongType { key, .. }) => key,
        other => panic!("{section}.{key} = {value} accepted: {other:?}"),
    }
}

#[test]
fn non_positive_health_is_rejected() {
    for value in ["0", "0.0", "-1.0"] {
        assert_eq!(
            rejected_key("gameObjects.player", "health", value),
            "gameObjects.player.health"
        );
    }
    assert_eq!(
        rejected_key("gameObjects.enemyBoss", "health", "0"),
        "gameObjects.enemyBoss.health"
    );
}

#[test]
fn negative_damage_is_rejected() {
    assert_eq!(
        rejected_key("gameObjects.enemy", "damageSize", "-0.3"),
        "gameObjects.enemy.damageSize"
    );
    assert_eq!(
        rejected_key("gameObjects.fireball", "damageSize", "-1"),
        "gameObjects.fireball.damageSize"
    );
}

#[test]
fn out_of_range_sizes_and_speeds_are_rejected() {
    assert_eq!(
        rejected_key("gameObjects.coin", "radius", "0"),
        "gameObjects.coin.radius"
    );
    assert_eq!(
        rejected_key("gameObjects.platform", "speed", "-5"),
        "gameObjects.platform.speed"
    );
    assert_eq!(
        rejected_key("gameObjects.doubleScore", "maxFrames", "-1"),
        "gameObjects.doubleScore.maxFrames"
    );
    assert_eq!(
        rejected_key("gameObjects.flyingPlatform", "halfHeight", "nan"),
        "gameObjects.flyingPlatform.halfHeight"
    );
}

#[test]
fn zero_damage_and_speed_are_allowed() {
    let src = with_value("gameObjects.enemy", "damageSize", "0");
    let props = GameProps::from_toml_str(&src).unwrap();
    assert_eq!(EntityParams::from_props(&props).unwrap().enemy.damage, 0.0);
}

#[test]
fn projectile_range_is_one_window_width() {
    let params = EntityParams::from_props(&props()).unwrap();
    assert_eq!(params.fireball.range, params.window_width);
}

// ── Files ─────────────────────────────────────────────────────────────────────

#[test]
fn loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(BUNDLED.as_bytes()).unwrap();
    let params = EntityParams::load(file.path()).unwrap();
    assert_eq!(params, EntityParams::from_props(&props()).unwrap());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = GameProps::load(Path::new("/nonexistent/app.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/app.toml"));
}
