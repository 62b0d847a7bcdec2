use side_scroller::config::{EntityParams, GameProps};
use side_scroller::enemy::Enemy;
use side_scroller::entities::FrameInput;
use side_scroller::motion::*;

fn params() -> EntityParams {
    let props = GameProps::from_toml_str(include_str!("../res/app.toml")).unwrap();
    EntityParams::from_props(&props).unwrap()
}

fn alive() -> ScrollView {
    ScrollView {
        player_alive: true,
        at_left_border: false,
        at_right_border: false,
    }
}

// ── Scroll coupling ───────────────────────────────────────────────────────────

#[test]
fn holding_right_slides_world_left() {
    assert_eq!(alive().offset(&FrameInput::holding_right(), 5.0), -5.0);
}

#[test]
fn holding_left_slides_world_right() {
    assert_eq!(alive().offset(&FrameInput::holding_left(), 5.0), 5.0);
}

#[test]
fn idle_input_does_not_scroll() {
    assert_eq!(alive().offset(&FrameInput::idle(), 5.0), 0.0);
}

#[test]
fn dead_player_freezes_scroll() {
    let view = ScrollView {
        player_alive: false,
        ..alive()
    };
    assert_eq!(view.offset(&FrameInput::holding_right(), 5.0), 0.0);
    assert_eq!(view.offset(&FrameInput::holding_left(), 5.0), 0.0);
}

#[test]
fn border_blocks_its_direction_only() {
    let view = ScrollView {
        at_right_border: true,
        ..alive()
    };
    assert_eq!(view.offset(&FrameInput::holding_right(), 5.0), 0.0);
    assert_eq!(view.offset(&FrameInput::holding_left(), 5.0), 5.0);
}

#[test]
fn blocked_right_falls_through_to_held_left() {
    let view = ScrollView {
        at_right_border: true,
        ..alive()
    };
    let both = FrameInput {
        left_held: true,
        right_held: true,
        ..FrameInput::idle()
    };
    assert_eq!(view.offset(&both, 5.0), 5.0);
}

#[test]
fn right_wins_when_both_held_and_unblocked() {
    let both = FrameInput {
        left_held: true,
        right_held: true,
        ..FrameInput::idle()
    };
    assert_eq!(alive().offset(&both, 5.0), -5.0);
}

// ── Patrol ────────────────────────────────────────────────────────────────────

#[test]
fn patrol_flips_after_reaching_limit() {
    let mut patrol = Patrol::new(1.0, 3.0);
    assert_eq!(patrol.step(), 1.0);
    assert_eq!(patrol.step(), 1.0);
    assert_eq!(patrol.step(), 1.0);
    assert_eq!(patrol.displacement, 3.0);
    // Starts this frame at the limit → reverses
    assert_eq!(patrol.step(), -1.0);
    assert_eq!(patrol.displacement, 2.0);
}

#[test]
fn patrol_flips_exactly_when_limit_first_reached() {
    for (speed, max) in [(1.0, 3.0), (2.0, 5.0), (0.5, 4.0), (3.0, 10.0)] {
        let mut patrol = Patrol::new(speed, max);
        for _ in 0..500 {
            let before = patrol.displacement;
            let old_speed = patrol.speed;
            patrol.step();
            let flipped = patrol.speed != old_speed;
            assert_eq!(flipped, before.abs() >= max, "speed {speed} max {max}");
            assert!(patrol.displacement.abs() < max + speed);
        }
    }
}

#[test]
fn patrol_mover_shifts_position() {
    let mut enemy = Enemy::new(200.0, 300.0, &params().enemy);
    enemy.advance_patrol();
    enemy.advance_patrol();
    assert_eq!(enemy.position.x, 202.0);
    assert_eq!(enemy.position.y, 300.0);
}

// ── Vertical drift ────────────────────────────────────────────────────────────

#[test]
fn drift_is_idle_until_engaged() {
    let mut drift = VerticalDrift::default();
    assert!(!drift.is_engaged());
    drift.engage(-10.0);
    assert!(drift.is_engaged());
    assert_eq!(drift.speed, -10.0);
}
