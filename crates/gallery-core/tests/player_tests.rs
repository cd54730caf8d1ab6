// Host-side tests for movement integration and corridor bounds.

use gallery_core::*;
use glam::Vec3;
use rand::prelude::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn controller_at(spawn: Vec3) -> PlayerController {
    PlayerController::new(PlayerParams::default(), spawn)
}

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < 1e-4
}

#[test]
fn diagonal_walk_matches_closed_form() {
    let start = Vec3::new(0.0, 0.0, -2.0);
    let dir = Vec3::new(1.0, 0.0, -1.0).normalize();
    let bounds = CorridorBounds::default();
    for n in [1usize, 10, 30, 200, 2000] {
        let mut player = controller_at(start);
        for _ in 0..n {
            player.tick(Vec3::new(1.0, 0.0, -1.0), false, FRAME);
        }
        let expected = bounds.clamp(start + dir * PLAYER_SPEED * n as f32);
        assert!(
            (player.position() - expected).abs().max_element() < 1e-3,
            "after {n} ticks: got {:?}, expected {:?}",
            player.position(),
            expected
        );
    }
}

#[test]
fn clamping_is_per_axis() {
    let mut player = controller_at(Vec3::new(7.0, 0.0, -50.0));
    for _ in 0..10 {
        player.tick(Vec3::new(1.0, 0.0, -1.0), false, FRAME);
    }
    let p = player.position();
    assert_eq!(p.x, BOUND_X);
    // z keeps its diagonal share of the speed, it is not rescaled after x hits the wall
    let dz = PLAYER_SPEED * std::f32::consts::FRAC_1_SQRT_2 * 10.0;
    assert!((p.z - (-50.0 - dz)).abs() < 1e-4);
}

#[test]
fn random_walks_stay_inside_corridor() {
    let mut rng = StdRng::seed_from_u64(7);
    let bounds = CorridorBounds::default();
    for _ in 0..20 {
        let mut player = controller_at(Vec3::ZERO);
        let mut keys = MoveKeys::default();
        for _ in 0..3000 {
            if rng.gen::<f32>() < 0.05 {
                keys.forward = rng.gen();
                keys.back = rng.gen();
                keys.left = rng.gen();
                keys.right = rng.gen();
            }
            player.tick(keys.intent(), false, FRAME);
            let p = player.position();
            assert!(bounds.contains(p), "escaped corridor at {p:?}");
            assert!(p.x >= -7.2 && p.x <= 7.2 && p.z >= -115.0 && p.z <= 0.0);
        }
    }
}

#[test]
fn focus_freezes_movement_and_idles() {
    let mut player = controller_at(Vec3::new(1.0, 0.0, -10.0));
    let before = player.state();
    for _ in 0..50 {
        let pose = player.tick(Vec3::new(0.0, 0.0, -1.0), true, FRAME);
        assert_eq!(pose, PlayerPose::Idle);
    }
    assert_eq!(player.state(), before);
}

#[test]
fn move_while_focused_keeps_integrating() {
    let params = PlayerParams {
        move_while_focused: true,
        ..PlayerParams::default()
    };
    let mut player = PlayerController::new(params, Vec3::new(0.0, 0.0, -10.0));
    let pose = player.tick(Vec3::new(0.0, 0.0, 1.0), true, FRAME);
    assert_eq!(pose, PlayerPose::Walk);
    assert!(approx(player.position(), Vec3::new(0.0, 0.0, -9.9)));
}

#[test]
fn facing_blends_toward_heading() {
    let mut player = controller_at(Vec3::new(0.0, 0.0, -20.0));
    player.tick(Vec3::X, false, FRAME);
    let target = std::f32::consts::FRAC_PI_2;
    assert!((player.state().facing_angle - target * FACING_BLEND).abs() < 1e-5);
    for _ in 0..60 {
        player.tick(Vec3::X, false, FRAME);
    }
    assert!((player.state().facing_angle - target).abs() < 1e-3);
}

#[test]
fn standing_still_keeps_facing_and_idles() {
    let mut player = controller_at(Vec3::new(0.0, 0.0, -20.0));
    player.tick(Vec3::X, false, FRAME);
    let facing = player.state().facing_angle;
    assert_eq!(player.tick(Vec3::ZERO, false, FRAME), PlayerPose::Idle);
    assert_eq!(player.state().facing_angle, facing);
}

#[test]
fn opposing_keys_cancel_out() {
    let mut keys = MoveKeys::default();
    keys.set(MoveKey::Left, true);
    keys.set(MoveKey::Right, true);
    assert_eq!(keys.intent(), Vec3::ZERO);
    keys.set(MoveKey::Forward, true);
    assert_eq!(keys.intent(), Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn key_names_map_to_directions() {
    assert_eq!(MoveKey::from_key("w"), Some(MoveKey::Forward));
    assert_eq!(MoveKey::from_key("ArrowUp"), Some(MoveKey::Forward));
    assert_eq!(MoveKey::from_key("S"), Some(MoveKey::Back));
    assert_eq!(MoveKey::from_key("arrowleft"), Some(MoveKey::Left));
    assert_eq!(MoveKey::from_key("D"), Some(MoveKey::Right));
    assert_eq!(MoveKey::from_key("Escape"), None);
    assert_eq!(MoveKey::from_key(""), None);

    let mut keys = MoveKeys::default();
    assert!(keys.set_key("a", true));
    assert!(!keys.set_key("q", true));
    assert!(keys.left);
    keys.clear();
    assert_eq!(keys, MoveKeys::default());
}

#[test]
fn time_scaled_integration_follows_frame_time() {
    let params = PlayerParams {
        integration: Integration::TimeScaled {
            reference_hz: TIME_SCALED_REFERENCE_HZ,
        },
        ..PlayerParams::default()
    };
    let mut player = PlayerController::new(params, Vec3::new(0.0, 0.0, -20.0));
    // A 30 Hz frame covers two reference ticks
    player.tick(Vec3::new(0.0, 0.0, -1.0), false, Duration::from_secs_f32(1.0 / 30.0));
    assert!(approx(player.position(), Vec3::new(0.0, 0.0, -20.2)));

    let mut fixed = controller_at(Vec3::new(0.0, 0.0, -20.0));
    fixed.tick(Vec3::new(0.0, 0.0, -1.0), false, Duration::from_secs_f32(1.0 / 30.0));
    assert!(approx(fixed.position(), Vec3::new(0.0, 0.0, -20.1)));
}

#[test]
fn spawn_and_teleport_are_clamped() {
    let mut player = controller_at(Vec3::new(20.0, 0.0, 5.0));
    assert_eq!(player.position(), Vec3::new(BOUND_X, 0.0, BOUND_Z_MAX));
    player.set_position(Vec3::new(-30.0, 0.0, -500.0));
    assert_eq!(player.position(), Vec3::new(-BOUND_X, 0.0, BOUND_Z_MIN));
    player.reset();
    assert_eq!(player.position(), Vec3::new(BOUND_X, 0.0, BOUND_Z_MAX));
    assert_eq!(player.pose(), PlayerPose::Idle);
}
