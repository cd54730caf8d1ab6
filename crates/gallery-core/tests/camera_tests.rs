// Host-side tests for follow/focus camera blending.

use gallery_core::*;
use glam::Vec3;

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < 1e-4
}

#[test]
fn follow_mode_damps_eye_and_snaps_look_at() {
    let mut director = CameraDirector::new(CameraParams::default());
    let player = Vec3::ZERO;
    let mode = director.tick(player, None);
    assert_eq!(mode, CameraMode::Follow);

    // (0, 5, -2) -> (0, 5, 8) by 7%
    assert!(close(director.camera().eye, Vec3::new(0.0, 5.0, -1.3)));
    assert_eq!(director.camera().target, Vec3::new(0.0, 1.5, 0.0));
}

#[test]
fn follow_target_tracks_only_part_of_lateral_offset() {
    let params = CameraParams::default();
    let player = Vec3::new(4.0, 0.0, -30.0);
    assert!(close(params.follow_eye(player), Vec3::new(1.2, 5.0, -22.0)));
    assert!(close(params.follow_look_at(player), Vec3::new(4.0, 1.5, -30.0)));

    let mut director = CameraDirector::new(params);
    for _ in 0..500 {
        director.tick(player, None);
    }
    assert!(close(director.camera().eye, Vec3::new(1.2, 5.0, -22.0)));
}

#[test]
fn focus_mode_uses_heavier_damping() {
    let focus = FocusTarget {
        exhibit_id: 1,
        cam_target: Vec3::new(-1.9, 3.0, -4.0),
        look_at: Vec3::new(-7.4, 2.5, -4.0),
    };
    let mut director = CameraDirector::new(CameraParams::default());
    let start = director.camera().eye;
    let mode = director.tick(Vec3::new(-5.0, 0.0, -4.0), Some(&focus));
    assert_eq!(mode, CameraMode::Focus);
    assert!(close(
        director.camera().eye,
        start + (focus.cam_target - start) * FOCUS_LERP
    ));
    assert_eq!(director.camera().target, focus.look_at);
}

#[test]
fn mode_switch_is_immediate() {
    let focus = FocusTarget {
        exhibit_id: 2,
        cam_target: Vec3::new(1.9, 3.0, -14.0),
        look_at: Vec3::new(7.4, 2.5, -14.0),
    };
    let player = Vec3::new(5.0, 0.0, -14.0);
    let mut director = CameraDirector::new(CameraParams::default());
    for _ in 0..20 {
        director.tick(player, Some(&focus));
    }
    assert_eq!(director.mode(), CameraMode::Focus);

    let eye_before = director.camera().eye;
    director.tick(player, None);
    assert_eq!(director.mode(), CameraMode::Follow);
    assert_eq!(director.camera().target, Vec3::new(5.0, 1.5, -14.0));
    let follow_eye = CameraParams::default().follow_eye(player);
    assert!(close(
        director.camera().eye,
        eye_before + (follow_eye - eye_before) * FOLLOW_LERP
    ));
}

#[test]
fn matrices_are_finite_and_reset_restores_defaults() {
    let mut director = CameraDirector::new(CameraParams::default());
    director.set_aspect(0.0);
    assert!((director.camera().aspect - 16.0 / 9.0).abs() < 1e-6);
    director.set_aspect(2.0);
    director.tick(Vec3::new(0.0, 0.0, -40.0), None);
    let cam = director.camera();
    assert!(cam.view_projection().is_finite());
    // the look-at point lands in the middle of the screen
    let clip = cam.view_projection() * cam.target.extend(1.0);
    assert!((clip.x / clip.w).abs() < 1e-4);
    assert!((clip.y / clip.w).abs() < 1e-4);

    director.reset();
    assert_eq!(director.camera().eye, initial_camera_eye());
    assert_eq!(director.mode(), CameraMode::Follow);
}
