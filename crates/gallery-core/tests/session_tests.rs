// Host-side tests for the gallery and viewer session pipelines.

use gallery_core::*;
use glam::Vec3;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn viewer() -> ViewerSession {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let product = catalog.product(1).expect("product 1").clone();
    ViewerSession::new(
        product,
        TourParams::default(),
        ActivityParams::default(),
        Duration::ZERO,
    )
}

#[test]
fn arrival_tour_then_input_cancels_and_idle_restarts() {
    let mut session = viewer();
    session.arrive(ms(0));
    assert_eq!(session.view().selection(), (0, 1));

    session.advance(ms(1000));
    assert_eq!(session.view().selection(), (0, 2));
    session.advance(ms(2000));
    assert_eq!(session.view().selection(), (1, 0));

    session.record_activity(ActivityKind::PointerMove, ms(2500));
    assert!(!session.tour().is_running());
    assert_eq!(session.view().selection(), (1, 0));

    // dwell timers that were pending never fire
    session.advance(ms(4000));
    assert_eq!(session.view().selection(), (1, 0));

    // idle is measured from 2500, so the first poll past 7500 restarts
    session.advance(ms(7000));
    assert!(!session.tour().is_running());
    session.advance(ms(8000));
    assert!(session.tour().is_running());
    assert_eq!(session.view().selection(), (1, 1));
    assert_eq!(session.tour_state().start_variant, 1);
    assert_eq!(session.tour_state().start_color, Some(0));
}

#[test]
fn full_lap_restarts_from_first_pair_after_grace() {
    let mut session = viewer();
    session.arrive(ms(0));

    let mut now = 0;
    while now < 11_100 {
        now += 100;
        session.advance(ms(now));
        if now == 9_200 {
            assert_eq!(session.view().selection(), (2, 2));
            assert!(session.tour().in_grace());
        }
    }
    assert_eq!(session.view().selection(), (2, 2));
    assert_eq!(session.tour().laps(), 0);

    session.advance(ms(11_200));
    assert_eq!(session.view().selection(), (0, 0));
    assert_eq!(session.tour().laps(), 1);
    assert_eq!(session.view().origin, SelectionOrigin::Tour);
}

#[test]
fn manual_variant_pick_resets_color_and_stops_tour() {
    let mut session = viewer();
    session.arrive(ms(0));
    session.advance(ms(1000));
    assert_eq!(session.view().selection(), (0, 2));

    session.select_variant(2).unwrap();
    assert!(!session.tour().is_running());
    assert_eq!(session.view().selection(), (2, 0));
    assert_eq!(session.view().origin, SelectionOrigin::User);

    session.select_color(1).unwrap();
    assert_eq!(session.view().selection(), (2, 1));
    assert_eq!(
        session.view().color(session.product()).unwrap().name,
        "Sunset"
    );

    assert_eq!(
        session.select_variant(3).unwrap_err(),
        GalleryError::VariantOutOfRange { index: 3, len: 3 }
    );
    assert_eq!(
        session.select_color(5).unwrap_err(),
        GalleryError::ColorOutOfRange { index: 5, len: 3 }
    );
    assert_eq!(session.view().selection(), (2, 1));
}

#[test]
fn tour_steps_keep_color_from_plan() {
    let mut session = viewer();
    session.arrive(ms(0));
    session.advance(ms(2000));
    // variant change by the tour lands on color 0 of the new variant
    assert_eq!(session.view().selection(), (1, 0));
    session.advance(ms(3600));
    assert_eq!(session.view().selection(), (1, 1));
    assert_eq!(session.view().origin, SelectionOrigin::Tour);
}

#[test]
fn no_autoplay_before_arrival() {
    let mut session = viewer();
    for t in (0..=20_000).step_by(500) {
        session.advance(ms(t));
    }
    assert!(!session.is_ready());
    assert!(!session.tour().is_running());
    assert_eq!(session.view().origin, SelectionOrigin::Initial);
}

#[test]
fn reset_returns_viewer_to_entry_state() {
    let mut session = viewer();
    session.arrive(ms(0));
    session.advance(ms(3000));
    session.reset(ms(3000));
    assert!(!session.is_ready());
    assert!(!session.tour().is_running());
    assert_eq!(session.view(), ViewState::default());
    assert_eq!(session.activity().state().next_poll, ms(4000));
}

fn gallery() -> GallerySession {
    GallerySession::with_corridor(PlayerParams::default(), CameraParams::default())
}

fn walk(session: &mut GallerySession, intent: Vec3, ticks: usize) -> Option<u32> {
    for _ in 0..ticks {
        session.tick(intent, FRAME);
        if session.focus().focused_id().is_some() {
            return session.focus().focused_id();
        }
    }
    None
}

#[test]
fn walking_to_a_frame_focuses_and_freezes() {
    let mut session = gallery();
    let left = Vec3::new(-1.0, 0.0, 0.0);

    assert_eq!(walk(&mut session, left, 100), Some(1));
    let x = session.player().position.x;
    assert!(x < -5.7, "acquired at x = {x}");
    assert_eq!(session.camera_mode(), CameraMode::Focus);

    for _ in 0..30 {
        let report = session.tick(left, FRAME);
        assert_eq!(report.pose, PlayerPose::Idle);
        assert!(report.transitions.is_empty());
    }
    assert_eq!(session.player().position.x, x);
    assert!(session.highlights()[0].scale > 1.0);
    assert_eq!(session.highlights()[1].scale, 1.0);
}

#[test]
fn dismissed_frame_reacquires_only_after_leaving() {
    let mut session = gallery();
    let left = Vec3::new(-1.0, 0.0, 0.0);
    let right = Vec3::new(1.0, 0.0, 0.0);

    assert_eq!(walk(&mut session, left, 100), Some(1));
    assert_eq!(session.dismiss_focus().map(|t| t.exhibit_id), Some(1));
    assert_eq!(session.focus().dismissed(), Some(1));

    // still inside the enter distance, but latched
    for _ in 0..5 {
        session.tick(left, FRAME);
    }
    assert!(session.focus().is_empty());

    while session.player().position.x <= -1.0 {
        session.tick(right, FRAME);
        assert!(session.focus().is_empty());
    }
    assert_eq!(session.focus().dismissed(), None);
    assert_eq!(session.camera_mode(), CameraMode::Follow);

    assert_eq!(walk(&mut session, left, 100), Some(1));
}

#[test]
fn moving_while_focused_releases_past_exit_distance() {
    let params = PlayerParams {
        move_while_focused: true,
        ..PlayerParams::default()
    };
    let mut session = GallerySession::with_corridor(params, CameraParams::default());
    let left = Vec3::new(-1.0, 0.0, 0.0);
    assert_eq!(walk(&mut session, left, 100), Some(1));

    let mut released = false;
    for _ in 0..100 {
        let report = session.tick(Vec3::new(1.0, 0.0, 0.0), FRAME);
        if report.transitions.contains(&FocusTransition::Released(1)) {
            released = true;
            break;
        }
    }
    assert!(released);
    assert!(session.player().position.x > -1.6);
}

#[test]
fn navigation_targets_product_pages() {
    let session = gallery();
    assert_eq!(session.navigate(3).unwrap().path(), "/product/3");
    assert_eq!(
        session.navigate(42).unwrap_err(),
        GalleryError::UnknownExhibit(42)
    );
}

#[test]
fn reset_restores_gallery_entry_state() {
    let mut session = gallery();
    walk(&mut session, Vec3::new(-1.0, 0.0, -1.0), 200);
    session.set_hovered(Some(2));
    session.reset();
    assert_eq!(session.player().position, Vec3::ZERO);
    assert!(session.focus().is_empty());
    assert_eq!(session.ticks(), 0);
    assert_eq!(session.camera().eye, initial_camera_eye());
}
