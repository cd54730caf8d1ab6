// Host-side tests for the autoplay tour scheduler.

use gallery_core::*;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn color(i: usize) -> ColorOption {
    ColorOption {
        name: format!("Color {i}"),
        hex: "#808080".into(),
        bg: "#000000".into(),
        text_color: "#ffffff".into(),
    }
}

/// Product whose variant `i` has `layout[i]` colors.
fn product_with_layout(layout: &[usize]) -> Product {
    Product {
        id: 1,
        name: "Test".into(),
        variants: layout
            .iter()
            .enumerate()
            .map(|(i, &n)| Variant {
                name: format!("Variant {i}"),
                model: format!("/models/{i}.glb"),
                scale: [1.0; 3],
                offset: 0.0,
                rotation: [0.0; 3],
                text: String::new(),
                description: String::new(),
                accent: None,
                price: None,
                colors: (0..n).map(color).collect(),
                specs: Vec::new(),
            })
            .collect(),
    }
}

#[test]
fn plan_skips_pairs_at_or_before_start() {
    let params = TourParams::default();
    let steps = plan_steps(&[2, 3], 0, Some(0), &params);
    let pairs: Vec<_> = steps
        .iter()
        .map(|s| (s.variant_index, s.color_index))
        .collect();
    assert_eq!(pairs, vec![(0, 1), (1, 0), (1, 1), (1, 2)]);
    assert!(!steps[0].is_new_variant);
    assert_eq!(steps[0].dwell, ms(1000));
    assert!(steps[1].is_new_variant);
    assert_eq!(steps[1].dwell, ms(1600));

    let from_none = plan_steps(&[2, 3], 0, None, &params);
    assert_eq!(from_none.len(), 5);
    assert_eq!(
        (from_none[0].variant_index, from_none[0].color_index),
        (0, 0)
    );

    assert!(plan_steps(&[2, 3], 1, Some(2), &params).is_empty());
}

#[test]
fn tour_walks_pairs_on_dwell_schedule() {
    let product = product_with_layout(&[2, 3]);
    let mut tour = TourScheduler::new(&product, TourParams::default());
    let mut view = ViewState::default();

    tour.start(0, Some(0), &mut view);
    assert!(tour.is_running());
    assert_eq!(view.selection(), (0, 1));
    assert_eq!(view.origin, SelectionOrigin::Tour);

    let expected = [(999, (0, 1)), (1, (1, 0)), (1599, (1, 0)), (1, (1, 1)), (1000, (1, 2))];
    for (dt, selection) in expected {
        tour.advance(ms(dt), &mut view);
        assert_eq!(view.selection(), selection);
    }
    assert!(!tour.in_grace());

    // last dwell, then the grace delay
    tour.advance(ms(1000), &mut view);
    assert!(tour.in_grace());
    assert!(tour.is_running());
    assert_eq!(view.selection(), (1, 2));

    tour.advance(ms(1999), &mut view);
    assert_eq!(view.selection(), (1, 2));
    tour.advance(ms(1), &mut view);
    assert_eq!(view.selection(), (0, 0));
    assert_eq!(tour.laps(), 1);
    assert_eq!(tour.state().start_color, None);
    assert_eq!(tour.pending().len(), 4);
}

#[test]
fn starting_at_last_pair_goes_straight_to_grace() {
    let product = product_with_layout(&[2, 3]);
    let mut tour = TourScheduler::new(&product, TourParams::default());
    let mut view = ViewState {
        variant_index: 1,
        color_index: 2,
        origin: SelectionOrigin::User,
    };

    tour.start(1, Some(2), &mut view);
    assert!(tour.plan().is_empty());
    assert!(tour.in_grace());
    assert_eq!(view.origin, SelectionOrigin::User);

    tour.advance(ms(2000), &mut view);
    assert_eq!(view.selection(), (0, 0));
    assert_eq!(view.origin, SelectionOrigin::Tour);
}

#[test]
fn cancel_drops_pending_steps() {
    let product = product_with_layout(&[2, 3]);
    let mut tour = TourScheduler::new(&product, TourParams::default());
    let mut view = ViewState::default();

    tour.start(0, Some(0), &mut view);
    tour.advance(ms(500), &mut view);
    assert!(tour.cancel());
    assert!(!tour.cancel());
    assert!(!tour.is_running());
    assert!(tour.pending().is_empty());

    tour.advance(ms(60_000), &mut view);
    assert_eq!(view.selection(), (0, 1));
}

#[test]
fn cancel_during_grace_stops_the_restart() {
    let product = product_with_layout(&[1]);
    let mut tour = TourScheduler::new(&product, TourParams::default());
    let mut view = ViewState::default();

    tour.start(0, Some(0), &mut view);
    assert!(tour.in_grace());
    tour.advance(ms(1000), &mut view);
    tour.cancel();
    tour.advance(ms(5000), &mut view);
    assert_eq!(tour.laps(), 0);
    assert_eq!(view.origin, SelectionOrigin::Initial);
}

#[test]
fn large_step_crosses_several_dwells() {
    let product = product_with_layout(&[2, 3]);
    let mut tour = TourScheduler::new(&product, TourParams::default());
    let mut view = ViewState::default();

    tour.start(0, Some(0), &mut view);
    tour.advance(ms(3600), &mut view);
    assert_eq!(view.selection(), (1, 2));
    assert_eq!(tour.state().current_step, Some(3));
}

#[test]
fn start_while_running_replaces_the_plan() {
    let product = product_with_layout(&[2, 3]);
    let mut tour = TourScheduler::new(&product, TourParams::default());
    let mut view = ViewState::default();

    tour.start(0, Some(0), &mut view);
    tour.advance(ms(1200), &mut view);
    assert_eq!(view.selection(), (1, 0));

    tour.start(1, Some(1), &mut view);
    assert_eq!(view.selection(), (1, 2));
    assert_eq!(tour.plan().len(), 1);
    assert_eq!(tour.state().start_variant, 1);
}

#[test]
fn zero_length_lap_does_not_spin() {
    let product = product_with_layout(&[1, 1]);
    let params = TourParams {
        model_dwell: Duration::ZERO,
        color_dwell: Duration::ZERO,
        grace: Duration::ZERO,
    };
    let mut tour = TourScheduler::new(&product, params);
    let mut view = ViewState::default();

    tour.start(0, None, &mut view);
    tour.advance(ms(16), &mut view);
    assert!(tour.is_running());
    assert!(tour.laps() <= 2);
}
