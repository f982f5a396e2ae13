mod common;

use common::*;
use glam::{Vec2, Vec3};
use pin_core::*;

#[test]
fn single_star_click_miss_reset_scenario() {
    let mut pin = ready_module(test_config(), &[Vec3::ZERO]);
    let mut out = Vec::new();

    click_at(&mut pin, Vec2::new(W / 2.0, H / 2.0), &mut out);
    assert_eq!(pin.sequence(), &[EntityId(0)]);
    assert_eq!(pin.selection().connector_count(), 0);
    assert_eq!(pin.pin_display(), "*_____");

    click_at(&mut pin, Vec2::new(10.0, 10.0), &mut out);
    assert_eq!(pin.sequence().len(), 1);
    assert_eq!(pin.pin_display(), "*_____");

    out.clear();
    assert!(pin.reset(&mut out));
    assert_eq!(pin.pin_display(), "______");
    assert!(pin.sequence().is_empty());
    assert_eq!(
        out,
        vec![
            PinEvent::ResetRequested,
            PinEvent::DisplayChanged("______".into())
        ]
    );
}

#[test]
fn connector_count_trails_selection_length() {
    let mut pin = ready_module(test_config(), &layout());
    let mut out = Vec::new();
    for n in 1..=5 {
        click_star(&mut pin, n - 1, &mut out);
        assert_eq!(pin.sequence().len(), n);
        assert_eq!(pin.selection().connector_count(), n - 1);
    }
    let segs: Vec<_> = pin.connectors().copied().collect();
    let positions = layout();
    for (i, seg) in segs.iter().enumerate() {
        assert_eq!(seg.from, positions[i]);
        assert_eq!(seg.to, positions[i + 1]);
    }
}

#[test]
fn reclicking_a_selected_star_is_ignored() {
    let mut pin = ready_module(test_config(), &layout());
    let mut out = Vec::new();
    click_star(&mut pin, 2, &mut out);
    out.clear();
    click_star(&mut pin, 2, &mut out);
    assert_eq!(pin.sequence(), &[EntityId(2)]);
    assert!(out.is_empty());
}

#[test]
fn sequences_never_repeat_ids_or_exceed_capacity() {
    let mut pin = ready_module(test_config(), &layout());
    let mut out = Vec::new();
    for i in [0, 0, 3, 3, 1, 6, 1, 4, 5, 2, 2] {
        click_star(&mut pin, i, &mut out);
    }
    let seq = pin.sequence();
    assert_eq!(seq.len(), PIN_LENGTH);
    let mut sorted = seq.to_vec();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), seq.len());
    assert_eq!(seq, &[0, 3, 1, 6, 4, 5].map(EntityId));
}

#[test]
fn selected_star_takes_selected_visuals() {
    let config = test_config();
    let mut pin = ready_module(config.clone(), &layout());
    let mut out = Vec::new();
    click_star(&mut pin, 1, &mut out);
    let e = pin.field().get(EntityId(1)).unwrap();
    assert!(e.selected && !e.selectable);
    assert_eq!(e.visual.color, config.palette.selected);
    assert_eq!(e.visual.scale, e.base.scale * config.selected_scale);
    assert_eq!(pin.selection().snapshot(EntityId(1)), Some(e.base));
}

#[test]
fn reset_restores_every_selected_star() {
    let mut pin = ready_module(test_config(), &layout());
    let mut out = Vec::new();
    let mut renderer = RecordingRenderer::default();
    for i in [4, 0, 6] {
        click_star(&mut pin, i, &mut out);
    }
    pin.tick(0.0, &mut renderer, &mut out);
    assert_eq!(pin.live_resources(), layout().len() + 2);

    assert!(pin.reset(&mut out));
    assert!(pin.sequence().is_empty());
    assert_eq!(pin.selection().connector_count(), 0);
    for e in pin.field().iter() {
        assert!(e.selectable && !e.selected);
        assert_eq!(e.visual, e.base);
        assert_eq!(e.render_scale, e.base.scale);
    }
    assert_eq!(pin.selection().snapshot(EntityId(4)), None);
    assert_eq!(pin.live_resources(), layout().len());

    // released connector handles reach the renderer on the next frame
    pin.tick(0.016, &mut renderer, &mut out);
    assert_eq!(renderer.released.len(), 2);
    assert!(renderer.lines.is_empty());

    // and the field can be picked again
    click_star(&mut pin, 4, &mut out);
    assert_eq!(pin.sequence(), &[EntityId(4)]);
}

#[test]
fn drag_past_threshold_then_release_over_star_does_not_select() {
    let mut pin = ready_module(test_config(), &layout());
    let mut out = Vec::new();
    let star = pixel_for(&pin, Vec3::ZERO);
    pin.pointer_down(star + Vec2::new(60.0, 0.0));
    pin.pointer_move(star + Vec2::new(30.0, 0.0));
    pin.pointer_move(star);
    pin.pointer_up(star, &mut out);
    assert!(pin.sequence().is_empty());
    assert!(out.is_empty());
    assert!(!pin.orbit().is_dragging());
    assert_ne!(pin.orbit().target_pose(), pin.orbit().current_pose());
}

#[test]
fn cancelled_press_stops_rotating_the_camera() {
    let mut pin = ready_module(test_config(), &layout());
    let mut out = Vec::new();
    let star = pixel_for(&pin, Vec3::ZERO);
    pin.pointer_down(star);
    pin.pointer_move(star + Vec2::new(40.0, 10.0));
    pin.pointer_cancel();
    assert!(!pin.orbit().is_dragging());

    let pose = pin.orbit().target_pose();
    pin.pointer_move(star + Vec2::new(200.0, 80.0));
    pin.pointer_move(star);
    assert_eq!(pin.orbit().target_pose(), pose);
    assert!(!pin.orbit().is_dragging());

    // the lost press never resolves into a click
    pin.pointer_up(star, &mut out);
    assert!(pin.sequence().is_empty());
    assert!(out.is_empty());

    // the next ordinary click works
    click_at(&mut pin, star, &mut out);
    assert_eq!(pin.sequence(), &[EntityId(2)]);
}

#[test]
fn small_jitter_still_counts_as_click() {
    let mut pin = ready_module(test_config(), &layout());
    let mut out = Vec::new();
    let star = pixel_for(&pin, Vec3::ZERO);
    pin.pointer_down(star);
    pin.pointer_move(star + Vec2::new(1.0, 1.0));
    pin.pointer_up(star + Vec2::new(0.5, 0.0), &mut out);
    assert_eq!(pin.sequence(), &[EntityId(2)]);
}

#[test]
fn click_uses_release_position_not_last_move() {
    let mut pin = ready_module(test_config(), &layout());
    let mut out = Vec::new();
    let a = pixel_for(&pin, layout()[0]);
    let b = pixel_for(&pin, layout()[2]);
    pin.pointer_move(b);
    pin.pointer_down(a);
    pin.pointer_up(a, &mut out);
    assert_eq!(pin.sequence(), &[EntityId(0)]);
}

#[test]
fn pointer_up_without_press_is_ignored() {
    let mut pin = ready_module(test_config(), &layout());
    let mut out = Vec::new();
    let star = pixel_for(&pin, Vec3::ZERO);
    pin.pointer_up(star, &mut out);
    assert!(pin.sequence().is_empty());
}

#[test]
fn input_before_scene_ready_is_ignored() {
    let mut pin = ConstellationPin::with_positions(test_config(), &[Vec3::ZERO]).unwrap();
    let mut out = Vec::new();
    assert_eq!(pin.phase(), ModulePhase::Initializing);
    click_at(&mut pin, Vec2::new(W / 2.0, H / 2.0), &mut out);
    pin.wheel(500.0);
    pin.resize(W, H);
    assert!(!pin.reset(&mut out));
    assert!(pin.sequence().is_empty());
    assert!(out.is_empty());
    assert_eq!(pin.orbit().target_pose().radius, test_config().camera.initial_radius);

    pin.scene_ready(W, H, &mut out);
    assert_eq!(pin.phase(), ModulePhase::Active);
    assert_eq!(out, vec![PinEvent::DisplayChanged("______".into())]);
    // a second ready is not a transition
    pin.scene_ready(W, H, &mut out);
    assert_eq!(out.len(), 1);
}

#[test]
fn wheel_zooms_within_band() {
    let mut pin = ready_module(test_config(), &layout());
    pin.wheel(1.0e7);
    assert_eq!(pin.orbit().target_pose().radius, CAMERA_MAX_RADIUS);
    pin.wheel(-1.0e7);
    assert_eq!(pin.orbit().target_pose().radius, CAMERA_MIN_RADIUS);
}
