use glam::Vec2;
use pin_core::{CameraConfig, OrbitController};
use rand::prelude::*;
use std::f32::consts::PI;

fn orbit() -> OrbitController {
    OrbitController::new(CameraConfig::default())
}

#[test]
fn drag_moves_azimuth_and_polar_against_pointer() {
    let mut cam = orbit();
    let start = cam.target_pose();
    cam.begin_drag(Vec2::new(100.0, 100.0));
    cam.update_drag(Vec2::new(110.0, 104.0));
    let pose = cam.target_pose();
    let s = CameraConfig::default().rotate_sensitivity;
    assert!((pose.azimuth - (start.azimuth - 10.0 * s)).abs() < 1e-6);
    assert!((pose.polar - (start.polar - 4.0 * s)).abs() < 1e-6);
    // anchor follows the pointer, so a repeated position is a zero delta
    cam.update_drag(Vec2::new(110.0, 104.0));
    assert_eq!(cam.target_pose(), pose);
    cam.end_drag();
    assert!(!cam.is_dragging());
    cam.update_drag(Vec2::new(500.0, 500.0));
    assert_eq!(cam.target_pose(), pose);
}

#[test]
fn polar_never_leaves_clamp_interval() {
    let cfg = CameraConfig::default();
    let mut cam = OrbitController::new(cfg.clone());
    let mut rng = StdRng::seed_from_u64(7);
    let mut p = Vec2::ZERO;
    cam.begin_drag(p);
    for _ in 0..2_000 {
        p += Vec2::new(rng.gen_range(-5_000.0..5_000.0), rng.gen_range(-50_000.0..50_000.0));
        cam.update_drag(p);
        cam.step(0.016);
        for pose in [cam.target_pose(), cam.current_pose()] {
            assert!(pose.polar >= cfg.polar_epsilon, "polar {} below band", pose.polar);
            assert!(pose.polar <= PI - cfg.polar_epsilon, "polar {} above band", pose.polar);
            assert!(pose.polar > 0.0 && pose.polar < PI);
        }
    }
}

#[test]
fn radius_never_leaves_band() {
    let cfg = CameraConfig::default();
    let mut cam = OrbitController::new(cfg.clone());
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..2_000 {
        cam.zoom(rng.gen_range(-1.0e6..1.0e6));
        cam.step(0.016);
        for pose in [cam.target_pose(), cam.current_pose()] {
            assert!(pose.radius >= cfg.min_radius && pose.radius <= cfg.max_radius);
        }
    }
    cam.zoom(f32::NAN);
    assert!(cam.target_pose().radius.is_finite());
}

#[test]
fn zoom_saturates_at_both_ends() {
    let cfg = CameraConfig::default();
    let mut cam = OrbitController::new(cfg.clone());
    cam.zoom(1.0e9);
    assert_eq!(cam.target_pose().radius, cfg.max_radius);
    cam.zoom(-1.0e9);
    assert_eq!(cam.target_pose().radius, cfg.min_radius);
}

#[test]
fn smoothing_converges_on_target() {
    let mut cam = orbit();
    cam.zoom(200.0);
    let target = cam.target_pose();
    assert_ne!(cam.current_pose(), target);
    for _ in 0..200 {
        cam.step(0.016);
    }
    let cur = cam.current_pose();
    assert!((cur.radius - target.radius).abs() < 1e-3);
}

#[test]
fn camera_looks_at_origin_from_pose() {
    let mut cam = orbit();
    cam.set_viewport(1600.0, 900.0);
    cam.settle();
    let c = cam.camera();
    assert!((c.aspect - 16.0 / 9.0).abs() < 1e-6);
    assert!((c.eye.length() - cam.current_pose().radius).abs() < 1e-4);
    assert_eq!(c.target, glam::Vec3::ZERO);
    // degenerate viewport keeps the previous aspect
    cam.set_viewport(0.0, 900.0);
    assert!((cam.aspect() - 16.0 / 9.0).abs() < 1e-6);
}
