use glam::{Vec2, Vec3};
use pin_core::*;

fn camera() -> Camera {
    let mut orbit = OrbitController::new(CameraConfig::default());
    orbit.set_viewport(800.0, 600.0);
    orbit.camera()
}

#[test]
fn pixel_to_ndc_maps_corners_and_centre() {
    let vp = Vec2::new(800.0, 600.0);
    assert_eq!(pixel_to_ndc(Vec2::new(400.0, 300.0), vp), Some(Vec2::ZERO));
    assert_eq!(pixel_to_ndc(Vec2::new(0.0, 0.0), vp), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(pixel_to_ndc(Vec2::new(800.0, 600.0), vp), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(pixel_to_ndc(Vec2::new(1.0, 1.0), Vec2::new(0.0, 600.0)), None);
    assert_eq!(pixel_to_ndc(Vec2::new(f32::NAN, 1.0), vp), None);
}

#[test]
fn centre_ray_points_from_eye_to_origin() {
    let cam = camera();
    let ray = ray_from_ndc(Vec2::ZERO, &cam);
    assert_eq!(ray.origin, cam.eye);
    let expected = (Vec3::ZERO - cam.eye).normalize();
    assert!(ray.dir.dot(expected) > 0.9999);
}

#[test]
fn ray_sphere_hits_front_face_and_misses_behind() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 1.0).unwrap();
    assert!((t - 4.0).abs() < 1e-5);
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 1.0).is_none());
    assert!(ray_sphere(Vec3::ZERO, -Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 1.0).is_none());
}

#[test]
fn pick_returns_nearest_star_along_ray() {
    let mut ledger = ResourceLedger::new();
    let field = PointField::from_positions(
        &[Vec3::new(0.0, 0.0, -2.0), Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0)],
        &mut ledger,
    );
    let hit = pick(Vec2::ZERO, &camera(), &field, STAR_RADIUS).unwrap();
    assert_eq!(hit.id, EntityId(2));
}

#[test]
fn duplicate_positions_resolve_to_first_in_order() {
    let mut ledger = ResourceLedger::new();
    let field = PointField::from_positions(&[Vec3::ZERO, Vec3::ZERO], &mut ledger);
    let hit = pick(Vec2::ZERO, &camera(), &field, STAR_RADIUS).unwrap();
    assert_eq!(hit.id, EntityId(0));
}

#[test]
fn empty_ray_returns_none() {
    let mut ledger = ResourceLedger::new();
    let field = PointField::from_positions(&[Vec3::new(3.0, 0.0, 0.0)], &mut ledger);
    assert!(pick(Vec2::ZERO, &camera(), &field, STAR_RADIUS).is_none());
    let empty = PointField::from_positions(&[], &mut ledger);
    assert!(pick(Vec2::ZERO, &camera(), &empty, STAR_RADIUS).is_none());
}

#[test]
fn pick_radius_follows_drawn_scale() {
    let mut ledger = ResourceLedger::new();
    // just off the centre ray at scale 1, inside it at scale 3
    let off = Vec3::new(STAR_RADIUS * 1.5, 0.0, 0.0);
    let mut field = PointField::from_positions(&[off], &mut ledger);
    assert!(pick(Vec2::ZERO, &camera(), &field, STAR_RADIUS).is_none());
    field.get_mut(EntityId(0)).unwrap().render_scale = 3.0;
    assert!(pick(Vec2::ZERO, &camera(), &field, STAR_RADIUS).is_some());
}
