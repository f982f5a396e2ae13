use crate::camera::Camera;
use crate::field::{EntityId, PointField};
use glam::{Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub id: EntityId,
    /// Distance along the ray to the entry point.
    pub distance: f32,
}

/// Pixel position inside a `viewport` (width, height) to normalized device coordinates.
#[inline]
pub fn pixel_to_ndc(pos: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 || !pos.is_finite() {
        return None;
    }
    Some(Vec2::new(
        (2.0 * pos.x / viewport.x) - 1.0,
        1.0 - (2.0 * pos.y / viewport.y),
    ))
}

/// Compute a world-space ray through `ndc` for `camera`.
pub fn ray_from_ndc(ndc: Vec2, camera: &Camera) -> Ray {
    let inv = camera.view_projection().inverse();
    let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let origin = camera.eye;
    Ray {
        origin,
        dir: (p1 - origin).normalize(),
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Nearest star hit by `ray`. Each star is a sphere of `star_radius` times its
/// current drawn scale; ties keep the first star in field order.
pub fn pick_ray(ray: &Ray, field: &PointField, star_radius: f32) -> Option<PickHit> {
    let mut best = None::<PickHit>;
    for e in field.iter() {
        let radius = star_radius * e.render_scale;
        if let Some(t) = ray_sphere(ray.origin, ray.dir, e.position(), radius) {
            match best {
                Some(b) if t >= b.distance => {}
                _ => {
                    best = Some(PickHit {
                        id: e.id,
                        distance: t,
                    })
                }
            }
        }
    }
    best
}

pub fn pick(ndc: Vec2, camera: &Camera, field: &PointField, star_radius: f32) -> Option<PickHit> {
    pick_ray(&ray_from_ndc(ndc, camera), field, star_radius)
}
