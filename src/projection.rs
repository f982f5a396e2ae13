use glam::{Mat4, Vec2, Vec3};

/// A world point projected onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub px: Vec2,
    /// Clip-space w; distance along the view axis for a perspective camera.
    pub depth: f32,
}

/// Project `world` through `view_proj` into pixel space of `viewport`.
/// Points behind the camera are rejected.
#[inline]
pub fn project_to_px(view_proj: Mat4, world: Vec3, viewport: Vec2) -> Option<Projected> {
    let clip = view_proj * world.extend(1.0);
    if clip.w <= 1e-6 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Projected {
        px: Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - ndc.y) * 0.5 * viewport.y,
        ),
        depth: clip.w,
    })
}

/// On-screen radius in pixels of a sphere of `world_radius` at `depth`.
#[inline]
pub fn radius_px(world_radius: f32, depth: f32, fovy_radians: f32, viewport_h: f32) -> f32 {
    let half_h = (0.5 * fovy_radians).tan();
    if depth <= 0.0 || half_h <= 0.0 {
        return 0.0;
    }
    world_radius / (depth * half_h) * 0.5 * viewport_h
}
