//! What the core hands to an injected renderer each frame.

use crate::camera::Camera;
use crate::resources::ResourceId;

/// One star as drawn: world position, world-space radius and RGBA colour.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarInstance {
    pub pos: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
}

/// Endpoint of a connector line; consecutive pairs form one segment.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub pos: [f32; 3],
    pub _pad: f32,
    pub color: [f32; 4],
}

pub struct Frame<'a> {
    pub camera: &'a Camera,
    pub stars: &'a [StarInstance],
    pub lines: &'a [LineVertex],
    pub clear_color: [f32; 4],
    pub time_sec: f64,
}

/// A surface able to draw a frame on demand.
pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>);

    /// A star or connector the core created is gone for good.
    fn release(&mut self, _resource: ResourceId) {}
}
