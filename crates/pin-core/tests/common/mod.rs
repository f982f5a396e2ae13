#![allow(dead_code)]

use glam::{Vec2, Vec3};
use pin_core::*;

pub const W: f32 = 800.0;
pub const H: f32 = 600.0;

#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: usize,
    pub stars: Vec<StarInstance>,
    pub lines: Vec<LineVertex>,
    pub released: Vec<ResourceId>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        self.stars = frame.stars.to_vec();
        self.lines = frame.lines.to_vec();
    }

    fn release(&mut self, resource: ResourceId) {
        self.released.push(resource);
    }
}

/// Config with camera easing off so input shows up on the next tick.
pub fn test_config() -> PinConfig {
    let mut config = PinConfig::default();
    config.camera.damping_tau_sec = 0.0;
    config
}

/// Seven stars on the z = 0 plane, all in view of the default camera.
pub fn layout() -> Vec<Vec3> {
    vec![
        Vec3::new(-3.0, 0.0, 0.0),
        Vec3::new(-1.5, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.5, -1.0, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::new(0.0, -2.0, 0.0),
    ]
}

pub fn ready_module(config: PinConfig, positions: &[Vec3]) -> ConstellationPin {
    let mut pin = ConstellationPin::with_positions(config, positions).expect("valid config");
    let mut out = Vec::new();
    pin.scene_ready(W, H, &mut out);
    pin
}

/// Pixel position of a world point under the module's current camera.
pub fn pixel_for(pin: &ConstellationPin, world: Vec3) -> Vec2 {
    let cam = pin.orbit().camera();
    let clip = cam.view_projection() * world.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    Vec2::new((ndc.x + 1.0) * 0.5 * W, (1.0 - ndc.y) * 0.5 * H)
}

pub fn click_at(pin: &mut ConstellationPin, px: Vec2, out: &mut Vec<PinEvent>) {
    pin.pointer_down(px);
    pin.pointer_up(px, out);
}

pub fn click_star(pin: &mut ConstellationPin, index: usize, out: &mut Vec<PinEvent>) {
    let world = pin.field().get(EntityId(index as u32)).expect("star").position();
    let px = pixel_for(pin, world);
    click_at(pin, px, out);
}

pub fn committed(events: &[PinEvent]) -> Vec<&Signature> {
    events
        .iter()
        .filter_map(|e| match e {
            PinEvent::SelectionCommitted(s) => Some(s),
            _ => None,
        })
        .collect()
}
