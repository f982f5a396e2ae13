//! The selectable point field: stars spread over a sphere.

use crate::config::{FieldDistribution, Palette, PinConfig};
use crate::constants::{BASE_OPACITY_MIN, BASE_SCALE_JITTER};
use crate::resources::{ResourceId, ResourceKind, ResourceLedger};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

/// Stable identity of a star. Ids are dense indices into the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl EntityId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Colour, opacity and scale of a star as the renderer should see it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visual {
    pub color: [f32; 3],
    pub opacity: f32,
    pub scale: f32,
}

#[derive(Clone, Debug)]
pub struct PointEntity {
    pub id: EntityId,
    position: Vec3,
    /// Visual state at creation; what a reset returns to.
    pub base: Visual,
    /// Per-star offset into the idle pulse.
    pub phase: f32,
    pub selectable: bool,
    pub selected: bool,
    /// Current colour/opacity; `visual.scale` is the rest scale the pulse oscillates around.
    pub visual: Visual,
    /// Smoothed scale actually drawn this frame.
    pub render_scale: f32,
    pub resource: ResourceId,
}

impl PointEntity {
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Restore colour, opacity and scale to `v`, snapping the animated scale too.
    pub fn apply_visual(&mut self, v: Visual) {
        self.visual = v;
        self.render_scale = v.scale;
    }
}

#[derive(Debug, Default)]
pub struct PointField {
    entities: Vec<PointEntity>,
}

impl PointField {
    /// Build the field described by `config`. Deterministic for a given seed.
    pub fn generate(config: &PinConfig, ledger: &mut ResourceLedger) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let n = config.star_count;
        let mut entities = Vec::with_capacity(n);
        for i in 0..n {
            let position = match config.distribution {
                FieldDistribution::RandomVolume => random_volume_point(&mut rng, config.field_radius),
                FieldDistribution::FibonacciSphere => fibonacci_point(i, n, config.field_radius),
            };
            let base = Visual {
                color: star_color(&mut rng, &config.palette),
                opacity: rng.gen_range(BASE_OPACITY_MIN..=1.0),
                scale: 1.0 + (rng.gen::<f32>() - 0.5) * BASE_SCALE_JITTER,
            };
            let phase = rng.gen::<f32>() * TAU;
            entities.push(new_entity(i, position, base, phase, ledger));
        }
        log::info!(
            "[field] generated {} stars ({:?}, radius {:.1}, seed {})",
            n,
            config.distribution,
            config.field_radius,
            config.seed
        );
        Self { entities }
    }

    /// Build a field from explicit positions with a neutral look.
    pub fn from_positions(positions: &[Vec3], ledger: &mut ResourceLedger) -> Self {
        let base = Visual {
            color: [0.6, 0.8, 1.0],
            opacity: 1.0,
            scale: 1.0,
        };
        let entities = positions
            .iter()
            .enumerate()
            .map(|(i, p)| new_entity(i, *p, base, 0.0, ledger))
            .collect();
        Self { entities }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&PointEntity> {
        self.entities.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut PointEntity> {
        self.entities.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointEntity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PointEntity> {
        self.entities.iter_mut()
    }

    /// Release every star's render handle and empty the field.
    pub fn dispose(&mut self, ledger: &mut ResourceLedger) {
        for e in self.entities.drain(..) {
            ledger.release(e.resource);
        }
    }
}

fn new_entity(
    index: usize,
    position: Vec3,
    base: Visual,
    phase: f32,
    ledger: &mut ResourceLedger,
) -> PointEntity {
    PointEntity {
        id: EntityId(index as u32),
        position,
        base,
        phase,
        selectable: true,
        selected: false,
        visual: base,
        render_scale: base.scale,
        resource: ledger.acquire(ResourceKind::Star),
    }
}

fn random_volume_point(rng: &mut StdRng, radius: f32) -> Vec3 {
    // cube root keeps the density uniform across the volume
    let r = radius * rng.gen::<f32>().cbrt();
    let inclination = (1.0 - 2.0 * rng.gen::<f32>()).clamp(-1.0, 1.0).acos();
    let azimuth = rng.gen::<f32>() * TAU;
    spherical_to_cartesian(r, inclination, azimuth)
}

fn fibonacci_point(i: usize, n: usize, radius: f32) -> Vec3 {
    let golden_angle = PI * (3.0 - 5.0_f32.sqrt());
    let y = 1.0 - 2.0 * (i as f32 + 0.5) / n as f32;
    let ring = (1.0 - y * y).max(0.0).sqrt();
    let theta = golden_angle * i as f32;
    Vec3::new(theta.cos() * ring, y, theta.sin() * ring) * radius
}

/// Same convention as the orbit camera: polar measured from +Y.
#[inline]
pub fn spherical_to_cartesian(r: f32, polar: f32, azimuth: f32) -> Vec3 {
    let (sp, cp) = polar.sin_cos();
    let (sa, ca) = azimuth.sin_cos();
    Vec3::new(r * sp * sa, r * cp, r * sp * ca)
}

fn star_color(rng: &mut StdRng, palette: &Palette) -> [f32; 3] {
    let (h0, h1) = if rng.gen::<f32>() < palette.warm_probability {
        palette.warm_hue_range
    } else {
        palette.hue_range
    };
    let h = lerp(h0, h1, rng.gen());
    let s = lerp(palette.saturation_range.0, palette.saturation_range.1, rng.gen());
    let l = lerp(palette.lightness_range.0, palette.lightness_range.1, rng.gen());
    hsl_to_rgb(h, s, l)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// `h` in degrees, `s` and `l` in [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [r + m, g + m, b + m]
}
