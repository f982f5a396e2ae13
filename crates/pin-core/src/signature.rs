//! The exported constellation: a standalone copy of the chosen stars and
//! the lines between them.

use crate::field::EntityId;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectorSegment {
    pub from: Vec3,
    pub to: Vec3,
    pub color: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignatureStar {
    pub id: EntityId,
    pub position: Vec3,
    pub color: [f32; 3],
    pub opacity: f32,
    pub scale: f32,
}

/// Owns all of its data; nothing here points back into the live field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Signature {
    pub stars: Vec<SignatureStar>,
    pub connectors: Vec<ConnectorSegment>,
}

impl Signature {
    /// Star ids in selection order.
    pub fn pin(&self) -> Vec<EntityId> {
        self.stars.iter().map(|s| s.id).collect()
    }

    pub fn centroid(&self) -> Vec3 {
        if self.stars.is_empty() {
            return Vec3::ZERO;
        }
        let sum = self
            .stars
            .iter()
            .fold(Vec3::ZERO, |acc, s| acc + s.position);
        sum / self.stars.len() as f32
    }

    /// Largest distance from the centroid to any star.
    pub fn bounding_radius(&self) -> f32 {
        let c = self.centroid();
        self.stars
            .iter()
            .map(|s| s.position.distance(c))
            .fold(0.0, f32::max)
    }

    /// A copy translated so the centroid sits at the origin.
    pub fn centered(&self) -> Signature {
        let c = self.centroid();
        Signature {
            stars: self
                .stars
                .iter()
                .map(|s| SignatureStar {
                    position: s.position - c,
                    ..*s
                })
                .collect(),
            connectors: self
                .connectors
                .iter()
                .map(|seg| ConnectorSegment {
                    from: seg.from - c,
                    to: seg.to - c,
                    color: seg.color,
                })
                .collect(),
        }
    }
}
