use crate::field::{EntityId, PointField, Visual};

/// The highlighted star and what it looked like before the highlight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverRecord {
    pub id: EntityId,
    pub snapshot: Visual,
}

#[derive(Clone, Copy, Debug)]
pub struct HoverStyle {
    pub color: [f32; 3],
    pub scale: f32,
}

#[derive(Debug, Default)]
pub struct HoverHighlighter {
    record: Option<HoverRecord>,
}

impl HoverHighlighter {
    #[inline]
    pub fn hovered(&self) -> Option<EntityId> {
        self.record.map(|r| r.id)
    }

    #[inline]
    pub fn record(&self) -> Option<&HoverRecord> {
        self.record.as_ref()
    }

    /// Diff `hit` against the current highlight. Selected or unselectable
    /// stars never receive a highlight.
    pub fn update(&mut self, hit: Option<EntityId>, field: &mut PointField, style: HoverStyle) {
        let target = hit.filter(|id| {
            field
                .get(*id)
                .map(|e| e.selectable && !e.selected)
                .unwrap_or(false)
        });
        if target == self.hovered() {
            return;
        }
        self.clear(field);
        if let Some(id) = target {
            if let Some(e) = field.get_mut(id) {
                let snapshot = e.visual;
                e.visual = Visual {
                    color: style.color,
                    opacity: 1.0,
                    scale: snapshot.scale * style.scale,
                };
                self.record = Some(HoverRecord { id, snapshot });
            }
        }
    }

    /// Drop the highlight, restoring the star unless it has since been selected.
    pub fn clear(&mut self, field: &mut PointField) {
        if let Some(rec) = self.record.take() {
            if let Some(e) = field.get_mut(rec.id) {
                if !e.selected {
                    e.visual = rec.snapshot;
                }
            }
        }
    }

    /// Drop the record without touching the star.
    pub fn forget(&mut self) {
        self.record = None;
    }
}
