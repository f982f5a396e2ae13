//! Ordered star selection and the phase machine around it.
//!
//! The machine references stars by id only; the field stays the owner. Every
//! star it recolours gets its pre-selection look recorded in `snapshots` so a
//! reset can put it back.

use crate::field::{EntityId, PointField, Visual};
use crate::resources::{ResourceId, ResourceKind, ResourceLedger};
use crate::signature::{ConnectorSegment, Signature, SignatureStar};
use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModulePhase {
    Initializing,
    Active,
    SuccessFlash,
    FadingOut,
}

#[derive(Clone, Copy, Debug)]
pub struct SelectionStyle {
    pub selected_color: [f32; 3],
    pub selected_scale: f32,
    pub connector_color: [f32; 3],
    pub flash_color: [f32; 3],
}

/// Why a click did not change the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    NotActive,
    AtCapacity,
    UnknownEntity,
    NotSelectable,
    AlreadySelected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Rejected(Rejection),
    /// Appended; holds the new sequence length.
    Accepted(usize),
    /// Appended and the sequence is now full.
    Completed,
}

#[derive(Clone, Debug)]
struct LiveConnector {
    segment: ConnectorSegment,
    resource: ResourceId,
}

#[derive(Debug)]
pub struct SelectionMachine {
    capacity: usize,
    phase: ModulePhase,
    style: SelectionStyle,
    sequence: SmallVec<[EntityId; 8]>,
    snapshots: FnvHashMap<EntityId, Visual>,
    connectors: Vec<LiveConnector>,
    flashing: bool,
    committed: bool,
}

impl SelectionMachine {
    pub fn new(capacity: usize, style: SelectionStyle) -> Self {
        Self {
            capacity,
            phase: ModulePhase::Initializing,
            style,
            sequence: SmallVec::new(),
            snapshots: FnvHashMap::default(),
            connectors: Vec::new(),
            flashing: false,
            committed: false,
        }
    }

    #[inline]
    pub fn phase(&self) -> ModulePhase {
        self.phase
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn sequence(&self) -> &[EntityId] {
        &self.sequence
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    #[inline]
    pub fn is_flashing(&self) -> bool {
        self.flashing
    }

    #[inline]
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    pub fn connectors(&self) -> impl Iterator<Item = &ConnectorSegment> {
        self.connectors.iter().map(|c| &c.segment)
    }

    pub fn connector_count(&self) -> usize {
        self.connectors.len()
    }

    /// The pre-selection look recorded for `id`, while it is selected.
    pub fn snapshot(&self, id: EntityId) -> Option<Visual> {
        self.snapshots.get(&id).copied()
    }

    /// Filled slots as `*`, empty as `_`.
    pub fn pin_display(&self) -> String {
        use crate::constants::{PIN_EMPTY, PIN_FILLED};
        (0..self.capacity)
            .map(|i| if i < self.sequence.len() { PIN_FILLED } else { PIN_EMPTY })
            .collect()
    }

    /// Initializing -> Active. Returns false if already past initialization.
    pub fn mark_ready(&mut self) -> bool {
        if self.phase != ModulePhase::Initializing {
            return false;
        }
        self.set_phase(ModulePhase::Active);
        true
    }

    pub fn select(
        &mut self,
        id: EntityId,
        field: &mut PointField,
        ledger: &mut ResourceLedger,
    ) -> SelectOutcome {
        if self.phase != ModulePhase::Active {
            return SelectOutcome::Rejected(Rejection::NotActive);
        }
        if self.sequence.len() >= self.capacity {
            return SelectOutcome::Rejected(Rejection::AtCapacity);
        }
        if self.sequence.contains(&id) {
            return SelectOutcome::Rejected(Rejection::AlreadySelected);
        }
        let Some(entity) = field.get_mut(id) else {
            return SelectOutcome::Rejected(Rejection::UnknownEntity);
        };
        if !entity.selectable || entity.selected {
            return SelectOutcome::Rejected(Rejection::NotSelectable);
        }

        self.snapshots.insert(id, entity.base);
        entity.selectable = false;
        entity.selected = true;
        entity.apply_visual(Visual {
            color: self.style.selected_color,
            opacity: 1.0,
            scale: entity.base.scale * self.style.selected_scale,
        });
        let to = entity.position();

        if let Some(prev) = self.sequence.last().and_then(|p| field.get(*p)) {
            self.connectors.push(LiveConnector {
                segment: ConnectorSegment {
                    from: prev.position(),
                    to,
                    color: self.style.connector_color,
                },
                resource: ledger.acquire(ResourceKind::Connector),
            });
        }
        self.sequence.push(id);
        log::info!(
            "[select] star {} accepted ({}/{})",
            id.0,
            self.sequence.len(),
            self.capacity
        );

        if self.sequence.len() == self.capacity {
            self.set_phase(ModulePhase::SuccessFlash);
            self.apply_flash(field);
            SelectOutcome::Completed
        } else {
            SelectOutcome::Accepted(self.sequence.len())
        }
    }

    fn apply_flash(&mut self, field: &mut PointField) {
        self.flashing = true;
        let flash = self.style.flash_color;
        for id in &self.sequence {
            if let Some(e) = field.get_mut(*id) {
                e.visual.color = flash;
            }
        }
        for c in &mut self.connectors {
            c.segment.color = flash;
        }
    }

    /// Revert the flash colour to the selected/connector colours.
    pub fn end_flash(&mut self, field: &mut PointField) {
        if !self.flashing {
            return;
        }
        self.flashing = false;
        for id in &self.sequence {
            if let Some(e) = field.get_mut(*id) {
                e.visual.color = self.style.selected_color;
            }
        }
        for c in &mut self.connectors {
            c.segment.color = self.style.connector_color;
        }
    }

    /// Deep copy of the selected stars and connectors. Only produced once,
    /// after the flash of a completed sequence.
    pub fn export(&mut self, field: &PointField) -> Option<Signature> {
        if self.phase != ModulePhase::SuccessFlash || self.flashing || self.committed {
            return None;
        }
        self.committed = true;
        let stars = self
            .sequence
            .iter()
            .filter_map(|id| field.get(*id))
            .map(|e| SignatureStar {
                id: e.id,
                position: e.position(),
                color: e.visual.color,
                opacity: e.visual.opacity,
                scale: e.visual.scale,
            })
            .collect();
        let connectors = self.connectors.iter().map(|c| c.segment).collect();
        log::info!("[select] signature exported: {:?}", self.sequence.as_slice());
        Some(Signature { stars, connectors })
    }

    /// SuccessFlash -> FadingOut.
    pub fn begin_fade_out(&mut self) -> bool {
        if self.phase != ModulePhase::SuccessFlash {
            return false;
        }
        self.set_phase(ModulePhase::FadingOut);
        true
    }

    /// Restore every selected star, drop the connectors and empty the
    /// sequence. Only honoured while Active.
    pub fn reset(&mut self, field: &mut PointField, ledger: &mut ResourceLedger) -> bool {
        if self.phase != ModulePhase::Active {
            log::debug!("[select] reset ignored in {:?}", self.phase);
            return false;
        }
        for id in self.sequence.drain(..) {
            if let Some(e) = field.get_mut(id) {
                let original = self.snapshots.get(&id).copied().unwrap_or(e.base);
                e.selected = false;
                e.selectable = true;
                e.apply_visual(original);
            }
        }
        self.snapshots.clear();
        self.release_connectors(ledger);
        log::info!("[select] reset");
        true
    }

    /// Release everything held for teardown, regardless of phase.
    pub fn dispose(&mut self, ledger: &mut ResourceLedger) {
        self.sequence.clear();
        self.snapshots.clear();
        self.release_connectors(ledger);
    }

    fn release_connectors(&mut self, ledger: &mut ResourceLedger) {
        for c in self.connectors.drain(..) {
            ledger.release(c.resource);
        }
    }

    fn set_phase(&mut self, next: ModulePhase) {
        log::info!("[phase] {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}
