//! Bookkeeping for render-side resources.
//!
//! The core never owns GPU or canvas objects, but every star and connector it
//! creates corresponds to one on the renderer side. Handles are issued here and
//! released ids are queued until the renderer is handed them.

use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(u64);

impl ResourceId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Star,
    Connector,
}

#[derive(Debug, Default)]
pub struct ResourceLedger {
    next: u64,
    live: FnvHashMap<ResourceId, ResourceKind>,
    released: Vec<ResourceId>,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self, kind: ResourceKind) -> ResourceId {
        let id = ResourceId(self.next);
        self.next += 1;
        self.live.insert(id, kind);
        id
    }

    /// Returns false if the id was not live (double release is a no-op).
    pub fn release(&mut self, id: ResourceId) -> bool {
        if self.live.remove(&id).is_some() {
            self.released.push(id);
            true
        } else {
            false
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn live_of(&self, kind: ResourceKind) -> usize {
        self.live.values().filter(|k| **k == kind).count()
    }

    /// Hand the queued releases to the caller, leaving the queue empty.
    pub fn drain_released(&mut self) -> Vec<ResourceId> {
        std::mem::take(&mut self.released)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_is_idempotent() {
        let mut ledger = ResourceLedger::new();
        let a = ledger.acquire(ResourceKind::Star);
        let b = ledger.acquire(ResourceKind::Connector);
        assert_ne!(a, b);
        assert!(ledger.release(a));
        assert!(!ledger.release(a));
        assert_eq!(ledger.drain_released(), vec![a]);
        assert_eq!(ledger.live_of(ResourceKind::Connector), 1);
        assert!(ledger.release(b));
        assert_eq!(ledger.live_count(), 0);
        assert_eq!(ledger.drain_released(), vec![b]);
    }
}
