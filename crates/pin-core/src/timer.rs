//! One-shot deadlines standing in for delayed callbacks.
//!
//! Hosts ask for [`Timers::next_deadline`] to schedule a wake-up and feed the
//! current time back in; cancelled timers simply never come due.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Success flash is over: commit the signature and start fading.
    FlashEnd,
    /// Fade-out is over: hide the module.
    FadeEnd,
    /// Hidden long enough: tell the host we are done.
    Finish,
}

#[derive(Clone, Copy, Debug)]
struct Timer {
    kind: TimerKind,
    due: f64,
    epoch: u64,
}

#[derive(Debug, Default)]
pub struct Timers {
    epoch: u64,
    pending: SmallVec<[Timer; 2]>,
}

impl Timers {
    pub fn schedule(&mut self, kind: TimerKind, due: f64) {
        self.pending.push(Timer {
            kind,
            due,
            epoch: self.epoch,
        });
    }

    /// Cancel everything pending. Safe to call any number of times.
    pub fn cancel_all(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.pending.clear();
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.pending
            .iter()
            .filter(|t| t.epoch == self.epoch)
            .map(|t| t.due)
            .reduce(f64::min)
    }

    /// Remove and return the earliest timer due at `now`, if any.
    pub fn pop_due(&mut self, now: f64) -> Option<TimerKind> {
        let epoch = self.epoch;
        self.pending.retain(|t| t.epoch == epoch);
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by(|a, b| a.1.due.total_cmp(&b.1.due))
            .map(|(i, _)| i)?;
        Some(self.pending.remove(idx).kind)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order_once() {
        let mut timers = Timers::default();
        timers.schedule(TimerKind::FadeEnd, 2.0);
        timers.schedule(TimerKind::FlashEnd, 1.0);
        assert_eq!(timers.next_deadline(), Some(1.0));
        assert_eq!(timers.pop_due(0.5), None);
        assert_eq!(timers.pop_due(5.0), Some(TimerKind::FlashEnd));
        assert_eq!(timers.pop_due(5.0), Some(TimerKind::FadeEnd));
        assert_eq!(timers.pop_due(5.0), None);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut timers = Timers::default();
        timers.schedule(TimerKind::Finish, 1.0);
        timers.cancel_all();
        timers.cancel_all();
        assert_eq!(timers.next_deadline(), None);
        assert_eq!(timers.pop_due(10.0), None);
        assert!(timers.is_empty());
    }
}
