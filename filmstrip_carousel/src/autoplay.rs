// Copyright 2026 the Filmstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline cell for the periodic advance.

/// Schedules the automatic advance as a single pending deadline.
///
/// This is the host-agnostic shape of a repeating timer. The controller arms
/// a deadline and the host polls it (or sleeps until [`Autoplay::deadline`]);
/// firing disarms the cell until the advance re-arms it. There is never more
/// than one pending deadline, so advances cannot overlap and cancellation is
/// a single `None`.
#[derive(Clone, Debug)]
pub struct Autoplay {
    interval_ms: u64,
    deadline: Option<u64>,
}

impl Autoplay {
    /// Creates a disarmed cell with the given period (clamped to ≥ 1 ms).
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            deadline: None,
        }
    }

    /// The period between advances.
    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// The pending deadline, if armed.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arms (or re-arms) the deadline at `now + interval`.
    ///
    /// Any pending deadline is replaced, so repeated arming pushes the next
    /// advance out rather than queueing several.
    pub fn arm(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.interval_ms));
    }

    /// Cancels the pending deadline; idempotent when already disarmed.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Fires if the deadline has passed, disarming it.
    ///
    /// Returns `true` at most once per arm; the caller re-arms after its
    /// advance settles.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(at) if now_ms >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Autoplay;

    #[test]
    fn new_cell_is_disarmed() {
        let mut autoplay = Autoplay::new(3_000);
        assert!(!autoplay.is_armed());
        assert_eq!(autoplay.deadline(), None);
        assert!(!autoplay.fire(1_000_000));
    }

    #[test]
    fn arm_schedules_one_interval_out() {
        let mut autoplay = Autoplay::new(3_000);
        autoplay.arm(500);
        assert_eq!(autoplay.deadline(), Some(3_500));
    }

    #[test]
    fn rearming_replaces_the_deadline() {
        let mut autoplay = Autoplay::new(3_000);
        autoplay.arm(0);
        autoplay.arm(1_000);
        assert_eq!(autoplay.deadline(), Some(4_000));
    }

    #[test]
    fn fire_is_edge_triggered() {
        let mut autoplay = Autoplay::new(100);
        autoplay.arm(0);
        assert!(!autoplay.fire(99));
        assert!(autoplay.fire(100));
        // Fired and disarmed: the same deadline never fires twice.
        assert!(!autoplay.fire(100));
        assert!(!autoplay.is_armed());
    }

    #[test]
    fn disarm_is_idempotent() {
        let mut autoplay = Autoplay::new(100);
        autoplay.disarm();
        autoplay.arm(0);
        autoplay.disarm();
        autoplay.disarm();
        assert!(!autoplay.fire(10_000));
    }

    #[test]
    fn zero_interval_is_clamped() {
        let autoplay = Autoplay::new(0);
        assert_eq!(autoplay.interval_ms(), 1);
    }
}
