//! Non-blocking delivery of affected-point counts.
//!
//! The engine publishes the affected count of every apply into a bounded
//! channel without waiting for a reader. The frame loop polls
//! [`AffectedCountMonitor::latest`] on a later tick. A full channel drops
//! the newest count; the count is advisory only.

use crossbeam_channel::{Receiver, Sender, TryRecvError, bounded};
use log::{debug, warn};

/// Channel capacity (applies are user-triggered, a handful per second at most)
const CHANNEL_CAPACITY: usize = 64;

/// Affected count of one apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffectedCount {
    /// Engine sequence number of the apply
    pub sequence: u64,
    /// Points that received a positive strength
    pub affected: usize,
}

/// Receiving end of the affected-count channel.
#[derive(Debug)]
pub struct AffectedCountMonitor {
    tx: Sender<AffectedCount>,
    rx: Receiver<AffectedCount>,
    last: Option<AffectedCount>,
}

impl Default for AffectedCountMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl AffectedCountMonitor {
    /// Create a monitor with an empty channel
    pub fn new() -> Self {
        let (tx, rx) = bounded(CHANNEL_CAPACITY);
        Self { tx, rx, last: None }
    }

    /// Sender to hand to a [`DeformationEngine`](super::DeformationEngine)
    pub fn sender(&self) -> Sender<AffectedCount> {
        self.tx.clone()
    }

    /// Drain pending counts and return the most recent one seen so far.
    pub fn latest(&mut self) -> Option<AffectedCount> {
        loop {
            match self.rx.try_recv() {
                Ok(count) => {
                    debug!(
                        "[Diagnostics] Apply #{} affected {} points",
                        count.sequence, count.affected
                    );
                    self.last = Some(count);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("[Diagnostics] Affected count channel disconnected");
                    break;
                }
            }
        }
        self.last
    }

    /// Number of counts waiting to be polled
    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_keeps_newest() {
        let mut monitor = AffectedCountMonitor::new();
        assert!(monitor.latest().is_none());

        let tx = monitor.sender();
        tx.try_send(AffectedCount { sequence: 1, affected: 10 }).unwrap();
        tx.try_send(AffectedCount { sequence: 2, affected: 3 }).unwrap();
        assert_eq!(monitor.pending(), 2);

        let latest = monitor.latest().unwrap();
        assert_eq!(latest.sequence, 2);
        assert_eq!(latest.affected, 3);
        assert_eq!(monitor.pending(), 0);

        // Stays available without new counts
        assert_eq!(monitor.latest(), Some(latest));
    }

    #[test]
    fn test_full_channel_never_blocks() {
        let monitor = AffectedCountMonitor::new();
        let tx = monitor.sender();
        for i in 0..(CHANNEL_CAPACITY as u64 + 10) {
            tx.try_send(AffectedCount { sequence: i, affected: 0 }).ok();
        }
        assert_eq!(monitor.pending(), CHANNEL_CAPACITY);
    }
}
