use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Timestamp source for record metadata.
///
/// Values are nanoseconds since the Unix epoch and never decrease across
/// calls, even if the wall clock steps backwards.
pub trait Clock: Send + Sync {
    fn now_ns(&self) -> u64;
}

/// Wall-clock implementation, clamped monotone.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicU64,
}

impl Clock for SystemClock {
    fn now_ns(&self) -> u64 {
        let wall = Utc::now().timestamp_nanos_opt().unwrap_or_default().max(0) as u64;
        let prev = self.last.fetch_max(wall, Ordering::AcqRel);
        prev.max(wall)
    }
}

/// Fixed clock for tests; advance it explicitly.
#[cfg(test)]
pub struct ManualClock {
    now: AtomicU64,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self {
            now: AtomicU64::new(start),
        }
    }

    pub fn advance(&self, ns: u64) {
        self.now.fetch_add(ns, Ordering::SeqCst);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now_ns(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_non_decreasing() {
        let clock = SystemClock::default();
        let a = clock.now_ns();
        let b = clock.now_ns();
        let c = clock.now_ns();
        assert!(a <= b);
        assert!(b <= c);
    }

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_ns(), 100);
        clock.advance(50);
        assert_eq!(clock.now_ns(), 150);
    }
}
