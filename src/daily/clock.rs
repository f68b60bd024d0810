//! Sources for "now" and for the stored day offset

use std::cell::Cell;

/// Wall-clock time source
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_ms(&self) -> i64;
}

/// The system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to
#[derive(Debug, Default)]
pub struct FixedClock {
    now_ms: Cell<i64>,
}

impl FixedClock {
    #[must_use]
    pub const fn new(now_ms: i64) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
        }
    }

    pub fn set(&self, now_ms: i64) {
        self.now_ms.set(now_ms);
    }

    pub fn advance(&self, ms: i64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

/// Stored shift applied to the day index (0 when nothing is stored)
pub trait IndexOffset {
    fn index_offset(&self) -> i64;
}

impl IndexOffset for i64 {
    fn index_offset(&self) -> i64 {
        *self
    }
}

impl IndexOffset for Cell<i64> {
    fn index_offset(&self) -> i64 {
        self.get()
    }
}

impl<O: IndexOffset + ?Sized> IndexOffset for &O {
    fn index_offset(&self) -> i64 {
        (**self).index_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_moves_on_request() {
        let clock = FixedClock::new(1_000);
        assert_eq!(clock.now_ms(), 1_000);

        clock.advance(500);
        assert_eq!(clock.now_ms(), 1_500);

        clock.set(42);
        assert_eq!((&clock).now_ms(), 42);
    }

    #[test]
    fn system_clock_is_after_epoch() {
        assert!(SystemClock.now_ms() > crate::daily::EPOCH_MS);
    }

    #[test]
    fn offsets() {
        assert_eq!(7_i64.index_offset(), 7);

        let stored = Cell::new(0_i64);
        assert_eq!((&stored).index_offset(), 0);
        stored.set(-2);
        assert_eq!(stored.index_offset(), -2);
    }
}
