use std::cell::Cell;
use std::time::Instant;

/// Monotonic microsecond time source consumed by the run loop.
pub trait Clock {
    /// Returns the current time in microseconds.
    ///
    /// Values must never decrease between calls.
    fn now_us(&self) -> u64;
}

/// Clock backed by `std::time::Instant`.
///
/// Timestamps are measured from the moment the clock was created, so the first
/// reading is close to zero.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_us(&self) -> u64 {
        let elapsed = Instant::now().saturating_duration_since(self.origin);
        u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
    }
}

/// Manually advanced clock.
///
/// Useful for deterministic capture hosts and for tests that need exact deltas.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_us: u64) -> Self {
        Self {
            now: Cell::new(start_us),
        }
    }

    /// Moves the clock forward by `delta_us`.
    pub fn advance(&self, delta_us: u64) {
        self.now.set(self.now.get().saturating_add(delta_us));
    }

    /// Sets the absolute time. Callers are responsible for keeping it monotonic.
    pub fn set(&self, now_us: u64) {
        debug_assert!(now_us >= self.now.get());
        self.now.set(now_us);
    }
}

impl Clock for ManualClock {
    fn now_us(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_us();
        let b = clock.now_us();
        assert!(b >= a);
    }

    #[test]
    fn manual_clock_advances_by_exact_amount() {
        let clock = ManualClock::new(1_000);
        clock.advance(16_667);
        assert_eq!(clock.now_us(), 17_667);
        clock.set(20_000);
        assert_eq!(clock.now_us(), 20_000);
    }
}
