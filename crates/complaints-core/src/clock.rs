//! Clock abstraction for determinism.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, SecondsFormat, Utc};

/// Abstraction over system time for deterministic behavior.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Wraps another clock and never hands out an instant earlier than one it
/// has already returned, even if the wrapped clock steps backwards.
#[derive(Debug)]
pub struct MonotonicClock<C> {
    inner: C,
    high_water_micros: AtomicI64,
}

impl<C: Clock> MonotonicClock<C> {
    /// Create a monotonic view over `inner`.
    #[must_use]
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            high_water_micros: AtomicI64::new(i64::MIN),
        }
    }
}

impl<C: Clock> Clock for MonotonicClock<C> {
    fn now(&self) -> DateTime<Utc> {
        let observed = self.inner.now();
        let candidate = observed.timestamp_micros();
        let previous = self
            .high_water_micros
            .fetch_max(candidate, Ordering::AcqRel);

        if previous <= candidate {
            return observed;
        }
        DateTime::from_timestamp_micros(previous).unwrap_or(observed)
    }
}

/// Formats an instant the way every timestamp on the wire is formatted:
/// RFC 3339, UTC, whole seconds, `Z` suffix.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::TimeZone;

    use super::*;

    /// Replays a fixed list of instants, one per call.
    struct ScriptedClock(Mutex<Vec<DateTime<Utc>>>);

    impl Clock for ScriptedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0.lock().unwrap().remove(0)
        }
    }

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, secs).unwrap()
    }

    #[test]
    fn test_monotonic_clock_holds_when_inner_clock_steps_back() {
        // Arrange
        let inner = ScriptedClock(Mutex::new(vec![at(10), at(5), at(12)]));
        let clock = MonotonicClock::new(inner);

        // Act
        let readings: Vec<_> = (0..3).map(|_| clock.now()).collect();

        // Assert
        assert_eq!(readings, vec![at(10), at(10), at(12)]);
    }

    #[test]
    fn test_monotonic_clock_over_system_clock_is_non_decreasing() {
        let clock = MonotonicClock::new(SystemClock);

        let readings: Vec<_> = (0..100).map(|_| clock.now()).collect();

        assert!(readings.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_format_timestamp_is_rfc3339_seconds_utc() {
        let formatted = format_timestamp(at(7));

        assert_eq!(formatted, "2026-01-15T10:00:07Z");
    }

    #[test]
    fn test_format_timestamp_sorts_lexicographically() {
        let earlier = format_timestamp(at(9));
        let later = format_timestamp(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 10).unwrap());

        assert!(earlier < later);
    }
}
