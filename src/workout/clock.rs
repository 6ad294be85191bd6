//! Session clock - monotonic seconds for rest countdowns
//!
//! The sequencer never reads a clock itself; callers pass `now` in. These
//! sources produce that value in the browser, natively, and in tests.

use std::cell::Cell;

/// Monotonic time source, in seconds from an arbitrary origin
pub trait SessionClock {
    fn now(&self) -> f64;
}

/// Hand-driven clock for deterministic tests and replays
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self { now: Cell::new(start) }
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }

    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }
}

impl SessionClock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Native monotonic clock
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionClock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Browser clock backed by `performance.now()`
///
/// Falls back to `Date.now()` (not monotonic) when no `Performance`
/// object is available, e.g. inside some worker contexts.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct PerformanceClock {
    performance: Option<web_sys::Performance>,
}

#[cfg(target_arch = "wasm32")]
impl PerformanceClock {
    pub fn new() -> Self {
        let performance = web_sys::window().and_then(|w| w.performance());
        if performance.is_none() {
            log::warn!("performance.now() unavailable, falling back to Date.now()");
        }
        Self { performance }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for PerformanceClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionClock for PerformanceClock {
    fn now(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now() / 1000.0,
            None => js_sys::Date::now() / 1000.0,
        }
    }
}

/// The clock the browser bridge uses on this target
#[cfg(target_arch = "wasm32")]
pub type DefaultClock = PerformanceClock;

#[cfg(not(target_arch = "wasm32"))]
pub type DefaultClock = MonotonicClock;

/// Format seconds as `MM:SS` for timer display; negative input shows `00:00`
pub fn format_clock(seconds: f64) -> String {
    let total = seconds.max(0.0).ceil() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(10.0);
        clock.advance(2.5);
        assert_eq!(clock.now(), 12.5);
        clock.set(1.0);
        assert_eq!(clock.now(), 1.0);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_monotonic_clock_never_goes_back() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(59.2), "01:00");
        assert_eq!(format_clock(61.0), "01:01");
        assert_eq!(format_clock(300.0), "05:00");
        assert_eq!(format_clock(-3.0), "00:00");
    }
}
