//! Timing harness for lookup measurements.
//!
//! Lookups are timed through a [`Clock`] so the source of timestamps is an
//! injectable instrumentation hook. Measurements are best-effort wall-clock
//! values and never feed into lookup correctness.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Source of monotonic timestamps.
///
/// `None` means the clock could not produce a reading.
pub trait Clock: Send + Sync {
    /// Current instant, if available.
    fn now(&self) -> Option<Instant>;
}

/// The platform monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Option<Instant> {
        Some(Instant::now())
    }
}

/// Clock that replays a fixed list of readings.
///
/// Each scripted measurement consumes two readings. Once the script is
/// exhausted the clock reports itself unavailable.
#[derive(Debug)]
pub struct ScriptedClock {
    readings: Mutex<VecDeque<Option<Instant>>>,
}

impl ScriptedClock {
    /// Scripts one measurement per entry: `Some(d)` yields an elapsed time of
    /// exactly `d`, `None` simulates a failed clock read.
    pub fn from_durations(durations: &[Option<Duration>]) -> Self {
        let base = Instant::now();
        let mut readings = VecDeque::with_capacity(durations.len() * 2);
        for duration in durations {
            match duration {
                Some(elapsed) => {
                    readings.push_back(Some(base));
                    readings.push_back(Some(base + *elapsed));
                }
                None => {
                    readings.push_back(None);
                    readings.push_back(None);
                }
            }
        }
        Self {
            readings: Mutex::new(readings),
        }
    }
}

impl Clock for ScriptedClock {
    fn now(&self) -> Option<Instant> {
        self.readings
            .lock()
            .ok()
            .and_then(|mut readings| readings.pop_front())
            .flatten()
    }
}

/// Elapsed time of one timed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measurement {
    /// Elapsed wall-clock time; zero when unreliable
    pub elapsed: Duration,
    /// False when the clock failed and `elapsed` is a placeholder
    pub reliable: bool,
}

impl Measurement {
    /// A zero-length measurement flagged as unreliable.
    pub fn unreliable() -> Self {
        Self {
            elapsed: Duration::ZERO,
            reliable: false,
        }
    }
}

/// Runs `operation` between two clock readings.
///
/// Nothing but the two reads happens inside the timed window. A failed read,
/// or an end reading earlier than the start, yields
/// [`Measurement::unreliable`]; the operation's result is returned either way.
pub fn measure<C, T, F>(clock: &C, operation: F) -> (T, Measurement)
where
    C: Clock + ?Sized,
    F: FnOnce() -> T,
{
    let start = clock.now();
    let result = operation();
    let end = clock.now();

    let measurement = match (start, end) {
        (Some(start), Some(end)) => end
            .checked_duration_since(start)
            .map(|elapsed| Measurement {
                elapsed,
                reliable: true,
            })
            .unwrap_or_else(Measurement::unreliable),
        _ => Measurement::unreliable(),
    };
    if !measurement.reliable {
        log::warn!("Clock reading unavailable; recording elapsed time as 0");
    }

    (result, measurement)
}

/// Converts a Duration to microseconds.
pub fn duration_to_micros(duration: Duration) -> u64 {
    duration.as_micros() as u64
}
