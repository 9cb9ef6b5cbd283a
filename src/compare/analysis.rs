//! Fastest/slowest ranking and speed ratios.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::search::Strategy;

use super::types::{PerformanceAnalysis, SpeedImprovement, SpeedRatio};

fn elapsed_of(timings: &BTreeMap<Strategy, Duration>, strategy: Strategy) -> Duration {
    timings.get(&strategy).copied().unwrap_or_default()
}

/// Walks `precedence` and keeps the first strategy no later one strictly beats.
fn pick<F>(timings: &BTreeMap<Strategy, Duration>, precedence: &[Strategy], beats: F) -> Strategy
where
    F: Fn(Duration, Duration) -> bool,
{
    let mut best = precedence[0];
    let mut best_time = elapsed_of(timings, best);
    for &candidate in &precedence[1..] {
        let time = elapsed_of(timings, candidate);
        if beats(time, best_time) {
            best = candidate;
            best_time = time;
        }
    }
    best
}

/// Strategy with the lowest elapsed time; ties go to the earlier entry of
/// [`Strategy::FASTEST_PRECEDENCE`].
pub fn fastest(timings: &BTreeMap<Strategy, Duration>) -> Strategy {
    pick(timings, &Strategy::FASTEST_PRECEDENCE, |time, best| time < best)
}

/// Strategy with the highest elapsed time; ties go to the earlier entry of
/// [`Strategy::SLOWEST_PRECEDENCE`].
pub fn slowest(timings: &BTreeMap<Strategy, Duration>) -> Strategy {
    pick(timings, &Strategy::SLOWEST_PRECEDENCE, |time, best| time > best)
}

/// Ratio of the slower strategy's time to the faster one's.
pub fn speed_ratio(timings: &BTreeMap<Strategy, Duration>, a: Strategy, b: Strategy) -> SpeedRatio {
    let mut pair = [a, b];
    pair.sort_by_key(|strategy| {
        Strategy::FASTEST_PRECEDENCE
            .iter()
            .position(|candidate| candidate == strategy)
    });
    let faster = pick(timings, &pair, |time, best| time < best);
    let slower = if faster == a { b } else { a };

    let faster_time = elapsed_of(timings, faster);
    let ratio = if faster_time.is_zero() {
        None
    } else {
        Some(elapsed_of(timings, slower).as_nanos() as f64 / faster_time.as_nanos() as f64)
    };

    SpeedRatio {
        faster,
        slower,
        ratio,
    }
}

/// Builds the performance analysis for one comparison.
pub fn analyze(timings: &BTreeMap<Strategy, Duration>, dataset_size: usize) -> PerformanceAnalysis {
    PerformanceAnalysis {
        fastest_algorithm: fastest(timings),
        slowest_algorithm: slowest(timings),
        speed_improvement: SpeedImprovement {
            dictionary_vs_linear: speed_ratio(
                timings,
                Strategy::DictionaryLookup,
                Strategy::LinearSearch,
            ),
            binary_vs_linear: speed_ratio(timings, Strategy::BinarySearch, Strategy::LinearSearch),
            dictionary_vs_binary: speed_ratio(
                timings,
                Strategy::DictionaryLookup,
                Strategy::BinarySearch,
            ),
        },
        dataset_size,
    }
}
