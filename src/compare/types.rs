//! Comparison and benchmark report types.
//!
//! Field names are the compatibility surface for the HTTP API and the CLI.
//! Durations serialize as floating-point seconds.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::models::Record;
use crate::search::Strategy;

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Outcome of one strategy for one identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    /// Whether the strategy located a record
    pub found: bool,
    /// Measured lookup time
    #[serde(rename = "execution_time", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
    /// False when the clock failed and `elapsed` is a placeholder zero
    pub reliable_timing: bool,
    /// Nominal time complexity of the strategy
    pub time_complexity: &'static str,
    /// Nominal auxiliary space complexity of the strategy
    pub space_complexity: &'static str,
    /// The located record
    #[serde(rename = "result")]
    pub record: Option<Record>,
}

/// Relative speed of two strategies on one lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedRatio {
    /// Strategy with the lower elapsed time
    pub faster: Strategy,
    /// Strategy with the higher elapsed time
    pub slower: Strategy,
    /// elapsed(slower) / elapsed(faster); `None` when the faster time is zero
    pub ratio: Option<f64>,
}

/// Pairwise speed ratios between the three strategies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedImprovement {
    /// Dictionary lookup against linear scan
    pub dictionary_vs_linear: SpeedRatio,
    /// Binary search against linear scan
    pub binary_vs_linear: SpeedRatio,
    /// Dictionary lookup against binary search
    pub dictionary_vs_binary: SpeedRatio,
}

/// Derived performance fields of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceAnalysis {
    /// Strategy with the lowest elapsed time
    pub fastest_algorithm: Strategy,
    /// Strategy with the highest elapsed time
    pub slowest_algorithm: Strategy,
    /// Pairwise speed ratios
    pub speed_improvement: SpeedImprovement,
    /// Records in the store when the comparison ran
    pub dataset_size: usize,
}

/// All three strategies run against one identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// The queried identifier
    pub transaction_id: u64,
    /// One result per strategy
    pub algorithms: BTreeMap<Strategy, QueryResult>,
    /// Fastest/slowest ranking and speed ratios
    pub performance_analysis: PerformanceAnalysis,
}

impl ComparisonReport {
    /// Result reported by one strategy.
    pub fn result(&self, strategy: Strategy) -> Option<&QueryResult> {
        self.algorithms.get(&strategy)
    }

    /// Whether the identifier was found (all strategies agree by construction).
    pub fn found(&self) -> bool {
        self.algorithms.values().any(|result| result.found)
    }

    /// The located record, if any.
    pub fn record(&self) -> Option<&Record> {
        self.algorithms
            .values()
            .find_map(|result| result.record.as_ref())
    }
}

/// Aggregate statistics for one strategy over a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmStats {
    /// Sum of elapsed times
    #[serde(serialize_with = "serialize_secs")]
    pub total_time: Duration,
    /// Mean elapsed time per identifier
    #[serde(serialize_with = "serialize_secs")]
    pub avg_time: Duration,
    /// Number of identifiers found
    pub hits: usize,
    /// Percentage of identifiers found (0-100)
    pub success_rate: f64,
    /// Measurements recorded as zero because the clock failed
    pub unreliable_measurements: usize,
}

/// Results of comparing every strategy over a batch of identifiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    /// Number of identifiers in the batch
    pub test_cases: usize,
    /// Records in the store when the batch ran
    pub dataset_size: usize,
    /// Per-strategy aggregates
    pub algorithms: BTreeMap<Strategy, AlgorithmStats>,
    /// One comparison per identifier, in batch order
    pub detailed_results: Vec<ComparisonReport>,
}

impl BenchmarkReport {
    /// Aggregates for one strategy.
    pub fn stats(&self, strategy: Strategy) -> Option<&AlgorithmStats> {
        self.algorithms.get(&strategy)
    }

    /// Logs a summary of the benchmark.
    pub fn log_summary(&self) {
        log::info!(
            "=== Benchmark Summary ({} lookups, {} transactions) ===",
            self.test_cases,
            self.dataset_size
        );
        for (strategy, stats) in &self.algorithms {
            log::info!(
                "  {:20} avg {:>10}μs  total {:>10}μs  success {:.1}%",
                strategy.title(),
                crate::utils::duration_to_micros(stats.avg_time),
                crate::utils::duration_to_micros(stats.total_time),
                stats.success_rate
            );
            if stats.unreliable_measurements > 0 {
                log::info!(
                    "  {:20} {} measurement(s) recorded as 0 (clock unavailable)",
                    "",
                    stats.unreliable_measurements
                );
            }
        }
    }
}
