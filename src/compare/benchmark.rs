//! Batch comparison with per-strategy aggregates.

use std::collections::BTreeMap;
use std::time::Duration;

use strum::IntoEnumIterator;

use crate::error_handling::SearchError;
use crate::search::Strategy;
use crate::utils::Clock;

use super::types::{AlgorithmStats, BenchmarkReport};
use super::{validate_identifier, Comparator};

#[derive(Default)]
struct Accumulator {
    total: Duration,
    hits: usize,
    unreliable: usize,
}

impl<C: Clock + ?Sized> Comparator<'_, C> {
    /// Compares every identifier in `ids` and aggregates the results.
    ///
    /// Identifiers are validated before any lookup runs. Detailed results keep
    /// the order of `ids`.
    ///
    /// # Errors
    ///
    /// - `SearchError::InvalidInput` if `ids` is empty or contains zero
    /// - `SearchError::InconsistentIndex` from any individual comparison
    pub fn benchmark(&self, ids: &[u64]) -> Result<BenchmarkReport, SearchError> {
        if ids.is_empty() {
            return Err(SearchError::InvalidInput(
                "benchmark requires at least one transaction ID".to_string(),
            ));
        }
        for &id in ids {
            validate_identifier(id)?;
        }

        let mut accumulators: BTreeMap<Strategy, Accumulator> = Strategy::iter()
            .map(|strategy| (strategy, Accumulator::default()))
            .collect();
        let mut detailed_results = Vec::with_capacity(ids.len());

        for &id in ids {
            let comparison = self.compare(id)?;
            for (strategy, result) in &comparison.algorithms {
                let acc = accumulators.entry(*strategy).or_default();
                acc.total += result.elapsed;
                if result.found {
                    acc.hits += 1;
                }
                if !result.reliable_timing {
                    acc.unreliable += 1;
                }
            }
            detailed_results.push(comparison);
        }

        let test_cases = ids.len();
        let algorithms = accumulators
            .into_iter()
            .map(|(strategy, acc)| {
                let avg_nanos = acc.total.as_nanos() / test_cases as u128;
                let stats = AlgorithmStats {
                    total_time: acc.total,
                    avg_time: Duration::from_nanos(avg_nanos as u64),
                    hits: acc.hits,
                    success_rate: acc.hits as f64 / test_cases as f64 * 100.0,
                    unreliable_measurements: acc.unreliable,
                };
                (strategy, stats)
            })
            .collect();

        Ok(BenchmarkReport {
            test_cases,
            dataset_size: self.store().len(),
            algorithms,
            detailed_results,
        })
    }
}
