//! Comparison engine.
//!
//! A [`Comparator`] runs every [`Strategy`] against one committed snapshot of a
//! [`RecordStore`], timing each lookup through a [`Clock`], and cross-checks
//! that all three agree before reporting.
//!
//! The comparator never rebuilds indices. Callers that mutate the store do so
//! through `RecordStore`'s mutation methods, which keep the indices current.

mod analysis;
mod benchmark;
mod types;

use std::collections::BTreeMap;
use std::time::Duration;

use log::debug;
use strum::IntoEnumIterator;

use crate::error_handling::SearchError;
use crate::models::Record;
use crate::search::Strategy;
use crate::store::RecordStore;
use crate::utils::{measure, Clock, MonotonicClock};

pub use analysis::{fastest, slowest, speed_ratio};
pub use types::{
    AlgorithmStats, BenchmarkReport, ComparisonReport, PerformanceAnalysis, QueryResult,
    SpeedImprovement, SpeedRatio,
};

/// Runs and compares the lookup strategies over a borrowed store.
pub struct Comparator<'a, C: Clock + ?Sized = MonotonicClock> {
    store: &'a RecordStore,
    clock: &'a C,
}

impl<'a> Comparator<'a, MonotonicClock> {
    /// Comparator timed by the platform monotonic clock.
    pub fn new(store: &'a RecordStore) -> Self {
        Self {
            store,
            clock: &MonotonicClock,
        }
    }
}

impl<'a, C: Clock + ?Sized> Comparator<'a, C> {
    /// Comparator timed by a caller-supplied clock.
    pub fn with_clock(store: &'a RecordStore, clock: &'a C) -> Self {
        Self { store, clock }
    }

    /// The store this comparator reads.
    pub fn store(&self) -> &'a RecordStore {
        self.store
    }

    /// Looks `id` up with every strategy and reports results and timings.
    ///
    /// # Errors
    ///
    /// - `SearchError::InvalidInput` if `id` is zero
    /// - `SearchError::InconsistentIndex` if the identifier is shared by
    ///   several records or the strategies disagree
    pub fn compare(&self, id: u64) -> Result<ComparisonReport, SearchError> {
        validate_identifier(id)?;
        if self.store.index().duplicates().contains(&id) {
            return Err(SearchError::InconsistentIndex {
                id,
                detail: "identifier is shared by multiple records".to_string(),
            });
        }

        let mut located: Vec<(Strategy, Option<&Record>)> = Vec::with_capacity(3);
        let mut results = BTreeMap::new();
        let mut timings: BTreeMap<Strategy, Duration> = BTreeMap::new();

        for strategy in Strategy::iter() {
            let (record, measurement) = measure(self.clock, || strategy.locate(self.store, id));
            located.push((strategy, record));
            timings.insert(strategy, measurement.elapsed);
            results.insert(
                strategy,
                QueryResult {
                    found: record.is_some(),
                    elapsed: measurement.elapsed,
                    reliable_timing: measurement.reliable,
                    time_complexity: strategy.time_complexity(),
                    space_complexity: strategy.space_complexity(),
                    record: record.cloned(),
                },
            );
        }

        check_agreement(id, &located)?;

        let performance_analysis = analysis::analyze(&timings, self.store.len());
        debug!(
            "Compared transaction {}: fastest={}, slowest={}",
            id, performance_analysis.fastest_algorithm, performance_analysis.slowest_algorithm
        );

        Ok(ComparisonReport {
            transaction_id: id,
            algorithms: results,
            performance_analysis,
        })
    }
}

fn validate_identifier(id: u64) -> Result<(), SearchError> {
    if id == 0 {
        return Err(SearchError::InvalidInput(
            "transaction ID must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

/// All strategies must agree on presence and resolve to the same stored record.
fn check_agreement(id: u64, located: &[(Strategy, Option<&Record>)]) -> Result<(), SearchError> {
    let inconsistent = |detail: String| SearchError::InconsistentIndex { id, detail };

    for (strategy, record) in located {
        if let Some(record) = record {
            if record.id != id {
                return Err(inconsistent(format!(
                    "{} resolved transaction {}",
                    strategy, record.id
                )));
            }
        }
    }

    let Some(&(reference_strategy, reference)) = located.first() else {
        return Ok(());
    };
    for &(strategy, record) in &located[1..] {
        let agrees = match (reference, record) {
            (None, None) => true,
            (Some(expected), Some(actual)) => std::ptr::eq(expected, actual),
            _ => false,
        };
        if !agrees {
            return Err(inconsistent(format!(
                "{} found={} but {} found={}",
                strategy,
                record.is_some(),
                reference_strategy,
                reference.is_some()
            )));
        }
    }
    Ok(())
}
