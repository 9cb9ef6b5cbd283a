//! sms_search library: SMS transaction store and lookup comparison engine
//!
//! The store keeps one dataset in three representations (insertion order,
//! keyed index, identifier-sorted sequence) and looks records up with three
//! matching algorithms: linear scan, dictionary lookup and binary search.
//! The comparison engine runs all three for an identifier, checks they agree,
//! and reports timings and per-strategy aggregates over batches.
//!
//! # Example
//!
//! ```no_run
//! use sms_search::{Comparator, DuplicatePolicy, RecordStore};
//! use sms_search::storage::sample_transactions;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = RecordStore::from_json(sample_transactions(), DuplicatePolicy::Reject)?;
//! let comparator = Comparator::new(&store);
//!
//! let report = comparator.compare(2)?;
//! println!("fastest: {}", report.performance_analysis.fastest_algorithm);
//!
//! let benchmark = comparator.benchmark(&[1, 2, 3])?;
//! benchmark.log_summary();
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The engine itself is synchronous. [`serve`] requires a Tokio runtime.

#![warn(missing_docs)]

pub mod api;
pub mod compare;
pub mod config;
pub mod demo;
mod error_handling;
pub mod initialization;
mod models;
pub mod search;
pub mod storage;
mod store;
pub mod utils;

// Re-export public API
pub use compare::{BenchmarkReport, Comparator, ComparisonReport, QueryResult};
pub use config::{DemoConfig, LogFormat, LogLevel, ServerConfig};
pub use error_handling::{InitializationError, LoadError, SearchError, StoreError};
pub use models::Record;
pub use run::{build_store, run_demo, serve, DemoReport};
pub use search::Strategy;
pub use store::{assign_identifiers, DuplicatePolicy, RecordStore, SearchIndex};

// Application entry points shared by the binary and embedders
mod run {
    use std::path::Path;
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::api::{start_api_server, StaticCredentials};
    use crate::compare::{BenchmarkReport, Comparator, ComparisonReport};
    use crate::config::{duplicate_policy, DemoConfig, ServerConfig};
    use crate::demo::default_benchmark_ids;
    use crate::error_handling::StoreError;
    use crate::storage::{load_transactions, sample_transactions};
    use crate::store::{DuplicatePolicy, RecordStore};

    /// Reports produced by [`run_demo`].
    #[derive(Debug, Clone)]
    pub struct DemoReport {
        /// Comparison for the requested identifier
        pub comparison: ComparisonReport,
        /// Benchmark over the requested or default identifiers
        pub benchmark: BenchmarkReport,
    }

    /// Loads `data_file` and builds a store from it.
    ///
    /// An unreadable file, or one whose entries are not objects with positive
    /// integer identifiers, yields an empty dataset; with `use_sample` the
    /// built-in sample replaces an empty dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the records carry duplicate identifiers under
    /// [`DuplicatePolicy::Reject`].
    pub fn build_store(
        data_file: &Path,
        policy: DuplicatePolicy,
        use_sample: bool,
    ) -> Result<RecordStore> {
        let mut transactions = load_transactions(data_file);
        if transactions.is_empty() && use_sample {
            info!("Using sample data for demonstration...");
            transactions = sample_transactions();
        }
        let store = match RecordStore::from_json(transactions, policy) {
            Ok(store) => store,
            Err(e @ (StoreError::InvalidIdentifier(_) | StoreError::NotAnObject)) => {
                warn!(
                    "{} ({}). Starting with empty dataset.",
                    e,
                    data_file.display()
                );
                let fallback = if use_sample {
                    info!("Using sample data for demonstration...");
                    sample_transactions()
                } else {
                    Vec::new()
                };
                RecordStore::from_json(fallback, policy)?
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to index transactions from {}", data_file.display())
                })
            }
        };
        info!("Dataset size: {} transactions", store.len());
        Ok(store)
    }

    /// Runs the API server until it fails or the process exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be indexed, the credentials are
    /// malformed, or the listener cannot bind.
    pub async fn serve(config: ServerConfig) -> Result<()> {
        let store = build_store(
            &config.data_file,
            duplicate_policy(config.strict_identifiers),
            false,
        )?;
        let credentials = StaticCredentials::parse(config.credentials.as_slice())
            .context("Failed to parse API credentials")?;

        start_api_server(&config.bind, config.port, store, Arc::new(credentials)).await
    }

    /// Compares one identifier and benchmarks a batch over the demo dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be indexed or a lookup is
    /// rejected (zero identifier, inconsistent index).
    pub fn run_demo(config: &DemoConfig) -> Result<DemoReport> {
        let store = build_store(
            &config.data_file,
            duplicate_policy(config.strict_identifiers),
            true,
        )?;
        let comparator = Comparator::new(&store);

        let comparison = comparator
            .compare(config.id)
            .with_context(|| format!("Failed to compare transaction {}", config.id))?;

        let ids = config
            .benchmark_ids
            .clone()
            .unwrap_or_else(|| default_benchmark_ids(store.len()));
        let benchmark = comparator
            .benchmark(&ids)
            .context("Failed to run benchmark")?;
        benchmark.log_summary();

        Ok(DemoReport {
            comparison,
            benchmark,
        })
    }
}
