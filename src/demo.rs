//! Text rendering of comparison and benchmark reports for the CLI demo.

use std::fmt::Write;

use crate::compare::{BenchmarkReport, ComparisonReport, SpeedRatio};
use crate::config::{DEMO_BENCHMARK_IDS_LARGE, DEMO_BENCHMARK_IDS_SMALL, LARGE_DATASET_THRESHOLD};

/// Default benchmark identifiers for a dataset of `dataset_size` records.
pub fn default_benchmark_ids(dataset_size: usize) -> Vec<u64> {
    if dataset_size >= LARGE_DATASET_THRESHOLD {
        DEMO_BENCHMARK_IDS_LARGE.to_vec()
    } else {
        DEMO_BENCHMARK_IDS_SMALL.to_vec()
    }
}

fn describe_ratio(ratio: &SpeedRatio) -> String {
    match ratio.ratio {
        Some(value) => format!("{} {:.2}x faster than {}", ratio.faster, value, ratio.slower),
        None => "N/A".to_string(),
    }
}

/// Renders one comparison: per-strategy status, time and complexity, then the analysis.
pub fn render_comparison(report: &ComparisonReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Search for transaction ID: {}", report.transaction_id);
    let _ = writeln!(out, "{}", "-".repeat(30));

    for (strategy, result) in &report.algorithms {
        let status = if result.found { "✅ Found" } else { "❌ Not Found" };
        let _ = writeln!(out, "{}:", strategy.title());
        let _ = writeln!(out, "  Status: {}", status);
        let _ = writeln!(out, "  Time: {:.6} seconds", result.elapsed.as_secs_f64());
        if !result.reliable_timing {
            let _ = writeln!(out, "  (clock unavailable, time not measured)");
        }
        let _ = writeln!(out, "  Complexity: {}", result.time_complexity);
        let _ = writeln!(out);
    }

    let analysis = &report.performance_analysis;
    let _ = writeln!(out, "📊 Performance Analysis:");
    let _ = writeln!(out, "  Fastest: {}", analysis.fastest_algorithm.title());
    let _ = writeln!(out, "  Slowest: {}", analysis.slowest_algorithm.title());
    let _ = writeln!(out, "  Dataset size: {}", analysis.dataset_size);
    let _ = writeln!(out, "  Speed improvements:");
    let improvements = &analysis.speed_improvement;
    for (label, ratio) in [
        ("Dictionary vs Linear", &improvements.dictionary_vs_linear),
        ("Binary vs Linear", &improvements.binary_vs_linear),
        ("Dictionary vs Binary", &improvements.dictionary_vs_binary),
    ] {
        let _ = writeln!(out, "    {}: {}", label, describe_ratio(ratio));
    }
    out
}

/// Renders benchmark averages and success rates.
pub fn render_benchmark(report: &BenchmarkReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Benchmark results ({} test cases):", report.test_cases);
    let _ = writeln!(out, "{}", "-".repeat(40));
    for (strategy, stats) in &report.algorithms {
        let _ = writeln!(out, "{}:", strategy.title());
        let _ = writeln!(
            out,
            "  Average time: {:.6} seconds",
            stats.avg_time.as_secs_f64()
        );
        let _ = writeln!(out, "  Success rate: {:.1}%", stats.success_rate);
        let _ = writeln!(out);
    }
    out
}

/// Closing guidance printed after the demo.
pub fn render_recommendations() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "💡 Algorithm Recommendations:");
    let _ = writeln!(out, "{}", "-".repeat(30));
    let _ = writeln!(out, "• Dictionary Lookup: Best for frequent individual lookups");
    let _ = writeln!(out, "• Binary Search: Good for sorted data with occasional lookups");
    let _ = writeln!(out, "• Linear Search: Simple but slow for large datasets");
    let _ = writeln!(out);
    let _ = writeln!(out, "🎯 For this SMS API: Dictionary lookup is optimal!");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Comparator;
    use crate::storage::sample_transactions;
    use crate::store::{DuplicatePolicy, RecordStore};
    use crate::utils::ScriptedClock;
    use std::time::Duration;

    #[test]
    fn test_default_benchmark_ids() {
        assert_eq!(default_benchmark_ids(3), vec![1, 2, 3]);
        assert_eq!(default_benchmark_ids(100), vec![1, 2, 3, 10, 50, 100]);
    }

    #[test]
    fn test_render_comparison() {
        let store = RecordStore::from_json(sample_transactions(), DuplicatePolicy::Reject).unwrap();
        let clock = ScriptedClock::from_durations(&[
            Some(Duration::from_micros(8)),
            Some(Duration::from_micros(2)),
            Some(Duration::from_micros(4)),
        ]);
        let report = Comparator::with_clock(&store, &clock).compare(1).unwrap();
        let text = render_comparison(&report);

        assert!(text.contains("Search for transaction ID: 1"));
        assert!(text.contains("Linear Search:"));
        assert!(text.contains("✅ Found"));
        assert!(text.contains("Fastest: Dictionary Lookup"));
        assert!(text.contains("dictionary_lookup 4.00x faster than linear_search"));
    }

    #[test]
    fn test_render_comparison_unavailable_ratio() {
        let store = RecordStore::from_json(sample_transactions(), DuplicatePolicy::Reject).unwrap();
        let clock = ScriptedClock::from_durations(&[None, None, None]);
        let report = Comparator::with_clock(&store, &clock).compare(7).unwrap();
        let text = render_comparison(&report);

        assert!(text.contains("❌ Not Found"));
        assert!(text.contains("Dictionary vs Linear: N/A"));
        assert!(text.contains("clock unavailable"));
    }

    #[test]
    fn test_render_recommendations_names_dictionary_lookup() {
        let text = render_recommendations();
        assert!(text.starts_with("💡 Algorithm Recommendations:"));
        assert!(text
            .trim_end()
            .ends_with("🎯 For this SMS API: Dictionary lookup is optimal!"));
    }

    #[test]
    fn test_render_benchmark() {
        let store = RecordStore::from_json(sample_transactions(), DuplicatePolicy::Reject).unwrap();
        let report = Comparator::new(&store).benchmark(&[1, 2, 3]).unwrap();
        let text = render_benchmark(&report);

        assert!(text.contains("Benchmark results (3 test cases):"));
        assert_eq!(text.matches("Success rate: 100.0%").count(), 3);
    }
}
