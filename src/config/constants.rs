//! Configuration constants.
//!
//! Defaults for the server and the demo, plus fixed API behavior.

/// Dataset file read at startup
pub const DEFAULT_DATA_FILE: &str = "sms_transactions.json";
/// Address the API server binds to
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
/// Port the API server listens on
pub const DEFAULT_PORT: u16 = 8000;

/// Credentials accepted when none are configured (`user:password`)
pub const DEFAULT_CREDENTIALS: &[&str] = &["admin:password123", "user:userpass456"];
/// Realm advertised in `WWW-Authenticate`
pub const AUTH_REALM: &str = "SMS API";

/// Maximum transactions returned by the list endpoint
pub const LIST_LIMIT: usize = 100;
/// Fields a new transaction must carry
pub const REQUIRED_CREATE_FIELDS: &[&str] = &["address", "body", "date"];

/// Demo benchmark identifiers for datasets with at least `LARGE_DATASET_THRESHOLD` records
pub const DEMO_BENCHMARK_IDS_LARGE: &[u64] = &[1, 2, 3, 10, 50, 100];
/// Demo benchmark identifiers for small datasets
pub const DEMO_BENCHMARK_IDS_SMALL: &[u64] = &[1, 2, 3];
/// Dataset size from which the demo benchmarks the larger identifier set
pub const LARGE_DATASET_THRESHOLD: usize = 100;
