//! Application initialization.
//!
//! This module provides logger setup. All initialization functions return
//! proper error types for error handling.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
