//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, limits, API behavior)
//! - Logging option types
//! - Server and demo configuration structs

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{duplicate_policy, DemoConfig, LogFormat, LogLevel, ServerConfig};
