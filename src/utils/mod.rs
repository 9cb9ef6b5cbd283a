//! Utility functions.
//!
//! This module provides:
//! - Timing instrumentation for lookup measurements

mod timing;

pub use timing::{duration_to_micros, measure, Clock, Measurement, MonotonicClock, ScriptedClock};
