//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, which the `no_std` library can't provide.

use std::time::Duration;

use potgraph::config::SAMPLE_PERIOD_MS;

/// Pause between two sampler iterations.
pub const SAMPLE_PERIOD: Duration = Duration::from_millis(SAMPLE_PERIOD_MS);
