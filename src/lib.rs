//! Monte Carlo π speed test.
//!
//! [`estimator`] draws random points in the unit square and turns the share
//! that lands inside the quarter circle into an estimate of π. [`harness`]
//! times repeated estimates and prints per-run and average durations.

pub mod config;
pub mod error;
pub mod estimator;
pub mod harness;

pub use config::{BenchConfig, NUM_POINTS, NUM_REPEATS};
pub use error::{BenchError, Result};
pub use estimator::{count_inside, estimate, estimate_with};
pub use harness::{Harness, Report, Trial};
