//! Benchmark parameters.

use crate::error::{BenchError, Result};

/// Points drawn per estimate.
pub const NUM_POINTS: u64 = 10_000_000;
/// Timed estimates per run.
pub const NUM_REPEATS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub sample_count: u64,
    pub trials: u32,
    /// Seed for a reproducible random stream. `None` uses the thread-local generator.
    pub seed: Option<u64>,
}

impl BenchConfig {
    pub fn with_sample_count(mut self, sample_count: u64) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(BenchError::InvalidConfig(
                "sample_count must be positive".to_string(),
            ));
        }
        if self.trials == 0 {
            return Err(BenchError::InvalidConfig(
                "trials must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sample_count: NUM_POINTS,
            trials: NUM_REPEATS,
            seed: None,
        }
    }
}
