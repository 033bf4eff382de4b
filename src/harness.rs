//! Timed repetition of the estimator.

use std::io::Write;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::estimator::estimate_with;

/// One timed estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    pub estimate: f64,
    /// Wall-clock seconds, millisecond resolution.
    pub seconds: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub trials: Vec<Trial>,
    pub total_seconds: f64,
}

impl Report {
    pub fn average_seconds(&self) -> f64 {
        self.total_seconds / self.trials.len() as f64
    }
}

pub struct Harness {
    config: BenchConfig,
}

impl Harness {
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run the benchmark with the real estimator, writing one line per trial
    /// and a closing average line to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Report> {
        match self.config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.run_with(out, |n| estimate_with(&mut rng, n))
            }
            None => {
                let mut rng = rand::rng();
                self.run_with(out, |n| estimate_with(&mut rng, n))
            }
        }
    }

    /// Same loop as [`Harness::run`] with a caller-supplied estimator.
    pub fn run_with<W, F>(&self, out: &mut W, mut estimator: F) -> Result<Report>
    where
        W: Write,
        F: FnMut(u64) -> f64,
    {
        let sample_count = self.config.sample_count;
        let trial_count = self.config.trials;
        info!(
            sample_count,
            trials = trial_count,
            seeded = self.config.seed.is_some(),
            "starting pi benchmark"
        );

        let mut trials = Vec::with_capacity(trial_count as usize);
        let mut total_seconds = 0.0;

        for i in 0..trial_count {
            let start = Instant::now();
            let pi = estimator(sample_count);
            let seconds = start.elapsed().as_millis() as f64 / 1000.0;

            total_seconds += seconds;
            writeln!(out, "pi is {} took {} seconds", pi, seconds)?;
            debug!(trial = i, pi, seconds, "trial complete");

            trials.push(Trial {
                estimate: pi,
                seconds,
            });
        }

        let report = Report {
            trials,
            total_seconds,
        };
        writeln!(
            out,
            "On average pi took {} seconds to compute.",
            report.average_seconds()
        )?;
        info!(average_seconds = report.average_seconds(), "pi benchmark complete");

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = Harness::new(BenchConfig::default().with_trials(0));
        assert!(matches!(result, Err(BenchError::InvalidConfig(_))));
    }

    #[test]
    fn test_stub_estimator_called_once_per_trial() {
        let harness = Harness::new(BenchConfig::default().with_trials(4)).unwrap();
        let mut calls = Vec::new();
        let mut out = Vec::new();

        let report = harness
            .run_with(&mut out, |n| {
                calls.push(n);
                3.0
            })
            .unwrap();

        assert_eq!(calls, vec![10_000_000; 4]);
        assert_eq!(report.trials.len(), 4);
        assert!(report.trials.iter().all(|t| t.estimate == 3.0));
    }

    #[test]
    fn test_output_format() {
        let harness = Harness::new(BenchConfig::default().with_trials(2)).unwrap();
        let mut out = Vec::new();
        harness.run_with(&mut out, |_| 3.5).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("pi is 3.5 took "));
        assert!(lines[0].ends_with(" seconds"));
        assert!(lines[2].starts_with("On average pi took "));
        assert!(lines[2].ends_with(" seconds to compute."));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let harness = Harness::new(BenchConfig::default().with_trials(1)).unwrap();
        let result = harness.run_with(&mut FailingWriter, |_| 3.0);
        assert!(matches!(result, Err(BenchError::Io(_))));
    }
}
