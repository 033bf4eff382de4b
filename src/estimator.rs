//! Monte Carlo estimation of π.
//!
//! Points are drawn uniformly from the unit square `[0, 1) x [0, 1)`. The
//! quarter of the unit circle inside that square has area π / 4, so the
//! fraction of points landing on or inside the circle, times four,
//! approximates π.

use rand::Rng;

/// Count how many of `sample_count` random points satisfy `x² + y² <= 1`.
pub fn count_inside<R: Rng>(rng: &mut R, sample_count: u64) -> u64 {
    let mut inside = 0;
    for _ in 0..sample_count {
        let x: f64 = rng.random();
        let y: f64 = rng.random();
        if x * x + y * y <= 1.0 {
            inside += 1;
        }
    }
    inside
}

/// Estimate π from `sample_count` points drawn from `rng`.
///
/// A zero `sample_count` yields NaN.
pub fn estimate_with<R: Rng>(rng: &mut R, sample_count: u64) -> f64 {
    let inside = count_inside(rng, sample_count);
    4.0 * (inside as f64) / (sample_count as f64)
}

/// Estimate π using the thread-local generator.
pub fn estimate(sample_count: u64) -> f64 {
    let mut rng = rand::rng();
    estimate_with(&mut rng, sample_count)
}
