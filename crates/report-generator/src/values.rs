//! Biased random value generation.
//!
//! Samples land in `[-1.0, 1.0]` most of the time and stretch out towards
//! `±2.0` otherwise. Every sample is rounded to one decimal place.

use rand::Rng;

/// Lowest value a sample can take.
pub const MIN_VALUE: f64 = -2.0;

/// Highest value a sample can take.
pub const MAX_VALUE: f64 = 2.0;

/// Probability of drawing from the inner `[-1.0, 1.0]` band.
pub const INNER_PROBABILITY: f64 = 0.8;

/// Draw one sample from the thread-local RNG.
pub fn generate() -> f64 {
    generate_biased_value(&mut rand::thread_rng())
}

/// Draw one sample from `rng`.
///
/// With probability [`INNER_PROBABILITY`] the value is uniform in
/// `[-1.0, 1.0]`. Otherwise a magnitude is drawn uniformly from `[1.0, 2.0)`
/// and given a random sign.
pub fn generate_biased_value<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let value = if rng.gen_bool(INNER_PROBABILITY) {
        rng.gen_range(-1.0..=1.0)
    } else {
        let magnitude: f64 = rng.gen_range(1.0..2.0);
        if rng.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    };

    round_to_tenth(value).clamp(MIN_VALUE, MAX_VALUE)
}

/// Round half away from zero to one decimal place.
///
/// Negative zero is folded into zero so it never shows up as `-0` in output.
fn round_to_tenth(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
