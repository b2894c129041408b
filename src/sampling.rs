//! Random draw utilities shared by the graph and its loaders.

use rand::Rng;

/// Draw one value with probability proportional to its weight.
///
/// Draws a uniform threshold in `[0, weight_sum)` and scans the running
/// sum of `weights` until it exceeds the threshold. The final element
/// absorbs any floating-point residue, so a draw over a non-empty slice
/// always selects a candidate.
///
/// `weight_sum` must be the sum of `weights` and every weight must be
/// positive. Callers accumulate the sum while gathering per-edge
/// weights, so it is passed in rather than recomputed here.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn weighted_choice<T: Copy, R: Rng + ?Sized>(
    values: &[T],
    weights: &[f64],
    weight_sum: f64,
    rng: &mut R,
) -> T {
    debug_assert_eq!(values.len(), weights.len());
    debug_assert!(weight_sum > 0.0);

    let threshold = rng.random_range(0.0..weight_sum);
    let mut running = 0.0;
    for (&value, &weight) in values.iter().zip(weights) {
        running += weight;
        if running > threshold {
            return value;
        }
    }
    values[values.len() - 1]
}

/// Draw one value uniformly at random.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn uniform_choice<T: Copy, R: Rng + ?Sized>(values: &[T], rng: &mut R) -> T {
    values[rng.random_range(0..values.len())]
}
