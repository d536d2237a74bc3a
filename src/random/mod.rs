// ============================================================================
// Random Integers
// Uniform inclusive-range integer generation
// ============================================================================

use rand::Rng;

/// Uniformly distributed random integer in `[min, max]`, both ends included.
///
/// Reversed bounds are swapped rather than rejected, so the call never
/// panics. Uses the thread-local generator; see [`random_integer_with`] for
/// a seedable variant.
pub fn random_integer(min: i64, max: i64) -> i64 {
    random_integer_with(&mut rand::thread_rng(), min, max)
}

/// Like [`random_integer`], drawing from a caller-supplied generator.
///
/// # Example
/// ```
/// use numkit::random::random_integer_with;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let value = random_integer_with(&mut rng, 1, 6);
/// assert!((1..=6).contains(&value));
/// ```
pub fn random_integer_with<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(low..=high)
}
