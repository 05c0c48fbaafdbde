use crate::domain::model::SampleSet;
use crate::utils::error::{Result, WallsError};
use rand::seq::index;
use rand::Rng;

/// Draws `count` distinct integers uniformly from `[lower, upper)` using the
/// thread-local generator.
pub fn unique_random_numbers(count: usize, lower: usize, upper: usize) -> Result<SampleSet> {
    unique_random_numbers_with(&mut rand::thread_rng(), count, lower, upper)
}

/// Same as [`unique_random_numbers`] with a caller-supplied generator.
///
/// Sampling is without replacement, so the number of draws is bounded by
/// `count` no matter how close it is to the width of the range.
pub fn unique_random_numbers_with<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    lower: usize,
    upper: usize,
) -> Result<SampleSet> {
    let span = upper
        .checked_sub(lower)
        .filter(|span| *span >= count)
        .ok_or(WallsError::InvalidRange {
            count,
            lower,
            upper,
        })?;

    let indices: Vec<usize> = index::sample(rng, span, count)
        .into_iter()
        .map(|offset| lower + offset)
        .collect();

    tracing::debug!(
        "Sampled {} distinct values from [{}, {})",
        indices.len(),
        lower,
        upper
    );
    Ok(SampleSet::new(indices))
}
