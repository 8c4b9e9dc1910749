//! "Refresh suggestions" sampling. Kept apart from the deterministic engine so
//! randomness never leaks into the paginated grid.

use rand::seq::SliceRandom;
use rand::Rng;

use super::schema::DirectorySchema;

/// Random sample of up to `limit` recommendation-eligible records.
pub fn suggestions<'a, T: 'static, R>(
    schema: &DirectorySchema<T>,
    records: &'a [T],
    limit: usize,
    rng: &mut R,
) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    let eligible: Vec<&T> = records
        .iter()
        .filter(|record| (schema.recommendation.eligible)(record))
        .collect();
    eligible.choose_multiple(rng, limit).copied().collect()
}
