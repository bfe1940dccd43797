//! Draw the elements of the dataset.
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::error::DatasetError;

/// smallest value an element of the dataset can take
pub const MIN_ELEMENT: i64 = 0;
/// largest value an element of the dataset can take, i.e. $2^{15} - 1$
pub const MAX_ELEMENT: i64 = (1 << 15) - 1;

/// a seeded source of bounded random integers
///
/// two generators built from the same seed and asked for the same draws will
/// produce the same elements.
#[derive(Debug, Clone)]
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    pub fn seed(value: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(value),
        }
    }

    /// `generate(count, min, max)` is `count` integers drawn uniformly from
    /// $[min, max]$, bounds included
    pub fn generate(
        &mut self,
        count: usize,
        min_value: i64,
        max_value: i64,
    ) -> Result<Vec<i64>, DatasetError> {
        if min_value > max_value {
            return Err(DatasetError::InvalidRange {
                min: min_value,
                max: max_value,
            });
        }

        debug!("drawing {} elements in [{}, {}]", count, min_value, max_value);
        Ok((0..count)
            .map(|_| self.rng.gen_range(min_value..=max_value))
            .collect())
    }
}
