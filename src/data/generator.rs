use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

/// Shape of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataShape {
    /// Uniformly random values over the configured range.
    #[default]
    Random,
    /// Sorted descending (the classic worst case for bubble-family sorts).
    Reversed,
    /// Sorted ascending, then a bounded number of random pairwise swaps.
    NearlySorted,
}

impl DataShape {
    pub const ALL: [DataShape; 3] = [DataShape::Random, DataShape::Reversed, DataShape::NearlySorted];

    pub fn display_name(&self) -> &'static str {
        match self {
            DataShape::Random => "Random",
            DataShape::Reversed => "Reversed",
            DataShape::NearlySorted => "Nearly Sorted",
        }
    }

    /// Next shape in the cycle, for the UI's shape toggle.
    pub fn next(&self) -> DataShape {
        match self {
            DataShape::Random => DataShape::Reversed,
            DataShape::Reversed => DataShape::NearlySorted,
            DataShape::NearlySorted => DataShape::Random,
        }
    }
}

impl fmt::Display for DataShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown data shape {0:?} (expected random, reversed, or nearly-sorted)")]
pub struct ParseDataShapeError(pub String);

impl FromStr for DataShape {
    type Err = ParseDataShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(DataShape::Random),
            "reversed" => Ok(DataShape::Reversed),
            "nearly-sorted" | "nearly_sorted" => Ok(DataShape::NearlySorted),
            _ => Err(ParseDataShapeError(s.to_string())),
        }
    }
}

/// Precondition violation at the generator boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("invalid value range: min {min} exceeds max {max}")]
    InvalidRange { min: i32, max: i32 },
}

/// Produces integer datasets for the visualizer.
///
/// Seeded construction makes runs reproducible end to end, since the
/// sorting side of the system is already deterministic.
pub struct DataGenerator {
    rng: StdRng,
}

impl DataGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `size` values in `min..=max` with the requested shape.
    pub fn generate(
        &mut self,
        shape: DataShape,
        size: usize,
        min: i32,
        max: i32,
    ) -> Result<Vec<i32>, GenerateError> {
        if min > max {
            return Err(GenerateError::InvalidRange { min, max });
        }

        let data = match shape {
            DataShape::Random => self.random(size, min, max),
            DataShape::Reversed => reversed(size, min, max),
            DataShape::NearlySorted => self.nearly_sorted(size, min, max),
        };
        Ok(data)
    }

    fn random(&mut self, size: usize, min: i32, max: i32) -> Vec<i32> {
        (0..size).map(|_| self.rng.random_range(min..=max)).collect()
    }

    /// Random values, sorted, then `max(1, size/10)` random pairwise swaps.
    /// The swap indices may coincide; that just wastes one perturbation.
    fn nearly_sorted(&mut self, size: usize, min: i32, max: i32) -> Vec<i32> {
        let mut data = self.random(size, min, max);
        data.sort_unstable();

        if size < 2 {
            return data;
        }
        let swaps = (size / 10).max(1);
        for _ in 0..swaps {
            let a = self.rng.random_range(0..size);
            let b = self.rng.random_range(0..size);
            data.swap(a, b);
        }
        data
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Descending values starting at `max`, wrapping back to `max` when a
/// narrow range runs out before the array does.
fn reversed(size: usize, min: i32, max: i32) -> Vec<i32> {
    let width = i64::from(max) - i64::from(min) + 1;
    (0..size)
        .map(|i| (i64::from(max) - (i as i64 % width)) as i32)
        .collect()
}
