use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{RegressionErr, Result};

/// An immutable, ordered collection of `(x, y)` samples.
///
/// A `Dataset` always holds at least one sample and the same amount of features and labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Dataset {
    /// Returns a new `Dataset`.
    ///
    /// # Arguments
    /// * `x` - The features.
    /// * `y` - The labels, one per feature.
    ///
    /// # Errors
    /// Returns `RegressionErr::EmptyDataset` if there are no samples and
    /// `RegressionErr::SizeMismatch` if `x` and `y` differ in length.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        validate(&x, &y)?;
        Ok(Self { x, y })
    }

    /// Builds a dataset whose labels follow `y = slope * x + intercept` exactly.
    ///
    /// # Arguments
    /// * `features` - The features to label.
    /// * `slope` - The slope of the labeling line.
    /// * `intercept` - The intercept of the labeling line.
    pub fn linear(features: Vec<f64>, slope: f64, intercept: f64) -> Result<Self> {
        let labels = features.iter().map(|x| x * slope + intercept).collect();
        Self::new(features, labels)
    }

    /// Builds a dataset of `samples` features drawn uniformly from `[min, max)`, labeled with
    /// `y = slope * x + intercept`.
    ///
    /// # Arguments
    /// * `samples` - The amount of samples to generate.
    /// * `range` - The `(min, max)` range features are drawn from.
    /// * `slope` - The slope of the labeling line.
    /// * `intercept` - The intercept of the labeling line.
    /// * `seed` - An optional seed, the generator is seeded from the os when missing.
    pub fn random(
        samples: usize,
        (min, max): (f64, f64),
        slope: f64,
        intercept: f64,
        seed: Option<u64>,
    ) -> Result<Self> {
        // the width has to be finite too, or sampling overflows
        if !(min.is_finite() && max.is_finite() && min < max && (max - min).is_finite()) {
            return Err(RegressionErr::InvalidConfig(format!(
                "the feature range must be finite and non empty, got [{min}, {max})"
            )));
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let features = (0..samples).map(|_| rng.random_range(min..max)).collect();
        Self::linear(features, slope, intercept)
    }

    /// The features of the dataset.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The labels of the dataset.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The amount of samples, never zero.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false`, kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Checks that `x` and `y` form a valid dataset.
pub(crate) fn validate(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(RegressionErr::SizeMismatch {
            a: "y",
            b: "x",
            got: y.len(),
            expected: x.len(),
        });
    }

    if x.is_empty() {
        return Err(RegressionErr::EmptyDataset);
    }

    Ok(())
}
