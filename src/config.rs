use std::{fs, num::NonZeroUsize, path::Path};

use serde::Deserialize;

use crate::{
    RegressionErr, Result,
    arch::Linear,
    dataset::Dataset,
    training::{DEFAULT_REPORT_EVERY, validate_learning_rate},
};

/// Where the training samples come from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetConfig {
    /// Explicit features and labels.
    Inline { x: Vec<f64>, y: Vec<f64> },
    /// Given features, labeled with `y = slope * x + intercept`.
    Linear {
        features: Vec<f64>,
        slope: f64,
        intercept: f64,
    },
    /// Uniformly drawn features in `[min, max)`, labeled with `y = slope * x + intercept`.
    Random {
        samples: usize,
        min: f64,
        max: f64,
        slope: f64,
        intercept: f64,
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::Linear {
            features: vec![10342., 41693., 27934., 15294.],
            slope: 2.5,
            intercept: 500.,
        }
    }
}

impl DatasetConfig {
    /// Builds the `Dataset` described by this config.
    ///
    /// # Errors
    /// Returns an input validation error if the resulting dataset is empty or malformed.
    pub fn build(&self) -> Result<Dataset> {
        match self {
            DatasetConfig::Inline { x, y } => Dataset::new(x.clone(), y.clone()),
            DatasetConfig::Linear {
                features,
                slope,
                intercept,
            } => Dataset::linear(features.clone(), *slope, *intercept),
            &DatasetConfig::Random {
                samples,
                min,
                max,
                slope,
                intercept,
                seed,
            } => Dataset::random(samples, (min, max), slope, intercept, seed),
        }
    }
}

/// The full configuration of a training run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub initial_slope: f64,
    pub initial_intercept: f64,
    pub report_every: NonZeroUsize,
    pub dataset: DatasetConfig,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 10_000_000,
            learning_rate: 1e-9,
            initial_slope: 1.15,
            initial_intercept: 20.,
            report_every: DEFAULT_REPORT_EVERY,
            dataset: DatasetConfig::default(),
        }
    }
}

impl TrainingConfig {
    /// Reads a `TrainingConfig` from a JSON file, missing fields take their default value.
    ///
    /// # Errors
    /// Returns `RegressionErr::Io` if the file can't be read and `RegressionErr::Parse` if it
    /// isn't a valid config.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Checks the values that can't be enforced by the types alone.
    ///
    /// # Errors
    /// Returns `RegressionErr::InvalidLearningRate` if the learning rate is not strictly positive
    /// and `RegressionErr::InvalidConfig` if the initial parameters are not finite.
    pub fn validate(&self) -> Result<()> {
        validate_learning_rate(self.learning_rate)?;

        if !(self.initial_slope.is_finite() && self.initial_intercept.is_finite()) {
            return Err(RegressionErr::InvalidConfig(format!(
                "initial parameters must be finite, got m={} and b={}",
                self.initial_slope, self.initial_intercept
            )));
        }

        Ok(())
    }

    /// The model training starts from.
    pub fn initial_model(&self) -> Linear {
        Linear::new(self.initial_slope, self.initial_intercept)
    }
}
