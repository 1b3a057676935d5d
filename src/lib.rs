//! Univariate linear regression trained with full batch gradient descent.
//!
//! The model `y = m * x + b` is fitted by stepping along the squared error gradient, while the
//! cost recorded on every epoch is the mean absolute error.

pub mod arch;
pub mod config;
pub mod dataset;
pub mod error;
pub mod optimization;
pub mod training;

pub use arch::Linear;
pub use config::{DatasetConfig, TrainingConfig};
pub use dataset::Dataset;
pub use error::{RegressionErr, Result};
pub use optimization::{GradientDescent, compute_gradients, update_parameters};
pub use training::{History, Trainer, cost, run};
