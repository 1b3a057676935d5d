use std::num::NonZeroUsize;

use log::{debug, warn};

use super::{History, LogReporter, Progress, Reporter};
use crate::{
    RegressionErr, Result,
    arch::{
        Linear,
        loss::{LossFn, Mae},
    },
    dataset::{self, Dataset},
    optimization::{GradientDescent, Optimizer, gradients},
};

/// How many epochs pass between two progress reports by default.
pub const DEFAULT_REPORT_EVERY: NonZeroUsize = NonZeroUsize::new(100_000).unwrap();

/// A linear model `Trainer`. Runs a fixed amount of full batch epochs over a dataset, recording
/// the cost of every epoch.
///
/// The gradient is always the squared error one, while the recorded cost is measured with
/// `loss_fn`. There's no early stopping: diverging runs keep iterating with non finite values.
pub struct Trainer<O, L, R>
where
    O: Optimizer,
    L: LossFn,
    R: Reporter,
{
    optimizer: O,
    loss_fn: L,
    reporter: R,

    epochs: usize,
    report_every: NonZeroUsize,
}

impl<O, L, R> Trainer<O, L, R>
where
    O: Optimizer,
    L: LossFn,
    R: Reporter,
{
    /// Returns a new `Trainer`.
    ///
    /// # Arguments
    /// * `optimizer` - The optimizer used to step the parameters.
    /// * `loss_fn` - The loss function used to measure the cost of each epoch.
    /// * `reporter` - Receives a `Progress` every `report_every` epochs, starting at epoch 0.
    /// * `epochs` - The exact amount of epochs to run.
    /// * `report_every` - The period, in epochs, of progress reports.
    pub fn new(
        optimizer: O,
        loss_fn: L,
        reporter: R,
        epochs: usize,
        report_every: NonZeroUsize,
    ) -> Self {
        Self {
            optimizer,
            loss_fn,
            reporter,
            epochs,
            report_every,
        }
    }

    /// Trains `model` over `dataset` for the configured amount of epochs.
    ///
    /// # Returns
    /// The history of the run, holding every epoch's cost and the final model.
    pub fn train(&mut self, model: Linear, dataset: &Dataset) -> History {
        self.train_samples(model, dataset.x(), dataset.y())
    }

    fn train_samples(&mut self, mut model: Linear, x: &[f64], y: &[f64]) -> History {
        debug!(epochs = self.epochs, samples = x.len(); "starting training");

        let mut history = History::with_capacity(self.epochs, model);
        let mut y_pred = Vec::with_capacity(x.len());
        let mut diverged = false;

        for epoch in 0..self.epochs {
            let grad = gradients(&model, x, y);
            self.optimizer.update_params(model.params_mut(), &grad);

            y_pred.clear();
            y_pred.extend(x.iter().map(|&x| model.predict(x)));
            let cost = self.loss_fn.loss(&y_pred, y);

            if !diverged && !cost.is_finite() {
                diverged = true;
                warn!("cost became non finite at epoch {epoch}, the run is diverging");
            }

            if epoch % self.report_every.get() == 0 {
                self.reporter.report(&Progress {
                    epoch,
                    slope: model.slope(),
                    intercept: model.intercept(),
                    cost,
                });
            }

            history.push(epoch, cost);
        }

        history.finish(model);
        debug!(
            slope = model.slope(),
            intercept = model.intercept();
            "training finished"
        );

        history
    }
}

/// Measures the mean absolute error of `model` over the samples `x` and `y`.
///
/// # Errors
/// Returns an input validation error if `x` and `y` differ in length or are empty.
pub fn cost(x: &[f64], y: &[f64], model: &Linear) -> Result<f64> {
    dataset::validate(x, y)?;
    Ok(Mae.loss(&model.forward(x), y))
}

/// Runs `epochs` epochs of gradient descent starting from `initial`, reporting progress to the
/// `log` facade every `DEFAULT_REPORT_EVERY` epochs.
///
/// # Errors
/// Returns an input validation error if `x` and `y` differ in length, are empty, or if
/// `learning_rate` is not strictly positive.
pub fn run(
    epochs: usize,
    initial: Linear,
    learning_rate: f64,
    x: &[f64],
    y: &[f64],
) -> Result<History> {
    dataset::validate(x, y)?;
    validate_learning_rate(learning_rate)?;

    let mut trainer = Trainer::new(
        GradientDescent::new(learning_rate),
        Mae,
        LogReporter,
        epochs,
        DEFAULT_REPORT_EVERY,
    );

    Ok(trainer.train_samples(initial, x, y))
}

pub(crate) fn validate_learning_rate(learning_rate: f64) -> Result<()> {
    // also rejects NaN
    if !(learning_rate > 0.0) {
        return Err(RegressionErr::InvalidLearningRate(learning_rate));
    }

    Ok(())
}
