use super::Optimizer;
use crate::{Result, arch::Linear, dataset};

/// Gradient descent optimization algorithm.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update_params`.
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

impl Optimizer for GradientDescent {
    /// Updates the parameters according to the algorithm's learning rule, that is, making a step in
    /// the opposite direction of the gradient, with a length of `learning_rate`.
    ///
    /// # Arguments
    /// * `params` - The parameters that are going to be modified.
    /// * `grad` - The gradient used for taking the step.
    fn update_params(&mut self, params: &mut [f64], grad: &[f64]) {
        let lr = self.learning_rate;

        for (w, g) in params.iter_mut().zip(grad) {
            *w -= lr * g;
        }
    }
}

/// Computes the `[slope, intercept]` gradient of the squared error over the whole dataset.
///
/// Each sample contributes `-(2 / n) * x * (y - y_pred)` to the slope and `-(2 / n) * (y - y_pred)`
/// to the intercept. Expects `x` and `y` to be a valid dataset.
pub(crate) fn gradients(model: &Linear, x: &[f64], y: &[f64]) -> [f64; 2] {
    let n = y.len() as f64;
    let mut grad = [0.0; 2];

    for (&x, &y) in x.iter().zip(y) {
        let y_pred = model.predict(x);
        grad[0] += -(2.0 / n) * x * (y - y_pred);
        grad[1] += -(2.0 / n) * (y - y_pred);
    }

    grad
}

/// Computes the `(slope, intercept)` gradients of `model` over the samples `x` and `y`.
///
/// # Errors
/// Returns an input validation error if `x` and `y` differ in length or are empty.
pub fn compute_gradients(model: &Linear, x: &[f64], y: &[f64]) -> Result<(f64, f64)> {
    dataset::validate(x, y)?;
    let [m_grad, b_grad] = gradients(model, x, y);
    Ok((m_grad, b_grad))
}

/// Takes a single gradient descent step from `model` and returns the resulting model.
///
/// The learning rate is not validated here, a rate of zero leaves the model untouched.
///
/// # Errors
/// Returns an input validation error if `x` and `y` differ in length or are empty.
pub fn update_parameters(
    model: &Linear,
    x: &[f64],
    y: &[f64],
    learning_rate: f64,
) -> Result<Linear> {
    dataset::validate(x, y)?;

    let grad = gradients(model, x, y);
    let mut next = *model;
    GradientDescent::new(learning_rate).update_params(next.params_mut(), &grad);

    Ok(next)
}
