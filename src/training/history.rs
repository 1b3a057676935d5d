use crate::arch::Linear;

/// The trace of a training run: one `(epoch, cost)` entry per iteration plus the final model.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    epochs: Vec<usize>,
    costs: Vec<f64>,
    slope: f64,
    intercept: f64,
}

impl History {
    pub(crate) fn with_capacity(capacity: usize, model: Linear) -> Self {
        Self {
            epochs: Vec::with_capacity(capacity),
            costs: Vec::with_capacity(capacity),
            slope: model.slope(),
            intercept: model.intercept(),
        }
    }

    pub(crate) fn push(&mut self, epoch: usize, cost: f64) {
        self.epochs.push(epoch);
        self.costs.push(cost);
    }

    pub(crate) fn finish(&mut self, model: Linear) {
        self.slope = model.slope();
        self.intercept = model.intercept();
    }

    pub fn epochs(&self) -> &[usize] {
        &self.epochs
    }

    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// The trained model.
    pub fn model(&self) -> Linear {
        Linear::new(self.slope, self.intercept)
    }

    /// The cost after the last epoch, `None` if no epoch ran.
    pub fn final_cost(&self) -> Option<f64> {
        self.costs.last().copied()
    }

    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    /// Splits the history into `(epochs, costs, slope, intercept)`.
    pub fn into_parts(self) -> (Vec<usize>, Vec<f64>, f64, f64) {
        (self.epochs, self.costs, self.slope, self.intercept)
    }
}
