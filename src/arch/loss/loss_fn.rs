/// Measures how far a set of predictions is from the expected values.
pub trait LossFn {
    /// Computes the loss between `y_pred` and `y`.
    ///
    /// Both slices must be non empty and of the same length, callers validate them first (see
    /// `training::cost`). Otherwise the result is unspecified.
    fn loss(&self, y_pred: &[f64], y: &[f64]) -> f64;
}
