use super::LossFn;

/// Mean absolute error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mae;

impl Mae {
    /// Returns a new `Mae`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mae {
    fn loss(&self, y_pred: &[f64], y: &[f64]) -> f64 {
        debug_assert_eq!(y_pred.len(), y.len());
        debug_assert!(!y.is_empty());

        let total: f64 = y_pred.iter().zip(y).map(|(yp, y)| (yp - y).abs()).sum();
        total / y_pred.len() as f64
    }
}
