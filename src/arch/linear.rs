/// A univariate linear model, `y = slope * x + intercept`.
///
/// The parameters are stored contiguously as `[slope, intercept]` so optimizers can treat them,
/// and their gradient, as flat slices.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Linear {
    params: [f64; 2],
}

impl Linear {
    /// Returns a new `Linear`.
    ///
    /// # Arguments
    /// * `slope` - The coefficient `m` applied to the feature.
    /// * `intercept` - The bias `b` added to every prediction.
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self {
            params: [slope, intercept],
        }
    }

    pub fn slope(&self) -> f64 {
        self.params[0]
    }

    pub fn intercept(&self) -> f64 {
        self.params[1]
    }

    /// Predicts the label of a single feature.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope() * x + self.intercept()
    }

    /// Predicts the label of every feature in `xs`.
    pub fn forward(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }

    pub fn params(&self) -> &[f64] {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut [f64] {
        &mut self.params
    }
}

impl From<(f64, f64)> for Linear {
    fn from((slope, intercept): (f64, f64)) -> Self {
        Self::new(slope, intercept)
    }
}

impl From<Linear> for (f64, f64) {
    fn from(value: Linear) -> Self {
        (value.slope(), value.intercept())
    }
}
