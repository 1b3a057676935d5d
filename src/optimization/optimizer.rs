/// Moves a set of parameters given their gradient.
pub trait Optimizer {
    /// Updates `params` in place according to the optimizer's learning rule.
    ///
    /// `params` and `grad` always have the same length.
    fn update_params(&mut self, params: &mut [f64], grad: &[f64]);
}
