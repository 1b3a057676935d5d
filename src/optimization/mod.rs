mod gradient_descent;
mod optimizer;

pub use gradient_descent::{GradientDescent, compute_gradients, update_parameters};
pub(crate) use gradient_descent::gradients;
pub use optimizer::Optimizer;
