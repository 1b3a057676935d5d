mod loss_fn;
mod mae;

pub use loss_fn::LossFn;
pub use mae::Mae;
