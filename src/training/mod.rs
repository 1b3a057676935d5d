mod history;
mod reporter;
mod trainer;

pub use history::History;
pub use reporter::{LogReporter, NoopReporter, Progress, Reporter};
pub(crate) use trainer::validate_learning_rate;
pub use trainer::{DEFAULT_REPORT_EVERY, Trainer, cost, run};
