use log::info;

/// A snapshot of the training state, emitted periodically by the `Trainer`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub epoch: usize,
    pub slope: f64,
    pub intercept: f64,
    pub cost: f64,
}

/// Receives progress updates from a training run.
///
/// Reporting is fire and forget, a reporter can't stop or fail the run.
pub trait Reporter {
    fn report(&mut self, progress: &Progress);
}

/// Writes every progress update to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, progress: &Progress) {
        let &Progress {
            epoch,
            slope,
            intercept,
            cost,
        } = progress;

        info!(
            epoch = epoch,
            slope = slope,
            intercept = intercept,
            cost = cost;
            "m={slope}, b={intercept}, cost={cost}"
        );
    }
}

/// Discards every progress update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&mut self, _progress: &Progress) {}
}

impl<F: FnMut(&Progress)> Reporter for F {
    fn report(&mut self, progress: &Progress) {
        self(progress)
    }
}
