use std::{env, ffi::OsString, path::Path};

use anyhow::{Context, Result, bail};
use env_logger::Env;
use log::info;

use gd_linreg::{
    TrainingConfig, Trainer,
    arch::loss::Mae,
    optimization::GradientDescent,
    training::LogReporter,
};

const CONFIG_VAR: &str = "GD_CONFIG";

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut config = load_config(env::var_os(CONFIG_VAR))?;

    if let Some(epochs) = parse_epochs(env::args().skip(1))? {
        config.epochs = epochs;
    }

    config.validate()?;
    let dataset = config.dataset.build()?;
    info!(
        samples = dataset.len(),
        epochs = config.epochs,
        learning_rate = config.learning_rate;
        "training linear model"
    );

    let mut trainer = Trainer::new(
        GradientDescent::new(config.learning_rate),
        Mae,
        LogReporter,
        config.epochs,
        config.report_every,
    );
    let history = trainer.train(config.initial_model(), &dataset);

    match history.final_cost() {
        Some(cost) => println!(
            "m={}, b={}, cost={cost} after {} epochs",
            history.slope(),
            history.intercept(),
            history.len()
        ),
        None => println!(
            "m={}, b={}, no epochs were run",
            history.slope(),
            history.intercept()
        ),
    }

    Ok(())
}

/// Loads the config at `path`, or the default one when no path is given.
fn load_config(path: Option<OsString>) -> Result<TrainingConfig> {
    let Some(path) = path else {
        return Ok(TrainingConfig::default());
    };

    let path = Path::new(&path);
    TrainingConfig::from_path(path)
        .with_context(|| format!("failed to load config from '{}'", path.display()))
}

/// Parses the optional `epoch_count` positional argument, program name excluded.
fn parse_epochs<I>(mut args: I) -> Result<Option<usize>>
where
    I: Iterator<Item = String>,
{
    let Some(epochs) = args.next() else {
        return Ok(None);
    };

    if args.next().is_some() {
        bail!("usage: gd-linreg [epoch_count]");
    }

    let epochs = epochs
        .parse()
        .with_context(|| format!("epoch_count must be a non negative integer, got '{epochs}'"))?;

    Ok(Some(epochs))
}
