use std::num::NonZeroUsize;

use gd_linreg::{
    Dataset, Linear, RegressionErr, Trainer, compute_gradients, cost,
    arch::loss::Mae,
    optimization::GradientDescent,
    run,
    training::{NoopReporter, Progress},
    update_parameters,
};

const FEATURES: [f64; 4] = [10342., 41693., 27934., 15294.];

fn source_dataset() -> Dataset {
    Dataset::linear(FEATURES.to_vec(), 2.5, 500.).unwrap()
}

#[test]
fn run_records_one_cost_per_epoch() {
    let dataset = source_dataset();

    for epochs in [0, 1, 7, 150] {
        let history = run(
            epochs,
            Linear::new(1.15, 20.),
            1e-9,
            dataset.x(),
            dataset.y(),
        )
        .unwrap();

        assert_eq!(history.epochs().len(), epochs);
        assert_eq!(history.costs().len(), epochs);
    }
}

#[test]
fn run_returns_trace_and_final_model() {
    let dataset = source_dataset();
    let history = run(3, Linear::new(1.15, 20.), 1e-9, dataset.x(), dataset.y()).unwrap();
    let (epochs, costs, m, b) = history.clone().into_parts();

    assert_eq!(epochs, vec![0, 1, 2]);
    assert_eq!(costs.last().copied(), history.final_cost());
    assert_eq!(cost(dataset.x(), dataset.y(), &Linear::new(m, b)).unwrap(), costs[2]);
}

#[test]
fn cost_is_never_negative() {
    let dataset = Dataset::new(vec![-3., 0.5, 8., 1e6], vec![2., -7., 0., -1e6]).unwrap();

    for (m, b) in [(0., 0.), (-1.5, 3.), (1e3, -1e3), (2.5, 500.)] {
        let c = cost(dataset.x(), dataset.y(), &Linear::new(m, b)).unwrap();
        assert!(c >= 0., "negative cost {c} for m={m}, b={b}");
    }
}

#[test]
fn cost_is_pure() {
    let dataset = source_dataset();
    let model = Linear::new(1.15, 20.);

    let first = cost(dataset.x(), dataset.y(), &model).unwrap();
    let second = cost(dataset.x(), dataset.y(), &model).unwrap();

    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn zero_learning_rate_never_moves_parameters() {
    let dataset = source_dataset();
    let mut model = Linear::new(1.15, 20.);

    for _ in 0..100 {
        model = update_parameters(&model, dataset.x(), dataset.y(), 0.).unwrap();
    }

    assert_eq!(model, Linear::new(1.15, 20.));
}

#[test]
fn perfect_fit_has_zero_cost_and_gradient() {
    let dataset = source_dataset();
    let model = Linear::new(2.5, 500.);

    assert_eq!(cost(dataset.x(), dataset.y(), &model).unwrap(), 0.);
    assert_eq!(
        compute_gradients(&model, dataset.x(), dataset.y()).unwrap(),
        (0., 0.)
    );
}

#[test]
fn underestimating_model_increases_after_one_update() {
    let model = Linear::new(0., 0.);
    let next = update_parameters(&model, &[1., 2.], &[3., 5.], 0.01).unwrap();

    assert!(next.slope() > 0.);
    assert!(next.intercept() > 0.);
}

#[test]
fn one_epoch_on_source_data_lowers_the_cost() {
    let dataset = source_dataset();
    let initial = Linear::new(1.15, 20.);
    let initial_cost = cost(dataset.x(), dataset.y(), &initial).unwrap();

    let history = run(1, initial, 1e-9, dataset.x(), dataset.y()).unwrap();

    assert!(history.costs()[0] < initial_cost);
}

#[test]
fn long_run_approaches_the_generating_line() {
    let dataset = source_dataset();
    let history = run(1000, Linear::new(1.15, 20.), 1e-9, dataset.x(), dataset.y()).unwrap();

    assert!((history.slope() - 2.5).abs() < 0.05);
    assert!(history.final_cost().unwrap() < 1000.);
}

#[test]
fn mismatched_or_empty_inputs_are_rejected() {
    let cases: [(&[f64], &[f64]); 3] = [(&[1., 2.], &[1.]), (&[1.], &[1., 2.]), (&[], &[])];

    for (x, y) in cases {
        let model = Linear::default();

        assert!(compute_gradients(&model, x, y).unwrap_err().is_input_validation());
        assert!(update_parameters(&model, x, y, 0.1).unwrap_err().is_input_validation());
        assert!(cost(x, y, &model).unwrap_err().is_input_validation());
        assert!(run(1, model, 0.1, x, y).unwrap_err().is_input_validation());
    }
}

#[test]
fn non_positive_learning_rate_is_rejected() {
    let err = run(1, Linear::default(), -0.5, &[1.], &[2.]).unwrap_err();
    assert!(matches!(err, RegressionErr::InvalidLearningRate(lr) if lr == -0.5));
}

#[test]
fn custom_reporter_sees_periodic_progress() {
    let dataset = source_dataset();
    let mut seen: Vec<Progress> = Vec::new();
    let mut trainer = Trainer::new(
        GradientDescent::new(1e-9),
        Mae,
        |p: &Progress| seen.push(*p),
        250,
        NonZeroUsize::new(100).unwrap(),
    );
    let history = trainer.train(Linear::new(1.15, 20.), &dataset);

    let epochs: Vec<_> = seen.iter().map(|p| p.epoch).collect();
    assert_eq!(epochs, vec![0, 100, 200]);
    for p in &seen {
        assert_eq!(p.cost, history.costs()[p.epoch]);
    }
}

#[test]
fn trainer_with_noop_reporter_matches_run() {
    let dataset = source_dataset();
    let mut trainer = Trainer::new(
        GradientDescent::new(1e-9),
        Mae,
        NoopReporter,
        20,
        NonZeroUsize::new(1).unwrap(),
    );

    let trained = trainer.train(Linear::new(1.15, 20.), &dataset);
    let ran = run(20, Linear::new(1.15, 20.), 1e-9, dataset.x(), dataset.y()).unwrap();

    assert_eq!(trained, ran);
}
