use std::sync::mpsc;

use ferrite_mlp::{
    ErrorKind, Mode, Network, NetworkConfig, NetworkError, TrainConfig, TrainState,
    TrainingSet, WeightInit,
};

fn seeded(hidden_sizes: Vec<usize>, seed: u64) -> NetworkConfig {
    NetworkConfig {
        hidden_sizes,
        weights: WeightInit::Random { min: 0.1, max: 1.5, seed: Some(seed) },
        ..NetworkConfig::default()
    }
}

fn temp_path(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("ferrite-mlp-{}-{name}.json", std::process::id()))
        .to_string_lossy()
        .into_owned()
}

#[test]
fn xor_scenario_terminates_and_converged_outputs_match_targets() {
    let config = seeded(vec![2], 2022);
    let mut network = Network::from_config(&config).unwrap();
    let set = TrainingSet::xor();

    let outcome = network.train(&set, &config.train_config()).unwrap();

    assert!(outcome.state.is_terminal());
    assert!(outcome.iterations >= 1 && outcome.iterations <= 100_000);
    assert!(outcome.total_error.is_finite());
    match outcome.state {
        TrainState::Converged => {
            assert!(outcome.total_error <= 0.001);
            for example in set.examples() {
                let f = network.run(&example.input).unwrap()[0];
                let rounded = (f * 10_000.0).round() / 10_000.0;
                assert!((rounded - example.target[0]).abs() < 0.05, "{:?} -> {f}", example.input);
            }
        }
        TrainState::MaxIterationsReached => {
            assert_eq!(outcome.iterations, 100_000);
            assert!(outcome.total_error > 0.001);
            for example in set.examples() {
                let f = network.run(&example.input).unwrap()[0];
                assert_eq!(f.round(), example.target[0], "{:?} -> {f}", example.input);
            }
        }
        TrainState::Running => unreachable!("train returned a non-terminal state"),
    }
}

#[test]
fn wider_hidden_layer_converges_on_xor() {
    let config = seeded(vec![4], 2022);
    let mut network = Network::from_config(&config).unwrap();
    let set = TrainingSet::xor();

    let outcome = network.train(&set, &config.train_config()).unwrap();

    assert_eq!(outcome.state, TrainState::Converged);
    assert!(outcome.iterations < 100_000);
    assert!(outcome.total_error <= 0.001);
    for example in set.examples() {
        let f = network.run(&example.input).unwrap()[0];
        let rounded = (f * 10_000.0).round() / 10_000.0;
        assert!((rounded - example.target[0]).abs() < 0.05, "{:?} -> {f}", example.input);
    }
}

#[test]
fn single_layer_error_never_increases_and_converges() {
    let set = TrainingSet::new(
        vec![vec![1.0, 0.0], vec![0.0, 1.0]],
        vec![vec![0.9], vec![0.1]],
        2,
        1,
    )
    .unwrap();
    let config = NetworkConfig {
        hidden_sizes: vec![],
        learning_rate: 1.0,
        error_threshold: 1e-4,
        ..seeded(vec![], 17)
    };
    let mut network = Network::from_config(&config).unwrap();

    let (tx, rx) = mpsc::channel();
    let mut train_config = config.train_config();
    train_config.progress_tx = Some(tx);
    let outcome = network.train(&set, &train_config).unwrap();

    assert_eq!(outcome.state, TrainState::Converged);
    let errors: Vec<f64> = rx.try_iter().map(|s| s.total_error).collect();
    assert_eq!(errors.len(), outcome.iterations);
    for pair in errors.windows(2) {
        assert!(pair[1] <= pair[0], "error rose from {} to {}", pair[0], pair[1]);
    }
}

#[test]
fn hidden_layer_network_fits_a_separable_set() {
    let set = TrainingSet::new(
        vec![vec![1.0, 0.0], vec![0.0, 1.0]],
        vec![vec![0.8], vec![0.3]],
        2,
        1,
    )
    .unwrap();
    let config = NetworkConfig {
        learning_rate: 0.5,
        max_iterations: 200_000,
        weights: WeightInit::Random { min: -1.0, max: 1.0, seed: Some(4) },
        ..seeded(vec![4], 4)
    };
    let mut network = Network::from_config(&config).unwrap();

    let initial: f64 = set
        .examples()
        .iter()
        .map(|e| {
            let d = e.target[0] - network.run(&e.input).unwrap()[0];
            0.5 * d * d
        })
        .sum();
    let outcome = network.train(&set, &config.train_config()).unwrap();

    assert_eq!(outcome.state, TrainState::Converged);
    assert!(outcome.total_error < initial);
}

#[test]
fn moving_window_error_falls_for_two_hidden_layers() {
    let set = TrainingSet::new(
        vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]],
        vec![vec![0.7], vec![0.2], vec![0.5]],
        2,
        1,
    )
    .unwrap();
    let config = NetworkConfig {
        weights: WeightInit::Random { min: -1.0, max: 1.0, seed: Some(8) },
        ..seeded(vec![3, 3], 8)
    };
    let mut network = Network::from_config(&config).unwrap();

    let (tx, rx) = mpsc::channel();
    let mut train_config = TrainConfig::new(0.0, 2_000);
    train_config.progress_tx = Some(tx);
    network.train(&set, &train_config).unwrap();

    let errors: Vec<f64> = rx.try_iter().map(|s| s.total_error).collect();
    let window = 200;
    let first: f64 = errors[..window].iter().sum::<f64>() / window as f64;
    let last: f64 = errors[errors.len() - window..].iter().sum::<f64>() / window as f64;
    assert!(last < first, "windowed error went from {first} to {last}");
}

#[test]
fn saved_weights_reload_into_identical_network() {
    let path = temp_path("roundtrip");
    let config = seeded(vec![3, 2], 99);
    let mut trained = Network::from_config(&config).unwrap();
    trained
        .train(&TrainingSet::xor(), &TrainConfig::new(0.0, 500))
        .unwrap();
    trained.save_weights_json(&path).unwrap();

    let reload_config = NetworkConfig {
        mode: Mode::Run,
        weights: WeightInit::Preloaded { path: path.clone() },
        ..config
    };
    let reloaded = Network::from_config(&reload_config).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(reloaded.topology(), trained.topology());
    for example in TrainingSet::xor().examples() {
        let a = trained.run(&example.input).unwrap();
        let b = reloaded.run(&example.input).unwrap();
        assert_eq!(a[0].to_bits(), b[0].to_bits());
    }
}

#[test]
fn preloading_mismatched_weights_fails_before_training() {
    let path = temp_path("mismatch");
    Network::from_config(&seeded(vec![2], 1))
        .unwrap()
        .save_weights_json(&path)
        .unwrap();

    let config = NetworkConfig {
        hidden_sizes: vec![3],
        weights: WeightInit::Preloaded { path: path.clone() },
        ..NetworkConfig::default()
    };
    let err = Network::from_config(&config).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(matches!(err, NetworkError::LayerSizesMismatch { .. }));
}

#[test]
fn run_mode_session_cannot_train() {
    let config = NetworkConfig {
        mode: Mode::Run,
        ..seeded(vec![2], 5)
    };
    let mut network = Network::from_config(&config).unwrap();
    let before = network.topology().clone();

    let err = network
        .train(&TrainingSet::xor(), &config.train_config())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(network.topology(), &before);
}

#[test]
fn inference_is_deterministic() {
    let network = Network::from_config(&seeded(vec![5, 4], 12)).unwrap();
    let first = network.run(&[0.25, 0.75]).unwrap();
    for _ in 0..5 {
        assert_eq!(network.run(&[0.25, 0.75]).unwrap(), first);
    }
}
