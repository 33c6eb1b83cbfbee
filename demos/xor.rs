use std::sync::mpsc;

use ferrite_mlp::{Network, NetworkConfig, TrainingSet, WeightInit};

fn main() {
    let config = NetworkConfig {
        weights: WeightInit::Random { min: 0.1, max: 1.5, seed: Some(2022) },
        ..NetworkConfig::default()
    };
    let mut network = Network::from_config(&config).expect("default config is valid");
    let set = TrainingSet::xor();

    let (tx, rx) = mpsc::channel();
    let mut train_config = config.train_config();
    train_config.progress_tx = Some(tx);

    let outcome = network.train(&set, &train_config).expect("xor set fits a 2-2-1 network");

    for stats in rx.try_iter().filter(|s| s.iteration % 10_000 == 0) {
        println!("Iteration {}: error = {:.6}", stats.iteration, stats.total_error);
    }
    println!(
        "Stopped after {} iterations ({}), error = {:.6}",
        outcome.iterations, outcome.state, outcome.total_error
    );

    for example in set.examples() {
        let output = network.run(&example.input).expect("input width matches");
        println!(
            "Input: {:?} -> Output: {:.4} (target {})",
            example.input, output[0], example.target[0]
        );
    }
}
