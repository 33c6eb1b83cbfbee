use std::env;
use std::process::ExitCode;

use log::{error, info, warn};

use ferrite_mlp::{Dataset, Mode, Network, NetworkConfig, Report, Result, TrainingSet};

// Usage: ferrite-mlp [CONFIG.json]
// Without a config the built-in defaults train a 2-2-1 network on XOR.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: Option<String>) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            info!("loading configuration from {path}");
            NetworkConfig::load_json(&path)?
        }
        None => NetworkConfig::default(),
    };
    echo_config(&config);

    let dataset = match &config.dataset {
        Some(path) => Dataset::load_json(path)?,
        None => Dataset::from(&TrainingSet::xor()),
    };

    let mut network = Network::from_config(&config)?;

    let report = match config.mode {
        Mode::Train => {
            let set = dataset
                .clone()
                .into_training_set(config.input_size, config.output_size)?;
            let outcome = network.train(&set, &config.train_config())?;
            Report::evaluate(&network, &dataset.inputs, dataset.targets.as_deref(), Some(&outcome))?
        }
        Mode::Run => {
            let inputs = dataset.checked_inputs(config.input_size, config.output_size)?;
            Report::evaluate(&network, inputs, dataset.targets.as_deref(), None)?
        }
    };

    print!("{}", report.render(config.report_precision));

    if let Some(path) = &config.save_weights {
        if config.mode == Mode::Run {
            warn!("saving weights from a run-only session; they are unchanged from the input");
        }
        network.save_weights_json(path)?;
    }

    Ok(())
}

fn echo_config(config: &NetworkConfig) {
    info!("mode: {:?}", config.mode);
    info!("layer sizes: {:?}", config.layer_sizes());
    info!("error threshold: {}", config.error_threshold);
    info!("learning rate: {}", config.learning_rate);
    info!("maximum iterations: {}", config.max_iterations);
    info!("initial weights: {:?}", config.weights);
}
