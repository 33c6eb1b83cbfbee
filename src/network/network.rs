use log::info;

use crate::config::{Mode, NetworkConfig};
use crate::data::dataset::TrainingSet;
use crate::error::Result;
use crate::loss::squared_error::SquaredError;
use crate::network::backward::backward;
use crate::network::forward::forward;
use crate::network::topology::Topology;
use crate::network::trace::{ActivationTrace, PassMode};
use crate::optim::sgd::Sgd;
use crate::train::{train_loop, TrainConfig, TrainOutcome};
use crate::weights;

/// A fully-connected sigmoid network together with how it may be used.
///
/// The topology is allocated once and only ever mutated in place by weight
/// updates.
#[derive(Debug, Clone)]
pub struct Network {
    topology: Topology,
    optimizer: Sgd,
    mode: Mode,
}

impl Network {
    pub fn new(topology: Topology, learning_rate: f64, mode: Mode) -> Network {
        Network {
            topology,
            optimizer: Sgd::new(learning_rate),
            mode,
        }
    }

    /// Validates `config` and builds the network, drawing or loading its
    /// initial weights as configured.
    pub fn from_config(config: &NetworkConfig) -> Result<Network> {
        config.validate()?;
        let topology = weights::initialize(&config.weights, &config.layer_sizes())?;
        info!(
            "network {:?} ready in {:?} mode, learning rate {}",
            topology.layer_sizes(),
            config.mode,
            config.learning_rate
        );
        Ok(Network::new(topology, config.learning_rate, config.mode))
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate
    }

    pub fn forward(&self, input: &[f64], mode: PassMode) -> Result<ActivationTrace> {
        forward(&self.topology, input, mode)
    }

    /// Inference: the output vector for one input.
    pub fn run(&self, input: &[f64]) -> Result<Vec<f64>> {
        Ok(forward(&self.topology, input, PassMode::Inference)?.into_output())
    }

    /// Runs every input in order. Validation errors carry the input's index.
    pub fn run_all(&self, inputs: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        inputs
            .iter()
            .enumerate()
            .map(|(i, input)| self.run(input).map_err(|e| e.at_example(i)))
            .collect()
    }

    /// One online training step: forward, backpropagate, update.
    ///
    /// Returns the example's error `0.5 * sum((t - o)^2)` measured on the
    /// output produced before the update.
    pub fn train_example(&mut self, input: &[f64], target: &[f64]) -> Result<f64> {
        let trace = forward(&self.topology, input, PassMode::Training)?;
        let omega = backward(&mut self.topology, &trace, target, &self.optimizer)?;
        Ok(SquaredError::loss(&omega))
    }

    /// Drives `train_loop` to a terminal state.
    pub fn train(&mut self, set: &TrainingSet, config: &TrainConfig) -> Result<TrainOutcome> {
        train_loop(self, set, config)
    }

    /// Writes the current weights as pretty-printed JSON.
    pub fn save_weights_json(&self, path: &str) -> Result<()> {
        weights::save_json(&self.topology, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeightInit;
    use crate::error::ErrorKind;

    fn seeded_config() -> NetworkConfig {
        NetworkConfig {
            weights: WeightInit::Random { min: 0.1, max: 1.5, seed: Some(3) },
            ..NetworkConfig::default()
        }
    }

    #[test]
    fn from_config_builds_configured_shape() {
        let config = NetworkConfig {
            hidden_sizes: vec![4, 3],
            ..seeded_config()
        };
        let net = Network::from_config(&config).unwrap();
        assert_eq!(net.topology().layer_sizes(), &[2, 4, 3, 1]);
        assert_eq!(net.learning_rate(), 0.3);
        assert_eq!(net.mode(), Mode::Train);
    }

    #[test]
    fn same_seed_gives_same_network() {
        let a = Network::from_config(&seeded_config()).unwrap();
        let b = Network::from_config(&seeded_config()).unwrap();
        assert_eq!(a.topology(), b.topology());
    }

    #[test]
    fn from_config_validates_first() {
        let config = NetworkConfig {
            learning_rate: -1.0,
            ..seeded_config()
        };
        assert_eq!(
            Network::from_config(&config).unwrap_err().kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn unsampleable_weight_range_fails_without_panicking() {
        let config = NetworkConfig {
            weights: WeightInit::Random { min: -1e308, max: 1e308, seed: Some(1) },
            ..NetworkConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(matches!(
            Network::from_config(&config),
            Err(crate::error::NetworkError::InvalidWeightRange { .. })
        ));
    }

    #[test]
    fn run_all_reports_which_input_was_wrong() {
        let net = Network::from_config(&seeded_config()).unwrap();
        let err = net
            .run_all(&[vec![0.0, 1.0], vec![1.0, 1.0], vec![1.0]])
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::NetworkError::InputLength { example: 2, expected: 2, got: 1 }
        ));
    }

    #[test]
    fn train_example_returns_pre_update_error() {
        let mut net = Network::from_config(&seeded_config()).unwrap();
        let before = net.run(&[1.0, 0.0]).unwrap()[0];
        let error = net.train_example(&[1.0, 0.0], &[1.0]).unwrap();
        assert_eq!(error, 0.5 * ((1.0 - before) * (1.0 - before)));
    }
}
