use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};
use crate::network::topology::check_weight_range;
use crate::train::train_config::TrainConfig;

/// What a session does with its network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Forward passes only; training is refused.
    Run,
    Train,
}

/// Where the initial weights come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum WeightInit {
    /// Every weight drawn independently from `U[min, max]`. A fixed `seed`
    /// makes the draw reproducible.
    Random {
        min: f64,
        max: f64,
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Weights read from a file previously written by `weights::save_json`.
    Preloaded { path: String },
}

impl Default for WeightInit {
    fn default() -> Self {
        WeightInit::Random {
            min: 0.1,
            max: 1.5,
            seed: None,
        }
    }
}

/// The immutable description of one training or inference session.
///
/// Built once at start-up (usually from JSON) and passed by reference from
/// then on. Every field has a default, so a config file only needs the values
/// it changes; `Default` is a 2-2-1 XOR trainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub mode: Mode,
    pub input_size: usize,
    pub hidden_sizes: Vec<usize>,
    pub output_size: usize,
    pub learning_rate: f64,
    pub error_threshold: f64,
    pub max_iterations: usize,
    pub weights: WeightInit,
    /// Dataset JSON; `None` uses the built-in XOR truth table.
    pub dataset: Option<String>,
    /// Where to write the final weights, if anywhere.
    pub save_weights: Option<String>,
    /// Decimal places in the printed report.
    pub report_precision: usize,
    /// Log progress every N iterations; 0 disables it.
    pub log_every: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            mode: Mode::Train,
            input_size: 2,
            hidden_sizes: vec![2],
            output_size: 1,
            learning_rate: 0.3,
            error_threshold: 0.001,
            max_iterations: 100_000,
            weights: WeightInit::default(),
            dataset: None,
            save_weights: None,
            report_precision: 4,
            log_every: 0,
        }
    }
}

impl NetworkConfig {
    /// `[input_size, hidden_sizes..., output_size]`.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden_sizes.len() + 2);
        sizes.push(self.input_size);
        sizes.extend_from_slice(&self.hidden_sizes);
        sizes.push(self.output_size);
        sizes
    }

    /// Checks every field's range. Called by `load_json`; call it yourself
    /// on configs built in code.
    pub fn validate(&self) -> Result<()> {
        if self.input_size == 0 {
            return Err(NetworkError::invalid_config("input_size", "must be at least 1"));
        }
        if self.output_size == 0 {
            return Err(NetworkError::invalid_config("output_size", "must be at least 1"));
        }
        if let Some(i) = self.hidden_sizes.iter().position(|&n| n == 0) {
            return Err(NetworkError::invalid_config(
                "hidden_sizes",
                format!("hidden layer {i} has no units"),
            ));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NetworkError::invalid_config(
                "learning_rate",
                format!("must be a positive number, got {}", self.learning_rate),
            ));
        }
        if !(self.error_threshold.is_finite() && self.error_threshold >= 0.0) {
            return Err(NetworkError::invalid_config(
                "error_threshold",
                format!("must be a non-negative number, got {}", self.error_threshold),
            ));
        }
        if self.max_iterations == 0 {
            return Err(NetworkError::invalid_config("max_iterations", "must be at least 1"));
        }
        if let WeightInit::Random { min, max, .. } = self.weights {
            check_weight_range(min, max)?;
        }
        Ok(())
    }

    /// Training-loop settings derived from this config. No progress channel
    /// is attached.
    pub fn train_config(&self) -> TrainConfig {
        let mut config = TrainConfig::new(self.error_threshold, self.max_iterations);
        config.log_every = self.log_every;
        config
    }

    /// Deserializes and validates a config from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: NetworkConfig =
            serde_json::from_reader(reader).map_err(NetworkError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<NetworkConfig> {
        let config: NetworkConfig =
            serde_json::from_str(json).map_err(NetworkError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
