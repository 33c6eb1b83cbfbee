pub mod config;

pub use config::{Mode, NetworkConfig, WeightInit};
