pub mod math;
pub mod activation;
pub mod config;
pub mod data;
pub mod error;
pub mod network;
pub mod loss;
pub mod optim;
pub mod report;
pub mod train;
pub mod weights;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::{activate, activate_derivative};
pub use config::{Mode, NetworkConfig, WeightInit};
pub use data::{Dataset, TrainingExample, TrainingSet};
pub use error::{ErrorKind, NetworkError, Result};
pub use network::{ActivationTrace, Network, PassMode, Topology};
pub use loss::SquaredError;
pub use optim::Sgd;
pub use report::Report;
pub use train::{train_iteration, train_loop, IterationStats, TrainConfig, TrainOutcome, TrainState};
