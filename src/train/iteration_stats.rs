use serde::{Serialize, Deserialize};

/// Per-iteration training statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the loop sends
/// one `IterationStats` value after every completed sweep of the training set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationStats {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Iteration budget for this run.
    pub max_iterations: usize,
    /// Sum of every example's `0.5 * sum((t - o)^2)` during this sweep.
    pub total_error: f64,
}
