use std::sync::mpsc;
use crate::train::iteration_stats::IterationStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `error_threshold` — stop as CONVERGED once an iteration's total error is
///                       at or below this value
/// - `max_iterations`  — stop as MAX_ITERATIONS_REACHED after this many sweeps
/// - `log_every`       — log a progress line every N iterations; `0` disables it
/// - `progress_tx`     — optional channel sender; one `IterationStats` is sent
///                       per completed iteration.  A dropped receiver is
///                       ignored: training always runs to a terminal state.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub error_threshold: f64,
    pub max_iterations: usize,
    pub log_every: usize,
    pub progress_tx: Option<mpsc::Sender<IterationStats>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel and no logging.
    pub fn new(error_threshold: f64, max_iterations: usize) -> Self {
        TrainConfig {
            error_threshold,
            max_iterations,
            log_every: 0,
            progress_tx: None,
        }
    }
}
