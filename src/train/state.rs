use std::fmt;

/// Where the training state machine stands.
///
/// `Running` is the only non-terminal state. The two terminal states are kept
/// apart because they mean different things: the error target was met, or
/// the iteration budget ran out first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainState {
    Running,
    Converged,
    MaxIterationsReached,
}

impl TrainState {
    pub fn is_terminal(self) -> bool {
        self != TrainState::Running
    }
}

impl fmt::Display for TrainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainState::Running => write!(f, "running"),
            TrainState::Converged => write!(f, "converged"),
            TrainState::MaxIterationsReached => write!(f, "maximum iterations reached"),
        }
    }
}

/// Result of a completed training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainOutcome {
    /// Always terminal.
    pub state: TrainState,
    pub iterations: usize,
    /// Total error of the final iteration.
    pub total_error: f64,
}

/// Mutable bookkeeping of one training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingSession {
    pub iteration: usize,
    pub total_error: f64,
    pub state: TrainState,
}

impl TrainingSession {
    pub fn new() -> Self {
        TrainingSession {
            iteration: 0,
            total_error: 0.0,
            state: TrainState::Running,
        }
    }

    /// Records a finished sweep and applies the stop rules in priority order:
    /// error at or below threshold, then iteration budget.
    pub fn finish_iteration(
        &mut self,
        total_error: f64,
        error_threshold: f64,
        max_iterations: usize,
    ) -> TrainState {
        self.total_error = total_error;
        self.iteration += 1;
        self.state = if total_error <= error_threshold {
            TrainState::Converged
        } else if self.iteration >= max_iterations {
            TrainState::MaxIterationsReached
        } else {
            TrainState::Running
        };
        self.state
    }

    pub fn outcome(&self) -> TrainOutcome {
        TrainOutcome {
            state: self.state,
            iterations: self.iteration,
            total_error: self.total_error,
        }
    }
}

impl Default for TrainingSession {
    fn default() -> Self {
        Self::new()
    }
}
