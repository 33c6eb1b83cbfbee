use log::{debug, info};

use crate::config::Mode;
use crate::data::dataset::TrainingSet;
use crate::error::{NetworkError, Result};
use crate::network::network::Network;
use crate::train::iteration_stats::IterationStats;
use crate::train::state::{TrainOutcome, TrainState, TrainingSession};
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_iteration;

/// Trains `network` on `set` until the total error of an iteration falls to
/// `config.error_threshold` or `config.max_iterations` sweeps have run.
///
/// # Stop rules
/// After every full sweep the iteration counter is incremented, then:
/// 1. `total_error <= error_threshold` → `TrainState::Converged`
/// 2. `iteration >= max_iterations`    → `TrainState::MaxIterationsReached`
///
/// # Errors
/// Fails before touching any weight if the network was built in run mode or
/// the training set's widths differ from the network's input/output layers.
pub fn train_loop(
    network: &mut Network,
    set: &TrainingSet,
    config: &TrainConfig,
) -> Result<TrainOutcome> {
    if network.mode() != Mode::Train {
        return Err(NetworkError::TrainingInRunMode);
    }
    check_set_fits(network, set)?;
    if config.max_iterations == 0 {
        return Err(NetworkError::invalid_config("max_iterations", "must be at least 1"));
    }

    info!(
        "training {:?} on {} example(s): threshold {}, at most {} iteration(s)",
        network.topology().layer_sizes(),
        set.len(),
        config.error_threshold,
        config.max_iterations
    );

    let mut session = TrainingSession::new();

    while !session.state.is_terminal() {
        let total_error = train_iteration(network, set)?;
        session.finish_iteration(total_error, config.error_threshold, config.max_iterations);

        if let Some(ref tx) = config.progress_tx {
            // A receiver that went away does not stop training.
            let _ = tx.send(IterationStats {
                iteration: session.iteration,
                max_iterations: config.max_iterations,
                total_error,
            });
        }

        if config.log_every > 0 && session.iteration % config.log_every == 0 {
            debug!("iteration {}: total error {total_error}", session.iteration);
        }
    }

    match session.state {
        TrainState::Converged => info!(
            "training converged: error ({}) reached threshold ({}) after {} iteration(s)",
            session.total_error, config.error_threshold, session.iteration
        ),
        TrainState::MaxIterationsReached => info!(
            "training stopped: iterations ({}) reached maximum ({}), error {}",
            session.iteration, config.max_iterations, session.total_error
        ),
        TrainState::Running => {}
    }

    Ok(session.outcome())
}

fn check_set_fits(network: &Network, set: &TrainingSet) -> Result<()> {
    let topology = network.topology();
    if set.input_size() != topology.input_size() {
        return Err(NetworkError::InputLength {
            example: 0,
            expected: topology.input_size(),
            got: set.input_size(),
        });
    }
    if set.output_size() != topology.output_size() {
        return Err(NetworkError::TargetLength {
            example: 0,
            expected: topology.output_size(),
            got: set.output_size(),
        });
    }
    Ok(())
}
