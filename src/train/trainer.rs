use crate::{
    data::dataset::TrainingSet,
    error::Result,
    network::network::Network,
};

/// Runs one iteration: a single in-order sweep over `set`, with each
/// example's weight update applied before the next example's forward pass.
///
/// Returns the iteration's total error, the sum over examples of
/// `0.5 * sum((t - o)^2)`, where `o` is the output seen before that example's
/// update.
pub fn train_iteration(network: &mut Network, set: &TrainingSet) -> Result<f64> {
    let mut total_error = 0.0;

    for (index, example) in set.examples().iter().enumerate() {
        total_error += network
            .train_example(&example.input, &example.target)
            .map_err(|e| e.at_example(index))?;
    }

    Ok(total_error)
}
