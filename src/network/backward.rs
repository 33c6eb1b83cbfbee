use crate::activation::activate_derivative;
use crate::error::{NetworkError, Result};
use crate::loss::squared_error::SquaredError;
use crate::network::topology::Topology;
use crate::network::trace::ActivationTrace;
use crate::optim::sgd::Sgd;

/// Error signals for one training example.
///
/// `omega` is the raw output error `target - output`; `psis[l - 1]` is the
/// error signal of layer `l`, for every non-input layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSignals {
    pub omega: Vec<f64>,
    pub psis: Vec<Vec<f64>>,
}

/// Computes every layer's error signal from the output back to the first
/// hidden layer. All signals are derived from the weights as they stood for
/// the forward pass that produced `trace`.
pub fn error_signals(
    topology: &Topology,
    trace: &ActivationTrace,
    target: &[f64],
) -> Result<ErrorSignals> {
    let thetas = trace.thetas.as_ref().ok_or(NetworkError::MissingThetas)?;
    check_trace_shape(topology, &trace.activations, thetas)?;
    if target.len() != topology.output_size() {
        return Err(NetworkError::TargetLength {
            example: 0,
            expected: topology.output_size(),
            got: target.len(),
        });
    }

    let depth = topology.depth();
    let mut psis: Vec<Vec<f64>> = vec![Vec::new(); depth];

    let omega = SquaredError::omega(trace.output(), target);
    psis[depth - 1] = omega
        .iter()
        .zip(thetas[depth - 1].iter())
        .map(|(w, theta)| w * activate_derivative(*theta))
        .collect();

    // Hidden layers, strictly from the top down: layer l needs psi of l + 1.
    for layer in (1..depth).rev() {
        let weights = &topology.weights()[layer];
        let above = &psis[layer];
        let layer_psi: Vec<f64> = (0..weights.rows)
            .map(|j| {
                let mut omega_j = 0.0;
                for (i, psi_i) in above.iter().enumerate() {
                    omega_j += psi_i * weights.data[j][i];
                }
                omega_j * activate_derivative(thetas[layer - 1][j])
            })
            .collect();
        psis[layer - 1] = layer_psi;
    }

    Ok(ErrorSignals { omega, psis })
}

/// The trace must come from a forward pass over a topology of this shape.
fn check_trace_shape(
    topology: &Topology,
    activations: &[Vec<f64>],
    thetas: &[Vec<f64>],
) -> Result<()> {
    let expected = topology.layer_sizes();
    let widths: Vec<usize> = activations.iter().map(Vec::len).collect();
    let thetas_fit = thetas.len() + 1 == expected.len()
        && thetas.iter().zip(&expected[1..]).all(|(t, &n)| t.len() == n);
    if widths != expected || !thetas_fit {
        return Err(NetworkError::TraceShapeMismatch {
            expected: expected.to_vec(),
            got: widths,
        });
    }
    Ok(())
}

/// Backpropagates one example and immediately applies its weight deltas.
///
/// Returns the output omega so the caller can accumulate the example's error.
/// The update is online: the next forward pass already sees the new weights.
pub fn backward(
    topology: &mut Topology,
    trace: &ActivationTrace,
    target: &[f64],
    optimizer: &Sgd,
) -> Result<Vec<f64>> {
    let signals = error_signals(topology, trace, target)?;
    optimizer.step(topology, trace, &signals.psis);
    Ok(signals.omega)
}
