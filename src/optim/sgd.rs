use crate::network::topology::Topology;
use crate::network::trace::ActivationTrace;

/// Plain online gradient descent: no momentum, no batching, fixed rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one example's weight deltas to every layer, in place.
    ///
    /// `psis[l]` is the error signal of layer `l + 1`, so the update for the
    /// matrix below it is `W_l[a][b] += lambda * activation_a(l) * psi_b`,
    /// where layer 0's activations are the raw input.
    pub fn step(&self, topology: &mut Topology, trace: &ActivationTrace, psis: &[Vec<f64>]) {
        for (layer, psi) in psis.iter().enumerate() {
            let upstream = &trace.activations[layer];
            let Some(weights) = topology.weight_matrix_mut(layer) else {
                continue;
            };
            for (a, row) in weights.data.iter_mut().enumerate() {
                for (b, w) in row.iter_mut().enumerate() {
                    *w += self.learning_rate * upstream[a] * psi[b];
                }
            }
        }
    }
}
