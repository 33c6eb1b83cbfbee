use crate::activation::activate;
use crate::error::{NetworkError, Result};
use crate::network::topology::Topology;
use crate::network::trace::{ActivationTrace, PassMode};

/// Propagates `input` through every layer of `topology`, input to output.
///
/// For each layer `l` and each unit `j` of layer `l + 1`, the weighted sum
/// `theta_j = sum_k a_k * W_l[k][j]` is accumulated in ascending `k` and passed
/// through the sigmoid. No randomness is involved: the same weights and input
/// always give the same bits.
pub fn forward(topology: &Topology, input: &[f64], mode: PassMode) -> Result<ActivationTrace> {
    if input.len() != topology.input_size() {
        return Err(NetworkError::InputLength {
            example: 0,
            expected: topology.input_size(),
            got: input.len(),
        });
    }

    let mut activations: Vec<Vec<f64>> = Vec::with_capacity(topology.depth() + 1);
    let mut thetas: Vec<Vec<f64>> = Vec::with_capacity(topology.depth());
    activations.push(input.to_vec());

    for weights in topology.weights() {
        let upstream = &activations[activations.len() - 1];
        let mut layer_theta = Vec::with_capacity(weights.cols);
        let mut layer_out = Vec::with_capacity(weights.cols);

        for j in 0..weights.cols {
            let mut theta = 0.0;
            for (k, a) in upstream.iter().enumerate() {
                theta += a * weights.data[k][j];
            }
            layer_theta.push(theta);
            layer_out.push(activate(theta));
        }

        if mode == PassMode::Training {
            thetas.push(layer_theta);
        }
        activations.push(layer_out);
    }

    Ok(ActivationTrace {
        activations,
        thetas: match mode {
            PassMode::Training => Some(thetas),
            PassMode::Inference => None,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activate;
    use crate::error::ErrorKind;

    fn two_two_one() -> Topology {
        let mut t = Topology::zeros(&[2, 2, 1]).unwrap();
        t.set_weight_at(0, 0, 0, 0.5).unwrap();
        t.set_weight_at(0, 1, 0, -0.25).unwrap();
        t.set_weight_at(0, 0, 1, 1.0).unwrap();
        t.set_weight_at(0, 1, 1, 0.75).unwrap();
        t.set_weight_at(1, 0, 0, 2.0).unwrap();
        t.set_weight_at(1, 1, 0, -1.0).unwrap();
        t
    }

    #[test]
    fn matches_hand_computed_values() {
        let t = two_two_one();
        let trace = forward(&t, &[1.0, 2.0], PassMode::Training).unwrap();

        let theta_h0 = 1.0 * 0.5 + 2.0 * -0.25;
        let theta_h1 = 1.0 * 1.0 + 2.0 * 0.75;
        let h0 = activate(theta_h0);
        let h1 = activate(theta_h1);
        let theta_f = h0 * 2.0 + h1 * -1.0;

        let thetas = trace.thetas.as_ref().unwrap();
        assert_eq!(thetas[0], vec![theta_h0, theta_h1]);
        assert_eq!(thetas[1], vec![theta_f]);
        assert_eq!(trace.activations[1], vec![h0, h1]);
        assert_eq!(trace.output(), &[activate(theta_f)]);
        assert_eq!(trace.input(), &[1.0, 2.0]);
    }

    #[test]
    fn inference_skips_thetas_but_agrees_on_outputs() {
        let t = two_two_one();
        let train = forward(&t, &[0.3, -0.7], PassMode::Training).unwrap();
        let infer = forward(&t, &[0.3, -0.7], PassMode::Inference).unwrap();
        assert!(infer.thetas.is_none());
        assert_eq!(train.activations, infer.activations);
    }

    #[test]
    fn repeated_passes_are_bit_identical() {
        let t = two_two_one();
        let first = forward(&t, &[0.9, 0.1], PassMode::Inference).unwrap();
        for _ in 0..10 {
            let again = forward(&t, &[0.9, 0.1], PassMode::Inference).unwrap();
            assert_eq!(
                again.output()[0].to_bits(),
                first.output()[0].to_bits()
            );
        }
    }

    #[test]
    fn wrong_input_width_is_a_validation_error() {
        let t = two_two_one();
        let err = forward(&t, &[1.0], PassMode::Inference).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
