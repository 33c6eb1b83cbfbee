/// Whether a forward pass should keep the pre-activation sums needed for
/// backpropagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassMode {
    Inference,
    Training,
}

/// Everything one forward pass produced.
///
/// `activations[0]` is the raw input and `activations[l]` the output of layer
/// `l`. In training mode `thetas[l - 1]` holds the weighted sums entering
/// layer `l` (there is none for the input layer); in inference mode `thetas`
/// is `None`.
///
/// A trace is built fresh by every forward call and owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationTrace {
    pub activations: Vec<Vec<f64>>,
    pub thetas: Option<Vec<Vec<f64>>>,
}

impl ActivationTrace {
    pub fn input(&self) -> &[f64] {
        &self.activations[0]
    }

    pub fn output(&self) -> &[f64] {
        &self.activations[self.activations.len() - 1]
    }

    pub fn into_output(mut self) -> Vec<f64> {
        self.activations.pop().unwrap_or_default()
    }
}
