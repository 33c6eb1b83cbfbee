/// Half sum-of-squares error, the quantity the training loop drives down.
pub struct SquaredError;

impl SquaredError {
    /// Per-output raw error `omega_i = target_i - output_i`.
    pub fn omega(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(o, t)| t - o)
            .collect()
    }

    /// Scalar error for one example: sum of `0.5 * omega_i^2`, accumulated in
    /// output order.
    pub fn loss(omega: &[f64]) -> f64 {
        omega.iter().fold(0.0, |acc, w| acc + 0.5 * (w * w))
    }
}
