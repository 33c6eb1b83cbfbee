/// Logistic sigmoid: 1 / (1 + e^(-x)).
///
/// Total over finite inputs; saturates toward 0 and 1 at the extremes.
pub fn activate(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid at `x`, computed from a single evaluation of
/// `activate(x)`: f(x) * (1 - f(x)).
pub fn activate_derivative(x: f64) -> f64 {
    let fx = activate(x);
    fx * (1.0 - fx)
}
