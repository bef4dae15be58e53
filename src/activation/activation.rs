/// Logistic sigmoid: `1 / (1 + e^-x)`.
///
/// Not clamped; extreme inputs saturate to exactly `0.0` or `1.0`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid derivative expressed through the sigmoid's own output.
///
/// `a` must already be `sigmoid(z)`; returns `a * (1 - a)`.
pub fn sigmoid_derivative(a: f64) -> f64 {
    a * (1.0 - a)
}
