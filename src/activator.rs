//! Activation function types.

/// [Activation function](https://en.wikipedia.org/wiki/Activation_function)
/// types.
///
/// One activator is chosen per network and shared by every neuron in it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Activator {
    /// Rectified Linear Unit
    ReLU,
    /// Sigmoid function
    #[default]
    Sigmoid,
    /// Hyperbolic tan function
    TanH,
}

impl Activator {
    /// Evaluates `f(x)` for the selected activation function.
    pub fn f(&self, x: f64) -> f64 {
        match *self {
            Activator::ReLU => x.max(0.0),
            Activator::Sigmoid => sigmoid(x),
            Activator::TanH => x.tanh(),
        }
    }

    /// Evaluates the derivative `f'(x)`.
    ///
    /// `x` is the *input* to the activation function, i.e. the weighted sum
    /// a neuron cached during its last forward call, not its output.
    pub fn fprime(&self, x: f64) -> f64 {
        match *self {
            Activator::ReLU => {
                if x > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activator::Sigmoid => {
                let y = sigmoid(x);
                y * (1.0 - y)
            }
            Activator::TanH => 1.0 - x.tanh().powi(2),
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sigmoid_values() {
        let s = Activator::Sigmoid;
        assert_abs_diff_eq!(s.f(0.0), 0.5);
        assert_abs_diff_eq!(s.fprime(0.0), 0.25);
        assert_abs_diff_eq!(s.f(1000.0), 1.0);
        assert_abs_diff_eq!(s.f(-1000.0), 0.0);
    }

    #[test]
    fn relu_derivative_at_zero_is_zero() {
        let r = Activator::ReLU;
        assert_eq!(r.f(-3.0), 0.0);
        assert_eq!(r.f(2.5), 2.5);
        assert_eq!(r.fprime(0.0), 0.0);
        assert_eq!(r.fprime(1e-9), 1.0);
        assert_eq!(r.fprime(-1.0), 0.0);
    }

    #[test]
    fn tanh_is_stable_for_large_inputs() {
        let t = Activator::TanH;
        assert_abs_diff_eq!(t.f(0.0), 0.0);
        assert_abs_diff_eq!(t.fprime(0.0), 1.0);
        assert_abs_diff_eq!(t.f(1000.0), 1.0);
        assert_abs_diff_eq!(t.fprime(1000.0), 0.0);
        assert!(!t.f(-800.0).is_nan());
    }

    #[test]
    fn derivatives_match_finite_differences() {
        let h = 1e-6;
        for activator in [Activator::Sigmoid, Activator::TanH, Activator::ReLU] {
            for &x in &[-2.0, -0.5, 0.3, 1.7] {
                let numeric = (activator.f(x + h) - activator.f(x - h)) / (2.0 * h);
                assert_abs_diff_eq!(activator.fprime(x), numeric, epsilon = 1e-6);
            }
        }
    }
}
