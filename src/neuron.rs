use rand::Rng;

use crate::activator::Activator;
use crate::vector;

/// Whether a neuron computes a weighted sum or is a constant bias source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeuronKind {
    Standard,
    /// Always outputs `1.0`. Its weights are kept only so that every neuron
    /// in a layer has the same shape; they are never trained.
    Bias,
}

/// A single node of a layer.
///
/// The neuron does not own an activation function: the owning layer passes
/// its shared `Activator` into every call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Neuron {
    kind: NeuronKind,
    /// One weight per output of the previous layer, bias slot included.
    weights: Vec<f64>,
    /// Weighted input sum from the most recent forward call.
    input_cache: f64,
    /// Error term from the most recent backward call.
    delta: f64,
    learning_rate: f64,
}

impl Neuron {
    /// Creates a neuron with `inputs` weights drawn uniformly from `[-1, 1)`.
    pub fn new<R: Rng + ?Sized>(inputs: usize, learning_rate: f64, rng: &mut R) -> Self {
        Neuron::with_weights(vector::random_weights(inputs, rng), learning_rate)
    }

    /// Creates a bias neuron. `inputs` dummy weights are still generated.
    pub fn bias<R: Rng + ?Sized>(inputs: usize, learning_rate: f64, rng: &mut R) -> Self {
        Neuron {
            kind: NeuronKind::Bias,
            ..Neuron::new(inputs, learning_rate, rng)
        }
    }

    /// Creates a standard neuron with the given weights.
    pub fn with_weights(weights: Vec<f64>, learning_rate: f64) -> Self {
        Neuron {
            kind: NeuronKind::Standard,
            weights,
            input_cache: 0.0,
            delta: 0.0,
            learning_rate,
        }
    }

    /// Returns true for a bias neuron.
    pub fn is_bias(&self) -> bool {
        self.kind == NeuronKind::Bias
    }

    /// Returns one weight per input, bias slot included.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the weighted sum from the most recent forward call.
    pub fn input_cache(&self) -> f64 {
        self.input_cache
    }

    /// Returns the error term from the most recent backward call.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Computes the activated output for `inputs`, caching the weighted sum.
    ///
    /// A bias neuron ignores `inputs` entirely and returns `1.0`.
    ///
    /// # Panics
    ///
    /// If this is a standard neuron and `inputs.len()` differs from the
    /// number of weights.
    pub fn output(&mut self, inputs: &[f64], activator: Activator) -> f64 {
        match self.kind {
            NeuronKind::Bias => 1.0,
            NeuronKind::Standard => {
                self.input_cache = vector::dot(inputs, &self.weights);
                activator.f(self.input_cache)
            }
        }
    }

    /// Derivative of the activation at the cached weighted sum. Always zero
    /// for a bias neuron, so its delta is zero and its weights never move.
    pub fn derivative(&self, activator: Activator) -> f64 {
        match self.kind {
            NeuronKind::Bias => 0.0,
            NeuronKind::Standard => activator.fprime(self.input_cache),
        }
    }

    pub(crate) fn set_delta(&mut self, delta: f64) {
        self.delta = delta;
    }

    /// Applies `weight[w] += learning_rate * inputs[w] * delta`.
    pub(crate) fn update_weights(&mut self, inputs: &[f64]) {
        assert_eq!(inputs.len(), self.weights.len());
        let step = self.learning_rate * self.delta;
        for (weight, input) in self.weights.iter_mut().zip(inputs) {
            *weight += step * input;
        }
    }
}
