use itertools::multizip;
use rand::Rng;

use crate::activator::Activator;
use crate::error::{Error, Result};
use crate::neuron::Neuron;
use crate::vector;

/// A single fully connected layer of the neural network.
///
/// A layer's role is decided by where it sits in the network, not by a tag:
/// the input layer has no predecessor and no neurons of its own, it only
/// passes its input through (plus a `1.0` slot if biased). Every other layer
/// holds one neuron per configured unit, followed by a bias neuron when
/// `has_bias` is set.
///
/// A deserialized `Layer` is taken as-is; its shapes are only verified when
/// it is restored as part of a [`Network`](crate::feed_forward::Network).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Layer {
    /// The activation function to be used for every neuron in the layer.
    activator: Activator,
    /// Number of configured units, bias excluded.
    width: usize,
    has_bias: bool,
    /// Output width of the preceding layer, or `None` for the input layer.
    previous_len: Option<usize>,
    neurons: Vec<Neuron>,
    /// The outputs produced by the most recent forward call.
    output_cache: Vec<f64>,
}

impl Layer {
    /// Creates the input layer, which has no predecessor.
    pub fn input(width: usize, has_bias: bool, activator: Activator) -> Self {
        Layer {
            activator,
            width,
            has_bias,
            previous_len: None,
            neurons: Vec::new(),
            output_cache: vec![0.0; width + has_bias as usize],
        }
    }

    /// Creates a hidden or output layer with random weights.
    ///
    /// Arguments:
    ///
    ///  * `previous` - the layer feeding this one; every neuron gets one
    ///                 weight per output of `previous`.
    ///  * `width` - the number of neurons, bias excluded.
    ///  * `has_bias` - whether to append a bias neuron.
    pub fn new<R: Rng + ?Sized>(
        previous: &Layer,
        width: usize,
        activator: Activator,
        learning_rate: f64,
        has_bias: bool,
        rng: &mut R,
    ) -> Self {
        let inputs = previous.output_len();
        let mut neurons: Vec<Neuron> = (0..width)
            .map(|_| Neuron::new(inputs, learning_rate, rng))
            .collect();
        if has_bias {
            neurons.push(Neuron::bias(inputs, learning_rate, rng));
        }
        Layer {
            activator,
            width,
            has_bias,
            previous_len: Some(inputs),
            output_cache: vec![0.0; neurons.len()],
            neurons,
        }
    }

    /// Returns true for the network's first layer.
    pub fn is_input(&self) -> bool {
        self.previous_len.is_none()
    }

    /// Returns the activation function shared by the layer's neurons.
    pub fn activator(&self) -> Activator {
        self.activator
    }

    /// Returns the number of configured units, bias excluded.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of values this layer hands to the next one.
    pub fn output_len(&self) -> usize {
        self.width + self.has_bias as usize
    }

    /// Returns true if the layer appends a bias output.
    pub fn has_bias(&self) -> bool {
        self.has_bias
    }

    /// Returns the neurons, bias neuron last; empty for the input layer.
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Returns the outputs of the most recent forward call.
    pub fn output_cache(&self) -> &[f64] {
        &self.output_cache
    }

    /// Feeds `inputs` through the layer and returns the cached outputs.
    ///
    /// The input layer copies `inputs`, appending `1.0` when biased; any
    /// other layer evaluates each of its neurons in order.
    pub fn forward(&mut self, inputs: &[f64]) -> Result<&[f64]> {
        match self.previous_len {
            None => {
                if inputs.len() != self.width {
                    return Err(Error::shape("network input", self.width, inputs.len()));
                }
                self.output_cache.clear();
                self.output_cache.extend_from_slice(inputs);
                if self.has_bias {
                    self.output_cache.push(1.0);
                }
            }
            Some(expected) => {
                if inputs.len() != expected {
                    return Err(Error::shape("layer input", expected, inputs.len()));
                }
                let activator = self.activator;
                for (out, neuron) in self.output_cache.iter_mut().zip(&mut self.neurons) {
                    *out = neuron.output(inputs, activator);
                }
            }
        }
        Ok(&self.output_cache)
    }

    /// Computes deltas when this is the network's last layer.
    ///
    /// `delta = f'(input_cache) * (expected - output)` for every neuron.
    pub fn backward_as_output(&mut self, expected: &[f64]) -> Result<()> {
        if expected.len() != self.neurons.len() {
            return Err(Error::shape(
                "expected output",
                self.neurons.len(),
                expected.len(),
            ));
        }
        let activator = self.activator;
        for (neuron, &output, &target) in
            multizip((self.neurons.iter_mut(), self.output_cache.iter(), expected))
        {
            let delta = neuron.derivative(activator) * (target - output);
            neuron.set_delta(delta);
        }
        Ok(())
    }

    /// Computes deltas for a hidden layer from the deltas `next` already
    /// holds.
    ///
    /// Neuron `i` collects the `i`-th weight of every neuron in `next`,
    /// bias neuron included, and dots it with their deltas.
    pub fn backward_as_hidden(&mut self, next: &Layer) {
        let activator = self.activator;
        let next_deltas: Vec<f64> = next.neurons.iter().map(Neuron::delta).collect();
        for (i, neuron) in self.neurons.iter_mut().enumerate() {
            let next_weights: Vec<f64> = next.neurons.iter().map(|n| n.weights()[i]).collect();
            let delta = neuron.derivative(activator) * vector::dot(&next_weights, &next_deltas);
            neuron.set_delta(delta);
        }
    }

    /// Moves every weight along its gradient using `previous`'s cached
    /// outputs and this layer's current deltas.
    pub fn update_weights(&mut self, previous: &Layer) {
        for neuron in &mut self.neurons {
            neuron.update_weights(&previous.output_cache);
        }
    }

    /// Verifies that this layer fits after `previous` (or is a valid input
    /// layer when `previous` is `None`). Needed for layers that did not come
    /// out of [`Layer::new`], such as deserialized ones.
    pub(crate) fn check(&self, previous: Option<&Layer>) -> Result<()> {
        let output_len = self.output_len();
        if self.output_cache.len() != output_len {
            return Err(Error::shape("layer outputs", output_len, self.output_cache.len()));
        }
        let inputs = match (previous, self.previous_len) {
            (None, None) => {
                if !self.neurons.is_empty() {
                    return Err(Error::shape("input layer neurons", 0, self.neurons.len()));
                }
                return Ok(());
            }
            (Some(previous), Some(inputs)) => {
                if inputs != previous.output_len() {
                    return Err(Error::shape("layer input", previous.output_len(), inputs));
                }
                inputs
            }
            (None, Some(_)) => return Err(Error::shape("input layer predecessor", 0, 1)),
            (Some(_), None) => return Err(Error::shape("layer predecessor", 1, 0)),
        };
        if self.neurons.len() != output_len {
            return Err(Error::shape("layer neurons", output_len, self.neurons.len()));
        }
        if let Some(len) = self
            .neurons
            .iter()
            .map(|n| n.weights().len())
            .find(|&len| len != inputs)
        {
            return Err(Error::shape("neuron weights", inputs, len));
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }
}
