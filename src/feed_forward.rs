//! A [Feedforward neural network]
//! (https://en.wikipedia.org/wiki/Feedforward_neural_network) trained by
//! back-propagation and plain stochastic gradient descent.
//!
//! Every training step is three passes over the layers, run in this order:
//!
//!  1. [`Network::forward`] caches each neuron's weighted input and each
//!     layer's outputs.
//!  2. [`Network::backpropagate`] turns those caches into per-neuron deltas,
//!     from the output layer back towards the input.
//!  3. [`Network::update_weights`] applies the deltas to the weights.
//!
//! The network tracks which pass ran last and refuses to run a pass whose
//! inputs are stale. [`Network::train`] drives all three for each sample.
//!
//! # Example
//!
//! ```
//! # use neuralnet::feed_forward::*;
//! let inputs = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
//! let expecteds = [[0.0], [1.0], [1.0], [0.0]];
//!
//! let mut network = Network::builder(&[2, 3, 1])
//!     .activator(Activator::Sigmoid)
//!     .learning_rate(0.5)
//!     .bias(true)
//!     .build()
//!     .unwrap();
//!
//! for _ in 0..100 {
//!     network.train(&inputs, &expecteds, false).unwrap();
//! }
//! let output = network.forward(&[1.0, 0.0]).unwrap();
//! assert_eq!(output.len(), 1);
//! ```

use rand::Rng;
use tracing::{debug, info};

pub use crate::activator::Activator;
use crate::error::{Error, Result};
use crate::layer::Layer;
use crate::vector;

/// Which pass of the training cycle ran most recently.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Stage {
    /// Nothing cached, or the last weight update already consumed the caches.
    #[default]
    Idle,
    /// Layer outputs and weighted inputs are fresh.
    Forwarded,
    /// Deltas are fresh and ready to be applied.
    Backpropagated,
}

/// A feedforward neural network.
///
/// Deserializing a network verifies that every layer fits the one before it,
/// so a restored network never panics on mismatched weights.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "NetworkParts")]
pub struct Network {
    layers: Vec<Layer>,
    stage: Stage,
}

/// Unchecked form of a [`Network`], as read by a deserializer.
#[derive(Deserialize)]
struct NetworkParts {
    layers: Vec<Layer>,
    stage: Stage,
}

impl TryFrom<NetworkParts> for Network {
    type Error = Error;

    fn try_from(parts: NetworkParts) -> Result<Self> {
        let network = Network {
            layers: parts.layers,
            stage: parts.stage,
        };
        network.check()?;
        Ok(network)
    }
}

/// Result of scoring a network against labelled samples.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    /// `correct / total`, or `0.0` when there were no samples.
    pub percentage: f64,
}

impl Score {
    fn new(correct: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64
        };
        Score {
            correct,
            total,
            percentage,
        }
    }
}

impl Network {
    /// Creates a new, untrained neural network.
    ///
    /// Arguments:
    ///  * `layer_sizes` - the number of neurons in each layer. Must contain
    ///                    at least 3 elements - one input layer, one hidden
    ///                    layer, and one output layer.
    ///  * `activator` - the activation function to use for each neuron.
    ///  * `learning_rate` - gradient descent step size.
    ///  * `has_bias` - whether the input and hidden layers get a bias neuron.
    ///                 The output layer never has one.
    pub fn new(
        layer_sizes: &[usize],
        activator: Activator,
        learning_rate: f64,
        has_bias: bool,
    ) -> Result<Self> {
        Network::builder(layer_sizes)
            .activator(activator)
            .learning_rate(learning_rate)
            .bias(has_bias)
            .build()
    }

    /// Starts configuring a network with the given layer widths.
    pub fn builder(layer_sizes: &[usize]) -> NetworkBuilder {
        NetworkBuilder::new(layer_sizes)
    }

    /// Returns the size of the input layer to the network, bias excluded.
    pub fn input_len(&self) -> usize {
        self.layers[0].width()
    }

    /// Returns the size of the output layer from the network.
    pub fn output_len(&self) -> usize {
        self.layers[self.layers.len() - 1].width()
    }

    /// Returns the layers, input layer first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns which training pass ran last.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Verifies the layer shapes: at least 3 layers, the first one an input
    /// layer, and every neuron holding one weight per output of the layer
    /// before it.
    pub fn check(&self) -> Result<()> {
        if self.layers.len() < 3 {
            return Err(Error::TooFewLayers(self.layers.len()));
        }
        self.layers[0].check(None)?;
        for pair in self.layers.windows(2) {
            pair[1].check(Some(&pair[0]))?;
        }
        Ok(())
    }

    /// Feeds the provided `input` through the network, returning the output
    /// layer.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.layers[0].forward(input)?;
        for i in 1..self.layers.len() {
            let (previous, layer) = adjacent_mut(&mut self.layers, i - 1);
            layer.forward(previous.output_cache())?;
        }
        self.stage = Stage::Forwarded;
        Ok(self.layers[self.layers.len() - 1].output_cache().to_vec())
    }

    /// Computes deltas for every non-input layer against `expected`.
    ///
    /// Must follow a [`forward`](Network::forward) call; the output layer is
    /// handled first and each hidden layer then reads the deltas of the
    /// layer after it.
    pub fn backpropagate(&mut self, expected: &[f64]) -> Result<()> {
        if self.stage != Stage::Forwarded {
            return Err(Error::OutOfOrder {
                called: "backpropagate",
                requires: Stage::Forwarded,
            });
        }
        let last = self.layers.len() - 1;
        self.layers[last].backward_as_output(expected)?;
        for i in (1..last).rev() {
            let (layer, next) = adjacent_mut(&mut self.layers, i);
            layer.backward_as_hidden(next);
        }
        self.stage = Stage::Backpropagated;
        Ok(())
    }

    /// Applies the deltas from the last [`backpropagate`](Network::backpropagate)
    /// call, using the layer outputs cached by the forward pass before it.
    ///
    /// Fails without touching any weight if there are no fresh deltas.
    pub fn update_weights(&mut self) -> Result<()> {
        if self.stage != Stage::Backpropagated {
            return Err(Error::OutOfOrder {
                called: "update_weights",
                requires: Stage::Backpropagated,
            });
        }
        for i in 1..self.layers.len() {
            let (previous, layer) = adjacent_mut(&mut self.layers, i - 1);
            layer.update_weights(previous);
        }
        self.stage = Stage::Idle;
        Ok(())
    }

    /// Trains the network for one pass over the provided samples, one
    /// sample at a time and in the order given.
    ///
    /// Every `inputs[i]` must match the input width and every `expecteds[i]`
    /// the output width; this is checked before any weight changes. When
    /// `print_error` is set, each sample's RMS error is logged.
    ///
    /// Returns the mean RMS error over the pass.
    pub fn train<I, O>(&mut self, inputs: &[I], expecteds: &[O], print_error: bool) -> Result<f64>
    where
        I: AsRef<[f64]>,
        O: AsRef<[f64]>,
    {
        self.check_samples(inputs, expecteds)?;
        if inputs.is_empty() {
            return Ok(0.0);
        }

        let mut total_error = 0.0;
        for (sample, (input, expected)) in inputs.iter().zip(expecteds).enumerate() {
            let expected = expected.as_ref();
            let output = self.forward(input.as_ref())?;
            let rms = vector::rms_error(&output, expected);
            if print_error {
                info!(sample, rms, "training error");
            }
            total_error += rms;
            self.backpropagate(expected)?;
            self.update_weights()?;
        }
        Ok(total_error / inputs.len() as f64)
    }

    /// Scores a classifier: `interpret_output` maps each raw output vector to
    /// a label, which is compared with the expected label.
    pub fn validate<I, T, F>(
        &mut self,
        inputs: &[I],
        expecteds: &[T],
        interpret_output: F,
    ) -> Result<Score>
    where
        I: AsRef<[f64]>,
        T: PartialEq,
        F: Fn(&[f64]) -> T,
    {
        self.check_inputs(inputs, expecteds.len())?;
        let mut correct = 0;
        for (input, expected) in inputs.iter().zip(expecteds) {
            let output = self.forward(input.as_ref())?;
            if interpret_output(&output) == *expected {
                correct += 1;
            }
        }
        Ok(Score::new(correct, inputs.len()))
    }

    /// Scores a single-output regression network. A sample counts as correct
    /// when its relative error `|expected - output| / |expected|` (absolute
    /// error when `expected` is zero) is below `accuracy`.
    pub fn validate_regression<I>(
        &mut self,
        inputs: &[I],
        expecteds: &[f64],
        accuracy: f64,
    ) -> Result<Score>
    where
        I: AsRef<[f64]>,
    {
        if self.output_len() != 1 {
            return Err(Error::NotSingleOutput(self.output_len()));
        }
        self.check_inputs(inputs, expecteds.len())?;
        let mut correct = 0;
        for (input, &expected) in inputs.iter().zip(expecteds) {
            let result = self.forward(input.as_ref())?[0];
            let difference = (expected - result).abs();
            let relative_error = if expected != 0.0 {
                difference / expected.abs()
            } else {
                difference
            };
            if relative_error < accuracy {
                correct += 1;
            }
        }
        Ok(Score::new(correct, inputs.len()))
    }

    /// Verifies sample shapes before training.
    pub(crate) fn check_samples<I, O>(&self, inputs: &[I], expecteds: &[O]) -> Result<()>
    where
        I: AsRef<[f64]>,
        O: AsRef<[f64]>,
    {
        self.check_inputs(inputs, expecteds.len())?;
        let width = self.output_len();
        if let Some(len) = expecteds.iter().map(|e| e.as_ref().len()).find(|&len| len != width) {
            return Err(Error::shape("expected output", width, len));
        }
        Ok(())
    }

    fn check_inputs<I: AsRef<[f64]>>(&self, inputs: &[I], expected_count: usize) -> Result<()> {
        if inputs.len() != expected_count {
            return Err(Error::shape("sample count", expected_count, inputs.len()));
        }
        let width = self.input_len();
        if let Some(len) = inputs.iter().map(|i| i.as_ref().len()).find(|&len| len != width) {
            return Err(Error::shape("network input", width, len));
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }
}

/// Configures and builds a [`Network`].
#[derive(Clone, Debug)]
pub struct NetworkBuilder {
    layer_sizes: Vec<usize>,
    activator: Activator,
    learning_rate: f64,
    has_bias: bool,
}

impl NetworkBuilder {
    /// Creates a new builder.
    ///
    /// The builder is initialized with some default values. These defaults
    /// are:
    ///
    /// * A sigmoid activation function.
    /// * A learning rate of 0.25.
    /// * No bias neurons.
    pub fn new(layer_sizes: &[usize]) -> Self {
        NetworkBuilder {
            layer_sizes: layer_sizes.into(),
            activator: Activator::Sigmoid,
            learning_rate: 0.25,
            has_bias: false,
        }
    }

    /// Sets the activation function to use in the network.
    pub fn activator(mut self, activator: Activator) -> Self {
        self.activator = activator;
        self
    }

    /// Sets the learning rate to use during gradient descent.
    pub fn learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }

    /// Sets whether the input and hidden layers get a bias neuron.
    pub fn bias(mut self, has_bias: bool) -> Self {
        self.has_bias = has_bias;
        self
    }

    /// Builds the network, drawing initial weights from the thread RNG.
    pub fn build(self) -> Result<Network> {
        self.build_with_rng(&mut rand::thread_rng())
    }

    /// Builds the network, drawing initial weights from `rng`.
    pub fn build_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Network> {
        self.validate()?;

        let sizes = &self.layer_sizes;
        let last = sizes.len() - 1;
        let mut layers = Vec::with_capacity(sizes.len());
        layers.push(Layer::input(sizes[0], self.has_bias, self.activator));
        for (i, &width) in sizes.iter().enumerate().skip(1) {
            // the output layer never gets a bias neuron
            let has_bias = self.has_bias && i != last;
            let layer = Layer::new(
                &layers[i - 1],
                width,
                self.activator,
                self.learning_rate,
                has_bias,
                rng,
            );
            layers.push(layer);
        }

        debug!(
            layers = ?self.layer_sizes,
            activator = ?self.activator,
            learning_rate = self.learning_rate,
            bias = self.has_bias,
            "built network"
        );
        Ok(Network {
            layers,
            stage: Stage::Idle,
        })
    }

    /// Verifies that the configuration describes a usable network.
    fn validate(&self) -> Result<()> {
        if self.layer_sizes.len() < 3 {
            return Err(Error::TooFewLayers(self.layer_sizes.len()));
        }
        if let Some(index) = self.layer_sizes.iter().position(|&size| size == 0) {
            return Err(Error::EmptyLayer { index });
        }
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(Error::InvalidLearningRate(self.learning_rate));
        }
        Ok(())
    }
}

/// Splits `layers` into `(layers[index], layers[index + 1])`.
fn adjacent_mut(layers: &mut [Layer], index: usize) -> (&mut Layer, &mut Layer) {
    let (before, after) = layers[index..].split_at_mut(1);
    (&mut before[0], &mut after[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neuron::Neuron;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn network(sizes: &[usize], bias: bool) -> Network {
        Network::builder(sizes)
            .bias(bias)
            .build_with_rng(&mut StdRng::seed_from_u64(42))
            .unwrap()
    }

    #[test]
    fn too_few_layers() {
        assert_eq!(
            Network::new(&[2, 1], Activator::Sigmoid, 0.25, false).unwrap_err(),
            Error::TooFewLayers(2)
        );
    }

    #[test]
    fn empty_layer() {
        assert_eq!(
            Network::builder(&[1, 0, 1]).build().unwrap_err(),
            Error::EmptyLayer { index: 1 }
        );
    }

    #[test]
    fn bad_learning_rate() {
        for rate in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Network::builder(&[1, 2, 1]).learning_rate(rate).build(),
                Err(Error::InvalidLearningRate(_))
            ));
        }
    }

    #[test]
    fn layer_structure() {
        let net = network(&[4, 5, 6, 3], true);
        let layers = net.layers();
        assert_eq!(layers.len(), 4);
        assert!(layers[0].is_input());
        assert!(layers[1..].iter().all(|l| !l.is_input()));
        assert_eq!(layers[1].neurons().len(), 6);
        assert_eq!(layers[2].neurons().len(), 7);
        // the output layer ignores the bias flag
        assert!(!layers[3].has_bias());
        assert_eq!(layers[3].neurons().len(), 3);
        for pair in layers.windows(2) {
            for neuron in pair[1].neurons() {
                assert_eq!(neuron.weights().len(), pair[0].output_len());
            }
        }
        assert!(layers[1]
            .neurons()
            .iter()
            .flat_map(|n| n.weights())
            .all(|w| (-1.0..1.0).contains(w)));
    }

    #[test]
    fn forward_shapes() {
        for sizes in [vec![1, 8, 1], vec![4, 20, 3], vec![13, 7, 5, 3]] {
            for bias in [false, true] {
                let mut net = network(&sizes, bias);
                let out = net.forward(&vec![0.5; sizes[0]]).unwrap();
                assert_eq!(out.len(), *sizes.last().unwrap());
            }
        }
    }

    #[test]
    fn forward_is_deterministic() {
        let mut net = network(&[3, 4, 2], true);
        let first = net.forward(&[0.1, 0.2, 0.3]).unwrap();
        net.forward(&[0.9, -0.4, 0.0]).unwrap();
        let second = net.forward(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn forward_rejects_wrong_width() {
        let mut net = network(&[3, 4, 2], true);
        assert_eq!(
            net.forward(&[0.1, 0.2, 0.3, 1.0]),
            Err(Error::shape("network input", 3, 4))
        );
        assert_eq!(net.stage(), Stage::Idle);
    }

    #[test]
    fn passes_must_run_in_order() {
        let mut net = network(&[2, 3, 1], false);
        let before = net.clone();

        assert!(matches!(
            net.backpropagate(&[1.0]),
            Err(Error::OutOfOrder { called: "backpropagate", .. })
        ));
        net.forward(&[0.5, 0.5]).unwrap();
        assert!(matches!(
            net.update_weights(),
            Err(Error::OutOfOrder { called: "update_weights", .. })
        ));
        for (a, b) in net.layers().iter().zip(before.layers()) {
            for (n, m) in a.neurons().iter().zip(b.neurons()) {
                assert_eq!(n.weights(), m.weights());
            }
        }

        net.backpropagate(&[1.0]).unwrap();
        net.update_weights().unwrap();
        // deltas were consumed, a repeated update is refused
        assert!(net.update_weights().is_err());
    }

    #[test]
    fn deltas_are_fresh_for_each_sample() {
        let mut net = network(&[1, 2, 1], false);
        net.forward(&[1.0]).unwrap();
        net.backpropagate(&[1.0]).unwrap();
        let first = net.layers()[2].neurons()[0].delta();

        net.update_weights().unwrap();
        net.forward(&[1.0]).unwrap();
        net.backpropagate(&[0.0]).unwrap();
        let second = net.layers()[2].neurons()[0].delta();

        // towards 1.0 the error is positive, towards 0.0 negative
        assert!(first > 0.0);
        assert!(second < 0.0);
    }

    #[test]
    fn hand_computed_step() {
        // 1-1-1 sigmoid network with every weight at zero
        let mut net = network(&[1, 1, 1], false);
        for layer in &mut net.layers_mut()[1..] {
            layer.neurons_mut()[0] = Neuron::with_weights(vec![0.0], 1.0);
        }

        let out = net.forward(&[2.0]).unwrap();
        assert_abs_diff_eq!(out[0], 0.5);
        net.backpropagate(&[1.0]).unwrap();
        // output: 0.25 * (1 - 0.5); hidden: 0.25 * (0 * 0.125)
        assert_abs_diff_eq!(net.layers()[2].neurons()[0].delta(), 0.125);
        assert_abs_diff_eq!(net.layers()[1].neurons()[0].delta(), 0.0);
        net.update_weights().unwrap();
        // output weight += 1.0 * hidden output (0.5) * 0.125
        assert_abs_diff_eq!(net.layers()[2].neurons()[0].weights()[0], 0.0625);
        assert_abs_diff_eq!(net.layers()[1].neurons()[0].weights()[0], 0.0);
    }

    #[test]
    fn bias_weights_never_change() {
        let mut net = network(&[2, 3, 1], true);
        let bias_weights = net.layers()[1].neurons()[3].weights().to_vec();
        let inputs = [[0.0, 1.0], [1.0, 0.0]];
        let expecteds = [[1.0], [0.0]];
        for _ in 0..10 {
            net.train(&inputs, &expecteds, false).unwrap();
        }
        assert_eq!(net.layers()[1].neurons()[3].weights(), &bias_weights[..]);
    }

    #[test]
    fn training_reduces_error() {
        let mut net = Network::builder(&[2, 4, 1])
            .learning_rate(1.0)
            .bias(true)
            .build_with_rng(&mut StdRng::seed_from_u64(5))
            .unwrap();
        let inputs = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
        let expecteds = [[0.1], [0.9], [0.9], [0.9]];
        let initial = net.train(&inputs, &expecteds, true).unwrap();
        let mut error = initial;
        for _ in 0..3000 {
            error = net.train(&inputs, &expecteds, false).unwrap();
        }
        assert!(error < initial);
        assert!(error < 0.1);
        assert_eq!(net.stage(), Stage::Idle);
    }

    #[test]
    fn train_checks_shapes_before_updating() {
        let mut net = network(&[2, 3, 1], false);
        let before = net.clone();
        let inputs = vec![vec![0.0, 1.0], vec![1.0]];
        let expecteds = vec![vec![1.0], vec![0.0]];
        assert_eq!(
            net.train(&inputs, &expecteds, false),
            Err(Error::shape("network input", 2, 1))
        );
        assert_eq!(
            net.train(&inputs[..1], &expecteds, false),
            Err(Error::shape("sample count", 2, 1))
        );
        assert_eq!(
            net.train(&[[0.0, 1.0]], &[[1.0, 0.0]], false),
            Err(Error::shape("expected output", 1, 2))
        );
        assert_eq!(
            net.layers()[2].neurons()[0].weights(),
            before.layers()[2].neurons()[0].weights()
        );
        let empty: [[f64; 2]; 0] = [];
        let none: [[f64; 1]; 0] = [];
        assert_eq!(net.train(&empty, &none, false), Ok(0.0));
    }

    #[test]
    fn classification_score() {
        let mut net = network(&[2, 3, 2], false);
        let inputs = [[0.0, 1.0], [1.0, 0.0], [0.5, 0.5]];
        let labels = [0usize, 0, 0];
        let score = net.validate(&inputs, &labels, |_| 0).unwrap();
        assert_eq!(score, Score { correct: 3, total: 3, percentage: 1.0 });

        let score = net.validate(&inputs, &labels, |_| 1).unwrap();
        assert_eq!(score.correct, 0);
        assert_eq!(score.percentage, 0.0);

        let empty: [[f64; 2]; 0] = [];
        let score = net.validate(&empty, &[] as &[usize], |_| 0).unwrap();
        assert_eq!(score, Score { correct: 0, total: 0, percentage: 0.0 });
    }

    #[test]
    fn regression_score() {
        let mut net = network(&[1, 2, 1], false);
        let inputs = [[0.3], [0.6]];
        let outputs: Vec<f64> = inputs.iter().map(|i| net.forward(i).unwrap()[0]).collect();

        let score = net.validate_regression(&inputs, &outputs, 0.05).unwrap();
        assert_eq!(score.correct, 2);

        // sigmoid outputs are in (0, 1), 10.0 is always too far off
        let score = net.validate_regression(&inputs, &[10.0, outputs[1]], 0.05).unwrap();
        assert_eq!(score.correct, 1);
        assert_abs_diff_eq!(score.percentage, 0.5);

        // a negative target is judged by its magnitude
        let score = net.validate_regression(&inputs, &[-10.0, -10.0], 0.05).unwrap();
        assert_eq!(score.correct, 0);

        let mut wide = network(&[1, 2, 2], false);
        assert_eq!(
            wide.validate_regression(&inputs, &outputs, 0.05),
            Err(Error::NotSingleOutput(2))
        );
    }

    #[test]
    fn serialized_network_keeps_its_outputs() {
        let mut net = network(&[3, 4, 2], true);
        let json = serde_json::to_string(&net).unwrap();
        let mut restored: Network = serde_json::from_str(&json).unwrap();
        let input = [0.2, 0.4, 0.6];
        let expected = net.forward(&input).unwrap();
        let actual = restored.forward(&input).unwrap();
        for (a, b) in actual.iter().zip(&expected) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
        assert_eq!(restored.layers()[1].activator(), Activator::Sigmoid);
    }

    #[test]
    fn deserializing_rejects_mismatched_layers() {
        let net = network(&[3, 4, 2], true);
        assert_eq!(net.check(), Ok(()));

        // swap in the layers of a network with a wider hidden layer
        let wider = network(&[3, 5, 2], true);
        let mut value = serde_json::to_value(&net).unwrap();
        value["layers"][2] = serde_json::to_value(&wider.layers()[2]).unwrap();
        let err = serde_json::from_value::<Network>(value).unwrap_err();
        assert!(err.to_string().contains("layer input"), "{}", err);

        let mut value = serde_json::to_value(&net).unwrap();
        value["layers"].as_array_mut().unwrap().truncate(2);
        assert!(serde_json::from_value::<Network>(value).is_err());
    }
}
