//! Errors reported by network construction and the training passes.

use thiserror::Error;

use crate::feed_forward::Stage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("a network needs at least 3 layers (input, hidden, output), got {0}")]
    TooFewLayers(usize),

    #[error("layer {index} has no neurons")]
    EmptyLayer { index: usize },

    #[error("learning rate must be positive and finite, got {0}")]
    InvalidLearningRate(f64),

    #[error("{what}: expected length {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A pass of the forward / backpropagate / update cycle was called
    /// before the pass it depends on.
    #[error("{called} requires the network to be {requires:?}")]
    OutOfOrder {
        called: &'static str,
        requires: Stage,
    },

    #[error("regression scoring needs a single output neuron, network has {0}")]
    NotSingleOutput(usize),
}

impl Error {
    pub(crate) fn shape(what: &'static str, expected: usize, actual: usize) -> Self {
        Error::ShapeMismatch {
            what,
            expected,
            actual,
        }
    }
}
