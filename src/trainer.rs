//! Multi-epoch training on top of [`Network::train`].

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::feed_forward::Network;
use crate::vector;

/// A builder for training a network over many epochs.
///
/// Each epoch is one call to [`Network::train`] over the whole dataset, so
/// weights are still updated after every sample.
#[derive(Debug)]
pub struct Trainer {
    network: Network,
    logging: Logging,
    stop_condition: StopCondition,
    shuffle: bool,
}

impl Trainer {
    /// Creates a new Trainer instance.
    ///
    /// The trainer is initialized with some default values. These defaults are:
    ///
    /// * Stops after 1000 epochs.
    /// * Logs on training completion.
    /// * Visits samples in the order given.
    pub fn new(network: Network) -> Self {
        Trainer {
            network,
            logging: Logging::Completion,
            stop_condition: StopCondition::Epochs(1000),
            shuffle: false,
        }
    }

    /// Sets the type of logging to be emitted during training.
    pub fn logging(mut self, logging: Logging) -> Self {
        self.logging = logging;
        self
    }

    /// Sets the condition to finish training.
    pub fn stop_condition<C>(mut self, condition: C) -> Self
    where
        C: Into<StopCondition>,
    {
        self.stop_condition = condition.into();
        self
    }

    /// Sets whether each epoch visits the samples in a fresh random order.
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Trains the network using the provided labelled data and returns it.
    ///
    /// `inputs[i]` is paired with `expecteds[i]`. Shapes are verified before
    /// the first epoch.
    pub fn train<I, O>(self, inputs: &[I], expecteds: &[O]) -> Result<Network>
    where
        I: AsRef<[f64]>,
        O: AsRef<[f64]>,
    {
        self.train_with_rng(inputs, expecteds, &mut rand::thread_rng())
    }

    /// Like [`train`](Trainer::train), drawing shuffles from `rng`.
    pub fn train_with_rng<I, O, R>(
        mut self,
        inputs: &[I],
        expecteds: &[O],
        rng: &mut R,
    ) -> Result<Network>
    where
        I: AsRef<[f64]>,
        O: AsRef<[f64]>,
        R: Rng + ?Sized,
    {
        self.network.check_samples(inputs, expecteds)?;

        let order: Vec<usize> = (0..inputs.len()).collect();
        let start_time = Instant::now();
        let mut epoch = 0;
        let mut training_error;
        loop {
            training_error = if self.shuffle {
                let order = vector::shuffled(&order, rng);
                let inputs: Vec<&[f64]> = order.iter().map(|&i| inputs[i].as_ref()).collect();
                let expecteds: Vec<&[f64]> =
                    order.iter().map(|&i| expecteds[i].as_ref()).collect();
                self.network.train(&inputs, &expecteds, false)?
            } else {
                self.network.train(inputs, expecteds, false)?
            };
            epoch += 1;

            self.logging.epoch(epoch, training_error);
            if self
                .stop_condition
                .should_stop(epoch, training_error, start_time)
            {
                break;
            }
        }
        self.logging.completion(epoch, training_error, start_time);
        Ok(self.network)
    }
}

/// Logging frequency to use during training
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Logging {
    /// No logs will be emitted
    Silent,
    /// A summary will be logged at completion
    Completion,
    /// A summary will be logged after every `n` epochs, and at completion
    Epochs(usize),
}

impl Logging {
    /// Performs logging at the current `epoch` of training.
    fn epoch(&self, epoch: usize, training_error: f64) {
        if let Logging::Epochs(freq) = *self {
            if freq > 0 && epoch % freq == 0 {
                info!(epoch, rms = training_error, "epoch finished");
            }
        }
    }

    /// Performs logging at the end of training.
    fn completion(&self, epochs: usize, training_error: f64, start_time: Instant) {
        if *self == Logging::Silent {
            return;
        }
        info!(
            epochs,
            seconds = start_time.elapsed().as_secs_f64(),
            rms = training_error,
            "training completed"
        );
    }
}

/// When to stop training
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StopCondition {
    /// Stops after the provided number of epochs
    Epochs(usize),
    /// Stops when the mean RMS error of an epoch drops below the provided
    /// threshold. Never stops if the network cannot get there.
    ErrorThreshold(f64),
    /// Stops after the first epoch that ends past the provided duration
    Duration(Duration),
}

impl From<Duration> for StopCondition {
    fn from(duration: Duration) -> StopCondition {
        StopCondition::Duration(duration)
    }
}

impl StopCondition {
    /// Returns true if training is complete.
    fn should_stop(&self, epoch: usize, training_error: f64, start_time: Instant) -> bool {
        match *self {
            StopCondition::Epochs(epochs) => epoch >= epochs,
            StopCondition::ErrorThreshold(threshold) => training_error < threshold,
            StopCondition::Duration(duration) => start_time.elapsed() > duration,
        }
    }
}
