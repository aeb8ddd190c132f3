#[macro_use]
extern crate serde_derive;

pub mod activator;
pub mod error;
pub mod feed_forward;
pub mod layer;
pub mod neuron;
pub mod trainer;
pub mod vector;

pub use crate::error::{Error, Result};
