//! Synthetic colour dataset produced by a fixed reference network.
//!
//! Four integer features in `1..=9` are pushed through a 4-5-3 network with
//! known weights; the most probable output names the colour.

use std::fmt;

use rand::Rng;

use crate::error::NetworkResult;
use crate::network::{index_of_largest, NeuralNetwork, Topology};

use super::TrainingExample;

/// Topology of the reference network
pub const COLOR_TOPOLOGY: Topology = Topology {
    num_input: 4,
    num_hidden: 5,
    num_output: 3,
};

/// Weights of the reference network in the standard flat layout
pub const REFERENCE_WEIGHTS: [f64; 43] = [
    -0.1, 0.2, -0.3, 0.4, -0.5, //
    0.6, -0.7, 0.8, -0.9, 1.0, //
    -1.1, 1.2, -1.3, 1.4, -1.5, //
    1.6, -1.7, 1.8, -1.9, 2.0, //
    -0.5, 0.6, -0.7, 0.8, -0.9, //
    1.5, -1.4, 1.3, //
    -1.2, 1.1, -1.0, //
    0.9, -0.8, 0.7, //
    -0.6, 0.5, -0.4, //
    0.3, -0.2, 0.1, //
    0.1, -0.3, 0.6,
];

/// Output classes of the colour dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Red,
    Green,
    Blue,
}

impl Class {
    pub const ALL: [Class; 3] = [Class::Red, Class::Green, Class::Blue];

    #[must_use]
    pub fn from_index(index: usize) -> Option<Class> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Class::Red => 0,
            Class::Green => 1,
            Class::Blue => 2,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Class::Red => "red",
            Class::Green => "green",
            Class::Blue => "blue",
        }
    }

    #[must_use]
    pub fn one_hot(self) -> Vec<f64> {
        let mut label = vec![0.0; Self::ALL.len()];
        label[self.index()] = 1.0;
        label
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw generated sample before scaling
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSample {
    pub raw: [f64; 4],
    pub class: Class,
}

impl ColorSample {
    /// Features mapped from `1..=9` into `[-1, 1]`
    #[must_use]
    pub fn scaled_features(&self) -> Vec<f64> {
        self.raw.iter().map(|&x| 0.25 * x - 1.25).collect()
    }

    #[must_use]
    pub fn to_example(&self) -> TrainingExample {
        TrainingExample::new(self.scaled_features(), self.class.one_hot())
    }
}

impl fmt::Display for ColorSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in &self.raw {
            write!(f, "{x:.1} ")?;
        }
        write!(f, "{}", self.class)
    }
}

/// Generate `count` samples labeled by the reference network
pub fn generate_colors<R: Rng + ?Sized>(count: usize, rng: &mut R) -> NetworkResult<Vec<ColorSample>> {
    let mut network = NeuralNetwork::with_weights(COLOR_TOPOLOGY, &REFERENCE_WEIGHTS)?;
    let mut samples = Vec::with_capacity(count);
    for _ in 0..count {
        let mut raw = [0.0; 4];
        for x in &mut raw {
            *x = f64::from(rng.gen_range(1..10u8));
        }
        let idx = index_of_largest(network.forward(&raw)?);
        // COLOR_TOPOLOGY has exactly three outputs
        let class = Class::from_index(idx).unwrap_or(Class::Blue);
        samples.push(ColorSample { raw, class });
    }
    Ok(samples)
}
