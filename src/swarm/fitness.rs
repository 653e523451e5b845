//! Objective functions minimized by the swarm.

use crate::data::{TrainingExample, LABEL_EPSILON};
use crate::error::{NetworkError, NetworkResult, Operand};
use crate::network::{NeuralNetwork, Topology};

/// A scalar objective over flat weight vectors; lower is better.
///
/// `Clone` hands each parallel worker a private instance with its own
/// scratch state.
pub trait FitnessFunction: Clone + Send {
    /// Length of the vectors this function accepts
    fn dim(&self) -> usize;

    /// Score a candidate. Degenerate candidates return `f64::INFINITY`.
    fn fitness(&mut self, candidate: &[f64]) -> NetworkResult<f64>;
}

/// Summed cross-entropy of a network over a training set.
///
/// Owns a private [`NeuralNetwork`] used as scratch space; every call
/// reloads it with the candidate weights.
#[derive(Clone, Debug)]
pub struct CrossEntropy<'a> {
    network: NeuralNetwork,
    examples: &'a [TrainingExample],
}

impl<'a> CrossEntropy<'a> {
    #[must_use]
    pub fn new(topology: Topology, examples: &'a [TrainingExample]) -> Self {
        CrossEntropy {
            network: NeuralNetwork::new(topology),
            examples,
        }
    }

    #[must_use]
    pub fn topology(&self) -> Topology {
        self.network.topology()
    }

    #[must_use]
    pub fn examples(&self) -> &'a [TrainingExample] {
        self.examples
    }
}

impl FitnessFunction for CrossEntropy<'_> {
    fn dim(&self) -> usize {
        self.network.topology().num_weights()
    }

    fn fitness(&mut self, candidate: &[f64]) -> NetworkResult<f64> {
        self.network.set_weights(candidate)?;
        let num_output = self.network.topology().num_output;

        let mut log_likelihood = 0.0;
        for example in self.examples {
            if example.label.len() != num_output {
                return Err(NetworkError::DimensionMismatch {
                    operand: Operand::Inputs,
                    expected: num_output,
                    found: example.label.len(),
                });
            }
            let outputs = self.network.forward(&example.features)?;
            // One-hot labels: only the true class contributes
            for (&target, &p) in example.label.iter().zip(outputs) {
                if target.abs() > LABEL_EPSILON {
                    log_likelihood += target * p.ln();
                }
            }
        }

        let error = -log_likelihood;
        Ok(if error.is_nan() { f64::INFINITY } else { error })
    }
}
