//! Feed-forward network: flat weight decoding and the forward pass.

use super::activation::{index_of_largest, sigmoid, softmax_in_place};
use super::topology::Topology;
use crate::data::TrainingExample;
use crate::error::{NetworkError, NetworkResult, Operand};

/// A single-hidden-layer classifier.
///
/// Hidden layer uses the saturating sigmoid, output layer uses softmax.
/// Parameters are overwritten by every [`NeuralNetwork::set_weights`] call,
/// and the forward pass reuses internal buffers, so one instance must not be
/// shared between concurrent evaluations.
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    topology: Topology,
    /// Input-to-hidden weights, `[num_input][num_hidden]` row-major
    ih_weights: Vec<f64>,
    hidden_bias: Vec<f64>,
    /// Hidden-to-output weights, `[num_hidden][num_output]` row-major
    ho_weights: Vec<f64>,
    output_bias: Vec<f64>,
    hidden_outputs: Vec<f64>,
    outputs: Vec<f64>,
}

impl NeuralNetwork {
    /// Create a network with all parameters zeroed
    #[must_use]
    pub fn new(topology: Topology) -> Self {
        let Topology {
            num_input,
            num_hidden,
            num_output,
        } = topology;
        NeuralNetwork {
            topology,
            ih_weights: vec![0.0; num_input * num_hidden],
            hidden_bias: vec![0.0; num_hidden],
            ho_weights: vec![0.0; num_hidden * num_output],
            output_bias: vec![0.0; num_output],
            hidden_outputs: vec![0.0; num_hidden],
            outputs: vec![0.0; num_output],
        }
    }

    /// Create a network and load `weights` into it
    pub fn with_weights(topology: Topology, weights: &[f64]) -> NetworkResult<Self> {
        let mut network = Self::new(topology);
        network.set_weights(weights)?;
        Ok(network)
    }

    #[inline]
    #[must_use]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Decode a flat weight vector into the layer parameters.
    ///
    /// Order: input-to-hidden weights (input index outer), hidden biases,
    /// hidden-to-output weights (hidden index outer), output biases.
    pub fn set_weights(&mut self, weights: &[f64]) -> NetworkResult<()> {
        let expected = self.topology.num_weights();
        if weights.len() != expected {
            return Err(NetworkError::DimensionMismatch {
                operand: Operand::Weights,
                expected,
                found: weights.len(),
            });
        }

        let t = self.topology;
        self.ih_weights
            .copy_from_slice(&weights[t.input_hidden_range()]);
        self.hidden_bias
            .copy_from_slice(&weights[t.hidden_bias_range()]);
        self.ho_weights
            .copy_from_slice(&weights[t.hidden_output_range()]);
        self.output_bias
            .copy_from_slice(&weights[t.output_bias_range()]);
        Ok(())
    }

    /// Encode the current parameters back into the flat layout
    #[must_use]
    pub fn weights(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(self.topology.num_weights());
        flat.extend_from_slice(&self.ih_weights);
        flat.extend_from_slice(&self.hidden_bias);
        flat.extend_from_slice(&self.ho_weights);
        flat.extend_from_slice(&self.output_bias);
        flat
    }

    /// Run the forward pass and borrow the softmax outputs.
    ///
    /// The returned slice is overwritten by the next call.
    pub fn forward(&mut self, inputs: &[f64]) -> NetworkResult<&[f64]> {
        let Topology {
            num_input,
            num_hidden,
            num_output,
        } = self.topology;
        if inputs.len() != num_input {
            return Err(NetworkError::DimensionMismatch {
                operand: Operand::Inputs,
                expected: num_input,
                found: inputs.len(),
            });
        }

        for j in 0..num_hidden {
            let mut sum = 0.0;
            for (i, &x) in inputs.iter().enumerate() {
                sum += x * self.ih_weights[i * num_hidden + j];
            }
            self.hidden_outputs[j] = sigmoid(sum + self.hidden_bias[j]);
        }

        for k in 0..num_output {
            let mut sum = 0.0;
            for (j, &h) in self.hidden_outputs.iter().enumerate() {
                sum += h * self.ho_weights[j * num_output + k];
            }
            self.outputs[k] = sum + self.output_bias[k];
        }

        softmax_in_place(&mut self.outputs);
        Ok(&self.outputs)
    }

    /// Run the forward pass and return an owned copy of the outputs
    pub fn compute_outputs(&mut self, inputs: &[f64]) -> NetworkResult<Vec<f64>> {
        self.forward(inputs).map(<[f64]>::to_vec)
    }

    /// Index of the most probable class
    pub fn predict(&mut self, inputs: &[f64]) -> NetworkResult<usize> {
        self.forward(inputs).map(index_of_largest)
    }

    /// Fraction of examples whose predicted class carries the label.
    ///
    /// Returns 0.0 for an empty slice.
    pub fn accuracy(&mut self, examples: &[TrainingExample]) -> NetworkResult<f64> {
        if examples.is_empty() {
            return Ok(0.0);
        }
        let mut correct = 0usize;
        for example in examples {
            if self.predict(&example.features)? == example.class_index() {
                correct += 1;
            }
        }
        Ok(correct as f64 / examples.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential_weights(topology: Topology) -> Vec<f64> {
        (0..topology.num_weights())
            .map(|i| (i as f64) * 0.01 - 0.2)
            .collect()
    }

    #[test]
    fn test_weight_layout_order() {
        let topology = Topology::new(2, 2, 2).unwrap();
        let weights: Vec<f64> = (0..topology.num_weights()).map(|i| i as f64).collect();
        let network = NeuralNetwork::with_weights(topology, &weights).unwrap();

        // W_ih[i][j] at i * hidden + j
        assert_eq!(network.ih_weights, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(network.hidden_bias, vec![4.0, 5.0]);
        assert_eq!(network.ho_weights, vec![6.0, 7.0, 8.0, 9.0]);
        assert_eq!(network.output_bias, vec![10.0, 11.0]);
    }

    #[test]
    fn test_weights_round_trip() {
        let topology = Topology::new(4, 5, 3).unwrap();
        let weights = sequential_weights(topology);
        let network = NeuralNetwork::with_weights(topology, &weights).unwrap();
        assert_eq!(network.weights(), weights);
    }

    #[test]
    fn test_set_weights_wrong_length() {
        let topology = Topology::new(4, 5, 3).unwrap();
        let mut network = NeuralNetwork::new(topology);
        let err = network.set_weights(&[0.0; 42]).unwrap_err();
        assert_eq!(
            err,
            NetworkError::DimensionMismatch {
                operand: Operand::Weights,
                expected: 43,
                found: 42,
            }
        );
    }

    #[test]
    fn test_failed_set_weights_keeps_old_parameters() {
        let topology = Topology::new(4, 5, 3).unwrap();
        let weights = sequential_weights(topology);
        let mut network = NeuralNetwork::with_weights(topology, &weights).unwrap();
        assert!(network.set_weights(&[1.0; 44]).is_err());
        assert_eq!(network.weights(), weights);
    }

    #[test]
    fn test_compute_outputs_wrong_input_length() {
        let topology = Topology::new(4, 5, 3).unwrap();
        let mut network = NeuralNetwork::new(topology);
        let err = network.compute_outputs(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::DimensionMismatch {
                operand: Operand::Inputs,
                expected: 4,
                found: 3,
            }
        ));
    }

    #[test]
    fn test_zero_weights_give_uniform_output() {
        let topology = Topology::new(4, 5, 3).unwrap();
        let mut network = NeuralNetwork::new(topology);
        let out = network.compute_outputs(&[0.3, -0.2, 0.9, 1.0]).unwrap();
        for p in out {
            assert!((p - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_forward_pass_by_hand() {
        // 1-1-2 network: hidden = sigmoid(2x + 0), outputs = [h, -h]
        let topology = Topology::new(1, 1, 2).unwrap();
        let weights = [2.0, 0.0, 1.0, -1.0, 0.0, 0.0];
        let mut network = NeuralNetwork::with_weights(topology, &weights).unwrap();

        let out = network.compute_outputs(&[0.5]).unwrap();
        let h = sigmoid(1.0);
        let e0 = h.exp();
        let e1 = (-h).exp();
        assert!((out[0] - e0 / (e0 + e1)).abs() < 1e-12);
        assert!((out[1] - e1 / (e0 + e1)).abs() < 1e-12);
    }

    #[test]
    fn test_outputs_sum_to_one_and_repeat() {
        let topology = Topology::new(4, 5, 3).unwrap();
        let weights = sequential_weights(topology);
        let mut network = NeuralNetwork::with_weights(topology, &weights).unwrap();

        let inputs = [0.25, -0.75, 1.0, 0.0];
        let first = network.compute_outputs(&inputs).unwrap();
        network.compute_outputs(&[1.0, 1.0, 1.0, 1.0]).unwrap();
        let second = network.compute_outputs(&inputs).unwrap();

        assert_eq!(first, second);
        let sum: f64 = first.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_predict_follows_output_bias() {
        let topology = Topology::new(2, 2, 3).unwrap();
        let mut weights = vec![0.0; topology.num_weights()];
        weights[topology.output_bias_range().start + 2] = 5.0;
        let mut network = NeuralNetwork::with_weights(topology, &weights).unwrap();
        assert_eq!(network.predict(&[0.1, 0.2]).unwrap(), 2);
    }

    #[test]
    fn test_accuracy_counts_matches() {
        let topology = Topology::new(2, 2, 3).unwrap();
        let mut weights = vec![0.0; topology.num_weights()];
        weights[topology.output_bias_range().start + 1] = 5.0;
        let mut network = NeuralNetwork::with_weights(topology, &weights).unwrap();

        let examples = vec![
            TrainingExample::new(vec![0.0, 0.0], vec![0.0, 1.0, 0.0]),
            TrainingExample::new(vec![1.0, 0.0], vec![0.0, 1.0, 0.0]),
            TrainingExample::new(vec![0.0, 1.0], vec![1.0, 0.0, 0.0]),
            TrainingExample::new(vec![1.0, 1.0], vec![0.0, 0.0, 1.0]),
        ];
        let accuracy = network.accuracy(&examples).unwrap();
        assert!((accuracy - 0.5).abs() < 1e-12);
        assert_eq!(network.accuracy(&[]).unwrap(), 0.0);
    }
}
