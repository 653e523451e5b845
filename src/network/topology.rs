//! Layer sizes and the flat weight-vector layout.

use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, NetworkResult};

/// Sizes of the input, hidden and output layers.
///
/// The flat weight layout is fixed and shared with every producer of weight
/// vectors:
///
/// ```text
/// [ W_ih (input-major) | b_h | W_ho (hidden-major) | b_o ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Topology {
    pub num_input: usize,
    pub num_hidden: usize,
    pub num_output: usize,
}

impl Topology {
    /// Create a topology, rejecting empty layers
    pub fn new(num_input: usize, num_hidden: usize, num_output: usize) -> NetworkResult<Self> {
        if num_input == 0 || num_hidden == 0 || num_output == 0 {
            return Err(NetworkError::InvalidTopology {
                input: num_input,
                hidden: num_hidden,
                output: num_output,
            });
        }
        Ok(Topology {
            num_input,
            num_hidden,
            num_output,
        })
    }

    /// Total number of weights and biases
    #[inline]
    #[must_use]
    pub fn num_weights(&self) -> usize {
        self.num_input * self.num_hidden
            + self.num_hidden
            + self.num_hidden * self.num_output
            + self.num_output
    }

    /// Length of one training-matrix row (features followed by label)
    #[inline]
    #[must_use]
    pub fn row_len(&self) -> usize {
        self.num_input + self.num_output
    }

    #[must_use]
    pub fn input_hidden_range(&self) -> Range<usize> {
        0..self.num_input * self.num_hidden
    }

    #[must_use]
    pub fn hidden_bias_range(&self) -> Range<usize> {
        let start = self.input_hidden_range().end;
        start..start + self.num_hidden
    }

    #[must_use]
    pub fn hidden_output_range(&self) -> Range<usize> {
        let start = self.hidden_bias_range().end;
        start..start + self.num_hidden * self.num_output
    }

    #[must_use]
    pub fn output_bias_range(&self) -> Range<usize> {
        let start = self.hidden_output_range().end;
        start..start + self.num_output
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.num_input, self.num_hidden, self.num_output)
    }
}
