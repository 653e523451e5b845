//! Error types for network evaluation, data decoding and swarm training.

use std::fmt;

/// Which operand of a network operation had the wrong length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Flat weight vector passed to `set_weights`
    Weights,
    /// Feature vector passed to `compute_outputs`
    Inputs,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Weights => write!(f, "weight vector"),
            Operand::Inputs => write!(f, "input vector"),
        }
    }
}

/// Error type for neural network operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// A vector's length does not match the network topology
    DimensionMismatch {
        operand: Operand,
        expected: usize,
        found: usize,
    },
    /// A layer was declared with zero neurons
    InvalidTopology {
        input: usize,
        hidden: usize,
        output: usize,
    },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::DimensionMismatch {
                operand,
                expected,
                found,
            } => {
                write!(f, "{operand} length {found} does not match expected {expected}")
            }
            NetworkError::InvalidTopology {
                input,
                hidden,
                output,
            } => {
                write!(
                    f,
                    "Invalid topology {input}-{hidden}-{output}: every layer needs at least one neuron"
                )
            }
        }
    }
}

impl std::error::Error for NetworkError {}

/// Error type for training-matrix decoding and splitting
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// Row does not hold exactly `num_input + num_output` values
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Label part of the row is not a one-hot vector
    NotOneHot { row: usize },
    /// Train fraction outside `[0, 1]`
    InvalidSplit { fraction: f64 },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::RowLength {
                row,
                expected,
                found,
            } => {
                write!(f, "Row {row} has {found} values, expected {expected}")
            }
            DataError::NotOneHot { row } => {
                write!(f, "Row {row} label is not one-hot")
            }
            DataError::InvalidSplit { fraction } => {
                write!(f, "Train fraction {fraction} must lie in [0, 1]")
            }
        }
    }
}

impl std::error::Error for DataError {}

/// Error type for swarm configuration and training runs
#[derive(Debug, Clone, PartialEq)]
pub enum SwarmError {
    /// Hyperparameters rejected by `PsoParams::validate`
    InvalidParams { reason: String },
    /// Fitness evaluation failed inside the model
    Network(NetworkError),
}

impl fmt::Display for SwarmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwarmError::InvalidParams { reason } => {
                write!(f, "Invalid swarm parameters: {reason}")
            }
            SwarmError::Network(err) => write!(f, "Fitness evaluation failed: {err}"),
        }
    }
}

impl std::error::Error for SwarmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SwarmError::Network(err) => Some(err),
            SwarmError::InvalidParams { .. } => None,
        }
    }
}

impl From<NetworkError> for SwarmError {
    fn from(err: NetworkError) -> Self {
        SwarmError::Network(err)
    }
}

pub type NetworkResult<T> = Result<T, NetworkError>;
pub type SwarmResult<T> = Result<T, SwarmError>;
