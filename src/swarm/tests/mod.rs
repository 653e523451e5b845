//! Swarm module tests.
//!
//! - `optimizer.rs` - State machine, invariants, determinism, cancellation
//! - `proptest.rs` - Property-based tests over random seeds


use crate::error::{NetworkError, NetworkResult, Operand};
use crate::swarm::FitnessFunction;

/// Sum of squares, minimum 0 at the origin
#[derive(Clone)]
pub(in crate::swarm) struct Sphere(pub usize);

impl FitnessFunction for Sphere {
    fn dim(&self) -> usize {
        self.0
    }

    fn fitness(&mut self, candidate: &[f64]) -> NetworkResult<f64> {
        if candidate.len() != self.0 {
            return Err(NetworkError::DimensionMismatch {
                operand: Operand::Weights,
                expected: self.0,
                found: candidate.len(),
            });
        }
        Ok(candidate.iter().map(|x| x * x).sum())
    }
}

/// Scores every candidate as degenerate
#[derive(Clone)]
struct Degenerate(usize);

impl FitnessFunction for Degenerate {
    fn dim(&self) -> usize {
        self.0
    }

    fn fitness(&mut self, _candidate: &[f64]) -> NetworkResult<f64> {
        Ok(f64::INFINITY)
    }
}
