//! Feed-forward neural network evaluated by the swarm.
//!
//! Architecture: `num_input -> num_hidden (sigmoid) -> num_output (softmax)`.
//! All parameters travel as one flat `f64` vector whose layout is described
//! on [`Topology`].

pub mod activation;
mod model;
mod topology;


pub use activation::{index_of_largest, sigmoid, softmax, SIGMOID_CLAMP};
pub use model::NeuralNetwork;
pub use topology::Topology;
