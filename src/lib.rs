//! # PSO classifier
//!
//! Trains a single-hidden-layer neural network classifier with particle
//! swarm optimization instead of gradient descent.
//!
//! ## Structure
//!
//! - [`network`] — Topology, flat weight layout, forward pass
//! - [`swarm`] — Particles, cross-entropy fitness, the optimizer
//! - [`data`] — Labeled rows, synthetic colour data, shuffling and splitting
//! - [`trainer`] — Training on a background thread
//!
//! # Example
//! ```
//! use pso_classifier::data::{generate_colors, TrainingExample};
//! use pso_classifier::network::{NeuralNetwork, Topology};
//! use pso_classifier::swarm::{train, PsoParams};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let examples: Vec<TrainingExample> = generate_colors(40, &mut rng)
//!     .unwrap()
//!     .iter()
//!     .map(|s| s.to_example())
//!     .collect();
//!
//! let topology = Topology::new(4, 5, 3).unwrap();
//! let result = train(topology, &examples, PsoParams::default().iterations(20)).unwrap();
//! assert_eq!(result.best_position.len(), 43);
//!
//! let mut network = NeuralNetwork::with_weights(topology, &result.best_position).unwrap();
//! let probabilities = network.compute_outputs(&examples[0].features).unwrap();
//! assert!((probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-9);
//! ```

pub mod data;
pub mod error;
pub mod network;
pub mod swarm;
pub mod sync;
pub mod trainer;

pub use error::{DataError, NetworkError, NetworkResult, Operand, SwarmError, SwarmResult};
pub use network::{NeuralNetwork, Topology};
pub use swarm::{train, CrossEntropy, FitnessFunction, ParticleSwarm, PsoParams, TrainingResult};
pub use sync::StopFlag;
pub use trainer::TrainerController;
