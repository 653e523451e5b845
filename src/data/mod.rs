//! Training data: labeled rows, the synthetic colour dataset, and splitting.
//!
//! A training-matrix row is `num_input` features followed by a one-hot
//! label of length `num_output`.

mod example;
mod split;
pub mod synthetic;

pub use example::{examples_from_matrix, TrainingExample, LABEL_EPSILON};
pub use split::{shuffle_rows, train_test_split};
pub use synthetic::{generate_colors, Class, ColorSample};
