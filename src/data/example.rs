use crate::error::DataError;
use crate::network::{index_of_largest, Topology};

/// Tolerance used when checking label components against 0.0 and 1.0
pub const LABEL_EPSILON: f64 = 1e-10;

/// One labeled row of the training matrix
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExample {
    pub features: Vec<f64>,
    /// One-hot class label
    pub label: Vec<f64>,
}

impl TrainingExample {
    #[must_use]
    pub fn new(features: Vec<f64>, label: Vec<f64>) -> Self {
        TrainingExample { features, label }
    }

    /// Split a matrix row into `num_input` features and a `num_output` label.
    ///
    /// `row_index` only feeds the error message.
    pub fn from_row(row_index: usize, row: &[f64], topology: Topology) -> Result<Self, DataError> {
        if row.len() != topology.row_len() {
            return Err(DataError::RowLength {
                row: row_index,
                expected: topology.row_len(),
                found: row.len(),
            });
        }
        let (features, label) = row.split_at(topology.num_input);
        if !is_one_hot(label) {
            return Err(DataError::NotOneHot { row: row_index });
        }
        Ok(TrainingExample {
            features: features.to_vec(),
            label: label.to_vec(),
        })
    }

    /// Index of the labeled class
    #[inline]
    #[must_use]
    pub fn class_index(&self) -> usize {
        index_of_largest(&self.label)
    }

    /// Row form: features followed by label
    #[must_use]
    pub fn to_row(&self) -> Vec<f64> {
        let mut row = Vec::with_capacity(self.features.len() + self.label.len());
        row.extend_from_slice(&self.features);
        row.extend_from_slice(&self.label);
        row
    }
}

/// Decode every row of a training matrix
pub fn examples_from_matrix(
    matrix: &[Vec<f64>],
    topology: Topology,
) -> Result<Vec<TrainingExample>, DataError> {
    matrix
        .iter()
        .enumerate()
        .map(|(i, row)| TrainingExample::from_row(i, row, topology))
        .collect()
}

fn is_one_hot(label: &[f64]) -> bool {
    let mut ones = 0;
    for &v in label {
        if (v - 1.0).abs() <= LABEL_EPSILON {
            ones += 1;
        } else if v.abs() > LABEL_EPSILON {
            return false;
        }
    }
    ones == 1
}
