//! Activation functions used by the forward pass.

/// Pre-activation magnitude beyond which the sigmoid saturates
pub const SIGMOID_CLAMP: f64 = 45.0;

/// Logistic sigmoid, clamped to exactly 0.0 / 1.0 outside `±SIGMOID_CLAMP`
/// so `exp` never overflows.
#[inline]
#[must_use]
pub fn sigmoid(x: f64) -> f64 {
    if x <= -SIGMOID_CLAMP {
        0.0
    } else if x >= SIGMOID_CLAMP {
        1.0
    } else {
        1.0 / (1.0 + (-x).exp())
    }
}

/// Softmax in place, shifted by the maximum score before exponentiating.
pub fn softmax_in_place(values: &mut [f64]) {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut scale = 0.0;
    for v in values.iter_mut() {
        *v = (*v - max).exp();
        scale += *v;
    }
    for v in values.iter_mut() {
        *v /= scale;
    }
}

/// Softmax into a new vector
#[must_use]
pub fn softmax(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    softmax_in_place(&mut out);
    out
}

/// Index of the largest component; the first one wins ties.
///
/// Returns 0 for an empty slice.
#[must_use]
pub fn index_of_largest(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}
