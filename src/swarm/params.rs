#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{SwarmError, SwarmResult};

/// How particle fitness is evaluated each iteration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvaluationMode {
    /// One particle at a time; the global best updates immediately
    #[default]
    Sequential,
    /// Move every particle, evaluate on worker threads, then fold in particle order
    Parallel { threads: usize },
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PsoParams {
    pub num_particles: usize,
    pub max_iterations: usize,
    /// Inertia weight
    pub inertia: f64,
    /// Cognitive (personal best) weight
    pub cognitive: f64,
    /// Social (global best) weight
    pub social: f64,
    pub min_x: f64,
    pub max_x: f64,
    /// Velocity is clamped to `±velocity_factor * max_x`
    pub velocity_factor: f64,
    pub seed: u64,
    pub mode: EvaluationMode,
}

impl Default for PsoParams {
    fn default() -> Self {
        PsoParams {
            num_particles: 10,
            max_iterations: 500,
            inertia: 0.729,
            cognitive: 1.49445,
            social: 1.49445,
            min_x: -5.0,
            max_x: 5.0,
            velocity_factor: 0.1,
            seed: 0,
            mode: EvaluationMode::Sequential,
        }
    }
}

impl PsoParams {
    #[must_use]
    pub fn particles(mut self, num_particles: usize) -> Self {
        self.num_particles = num_particles;
        self
    }

    #[must_use]
    pub fn iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn coefficients(mut self, inertia: f64, cognitive: f64, social: f64) -> Self {
        self.inertia = inertia;
        self.cognitive = cognitive;
        self.social = social;
        self
    }

    #[must_use]
    pub fn bounds(mut self, min_x: f64, max_x: f64) -> Self {
        self.min_x = min_x;
        self.max_x = max_x;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Evaluate fitness on `threads` workers (1 keeps the sequential path)
    #[must_use]
    pub fn threads(mut self, threads: usize) -> Self {
        self.mode = if threads > 1 {
            EvaluationMode::Parallel { threads }
        } else {
            EvaluationMode::Sequential
        };
        self
    }

    /// Velocity clamp range `(min_v, max_v)`
    #[inline]
    #[must_use]
    pub fn velocity_bounds(&self) -> (f64, f64) {
        (-self.velocity_factor * self.max_x, self.velocity_factor * self.max_x)
    }

    /// Half-width of the range initial velocities are drawn from
    #[inline]
    #[must_use]
    pub fn initial_velocity_span(&self) -> f64 {
        (self.max_x - self.min_x).abs()
    }

    pub fn validate(&self) -> SwarmResult<()> {
        let invalid = |reason: &str| {
            Err(SwarmError::InvalidParams {
                reason: reason.to_string(),
            })
        };
        if self.num_particles == 0 {
            return invalid("swarm needs at least one particle");
        }
        let coefficients = [
            self.inertia,
            self.cognitive,
            self.social,
            self.min_x,
            self.max_x,
            self.velocity_factor,
        ];
        if coefficients.iter().any(|c| !c.is_finite()) {
            return invalid("coefficients and bounds must be finite");
        }
        if self.min_x >= self.max_x {
            return invalid("min_x must be below max_x");
        }
        let (min_v, max_v) = self.velocity_bounds();
        if min_v > max_v {
            return invalid("velocity bounds are inverted; max_x * velocity_factor must be non-negative");
        }
        if let EvaluationMode::Parallel { threads: 0 } = self.mode {
            return invalid("parallel evaluation needs at least one thread");
        }
        Ok(())
    }
}
