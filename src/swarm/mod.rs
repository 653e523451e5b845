//! Particle swarm optimization of network weights.
//!
//! Features:
//! - Canonical constriction-factor coefficients (w = 0.729, c1 = c2 = 1.49445)
//! - Velocity and position clamping
//! - Seeded, reproducible random stream
//! - Optional parallel fitness evaluation with a deterministic fold
//! - Cooperative cancellation through [`StopFlag`](crate::sync::StopFlag)

mod fitness;
mod optimizer;
mod parallel;
mod params;
mod particle;
mod report;

#[cfg(test)]
mod tests;

pub use fitness::{CrossEntropy, FitnessFunction};
pub use optimizer::{ParticleSwarm, SwarmPhase, TrainingResult};
pub use params::{EvaluationMode, PsoParams};
pub use particle::Particle;
pub use report::{LogReporter, NullReporter, ProgressCallback, ProgressInfo, ProgressReporter};

use crate::data::TrainingExample;
use crate::error::SwarmResult;
use crate::network::Topology;

/// Search for the weights of a `topology` network that minimize
/// cross-entropy on `examples`.
///
/// Progress goes to the `log` facade.
pub fn train(
    topology: Topology,
    examples: &[TrainingExample],
    params: PsoParams,
) -> SwarmResult<TrainingResult> {
    log::info!(
        "training {topology} network on {} examples with {} particles for {} iterations",
        examples.len(),
        params.num_particles,
        params.max_iterations
    );
    let objective = CrossEntropy::new(topology, examples);
    let mut swarm = ParticleSwarm::new(objective, params)?;
    swarm.run(None, &LogReporter::default())
}
