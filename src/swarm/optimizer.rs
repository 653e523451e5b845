//! Particle swarm state machine.
//!
//! `Initialization -> Iterating -> Terminated`. Termination is purely
//! iteration-count based unless a [`StopFlag`] is raised.
//!
//! Random draws happen in a fixed order so a seed reproduces a run exactly:
//! initialization draws every position component of a particle, then every
//! velocity component; each update draws `r1` then `r2` per dimension.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::fitness::FitnessFunction;
use super::parallel::evaluate_all;
use super::params::{EvaluationMode, PsoParams};
use super::particle::Particle;
use super::report::{ProgressInfo, ProgressReporter};
use crate::error::SwarmResult;
use crate::sync::StopFlag;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwarmPhase {
    Initialization,
    Iterating,
    Terminated,
}

/// Outcome of a training run
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingResult {
    /// Best weight vector found by any particle
    pub best_position: Vec<f64>,
    pub best_fitness: f64,
    /// Completed update iterations
    pub iterations: usize,
    /// Run ended early through a stop flag
    pub stopped: bool,
}

pub struct ParticleSwarm<F: FitnessFunction> {
    params: PsoParams,
    objective: F,
    rng: StdRng,
    particles: Vec<Particle>,
    global_best_position: Vec<f64>,
    global_best_fitness: f64,
    iteration: usize,
    phase: SwarmPhase,
}

impl<F: FitnessFunction> ParticleSwarm<F> {
    /// Create an empty swarm; nothing is evaluated until [`Self::initialize`]
    pub fn new(objective: F, params: PsoParams) -> SwarmResult<Self> {
        params.validate()?;
        let rng = StdRng::seed_from_u64(params.seed);
        Ok(ParticleSwarm {
            params,
            objective,
            rng,
            particles: Vec::new(),
            global_best_position: Vec::new(),
            global_best_fitness: f64::INFINITY,
            iteration: 0,
            phase: SwarmPhase::Initialization,
        })
    }

    #[must_use]
    pub fn params(&self) -> &PsoParams {
        &self.params
    }

    #[must_use]
    pub fn phase(&self) -> SwarmPhase {
        self.phase
    }

    #[must_use]
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Best position and fitness so far; `None` before initialization
    #[must_use]
    pub fn global_best(&self) -> Option<(&[f64], f64)> {
        if self.global_best_position.is_empty() {
            None
        } else {
            Some((&self.global_best_position, self.global_best_fitness))
        }
    }

    /// Scatter the particles uniformly over the search box and score them.
    ///
    /// Calling this again after the first time does nothing.
    pub fn initialize(&mut self) -> SwarmResult<()> {
        if self.phase != SwarmPhase::Initialization {
            return Ok(());
        }
        let dim = self.objective.dim();
        let (min_x, max_x) = (self.params.min_x, self.params.max_x);
        let span = self.params.initial_velocity_span();

        let mut particles = Vec::with_capacity(self.params.num_particles);
        for _ in 0..self.params.num_particles {
            let position: Vec<f64> = (0..dim)
                .map(|_| (max_x - min_x) * self.rng.gen::<f64>() + min_x)
                .collect();
            let velocity: Vec<f64> = (0..dim)
                .map(|_| 2.0 * span * self.rng.gen::<f64>() - span)
                .collect();
            particles.push(Particle::new(position, velocity, f64::INFINITY));
        }

        let fitnesses = match self.params.mode {
            EvaluationMode::Sequential => particles
                .iter()
                .map(|p| self.objective.fitness(&p.position))
                .collect::<Result<Vec<_>, _>>()?,
            EvaluationMode::Parallel { threads } => {
                evaluate_all(&self.objective, &particles, threads)?
            }
        };

        for (particle, fitness) in particles.iter_mut().zip(fitnesses) {
            particle.fitness = fitness;
            particle.best_fitness = fitness;
            if self.global_best_position.is_empty() || fitness < self.global_best_fitness {
                self.global_best_fitness = fitness;
                self.global_best_position = particle.position.clone();
            }
        }
        self.particles = particles;
        self.phase = SwarmPhase::Iterating;

        log::debug!(
            "initialized {} particles over {} dimensions, best fitness {:.4}",
            self.params.num_particles,
            dim,
            self.global_best_fitness
        );
        Ok(())
    }

    /// Run one update iteration over every particle.
    ///
    /// Returns whether the global best improved.
    pub fn step(&mut self) -> SwarmResult<bool> {
        self.initialize()?;
        let improved = match self.params.mode {
            EvaluationMode::Sequential => self.step_sequential()?,
            EvaluationMode::Parallel { threads } => self.step_parallel(threads)?,
        };
        self.iteration += 1;
        if improved {
            log::debug!(
                "iteration {}: global best improved to {:.6}",
                self.iteration,
                self.global_best_fitness
            );
        } else {
            log::trace!("iteration {}: no improvement", self.iteration);
        }
        Ok(improved)
    }

    /// Later particles already follow a global best improved earlier in the
    /// same pass.
    fn step_sequential(&mut self) -> SwarmResult<bool> {
        let mut improved = false;
        for particle in &mut self.particles {
            move_particle(particle, &self.global_best_position, &self.params, &mut self.rng);
            let fitness = self.objective.fitness(&particle.position)?;
            particle.observe(fitness);
            if fitness < self.global_best_fitness {
                self.global_best_fitness = fitness;
                self.global_best_position.copy_from_slice(&particle.position);
                improved = true;
            }
        }
        Ok(improved)
    }

    /// Every particle moves toward the global best as of the start of the
    /// iteration; improvements fold in particle order after evaluation.
    fn step_parallel(&mut self, threads: usize) -> SwarmResult<bool> {
        for particle in &mut self.particles {
            move_particle(particle, &self.global_best_position, &self.params, &mut self.rng);
        }
        let fitnesses = evaluate_all(&self.objective, &self.particles, threads)?;

        let mut improved = false;
        for (particle, fitness) in self.particles.iter_mut().zip(fitnesses) {
            particle.observe(fitness);
            if fitness < self.global_best_fitness {
                self.global_best_fitness = fitness;
                self.global_best_position.copy_from_slice(&particle.position);
                improved = true;
            }
        }
        Ok(improved)
    }

    /// Iterate until `max_iterations` or until `stop` is raised.
    ///
    /// The stop flag is checked once before each iteration.
    pub fn run(
        &mut self,
        stop: Option<&StopFlag>,
        reporter: &dyn ProgressReporter,
    ) -> SwarmResult<TrainingResult> {
        let max_iterations = self.params.max_iterations;
        if self.phase == SwarmPhase::Initialization {
            self.initialize()?;
            reporter.report(&self.progress(false));
        }

        let mut stopped = false;
        while self.iteration < max_iterations {
            if stop.is_some_and(StopFlag::is_stopped) {
                log::debug!("stop requested after {} iterations", self.iteration);
                stopped = true;
                break;
            }
            let improved = self.step()?;
            reporter.report(&self.progress(improved));
        }
        self.phase = SwarmPhase::Terminated;

        log::info!(
            "swarm finished after {} iterations, best cross entropy {:.4}",
            self.iteration,
            self.global_best_fitness
        );

        Ok(TrainingResult {
            best_position: self.global_best_position.clone(),
            best_fitness: self.global_best_fitness,
            iterations: self.iteration,
            stopped,
        })
    }

    fn progress(&self, improved: bool) -> ProgressInfo {
        ProgressInfo {
            iteration: self.iteration,
            max_iterations: self.params.max_iterations,
            global_best_fitness: self.global_best_fitness,
            improved,
        }
    }
}

/// Apply the velocity and position update to one particle.
///
/// Each dimension only reads its own previous velocity and position, so
/// updating in place matches a full-vector commit.
fn move_particle<R: Rng>(
    particle: &mut Particle,
    global_best: &[f64],
    params: &PsoParams,
    rng: &mut R,
) {
    let (min_v, max_v) = params.velocity_bounds();
    for j in 0..particle.dim() {
        let r1: f64 = rng.gen();
        let r2: f64 = rng.gen();
        let x = particle.position[j];
        let v = params.inertia * particle.velocity[j]
            + params.cognitive * r1 * (particle.best_position[j] - x)
            + params.social * r2 * (global_best[j] - x);
        particle.velocity[j] = v.clamp(min_v, max_v);
    }
    for j in 0..particle.dim() {
        particle.position[j] =
            (particle.position[j] + particle.velocity[j]).clamp(params.min_x, params.max_x);
    }
}
