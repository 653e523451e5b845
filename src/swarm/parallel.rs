//! Parallel fitness evaluation across particles.
//!
//! Particles are split into contiguous chunks, one per worker. Each worker
//! clones the fitness function, so every thread owns a private network
//! instance; the shared training data is only read. Results come back in
//! particle order, which keeps the caller's best-fitness fold deterministic
//! regardless of thread count.

use std::thread;

use super::fitness::FitnessFunction;
use super::particle::Particle;
use crate::error::NetworkResult;

/// Score every particle's current position on up to `threads` workers
pub(crate) fn evaluate_all<F: FitnessFunction>(
    objective: &F,
    particles: &[Particle],
    threads: usize,
) -> NetworkResult<Vec<f64>> {
    let threads = threads.clamp(1, particles.len().max(1));
    if threads == 1 {
        let mut local = objective.clone();
        return particles.iter().map(|p| local.fitness(&p.position)).collect();
    }

    let chunk_size = (particles.len() + threads - 1) / threads;
    thread::scope(|scope| {
        let handles: Vec<_> = particles
            .chunks(chunk_size)
            .map(|chunk| {
                let mut local = objective.clone();
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|p| local.fitness(&p.position))
                        .collect::<NetworkResult<Vec<f64>>>()
                })
            })
            .collect();

        let mut fitnesses = Vec::with_capacity(particles.len());
        for handle in handles {
            match handle.join() {
                Ok(chunk) => fitnesses.extend(chunk?),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        Ok(fitnesses)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swarm::tests::Sphere;

    fn particles(n: usize) -> Vec<Particle> {
        (0..n)
            .map(|i| Particle::new(vec![i as f64, 1.0], vec![0.0, 0.0], 0.0))
            .collect()
    }

    #[test]
    fn test_results_in_particle_order() {
        let swarm = particles(7);
        for threads in 1..=8 {
            let out = evaluate_all(&Sphere(2), &swarm, threads).unwrap();
            let expected: Vec<f64> = (0..7).map(|i| (i * i) as f64 + 1.0).collect();
            assert_eq!(out, expected, "threads={threads}");
        }
    }

    #[test]
    fn test_error_propagates() {
        let swarm = particles(4);
        assert!(evaluate_all(&Sphere(3), &swarm, 2).is_err());
    }

    #[test]
    fn test_empty_swarm() {
        assert!(evaluate_all(&Sphere(2), &[], 4).unwrap().is_empty());
    }
}
