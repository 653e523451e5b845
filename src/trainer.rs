//! Background training with live progress and cancellation.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::data::TrainingExample;
use crate::error::SwarmResult;
use crate::network::Topology;
use crate::swarm::{
    CrossEntropy, LogReporter, ParticleSwarm, ProgressCallback, ProgressInfo, ProgressReporter,
    PsoParams, TrainingResult,
};
use crate::sync::StopFlag;

/// A training run executing on its own thread
pub struct TrainerController {
    stop: StopFlag,
    /// Latest snapshot published by the swarm
    progress: Arc<Mutex<Option<ProgressInfo>>>,
    handle: JoinHandle<SwarmResult<TrainingResult>>,
}

impl TrainerController {
    /// Start training on a thread named `pso-trainer`.
    ///
    /// `callback` runs on the training thread after every iteration.
    pub fn spawn(
        topology: Topology,
        examples: Vec<TrainingExample>,
        params: PsoParams,
        callback: Option<ProgressCallback>,
    ) -> io::Result<Self> {
        let stop = StopFlag::new();
        let progress = Arc::new(Mutex::new(None));

        let thread_stop = stop.clone();
        let thread_progress = Arc::clone(&progress);
        let handle = thread::Builder::new()
            .name("pso-trainer".to_string())
            .spawn(move || {
                let log_reporter = LogReporter::default();
                let reporter = |info: &ProgressInfo| {
                    *thread_progress.lock() = Some(info.clone());
                    log_reporter.report(info);
                    if let Some(cb) = &callback {
                        cb(info);
                    }
                };
                let objective = CrossEntropy::new(topology, &examples);
                let mut swarm = ParticleSwarm::new(objective, params)?;
                swarm.run(Some(&thread_stop), &reporter)
            })?;

        Ok(TrainerController {
            stop,
            progress,
            handle,
        })
    }

    /// Most recent progress, `None` until initialization completes
    #[must_use]
    pub fn progress(&self) -> Option<ProgressInfo> {
        self.progress.lock().clone()
    }

    /// Ask the run to finish after its current iteration
    pub fn stop(&self) {
        self.stop.stop();
    }

    #[must_use]
    pub fn stop_flag(&self) -> StopFlag {
        self.stop.clone()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the run and return its result.
    ///
    /// A panic on the training thread is resumed on the caller.
    pub fn join(self) -> SwarmResult<TrainingResult> {
        match self.handle.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    /// Signal stop and wait for the best result so far
    pub fn stop_and_join(self) -> SwarmResult<TrainingResult> {
        self.stop();
        self.join()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn examples() -> Vec<TrainingExample> {
        vec![
            TrainingExample::new(vec![0.0, 1.0], vec![1.0, 0.0]),
            TrainingExample::new(vec![1.0, 0.0], vec![0.0, 1.0]),
        ]
    }

    #[test]
    fn test_background_run_completes() {
        let topology = Topology::new(2, 2, 2).unwrap();
        let params = PsoParams::default().particles(4).iterations(30);
        let controller = TrainerController::spawn(topology, examples(), params, None).unwrap();
        let result = controller.join().unwrap();
        assert_eq!(result.iterations, 30);
        assert!(!result.stopped);
        assert_eq!(result.best_position.len(), topology.num_weights());
    }

    #[test]
    fn test_callback_and_progress() {
        let topology = Topology::new(2, 2, 2).unwrap();
        let params = PsoParams::default().particles(3).iterations(10);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let callback: ProgressCallback = Arc::new(move |_info: &ProgressInfo| {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        let controller =
            TrainerController::spawn(topology, examples(), params, Some(callback)).unwrap();
        while !controller.is_finished() {
            std::thread::yield_now();
        }
        let last = controller.progress().unwrap();
        assert_eq!(last.iteration, 10);

        let result = controller.join().unwrap();
        assert_eq!(last.global_best_fitness, result.best_fitness);
        assert_eq!(calls.load(Ordering::Relaxed), 11);
    }

    #[test]
    fn test_stop_flag_from_callback() {
        let topology = Topology::new(2, 2, 2).unwrap();
        let params = PsoParams::default().particles(3).iterations(100_000);
        let stop_slot: Arc<Mutex<Option<StopFlag>>> = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&stop_slot);
        let callback: ProgressCallback = Arc::new(move |info: &ProgressInfo| {
            if info.iteration >= 3 {
                if let Some(flag) = slot.lock().as_ref() {
                    flag.stop();
                }
            }
        });

        let controller =
            TrainerController::spawn(topology, examples(), params, Some(callback)).unwrap();
        *stop_slot.lock() = Some(controller.stop_flag());
        let result = controller.join().unwrap();
        assert!(result.stopped);
        assert!(result.iterations < 100_000);
    }

    #[test]
    fn test_stop_and_join() {
        let topology = Topology::new(2, 2, 2).unwrap();
        let params = PsoParams::default().particles(3).iterations(1_000_000);
        let controller = TrainerController::spawn(topology, examples(), params, None).unwrap();
        let result = controller.stop_and_join().unwrap();
        assert!(result.stopped);
        assert_eq!(result.best_position.len(), topology.num_weights());
    }
}
