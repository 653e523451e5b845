use std::sync::Arc;

/// Snapshot of the swarm after one iteration
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressInfo {
    /// Completed iterations (0 right after initialization)
    pub iteration: usize,
    pub max_iterations: usize,
    pub global_best_fitness: f64,
    /// Whether this iteration lowered the global best
    pub improved: bool,
}

pub trait ProgressReporter {
    fn report(&self, info: &ProgressInfo);
}

/// Shared per-iteration callback
pub type ProgressCallback = Arc<dyn Fn(&ProgressInfo) + Send + Sync>;

impl<F: Fn(&ProgressInfo)> ProgressReporter for F {
    fn report(&self, info: &ProgressInfo) {
        self(info);
    }
}

/// Reports through the `log` facade every `interval` iterations
pub struct LogReporter {
    pub interval: usize,
}

impl Default for LogReporter {
    fn default() -> Self {
        LogReporter { interval: 100 }
    }
}

impl ProgressReporter for LogReporter {
    fn report(&self, info: &ProgressInfo) {
        let due = self.interval > 0 && info.iteration % self.interval == 0;
        if due || info.iteration == info.max_iterations {
            log::info!(
                "iteration {}/{} best cross entropy {:.4}",
                info.iteration,
                info.max_iterations,
                info.global_best_fitness
            );
        }
    }
}

/// Discards every report
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn report(&self, _info: &ProgressInfo) {}
}
