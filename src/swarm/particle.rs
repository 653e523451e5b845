/// One candidate weight vector moving through the search space
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    /// Fitness at `position` (lower is better)
    pub fitness: f64,
    /// Position with the lowest fitness this particle has seen
    pub best_position: Vec<f64>,
    pub best_fitness: f64,
}

impl Particle {
    /// Create a particle whose personal best is its starting point
    #[must_use]
    pub fn new(position: Vec<f64>, velocity: Vec<f64>, fitness: f64) -> Self {
        Particle {
            best_position: position.clone(),
            best_fitness: fitness,
            position,
            velocity,
            fitness,
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.position.len()
    }

    /// Record the fitness of the current position, updating the personal
    /// best on strict improvement. Returns whether the best moved.
    pub fn observe(&mut self, fitness: f64) -> bool {
        self.fitness = fitness;
        if fitness < self.best_fitness {
            self.best_fitness = fitness;
            self.best_position.copy_from_slice(&self.position);
            true
        } else {
            false
        }
    }
}

impl std::fmt::Display for Particle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "==========================")?;
        writeln!(f, "Position: {:.4?}", self.position)?;
        writeln!(f, "Fitness = {:.4}", self.fitness)?;
        writeln!(f, "Velocity: {:.4?}", self.velocity)?;
        writeln!(f, "Best Position: {:.4?}", self.best_position)?;
        writeln!(f, "Best Fitness = {:.4}", self.best_fitness)?;
        write!(f, "==========================")
    }
}
