use crate::{algorithms::particles::SwarmParticle, core::Point, traits::Status};
use serde::{Deserialize, Serialize};

/// A status for particle swarm optimization.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct SwarmStatus {
    /// The global best position found by all particles (unset until the first evaluation)
    pub gbest: Point,
    /// The particles of the swarm, in population order
    pub particles: Vec<SwarmParticle>,
    /// The number of completed iterations
    pub n_steps: usize,
    /// The number of cost function evaluations
    pub n_f_evals: usize,
    /// A message containing information about the condition of the swarm
    pub message: String,
}

impl SwarmStatus {
    /// Get the global best position found by the swarm, or `None` if no particle has been
    /// evaluated yet.
    pub const fn best(&self) -> Option<&Point> {
        if self.gbest.is_set() {
            Some(&self.gbest)
        } else {
            None
        }
    }
}

impl Status for SwarmStatus {
    fn reset(&mut self) {
        self.message = String::new();
        self.gbest = Point::default();
        self.particles = vec![];
        self.n_steps = 0;
        self.n_f_evals = 0;
    }
    fn message(&self) -> &str {
        &self.message
    }
    fn update_message(&mut self, message: &str) {
        self.message = message.to_string();
    }
}
