/// Implementation of Particle Swarm Optimization (PSO) algorithm
pub mod pso;
pub use pso::{PSOConfig, PSO};

/// [`SwarmParticle`] type for swarm-based optimizers.
pub mod swarm;
pub use swarm::SwarmParticle;

/// [`SwarmStatus`] type for swarm-based optimizers.
pub mod swarm_status;
pub use swarm_status::SwarmStatus;

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::{core::Point, traits::Observer};

/// An [`Observer`] which stores the swarm particles' history as well as the
/// history of global best positions.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct TrackingSwarmObserver {
    /// The history of the swarm particles
    pub history: Vec<Vec<SwarmParticle>>,
    /// The history of the best position in the swarm
    pub best_history: Vec<Point>,
}

impl TrackingSwarmObserver {
    /// Finalize the [`Observer`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self::default()))
    }
}

impl<U> Observer<SwarmStatus, U> for TrackingSwarmObserver {
    fn callback(&mut self, _step: usize, status: &SwarmStatus, _user_data: &U) {
        self.history.push(status.particles.clone());
        self.best_history.push(status.gbest.clone());
    }
}
