use std::sync::Arc;

use fastrand::Rng;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::{
    algorithms::particles::{SwarmParticle, SwarmStatus},
    core::{Bound, Bounds, SwarmSummary},
    error::{Result as SwarmResult, SwarmError},
    traits::{CostFunction, Observer, Status},
    DVector, Float,
};

/// The default inertial weight $`\omega`$.
pub const DEFAULT_OMEGA: Float = 0.5;
/// The default cognitive weight $`c_1`$.
pub const DEFAULT_C1: Float = 1.0;
/// The default social weight $`c_2`$.
pub const DEFAULT_C2: Float = 2.0;
const DEFAULT_N_PARTICLES: usize = 15;
const DEFAULT_MAX_STEPS: usize = 50;

/// The configuration struct for the [`PSO`] algorithm.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PSOConfig {
    x0: Vec<Float>,
    bounds: Option<Bounds>,
    parameter_names: Option<Vec<String>>,
    n_particles: usize,
    max_steps: usize,
    omega: Float,
    c1: Float,
    c2: Float,
}
impl PSOConfig {
    /// Create a configuration where every particle starts at `x0`.
    pub fn new<I: IntoIterator<Item = Float>>(x0: I) -> Self {
        Self {
            x0: x0.into_iter().collect(),
            bounds: None,
            parameter_names: None,
            n_particles: DEFAULT_N_PARTICLES,
            max_steps: DEFAULT_MAX_STEPS,
            omega: DEFAULT_OMEGA,
            c1: DEFAULT_C1,
            c2: DEFAULT_C2,
        }
    }
    /// Convenience method to use chainable methods to set up the [`PSOConfig`].
    ///
    /// ```rust
    /// use swarmin::prelude::*;
    ///
    /// let config = PSOConfig::new([5.0]).setup(|c| {
    ///     c.with_bounds([(0.0, 4.0)])
    ///         .with_n_particles(15)
    ///         .with_max_steps(50)
    /// });
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn setup<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut Self) -> &mut Self,
    {
        f(&mut self);
        self
    }
    /// Sets all [`Bound`]s of the swarm, one per parameter. Positions are hard-clamped into
    /// these bounds after every position update. Individual upper or lower bounds can be
    /// unbounded by setting them equal to `Float::INFINITY` or `Float::NEG_INFINITY`.
    pub fn with_bounds<I: IntoIterator<Item = B>, B: Into<Bound>>(
        &mut self,
        bounds: I,
    ) -> &mut Self {
        self.bounds = Some(bounds.into_iter().collect());
        self
    }
    /// Removes any bounds, so particle positions are never clamped.
    pub fn without_bounds(&mut self) -> &mut Self {
        self.bounds = None;
        self
    }
    /// Sets the names of the parameters. This is only used for printing and debugging purposes.
    pub fn with_parameter_names<I: IntoIterator<Item = String>>(&mut self, names: I) -> &mut Self {
        self.parameter_names = Some(names.into_iter().collect());
        self
    }
    /// Sets the number of particles in the swarm (default = `15`).
    pub const fn with_n_particles(&mut self, value: usize) -> &mut Self {
        self.n_particles = value;
        self
    }
    /// Sets the number of iterations performed by [`PSO::run`] (default = `50`).
    pub const fn with_max_steps(&mut self, value: usize) -> &mut Self {
        self.max_steps = value;
        self
    }
    /// Sets the inertial weight $`\omega`$ (default = `0.5`).
    pub const fn with_omega(&mut self, value: Float) -> &mut Self {
        self.omega = value;
        self
    }
    /// Sets the cognitive weight $`c_1`$ which controls the particle's tendency to move towards
    /// its personal best (default = `1.0`).
    pub const fn with_c1(&mut self, value: Float) -> &mut Self {
        self.c1 = value;
        self
    }
    /// Sets the social weight $`c_2`$ which controls the particle's tendency to move towards the
    /// global best (default = `2.0`).
    pub const fn with_c2(&mut self, value: Float) -> &mut Self {
        self.c2 = value;
        self
    }
    /// The number of free parameters.
    pub fn dimension(&self) -> usize {
        self.x0.len()
    }
    /// The starting position shared by every particle.
    pub fn x0(&self) -> &[Float] {
        &self.x0
    }
    /// The bounds of the swarm, if any.
    pub const fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }
    /// The number of particles in the swarm.
    pub const fn n_particles(&self) -> usize {
        self.n_particles
    }
    /// The number of iterations performed by [`PSO::run`].
    pub const fn max_steps(&self) -> usize {
        self.max_steps
    }
    /// Check the configuration for errors which would make a run meaningless.
    ///
    /// # Errors
    ///
    /// Returns a [`SwarmError`] if the starting position is empty, the number of bounds does not
    /// match the number of parameters, there are no particles or no iterations, or a weight is
    /// negative. The ordering of each bound's `min` and `max` is not checked.
    pub fn validate(&self) -> SwarmResult<()> {
        if self.x0.is_empty() {
            return Err(SwarmError::EmptyStartingPoint);
        }
        if let Some(bounds) = &self.bounds {
            if bounds.len() != self.x0.len() {
                return Err(SwarmError::BoundsDimensionMismatch {
                    expected: self.x0.len(),
                    got: bounds.len(),
                });
            }
        }
        if self.n_particles == 0 {
            return Err(SwarmError::NoParticles);
        }
        if self.max_steps == 0 {
            return Err(SwarmError::NoIterations);
        }
        for (name, value) in [("omega", self.omega), ("c1", self.c1), ("c2", self.c2)] {
            if value.is_nan() || value < 0.0 {
                return Err(SwarmError::NegativeWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Particle Swarm Optimizer
///
/// The PSO algorithm involves an ensemble of particles which all start at the same position
/// $`x_0`$ with random velocities. Each iteration runs two phases:
///
/// 1. every particle evaluates the cost function at its position and updates its personal best;
///    the global best is replaced whenever a particle's value is strictly lower than it.
/// 2. every particle updates its velocity as
///
/// ```math
/// v_i^{t+1} = \omega v_i^t + c_1 r_{1,i}^{t+1}(p^t_i - x^t_i) + c_2 r_{2,i}^{t+1}(g^t - x^t_i)
/// ```
/// and then moves to $`x^{t+1}_i = x^t_i + v^{t+1}_i`$ (hard-clamped into the bounds, if any).
/// Here $`r_1`$ and $`r_2`$ are uniformly distributed in $`[0,1)`$, $`p_i^t`$ is the particle's
/// personal best position, and $`g^t`$ is the global best as it stood at the end of phase 1.
///
/// The run stops after a fixed number of iterations; there is no convergence check.
pub struct PSO<U = ()> {
    config: PSOConfig,
    rng: Rng,
    status: SwarmStatus,
    observers: Vec<Arc<RwLock<dyn Observer<SwarmStatus, U>>>>,
}

impl<U> PSO<U> {
    /// Construct a new particle swarm optimizer from the given configuration, creating every
    /// particle at the configured starting position with a random velocity drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns a [`SwarmError`] if the configuration is invalid (see [`PSOConfig::validate`]).
    pub fn new(config: PSOConfig, rng: Rng) -> SwarmResult<Self> {
        config.validate()?;
        let mut pso = Self {
            config,
            rng,
            status: SwarmStatus::default(),
            observers: Vec::default(),
        };
        pso.initialize();
        Ok(pso)
    }
    /// Construct a new particle swarm optimizer directly from a starting position, optional
    /// `(min, max)` bounds, the number of particles, and the number of iterations, using the
    /// default weights.
    ///
    /// # Errors
    ///
    /// Returns a [`SwarmError`] if the configuration is invalid (see [`PSOConfig::validate`]).
    pub fn from_parts(
        x0: &[Float],
        bounds: Option<&[(Float, Float)]>,
        n_particles: usize,
        max_steps: usize,
        rng: Rng,
    ) -> SwarmResult<Self> {
        let config = PSOConfig::new(x0.iter().copied()).setup(|c| {
            if let Some(bounds) = bounds {
                c.with_bounds(bounds.iter().copied());
            }
            c.with_n_particles(n_particles).with_max_steps(max_steps)
        });
        Self::new(config, rng)
    }
    fn initialize(&mut self) {
        self.status.reset();
        let x0 = DVector::from_column_slice(&self.config.x0);
        self.status.particles = (0..self.config.n_particles)
            .map(|_| SwarmParticle::new(&x0, &mut self.rng))
            .collect();
        self.status.update_message("Initialized");
    }
    /// Discard the current swarm and global best and create a fresh swarm at the starting
    /// position, continuing to draw from the optimizer's random number generator.
    pub fn restart(&mut self) {
        self.initialize();
    }
    /// Adds a single [`Observer`] to the optimizer.
    pub fn add_observer<O>(&mut self, observer: Arc<RwLock<O>>) -> &mut Self
    where
        O: Observer<SwarmStatus, U> + 'static,
    {
        self.observers.push(observer);
        self
    }
    /// The configuration of the optimizer.
    pub const fn config(&self) -> &PSOConfig {
        &self.config
    }
    /// The current state of the swarm.
    pub const fn status(&self) -> &SwarmStatus {
        &self.status
    }
    /// Perform a single iteration: the evaluation phase over every particle followed by the update
    /// phase over every particle, both in population order.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn step<F, E>(&mut self, func: &F, user_data: &mut U) -> Result<(), E>
    where
        F: CostFunction<U, E> + ?Sized,
    {
        self.evaluate_swarm(func, user_data)?;
        self.update_swarm();
        self.status.n_steps += 1;
        Ok(())
    }
    fn evaluate_swarm<F, E>(&mut self, func: &F, user_data: &mut U) -> Result<(), E>
    where
        F: CostFunction<U, E> + ?Sized,
    {
        let SwarmStatus {
            gbest,
            particles,
            n_f_evals,
            n_steps,
            ..
        } = &mut self.status;
        for (i, particle) in particles.iter_mut().enumerate() {
            let (fx, x) = particle.evaluate(func, user_data)?;
            *n_f_evals += 1;
            if gbest.update_if_better(x, fx) {
                tracing::trace!(step = *n_steps, particle = i, fx, "new global best");
            }
        }
        Ok(())
    }
    fn update_swarm(&mut self) {
        let PSOConfig {
            bounds,
            omega,
            c1,
            c2,
            ..
        } = &self.config;
        let SwarmStatus {
            gbest, particles, ..
        } = &mut self.status;
        for particle in particles.iter_mut() {
            particle.update_velocity(&gbest.x, *omega, *c1, *c2, &mut self.rng);
            particle.update_position(bounds.as_ref());
        }
    }
    /// Run the optimizer for the configured number of iterations and summarize the global best.
    ///
    /// Each iteration is followed by a call to every [`Observer`]. Calling `run` again continues
    /// from the current swarm (see [`PSO::restart`] to start over).
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information. The run is aborted at the failing evaluation.
    pub fn run<F, E>(&mut self, func: &F, user_data: &mut U) -> Result<SwarmSummary, E>
    where
        F: CostFunction<U, E> + ?Sized,
    {
        tracing::debug!(
            dimension = self.config.dimension(),
            n_particles = self.config.n_particles,
            max_steps = self.config.max_steps,
            bounded = self.config.bounds.is_some(),
            "starting particle swarm"
        );
        for _ in 0..self.config.max_steps {
            self.step(func, user_data)?;
            for observer in &self.observers {
                observer
                    .write()
                    .callback(self.status.n_steps, &self.status, user_data);
            }
        }
        self.status.update_message("MAX STEPS");
        // at least one particle was evaluated, so the global best is set
        let summary = self.summary_with(self.status.gbest.fx_checked());
        tracing::debug!(
            fx = summary.fx,
            x = ?summary.x,
            cost_evals = summary.cost_evals,
            "particle swarm finished"
        );
        Ok(summary)
    }
    /// Summarize the current global best of the swarm.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::NotEvaluated`] if no particle has been evaluated since the optimizer
    /// was created or restarted.
    pub fn summarize(&self) -> SwarmResult<SwarmSummary> {
        let fx = self.status.gbest.fx.ok_or(SwarmError::NotEvaluated)?;
        Ok(self.summary_with(fx))
    }
    fn summary_with(&self, fx: Float) -> SwarmSummary {
        SwarmSummary {
            bounds: self.config.bounds.clone(),
            parameter_names: self.config.parameter_names.clone(),
            message: self.status.message.clone(),
            x0: self.config.x0.clone(),
            x: self.status.gbest.x.iter().copied().collect(),
            fx,
            n_particles: self.status.particles.len(),
            n_steps: self.status.n_steps,
            cost_evals: self.status.n_f_evals,
        }
    }
}
