use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{core::utils::round_to, Float};

use super::{Bound, Bounds};

/// The number of decimal places used by [`SwarmSummary::result`].
pub const RESULT_DECIMALS: i32 = 2;

/// A struct that holds the results of a particle swarm minimization run.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SwarmSummary {
    /// The bounds of the parameters. This is `None` if no bounds were set.
    pub bounds: Option<Bounds>,
    /// The names of the parameters. This is `None` if no names were set.
    pub parameter_names: Option<Vec<String>>,
    /// A message that can be set by the optimizer.
    pub message: String,
    /// The starting position shared by every particle.
    pub x0: Vec<Float>,
    /// The best position found by the swarm.
    pub x: Vec<Float>,
    /// The value of the cost function at [`SwarmSummary::x`].
    pub fx: Float,
    /// The number of particles in the swarm.
    pub n_particles: usize,
    /// The number of completed iterations.
    pub n_steps: usize,
    /// The number of cost function evaluations.
    pub cost_evals: usize,
}

impl SwarmSummary {
    /// Set the names associated with each parameter.
    pub fn with_parameter_names(mut self, parameter_names: &[String]) -> Self {
        self.parameter_names = Some(parameter_names.to_vec());
        self
    }
    /// Returns a copy of the summary with `fx` and every coordinate of `x` rounded to `decimals`
    /// decimal places (half away from zero).
    pub fn rounded(&self, decimals: i32) -> Self {
        Self {
            x: self.x.iter().map(|&x_i| round_to(x_i, decimals)).collect(),
            fx: round_to(self.fx, decimals),
            ..self.clone()
        }
    }
    /// The `(error, position)` read-out of the run, rounded to two decimal places.
    pub fn result(&self) -> (Float, Vec<Float>) {
        let rounded = self.rounded(RESULT_DECIMALS);
        (rounded.fx, rounded.x)
    }
}

impl Display for SwarmSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SWARM RESULTS")?;
        writeln!(f, "MSG:       {}", self.message)?;
        writeln!(f, "F(X):      {:+.5}", self.fx)?;
        writeln!(f, "PARTICLES: {}", self.n_particles)?;
        writeln!(f, "STEPS:     {}", self.n_steps)?;
        writeln!(f, "N_F_EVALS: {}", self.cost_evals)?;
        let names = self.parameter_names.clone().unwrap_or_else(|| {
            (0..self.x.len())
                .map(|i| format!("x_{}", i))
                .collect::<Vec<_>>()
        });
        let bounds = self
            .bounds
            .clone()
            .map(|b| b.into_inner())
            .unwrap_or_else(|| vec![Bound::NoBound; self.x.len()]);
        writeln!(
            f,
            "{:<10} {:>12} {:>12} {:>12} {:>12}  At Limit?",
            "Parameter", "=", "0", "-", "+"
        )?;
        for (((v, v0), b), n) in self.x.iter().zip(&self.x0).zip(&bounds).zip(&names) {
            writeln!(
                f,
                "{:<10} {:>+12.5} {:>+12.5} {:>12.5} {:>12.5}  {}",
                n,
                v,
                v0,
                b.lower(),
                b.upper(),
                if b.at_bound(*v) { "Yes" } else { "No" }
            )?;
        }
        Ok(())
    }
}
