//! Error types for configuring a particle swarm and reading out its result.
//!
//! Only configuration and read-out problems live here. Errors raised by a
//! [`CostFunction`](crate::traits::CostFunction) are returned unchanged from
//! [`PSO::run`](crate::algorithms::particles::PSO::run).

use thiserror::Error;

use crate::Float;

/// Errors that are detected before a swarm is allowed to run, or when its result is requested
/// too early.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SwarmError {
    /// The starting position has no coordinates.
    #[error("starting position must have at least one dimension")]
    EmptyStartingPoint,

    /// The number of bounds does not match the number of parameters.
    #[error("bounds dimension mismatch: expected {expected}, got {got}")]
    BoundsDimensionMismatch {
        /// Number of parameters in the starting position
        expected: usize,
        /// Number of bounds provided
        got: usize,
    },

    /// The swarm has no particles.
    #[error("swarm must contain at least one particle")]
    NoParticles,

    /// The iteration budget is zero, so no evaluation would ever happen.
    #[error("iteration count must be at least one")]
    NoIterations,

    /// One of the velocity weights is negative or not a number.
    #[error("invalid weight {name} = {value} (must be >= 0)")]
    NegativeWeight {
        /// Name of the weight (`omega`, `c1`, or `c2`)
        name: &'static str,
        /// The invalid value
        value: Float,
    },

    /// The swarm has not evaluated any particle yet, so there is no global best to report.
    #[error("no global best available: the swarm has not been evaluated")]
    NotEvaluated,
}

/// A specialized `Result` type for swarm configuration and read-out.
pub type Result<T> = std::result::Result<T, SwarmError>;

impl SwarmError {
    /// Returns `true` if this error concerns the size of the swarm or its iteration budget or
    /// weights.
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::NoParticles | Self::NoIterations | Self::NegativeWeight { .. }
        )
    }

    /// Returns `true` if this error concerns the dimensionality of the problem.
    pub const fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyStartingPoint | Self::BoundsDimensionMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SwarmError::BoundsDimensionMismatch {
            expected: 2,
            got: 1,
        };
        assert_eq!(err.to_string(), "bounds dimension mismatch: expected 2, got 1");
        assert_eq!(
            SwarmError::NegativeWeight {
                name: "c1",
                value: -1.0
            }
            .to_string(),
            "invalid weight c1 = -1 (must be >= 0)"
        );
    }

    #[test]
    fn test_error_categories() {
        assert!(SwarmError::EmptyStartingPoint.is_dimension_error());
        assert!(!SwarmError::EmptyStartingPoint.is_config_error());
        assert!(SwarmError::NoIterations.is_config_error());
        assert!(SwarmError::NoParticles.is_config_error());
        assert!(!SwarmError::NoParticles.is_dimension_error());
        assert!(!SwarmError::NotEvaluated.is_config_error());
        assert!(!SwarmError::NotEvaluated.is_dimension_error());
    }
}
