//! `swarmin` provides a small, trait-based particle swarm optimizer (PSO) for minimizing a scalar
//! cost function $`f(\mathbb{R}^n) \to \mathbb{R}`$ over a fixed-dimensional real vector, with
//! optional box constraints.
//!
//! <div class="warning">
//!
//! This crate is still in an early development phase, and the API is not stable.
//!
//! </div>
//!
//! # Table of Contents
//! - [Key Features](#key-features)
//! - [Quick Start](#quick-start)
//! - [Bounds](#bounds)
//! - [Reproducibility](#reproducibility)
//!
//! # Key Features
//! * A single global-best PSO with the classic inertia/cognitive/social velocity update.
//! * Explicit, seedable random number generators so that every run can be reproduced exactly.
//! * Hard clamping of particle positions to an optional bounding box.
//! * [`Observer`](traits::Observer)s which can watch (but not steer) the swarm after every step.
//!
//! # Quick Start
//!
//! Any closure `Fn(&DVector<Float>) -> Float` is a [`CostFunction`](traits::CostFunction), so
//! minimizing $`f(x) = x^5 - 3x^4 + 5`$ on $`[0, 4]`$ looks like this:
//!
//! ```rust
//! use fastrand::Rng;
//! use swarmin::prelude::*;
//!
//! let f = |x: &DVector<Float>| x[0].powi(5) - 3.0 * x[0].powi(4) + 5.0;
//! let mut pso = PSO::from_parts(&[5.0], Some(&[(0.0, 4.0)]), 15, 50, Rng::with_seed(0))
//!     .expect("valid configuration");
//! let summary = pso.run(&f, &mut ()).unwrap();
//! assert_eq!(summary.result(), (-14.91, vec![2.4]));
//! ```
//!
//! # Bounds
//! Bounds are given as one `(min, max)` pair per parameter. After every position update each
//! coordinate is hard-clamped into its interval: values above `max` are set to `max` and values
//! below `min` are set to `min`. Velocities are left untouched by the clamp, so a particle may keep
//! pushing against a wall for several steps. Infinite ends produce one-sided bounds.
//!
//! # Reproducibility
//! The optimizer owns a [`fastrand::Rng`]. Seeding it with [`fastrand::Rng::with_seed`] before
//! constructing the optimizer makes [`PSO::run`](algorithms::particles::PSO::run) reproducible
//! bit-for-bit, provided the cost function itself is deterministic.
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing the particle swarm optimizer.
pub mod algorithms;
/// Module containing core types like [`Bound`](core::Bound), [`Point`](core::Point) and
/// [`SwarmSummary`](core::SwarmSummary).
pub mod core;
/// Module containing the [`SwarmError`](error::SwarmError) configuration error type.
pub mod error;
/// Module containing standard functions for testing algorithms.
pub mod test_functions;
/// Module containing the traits used to plug user code into the optimizer.
pub mod traits;

pub use nalgebra::DVector;

/// The floating-point type used throughout the crate.
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// The floating-point type used throughout the crate.
#[cfg(feature = "f32")]
pub type Float = f32;

/// The mathematical constant $`\pi`$.
#[cfg(not(feature = "f32"))]
pub const PI: Float = std::f64::consts::PI;

/// The mathematical constant $`\pi`$.
#[cfg(feature = "f32")]
pub const PI: Float = std::f32::consts::PI;

/// Prelude module containing everything someone should need to use this crate for non-development
/// purposes
pub mod prelude {
    pub use crate::{
        algorithms::particles::{PSOConfig, SwarmStatus, TrackingSwarmObserver, PSO},
        core::{Bound, Bounds, Point, SwarmSummary},
        error::SwarmError,
        traits::{CostFunction, DebugObserver, Observer, Status},
        DVector, Float,
    };
}
