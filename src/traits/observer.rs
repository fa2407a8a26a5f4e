use std::{fmt::Debug, sync::Arc};

use parking_lot::RwLock;

use super::Status;

/// A trait which holds a [`callback`](`Observer::callback`) function that can be used to watch an
/// optimizer's [`Status`] after every step.
///
/// Observers only watch: they cannot alter the status or end the run early.
pub trait Observer<S: Status, U> {
    /// A function that is called after every completed step of the optimizer.
    fn callback(&mut self, step: usize, status: &S, user_data: &U);
}

/// A debugging observer which emits the step, status, and any user data as a `tracing` event at
/// the `DEBUG` level.
///
/// # Usage:
///
/// ```rust
/// use fastrand::Rng;
/// use swarmin::prelude::*;
///
/// let f = |x: &DVector<Float>| x[0] * x[0];
/// let mut pso = PSO::from_parts(&[3.0], None, 4, 10, Rng::with_seed(1)).unwrap();
/// pso.add_observer(DebugObserver::build());
/// pso.run(&f, &mut ()).unwrap();
/// // ^ This will emit a debug event for each step if a subscriber is installed
/// ```
pub struct DebugObserver;
impl DebugObserver {
    /// Finalize the [`Observer`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self))
    }
}
impl<S: Status + Debug, U: Debug> Observer<S, U> for DebugObserver {
    fn callback(&mut self, step: usize, status: &S, user_data: &U) {
        tracing::debug!(step, ?status, ?user_data, "swarm step");
    }
}
