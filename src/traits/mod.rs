/// Module containing the [`CostFunction`] trait.
pub mod cost_function;
/// Module containing the [`Observer`] trait and its implementations.
pub mod observer;
/// Module containing the [`Status`] trait.
pub mod status;

pub use cost_function::CostFunction;
pub use observer::{DebugObserver, Observer};
pub use status::Status;
