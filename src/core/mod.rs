/// [`Bound`] type for binding variables to a range.
pub mod bound;
/// [`Point`] type for defining a point in the parameter space.
pub mod point;
/// [`SwarmSummary`] type for the result of the minimization.
pub mod summary;
/// Random sampling and rounding helpers.
pub mod utils;

pub use bound::{Bound, Bounds};
pub use point::Point;
pub use summary::SwarmSummary;
