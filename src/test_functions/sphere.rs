use std::convert::Infallible;

use crate::{traits::CostFunction, DVector, Float};

/// A generalized spherical function with a single minimum.
///
/// ```math
/// f(\vec{x}) = \sum_{i=1}^{n} x_i^2
/// ```
/// The global minimum is at $`f(\vec{0}) = 0`$.
pub struct Sphere;
impl CostFunction<(), Infallible> for Sphere {
    fn evaluate(&self, x: &DVector<Float>, _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok(x.norm_squared())
    }
}
