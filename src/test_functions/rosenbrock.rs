use std::convert::Infallible;

use crate::{traits::CostFunction, DVector, Float};

/// The Rosenbrock function, a non-convex function with a single minimum.
///
/// ```math
/// f(\vec{x}) = \sum_{i=1}^{n-1} \left[100(x_{i+1} - x_i^2)^2 + (1 - x_i)^2 \right]
/// ```
/// where $`n \geq 2`$. This function has a minimum at $`f(\vec{1}) = 0`$.
pub struct Rosenbrock {
    /// The number of dimensions of the function (must be >= 2).
    pub n: usize,
}
impl CostFunction<(), Infallible> for Rosenbrock {
    fn evaluate(&self, x: &DVector<Float>, _user_data: &mut ()) -> Result<Float, Infallible> {
        #[allow(clippy::suboptimal_flops)]
        Ok((0..(self.n - 1))
            .map(|i| 100.0 * (x[i + 1] - x[i].powi(2)).powi(2) + (1.0 - x[i]).powi(2))
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rosenbrock_minimum() {
        let f = Rosenbrock { n: 3 };
        let x = DVector::from_element(3, 1.0);
        assert_eq!(f.evaluate(&x, &mut ()).unwrap(), 0.0);
        let x = DVector::from_vec(vec![0.0, 0.0, 0.0]);
        assert_eq!(f.evaluate(&x, &mut ()).unwrap(), 2.0);
    }
}
