use std::convert::Infallible;

use crate::{DVector, Float};

/// A trait which describes a function $`f(\mathbb{R}^n) \to \mathbb{R}`$ to be minimized.
///
/// Such a function may also take a `user_data: &mut U` field which can be used to pass external
/// arguments to the function during minimization, or can be modified by the function itself.
///
/// The `CostFunction` trait takes a generic `U` representing the type of user data/arguments
/// and a generic `E` representing any possible errors that might be returned during function
/// execution. An `Err(E)` aborts the run it occurs in.
///
/// Any closure `Fn(&DVector<Float>) -> Float` implements `CostFunction<(), Infallible>`.
pub trait CostFunction<U = (), E = Infallible> {
    /// The evaluation of the function at a point `x` with the given arguments/user data.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. Users should implement this trait to return a
    /// [`std::convert::Infallible`] if the function evaluation never fails.
    fn evaluate(&self, x: &DVector<Float>, user_data: &mut U) -> Result<Float, E>;
}

impl<F> CostFunction<(), Infallible> for F
where
    F: Fn(&DVector<Float>) -> Float,
{
    fn evaluate(&self, x: &DVector<Float>, _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok(self(x))
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use crate::{traits::CostFunction, DVector, Float};

    struct TestFunction;
    impl CostFunction<usize, String> for TestFunction {
        fn evaluate(&self, x: &DVector<Float>, n_calls: &mut usize) -> Result<Float, String> {
            *n_calls += 1;
            if x[0].is_nan() {
                return Err("NaN input".to_string());
            }
            Ok(x[0].powi(2) + x[1].powi(2) + 1.0)
        }
    }

    #[test]
    fn test_cost_function() {
        let x: DVector<Float> = DVector::from_vec(vec![1.0, 2.0]);
        let mut n_calls = 0;
        let y = TestFunction.evaluate(&x, &mut n_calls).unwrap();
        assert_eq!(y, 6.0);
        assert_eq!(n_calls, 1);
    }

    #[test]
    fn test_cost_function_error() {
        let x: DVector<Float> = DVector::from_vec(vec![Float::NAN, 2.0]);
        let mut n_calls = 0;
        assert_eq!(
            TestFunction.evaluate(&x, &mut n_calls),
            Err("NaN input".to_string())
        );
    }

    #[test]
    fn test_closure_cost_function() -> Result<(), Infallible> {
        let f = |x: &DVector<Float>| x.sum();
        let x: DVector<Float> = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(f.evaluate(&x, &mut ())?, 6.0);
        Ok(())
    }
}
