use crate::{traits::CostFunction, DVector, Float};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Describes a point in parameter space along with its (optional) evaluation.
///
/// A [`Point`] with `fx == None` is "unset": it has never been evaluated and compares as worse
/// than any evaluated point.
#[derive(Clone, Default, Debug, Serialize, Deserialize, PartialEq)]
pub struct Point {
    /// the point's position
    pub x: DVector<Float>,
    /// the point's evaluation (`None` if the point has not yet been evaluated)
    pub fx: Option<Float>,
}
impl Point {
    /// Create an evaluated point from an owned copy of `x`.
    pub fn new(x: &DVector<Float>, fx: Float) -> Self {
        Self {
            x: x.clone(),
            fx: Some(fx),
        }
    }
    /// Returns `true` if the point has been evaluated.
    pub const fn is_set(&self) -> bool {
        self.fx.is_some()
    }
    /// Returns the number of dimensions of the point.
    pub fn dimension(&self) -> usize {
        self.x.len()
    }
    /// Compare two points by their `fx` value.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (&self.fx, &other.fx) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(s), Some(o)) => s.total_cmp(o),
        }
    }
    /// Returns `true` if `fx` is strictly lower than this point's value or this point is unset.
    pub fn is_improved_by(&self, fx: Float) -> bool {
        self.fx.map_or(true, |best| fx < best)
    }
    /// Replace this point with an owned copy of `x` if `fx` improves on it. Returns `true` if the
    /// point was replaced.
    pub fn update_if_better(&mut self, x: &DVector<Float>, fx: Float) -> bool {
        if self.is_improved_by(fx) {
            self.x.clone_from(x);
            self.fx = Some(fx);
            true
        } else {
            false
        }
    }
    /// Move the point to a new position, resetting the evaluation of the point
    pub fn set_position(&mut self, x: DVector<Float>) {
        self.x = x;
        self.fx = None;
    }
    /// Get the current evaluation of the point, if it has been evaluated
    ///
    /// # Panics
    ///
    /// This method will panic if the point is unevaluated.
    #[allow(clippy::expect_used)]
    pub fn fx_checked(&self) -> Float {
        self.fx.expect("Point value requested before evaluation")
    }
    /// Evaluate the given function at the point's coordinate and set the `fx` value to the result.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn evaluate<U, E, F>(&mut self, func: &F, user_data: &mut U) -> Result<Float, E>
    where
        F: CostFunction<U, E> + ?Sized,
    {
        let fx = func.evaluate(&self.x, user_data)?;
        self.fx = Some(fx);
        Ok(fx)
    }
}
impl From<DVector<Float>> for Point {
    fn from(value: DVector<Float>) -> Self {
        Self { x: value, fx: None }
    }
}
impl From<Vec<Float>> for Point {
    fn from(value: Vec<Float>) -> Self {
        Self {
            x: DVector::from_vec(value),
            fx: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_point_orders_last() {
        let unset = Point::default();
        let set = Point::new(&DVector::from_vec(vec![1.0]), 1e300);
        assert_eq!(unset.total_cmp(&set), Ordering::Greater);
        assert_eq!(set.total_cmp(&unset), Ordering::Less);
        assert_eq!(unset.total_cmp(&Point::default()), Ordering::Equal);
    }

    #[test]
    fn test_update_if_better_is_strict() {
        let mut p = Point::default();
        let x = DVector::from_vec(vec![1.0, 2.0]);
        assert!(p.update_if_better(&x, 3.0));
        assert!(!p.update_if_better(&DVector::from_vec(vec![9.0, 9.0]), 3.0));
        assert_eq!(p.x, x);
        assert!(p.update_if_better(&DVector::from_vec(vec![0.0, 0.0]), 2.5));
        assert_eq!(p.fx, Some(2.5));
    }

    #[test]
    fn test_update_if_better_copies_position() {
        let mut p = Point::default();
        let mut x = DVector::from_vec(vec![1.0, 2.0]);
        p.update_if_better(&x, 0.0);
        x[0] = 100.0;
        assert_eq!(p.x[0], 1.0);
    }

    #[test]
    fn test_evaluate_and_set_position() {
        let f = |x: &DVector<Float>| x.iter().map(|v| v * v).sum::<Float>();
        let mut p: Point = vec![1.0, 2.0].into();
        assert!(!p.is_set());
        let fx = p.evaluate(&f, &mut ()).unwrap();
        assert_eq!(fx, 5.0);
        assert_eq!(p.fx_checked(), 5.0);
        p.set_position(DVector::from_vec(vec![0.0, 0.0]));
        assert!(!p.is_set());
        assert_eq!(p.dimension(), 2);
    }
}
