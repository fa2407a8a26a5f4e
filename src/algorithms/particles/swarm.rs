use crate::{
    core::{
        utils::{generate_random_vector, SampleFloat},
        Bounds, Point,
    },
    traits::CostFunction,
    DVector, Float,
};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The limits of the uniform distribution used to draw each particle's initial velocity. The
/// range is half-open, `[-1, 1)`: the upper limit itself is never drawn.
pub const INITIAL_VELOCITY_LIMITS: (Float, Float) = (-1.0, 1.0);

/// A particle with a position, velocity, and best known position
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct SwarmParticle {
    /// The position of the particle along with its latest evaluation (`fx` is reset to `None`
    /// whenever the particle moves)
    pub position: Point,
    /// The velocity of the particle
    pub velocity: DVector<Float>,
    /// The best position visited by the particle (as measured by the minimum value of `fx`).
    /// This is unset until the first call to [`SwarmParticle::evaluate`].
    pub best: Point,
}
impl SwarmParticle {
    /// Create a new particle at `x0` with a velocity drawn uniformly from
    /// [`INITIAL_VELOCITY_LIMITS`] in every dimension.
    pub fn new(x0: &DVector<Float>, rng: &mut Rng) -> Self {
        let (lb, ub) = INITIAL_VELOCITY_LIMITS;
        Self {
            position: x0.clone().into(),
            velocity: generate_random_vector(x0.len(), lb, ub, rng),
            best: Point::default(),
        }
    }
    /// The number of free parameters of the particle.
    pub fn dimension(&self) -> usize {
        self.position.dimension()
    }
    /// Compare the best position to another particle
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.best.total_cmp(&other.best)
    }
    /// Evaluate the cost function at the particle's current position, replacing the personal best
    /// with a copy of the position if the result is strictly lower (or no best exists yet).
    ///
    /// Returns the value and the evaluated position. Bounds are not checked here.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn evaluate<U, E, F>(
        &mut self,
        func: &F,
        user_data: &mut U,
    ) -> Result<(Float, &DVector<Float>), E>
    where
        F: CostFunction<U, E> + ?Sized,
    {
        let fx = self.position.evaluate(func, user_data)?;
        self.best.update_if_better(&self.position.x, fx);
        Ok((fx, &self.position.x))
    }
    /// Update the velocity of the particle:
    ///
    /// ```math
    /// v_i \leftarrow \omega v_i + c_1 r_{1,i}(p_i - x_i) + c_2 r_{2,i}(g_i - x_i)
    /// ```
    /// where $`p`$ is the particle's best position, $`g`$ is `gbest`, and $`r_{1,i}`$, $`r_{2,i}`$
    /// are drawn uniformly from $`[0, 1)`$ (in that order) for each dimension $`i`$.
    ///
    /// # Panics
    ///
    /// This method will panic if the particle has never been evaluated (its best position is
    /// unset) or if `gbest` does not have the particle's dimension.
    pub fn update_velocity(
        &mut self,
        gbest: &DVector<Float>,
        omega: Float,
        c1: Float,
        c2: Float,
        rng: &mut Rng,
    ) {
        assert!(
            self.best.is_set(),
            "particle velocity updated before its first evaluation"
        );
        assert_eq!(gbest.len(), self.dimension());
        let x = &self.position.x;
        let p = &self.best.x;
        for i in 0..self.velocity.len() {
            let r1 = rng.float();
            let r2 = rng.float();
            self.velocity[i] =
                omega * self.velocity[i] + c1 * r1 * (p[i] - x[i]) + c2 * r2 * (gbest[i] - x[i]);
        }
    }
    /// Move the particle by its velocity and hard-clamp the result into `bounds` (if any).
    ///
    /// The velocity is left unchanged even when a coordinate is clamped.
    pub fn update_position(&mut self, bounds: Option<&Bounds>) {
        let mut new_position = &self.position.x + &self.velocity;
        if let Some(bounds) = bounds {
            bounds.clamp(&mut new_position);
        }
        self.position.set_position(new_position);
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use approx::assert_relative_eq;

    use super::*;
    use crate::core::Bound;

    fn sphere(x: &DVector<Float>) -> Float {
        x.iter().map(|x_i| x_i.powi(2)).sum()
    }

    #[test]
    fn test_new_particle() {
        let mut rng = Rng::with_seed(0);
        let x0 = DVector::from_vec(vec![5.0, -3.0, 0.5]);
        let particle = SwarmParticle::new(&x0, &mut rng);
        assert_eq!(particle.position.x, x0);
        assert_eq!(particle.velocity.len(), 3);
        assert!(particle.velocity.iter().all(|v| (-1.0..1.0).contains(v)));
        assert!(!particle.best.is_set());
        assert!(!particle.position.is_set());
    }

    #[test]
    fn test_evaluate_tracks_personal_best() -> Result<(), Infallible> {
        let mut rng = Rng::with_seed(0);
        let mut particle = SwarmParticle::new(&DVector::from_vec(vec![2.0]), &mut rng);

        let (fx, x) = particle.evaluate(&sphere, &mut ())?;
        assert_eq!(fx, 4.0);
        assert_eq!(x.as_slice(), &[2.0]);
        assert_eq!(particle.best.fx, Some(4.0));

        particle.position.set_position(DVector::from_vec(vec![3.0]));
        let (fx, _) = particle.evaluate(&sphere, &mut ())?;
        assert_eq!(fx, 9.0);
        assert_eq!(particle.best.fx, Some(4.0));
        assert_eq!(particle.best.x.as_slice(), &[2.0]);

        particle.position.set_position(DVector::from_vec(vec![1.0]));
        particle.evaluate(&sphere, &mut ())?;
        assert_eq!(particle.best.fx, Some(1.0));
        assert_eq!(particle.best.x.as_slice(), &[1.0]);
        Ok(())
    }

    #[test]
    fn test_personal_best_is_not_aliased() -> Result<(), Infallible> {
        let mut rng = Rng::with_seed(3);
        let mut particle = SwarmParticle::new(&DVector::from_vec(vec![1.0, 1.0]), &mut rng);
        particle.evaluate(&sphere, &mut ())?;
        particle.velocity = DVector::from_vec(vec![10.0, 10.0]);
        particle.update_position(None);
        assert_eq!(particle.best.x.as_slice(), &[1.0, 1.0]);
        assert_eq!(particle.position.x.as_slice(), &[11.0, 11.0]);
        Ok(())
    }

    #[test]
    fn test_update_velocity() -> Result<(), Infallible> {
        let mut rng = Rng::with_seed(11);
        let mut particle = SwarmParticle::new(&DVector::from_vec(vec![1.0, 2.0]), &mut rng);
        particle.evaluate(&sphere, &mut ())?;
        particle.best.x = DVector::from_vec(vec![0.5, 1.0]);
        let gbest = DVector::from_vec(vec![-1.0, 0.0]);
        let v0 = particle.velocity.clone();

        let mut expected_rng = rng.clone();
        let r = [
            expected_rng.float(),
            expected_rng.float(),
            expected_rng.float(),
            expected_rng.float(),
        ];
        particle.update_velocity(&gbest, 0.5, 1.0, 2.0, &mut rng);

        assert_relative_eq!(
            particle.velocity[0],
            0.5 * v0[0] + r[0] * (0.5 - 1.0) + 2.0 * r[1] * (-1.0 - 1.0)
        );
        assert_relative_eq!(
            particle.velocity[1],
            0.5 * v0[1] + r[2] * (1.0 - 2.0) + 2.0 * r[3] * (0.0 - 2.0)
        );
        Ok(())
    }

    #[test]
    #[should_panic(expected = "before its first evaluation")]
    fn test_update_velocity_requires_evaluation() {
        let mut rng = Rng::with_seed(0);
        let mut particle = SwarmParticle::new(&DVector::from_vec(vec![1.0]), &mut rng);
        particle.update_velocity(&DVector::from_vec(vec![0.0]), 0.5, 1.0, 2.0, &mut rng);
    }

    #[test]
    fn test_update_position_clamps_without_damping() {
        let mut rng = Rng::with_seed(0);
        let mut particle = SwarmParticle::new(&DVector::from_vec(vec![1.0, 1.0]), &mut rng);
        particle.velocity = DVector::from_vec(vec![10.0, -10.0]);
        let bounds: Bounds = vec![Bound::LowerAndUpperBound(0.0, 4.0); 2].into();

        particle.update_position(Some(&bounds));
        assert_eq!(particle.position.x.as_slice(), &[4.0, 0.0]);
        assert_eq!(particle.velocity.as_slice(), &[10.0, -10.0]);

        particle.update_position(Some(&bounds));
        assert_eq!(particle.position.x.as_slice(), &[4.0, 0.0]);
    }

    #[test]
    fn test_update_position_unbounded() {
        let mut rng = Rng::with_seed(0);
        let mut particle = SwarmParticle::new(&DVector::from_vec(vec![1.0, 1.0]), &mut rng);
        particle.velocity = DVector::from_vec(vec![1e6, -2.5]);
        particle.update_position(None);
        assert_eq!(particle.position.x.as_slice(), &[1_000_001.0, -1.5]);
        assert!(!particle.position.is_set());
    }
}
