use std::error::Error;

use fastrand::Rng;
use swarmin::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    // minimize x^5 - 3x^4 + 5 over [0, 4]
    let quintic = |x: &DVector<Float>| x[0].powi(5) - 3.0 * x[0].powi(4) + 5.0;

    // Create a particle swarm optimizer with a seeded random number generator
    let config = PSOConfig::new([5.0]).setup(|c| {
        c.with_bounds([(0.0, 4.0)])
            .with_n_particles(15)
            .with_max_steps(50)
            .with_parameter_names(["x".to_string()])
    });
    let mut pso = PSO::new(config, Rng::with_seed(0))?;

    // Create a tracker to record swarm history
    let tracker = TrackingSwarmObserver::build();
    pso.add_observer(tracker.clone());

    let summary = pso.run(&quintic, &mut ())?;
    println!("{}", summary);
    println!("{:?}", summary.result());
    println!(
        "recorded {} steps of {} particles",
        tracker.read().history.len(),
        summary.n_particles
    );

    // minimize -(5 + 3x - 4y - x^2 + xy - y^2) without bounds
    let quadratic = |x: &DVector<Float>| {
        -(5.0 + 3.0 * x[0] - 4.0 * x[1] - x[0].powi(2) + x[0] * x[1] - x[1].powi(2))
    };
    let mut pso = PSO::from_parts(&[5.0, 5.0], None, 15, 50, Rng::with_seed(0))?;
    let summary = pso.run(&quadratic, &mut ())?;
    println!("{}", summary);
    println!("{:?}", summary.result());
    Ok(())
}
