use na::Vector2;
use rand_distr::{Distribution, Normal};
use veltherm_core::{VelocityTrace, K_B};

/// Maxwellian velocity trace for a gas of `particle_count` particles at the
/// given temperature (Kelvin). Net momentum of every time step is removed so
/// the gas does not drift.
pub fn generate_gas_trace(
    particle_count: usize,
    step_count: usize,
    temperature: f64,
    particle_name: &str,
    mass: f64,
) -> VelocityTrace {
    let mut rng = rand::thread_rng();
    let sigma = f64::sqrt(K_B * temperature / mass);
    let normal_distribution =
        Normal::new(0.0f64, sigma).expect("Can't create normal distribution");
    let mut velocities = Vec::with_capacity(step_count);
    for _ in 0..step_count {
        let mut step_velocities: Vec<Vector2<f64>> = (0..particle_count)
            .map(|_| {
                Vector2::new(
                    normal_distribution.sample(&mut rng),
                    normal_distribution.sample(&mut rng),
                )
            })
            .collect();
        if particle_count > 0 {
            let mean = step_velocities
                .iter()
                .fold(Vector2::zeros(), |acc, v| acc + v)
                / particle_count as f64;
            step_velocities.iter_mut().for_each(|velocity| {
                *velocity -= mean;
            });
        }
        velocities.push(step_velocities);
    }
    VelocityTrace {
        particle_name: String::from(particle_name),
        mass,
        velocities,
    }
}

/// Trace where every particle keeps the same velocity on every time step.
pub fn generate_uniform_trace(
    particle_count: usize,
    step_count: usize,
    velocity: Vector2<f64>,
    particle_name: &str,
    mass: f64,
) -> VelocityTrace {
    let velocities = (0..step_count)
        .map(|_| vec![velocity; particle_count])
        .collect();
    VelocityTrace {
        particle_name: String::from(particle_name),
        mass,
        velocities,
    }
}

/// Trace where velocity grows linearly with the step index,
/// `v(i) = base * i` for every particle.
pub fn generate_ramp_trace(
    particle_count: usize,
    step_count: usize,
    base: Vector2<f64>,
    particle_name: &str,
    mass: f64,
) -> VelocityTrace {
    let velocities = (0..step_count)
        .map(|step| vec![base * step as f64; particle_count])
        .collect();
    VelocityTrace {
        particle_name: String::from(particle_name),
        mass,
        velocities,
    }
}
