use na::Vector2;
use serde::{Deserialize, Serialize};

/// One velocity measurement taken from a trace
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocitySample {
    /// time step the sample was taken on
    pub step: usize,
    /// index of sampled particle
    pub particle: usize,
    /// velocity of particle
    pub velocity: Vector2<f64>,
}

/// Structure that keeps recorded velocities of every particle on every time step
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VelocityTrace {
    /// name of recorded particle kind
    pub particle_name: String,
    /// mass of one particle
    pub mass: f64,
    /// velocities\[step\]\[particle\]
    pub velocities: Vec<Vec<Vector2<f64>>>,
}

impl VelocityTrace {
    /// Number of particles per time step.
    pub fn particle_count(&self) -> usize {
        self.velocities.first().map_or(0, |row| row.len())
    }

    /// Number of recorded time steps.
    pub fn step_count(&self) -> usize {
        self.velocities.len()
    }

    /// Get velocity of particle on given time step.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nalgebra::Vector2;
    /// # use veltherm_core::VelocityTrace;
    /// let trace = VelocityTrace {
    ///     particle_name: String::from("Argon"),
    ///     mass: 66.335,
    ///     velocities: vec![vec![Vector2::new(1.0, 0.0)]],
    /// };
    /// assert_eq!(trace.velocity(0, 0), Some(Vector2::new(1.0, 0.0)));
    /// assert_eq!(trace.velocity(1, 0), None);
    /// ```
    pub fn velocity(&self, step: usize, particle: usize) -> Option<Vector2<f64>> {
        self.velocities.get(step)?.get(particle).copied()
    }

    /// Checks that every time step keeps the same number of particles.
    pub fn is_rectangular(&self) -> bool {
        let particle_count = self.particle_count();
        self.velocities.iter().all(|row| row.len() == particle_count)
    }

    /// Iterate over all recorded samples, time step by time step.
    pub fn iter_samples(&self) -> impl Iterator<Item = VelocitySample> + '_ {
        self.velocities.iter().enumerate().flat_map(|(step, row)| {
            row.iter()
                .enumerate()
                .map(move |(particle, velocity)| VelocitySample {
                    step,
                    particle,
                    velocity: *velocity,
                })
        })
    }

    /// Get minimal and maximum speed over the whole trace.
    /// Returns [None] for an empty trace.
    pub fn min_max_speed(&self) -> Option<(f64, f64)> {
        use itertools::{Itertools, MinMaxResult};
        let speeds = self.iter_samples().map(|sample| sample.velocity.norm());
        match speeds.minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(speed) => Some((speed, speed)),
            MinMaxResult::MinMax(min, max) => Some((min, max)),
        }
    }
}
