use na::Vector2;
use veltherm_core::VelocityTrace;

/// Source of velocity samples for the estimator. It must be defined for
/// every `(step, particle)` pair the estimator queries; a missing pair is
/// reported by the estimator as
/// [SampleOutOfRange](crate::estimator::EstimateError::SampleOutOfRange).
pub trait VelocitySource: Sync {
    /// Number of particles per time step.
    fn particle_count(&self) -> usize;

    /// Velocity of `particle` on time step `step`, [None] out of range.
    fn velocity(&self, step: usize, particle: usize) -> Option<Vector2<f64>>;
}

impl VelocitySource for VelocityTrace {
    fn particle_count(&self) -> usize {
        VelocityTrace::particle_count(self)
    }

    fn velocity(&self, step: usize, particle: usize) -> Option<Vector2<f64>> {
        VelocityTrace::velocity(self, step, particle)
    }
}
