use crate::estimator::{EstimateError, EstimatorParameters, VelocitySource};
use crate::register::MomentRegister;
use rayon::prelude::*;

/// Rolling per-particle temperature estimator.
///
/// Keeps one [MomentRegister] per particle. Every recorded time step writes
/// the normalized velocity moments of all particles, and the temperature of
/// particle `k` over the current window is
/// `T_k = (m / 2) * (delta2_Vx + delta2_Vy)`
/// with `delta2` the windowed variance of the velocity component.
pub struct TemperatureEstimator {
    parameters: EstimatorParameters,
    registers: Vec<MomentRegister>,
    steps_consumed: usize,
    steps_recorded: usize,
}

impl TemperatureEstimator {
    /// Create an estimator for `particle_count` particles.
    ///
    /// Fails fast on zero `ring_size`, `normalization` or `record_interval`.
    pub fn new(
        parameters: EstimatorParameters,
        particle_count: usize,
    ) -> Result<Self, EstimateError> {
        parameters.validate()?;
        if parameters.ring_size <= 100 {
            log::warn!(
                "history ring of {} slots may give a noisy variance estimate",
                parameters.ring_size
            );
        }
        let registers = (0..particle_count)
            .map(|_| MomentRegister::new(parameters.ring_size))
            .collect();
        Ok(Self {
            parameters,
            registers,
            steps_consumed: 0,
            steps_recorded: 0,
        })
    }

    pub fn parameters(&self) -> &EstimatorParameters {
        &self.parameters
    }

    pub fn particle_count(&self) -> usize {
        self.registers.len()
    }

    pub fn recorded_steps(&self) -> usize {
        self.steps_recorded
    }

    /// Consume the next time step from `source`. Every `record_interval`-th
    /// step stores the velocity moments of every particle, the steps between
    /// are skipped. Returns whether the step was recorded.
    pub fn record_step(&mut self, source: &impl VelocitySource) -> Result<bool, EstimateError> {
        let step = self.steps_consumed;
        if step % self.parameters.record_interval != 0 {
            self.steps_consumed += 1;
            return Ok(false);
        }
        let normalization = self.parameters.normalization as f64;
        // registers are disjoint per particle
        self.registers
            .par_iter_mut()
            .enumerate()
            .try_for_each(|(particle, register)| {
                let velocity = source
                    .velocity(step, particle)
                    .ok_or(EstimateError::SampleOutOfRange { step, particle })?;
                register.record(velocity, normalization);
                Ok(())
            })?;
        self.steps_consumed += 1;
        self.steps_recorded += 1;
        Ok(true)
    }

    /// Current temperature of every particle over the recorded window.
    pub fn temperatures(&self) -> Result<Vec<f64>, EstimateError> {
        if self.steps_recorded == 0 {
            return Err(EstimateError::NoRecordedSteps);
        }
        let mass = self.parameters.mass;
        Ok(self
            .registers
            .par_iter()
            .map(|register| {
                let delta2 = register.velocity_variance();
                (mass / 2.0) * (delta2.x + delta2.y)
            })
            .collect())
    }

    /// Current temperature of one particle.
    pub fn temperature(&self, particle: usize) -> Result<f64, EstimateError> {
        if self.steps_recorded == 0 {
            return Err(EstimateError::NoRecordedSteps);
        }
        let register = self
            .registers
            .get(particle)
            .ok_or(EstimateError::ParticleOutOfRange { particle })?;
        let delta2 = register.velocity_variance();
        Ok((self.parameters.mass / 2.0) * (delta2.x + delta2.y))
    }
}

/// Run the estimator over `step_count` time steps of `source` and collect
/// the temperatures of every particle after every consumed step.
pub fn estimate_rolling(
    source: &impl VelocitySource,
    parameters: &EstimatorParameters,
    step_count: usize,
) -> Result<Vec<Vec<f64>>, EstimateError> {
    let mut estimator = TemperatureEstimator::new(parameters.clone(), source.particle_count())?;
    let mut series = Vec::with_capacity(step_count);
    for _ in 0..step_count {
        estimator.record_step(source)?;
        series.push(estimator.temperatures()?);
    }
    Ok(series)
}
