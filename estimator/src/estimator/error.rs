/// Estimation errors
#[derive(Debug, PartialEq)]
pub enum EstimateError {
    /// history ring must keep at least one slot
    ZeroRingSize,
    /// normalization divisor must be positive
    ZeroNormalization,
    /// record interval must be positive
    ZeroRecordInterval,
    /// velocity source has no sample for the queried pair
    SampleOutOfRange { step: usize, particle: usize },
    ParticleOutOfRange { particle: usize },
    /// temperature was asked before the first sample was recorded
    NoRecordedSteps,
}
