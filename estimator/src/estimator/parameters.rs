use crate::estimator::EstimateError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::PathBuf;

/// Settings of the temperature estimator
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EstimatorParameters {
    /// number of history slots in the moment ring
    pub ring_size: usize,
    /// divisor applied to every stored moment
    pub normalization: usize,
    /// record a sample every so many time steps
    pub record_interval: usize,
    /// mass of one particle
    pub mass: f64,
}

impl EstimatorParameters {
    /// Parameters that record every time step.
    pub fn new(ring_size: usize, normalization: usize, mass: f64) -> Self {
        Self {
            ring_size,
            normalization,
            record_interval: 1,
            mass,
        }
    }

    pub fn validate(&self) -> Result<(), EstimateError> {
        if self.ring_size == 0 {
            return Err(EstimateError::ZeroRingSize);
        }
        if self.normalization == 0 {
            return Err(EstimateError::ZeroNormalization);
        }
        if self.record_interval == 0 {
            return Err(EstimateError::ZeroRecordInterval);
        }
        Ok(())
    }
}

pub fn save_parameters_to_file(parameters: &EstimatorParameters, path: &PathBuf) {
    let file = File::create(path).expect("Can't create file");
    serde_json::ser::to_writer_pretty(file, parameters).expect("Can't save estimator parameters");
}

pub fn load_parameters_from_file(path: &PathBuf) -> EstimatorParameters {
    let file = File::open(path).expect("Can't open file");
    serde_json::de::from_reader(&file).expect("Can't load data from file")
}
