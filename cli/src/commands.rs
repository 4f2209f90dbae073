use crate::args::TraceKind;
use indicatif::ProgressBar;
use nalgebra::Vector2;
use std::path::PathBuf;
use veltherm_core::{load_trace_from_file, save_trace_to_file};
use veltherm_estimator::estimator::{
    load_parameters_from_file, EstimatorParameters, TemperatureEstimator,
};
use veltherm_estimator::generator::{
    generate_gas_trace, generate_ramp_trace, generate_uniform_trace,
};

fn parse_velocity(velocity: &Option<Vec<f64>>) -> Vector2<f64> {
    let velocity = velocity.as_ref().expect("This trace kind needs velocity");
    Vector2::new(velocity[0], velocity[1])
}

pub fn generate(
    file: &PathBuf,
    kind: &TraceKind,
    particle_count: usize,
    step_count: usize,
    particle_name: &String,
    particle_mass: &f64,
    temperature: &Option<f64>,
    velocity: &Option<Vec<f64>>,
    pretty_print: bool,
) {
    let trace = match kind {
        TraceKind::Gas => {
            let temperature = temperature.expect("Gas trace needs temperature");
            generate_gas_trace(
                particle_count,
                step_count,
                temperature,
                particle_name.as_str(),
                particle_mass.clone(),
            )
        }
        TraceKind::Uniform => generate_uniform_trace(
            particle_count,
            step_count,
            parse_velocity(velocity),
            particle_name.as_str(),
            particle_mass.clone(),
        ),
        TraceKind::Ramp => generate_ramp_trace(
            particle_count,
            step_count,
            parse_velocity(velocity),
            particle_name.as_str(),
            particle_mass.clone(),
        ),
    };
    save_trace_to_file(&trace, file, pretty_print).expect("Can't save trace");
    log::info!(
        "Trace with {} particles over {} steps saved to {}",
        particle_count,
        step_count,
        file.to_string_lossy()
    );
}

pub fn estimate(
    in_file: &PathBuf,
    out_file: &PathBuf,
    ring_size: usize,
    normalization: usize,
    record_interval: usize,
    mass: &Option<f64>,
    parameters_file: &Option<PathBuf>,
) {
    let trace = load_trace_from_file(in_file).expect("Can't load trace");
    let parameters = if let Some(parameters_file) = parameters_file {
        load_parameters_from_file(parameters_file)
    } else {
        let mut parameters =
            EstimatorParameters::new(ring_size, normalization, mass.unwrap_or(trace.mass));
        parameters.record_interval = record_interval;
        parameters
    };
    let step_count = trace.step_count();
    let mut estimator = TemperatureEstimator::new(parameters, trace.particle_count())
        .expect("Can't create estimator");
    let mut writer = csv::Writer::from_path(out_file).expect("Can't create output file");
    writer
        .write_record(["step", "particle", "temperature"])
        .expect("Can't write csv header");
    let pb = ProgressBar::new(step_count as u64);
    for step in 0..step_count {
        estimator.record_step(&trace).expect("Can't record step");
        let temperatures = estimator.temperatures().expect("Can't get temperatures");
        for (particle, temperature) in temperatures.iter().enumerate() {
            writer
                .write_record(&[
                    step.to_string(),
                    particle.to_string(),
                    temperature.to_string(),
                ])
                .expect("Can't write csv record");
        }
        pb.inc(1);
    }
    writer.flush().expect("Can't write output file");
    pb.finish_with_message(format!(
        "Calculated. Temperatures saved to {}",
        out_file.to_string_lossy()
    ));
}

pub fn info(file: &PathBuf) {
    let trace = load_trace_from_file(file).expect("Can't load trace");
    println!("Particle: {} (mass {})", trace.particle_name, trace.mass);
    println!("Particle count: {}", trace.particle_count());
    println!("Step count: {}", trace.step_count());
    if let Some((min, max)) = trace.min_max_speed() {
        println!("Speed range: {:.8} .. {:.8}", min, max);
    }
}
