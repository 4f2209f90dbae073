use clap::ValueEnum;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// path to file with velocity trace data
    #[arg(short = 'f', long)]
    pub file: PathBuf,
    /// pretty print json output
    #[arg(long)]
    pub pretty_print: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum TraceKind {
    /// maxwellian gas velocities with zero net momentum per step
    Gas,
    /// same constant velocity for every particle and step
    Uniform,
    /// velocity growing linearly with the step index
    Ramp,
}

#[derive(Subcommand)]
pub enum Commands {
    /// generate velocity trace file
    Generate {
        /// kind of velocity trace
        #[arg(short = 't', long, value_enum)]
        kind: TraceKind,
        /// number of particles
        #[arg(short = 'p', long)]
        particle_count: usize,
        /// number of time steps
        #[arg(short = 's', long)]
        step_count: usize,
        /// name of recorded particle kind
        #[arg(long)]
        particle_name: String,
        /// mass of one particle
        #[arg(long)]
        particle_mass: f64,
        /// temperature in Kelvin, gas kind only
        #[arg(short = 'T', long)]
        temperature: Option<f64>,
        /// velocity components, uniform and ramp kinds
        #[arg(short = 'v', long, num_args = 2, value_delimiter = ' ')]
        velocity: Option<Vec<f64>>,
    },
    /// run rolling temperature estimation on a trace
    Estimate {
        /// file for csv output
        #[arg(short = 'o', long)]
        out_file: PathBuf,
        /// number of history slots in the moment ring
        #[arg(short = 'n', long)]
        ring_size: usize,
        /// divisor applied to every stored moment
        #[arg(long, default_value_t = 1)]
        normalization: usize,
        /// record a sample every so many time steps
        #[arg(long, default_value_t = 1)]
        record_interval: usize,
        /// mass override, defaults to the mass stored in the trace
        #[arg(short = 'm', long)]
        mass: Option<f64>,
        /// json file with estimator parameters, overrides the flags above
        #[arg(long)]
        parameters_file: Option<PathBuf>,
    },
    /// print summary of a trace file
    Info,
}
