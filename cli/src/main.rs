use crate::args::*;
use crate::commands::{estimate, generate, info};
use clap::Parser;

mod args;
mod commands;


fn main() {
    env_logger::init();
    let args = Args::parse();
    match &args.command {
        Commands::Generate {
            kind,
            particle_count,
            step_count,
            particle_name,
            particle_mass,
            temperature,
            velocity,
        } => {
            generate(
                &args.file,
                kind,
                *particle_count,
                *step_count,
                particle_name,
                particle_mass,
                temperature,
                velocity,
                args.pretty_print,
            );
        }
        Commands::Estimate {
            out_file,
            ring_size,
            normalization,
            record_interval,
            mass,
            parameters_file,
        } => {
            estimate(
                &args.file,
                out_file,
                *ring_size,
                *normalization,
                *record_interval,
                mass,
                parameters_file,
            );
        }
        Commands::Info => {
            info(&args.file);
        }
    }
}
