/// Wheel Generator - writes a procedurally generated wheel as OBJ
///
/// Usage: wheel-gen [SIDES] [RADIUS] [WIDTH] [-o OUTPUT]
///   - SIDES: 3-360 (default 8)
///   - RADIUS: > 0 (default 1)
///   - WIDTH: > 0 (default 0.5)
///   - OUTPUT: default wheel.obj

use std::process::ExitCode;

use clap::Parser;
use wheel_gen::Args;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match wheel_gen::run(&args) {
        Ok(summary) => {
            println!(
                "Generated {} ({} vertices, {} faces)",
                summary.output.display(),
                summary.vertices,
                summary.faces
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
