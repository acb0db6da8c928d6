/// Command-line wheel generator: validates arguments, builds the mesh, writes OBJ
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use wheel_core::wheel::{DEFAULT_RADIUS, DEFAULT_SIDES, DEFAULT_WIDTH};
use wheel_core::{generate_wheel, write_obj, GenerateError, WheelParams};

pub const DEFAULT_OUTPUT: &str = "wheel.obj";

/// Generate a wheel mesh and write it as an OBJ file
#[derive(Debug, Parser)]
#[command(name = "wheel-gen", version)]
#[command(allow_negative_numbers = true)]
pub struct Args {
    /// Number of sides, between 3 and 360
    #[arg(default_value_t = i64::from(DEFAULT_SIDES))]
    pub sides: i64,

    /// Wheel radius, must be positive
    #[arg(default_value_t = DEFAULT_RADIUS)]
    pub radius: f32,

    /// Wheel width along Z, must be positive
    #[arg(default_value_t = DEFAULT_WIDTH)]
    pub width: f32,

    /// Where to write the OBJ file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl Args {
    pub fn params(&self) -> Result<WheelParams, GenerateError> {
        let sides =
            u32::try_from(self.sides).map_err(|_| GenerateError::InvalidSides(self.sides))?;
        WheelParams::new(sides, self.radius, self.width)
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub output: PathBuf,
    pub vertices: usize,
    pub faces: usize,
}

/// Validate, generate and write. Nothing touches the filesystem until the
/// parameters are known to be valid.
pub fn run(args: &Args) -> anyhow::Result<Summary> {
    let params = args.params()?;
    info!(
        "generating wheel: {} sides, radius {}, width {}",
        params.sides(),
        params.radius(),
        params.width()
    );

    let mesh = generate_wheel(&params);

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    write_obj(&mesh, &mut writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(Summary {
        output: args.output.clone(),
        vertices: mesh.vertices().len(),
        faces: mesh.faces().len(),
    })
}
