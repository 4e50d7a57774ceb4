use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use nalgebra::Vector3;

use orientation_math::operators::OrientationOperator;
use orientation_math::orientation::{euler_to_quat, Euler};
use orientation_math::symmetries::CrystalStructure;
use orientation_math::Result;

#[derive(Parser)]
#[command(name = "orientation-math")]
#[command(about = "Crystal-symmetry orientation math queries for texture analysis")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Minimal misorientation between two orientations given as Bunge Euler
    /// angles in degrees
    Misorientation {
        /// Crystal structure (e.g. cubic, hexagonal, tetragonal-low)
        #[arg(short, long)]
        structure: CrystalStructure,

        /// First orientation: phi1 Phi phi2 in degrees
        #[arg(long, num_args = 3, allow_hyphen_values = true)]
        euler1: Vec<f64>,

        /// Second orientation: phi1 Phi phi2 in degrees
        #[arg(long, num_args = 3, allow_hyphen_values = true)]
        euler2: Vec<f64>,
    },
    /// Fold a Rodrigues vector into the fundamental zone
    Fold {
        #[arg(short, long)]
        structure: CrystalStructure,

        /// Rodrigues vector components r1 r2 r3
        #[arg(short, long, num_args = 3, allow_hyphen_values = true)]
        rodrigues: Vec<f64>,
    },
    /// ODF histogram bin index of a Rodrigues vector
    Bin {
        #[arg(short, long)]
        structure: CrystalStructure,

        /// Rodrigues vector components r1 r2 r3
        #[arg(short, long, num_args = 3, allow_hyphen_values = true)]
        rodrigues: Vec<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Misorientation {
            structure,
            euler1,
            euler2,
        } => misorientation(structure, &euler1, &euler2),
        Commands::Fold {
            structure,
            rodrigues,
        } => fold(structure, &rodrigues),
        Commands::Bin {
            structure,
            rodrigues,
        } => bin(structure, &rodrigues),
    }
}

fn euler_from_degrees(values: &[f64]) -> Euler {
    Euler::new(
        values[0].to_radians(),
        values[1].to_radians(),
        values[2].to_radians(),
    )
}

fn misorientation(structure: CrystalStructure, euler1: &[f64], euler2: &[f64]) -> Result<()> {
    let op = OrientationOperator::new(structure)?;
    info!(
        "Computing misorientation for {} ({} symmetry operators)",
        structure,
        op.symmetry_op_count()
    );
    let q1 = euler_to_quat(&euler_from_degrees(euler1));
    let q2 = euler_to_quat(&euler_from_degrees(euler2));
    let miso = op.misorientation(&q1, &q2);
    println!(
        "angle: {:.4} deg  axis: [{:.4}, {:.4}, {:.4}]",
        miso.angle.to_degrees(),
        miso.axis.x,
        miso.axis.y,
        miso.axis.z
    );
    Ok(())
}

fn fold(structure: CrystalStructure, rodrigues: &[f64]) -> Result<()> {
    let op = OrientationOperator::new(structure)?;
    let r = Vector3::new(rodrigues[0], rodrigues[1], rodrigues[2]);
    let folded = op.fundamental_zone_rodrigues(&r);
    println!("[{:.6}, {:.6}, {:.6}]", folded.x, folded.y, folded.z);
    Ok(())
}

fn bin(structure: CrystalStructure, rodrigues: &[f64]) -> Result<()> {
    let op = OrientationOperator::new(structure)?;
    let r = Vector3::new(rodrigues[0], rodrigues[1], rodrigues[2]);
    info!("Histogram has {} bins", op.bin_count());
    println!("{}", op.odf_bin(&r));
    Ok(())
}
