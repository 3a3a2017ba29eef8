//! Domino Run CLI
//!
//! Plans a domino trail from a recorded drag path without opening a
//! window: the same spacing and facing rules as the 3D app, printed as
//! a table or emitted as JSON.
//!
//! The path file is a JSON array of `[x, y, z]` samples, e.g.
//! `[[0.0, 0.0, 0.0], [0.0, 0.0, 0.05], [0.0, 0.0, 0.11]]`.

use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Minimum planar (x,z) distance between two consecutive dominoes.
const MIN_DOMINO_SPACING: f32 = 0.03;

/// Vertical offset applied to each placement so the body spawns on top
/// of the surface.
const DOMINO_LIFT: f32 = 0.03;

/// Color names of the fixed domino palette.
const PALETTE: [&str; 8] = [
    "red", "blue", "green", "yellow", "orange", "cyan", "magenta", "purple",
];

/// Domino Run - plan a trail from a recorded drag path
#[derive(Parser)]
#[command(name = "dominoplan")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path file: JSON array of [x, y, z] drag samples
    #[arg(short, long, default_value = "path.json")]
    path: PathBuf,

    /// Minimum spacing between dominoes
    #[arg(short, long, default_value_t = MIN_DOMINO_SPACING)]
    spacing: f32,

    /// Print the plan as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan domino placements along the recorded path (default)
    Plan,
    /// Print path statistics without planning
    Stats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlannedDomino {
    position: [f32; 3],
    /// Rotation around the vertical axis, radians.
    yaw: f32,
    color: String,
}

fn main() {
    let cli = Cli::parse();

    let samples = match load_path(&cli.path) {
        Ok(samples) => samples,
        Err(err) => {
            eprintln!("{} {err}", "Error:".red().bold());
            std::process::exit(1);
        }
    };

    match cli.command.unwrap_or(Commands::Plan) {
        Commands::Plan => {
            let mut rng = rand::thread_rng();
            let plan = plan_trail(&samples, cli.spacing, &mut rng);
            if cli.json {
                match serde_json::to_string_pretty(&plan) {
                    Ok(text) => println!("{text}"),
                    Err(err) => {
                        eprintln!("{} {err}", "Error:".red().bold());
                        std::process::exit(1);
                    }
                }
            } else {
                print_plan(&samples, &plan, cli.spacing);
            }
        }
        Commands::Stats => print_stats(&samples),
    }
}

fn load_path(path: &PathBuf) -> Result<Vec<[f32; 3]>, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("could not read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid path file: {e}"))
}

/// Run the placement rule over the whole path. The first sample only
/// anchors the path; each later sample places a domino when it has
/// moved at least `spacing` from the previous anchor in the (x,z)
/// plane, facing the direction of travel.
fn plan_trail(samples: &[[f32; 3]], spacing: f32, rng: &mut impl Rng) -> Vec<PlannedDomino> {
    let mut anchor: Option<[f32; 3]> = None;
    let mut plan = Vec::new();

    for &sample in samples {
        let Some(prev) = anchor else {
            anchor = Some(sample);
            continue;
        };

        let dx = sample[0] - prev[0];
        let dz = sample[2] - prev[2];
        if dx.hypot(dz) < spacing {
            continue;
        }

        plan.push(PlannedDomino {
            position: [sample[0], sample[1] + DOMINO_LIFT, sample[2]],
            yaw: -dz.atan2(dx),
            color: PALETTE[rng.gen_range(0..PALETTE.len())].to_string(),
        });
        anchor = Some(sample);
    }

    plan
}

/// Total planar length of the path.
fn path_length(samples: &[[f32; 3]]) -> f32 {
    samples
        .windows(2)
        .map(|w| (w[1][0] - w[0][0]).hypot(w[1][2] - w[0][2]))
        .sum()
}

fn print_plan(samples: &[[f32; 3]], plan: &[PlannedDomino], spacing: f32) {
    println!(
        "{}",
        format!(
            "{} dominoes planned from {} samples (spacing {:.3})",
            plan.len(),
            samples.len(),
            spacing
        )
        .green()
        .bold()
    );

    for (i, domino) in plan.iter().enumerate() {
        println!(
            "  #{:<3} at ({:+.3}, {:+.3}, {:+.3})  yaw {:>7.1}°  {}",
            i + 1,
            domino.position[0],
            domino.position[1],
            domino.position[2],
            domino.yaw.to_degrees(),
            domino.color.cyan()
        );
    }

    if plan.is_empty() {
        println!(
            "  {}",
            "path too short: nothing further than the spacing threshold from its start".yellow()
        );
    }
}

fn print_stats(samples: &[[f32; 3]]) {
    println!("{}", "Path statistics".green().bold());
    println!("  samples:       {}", samples.len());
    println!("  planar length: {:.3}", path_length(samples));
    if let (Some(first), Some(last)) = (samples.first(), samples.last()) {
        println!(
            "  start:         ({:+.3}, {:+.3}, {:+.3})",
            first[0], first[1], first[2]
        );
        println!(
            "  end:           ({:+.3}, {:+.3}, {:+.3})",
            last[0], last[1], last[2]
        );
    }
}
