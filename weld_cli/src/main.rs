//! # Weldsize CLI Application
//!
//! Command-line front end for lap joint weld sizing. With no arguments it
//! runs the reference joint (500 kN, 200 mm wide, 10 mm and 12 mm plates)
//! and prints one `Field: value` line per result field.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use weld_core::calculations::lap_joint::{calculate, LapJointInput, LapJointResult};
use weld_core::CalcError;

/// Size the weld of a steel lap joint in tension.
#[derive(Debug, Parser)]
#[command(name = "weld_cli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Tensile force (kN)
    #[arg(long, default_value_t = 500.0, allow_negative_numbers = true)]
    force: f64,

    /// Plate width (mm)
    #[arg(long, default_value_t = 200.0, allow_negative_numbers = true)]
    width: f64,

    /// Thickness of plate 1 (mm)
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    t1: f64,

    /// Thickness of plate 2 (mm)
    #[arg(long, default_value_t = 12.0, allow_negative_numbers = true)]
    t2: f64,

    /// Label recorded with the joint
    #[arg(long, default_value = "CLI-Demo")]
    label: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn joint_input(&self) -> LapJointInput {
        LapJointInput::new(self.force, self.width, self.t1, self.t2).with_label(self.label.clone())
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        if let Some(calc_err) = e.downcast_ref::<CalcError>() {
            if let Ok(json) = serde_json::to_string_pretty(calc_err) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the report, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let input = cli.joint_input();
    info!(
        "Sizing '{}': P = {} kN, w = {} mm, t1 = {} mm, t2 = {} mm",
        input.label, input.tensile_force_kn, input.plate_width_mm, input.thickness1_mm, input.thickness2_mm
    );

    let result = calculate(&input)?;
    println!("{}", render(&result, cli.json)?);
    Ok(())
}

fn render(result: &LapJointResult, json: bool) -> Result<String> {
    if json {
        return Ok(result.to_json_pretty()?);
    }
    let lines: Vec<String> = result
        .report_lines()
        .into_iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect();
    Ok(lines.join("\n"))
}
