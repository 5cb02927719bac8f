//! Total monthly SIP across a grid of return and inflation assumptions
//!
//! Usage: cargo run --bin sensitivity -- --goals goals.csv --returns 8,10,12 --inflations 5,6,7

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use sip_planner::format::format_rupees;
use sip_planner::ScenarioRunner;

#[derive(Debug, Parser)]
#[command(about = "Sweep return and inflation assumptions for a set of goals")]
struct Args {
    /// CSV with GoalId,PresentValue,CurrentAge,TargetAge,ExistingSavings
    #[arg(long)]
    goals: PathBuf,

    /// Annual returns in percent
    #[arg(long, value_delimiter = ',', default_values_t = vec![8.0, 10.0, 12.0, 14.0])]
    returns: Vec<f64>,

    /// Annual inflation rates in percent
    #[arg(long, value_delimiter = ',', default_values_t = vec![4.0, 6.0, 8.0])]
    inflations: Vec<f64>,

    /// Output CSV path
    #[arg(long, default_value = "sensitivity.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let runner = ScenarioRunner::from_csv_path(&args.goals)
        .with_context(|| format!("reading goals from {}", args.goals.display()))?;
    println!("Loaded {} goals in {:?}", runner.goals().len(), start.elapsed());

    let points = runner.run_sweep(&args.returns, &args.inflations)?;

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("unable to create {}", args.output.display()))?;
    for point in &points {
        writer.serialize(point)?;
    }
    writer.flush()?;

    println!("{:>8} {:>10} {:>16}", "Return", "Inflation", "SIP/month");
    for point in &points {
        println!(
            "{:>7.2}% {:>9.2}% {:>16}",
            point.annual_return_percent,
            point.annual_inflation_percent,
            format_rupees(point.total_monthly_contribution),
        );
    }

    println!("\n{} scenarios written to {} in {:?}", points.len(), args.output.display(), start.elapsed());
    Ok(())
}
