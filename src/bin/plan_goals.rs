//! Plan monthly SIPs for a set of goals loaded from CSV
//!
//! Usage: cargo run --bin plan_goals -- --goals goals.csv --return-rate 12 --inflation 6

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sip_planner::format::{format_currency, format_percent, format_rupees};
use sip_planner::assumptions::DEFAULT_ASSUMPTIONS_PATH;
use sip_planner::goals::load_goals;
use sip_planner::{GoalPlanner, MarketAssumptions, SavingsTreatment};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliSavingsTreatment {
    Compound,
    FaceValue,
}

impl From<CliSavingsTreatment> for SavingsTreatment {
    fn from(value: CliSavingsTreatment) -> Self {
        match value {
            CliSavingsTreatment::Compound => SavingsTreatment::CompoundAtReturn,
            CliSavingsTreatment::FaceValue => SavingsTreatment::FaceValue,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Monthly SIP needed for each goal and in total")]
struct Args {
    /// CSV with GoalId,PresentValue,CurrentAge,TargetAge,ExistingSavings
    #[arg(long)]
    goals: PathBuf,

    /// JSON file with annual_return_percent / annual_inflation_percent
    /// (defaults to data/assumptions.json when present)
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Expected annual return in percent (overrides the assumptions file)
    #[arg(long)]
    return_rate: Option<f64>,

    /// Expected annual inflation in percent (overrides the assumptions file)
    #[arg(long)]
    inflation: Option<f64>,

    /// How existing savings count against each goal
    #[arg(long, value_enum, default_value_t = CliSavingsTreatment::Compound)]
    savings_treatment: CliSavingsTreatment,

    /// Print the plan as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut assumptions = match &args.assumptions {
        Some(path) => MarketAssumptions::from_json_path(path)
            .with_context(|| format!("reading assumptions from {}", path.display()))?,
        None if Path::new(DEFAULT_ASSUMPTIONS_PATH).exists() => {
            MarketAssumptions::from_json_path(Path::new(DEFAULT_ASSUMPTIONS_PATH))?
        }
        None => MarketAssumptions::default(),
    };
    if let Some(rate) = args.return_rate {
        assumptions.annual_return_percent = rate;
    }
    if let Some(rate) = args.inflation {
        assumptions.annual_inflation_percent = rate;
    }

    let goals = load_goals(&args.goals)
        .with_context(|| format!("reading goals from {}", args.goals.display()))?;

    let plan = GoalPlanner::new(assumptions)
        .with_savings_treatment(args.savings_treatment.into())
        .plan(&goals)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!(
        "Return {} | Inflation {} | Real return {} | Savings {:?}\n",
        format_percent(assumptions.annual_return_percent),
        format_percent(assumptions.annual_inflation_percent),
        format_percent(assumptions.real_return_percent()),
        plan.savings_treatment
    );
    println!("{:<16} {:>5} {:>14} {:>14} {:>14}", "Goal", "Years", "Target", "Savings FV", "SIP/month");
    println!("{}", "-".repeat(67));
    for projection in &plan.projections {
        println!(
            "{:<16} {:>5} {:>14} {:>14} {:>14}",
            projection.goal_id,
            projection.years,
            format_currency(projection.inflation_adjusted_target),
            format_currency(projection.future_value_of_savings),
            format_rupees(projection.monthly_contribution()),
        );
    }
    println!("{}", "-".repeat(67));
    println!(
        "{:<16} {:>5} {:>14} {:>14} {:>14}",
        "Total",
        "",
        format_currency(plan.totals.inflation_adjusted_target),
        format_currency(plan.totals.future_value_of_savings),
        format_rupees(plan.totals.monthly_contribution),
    );

    Ok(())
}
