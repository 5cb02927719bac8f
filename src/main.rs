//! SIP Planner CLI
//!
//! Runs the reference EMI and goal-planning scenarios and writes the full
//! EMI schedule to CSV.

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use sip_planner::format::{format_currency, format_percent, format_rupees};
use sip_planner::{plan_goals, Goal, LoanRequest};

fn main() -> Result<()> {
    env_logger::init();

    println!("SIP Planner v0.1.0");
    println!("==================\n");

    // Home loan: 25 lakh at 12.5% for 20 years
    let loan = LoanRequest::from_years(2_500_000.0, 12.5, 20)?;
    let summary = loan.summary()?;
    let schedule = loan.schedule()?;

    println!("Loan: {} at {:.2}% for {} months", format_rupees(loan.principal), loan.annual_rate_percent, loan.number_of_periods);
    println!("  EMI:            {}", format_rupees(summary.payment));
    println!("  Total interest: {} ({})", format_rupees(summary.total_interest), format_currency(summary.total_interest));
    println!("  Total payment:  {}", format_rupees(summary.total_payment));
    println!();

    println!("{:>6} {:>14} {:>14} {:>14} {:>16}", "Month", "EMI", "Principal", "Interest", "Balance");
    println!("{}", "-".repeat(68));
    for row in schedule.capped(12).rows.iter() {
        println!(
            "{:>6} {:>14.2} {:>14.2} {:>14.2} {:>16.2}",
            row.period, row.payment, row.principal_portion, row.interest_portion, row.remaining_balance
        );
    }
    if schedule.len() > 12 {
        println!("... ({} more months)", schedule.len() - 12);
    }

    let csv_path = "emi_schedule.csv";
    let file = File::create(csv_path).with_context(|| format!("unable to create {}", csv_path))?;
    schedule.write_csv(BufWriter::new(file))?;
    println!("\nFull schedule written to: {}", csv_path);

    // Retirement: 1 crore in today's money, 30 years away, 8% inflation, 12% return
    let goals = vec![Goal::new("retirement", 10_000_000.0, 30, 60, 0.0)];
    let plan = plan_goals(&goals, 12.0, 8.0)?;

    println!("\nGoal plan (return 12%, inflation 8%):");
    for projection in &plan.projections {
        println!(
            "  {:<12} {:>2} yrs  target {:>12}  SIP {:>10}/month  ({} of corpus from growth)",
            projection.goal_id,
            projection.years,
            format_currency(projection.inflation_adjusted_target),
            format_rupees(projection.monthly_contribution()),
            format_percent(projection.contribution.growth_share() * 100.0),
        );
    }
    println!("  Total SIP: {}/month", format_rupees(plan.totals.monthly_contribution));

    Ok(())
}
