//! EMI and amortization schedule for a fixed-rate loan
//!
//! Usage: cargo run --bin emi_schedule -- --principal 2500000 --rate 12.5 --years 20

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use sip_planner::format::{format_currency, format_rupees};
use sip_planner::LoanRequest;

#[derive(Debug, Parser)]
#[command(about = "EMI and amortization schedule for a fixed-rate loan")]
struct Args {
    /// Loan amount
    #[arg(long)]
    principal: f64,

    /// Annual interest rate in percent (12.5 = 12.5%)
    #[arg(long)]
    rate: f64,

    /// Tenure in years
    #[arg(long)]
    years: u32,

    /// Disbursal date (YYYY-MM-DD); dates each installment
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Only write the first N installments
    #[arg(long)]
    max_rows: Option<usize>,

    /// Write the schedule to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut loan = LoanRequest::from_years(args.principal, args.rate, args.years).context("invalid loan tenure")?;
    if let Some(start) = args.start_date {
        loan = loan.starting_on(start);
    }

    let summary = loan.summary().context("invalid loan parameters")?;
    let schedule = loan.schedule()?;

    println!("EMI:            {}", format_rupees(summary.payment));
    println!("Total interest: {} ({:.1}% of payments)", format_currency(summary.total_interest), summary.interest_share() * 100.0);
    println!("Total payment:  {}", format_currency(summary.total_payment));
    println!();

    println!("{:>4} {:>16} {:>16} {:>16}", "Year", "Principal", "Interest", "Balance");
    for year in schedule.yearly_summary() {
        println!(
            "{:>4} {:>16} {:>16} {:>16}",
            year.year,
            format_rupees(year.principal_paid),
            format_rupees(year.interest_paid),
            format_rupees(year.closing_balance),
        );
    }

    if let Some(path) = args.output {
        let schedule = match args.max_rows {
            Some(rows) => schedule.capped(rows),
            None => schedule,
        };
        let file = File::create(&path).with_context(|| format!("unable to create {}", path.display()))?;
        schedule.write_csv(BufWriter::new(file))?;
        println!("\nSchedule ({} rows) written to {}", schedule.len(), path.display());
    }

    Ok(())
}
