//! Amortization schedule output structures

use std::io::Write;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CalcResult;
use crate::rates::MONTHS_PER_YEAR;

/// One EMI period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Period number (1-indexed)
    pub period: u32,

    /// Installment paid this period
    pub payment: f64,

    /// Part of the installment that reduces the balance
    pub principal_portion: f64,

    /// Part of the installment that pays interest on the opening balance
    pub interest_portion: f64,

    /// Outstanding balance after this installment
    pub remaining_balance: f64,

    /// Due date, when the loan has a start date
    pub due_date: Option<NaiveDate>,
}

/// Period-by-period breakdown of an amortizing loan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub rows: Vec<ScheduleRow>,
}

impl AmortizationSchedule {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a schedule row
    pub fn add_row(&mut self, row: ScheduleRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest_portion).sum()
    }

    pub fn total_principal(&self) -> f64 {
        self.rows.iter().map(|r| r.principal_portion).sum()
    }

    pub fn total_paid(&self) -> f64 {
        self.rows.iter().map(|r| r.payment).sum()
    }

    /// Balance after the last emitted row (0 for an empty schedule)
    pub fn final_balance(&self) -> f64 {
        self.rows.last().map(|r| r.remaining_balance).unwrap_or(0.0)
    }

    /// First `max_rows` periods only, for display
    pub fn capped(&self, max_rows: usize) -> Self {
        Self {
            rows: self.rows.iter().take(max_rows).cloned().collect(),
        }
    }

    /// Stamp each row with its due date; period 1 falls one month after `start`
    pub fn with_start_date(mut self, start: NaiveDate) -> Self {
        for row in &mut self.rows {
            row.due_date = start.checked_add_months(Months::new(row.period));
        }
        self
    }

    /// Roll periods up into loan years (12 periods each; the last may be partial)
    pub fn yearly_summary(&self) -> Vec<YearSummary> {
        let mut years: Vec<YearSummary> = Vec::new();

        for row in &self.rows {
            let year = (row.period - 1) / MONTHS_PER_YEAR + 1;
            match years.last_mut() {
                Some(summary) if summary.year == year => {
                    summary.principal_paid += row.principal_portion;
                    summary.interest_paid += row.interest_portion;
                    summary.closing_balance = row.remaining_balance;
                }
                _ => years.push(YearSummary {
                    year,
                    principal_paid: row.principal_portion,
                    interest_paid: row.interest_portion,
                    closing_balance: row.remaining_balance,
                }),
            }
        }

        years
    }

    /// Write all rows as CSV with a header line
    pub fn write_csv<W: Write>(&self, writer: W) -> CalcResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Loan-year roll-up shown under EMI calculators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    /// Loan year (1-indexed)
    pub year: u32,
    pub principal_paid: f64,
    pub interest_paid: f64,
    /// Balance at the end of the last period in this year
    pub closing_balance: f64,
}
