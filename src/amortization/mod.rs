//! EMI loans and their amortization schedules

mod loan;
mod schedule;

pub use loan::{build_amortization_schedule, compute_fixed_payment, LoanRequest, LoanSummary};
pub use schedule::{AmortizationSchedule, ScheduleRow, YearSummary};
