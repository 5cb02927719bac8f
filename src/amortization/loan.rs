//! Fixed-payment (EMI) loan engine
//!
//! EMI = P × r × (1 + r)^n / ((1 + r)^n − 1), with r the monthly rate.

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::schedule::{AmortizationSchedule, ScheduleRow};
use crate::annuity::ZERO_RATE_EPSILON;
use crate::error::{ensure_non_negative, ensure_periodic_rate, CalcError, CalcResult};
use crate::rates::{monthly_rate_from_annual_percent, years_to_months};

/// Balances within this distance of zero are reported as exactly zero
const BALANCE_EPSILON: f64 = 1e-6;

/// Rounding residue grows with the principal; snap relative to it as well
const RELATIVE_BALANCE_EPSILON: f64 = 1e-9;

/// Fixed installment that repays `principal` over `months`
pub fn compute_fixed_payment(principal: f64, monthly_rate: f64, months: u32) -> CalcResult<f64> {
    let principal = ensure_non_negative("principal", principal)?;
    let monthly_rate = ensure_periodic_rate("monthly rate", monthly_rate)?;
    if months == 0 {
        return Err(CalcError::ZeroPeriods { field: "loan tenure" });
    }

    if monthly_rate.abs() < ZERO_RATE_EPSILON {
        return Ok(principal / months as f64);
    }

    let growth = (1.0 + monthly_rate).powf(months as f64);
    Ok(principal * monthly_rate * growth / (growth - 1.0))
}

/// Period-by-period split of each installment into interest and principal
///
/// Stops early once the balance is paid off before `months` periods.
pub fn build_amortization_schedule(
    principal: f64,
    monthly_rate: f64,
    payment: f64,
    months: u32,
) -> CalcResult<AmortizationSchedule> {
    let principal = ensure_non_negative("principal", principal)?;
    let monthly_rate = ensure_periodic_rate("monthly rate", monthly_rate)?;
    let payment = ensure_non_negative("payment", payment)?;
    if months == 0 {
        return Err(CalcError::ZeroPeriods { field: "loan tenure" });
    }

    if payment < principal * monthly_rate {
        warn!(
            "payment {:.2} does not cover first-period interest {:.2}; balance will grow",
            payment,
            principal * monthly_rate
        );
    }

    let snap_tolerance = BALANCE_EPSILON.max(principal * RELATIVE_BALANCE_EPSILON);
    let mut schedule = AmortizationSchedule::new();
    let mut balance = principal;

    for period in 1..=months {
        let opening_balance = balance;
        let interest_portion = balance * monthly_rate;
        let mut principal_portion = payment - interest_portion;
        balance -= principal_portion;

        // Residue left by rounding is folded into the last principal payment
        if balance.abs() < snap_tolerance {
            principal_portion = opening_balance;
            balance = 0.0;
        }

        schedule.add_row(ScheduleRow {
            period,
            payment,
            principal_portion,
            interest_portion,
            remaining_balance: balance,
            due_date: None,
        });

        if balance <= 0.0 && period < months {
            debug!("loan paid off early at period {} of {}", period, months);
            break;
        }
    }

    Ok(schedule)
}

/// Loan as entered in the EMI calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Amount borrowed
    pub principal: f64,

    /// Interest rate as an annual percentage (12.5 = 12.5% p.a.)
    pub annual_rate_percent: f64,

    /// Tenure in months
    pub number_of_periods: u32,

    /// Disbursal date; the first EMI falls due one month later
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

impl LoanRequest {
    pub fn new(principal: f64, annual_rate_percent: f64, number_of_periods: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            number_of_periods,
            start_date: None,
        }
    }

    /// Tenure given in whole years
    pub fn from_years(principal: f64, annual_rate_percent: f64, years: u32) -> CalcResult<Self> {
        Ok(Self::new(principal, annual_rate_percent, years_to_months(years)?))
    }

    pub fn starting_on(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn monthly_rate(&self) -> CalcResult<f64> {
        monthly_rate_from_annual_percent(self.annual_rate_percent)
    }

    /// Monthly EMI
    pub fn payment(&self) -> CalcResult<f64> {
        compute_fixed_payment(self.principal, self.monthly_rate()?, self.number_of_periods)
    }

    /// Full schedule, dated when the request has a start date
    pub fn schedule(&self) -> CalcResult<AmortizationSchedule> {
        let monthly_rate = self.monthly_rate()?;
        let payment = compute_fixed_payment(self.principal, monthly_rate, self.number_of_periods)?;
        let schedule =
            build_amortization_schedule(self.principal, monthly_rate, payment, self.number_of_periods)?;

        Ok(match self.start_date {
            Some(start) => schedule.with_start_date(start),
            None => schedule,
        })
    }

    /// EMI, total paid and total interest
    pub fn summary(&self) -> CalcResult<LoanSummary> {
        let payment = self.payment()?;
        let total_payment = payment * self.number_of_periods as f64;

        Ok(LoanSummary {
            principal: self.principal,
            number_of_periods: self.number_of_periods,
            payment,
            total_payment,
            total_interest: total_payment - self.principal,
        })
    }
}

/// Headline figures for an EMI calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub principal: f64,
    pub number_of_periods: u32,
    pub payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

impl LoanSummary {
    /// Interest as a share of everything paid
    pub fn interest_share(&self) -> f64 {
        if self.total_payment <= 0.0 {
            0.0
        } else {
            self.total_interest / self.total_payment
        }
    }
}
