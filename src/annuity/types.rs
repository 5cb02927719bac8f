//! Request and result types for SIP calculations

use serde::{Deserialize, Serialize};

use crate::error::CalcResult;

/// When in each period the contribution is made
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentTiming {
    /// Ordinary annuity: contribution at the end of the month
    #[default]
    EndOfPeriod,
    /// Annuity due: contribution at the start of the month, so it earns one extra period
    StartOfPeriod,
}

impl PaymentTiming {
    /// Extra growth factor applied to the ordinary annuity formula
    pub fn growth_adjustment(self, periodic_rate: f64) -> f64 {
        match self {
            PaymentTiming::EndOfPeriod => 1.0,
            PaymentTiming::StartOfPeriod => 1.0 + periodic_rate,
        }
    }
}

/// Parameters for solving the contribution that reaches a target corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnuityRequest {
    /// Corpus wanted at the end of the horizon
    pub target_future_value: f64,

    /// Decimal rate per period (0.01 = 1% per month)
    pub periodic_rate: f64,

    /// Number of contributions
    pub number_of_periods: u32,

    #[serde(default)]
    pub timing: PaymentTiming,
}

impl AnnuityRequest {
    /// Ordinary-annuity request
    pub fn new(target_future_value: f64, periodic_rate: f64, number_of_periods: u32) -> Self {
        Self {
            target_future_value,
            periodic_rate,
            number_of_periods,
            timing: PaymentTiming::EndOfPeriod,
        }
    }

    pub fn with_timing(mut self, timing: PaymentTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Solve the periodic contribution and fill in totals
    pub fn solve(&self) -> CalcResult<AnnuityResult> {
        let contribution = super::engine::solve_with_timing(
            self.target_future_value,
            self.periodic_rate,
            self.number_of_periods,
            self.timing,
        )?;
        super::engine::project_contribution(
            contribution,
            self.periodic_rate,
            self.number_of_periods,
            self.timing,
        )
    }
}

/// Contribution stream and what it grows into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnuityResult {
    pub periodic_contribution: f64,
    pub total_contributed: f64,
    pub future_value: f64,
    /// Returns earned on top of contributions (future_value - total_contributed)
    pub growth_amount: f64,
}

impl AnnuityResult {
    /// Result of a stream that contributes nothing
    pub fn zero() -> Self {
        Self {
            periodic_contribution: 0.0,
            total_contributed: 0.0,
            future_value: 0.0,
            growth_amount: 0.0,
        }
    }

    /// Share of the final corpus that came from growth rather than contributions
    pub fn growth_share(&self) -> f64 {
        if self.future_value <= 0.0 {
            0.0
        } else {
            self.growth_amount / self.future_value
        }
    }
}
