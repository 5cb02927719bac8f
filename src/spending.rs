//! Spending-reduction projection
//!
//! Cut monthly spending by a percentage, invest the difference as a SIP,
//! and see what it grows to year by year.

use serde::{Deserialize, Serialize};

use crate::annuity::future_value_of_contribution;
use crate::error::{ensure_finite, ensure_non_negative, CalcError, CalcResult};
use crate::rates::{monthly_rate_from_annual_percent, years_to_months};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingReductionRequest {
    /// Current monthly spending
    pub monthly_spending: f64,

    /// Share of spending to cut, 0-100
    pub reduction_percent: f64,

    /// Expected return on the invested savings (annual %)
    pub annual_return_percent: f64,

    /// Projection length in years
    pub years: u32,
}

/// Position at the end of one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingYearRow {
    pub year: u32,
    pub total_invested: f64,
    pub corpus: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingProjection {
    /// Amount freed up and invested every month
    pub monthly_saving: f64,
    pub yearly: Vec<SpendingYearRow>,
}

impl SpendingProjection {
    /// Corpus at the end of the projection (0 when no years are projected)
    pub fn final_corpus(&self) -> f64 {
        self.yearly.last().map(|r| r.corpus).unwrap_or(0.0)
    }

    pub fn total_invested(&self) -> f64 {
        self.yearly.last().map(|r| r.total_invested).unwrap_or(0.0)
    }
}

pub fn project_spending_reduction(request: &SpendingReductionRequest) -> CalcResult<SpendingProjection> {
    let monthly_spending = ensure_non_negative("monthly spending", request.monthly_spending)?;
    let reduction_percent = ensure_finite("reduction percent", request.reduction_percent)?;
    if !(0.0..=100.0).contains(&reduction_percent) {
        return Err(CalcError::OutOfRange {
            field: "reduction percent",
            value: reduction_percent,
            min: 0.0,
            max: 100.0,
        });
    }
    let monthly_rate = monthly_rate_from_annual_percent(request.annual_return_percent)?;

    years_to_months(request.years)?;
    let monthly_saving = monthly_spending * reduction_percent / 100.0;

    let yearly = (1..=request.years)
        .map(|year| -> CalcResult<SpendingYearRow> {
            let months = years_to_months(year)?;
            let corpus = future_value_of_contribution(monthly_saving, monthly_rate, months)?;
            let total_invested = monthly_saving * months as f64;
            Ok(SpendingYearRow {
                year,
                total_invested,
                corpus,
                growth: corpus - total_invested,
            })
        })
        .collect::<CalcResult<Vec<_>>>()?;

    Ok(SpendingProjection { monthly_saving, yearly })
}
