//! Annuity formulas for SIP planning
//!
//! Future value of an ordinary annuity of `c` per period for `n` periods at rate `r`:
//! ```text
//! FV = c × ((1 + r)^n − 1) / r
//! ```
//! Solving the same relation for `c` gives the SIP needed to reach a target.

use log::debug;

use super::types::{AnnuityResult, PaymentTiming};
use crate::error::{ensure_finite, ensure_non_negative, ensure_periodic_rate, CalcResult};

/// Rates closer to zero than this use the linear (no-interest) formulas
pub(crate) const ZERO_RATE_EPSILON: f64 = 1e-10;

/// Accumulation factor ((1 + r)^n − 1) / r, or n when r is zero
pub fn future_value_factor(periodic_rate: f64, periods: u32) -> f64 {
    if periodic_rate.abs() < ZERO_RATE_EPSILON {
        return periods as f64;
    }
    ((1.0 + periodic_rate).powf(periods as f64) - 1.0) / periodic_rate
}

/// Contribution per period needed to accumulate `future_value_needed`
///
/// Returns zero when there are no periods or nothing left to save for.
pub fn solve_required_contribution(
    future_value_needed: f64,
    monthly_rate: f64,
    months: u32,
) -> CalcResult<f64> {
    solve_with_timing(
        future_value_needed,
        monthly_rate,
        months,
        PaymentTiming::EndOfPeriod,
    )
}

/// Value after `months` of contributing `contribution` at the end of each month
pub fn future_value_of_contribution(
    contribution: f64,
    monthly_rate: f64,
    months: u32,
) -> CalcResult<f64> {
    future_value_with_timing(contribution, monthly_rate, months, PaymentTiming::EndOfPeriod)
}

/// [`solve_required_contribution`] with explicit payment timing
pub fn solve_with_timing(
    future_value_needed: f64,
    periodic_rate: f64,
    periods: u32,
    timing: PaymentTiming,
) -> CalcResult<f64> {
    let future_value_needed = ensure_finite("future value needed", future_value_needed)?;
    let periodic_rate = ensure_periodic_rate("periodic rate", periodic_rate)?;

    if periods == 0 || future_value_needed <= 0.0 {
        return Ok(0.0);
    }

    let factor = future_value_factor(periodic_rate, periods) * timing.growth_adjustment(periodic_rate);
    let contribution = future_value_needed / factor;

    debug!(
        "solved contribution {:.4} for fv={:.2} rate={:.6} periods={} timing={:?}",
        contribution, future_value_needed, periodic_rate, periods, timing
    );

    Ok(contribution)
}

/// [`future_value_of_contribution`] with explicit payment timing
pub fn future_value_with_timing(
    contribution: f64,
    periodic_rate: f64,
    periods: u32,
    timing: PaymentTiming,
) -> CalcResult<f64> {
    let contribution = ensure_non_negative("contribution", contribution)?;
    let periodic_rate = ensure_periodic_rate("periodic rate", periodic_rate)?;

    if periods == 0 {
        return Ok(0.0);
    }

    Ok(contribution * future_value_factor(periodic_rate, periods) * timing.growth_adjustment(periodic_rate))
}

/// Forward projection of a SIP: totals, corpus and growth
pub fn project_contribution(
    contribution: f64,
    periodic_rate: f64,
    periods: u32,
    timing: PaymentTiming,
) -> CalcResult<AnnuityResult> {
    let future_value = future_value_with_timing(contribution, periodic_rate, periods, timing)?;
    let total_contributed = contribution * periods as f64;

    Ok(AnnuityResult {
        periodic_contribution: contribution,
        total_contributed,
        future_value,
        growth_amount: future_value - total_contributed,
    })
}
