//! Inflation adjustment of goal amounts

use crate::error::{ensure_annual_percent, ensure_finite, ensure_non_negative, CalcResult};

/// What `present_value` in today's money will cost after `years` of inflation
pub fn project_forward(present_value: f64, annual_inflation_percent: f64, years: f64) -> CalcResult<f64> {
    let present_value = ensure_finite("present value", present_value)?;
    let annual_inflation_percent = ensure_annual_percent("inflation rate", annual_inflation_percent)?;
    let years = ensure_non_negative("years", years)?;

    Ok(present_value * (1.0 + annual_inflation_percent / 100.0).powf(years))
}

/// Today's purchasing power of an amount received after `years`
pub fn deflate(future_value: f64, annual_inflation_percent: f64, years: f64) -> CalcResult<f64> {
    let future_value = ensure_finite("future value", future_value)?;
    let annual_inflation_percent = ensure_annual_percent("inflation rate", annual_inflation_percent)?;
    let years = ensure_non_negative("years", years)?;

    Ok(future_value / (1.0 + annual_inflation_percent / 100.0).powf(years))
}
