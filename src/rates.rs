//! Rate conversions shared by the calculators
//!
//! Calculator inputs are annual percentages (12.5 means 12.5% p.a.); the
//! formulas work on monthly decimal rates.

use crate::error::{ensure_annual_percent, ensure_finite, ensure_non_negative, CalcError, CalcResult};

/// Payments per year for every calculator on the site
pub const MONTHS_PER_YEAR: u32 = 12;

/// Convert an annual percentage to a monthly decimal rate (pct / 12 / 100)
pub fn monthly_rate_from_annual_percent(annual_percent: f64) -> CalcResult<f64> {
    let annual_percent = ensure_annual_percent("annual rate", annual_percent)?;
    Ok(annual_percent / MONTHS_PER_YEAR as f64 / 100.0)
}

/// Whole years to months; horizons too long to count in months are rejected
pub fn years_to_months(years: u32) -> CalcResult<u32> {
    years.checked_mul(MONTHS_PER_YEAR).ok_or(CalcError::OutOfRange {
        field: "years",
        value: years as f64,
        min: 0.0,
        max: (u32::MAX / MONTHS_PER_YEAR) as f64,
    })
}

/// Grow a lump sum at an annual percentage for a (possibly fractional) number of years
pub fn compound_annually(amount: f64, annual_percent: f64, years: f64) -> CalcResult<f64> {
    let amount = ensure_finite("amount", amount)?;
    let annual_percent = ensure_annual_percent("annual rate", annual_percent)?;
    let years = ensure_non_negative("years", years)?;
    Ok(amount * (1.0 + annual_percent / 100.0).powf(years))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_conversion() {
        let r = monthly_rate_from_annual_percent(12.0).unwrap();
        assert_relative_eq!(r, 0.01, epsilon = 1e-15);

        assert_eq!(monthly_rate_from_annual_percent(0.0).unwrap(), 0.0);
        assert!(monthly_rate_from_annual_percent(-100.0).is_err());
    }

    #[test]
    fn test_compound_annually() {
        let fv = compound_annually(1_000.0, 10.0, 2.0).unwrap();
        assert_relative_eq!(fv, 1_210.0, epsilon = 1e-9);

        // Zero years leaves the amount untouched
        assert_eq!(compound_annually(500.0, 7.0, 0.0).unwrap(), 500.0);
        assert!(compound_annually(500.0, 7.0, -1.0).is_err());
    }

    #[test]
    fn test_years_to_months() {
        assert_eq!(years_to_months(20), Ok(240));
        assert_eq!(years_to_months(0), Ok(0));
        assert_eq!(years_to_months(u32::MAX / 12), Ok(u32::MAX / 12 * 12));
    }

    #[test]
    fn test_years_to_months_overflow() {
        assert!(matches!(
            years_to_months(u32::MAX / 12 + 1),
            Err(CalcError::OutOfRange { field: "years", .. })
        ));
        assert!(years_to_months(400_000_000).is_err());
    }
}
