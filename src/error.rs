//! Error taxonomy and input validation shared by every calculator
//!
//! Inputs are checked at the library boundary; NaN and infinity never come
//! back as a calculation result.

use thiserror::Error;

/// Result alias used throughout the crate
pub type CalcResult<T> = Result<T, CalcError>;

/// Reasons a calculation refuses its inputs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Input is NaN or infinite
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// Periodic rate at or below -100%, where the compounding base collapses
    #[error("{field} must be greater than -100% per period, got {value}")]
    InvalidRate { field: &'static str, value: f64 },

    /// Money amount that must not be negative
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    /// Loan or schedule with no periods
    #[error("{field} must be at least one period")]
    ZeroPeriods { field: &'static str },

    /// Goal whose target age is not after the current age
    #[error("goal '{goal}': target age {target_age} must be after current age {current_age}")]
    InvalidHorizon {
        goal: String,
        current_age: u32,
        target_age: u32,
    },

    /// Value outside its allowed closed range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Two goals in one plan share an identifier
    #[error("goal id '{id}' appears more than once")]
    DuplicateGoal { id: String },

    /// Reading goals or assumptions from disk failed
    #[error("failed to load input: {0}")]
    Load(String),
}

impl From<csv::Error> for CalcError {
    fn from(err: csv::Error) -> Self {
        CalcError::Load(err.to_string())
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::Load(err.to_string())
    }
}

impl From<std::io::Error> for CalcError {
    fn from(err: std::io::Error) -> Self {
        CalcError::Load(err.to_string())
    }
}

/// Reject NaN and infinities
pub fn ensure_finite(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite { field })
    }
}

/// Finite and >= 0
pub fn ensure_non_negative(field: &'static str, value: f64) -> CalcResult<f64> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::NegativeAmount { field, value });
    }
    Ok(value)
}

/// Periodic (decimal) rate strictly greater than -1
pub fn ensure_periodic_rate(field: &'static str, rate: f64) -> CalcResult<f64> {
    let rate = ensure_finite(field, rate)?;
    if rate <= -1.0 {
        return Err(CalcError::InvalidRate { field, value: rate });
    }
    Ok(rate)
}

/// Annual percentage rate strictly greater than -100
pub fn ensure_annual_percent(field: &'static str, percent: f64) -> CalcResult<f64> {
    let percent = ensure_finite(field, percent)?;
    if percent <= -100.0 {
        return Err(CalcError::InvalidRate {
            field,
            value: percent,
        });
    }
    Ok(percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_check() {
        assert!(ensure_finite("x", 1.5).is_ok());
        assert_eq!(
            ensure_finite("x", f64::NAN),
            Err(CalcError::NonFinite { field: "x" })
        );
        assert!(ensure_finite("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_non_negative_allows_zero() {
        assert_eq!(ensure_non_negative("principal", 0.0), Ok(0.0));
        assert!(matches!(
            ensure_non_negative("principal", -1.0),
            Err(CalcError::NegativeAmount { field: "principal", .. })
        ));
    }

    #[test]
    fn test_rate_floor() {
        assert!(ensure_periodic_rate("rate", -0.5).is_ok());
        assert!(ensure_periodic_rate("rate", -1.0).is_err());
        assert!(ensure_annual_percent("rate", -99.0).is_ok());
        assert!(ensure_annual_percent("rate", -100.0).is_err());
    }

    #[test]
    fn test_messages_name_the_field() {
        let err = CalcError::InvalidHorizon {
            goal: "retirement".to_string(),
            current_age: 60,
            target_age: 55,
        };
        let msg = err.to_string();
        assert!(msg.contains("retirement"));
        assert!(msg.contains("55"));
    }
}
