//! Market assumptions used by the goal planners
//!
//! Defaults match the figures the calculators pre-fill; a JSON file can
//! override them:
//! ```json
//! { "annual_return_percent": 12.0, "annual_inflation_percent": 6.0 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_annual_percent, CalcResult};

/// Default path for an assumptions override file
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions.json";

/// Expected portfolio return and inflation, both as annual percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketAssumptions {
    #[serde(default = "default_return_percent")]
    pub annual_return_percent: f64,

    #[serde(default = "default_inflation_percent")]
    pub annual_inflation_percent: f64,
}

fn default_return_percent() -> f64 { 12.0 }
fn default_inflation_percent() -> f64 { 6.0 }

impl Default for MarketAssumptions {
    fn default() -> Self {
        Self {
            annual_return_percent: default_return_percent(),
            annual_inflation_percent: default_inflation_percent(),
        }
    }
}

impl MarketAssumptions {
    pub fn new(annual_return_percent: f64, annual_inflation_percent: f64) -> Self {
        Self {
            annual_return_percent,
            annual_inflation_percent,
        }
    }

    /// Parse and validate assumptions from a JSON string
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let assumptions: Self = serde_json::from_str(json)?;
        assumptions.validate()?;
        Ok(assumptions)
    }

    /// Load assumptions from a JSON file
    pub fn from_json_path(path: &Path) -> CalcResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Both rates must be finite and above -100%
    pub fn validate(&self) -> CalcResult<()> {
        ensure_annual_percent("annual return", self.annual_return_percent)?;
        ensure_annual_percent("annual inflation", self.annual_inflation_percent)?;
        Ok(())
    }

    /// Approximate real return, (1 + return) / (1 + inflation) - 1, as a percentage
    pub fn real_return_percent(&self) -> f64 {
        ((1.0 + self.annual_return_percent / 100.0) / (1.0 + self.annual_inflation_percent / 100.0) - 1.0)
            * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let assumptions = MarketAssumptions::default();
        assert_eq!(assumptions.annual_return_percent, 12.0);
        assert_eq!(assumptions.annual_inflation_percent, 6.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let assumptions = MarketAssumptions::from_json_str(r#"{"annual_inflation_percent": 8.0}"#).unwrap();
        assert_eq!(assumptions.annual_return_percent, 12.0);
        assert_eq!(assumptions.annual_inflation_percent, 8.0);
    }

    #[test]
    fn test_invalid_json_is_load_error() {
        let err = MarketAssumptions::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CalcError::Load(_)));
    }

    #[test]
    fn test_rejects_rate_below_minus_hundred() {
        let err = MarketAssumptions::from_json_str(r#"{"annual_return_percent": -150.0}"#).unwrap_err();
        assert!(matches!(err, CalcError::InvalidRate { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"annual_return_percent": 10.0, "annual_inflation_percent": 5.0}}"#).unwrap();

        let assumptions = MarketAssumptions::from_json_path(file.path()).unwrap();
        assert_eq!(assumptions, MarketAssumptions::new(10.0, 5.0));
    }

    #[test]
    fn test_load_default_file() {
        let assumptions = MarketAssumptions::from_json_path(Path::new(DEFAULT_ASSUMPTIONS_PATH)).unwrap();
        assert_eq!(assumptions, MarketAssumptions::default());
    }

    #[test]
    fn test_missing_file() {
        let result = MarketAssumptions::from_json_path(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(CalcError::Load(_))));
    }

    #[test]
    fn test_real_return() {
        let real = MarketAssumptions::new(12.0, 8.0).real_return_percent();
        assert!((real - 3.7037).abs() < 1e-3);
    }
}
