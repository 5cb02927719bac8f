//! Financial goal definitions

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, CalcError, CalcResult};

/// A goal priced in today's money, to be funded by a monthly SIP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Identifier, unique within a plan ("retirement", "child_education", ...)
    pub id: String,

    /// Cost of the goal in today's money
    pub present_value: f64,

    /// Age today of the person the goal is for
    pub current_age: u32,

    /// Age at which the money is needed
    pub target_age: u32,

    /// Amount already set aside for this goal
    #[serde(default)]
    pub existing_savings: f64,
}

impl Goal {
    pub fn new(
        id: impl Into<String>,
        present_value: f64,
        current_age: u32,
        target_age: u32,
        existing_savings: f64,
    ) -> Self {
        Self {
            id: id.into(),
            present_value,
            current_age,
            target_age,
            existing_savings,
        }
    }

    /// Education goal: horizon runs from the child's age to college age
    pub fn education(
        id: impl Into<String>,
        cost_today: f64,
        child_age: u32,
        college_age: u32,
        existing_savings: f64,
    ) -> Self {
        Self::new(id, cost_today, child_age, college_age, existing_savings)
    }

    /// Years until the goal; the target age must be after the current age
    pub fn years(&self) -> CalcResult<u32> {
        if self.target_age <= self.current_age {
            return Err(CalcError::InvalidHorizon {
                goal: self.id.clone(),
                current_age: self.current_age,
                target_age: self.target_age,
            });
        }
        Ok(self.target_age - self.current_age)
    }

    /// Check amounts and horizon before planning
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("goal present value", self.present_value)?;
        ensure_non_negative("existing savings", self.existing_savings)?;
        self.years()?;
        Ok(())
    }
}

/// How money already saved for a goal counts against its target
///
/// The goal and composite planners grow existing savings at the expected
/// return; the education planner subtracts them at face value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavingsTreatment {
    /// Savings compound at the expected return until the target date
    #[default]
    CompoundAtReturn,
    /// Savings are subtracted from the inflated target without growth
    FaceValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years() {
        let goal = Goal::new("retirement", 10_000_000.0, 30, 60, 0.0);
        assert_eq!(goal.years().unwrap(), 30);
    }

    #[test]
    fn test_horizon_must_be_positive() {
        let goal = Goal::new("late", 1_000.0, 40, 40, 0.0);
        assert!(matches!(goal.years(), Err(CalcError::InvalidHorizon { .. })));

        let goal = Goal::new("past", 1_000.0, 40, 35, 0.0);
        assert!(goal.validate().is_err());
    }

    #[test]
    fn test_validate_amounts() {
        assert!(Goal::new("car", -1.0, 30, 35, 0.0).validate().is_err());
        assert!(Goal::new("car", 800_000.0, 30, 35, -5.0).validate().is_err());
        assert!(Goal::new("car", 800_000.0, 30, 35, 50_000.0).validate().is_ok());
    }

    #[test]
    fn test_education_goal() {
        let goal = Goal::education("college", 2_000_000.0, 5, 18, 100_000.0);
        assert_eq!(goal.years().unwrap(), 13);
        assert_eq!(goal.existing_savings, 100_000.0);
    }

    #[test]
    fn test_savings_default() {
        let goal: Goal = serde_json::from_str(
            r#"{"id": "house", "present_value": 5000000.0, "current_age": 28, "target_age": 35}"#,
        )
        .unwrap();
        assert_eq!(goal.existing_savings, 0.0);
        assert_eq!(SavingsTreatment::default(), SavingsTreatment::CompoundAtReturn);
    }
}
