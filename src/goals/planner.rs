//! Goal planner: turns a set of goals into monthly SIP requirements

use std::collections::HashSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::goal::{Goal, SavingsTreatment};
use crate::annuity::{project_contribution, solve_required_contribution, AnnuityResult, PaymentTiming};
use crate::assumptions::MarketAssumptions;
use crate::error::{CalcError, CalcResult};
use crate::inflation::project_forward;
use crate::rates::{compound_annually, monthly_rate_from_annual_percent, years_to_months};

/// Requirement worked out for one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProjection {
    pub goal_id: String,

    /// Years until the goal
    pub years: u32,

    /// Goal cost at the target date
    pub inflation_adjusted_target: f64,

    /// Savings already set aside, in today's money
    pub existing_savings: f64,

    /// What existing savings are worth at the target date
    pub future_value_of_savings: f64,

    /// Shortfall left for the SIP to cover (never negative)
    pub remaining_target: f64,

    /// Monthly SIP covering the shortfall
    pub contribution: AnnuityResult,
}

impl GoalProjection {
    pub fn monthly_contribution(&self) -> f64 {
        self.contribution.periodic_contribution
    }

    /// Savings in excess of the target; stays with this goal
    pub fn surplus(&self) -> f64 {
        (self.future_value_of_savings - self.inflation_adjusted_target).max(0.0)
    }
}

/// Sums across every goal in a plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalTotals {
    pub monthly_contribution: f64,
    pub inflation_adjusted_target: f64,
    pub existing_savings: f64,
    pub future_value_of_savings: f64,
    pub remaining_target: f64,
}

impl GoalTotals {
    fn accumulate(&mut self, projection: &GoalProjection) {
        self.monthly_contribution += projection.contribution.periodic_contribution;
        self.inflation_adjusted_target += projection.inflation_adjusted_target;
        self.existing_savings += projection.existing_savings;
        self.future_value_of_savings += projection.future_value_of_savings;
        self.remaining_target += projection.remaining_target;
    }
}

/// Complete plan, rebuilt from scratch on every submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalPlan {
    pub assumptions: MarketAssumptions,
    pub savings_treatment: SavingsTreatment,

    /// Per-goal results, in input order
    pub projections: Vec<GoalProjection>,

    pub totals: GoalTotals,
}

impl GoalPlan {
    /// Look up a goal's projection by id
    pub fn get(&self, goal_id: &str) -> Option<&GoalProjection> {
        self.projections.iter().find(|p| p.goal_id == goal_id)
    }

    pub fn len(&self) -> usize {
        self.projections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projections.is_empty()
    }
}

/// Plans goals under one set of market assumptions
#[derive(Debug, Clone)]
pub struct GoalPlanner {
    assumptions: MarketAssumptions,
    savings_treatment: SavingsTreatment,
}

impl GoalPlanner {
    pub fn new(assumptions: MarketAssumptions) -> Self {
        Self {
            assumptions,
            savings_treatment: SavingsTreatment::default(),
        }
    }

    pub fn with_savings_treatment(mut self, savings_treatment: SavingsTreatment) -> Self {
        self.savings_treatment = savings_treatment;
        self
    }

    pub fn assumptions(&self) -> &MarketAssumptions {
        &self.assumptions
    }

    /// Work out the SIP needed for a single goal
    pub fn project_goal(&self, goal: &Goal) -> CalcResult<GoalProjection> {
        goal.validate()?;
        self.assumptions.validate()?;

        let years = goal.years()?;
        let months = years_to_months(years)?;
        let return_percent = self.assumptions.annual_return_percent;

        let inflation_adjusted_target =
            project_forward(goal.present_value, self.assumptions.annual_inflation_percent, years as f64)?;

        let future_value_of_savings = match self.savings_treatment {
            SavingsTreatment::CompoundAtReturn => {
                compound_annually(goal.existing_savings, return_percent, years as f64)?
            }
            SavingsTreatment::FaceValue => goal.existing_savings,
        };

        if future_value_of_savings > inflation_adjusted_target {
            warn!(
                "goal '{}': savings worth {:.2} exceed target {:.2}; surplus is not reallocated",
                goal.id, future_value_of_savings, inflation_adjusted_target
            );
        }

        let remaining_target = (inflation_adjusted_target - future_value_of_savings).max(0.0);
        let monthly_rate = monthly_rate_from_annual_percent(return_percent)?;
        let sip = solve_required_contribution(remaining_target, monthly_rate, months)?;
        let contribution = project_contribution(sip, monthly_rate, months, PaymentTiming::EndOfPeriod)?;

        debug!(
            "goal '{}': {} years, target {:.2}, shortfall {:.2}, sip {:.2}",
            goal.id, years, inflation_adjusted_target, remaining_target, sip
        );

        Ok(GoalProjection {
            goal_id: goal.id.clone(),
            years,
            inflation_adjusted_target,
            existing_savings: goal.existing_savings,
            future_value_of_savings,
            remaining_target,
            contribution,
        })
    }

    /// Plan every goal independently and total the results
    pub fn plan(&self, goals: &[Goal]) -> CalcResult<GoalPlan> {
        let mut seen = HashSet::new();
        for goal in goals {
            if !seen.insert(goal.id.as_str()) {
                return Err(CalcError::DuplicateGoal { id: goal.id.clone() });
            }
        }

        let projections = goals
            .iter()
            .map(|goal| self.project_goal(goal))
            .collect::<CalcResult<Vec<_>>>()?;

        let mut totals = GoalTotals::default();
        for projection in &projections {
            totals.accumulate(projection);
        }

        Ok(GoalPlan {
            assumptions: self.assumptions,
            savings_treatment: self.savings_treatment,
            projections,
            totals,
        })
    }
}

/// Plan goals with the default savings treatment
pub fn plan_goals(
    goals: &[Goal],
    annual_return_percent: f64,
    annual_inflation_percent: f64,
) -> CalcResult<GoalPlan> {
    GoalPlanner::new(MarketAssumptions::new(annual_return_percent, annual_inflation_percent)).plan(goals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn retirement() -> Goal {
        Goal::new("retirement", 10_000_000.0, 30, 60, 0.0)
    }

    #[test]
    fn test_crore_retirement_scenario() {
        let plan = plan_goals(&[retirement()], 12.0, 8.0).unwrap();
        let projection = plan.get("retirement").unwrap();

        assert_eq!(projection.years, 30);
        assert!((projection.inflation_adjusted_target - 100_626_568.89).abs() < 0.01);
        assert!((projection.monthly_contribution() - 28_791.87).abs() < 0.01,
            "got {}", projection.monthly_contribution());
        assert_relative_eq!(projection.contribution.future_value, projection.remaining_target, max_relative = 1e-9);
    }

    #[test]
    fn test_single_goal_matches_direct_solve() {
        let plan = plan_goals(&[retirement()], 12.0, 8.0).unwrap();
        let target = project_forward(10_000_000.0, 8.0, 30.0).unwrap();
        let direct = solve_required_contribution(target, 0.01, 360).unwrap();

        assert_relative_eq!(plan.totals.monthly_contribution, direct, max_relative = 1e-12);
    }

    #[test]
    fn test_existing_savings_reduce_sip() {
        let without = plan_goals(&[retirement()], 12.0, 8.0).unwrap();
        let with = plan_goals(&[Goal::new("retirement", 10_000_000.0, 30, 60, 500_000.0)], 12.0, 8.0).unwrap();

        let projection = with.get("retirement").unwrap();
        assert_relative_eq!(
            projection.future_value_of_savings,
            500_000.0 * 1.12_f64.powi(30),
            max_relative = 1e-12
        );
        assert!(with.totals.monthly_contribution < without.totals.monthly_contribution);
    }

    #[test]
    fn test_surplus_clamped_and_not_reallocated() {
        let goals = vec![
            Goal::new("car", 500_000.0, 30, 35, 1_000_000.0),
            Goal::new("house", 5_000_000.0, 30, 40, 0.0),
        ];
        let plan = plan_goals(&goals, 12.0, 6.0).unwrap();

        let car = plan.get("car").unwrap();
        assert_eq!(car.remaining_target, 0.0);
        assert_eq!(car.monthly_contribution(), 0.0);
        assert!(car.surplus() > 0.0);

        let house_alone = plan_goals(&goals[1..], 12.0, 6.0).unwrap();
        assert_relative_eq!(
            plan.get("house").unwrap().monthly_contribution(),
            house_alone.totals.monthly_contribution,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_totals_sum_goals() {
        let goals = vec![
            retirement(),
            Goal::education("college", 2_000_000.0, 5, 18, 100_000.0),
            Goal::new("wedding", 1_500_000.0, 25, 30, 0.0),
        ];
        let plan = plan_goals(&goals, 12.0, 6.0).unwrap();

        assert_eq!(plan.len(), 3);
        let sip_sum: f64 = plan.projections.iter().map(|p| p.monthly_contribution()).sum();
        let target_sum: f64 = plan.projections.iter().map(|p| p.inflation_adjusted_target).sum();
        assert_relative_eq!(plan.totals.monthly_contribution, sip_sum, max_relative = 1e-12);
        assert_relative_eq!(plan.totals.inflation_adjusted_target, target_sum, max_relative = 1e-12);
        assert_eq!(plan.totals.existing_savings, 100_000.0);

        // Input order is preserved
        let ids: Vec<&str> = plan.projections.iter().map(|p| p.goal_id.as_str()).collect();
        assert_eq!(ids, vec!["retirement", "college", "wedding"]);
    }

    #[test]
    fn test_face_value_needs_at_least_as_much() {
        let goal = Goal::education("college", 2_000_000.0, 5, 18, 300_000.0);
        let assumptions = MarketAssumptions::new(12.0, 10.0);

        let compound = GoalPlanner::new(assumptions).plan(std::slice::from_ref(&goal)).unwrap();
        let face = GoalPlanner::new(assumptions)
            .with_savings_treatment(SavingsTreatment::FaceValue)
            .plan(std::slice::from_ref(&goal))
            .unwrap();

        assert_eq!(face.savings_treatment, SavingsTreatment::FaceValue);
        assert_eq!(face.get("college").unwrap().future_value_of_savings, 300_000.0);
        assert!(face.totals.monthly_contribution > compound.totals.monthly_contribution);
    }

    #[test]
    fn test_zero_return_is_linear() {
        let plan = plan_goals(&[Goal::new("trip", 120_000.0, 30, 32, 0.0)], 0.0, 0.0).unwrap();
        assert_relative_eq!(plan.totals.monthly_contribution, 5_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_empty_plan() {
        let plan = plan_goals(&[], 12.0, 6.0).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.totals, GoalTotals::default());
    }

    #[test]
    fn test_rejects_duplicates_and_bad_goals() {
        let dup = vec![retirement(), retirement()];
        assert!(matches!(plan_goals(&dup, 12.0, 6.0), Err(CalcError::DuplicateGoal { .. })));

        let bad = vec![Goal::new("oops", 1_000.0, 50, 45, 0.0)];
        assert!(matches!(plan_goals(&bad, 12.0, 6.0), Err(CalcError::InvalidHorizon { .. })));

        assert!(matches!(
            plan_goals(&[retirement()], f64::NAN, 6.0),
            Err(CalcError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_horizon_too_long_is_rejected() {
        let goals = [Goal::new("x", 1_000.0, 0, 400_000_000, 0.0)];
        assert!(matches!(
            plan_goals(&goals, 12.0, 0.0),
            Err(CalcError::OutOfRange { field: "years", .. })
        ));
    }

    #[test]
    fn test_new_plan_replaces_previous() {
        let first = plan_goals(&[retirement()], 12.0, 8.0).unwrap();
        let second = plan_goals(&[Goal::new("car", 800_000.0, 30, 33, 0.0)], 12.0, 8.0).unwrap();

        assert!(first.get("retirement").is_some());
        assert!(second.get("retirement").is_none());
        assert_eq!(second.len(), 1);
    }
}
