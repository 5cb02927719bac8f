//! Scenario runner for evaluating one set of goals under many assumptions
//!
//! Loads goals once, then plans them for each return/inflation pair without
//! re-reading the CSV.

use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assumptions::MarketAssumptions;
use crate::error::CalcResult;
use crate::goals::{load_goals, Goal, GoalPlan, GoalPlanner, SavingsTreatment};

/// Pre-loaded goals, ready to be planned under different assumptions
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv_path(Path::new("goals.csv"))?;
///
/// for inflation in [5.0, 6.0, 7.0] {
///     let plan = runner.run(MarketAssumptions::new(12.0, inflation))?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    goals: Vec<Goal>,
    savings_treatment: SavingsTreatment,
}

/// Headline result of one grid point in a sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub annual_return_percent: f64,
    pub annual_inflation_percent: f64,
    pub total_monthly_contribution: f64,
    pub total_inflation_adjusted_target: f64,
}

impl ScenarioRunner {
    pub fn new(goals: Vec<Goal>) -> Self {
        Self {
            goals,
            savings_treatment: SavingsTreatment::default(),
        }
    }

    /// Create runner by loading goals from a CSV file
    pub fn from_csv_path(path: &Path) -> CalcResult<Self> {
        Ok(Self::new(load_goals(path)?))
    }

    pub fn with_savings_treatment(mut self, savings_treatment: SavingsTreatment) -> Self {
        self.savings_treatment = savings_treatment;
        self
    }

    /// Plan all goals under one set of assumptions
    pub fn run(&self, assumptions: MarketAssumptions) -> CalcResult<GoalPlan> {
        GoalPlanner::new(assumptions)
            .with_savings_treatment(self.savings_treatment)
            .plan(&self.goals)
    }

    /// Plan all goals under each set of assumptions, in order
    pub fn run_scenarios(&self, scenarios: &[MarketAssumptions]) -> CalcResult<Vec<GoalPlan>> {
        scenarios.iter().map(|a| self.run(*a)).collect()
    }

    /// Every return × inflation combination, evaluated in parallel
    ///
    /// Points come back ordered by return, then inflation.
    pub fn run_sweep(&self, returns: &[f64], inflations: &[f64]) -> CalcResult<Vec<SweepPoint>> {
        let grid: Vec<MarketAssumptions> = returns
            .iter()
            .flat_map(|&r| inflations.iter().map(move |&i| MarketAssumptions::new(r, i)))
            .collect();

        grid.par_iter()
            .map(|assumptions| -> CalcResult<SweepPoint> {
                let plan = self.run(*assumptions)?;
                Ok(SweepPoint {
                    annual_return_percent: assumptions.annual_return_percent,
                    annual_inflation_percent: assumptions.annual_inflation_percent,
                    total_monthly_contribution: plan.totals.monthly_contribution,
                    total_inflation_adjusted_target: plan.totals.inflation_adjusted_target,
                })
            })
            .collect()
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Mutable access for adding or editing goals between runs
    pub fn goals_mut(&mut self) -> &mut Vec<Goal> {
        &mut self.goals
    }
}
