//! Goal planning: inflate each goal, net off existing savings, solve the SIP

mod goal;
mod planner;
pub mod loader;

pub use goal::{Goal, SavingsTreatment};
pub use loader::{load_goals, load_goals_from_reader};
pub use planner::{plan_goals, GoalPlan, GoalPlanner, GoalProjection, GoalTotals};
