//! SIP Planner - financial projection engine for mutual-fund advisory calculators
//!
//! This library provides:
//! - SIP solving and projection (annuity formulas, end- or start-of-month contributions)
//! - EMI calculation with amortization schedules and yearly roll-ups
//! - Inflation adjustment of goal amounts
//! - Single, composite and education goal planning
//! - Spending-reduction projections
//! - Rupee formatting in lakh / crore notation
//!
//! Every calculation is a pure function of its inputs and validates them,
//! returning [`CalcError`] instead of NaN or infinity.

pub mod error;
pub mod rates;
pub mod annuity;
pub mod amortization;
pub mod inflation;
pub mod goals;
pub mod spending;
pub mod format;
pub mod assumptions;
pub mod scenario;

// Re-export commonly used types
pub use error::{CalcError, CalcResult};
pub use annuity::{
    future_value_of_contribution, solve_required_contribution, AnnuityRequest, AnnuityResult,
    PaymentTiming,
};
pub use amortization::{
    build_amortization_schedule, compute_fixed_payment, AmortizationSchedule, LoanRequest,
    LoanSummary, ScheduleRow,
};
pub use inflation::project_forward;
pub use goals::{plan_goals, Goal, GoalPlan, GoalPlanner, SavingsTreatment};
pub use format::format_currency;
pub use assumptions::MarketAssumptions;
pub use scenario::ScenarioRunner;
