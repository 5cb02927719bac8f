//! SIP (systematic investment plan) calculations built on the annuity formula

mod engine;
mod types;

pub use engine::{
    future_value_factor, future_value_of_contribution, future_value_with_timing,
    project_contribution, solve_required_contribution, solve_with_timing,
};
pub use types::{AnnuityRequest, AnnuityResult, PaymentTiming};

pub(crate) use engine::ZERO_RATE_EPSILON;
