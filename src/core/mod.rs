mod engine;
mod schedule;
mod types;

pub use engine::{aggregate, compute_amortization, project_loan_balance, project_value};
pub use schedule::{DepreciationSchedule, NEW_FIRST_YEAR_ANNUAL_RATE, STEADY_ANNUAL_RATE};
pub use types::{
    AmortizationResult, EngineError, ScenarioAggregate, ScenarioInput, VehicleCondition,
};

/// Default comparison window in months. Callers pass their own horizon to
/// every engine operation; this is only the value the boundary layer
/// applies when a request leaves it unset.
pub const DEFAULT_HORIZON_MONTHS: u32 = 60;
