use serde::Serialize;
use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VehicleCondition {
    New,
    Used,
}

/// One financing offer under consideration. Money fields are dollars,
/// rate fields are annual percentages (6.5 means 6.5%).
#[derive(Debug, Clone)]
pub struct ScenarioInput {
    pub price: f64,
    pub down_payment: f64,
    pub trade_in: f64,
    pub tax_rate_pct: f64,
    pub fees: f64,
    pub apr_pct: f64,
    pub term_months: u32,
    pub monthly_insurance: f64,
    pub monthly_fuel: f64,
    pub condition: VehicleCondition,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationResult {
    pub financed_principal: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub tax_amount: f64,
}

impl AmortizationResult {
    /// A fully cash-covered purchase: no loan, but tax is still owed.
    pub fn cash_purchase(tax_amount: f64) -> Self {
        Self {
            financed_principal: 0.0,
            monthly_payment: 0.0,
            total_interest: 0.0,
            tax_amount,
        }
    }

    pub fn is_cash_purchase(&self) -> bool {
        self.financed_principal == 0.0
    }
}

/// Everything the engine derives for one scenario over a comparison
/// horizon. Both series have `horizon_months + 1` entries, indexed by
/// month 0..=horizon.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioAggregate {
    pub amortization: AmortizationResult,
    pub loan_balance: Vec<f64>,
    pub estimated_value: Vec<f64>,
    pub total_monthly_out_of_pocket: f64,
    pub total_cost_over_horizon: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
