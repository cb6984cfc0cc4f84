use super::schedule::DepreciationSchedule;
use super::types::{AmortizationResult, EngineError, ScenarioAggregate, ScenarioInput};

fn monthly_rate(apr_pct: f64) -> f64 {
    apr_pct / 100.0 / 12.0
}

fn require_finite(name: &str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::InvalidInput(format!("{name} must be finite")))
    }
}

fn require_positive_term(term_months: u32) -> Result<(), EngineError> {
    if term_months == 0 {
        return Err(EngineError::InvalidInput(
            "term_months must be > 0".to_string(),
        ));
    }
    Ok(())
}

/// Fixed-rate amortization of one scenario: tax, financed principal,
/// monthly payment, and lifetime interest.
///
/// When the down payment and trade-in cover the full purchase the result
/// is a cash purchase with no loan, which is a valid outcome rather than
/// an error. Negative inputs are accepted and produce mathematically
/// consistent output; rejecting business nonsense is the caller's job.
pub fn compute_amortization(scenario: &ScenarioInput) -> Result<AmortizationResult, EngineError> {
    require_positive_term(scenario.term_months)?;
    for (name, value) in [
        ("price", scenario.price),
        ("down_payment", scenario.down_payment),
        ("trade_in", scenario.trade_in),
        ("tax_rate_pct", scenario.tax_rate_pct),
        ("fees", scenario.fees),
        ("apr_pct", scenario.apr_pct),
    ] {
        require_finite(name, value)?;
    }

    let tax_amount = scenario.price * (scenario.tax_rate_pct / 100.0);
    let financed_principal =
        scenario.price + tax_amount + scenario.fees - scenario.down_payment - scenario.trade_in;

    if financed_principal <= 0.0 {
        return Ok(AmortizationResult::cash_purchase(tax_amount));
    }

    let term = f64::from(scenario.term_months);
    let (monthly_payment, total_interest) = if scenario.apr_pct == 0.0 {
        (financed_principal / term, 0.0)
    } else {
        let rate = monthly_rate(scenario.apr_pct);
        let growth = (1.0 + rate).powi(scenario.term_months as i32);
        let payment = financed_principal * rate * growth / (growth - 1.0);
        (payment, payment * term - financed_principal)
    };

    Ok(AmortizationResult {
        financed_principal,
        monthly_payment,
        total_interest,
        tax_amount,
    })
}

/// Outstanding balance at each month 0..=horizon. Month 0 is the balance
/// before any payment; every month strictly beyond the contractual term
/// reports zero regardless of arithmetic remainder.
///
/// A payment smaller than the first month's interest makes the balance
/// grow: an under-amortizing loan is simulated as-is, not treated as an
/// error.
pub fn project_loan_balance(
    principal: f64,
    apr_pct: f64,
    monthly_payment: f64,
    term_months: u32,
    horizon_months: u32,
) -> Result<Vec<f64>, EngineError> {
    require_positive_term(term_months)?;
    for (name, value) in [
        ("principal", principal),
        ("apr_pct", apr_pct),
        ("monthly_payment", monthly_payment),
    ] {
        require_finite(name, value)?;
    }

    let rate = monthly_rate(apr_pct);
    let mut balance = principal;
    let mut balances = Vec::with_capacity(horizon_months as usize + 1);
    for month in 0..=horizon_months {
        if month > term_months {
            balances.push(0.0);
            continue;
        }
        balances.push(balance.max(0.0));
        let interest = balance * rate;
        balance -= monthly_payment - interest;
    }

    Ok(balances)
}

/// Estimated asset value at each month 0..=horizon under `schedule`.
/// The month-0 entry already reflects one period of depreciation,
/// matching the reference curve this engine reproduces.
pub fn project_value(
    start_price: f64,
    schedule: &DepreciationSchedule,
    horizon_months: u32,
) -> Result<Vec<f64>, EngineError> {
    require_finite("start_price", start_price)?;
    if !schedule.is_finite() {
        return Err(EngineError::InvalidInput(
            "depreciation rates must be finite".to_string(),
        ));
    }

    let mut value = start_price;
    let mut values = Vec::with_capacity(horizon_months as usize + 1);
    for month in 0..=horizon_months {
        value *= 1.0 - schedule.monthly_rate(month);
        values.push(value);
    }

    Ok(values)
}

/// Full evaluation of one scenario over the comparison horizon:
/// amortization, both projections, and the ownership-cost metrics.
///
/// Loan payments stop once the term ends even when the horizon extends
/// further; insurance and fuel run for the whole horizon.
pub fn aggregate(
    scenario: &ScenarioInput,
    horizon_months: u32,
) -> Result<ScenarioAggregate, EngineError> {
    require_finite("monthly_insurance", scenario.monthly_insurance)?;
    require_finite("monthly_fuel", scenario.monthly_fuel)?;

    let amortization = compute_amortization(scenario)?;
    let loan_balance = project_loan_balance(
        amortization.financed_principal,
        scenario.apr_pct,
        amortization.monthly_payment,
        scenario.term_months,
        horizon_months,
    )?;
    let schedule = DepreciationSchedule::for_vehicle(scenario.condition);
    let estimated_value = project_value(scenario.price, &schedule, horizon_months)?;

    let running_costs = scenario.monthly_insurance + scenario.monthly_fuel;
    let paid_months = f64::from(scenario.term_months.min(horizon_months));
    let total_cost_over_horizon = amortization.monthly_payment * paid_months
        + scenario.down_payment
        + running_costs * f64::from(horizon_months);

    Ok(ScenarioAggregate {
        total_monthly_out_of_pocket: amortization.monthly_payment + running_costs,
        total_cost_over_horizon,
        amortization,
        loan_balance,
        estimated_value,
    })
}
