use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    self, AmortizationResult, DEFAULT_HORIZON_MONTHS, ScenarioAggregate, ScenarioInput,
    VehicleCondition,
};

/// The reference UI compares three offers side by side; the API keeps
/// the same ceiling.
const MAX_COMPARE_SCENARIOS: usize = 3;

const MAX_HORIZON_MONTHS: u32 = 600;
const MAX_TERM_MONTHS: u32 = 600;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliVehicleCondition {
    New,
    Used,
}

impl From<CliVehicleCondition> for VehicleCondition {
    fn from(value: CliVehicleCondition) -> Self {
        match value {
            CliVehicleCondition::New => VehicleCondition::New,
            CliVehicleCondition::Used => VehicleCondition::Used,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
enum ApiVehicleCondition {
    #[serde(alias = "NEW")]
    New,
    #[serde(alias = "USED", alias = "pre-owned", alias = "preOwned")]
    Used,
}

impl From<ApiVehicleCondition> for CliVehicleCondition {
    fn from(value: ApiVehicleCondition) -> Self {
        match value {
            ApiVehicleCondition::New => CliVehicleCondition::New,
            ApiVehicleCondition::Used => CliVehicleCondition::Used,
        }
    }
}

impl From<VehicleCondition> for ApiVehicleCondition {
    fn from(value: VehicleCondition) -> Self {
        match value {
            VehicleCondition::New => ApiVehicleCondition::New,
            VehicleCondition::Used => ApiVehicleCondition::Used,
        }
    }
}

/// Flat single-scenario request, usable as a GET query string.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct AggregatePayload {
    label: Option<String>,
    price: Option<f64>,
    down_payment: Option<f64>,
    trade_in: Option<f64>,
    tax_rate: Option<f64>,
    fees: Option<f64>,
    interest_rate: Option<f64>,
    term_months: Option<u32>,
    monthly_insurance: Option<f64>,
    monthly_fuel: Option<f64>,
    condition: Option<ApiVehicleCondition>,
    horizon_months: Option<u32>,
}

/// One offer inside a comparison; unset fields fall back to the
/// comparison-level globals and then to the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ScenarioPayload {
    label: Option<String>,
    price: Option<f64>,
    down_payment: Option<f64>,
    trade_in: Option<f64>,
    interest_rate: Option<f64>,
    term_months: Option<u32>,
    monthly_insurance: Option<f64>,
    monthly_fuel: Option<f64>,
    condition: Option<ApiVehicleCondition>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ComparePayload {
    tax_rate: Option<f64>,
    fees: Option<f64>,
    down_payment: Option<f64>,
    horizon_months: Option<u32>,
    scenarios: Vec<ScenarioPayload>,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "carcost",
    about = "Vehicle financing comparison calculator (loan amortization + depreciation projection)"
)]
struct Cli {
    #[arg(long, help = "Vehicle purchase price before tax and fees")]
    price: f64,
    #[arg(
        long,
        default_value_t = 6.49,
        help = "Annual interest rate (APR) in percent; 0 means an interest-free loan"
    )]
    interest_rate: f64,
    #[arg(long, default_value_t = 60, help = "Loan term in months")]
    term_months: u32,
    #[arg(long, default_value_t = 6.5, help = "Sales tax rate in percent")]
    tax_rate: f64,
    #[arg(
        long,
        default_value_t = 500.0,
        help = "Flat dealer/registration fees in dollars"
    )]
    fees: f64,
    #[arg(long, default_value_t = 20_000.0, help = "Cash down payment in dollars")]
    down_payment: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Trade-in value credited against the purchase"
    )]
    trade_in: f64,
    #[arg(long, default_value_t = 155.0, help = "Monthly insurance cost")]
    monthly_insurance: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Monthly fuel or charging cost; 0 if charging is free"
    )]
    monthly_fuel: f64,
    #[arg(
        long,
        value_enum,
        default_value_t = CliVehicleCondition::Used,
        help = "Vehicle condition selecting the depreciation curve"
    )]
    condition: CliVehicleCondition,
    #[arg(
        long,
        default_value_t = DEFAULT_HORIZON_MONTHS,
        help = "Comparison window in months"
    )]
    horizon_months: u32,
}

#[derive(Debug)]
struct AggregateRequest {
    label: String,
    scenario: ScenarioInput,
    horizon_months: u32,
}

#[derive(Debug)]
struct CompareRequest {
    horizon_months: u32,
    scenarios: Vec<(String, ScenarioInput)>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioEcho {
    price: f64,
    down_payment: f64,
    trade_in: f64,
    tax_rate: f64,
    fees: f64,
    interest_rate: f64,
    term_months: u32,
    monthly_insurance: f64,
    monthly_fuel: f64,
    condition: ApiVehicleCondition,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioReport {
    label: String,
    inputs: ScenarioEcho,
    amortization: AmortizationResult,
    total_monthly_out_of_pocket: f64,
    total_cost_over_horizon: f64,
    loan_balance: Vec<f64>,
    estimated_value: Vec<f64>,
    first_positive_equity_month: Option<u32>,
    monthly_payment_delta: Option<f64>,
    total_monthly_delta: Option<f64>,
    total_cost_delta: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AggregateResponse {
    horizon_months: u32,
    report: ScenarioReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompareResponse {
    horizon_months: u32,
    baseline_label: String,
    scenarios: Vec<ScenarioReport>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn validate_horizon(horizon_months: u32) -> Result<(), String> {
    if horizon_months > MAX_HORIZON_MONTHS {
        return Err(format!(
            "--horizon-months must be <= {MAX_HORIZON_MONTHS}"
        ));
    }
    Ok(())
}

fn build_scenario(cli: Cli) -> Result<ScenarioInput, String> {
    if !cli.price.is_finite() || cli.price <= 0.0 {
        return Err("--price must be > 0".to_string());
    }

    if !cli.down_payment.is_finite() || cli.down_payment < 0.0 {
        return Err("--down-payment must be >= 0".to_string());
    }

    if !cli.trade_in.is_finite() || cli.trade_in < 0.0 {
        return Err("--trade-in must be >= 0".to_string());
    }

    if !(0.0..=100.0).contains(&cli.tax_rate) {
        return Err("--tax-rate must be between 0 and 100".to_string());
    }

    if !cli.fees.is_finite() || cli.fees < 0.0 {
        return Err("--fees must be >= 0".to_string());
    }

    if !(0.0..=100.0).contains(&cli.interest_rate) {
        return Err("--interest-rate must be between 0 and 100".to_string());
    }

    if cli.term_months == 0 || cli.term_months > MAX_TERM_MONTHS {
        return Err(format!(
            "--term-months must be between 1 and {MAX_TERM_MONTHS}"
        ));
    }

    if !cli.monthly_insurance.is_finite() || cli.monthly_insurance < 0.0 {
        return Err("--monthly-insurance must be >= 0".to_string());
    }

    if !cli.monthly_fuel.is_finite() || cli.monthly_fuel < 0.0 {
        return Err("--monthly-fuel must be >= 0".to_string());
    }

    Ok(ScenarioInput {
        price: cli.price,
        down_payment: cli.down_payment,
        trade_in: cli.trade_in,
        tax_rate_pct: cli.tax_rate,
        fees: cli.fees,
        apr_pct: cli.interest_rate,
        term_months: cli.term_months,
        monthly_insurance: cli.monthly_insurance,
        monthly_fuel: cli.monthly_fuel,
        condition: cli.condition.into(),
    })
}

fn default_cli_for_api() -> Cli {
    Cli {
        price: 31_500.0,
        interest_rate: 6.49,
        term_months: 60,
        tax_rate: 6.5,
        fees: 500.0,
        down_payment: 20_000.0,
        trade_in: 0.0,
        monthly_insurance: 155.0,
        monthly_fuel: 0.0,
        condition: CliVehicleCondition::Used,
        horizon_months: DEFAULT_HORIZON_MONTHS,
    }
}

fn apply_scenario_overrides(cli: &mut Cli, payload: &ScenarioPayload) {
    if let Some(v) = payload.price {
        cli.price = v;
    }
    if let Some(v) = payload.down_payment {
        cli.down_payment = v;
    }
    if let Some(v) = payload.trade_in {
        cli.trade_in = v;
    }
    if let Some(v) = payload.interest_rate {
        cli.interest_rate = v;
    }
    if let Some(v) = payload.term_months {
        cli.term_months = v;
    }
    if let Some(v) = payload.monthly_insurance {
        cli.monthly_insurance = v;
    }
    if let Some(v) = payload.monthly_fuel {
        cli.monthly_fuel = v;
    }
    if let Some(v) = payload.condition {
        cli.condition = v.into();
    }
}

fn default_label(index: usize) -> String {
    format!("Option {}", (b'A' + index as u8) as char)
}

fn aggregate_request_from_payload(payload: AggregatePayload) -> Result<AggregateRequest, String> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.price {
        cli.price = v;
    }
    if let Some(v) = payload.down_payment {
        cli.down_payment = v;
    }
    if let Some(v) = payload.trade_in {
        cli.trade_in = v;
    }
    if let Some(v) = payload.tax_rate {
        cli.tax_rate = v;
    }
    if let Some(v) = payload.fees {
        cli.fees = v;
    }
    if let Some(v) = payload.interest_rate {
        cli.interest_rate = v;
    }
    if let Some(v) = payload.term_months {
        cli.term_months = v;
    }
    if let Some(v) = payload.monthly_insurance {
        cli.monthly_insurance = v;
    }
    if let Some(v) = payload.monthly_fuel {
        cli.monthly_fuel = v;
    }
    if let Some(v) = payload.condition {
        cli.condition = v.into();
    }
    if let Some(v) = payload.horizon_months {
        cli.horizon_months = v;
    }

    validate_horizon(cli.horizon_months)?;
    let horizon_months = cli.horizon_months;
    let scenario = build_scenario(cli)?;

    Ok(AggregateRequest {
        label: payload.label.unwrap_or_else(|| default_label(0)),
        scenario,
        horizon_months,
    })
}

fn compare_request_from_payload(payload: ComparePayload) -> Result<CompareRequest, String> {
    if payload.scenarios.is_empty() {
        return Err("at least one scenario is required".to_string());
    }
    if payload.scenarios.len() > MAX_COMPARE_SCENARIOS {
        return Err(format!(
            "at most {MAX_COMPARE_SCENARIOS} scenarios can be compared"
        ));
    }

    let horizon_months = payload.horizon_months.unwrap_or(DEFAULT_HORIZON_MONTHS);
    validate_horizon(horizon_months)?;

    let mut scenarios = Vec::with_capacity(payload.scenarios.len());
    for (index, entry) in payload.scenarios.iter().enumerate() {
        let mut cli = default_cli_for_api();
        // Comparison-level globals first, then per-scenario overrides;
        // the core always receives an explicit per-scenario down payment.
        if let Some(v) = payload.tax_rate {
            cli.tax_rate = v;
        }
        if let Some(v) = payload.fees {
            cli.fees = v;
        }
        if let Some(v) = payload.down_payment {
            cli.down_payment = v;
        }
        apply_scenario_overrides(&mut cli, entry);

        let label = entry
            .label
            .clone()
            .unwrap_or_else(|| default_label(index));
        let scenario =
            build_scenario(cli).map_err(|e| format!("scenario {}: {e}", index + 1))?;
        scenarios.push((label, scenario));
    }

    Ok(CompareRequest {
        horizon_months,
        scenarios,
    })
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route(
            "/api/aggregate",
            get(aggregate_get_handler).post(aggregate_post_handler),
        )
        .route("/api/compare", post(compare_post_handler))
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    log::info!("listening on {addr}");
    println!("carcost HTTP API listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/api/aggregate");

    axum::serve(listener, app).await
}

/// One-shot evaluation of a single scenario from command-line flags,
/// printed as pretty JSON.
pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    validate_horizon(cli.horizon_months)?;
    let horizon_months = cli.horizon_months;
    let scenario = build_scenario(cli)?;

    let result = core::aggregate(&scenario, horizon_months).map_err(|e| e.to_string())?;
    let response = AggregateResponse {
        horizon_months,
        report: build_scenario_report(default_label(0), &scenario, result, None),
    };

    let json = serde_json::to_string_pretty(&response).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn aggregate_get_handler(Query(payload): Query<AggregatePayload>) -> Response {
    aggregate_handler_impl(payload).await
}

async fn aggregate_post_handler(Json(payload): Json<AggregatePayload>) -> Response {
    aggregate_handler_impl(payload).await
}

async fn aggregate_handler_impl(payload: AggregatePayload) -> Response {
    let request = match aggregate_request_from_payload(payload) {
        Ok(request) => request,
        Err(msg) => {
            log::warn!("rejected aggregate request: {msg}");
            return error_response(StatusCode::BAD_REQUEST, &msg);
        }
    };

    match core::aggregate(&request.scenario, request.horizon_months) {
        Ok(result) => json_response(
            StatusCode::OK,
            AggregateResponse {
                horizon_months: request.horizon_months,
                report: build_scenario_report(request.label, &request.scenario, result, None),
            },
        ),
        Err(e) => {
            log::warn!("aggregate failed: {e}");
            error_response(StatusCode::BAD_REQUEST, &e.to_string())
        }
    }
}

async fn compare_post_handler(Json(payload): Json<ComparePayload>) -> Response {
    let request = match compare_request_from_payload(payload) {
        Ok(request) => request,
        Err(msg) => {
            log::warn!("rejected compare request: {msg}");
            return error_response(StatusCode::BAD_REQUEST, &msg);
        }
    };

    let mut evaluated = Vec::with_capacity(request.scenarios.len());
    for (label, scenario) in &request.scenarios {
        match core::aggregate(scenario, request.horizon_months) {
            Ok(result) => evaluated.push((label.clone(), scenario, result)),
            Err(e) => {
                log::warn!("compare failed for {label}: {e}");
                return error_response(StatusCode::BAD_REQUEST, &format!("{label}: {e}"));
            }
        }
    }

    json_response(
        StatusCode::OK,
        build_compare_response(request.horizon_months, evaluated),
    )
}

fn build_compare_response(
    horizon_months: u32,
    evaluated: Vec<(String, &ScenarioInput, ScenarioAggregate)>,
) -> CompareResponse {
    let baseline = evaluated[0].2.clone();
    let baseline_label = evaluated[0].0.clone();

    let scenarios = evaluated
        .into_iter()
        .enumerate()
        .map(|(index, (label, scenario, result))| {
            let reference = if index > 0 { Some(&baseline) } else { None };
            build_scenario_report(label, scenario, result, reference)
        })
        .collect();

    CompareResponse {
        horizon_months,
        baseline_label,
        scenarios,
    }
}

fn build_scenario_report(
    label: String,
    scenario: &ScenarioInput,
    result: ScenarioAggregate,
    baseline: Option<&ScenarioAggregate>,
) -> ScenarioReport {
    ScenarioReport {
        label,
        inputs: ScenarioEcho {
            price: scenario.price,
            down_payment: scenario.down_payment,
            trade_in: scenario.trade_in,
            tax_rate: scenario.tax_rate_pct,
            fees: scenario.fees,
            interest_rate: scenario.apr_pct,
            term_months: scenario.term_months,
            monthly_insurance: scenario.monthly_insurance,
            monthly_fuel: scenario.monthly_fuel,
            condition: scenario.condition.into(),
        },
        first_positive_equity_month: first_positive_equity_month(
            &result.loan_balance,
            &result.estimated_value,
        ),
        monthly_payment_delta: baseline.map(|b| {
            result.amortization.monthly_payment - b.amortization.monthly_payment
        }),
        total_monthly_delta: baseline
            .map(|b| result.total_monthly_out_of_pocket - b.total_monthly_out_of_pocket),
        total_cost_delta: baseline
            .map(|b| result.total_cost_over_horizon - b.total_cost_over_horizon),
        amortization: result.amortization,
        total_monthly_out_of_pocket: result.total_monthly_out_of_pocket,
        total_cost_over_horizon: result.total_cost_over_horizon,
        loan_balance: result.loan_balance,
        estimated_value: result.estimated_value,
    }
}

/// Earliest month where the estimated value covers the outstanding
/// balance, i.e. the owner is not underwater.
fn first_positive_equity_month(loan_balance: &[f64], estimated_value: &[f64]) -> Option<u32> {
    loan_balance
        .iter()
        .zip(estimated_value)
        .position(|(balance, value)| value >= balance)
        .map(|month| month as u32)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn aggregate_request_from_json(json: &str) -> Result<AggregateRequest, String> {
    let payload = serde_json::from_str::<AggregatePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    aggregate_request_from_payload(payload)
}

#[cfg(test)]
fn compare_request_from_json(json: &str) -> Result<CompareRequest, String> {
    let payload = serde_json::from_str::<ComparePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    compare_request_from_payload(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn aggregate_payload_defaults_mirror_the_reference_app() {
        let request = aggregate_request_from_json("{}").expect("defaults are valid");

        assert_eq!(request.label, "Option A");
        assert_eq!(request.horizon_months, 60);
        assert_approx(request.scenario.price, 31_500.0);
        assert_approx(request.scenario.down_payment, 20_000.0);
        assert_approx(request.scenario.tax_rate_pct, 6.5);
        assert_approx(request.scenario.fees, 500.0);
        assert_approx(request.scenario.apr_pct, 6.49);
        assert_eq!(request.scenario.term_months, 60);
        assert_eq!(request.scenario.condition, VehicleCondition::Used);
    }

    #[test]
    fn aggregate_payload_overrides_are_applied() {
        let request = aggregate_request_from_json(
            r#"{
                "price": 46000,
                "interestRate": 1.99,
                "condition": "new",
                "monthlyFuel": 96,
                "horizonMonths": 72
            }"#,
        )
        .expect("valid payload");

        assert_approx(request.scenario.price, 46_000.0);
        assert_approx(request.scenario.apr_pct, 1.99);
        assert_eq!(request.scenario.condition, VehicleCondition::New);
        assert_approx(request.scenario.monthly_fuel, 96.0);
        assert_eq!(request.horizon_months, 72);
    }

    #[test]
    fn aggregate_payload_rejects_invalid_fields() {
        for json in [
            r#"{"price": -1}"#,
            r#"{"taxRate": 150}"#,
            r#"{"termMonths": 0}"#,
            r#"{"downPayment": -500}"#,
            r#"{"interestRate": 101}"#,
            r#"{"horizonMonths": 100000}"#,
        ] {
            assert!(
                aggregate_request_from_json(json).is_err(),
                "payload must be rejected: {json}"
            );
        }
    }

    #[test]
    fn compare_payload_globals_flow_into_each_scenario() {
        let request = compare_request_from_json(
            r#"{
                "taxRate": 8.0,
                "fees": 250,
                "downPayment": 5000,
                "scenarios": [
                    {"price": 31500},
                    {"price": 46000, "interestRate": 1.99, "condition": "new", "downPayment": 7500}
                ]
            }"#,
        )
        .expect("valid payload");

        assert_eq!(request.scenarios.len(), 2);

        let (label_a, scenario_a) = &request.scenarios[0];
        assert_eq!(label_a, "Option A");
        assert_approx(scenario_a.tax_rate_pct, 8.0);
        assert_approx(scenario_a.fees, 250.0);
        assert_approx(scenario_a.down_payment, 5_000.0);

        // Per-scenario override wins over the shared down payment.
        let (label_b, scenario_b) = &request.scenarios[1];
        assert_eq!(label_b, "Option B");
        assert_approx(scenario_b.down_payment, 7_500.0);
        assert_eq!(scenario_b.condition, VehicleCondition::New);
    }

    #[test]
    fn compare_payload_enforces_scenario_count() {
        let err = compare_request_from_json(r#"{"scenarios": []}"#).expect_err("must reject");
        assert!(err.contains("at least one"));

        let err = compare_request_from_json(
            r#"{"scenarios": [{}, {}, {}, {}]}"#,
        )
        .expect_err("must reject");
        assert!(err.contains("at most 3"));
    }

    #[test]
    fn compare_payload_names_the_offending_scenario() {
        let err = compare_request_from_json(
            r#"{"scenarios": [{}, {"price": -1}]}"#,
        )
        .expect_err("must reject");
        assert!(err.starts_with("scenario 2:"), "got: {err}");
    }

    #[test]
    fn reports_carry_deltas_against_the_first_scenario() {
        let request = compare_request_from_json(
            r#"{
                "scenarios": [
                    {"price": 31500, "monthlyInsurance": 155},
                    {"price": 46000, "interestRate": 1.99, "condition": "new"}
                ]
            }"#,
        )
        .expect("valid payload");

        let evaluated: Vec<_> = request
            .scenarios
            .iter()
            .map(|(label, scenario)| {
                let result =
                    core::aggregate(scenario, request.horizon_months).expect("valid scenario");
                (label.clone(), scenario, result)
            })
            .collect();
        let response = build_compare_response(request.horizon_months, evaluated);

        assert_eq!(response.baseline_label, "Option A");
        let first = &response.scenarios[0];
        assert!(first.monthly_payment_delta.is_none());
        assert!(first.total_cost_delta.is_none());

        let second = &response.scenarios[1];
        let expected_delta = second.amortization.monthly_payment
            - first.amortization.monthly_payment;
        assert_approx(
            second.monthly_payment_delta.expect("delta expected"),
            expected_delta,
        );
        assert!(second.total_cost_delta.expect("delta expected") > 0.0);
    }

    #[test]
    fn equity_month_is_first_non_underwater_index() {
        assert_eq!(
            first_positive_equity_month(&[100.0, 80.0, 60.0], &[50.0, 70.0, 90.0]),
            Some(2)
        );
        assert_eq!(
            first_positive_equity_month(&[0.0, 0.0], &[10.0, 9.0]),
            Some(0)
        );
        assert_eq!(
            first_positive_equity_month(&[100.0, 90.0], &[50.0, 40.0]),
            None
        );
    }

    #[test]
    fn report_serializes_with_camel_case_keys() {
        let request = aggregate_request_from_json("{}").expect("defaults are valid");
        let result =
            core::aggregate(&request.scenario, request.horizon_months).expect("valid scenario");
        let report = build_scenario_report(request.label, &request.scenario, result, None);

        let value = serde_json::to_value(&report).expect("serializable");
        let object = value.as_object().expect("object");
        assert!(object.contains_key("totalMonthlyOutOfPocket"));
        assert!(object.contains_key("totalCostOverHorizon"));
        assert!(object.contains_key("loanBalance"));
        assert!(object.contains_key("estimatedValue"));
        assert!(object.contains_key("firstPositiveEquityMonth"));
        assert_eq!(object["inputs"]["condition"], "used");
        assert_eq!(
            object["loanBalance"].as_array().expect("array").len(),
            61
        );
    }
}
