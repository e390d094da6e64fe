use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::{
    DEFAULT_HORIZON_YEARS, DEFAULT_IMPACT_SIMS, DEFAULT_IMPACT_YEARS, DEFAULT_INVESTMENT_RETURN,
    DebtTrapVerdict, FinancialProfile, HeuristicClassifier, InsuranceGap, MonthlyPoint,
    TierClassifier, VariableRates, YearlyPoint, detect_debt_trap, estimate_annual_premium,
    fixed_projection, hash_advice, income_schedule, insurance_bundle, insurance_gap,
    premium_impact, resolve_allocation, variable_projection,
};

/// Seed used when a payload does not pin one; keeps responses reproducible.
const DEFAULT_SEED: u64 = 42;

#[derive(Clone)]
struct AppState {
    classifier: Arc<dyn TierClassifier + Send + Sync>,
}

/// Classifier feature vector plus the spending breakdown, field names as the
/// upstream schema spells them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct UserPayload {
    income: i64,
    age: u32,
    dependents: u32,
    occupation: String,
    #[serde(rename = "City_Tier")]
    city_tier: String,
    rent: i64,
    #[serde(rename = "Loan_Repayment")]
    loan_repayment: i64,
    insurance: i64,
    groceries: i64,
    transport: i64,
    #[serde(rename = "Eating_Out")]
    eating_out: i64,
    entertainment: i64,
    utilities: i64,
    healthcare: i64,
    education: i64,
    miscellaneous: i64,
}

#[derive(Debug, Deserialize)]
struct VariableIncomePayload {
    #[serde(flatten)]
    user: UserPayload,
    #[serde(rename = "Peak_Income")]
    peak_income: u32,
    #[serde(rename = "Lean_Income")]
    lean_income: u32,
    #[serde(rename = "Zero_Income_Months", default)]
    zero_income_months: i32,
}

#[derive(Debug, Deserialize)]
struct MissedPaymentPayload {
    #[serde(flatten)]
    user: UserPayload,
    #[serde(rename = "Missed_Months")]
    missed_months: u32,
}

#[derive(Debug, Deserialize)]
struct DebtTrapPayload {
    #[serde(rename = "Loan_Repayment")]
    loan_repayment: i64,
    #[serde(rename = "Peak_Income")]
    peak_income: u32,
    #[serde(rename = "Lean_Income")]
    lean_income: u32,
    #[serde(rename = "Zero_Income_Months", default)]
    zero_income_months: i32,
    #[serde(rename = "Loan_Interest", default = "default_loan_interest")]
    loan_interest: f64,
}

fn default_loan_interest() -> f64 {
    24.0
}

#[derive(Debug, Deserialize)]
struct InsurancePayload {
    age: u32,
    bmi: f64,
    smoker: u32,
    conditions: u32,
    income: i64,
    family_size: u32,
    existing_cover: i64,
    monthly_savings: i64,
    #[serde(default)]
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct AdvicePayload {
    text: String,
}

#[derive(Debug, Serialize)]
struct MonthlyInvestment {
    sip: f64,
    rd: f64,
    fd: f64,
}

#[derive(Debug, Serialize)]
struct InvestmentGraphResponse {
    saving_capacity: &'static str,
    risk_profile: &'static str,
    monthly_savings: f64,
    monthly_investment: MonthlyInvestment,
    yearly_projection: Vec<YearlyPoint>,
}

#[derive(Debug, Serialize)]
struct VariableIncomeResponse {
    saving_capacity: &'static str,
    risk_profile: &'static str,
    income_schedule: Vec<u32>,
    expenses: f64,
    monthly_projection: Vec<MonthlyPoint>,
}

#[derive(Debug, Serialize)]
struct MissedPaymentResponse {
    baseline: Vec<MonthlyPoint>,
    interrupted: Vec<MonthlyPoint>,
    baseline_corpus: f64,
    interrupted_corpus: f64,
    shortfall: f64,
}

#[derive(Debug, Serialize)]
struct DebtTrapResponse {
    #[serde(flatten)]
    verdict: DebtTrapVerdict,
    min_income: u32,
    investment_return: f64,
}

#[derive(Debug, Serialize)]
struct InsuranceBundleResponse {
    bundle: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct PremiumImpactResponse {
    annual_premium: f64,
    mean_corpus: i64,
    std_corpus: i64,
    years: u32,
    sims: u32,
}

#[derive(Debug, Serialize)]
struct AdviceHashResponse {
    hash: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn profile_from_payload(payload: &UserPayload) -> FinancialProfile {
    FinancialProfile {
        income: payload.income as f64,
        age: payload.age,
        dependents: payload.dependents,
        occupation: payload.occupation.clone(),
        city_tier: payload.city_tier.clone(),
        rent: payload.rent as f64,
        loan_repayment: payload.loan_repayment as f64,
        insurance: payload.insurance as f64,
        groceries: payload.groceries as f64,
        transport: payload.transport as f64,
        eating_out: payload.eating_out as f64,
        entertainment: payload.entertainment as f64,
        utilities: payload.utilities as f64,
        healthcare: payload.healthcare as f64,
        education: payload.education as f64,
        miscellaneous: payload.miscellaneous as f64,
    }
}

fn validate_month_count(name: &str, months: i64) -> Result<(), String> {
    if !(0..=12).contains(&months) {
        return Err(format!("{name} must be between 0 and 12"));
    }
    Ok(())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn build_investment_graph(
    profile: &FinancialProfile,
    classifier: &dyn TierClassifier,
) -> InvestmentGraphResponse {
    let (savings_tier, risk_tier) = classifier.classify(profile);
    let alloc = resolve_allocation(savings_tier, risk_tier);

    let monthly_savings = profile.monthly_savings();
    // Deficit households report negative savings but invest nothing.
    let investable = monthly_savings.max(0.0);
    let sip_m = investable * alloc.sip_pct as f64 / 100.0;
    let rd_m = investable * alloc.rd_pct as f64 / 100.0;
    let fd_m = investable * alloc.fd_pct as f64 / 100.0;

    InvestmentGraphResponse {
        saving_capacity: savings_tier.label(),
        risk_profile: risk_tier.label(),
        monthly_savings: round2(monthly_savings),
        monthly_investment: MonthlyInvestment {
            sip: round2(sip_m),
            rd: round2(rd_m),
            fd: round2(fd_m),
        },
        yearly_projection: fixed_projection(sip_m, rd_m, fd_m, DEFAULT_HORIZON_YEARS),
    }
}

fn build_variable_income_graph(
    payload: &VariableIncomePayload,
    classifier: &dyn TierClassifier,
) -> Result<VariableIncomeResponse, String> {
    validate_month_count("Zero_Income_Months", payload.zero_income_months as i64)?;

    let profile = profile_from_payload(&payload.user);
    let (savings_tier, risk_tier) = classifier.classify(&profile);
    let alloc = resolve_allocation(savings_tier, risk_tier);

    let schedule = income_schedule(
        payload.peak_income,
        payload.lean_income,
        payload.zero_income_months,
    );
    let expenses = profile.expenses();
    let projection = variable_projection(
        &schedule,
        expenses,
        alloc,
        VariableRates::default(),
        DEFAULT_HORIZON_YEARS,
    );

    Ok(VariableIncomeResponse {
        saving_capacity: savings_tier.label(),
        risk_profile: risk_tier.label(),
        income_schedule: schedule,
        expenses: round2(expenses),
        monthly_projection: projection,
    })
}

fn build_missed_payment_impact(
    payload: &MissedPaymentPayload,
    classifier: &dyn TierClassifier,
) -> Result<MissedPaymentResponse, String> {
    validate_month_count("Missed_Months", payload.missed_months as i64)?;

    let profile = profile_from_payload(&payload.user);
    let (savings_tier, risk_tier) = classifier.classify(&profile);
    let alloc = resolve_allocation(savings_tier, risk_tier);
    let expenses = profile.expenses();

    let income = profile.income.max(0.0) as u32;
    let baseline_schedule = vec![income; 12];
    let mut interrupted_schedule = baseline_schedule.clone();
    for month in interrupted_schedule
        .iter_mut()
        .take(payload.missed_months as usize)
    {
        *month = 0;
    }

    let rates = VariableRates::default();
    let baseline = variable_projection(&baseline_schedule, expenses, alloc, rates, 1);
    let interrupted = variable_projection(&interrupted_schedule, expenses, alloc, rates, 1);

    let baseline_corpus = baseline.last().map(|p| p.total).unwrap_or(0.0);
    let interrupted_corpus = interrupted.last().map(|p| p.total).unwrap_or(0.0);

    Ok(MissedPaymentResponse {
        baseline,
        interrupted,
        baseline_corpus,
        interrupted_corpus,
        shortfall: round2(baseline_corpus - interrupted_corpus),
    })
}

fn build_debt_trap(payload: &DebtTrapPayload) -> Result<DebtTrapResponse, String> {
    validate_month_count("Zero_Income_Months", payload.zero_income_months as i64)?;

    let schedule = income_schedule(
        payload.peak_income,
        payload.lean_income,
        payload.zero_income_months,
    );
    // Any zero-income month zeroes the minimum and disables the EMI rule.
    let min_income = schedule.iter().copied().min().unwrap_or(0);

    let verdict = detect_debt_trap(
        payload.loan_repayment as f64,
        min_income as f64,
        payload.loan_interest,
        DEFAULT_INVESTMENT_RETURN,
    );

    Ok(DebtTrapResponse {
        verdict,
        min_income,
        investment_return: DEFAULT_INVESTMENT_RETURN,
    })
}

fn build_insurance_gap(payload: &InsurancePayload) -> InsuranceGap {
    insurance_gap(
        payload.income as f64,
        payload.family_size,
        payload.existing_cover as f64,
    )
}

fn build_insurance_bundle(payload: &InsurancePayload) -> InsuranceBundleResponse {
    InsuranceBundleResponse {
        bundle: insurance_bundle(
            payload.age,
            payload.smoker != 0,
            payload.family_size,
            payload.income as f64,
        ),
    }
}

fn build_premium_impact(payload: &InsurancePayload) -> Result<PremiumImpactResponse, String> {
    if !payload.bmi.is_finite() || payload.bmi < 0.0 {
        return Err("bmi must be a non-negative number".to_string());
    }

    let annual_premium = estimate_annual_premium(
        payload.age,
        payload.bmi,
        payload.smoker != 0,
        payload.conditions,
        payload.income as f64,
    );

    let mut rng = ChaCha20Rng::seed_from_u64(payload.seed.unwrap_or(DEFAULT_SEED));
    let impact = premium_impact(
        payload.monthly_savings as f64,
        annual_premium,
        DEFAULT_IMPACT_YEARS,
        DEFAULT_IMPACT_SIMS,
        &mut rng,
    );

    Ok(PremiumImpactResponse {
        annual_premium,
        mean_corpus: impact.mean_corpus,
        std_corpus: impact.std_corpus,
        years: DEFAULT_IMPACT_YEARS,
        sims: DEFAULT_IMPACT_SIMS,
    })
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let state = AppState {
        classifier: Arc::new(HeuristicClassifier),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("advisory API listening on http://{addr}");

    axum::serve(listener, app).await
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/investment-graph", post(investment_graph_handler))
        .route("/variable-income-graph", post(variable_income_handler))
        .route("/missed-payment-impact", post(missed_payment_handler))
        .route("/debt-trap", post(debt_trap_handler))
        .route("/insurance-gap", post(insurance_gap_handler))
        .route("/insurance-bundle", post(insurance_bundle_handler))
        .route("/premium-impact", post(premium_impact_handler))
        .route("/advice-hash", post(advice_hash_handler))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn root_handler() -> Response {
    json_response(
        StatusCode::OK,
        serde_json::json!({ "status": "backend is running" }),
    )
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn investment_graph_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Response {
    let profile = profile_from_payload(&payload);
    let response = build_investment_graph(&profile, state.classifier.as_ref());
    tracing::debug!(
        saving_capacity = response.saving_capacity,
        risk_profile = response.risk_profile,
        "investment graph computed"
    );
    json_response(StatusCode::OK, response)
}

async fn variable_income_handler(
    State(state): State<AppState>,
    Json(payload): Json<VariableIncomePayload>,
) -> Response {
    match build_variable_income_graph(&payload, state.classifier.as_ref()) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
    }
}

async fn missed_payment_handler(
    State(state): State<AppState>,
    Json(payload): Json<MissedPaymentPayload>,
) -> Response {
    match build_missed_payment_impact(&payload, state.classifier.as_ref()) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
    }
}

async fn debt_trap_handler(Json(payload): Json<DebtTrapPayload>) -> Response {
    match build_debt_trap(&payload) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
    }
}

async fn insurance_gap_handler(Json(payload): Json<InsurancePayload>) -> Response {
    json_response(StatusCode::OK, build_insurance_gap(&payload))
}

async fn insurance_bundle_handler(Json(payload): Json<InsurancePayload>) -> Response {
    json_response(StatusCode::OK, build_insurance_bundle(&payload))
}

async fn premium_impact_handler(Json(payload): Json<InsurancePayload>) -> Response {
    match build_premium_impact(&payload) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
    }
}

async fn advice_hash_handler(Json(payload): Json<AdvicePayload>) -> Response {
    json_response(
        StatusCode::OK,
        AdviceHashResponse {
            hash: hash_advice(&payload.text),
        },
    )
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
