mod advice;
mod advisory;
mod allocation;
mod classify;
mod monte_carlo;
mod projection;
mod types;

pub use advice::{canonicalize, hash_advice};
pub use advisory::{
    DEFAULT_INVESTMENT_RETURN, detect_debt_trap, estimate_annual_premium, insurance_bundle,
    insurance_gap,
};
pub use allocation::{DEFAULT_ALLOCATION, resolve_allocation, resolve_allocation_labels};
pub use classify::{HeuristicClassifier, TierClassifier};
pub use monte_carlo::{
    ANNUAL_RETURN_STDDEV, DEFAULT_IMPACT_SIMS, DEFAULT_IMPACT_YEARS, MEAN_ANNUAL_RETURN,
    premium_impact,
};
pub use projection::{
    DEFAULT_HORIZON_YEARS, FD_ANNUAL_RATE, RD_ANNUAL_RATE, SIP_ANNUAL_RATE, VariableRates,
    fixed_projection, income_schedule, variable_projection,
};
pub use types::{
    Allocation, CoverStatus, DebtTrapVerdict, FinancialProfile, InsuranceGap, MonthlyPoint,
    PremiumImpact, RiskTier, SavingsTier, YearlyPoint,
};
