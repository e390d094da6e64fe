use super::types::{FinancialProfile, RiskTier, SavingsTier};

/// Capability seam for the tier classifiers. The engine only needs labels;
/// where they come from (a trained model, a remote service, rules) is the
/// implementor's business.
pub trait TierClassifier {
    fn classify(&self, profile: &FinancialProfile) -> (SavingsTier, RiskTier);
}

/// Deterministic rule-based classifier shipped as the in-process
/// implementation: savings capacity from the savings-to-income ratio, risk
/// appetite from age and dependents.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    fn savings_tier(profile: &FinancialProfile) -> SavingsTier {
        if profile.income <= 0.0 {
            return SavingsTier::Low;
        }
        let ratio = (profile.income - profile.expenses()) / profile.income;
        if ratio < 0.10 {
            SavingsTier::Low
        } else if ratio < 0.30 {
            SavingsTier::Medium
        } else {
            SavingsTier::High
        }
    }

    fn risk_tier(profile: &FinancialProfile) -> RiskTier {
        if profile.age < 35 && profile.dependents <= 1 {
            RiskTier::Aggressive
        } else if profile.age < 50 {
            RiskTier::Balanced
        } else {
            RiskTier::Conservative
        }
    }
}

impl TierClassifier for HeuristicClassifier {
    fn classify(&self, profile: &FinancialProfile) -> (SavingsTier, RiskTier) {
        (
            Self::savings_tier(profile),
            Self::risk_tier(profile),
        )
    }
}
