use super::types::{CoverStatus, DebtTrapVerdict, InsuranceGap};

/// Benchmark return debt is compared against when no override is given.
pub const DEFAULT_INVESTMENT_RETURN: f64 = 8.0;

const EMI_REASON: &str = "EMI exceeds 40% of minimum income";
const INTEREST_REASON: &str = "Loan interest higher than investment return";

/// Required life cover is the larger of 10x income and 3x income per family
/// member; the gap is whatever existing cover leaves unfunded.
pub fn insurance_gap(income: f64, family_size: u32, existing_cover: f64) -> InsuranceGap {
    let multiplier = 10.0_f64.max(family_size as f64 * 3.0);
    let required_cover = income * multiplier;
    let gap = (required_cover - existing_cover).max(0.0);
    let status = if gap == 0.0 {
        CoverStatus::AdequatelyInsured
    } else {
        CoverStatus::Underinsured
    };
    InsuranceGap {
        required_cover,
        gap,
        status,
    }
}

/// Product recommendations in fixed order, term cover always first.
pub fn insurance_bundle(age: u32, smoker: bool, family_size: u32, income: f64) -> Vec<&'static str> {
    let mut bundle = vec!["Term Life Insurance"];
    if age > 30 || family_size > 2 {
        bundle.push("Health Insurance (Family Floater)");
    }
    if smoker {
        bundle.push("Critical Illness Cover");
    }
    if income > 500_000.0 {
        bundle.push("Accidental Disability Rider");
    }
    bundle
}

/// Rule-based annual term-premium estimate: an age-banded base plus a small
/// income-linked component, scaled by BMI, smoker and pre-existing-condition
/// loadings.
pub fn estimate_annual_premium(
    age: u32,
    bmi: f64,
    smoker: bool,
    conditions: u32,
    income: f64,
) -> f64 {
    let base = match age {
        0..=25 => 6_000.0,
        26..=35 => 8_000.0,
        36..=45 => 12_000.0,
        46..=55 => 18_000.0,
        _ => 26_000.0,
    };

    let mut loading = 1.0;
    if bmi >= 30.0 {
        loading += 0.25;
    } else if bmi >= 25.0 {
        loading += 0.10;
    }
    if smoker {
        loading += 0.50;
    }
    loading += 0.15 * conditions as f64;

    let premium = (base + income.max(0.0) * 0.002) * loading;
    (premium * 100.0).round() / 100.0
}

/// Flags unsustainable debt service. Reason order is stable: the EMI check
/// first (skipped when minimum income is not positive), then the
/// interest-vs-return check.
pub fn detect_debt_trap(
    emi: f64,
    min_income: f64,
    loan_interest: f64,
    investment_return: f64,
) -> DebtTrapVerdict {
    let mut reasons = Vec::new();

    if min_income > 0.0 && emi > 0.4 * min_income {
        reasons.push(EMI_REASON.to_string());
    }
    if loan_interest > investment_return {
        reasons.push(INTEREST_REASON.to_string());
    }

    DebtTrapVerdict {
        debt_trap: !reasons.is_empty(),
        reasons,
    }
}
