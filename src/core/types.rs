use serde::{Deserialize, Serialize};

/// Savings-capacity tier, as labelled by the external classifier.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsTier {
    Low,
    Medium,
    High,
}

impl SavingsTier {
    pub const ALL: [SavingsTier; 3] = [SavingsTier::Low, SavingsTier::Medium, SavingsTier::High];

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "low" => Some(SavingsTier::Low),
            "medium" => Some(SavingsTier::Medium),
            "high" => Some(SavingsTier::High),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SavingsTier::Low => "low",
            SavingsTier::Medium => "medium",
            SavingsTier::High => "high",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            SavingsTier::Low => 0,
            SavingsTier::Medium => 1,
            SavingsTier::High => 2,
        }
    }
}

/// Risk-appetite tier, as labelled by the external classifier.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [
        RiskTier::Conservative,
        RiskTier::Balanced,
        RiskTier::Aggressive,
    ];

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "conservative" => Some(RiskTier::Conservative),
            "balanced" => Some(RiskTier::Balanced),
            "aggressive" => Some(RiskTier::Aggressive),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Conservative => "conservative",
            RiskTier::Balanced => "balanced",
            RiskTier::Aggressive => "aggressive",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            RiskTier::Conservative => 0,
            RiskTier::Balanced => 1,
            RiskTier::Aggressive => 2,
        }
    }
}

/// SIP/RD/FD split in whole percent. Every row of the allocation table sums
/// to exactly 100.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Allocation {
    pub sip_pct: u32,
    pub rd_pct: u32,
    pub fd_pct: u32,
}

impl Allocation {
    pub const fn new(sip_pct: u32, rd_pct: u32, fd_pct: u32) -> Self {
        Self {
            sip_pct,
            rd_pct,
            fd_pct,
        }
    }

    pub fn total(self) -> u32 {
        self.sip_pct + self.rd_pct + self.fd_pct
    }
}

/// Household income/expense profile. Field set mirrors the classifier's
/// feature vector; all money figures are monthly.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialProfile {
    pub income: f64,
    pub age: u32,
    pub dependents: u32,
    pub occupation: String,
    pub city_tier: String,
    pub rent: f64,
    pub loan_repayment: f64,
    pub insurance: f64,
    pub groceries: f64,
    pub transport: f64,
    pub eating_out: f64,
    pub entertainment: f64,
    pub utilities: f64,
    pub healthcare: f64,
    pub education: f64,
    pub miscellaneous: f64,
}

impl FinancialProfile {
    /// Sum of all spending fields (everything except income and the
    /// demographic fields).
    pub fn expenses(&self) -> f64 {
        self.rent
            + self.loan_repayment
            + self.insurance
            + self.groceries
            + self.transport
            + self.eating_out
            + self.entertainment
            + self.utilities
            + self.healthcare
            + self.education
            + self.miscellaneous
    }

    /// Income minus expenses, truncated to a whole amount. May be negative;
    /// projection call sites floor the investable amount at zero.
    pub fn monthly_savings(&self) -> f64 {
        (self.income - self.expenses()).trunc()
    }
}

/// One year of the fixed-contribution projection, money rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyPoint {
    pub year: u32,
    pub sip: f64,
    pub rd: f64,
    pub fd: f64,
}

/// One month of the variable-income projection. `month` counts cumulatively
/// across repeated schedule cycles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub month: u32,
    pub sip: f64,
    pub rd: f64,
    pub fd: f64,
    pub total: f64,
}

/// Summary statistics over the simulated terminal corpora, integer-truncated.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct PremiumImpact {
    pub mean_corpus: i64,
    pub std_corpus: i64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum CoverStatus {
    #[serde(rename = "adequately insured")]
    AdequatelyInsured,
    #[serde(rename = "underinsured")]
    Underinsured,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InsuranceGap {
    pub required_cover: f64,
    pub gap: f64,
    pub status: CoverStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtTrapVerdict {
    pub debt_trap: bool,
    pub reasons: Vec<String>,
}
