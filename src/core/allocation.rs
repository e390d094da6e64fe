use super::types::{Allocation, RiskTier, SavingsTier};

/// Fallback split applied by callers when a label pair does not resolve.
/// Policy lives at the call site; the table itself never substitutes it.
pub const DEFAULT_ALLOCATION: Allocation = Allocation::new(50, 25, 25);

// Rows indexed by SavingsTier, columns by RiskTier
// (conservative, balanced, aggressive).
const TABLE: [[Allocation; 3]; 3] = [
    // low
    [
        Allocation::new(20, 40, 40),
        Allocation::new(40, 40, 20),
        Allocation::new(60, 30, 10),
    ],
    // medium
    [
        Allocation::new(30, 30, 40),
        Allocation::new(50, 25, 25),
        Allocation::new(70, 20, 10),
    ],
    // high
    [
        Allocation::new(40, 30, 30),
        Allocation::new(60, 20, 20),
        Allocation::new(80, 15, 5),
    ],
];

/// Resolve the SIP/RD/FD split for a tier pair. Total over the enum domain:
/// all nine combinations are defined.
pub fn resolve_allocation(savings: SavingsTier, risk: RiskTier) -> Allocation {
    TABLE[savings.index()][risk.index()]
}

/// Resolve from raw classifier labels. `None` marks an undefined combination;
/// callers decide between surfacing the error and [`DEFAULT_ALLOCATION`].
pub fn resolve_allocation_labels(savings: &str, risk: &str) -> Option<Allocation> {
    Some(resolve_allocation(SavingsTier::parse(savings)?, RiskTier::parse(risk)?))
}
