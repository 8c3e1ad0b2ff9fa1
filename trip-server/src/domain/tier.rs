//! Budget tiers.

use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// Price band used to filter catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BudgetTier {
    Budget,
    MidRange,
    Luxury,
}

impl BudgetTier {
    /// All tiers, cheapest first.
    pub const ALL: [BudgetTier; 3] = [BudgetTier::Budget, BudgetTier::MidRange, BudgetTier::Luxury];

    /// Returns the display label ("Budget", "Mid-Range", "Luxury").
    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "Budget",
            BudgetTier::MidRange => "Mid-Range",
            BudgetTier::Luxury => "Luxury",
        }
    }

    /// Pick a tier from a total trip budget.
    ///
    /// Budgets below `mid_range_from` are `Budget`, below `luxury_from`
    /// are `MidRange`, anything else is `Luxury`.
    pub fn from_total_budget(budget: f64, mid_range_from: f64, luxury_from: f64) -> Self {
        if budget < mid_range_from {
            BudgetTier::Budget
        } else if budget < luxury_from {
            BudgetTier::MidRange
        } else {
            BudgetTier::Luxury
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BudgetTier {
    type Err = DomainError;

    /// Accepts the display labels case-insensitively, with or without the
    /// hyphen in "Mid-Range".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "budget" => Ok(BudgetTier::Budget),
            "midrange" => Ok(BudgetTier::MidRange),
            "luxury" => Ok(BudgetTier::Luxury),
            _ => Err(DomainError::UnknownLabel {
                kind: "budget tier",
                label: s.to_string(),
            }),
        }
    }
}
