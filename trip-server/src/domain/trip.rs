//! Whole-trip plans.

use std::collections::BTreeMap;

use chrono::Duration;

use super::{BudgetTier, CityId, DayPlan, Hotel};

/// How a plan's cost compares with the requested budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// At most 80% of the budget.
    WithinBudget,
    /// Between 80% and 95% of the budget.
    NearLimit,
    /// Above 95% of the budget.
    OverBudget,
}

impl BudgetStatus {
    /// Classify a total against a budget.
    pub fn classify(total_cost: f64, budget: f64) -> Self {
        if budget <= 0.0 {
            return if total_cost <= 0.0 {
                BudgetStatus::WithinBudget
            } else {
                BudgetStatus::OverBudget
            };
        }

        let ratio = total_cost / budget;
        if ratio <= 0.80 {
            BudgetStatus::WithinBudget
        } else if ratio <= 0.95 {
            BudgetStatus::NearLimit
        } else {
            BudgetStatus::OverBudget
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetStatus::WithinBudget => "within_budget",
            BudgetStatus::NearLimit => "near_limit",
            BudgetStatus::OverBudget => "over_budget",
        }
    }
}

/// A complete trip plan.
///
/// Lodging is counted once, through the nightly Hotel items inside the day
/// plans, so `total_cost` is simply the sum of the days.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlan {
    pub route: Vec<CityId>,
    pub base_hotel: Option<Hotel>,
    pub accommodations: BTreeMap<CityId, Hotel>,
    pub budget: f64,
    pub tier: BudgetTier,
    /// Seed of the tie-break source, for reproducing this plan.
    pub seed: u64,
    /// True when the plan is the minimal fallback.
    pub is_fallback: bool,
    days: Vec<DayPlan>,
    total_cost: f64,
    total_duration: Duration,
}

impl TripPlan {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        route: Vec<CityId>,
        base_hotel: Option<Hotel>,
        accommodations: BTreeMap<CityId, Hotel>,
        days: Vec<DayPlan>,
        budget: f64,
        tier: BudgetTier,
        seed: u64,
        is_fallback: bool,
    ) -> Self {
        let (total_cost, total_duration) = totals(&days);
        Self {
            route,
            base_hotel,
            accommodations,
            budget,
            tier,
            seed,
            is_fallback,
            days,
            total_cost,
            total_duration,
        }
    }

    /// A copy of this plan with different day plans and recomputed totals.
    pub fn with_days(&self, days: Vec<DayPlan>) -> Self {
        let (total_cost, total_duration) = totals(&days);
        Self {
            route: self.route.clone(),
            base_hotel: self.base_hotel.clone(),
            accommodations: self.accommodations.clone(),
            budget: self.budget,
            tier: self.tier,
            seed: self.seed,
            is_fallback: self.is_fallback,
            days,
            total_cost,
            total_duration,
        }
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    /// Sum of all nightly Hotel items.
    pub fn lodging_cost(&self) -> f64 {
        self.days.iter().map(DayPlan::lodging_cost).sum()
    }

    pub fn budget_status(&self) -> BudgetStatus {
        BudgetStatus::classify(self.total_cost, self.budget)
    }

    /// Returns true if the plan costs more than the requested budget.
    pub fn is_over_budget(&self) -> bool {
        self.total_cost > self.budget
    }
}

fn totals(days: &[DayPlan]) -> (f64, Duration) {
    let cost = days.iter().map(DayPlan::total_cost).sum();
    let duration = days
        .iter()
        .fold(Duration::zero(), |acc, d| acc + d.total_duration());
    (cost, duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DayTime, ItemKind, ItineraryItem};

    fn abidjan() -> CityId {
        CityId::parse("abidjan").unwrap()
    }

    fn day(n: u32, cost: f64) -> DayPlan {
        DayPlan::new(
            n,
            abidjan(),
            vec![ItineraryItem::new(
                DayTime::at_hour(9),
                ItemKind::Activity,
                "Something",
                Duration::hours(2),
                cost,
                abidjan(),
            )],
        )
    }

    #[test]
    fn budget_status_bands() {
        assert_eq!(BudgetStatus::classify(800.0, 1000.0), BudgetStatus::WithinBudget);
        assert_eq!(BudgetStatus::classify(900.0, 1000.0), BudgetStatus::NearLimit);
        assert_eq!(BudgetStatus::classify(950.0, 1000.0), BudgetStatus::NearLimit);
        assert_eq!(BudgetStatus::classify(951.0, 1000.0), BudgetStatus::OverBudget);
        assert_eq!(BudgetStatus::classify(0.0, 0.0), BudgetStatus::WithinBudget);
        assert_eq!(BudgetStatus::classify(1.0, 0.0), BudgetStatus::OverBudget);
    }

    #[test]
    fn totals_sum_days() {
        let plan = TripPlan::new(
            vec![abidjan(), abidjan()],
            None,
            BTreeMap::new(),
            vec![day(1, 40.0), day(2, 60.0)],
            500.0,
            BudgetTier::Budget,
            7,
            false,
        );
        assert_eq!(plan.total_cost(), 100.0);
        assert_eq!(plan.total_duration(), Duration::hours(4));
        assert!(!plan.is_over_budget());
        assert_eq!(plan.budget_status(), BudgetStatus::WithinBudget);
    }

    #[test]
    fn with_days_recomputes() {
        let plan = TripPlan::new(
            vec![abidjan()],
            None,
            BTreeMap::new(),
            vec![day(1, 400.0)],
            100.0,
            BudgetTier::Budget,
            7,
            false,
        );
        assert!(plan.is_over_budget());

        let trimmed = plan.with_days(vec![day(1, 50.0)]);
        assert_eq!(trimmed.total_cost(), 50.0);
        assert_eq!(trimmed.seed, 7);
        // The original is untouched.
        assert_eq!(plan.total_cost(), 400.0);
    }
}
