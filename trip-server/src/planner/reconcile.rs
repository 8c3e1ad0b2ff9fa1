//! Post-hoc budget repair.

use tracing::info;

use crate::domain::{DayPlan, ItemKind, ItineraryItem, TripPlan};

/// Trim an over-budget plan.
///
/// Days are swept in order. Within a day, the most expensive activity
/// costing more than `floor` is removed, repeatedly, until the overage is
/// covered or no such activity is left. Meals and essential items are never
/// removed. A plan within budget is returned unchanged.
pub fn reconcile(plan: &TripPlan, floor: f64) -> TripPlan {
    let mut overage = plan.total_cost() - plan.budget;
    if overage <= 0.0 {
        return plan.clone();
    }

    let before = plan.total_cost();
    let mut removed = 0usize;
    let days = plan
        .days()
        .iter()
        .map(|day| {
            if overage <= 0.0 {
                return day.clone();
            }
            let mut items = day.items().to_vec();
            while overage > 0.0 {
                let Some(idx) = most_expensive_trimmable(&items, floor) else {
                    break;
                };
                overage -= items.remove(idx).cost;
                removed += 1;
            }
            DayPlan::new(day.day, day.city.clone(), items)
        })
        .collect();

    let trimmed = plan.with_days(days);
    info!(
        before,
        after = trimmed.total_cost(),
        budget = plan.budget,
        removed,
        "Trimmed over-budget plan"
    );
    trimmed
}

fn most_expensive_trimmable(items: &[ItineraryItem], floor: f64) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, i)| !i.kind.is_essential() && i.kind != ItemKind::Meal && i.cost > floor)
        .max_by(|(_, a), (_, b)| a.cost.total_cmp(&b.cost))
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use chrono::Duration;
    use proptest::prelude::*;

    use crate::domain::{BudgetTier, CityId, DayTime};

    fn abidjan() -> CityId {
        CityId::parse("abidjan").unwrap()
    }

    fn item(kind: ItemKind, cost: f64) -> ItineraryItem {
        ItineraryItem::new(
            DayTime::at_hour(9),
            kind,
            format!("{} {cost}", kind.label()),
            Duration::hours(1),
            cost,
            abidjan(),
        )
    }

    fn plan(days: Vec<Vec<ItineraryItem>>, budget: f64) -> TripPlan {
        let days = days
            .into_iter()
            .enumerate()
            .map(|(i, items)| DayPlan::new(i as u32 + 1, abidjan(), items))
            .collect();
        TripPlan::new(
            vec![abidjan()],
            None,
            BTreeMap::new(),
            days,
            budget,
            BudgetTier::MidRange,
            0,
            false,
        )
    }

    #[test]
    fn within_budget_is_untouched() {
        let p = plan(vec![vec![item(ItemKind::Activity, 100.0)]], 500.0);
        assert_eq!(reconcile(&p, 50.0), p);
    }

    #[test]
    fn removes_most_expensive_first() {
        let p = plan(
            vec![vec![
                item(ItemKind::Activity, 60.0),
                item(ItemKind::Activity, 120.0),
                item(ItemKind::Meal, 30.0),
            ]],
            150.0,
        );
        let trimmed = reconcile(&p, 50.0);
        assert_eq!(trimmed.total_cost(), 90.0);
        assert_eq!(trimmed.days()[0].items().len(), 2);
    }

    #[test]
    fn activities_at_or_below_floor_survive() {
        let p = plan(
            vec![vec![item(ItemKind::Activity, 50.0), item(ItemKind::Activity, 40.0)]],
            10.0,
        );
        let trimmed = reconcile(&p, 50.0);
        assert_eq!(trimmed.total_cost(), 90.0);
        assert!(trimmed.is_over_budget());
    }

    #[test]
    fn meals_and_essentials_are_never_trimmed() {
        let p = plan(
            vec![vec![
                item(ItemKind::Travel, 200.0),
                item(ItemKind::Hotel, 150.0),
                item(ItemKind::Meal, 80.0),
                item(ItemKind::Activity, 60.0),
            ]],
            100.0,
        );
        let trimmed = reconcile(&p, 50.0);
        let kinds: Vec<_> = trimmed.days()[0].items().iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![ItemKind::Travel, ItemKind::Hotel, ItemKind::Meal]);
        assert_eq!(trimmed.total_cost(), 430.0);
    }

    #[test]
    fn sweep_stops_once_covered() {
        let p = plan(
            vec![
                vec![item(ItemKind::Activity, 100.0)],
                vec![item(ItemKind::Activity, 100.0)],
            ],
            150.0,
        );
        let trimmed = reconcile(&p, 50.0);
        // The first day's activity covers the overage.
        assert_eq!(trimmed.days()[0].items().len(), 0);
        assert_eq!(trimmed.days()[1].items().len(), 1);
        assert!(!trimmed.is_over_budget());
    }

    fn any_kind() -> impl Strategy<Value = ItemKind> {
        prop::sample::select(vec![
            ItemKind::Activity,
            ItemKind::Meal,
            ItemKind::Transport,
            ItemKind::Travel,
            ItemKind::Airport,
            ItemKind::Hotel,
            ItemKind::Return,
        ])
    }

    fn any_day() -> impl Strategy<Value = Vec<ItineraryItem>> {
        prop::collection::vec((any_kind(), 0.0f64..300.0), 0..8)
            .prop_map(|xs| xs.into_iter().map(|(k, c)| item(k, c)).collect())
    }

    proptest! {
        #[test]
        fn never_removes_essentials_or_raises_cost(
            days in prop::collection::vec(any_day(), 1..6),
            budget in 0.0f64..1500.0,
        ) {
            let p = plan(days, budget);
            let trimmed = reconcile(&p, 50.0);

            prop_assert!(trimmed.total_cost() <= p.total_cost() + 1e-9);
            for (before, after) in p.days().iter().zip(trimmed.days()) {
                let kept = |d: &DayPlan| -> usize {
                    d.items().iter().filter(|i| i.kind != ItemKind::Activity).count()
                };
                prop_assert_eq!(kept(before), kept(after));
                prop_assert!(after
                    .items()
                    .iter()
                    .all(|i| i.kind != ItemKind::Activity || before.items().contains(i)));
            }
        }
    }
}
