//! Minimal plan used when the catalog cannot support normal planning.

use std::collections::{BTreeMap, HashSet};

use chrono::Duration;

use super::config::PlannerConfig;
use crate::catalog::Catalog;
use crate::domain::{
    BudgetTier, CatalogRef, DayPlan, ItemKind, ItineraryItem, MealSlot, TripPlan,
};

/// Build a plan that spends every day in the base city.
///
/// Each day holds at most one activity and one meal, both the cheapest the
/// base offers, plus the night at the base's cheapest hotel. Only catalog
/// entries filed under the base city are used, so this never fails.
pub fn fallback_plan(
    catalog: &Catalog,
    config: &PlannerConfig,
    duration: u32,
    budget: f64,
    tier: BudgetTier,
    seed: u64,
) -> TripPlan {
    let base = catalog.base_city().clone();
    let hotel = catalog
        .hotels_in(&base)
        .min_by(|a, b| a.cost.total_cmp(&b.cost))
        .cloned();

    let mut activities: Vec<_> = catalog
        .activities_in(&base)
        .filter(|a| a.duration <= config.max_daily())
        .collect();
    activities.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    let meal = catalog
        .restaurants_in(&base)
        .filter(|r| r.best_time == MealSlot::Lunch)
        .min_by(|a, b| a.cost.total_cmp(&b.cost));

    let mut used = HashSet::new();
    let days = (1..=duration)
        .map(|day| {
            let mut items = Vec::new();
            let mut cursor = config.day_start();

            if let Some(activity) = activities.iter().find(|a| !used.contains(&a.name)) {
                used.insert(activity.name.clone());
                let item = ItineraryItem::new(
                    cursor,
                    ItemKind::Activity,
                    activity.name.clone(),
                    activity.duration,
                    activity.cost,
                    base.clone(),
                )
                .with_details(CatalogRef::Activity((*activity).clone()));
                cursor = item.end();
                items.push(item);
            }

            let meal_time = config.meal();
            let spent = items
                .iter()
                .fold(Duration::zero(), |acc, i| acc + i.duration);
            if let Some(restaurant) = meal.filter(|_| spent + meal_time <= config.max_daily()) {
                items.push(
                    ItineraryItem::new(
                        cursor,
                        ItemKind::Meal,
                        format!("Lunch at {}", restaurant.name),
                        meal_time,
                        restaurant.cost,
                        base.clone(),
                    )
                    .with_details(CatalogRef::Restaurant(restaurant.clone())),
                );
            }

            if day < duration {
                if let Some(hotel) = &hotel {
                    items.push(
                        ItineraryItem::new(
                            cursor + meal_time,
                            ItemKind::Hotel,
                            format!("Overnight at {}", hotel.name),
                            Duration::zero(),
                            hotel.cost,
                            base.clone(),
                        )
                        .with_details(CatalogRef::Hotel(hotel.clone())),
                    );
                }
            }

            DayPlan::new(day, base.clone(), items)
        })
        .collect();

    let mut accommodations = BTreeMap::new();
    if let Some(hotel) = &hotel {
        accommodations.insert(base.clone(), hotel.clone());
    }

    TripPlan::new(
        vec![base; duration as usize],
        hotel,
        accommodations,
        days,
        budget,
        tier,
        seed,
        true,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ivory_coast;

    #[test]
    fn every_day_in_base_with_at_most_one_activity_and_meal() {
        let catalog = ivory_coast().unwrap();
        let config = PlannerConfig::default();
        let plan = fallback_plan(&catalog, &config, 4, 800.0, BudgetTier::MidRange, 9);

        assert!(plan.is_fallback);
        assert_eq!(plan.route.len(), 4);
        assert!(plan.route.iter().all(|c| c.as_str() == "abidjan"));
        assert_eq!(plan.base_hotel.as_ref().unwrap().name, "Hôtel Ibis Plateau");

        for day in plan.days() {
            let count = |k| day.items().iter().filter(|i| i.kind == k).count();
            assert!(count(ItemKind::Activity) <= 1);
            assert!(count(ItemKind::Meal) <= 1);
            assert!(day.total_duration() <= Duration::hours(10));
        }
        // Three nights at the cheapest hotel.
        assert_eq!(plan.lodging_cost(), 3.0 * 40.0);
    }

    #[test]
    fn activities_are_not_repeated() {
        let catalog = ivory_coast().unwrap();
        let config = PlannerConfig::default();
        let plan = fallback_plan(&catalog, &config, 20, 5000.0, BudgetTier::Luxury, 1);

        let mut names: Vec<_> = plan.days().iter().flat_map(|d| d.activity_names()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
