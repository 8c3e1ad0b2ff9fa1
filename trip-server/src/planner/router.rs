//! City routing.
//!
//! A route lists the city for each day of the trip. It opens and closes in
//! the base city; the days in between come from the catalog's route table.

use chrono::Duration;

use crate::catalog::Catalog;
use crate::domain::CityId;

/// Build the day-by-day city sequence for a trip of `duration` days.
///
/// The result has exactly `duration` entries. The first and last are the
/// base city. For trips longer than two days, the second-to-last city is
/// replaced by the base if it is more than `safety_threshold` away from it.
pub fn plan_route(catalog: &Catalog, duration: u32, safety_threshold: Duration) -> Vec<CityId> {
    let base = catalog.base_city();
    let days = duration as usize;
    if days == 0 {
        return Vec::new();
    }

    let band = catalog.route_table().band_for(duration);
    let mut route = Vec::with_capacity(days);
    route.push(base.clone());
    for slot in 0..days.saturating_sub(2) {
        let city = band
            .and_then(|b| b.destination(slot))
            .unwrap_or(base)
            .clone();
        route.push(city);
    }
    if days > 1 {
        route.push(base.clone());
    }

    if days > 2 {
        let penultimate = days - 2;
        if catalog.travel_time(&route[penultimate], base) > safety_threshold {
            route[penultimate] = base.clone();
        }
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ivory_coast;
    use proptest::prelude::*;

    fn slugs(route: &[CityId]) -> Vec<&str> {
        route.iter().map(CityId::as_str).collect()
    }

    #[test]
    fn single_day_is_just_the_base() {
        let catalog = ivory_coast().unwrap();
        let route = plan_route(&catalog, 1, Duration::hours(2));
        assert_eq!(slugs(&route), vec!["abidjan"]);
    }

    #[test]
    fn short_trip_visits_one_satellite() {
        let catalog = ivory_coast().unwrap();
        let route = plan_route(&catalog, 3, Duration::hours(2));
        assert_eq!(slugs(&route), vec!["abidjan", "grand-bassam", "abidjan"]);
    }

    #[test]
    fn two_days_is_base_twice() {
        let catalog = ivory_coast().unwrap();
        let route = plan_route(&catalog, 2, Duration::hours(2));
        assert_eq!(slugs(&route), vec!["abidjan", "abidjan"]);
    }

    #[test]
    fn five_days_forces_return_before_departure() {
        let catalog = ivory_coast().unwrap();
        let route = plan_route(&catalog, 5, Duration::hours(2));
        // Yamoussoukro is 3h from Abidjan, so day 4 moves back to the base.
        assert_eq!(
            slugs(&route),
            vec!["abidjan", "grand-bassam", "assinie", "abidjan", "abidjan"]
        );
    }

    #[test]
    fn nearby_penultimate_city_is_kept() {
        let catalog = ivory_coast().unwrap();
        let route = plan_route(&catalog, 4, Duration::hours(2));
        // Assinie is 1.5h from Abidjan.
        assert_eq!(
            slugs(&route),
            vec!["abidjan", "grand-bassam", "assinie", "abidjan"]
        );
    }

    #[test]
    fn long_trips_cycle_the_template() {
        let catalog = ivory_coast().unwrap();
        let route = plan_route(&catalog, 12, Duration::hours(2));
        assert_eq!(route[1].as_str(), "grand-bassam");
        assert_eq!(route[7].as_str(), "bouake");
        assert_eq!(route[8].as_str(), "grand-bassam");
        assert_eq!(route[9].as_str(), "assinie");
    }

    #[test]
    fn zero_days_is_empty() {
        let catalog = ivory_coast().unwrap();
        assert!(plan_route(&catalog, 0, Duration::hours(2)).is_empty());
    }

    proptest! {
        #[test]
        fn route_shape_holds_for_all_durations(duration in 1u32..=60) {
            let catalog = ivory_coast().unwrap();
            let threshold = Duration::hours(2);
            let route = plan_route(&catalog, duration, threshold);

            prop_assert_eq!(route.len(), duration as usize);
            prop_assert_eq!(&route[0], catalog.base_city());
            prop_assert_eq!(&route[route.len() - 1], catalog.base_city());
            if duration > 2 {
                let penultimate = &route[route.len() - 2];
                prop_assert!(catalog.travel_time(penultimate, catalog.base_city()) <= threshold);
            }
        }
    }
}
