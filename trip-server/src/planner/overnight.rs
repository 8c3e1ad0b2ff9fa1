//! Stay-or-return decisions at the end of each day.

use chrono::Duration;

use super::config::PlannerConfig;
use crate::catalog::Catalog;
use crate::domain::{CityCategory, CityId};

/// Where the traveller sleeps after one day of the trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Night {
    /// Day the night follows (1-based).
    pub day: u32,
    /// City the day was spent in.
    pub city: CityId,
    /// True when the traveller stays in `city`, false when they return to
    /// the base.
    pub stays: bool,
    /// City the traveller wakes up in.
    pub sleeps_in: CityId,
}

/// Decides whether the traveller stays overnight or goes back to the base.
pub struct OvernightPolicy<'a> {
    catalog: &'a Catalog,
    config: &'a PlannerConfig,
}

impl<'a> OvernightPolicy<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Returns true to stay in `current` tonight, false to return to `base`.
    ///
    /// Rules are checked in order and the first match wins:
    /// 1. the base city always stays;
    /// 2. on the second-to-last day a city too far from the base returns;
    /// 3. a long transfer to the next city stays;
    /// 4. resort cities stay;
    /// 5. a detour through the base that takes too long stays;
    /// 6. anything else returns.
    pub fn should_stay_overnight(
        &self,
        current: &CityId,
        next: &CityId,
        travel_to_next: Duration,
        base: &CityId,
        is_second_last_day: bool,
    ) -> bool {
        if current == base {
            return true;
        }

        let to_base = self.catalog.travel_time(current, base);
        if is_second_last_day && to_base > self.config.safety_threshold() {
            return false;
        }

        if travel_to_next > self.config.long_transfer() {
            return true;
        }

        let is_resort = self
            .catalog
            .city(current)
            .is_some_and(|c| c.category == CityCategory::Resort);
        if is_resort {
            return true;
        }

        let detour = to_base + self.catalog.travel_time(base, next);
        detour > self.config.detour_limit()
    }

    /// Decide every night of the trip: one entry per day except the last.
    pub fn night_plan(&self, route: &[CityId]) -> Vec<Night> {
        let base = self.catalog.base_city();
        let nights = route.len().saturating_sub(1);

        (0..nights)
            .map(|i| {
                let current = &route[i];
                let next = &route[i + 1];
                let stays = self.should_stay_overnight(
                    current,
                    next,
                    self.catalog.travel_time(current, next),
                    base,
                    i + 2 == route.len(),
                );
                Night {
                    day: i as u32 + 1,
                    city: current.clone(),
                    stays,
                    sleeps_in: if stays { current.clone() } else { base.clone() },
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ivory_coast;
    use proptest::prelude::*;

    fn id(s: &str) -> CityId {
        CityId::parse(s).unwrap()
    }

    fn check(current: &str, next: &str, travel_hours: i64, second_last: bool) -> bool {
        let catalog = ivory_coast().unwrap();
        let config = PlannerConfig::default();
        let policy = OvernightPolicy::new(&catalog, &config);
        policy.should_stay_overnight(
            &id(current),
            &id(next),
            Duration::hours(travel_hours),
            &id("abidjan"),
            second_last,
        )
    }

    #[test]
    fn base_always_stays() {
        assert!(check("abidjan", "man", 7, true));
        assert!(check("abidjan", "abidjan", 0, false));
    }

    #[test]
    fn far_city_returns_before_departure() {
        // Man is 7h from the base; the second-to-last rule wins over the
        // long transfer rule.
        assert!(!check("man", "korhogo", 6, true));
    }

    #[test]
    fn long_transfer_stays() {
        assert!(check("man", "korhogo", 6, false));
    }

    #[test]
    fn resort_stays() {
        assert!(check("assinie", "abidjan", 1, false));
    }

    #[test]
    fn long_detour_stays() {
        // Grand-Bassam -> Abidjan (0.75h) + Abidjan -> Sassandra (4h) > 4h.
        assert!(check("grand-bassam", "sassandra", 3, false));
    }

    #[test]
    fn short_detour_returns() {
        // Grand-Bassam -> Abidjan (0.75h) + Abidjan -> Assinie (1.5h).
        assert!(!check("grand-bassam", "assinie", 1, false));
    }

    #[test]
    fn five_day_night_plan() {
        let catalog = ivory_coast().unwrap();
        let config = PlannerConfig::default();
        let policy = OvernightPolicy::new(&catalog, &config);
        let route: Vec<_> = ["abidjan", "grand-bassam", "assinie", "abidjan", "abidjan"]
            .iter()
            .map(|s| id(s))
            .collect();

        let nights = policy.night_plan(&route);
        assert_eq!(nights.len(), 4);
        assert!(nights[0].stays);
        assert!(!nights[1].stays);
        assert_eq!(nights[1].sleeps_in.as_str(), "abidjan");
        assert!(nights[2].stays);
        assert_eq!(nights[2].sleeps_in.as_str(), "assinie");
        assert_eq!(nights[3].day, 4);
    }

    #[test]
    fn single_day_has_no_nights() {
        let catalog = ivory_coast().unwrap();
        let config = PlannerConfig::default();
        let policy = OvernightPolicy::new(&catalog, &config);
        assert!(policy.night_plan(&[id("abidjan")]).is_empty());
    }

    fn any_city() -> impl Strategy<Value = CityId> {
        prop::sample::select(vec![
            "abidjan",
            "grand-bassam",
            "assinie",
            "yamoussoukro",
            "sassandra",
            "man",
            "korhogo",
            "bouake",
        ])
        .prop_map(id)
    }

    proptest! {
        #[test]
        fn base_stays_for_any_inputs(
            next in any_city(),
            travel in 0i64..720,
            second_last in any::<bool>(),
        ) {
            let catalog = ivory_coast().unwrap();
            let config = PlannerConfig::default();
            let policy = OvernightPolicy::new(&catalog, &config);
            let base = catalog.base_city().clone();
            prop_assert!(policy.should_stay_overnight(
                &base,
                &next,
                Duration::minutes(travel),
                &base,
                second_last,
            ));
        }

        #[test]
        fn long_transfers_stay_unless_departing(
            current in any_city(),
            next in any_city(),
            travel in 181i64..720,
        ) {
            let catalog = ivory_coast().unwrap();
            let config = PlannerConfig::default();
            let policy = OvernightPolicy::new(&catalog, &config);
            let base = catalog.base_city().clone();
            prop_assert!(policy.should_stay_overnight(
                &current,
                &next,
                Duration::minutes(travel),
                &base,
                false,
            ));
        }
    }
}
