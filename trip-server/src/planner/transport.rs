//! Transport pricing between and within cities.

use chrono::Duration;

use super::config::PlannerConfig;
use super::overnight::Night;
use crate::catalog::Catalog;
use crate::domain::{CityId, TransportMode, TransportOption, as_hours};

/// Ground modes in order of preference.
const GROUND_PRIORITY: [TransportMode; 4] = [
    TransportMode::PrivateCar,
    TransportMode::RentalCar,
    TransportMode::InterCityCoach,
    TransportMode::PublicTransport,
];

/// A priced way of making one trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportQuote {
    pub mode: TransportMode,
    pub cost: f64,
    pub duration: Duration,
    /// Traveller-facing description, e.g. "Flight (Air Côte d'Ivoire)".
    pub label: String,
}

/// Picks and prices transport using the catalog's options.
pub struct TransportResolver<'a> {
    catalog: &'a Catalog,
    config: &'a PlannerConfig,
}

impl<'a> TransportResolver<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Quote a trip between two cities.
    ///
    /// A scheduled flight wins when flying is permitted. Otherwise the first
    /// permitted ground mode available in `from` is used, in the order
    /// private car, rental car, coach, public transport. Rental cars need a
    /// total budget above the rental threshold. With no usable mode the trip
    /// is priced as public transport.
    pub fn resolve(
        &self,
        from: &CityId,
        to: &CityId,
        modes: &[TransportMode],
        total_budget: f64,
    ) -> TransportQuote {
        if modes.contains(&TransportMode::Flight) {
            if let Some(flight) = self.catalog.flight_between(from, to) {
                return TransportQuote {
                    mode: TransportMode::Flight,
                    cost: flight.price,
                    duration: flight.duration,
                    label: format!("Flight ({})", flight.carrier),
                };
            }
        }

        let travel = self.catalog.travel_time(from, to);
        let distance = self.distance_km(from, to);
        for mode in GROUND_PRIORITY {
            if !modes.contains(&mode) {
                continue;
            }
            if mode == TransportMode::RentalCar && total_budget <= self.config.rental_threshold {
                continue;
            }
            if let Some(option) = self.catalog.inter_city_option(mode, from) {
                return TransportQuote {
                    mode,
                    cost: option.cost_model.cost_for(travel, distance),
                    duration: travel,
                    label: mode.label().to_string(),
                };
            }
        }

        self.public_transport(from, travel, distance)
    }

    fn distance_km(&self, from: &CityId, to: &CityId) -> f64 {
        match (self.catalog.city(from), self.catalog.city(to)) {
            (Some(a), Some(b)) => a.distance_km(b),
            _ => 0.0,
        }
    }

    fn public_transport(&self, from: &CityId, travel: Duration, distance: f64) -> TransportQuote {
        let mode = TransportMode::PublicTransport;
        let cost = match self.catalog.inter_city_option(mode, from) {
            Some(option) => option.cost_model.cost_for(travel, distance),
            None => self.config.default_public_rate * as_hours(travel),
        };
        TransportQuote {
            mode,
            cost,
            duration: travel,
            label: mode.label().to_string(),
        }
    }

    /// Quote a hop of `distance_km` between two stops in the same city.
    ///
    /// Uses the private car when it is permitted and available, otherwise
    /// the cheapest option the city has.
    pub fn resolve_local(
        &self,
        city: &CityId,
        modes: &[TransportMode],
        distance_km: f64,
    ) -> TransportQuote {
        let hop = self.config.hop();
        let cost = |o: &TransportOption| o.cost_model.cost_for(hop, distance_km);

        let private = modes
            .contains(&TransportMode::PrivateCar)
            .then(|| {
                self.catalog
                    .intra_city_options(city)
                    .find(|o| o.mode == TransportMode::PrivateCar)
            })
            .flatten();

        let option = private.or_else(|| {
            self.catalog
                .intra_city_options(city)
                .min_by(|a, b| cost(*a).total_cmp(&cost(*b)))
        });

        match option {
            Some(option) => TransportQuote {
                mode: option.mode,
                cost: cost(option),
                duration: hop,
                label: option.mode.label().to_string(),
            },
            None => TransportQuote {
                mode: TransportMode::Taxi,
                cost: self.config.default_hop_cost,
                duration: hop,
                label: TransportMode::Taxi.label().to_string(),
            },
        }
    }

    /// Estimate the inter-city transport cost of a whole trip.
    ///
    /// Counts each morning transfer, each evening return to the base and the
    /// two airport transfers.
    pub fn estimate_trip(
        &self,
        route: &[CityId],
        nights: &[Night],
        modes: &[TransportMode],
        total_budget: f64,
    ) -> f64 {
        let base = self.catalog.base_city();
        let mut total = 2.0 * self.config.airport_transfer_fee;

        for night in nights {
            if !night.stays {
                total += self.resolve(&night.city, base, modes, total_budget).cost;
            }
            if let Some(next) = route.get(night.day as usize) {
                if *next != night.sleeps_in {
                    total += self.resolve(&night.sleeps_in, next, modes, total_budget).cost;
                }
            }
        }

        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ivory_coast;

    fn id(s: &str) -> CityId {
        CityId::parse(s).unwrap()
    }

    fn quote(from: &str, to: &str, modes: &[TransportMode], budget: f64) -> TransportQuote {
        let catalog = ivory_coast().unwrap();
        let config = PlannerConfig::default();
        TransportResolver::new(&catalog, &config).resolve(&id(from), &id(to), modes, budget)
    }

    #[test]
    fn flight_wins_when_permitted() {
        let q = quote(
            "abidjan",
            "korhogo",
            &[TransportMode::PrivateCar, TransportMode::Flight],
            5000.0,
        );
        assert_eq!(q.mode, TransportMode::Flight);
        assert_eq!(q.cost, 120.0);
        assert_eq!(q.duration, Duration::minutes(75));
        assert!(q.label.starts_with("Flight"));
    }

    #[test]
    fn flights_match_in_reverse() {
        let q = quote("korhogo", "abidjan", &[TransportMode::Flight], 5000.0);
        assert_eq!(q.mode, TransportMode::Flight);
    }

    #[test]
    fn private_car_beats_coach() {
        let q = quote(
            "abidjan",
            "yamoussoukro",
            &[TransportMode::InterCityCoach, TransportMode::PrivateCar],
            500.0,
        );
        assert_eq!(q.mode, TransportMode::PrivateCar);
        assert_eq!(q.cost, 75.0);
        assert_eq!(q.duration, Duration::hours(3));
    }

    #[test]
    fn rental_needs_large_budget() {
        let modes = [TransportMode::RentalCar, TransportMode::InterCityCoach];
        assert_eq!(quote("abidjan", "man", &modes, 1000.0).mode, TransportMode::InterCityCoach);
        let q = quote("abidjan", "man", &modes, 1500.0);
        assert_eq!(q.mode, TransportMode::RentalCar);
        assert_eq!(q.cost, 105.0);
    }

    #[test]
    fn coach_unavailable_in_origin_falls_through() {
        // No coach leaves Assinie.
        let q = quote("assinie", "abidjan", &[TransportMode::InterCityCoach], 500.0);
        assert_eq!(q.mode, TransportMode::PublicTransport);
        assert_eq!(q.cost, 7.5);
    }

    #[test]
    fn no_modes_default_to_public_transport() {
        let q = quote("abidjan", "grand-bassam", &[], 500.0);
        assert_eq!(q.mode, TransportMode::PublicTransport);
        assert_eq!(q.cost, 3.75);
    }

    #[test]
    fn unknown_pair_uses_default_time() {
        // Assinie to Korhogo is not listed.
        let q = quote("assinie", "korhogo", &[TransportMode::PublicTransport], 500.0);
        assert_eq!(q.duration, Duration::hours(2));
        assert_eq!(q.cost, 10.0);
    }

    #[test]
    fn local_hop_prefers_private_car() {
        let catalog = ivory_coast().unwrap();
        let config = PlannerConfig::default();
        let resolver = TransportResolver::new(&catalog, &config);

        let q = resolver.resolve_local(&id("abidjan"), &[TransportMode::PrivateCar], 2.0);
        assert_eq!(q.mode, TransportMode::PrivateCar);
        assert_eq!(q.cost, 10.0);
        assert_eq!(q.duration, Duration::minutes(30));

        let q = resolver.resolve_local(&id("abidjan"), &[TransportMode::PublicTransport], 2.0);
        assert_eq!(q.mode, TransportMode::BoatBus);
        assert_eq!(q.cost, 1.0);

        let q = resolver.resolve_local(&id("man"), &[], 2.0);
        assert_eq!(q.mode, TransportMode::Taxi);
        assert_eq!(q.cost, 5.0);
    }

    #[test]
    fn trip_estimate_counts_transfers_returns_and_airport() {
        let catalog = ivory_coast().unwrap();
        let config = PlannerConfig::default();
        let resolver = TransportResolver::new(&catalog, &config);
        let route: Vec<_> = ["abidjan", "grand-bassam", "abidjan"].iter().map(|s| id(s)).collect();
        let nights = vec![
            Night {
                day: 1,
                city: id("abidjan"),
                stays: true,
                sleeps_in: id("abidjan"),
            },
            Night {
                day: 2,
                city: id("grand-bassam"),
                stays: false,
                sleeps_in: id("abidjan"),
            },
        ];

        let modes = [TransportMode::PublicTransport];
        let estimate = resolver.estimate_trip(&route, &nights, &modes, 500.0);
        // 3.75 out, 3.75 back, 2 x 30 airport transfers.
        assert!((estimate - 67.5).abs() < 1e-9);
    }
}
