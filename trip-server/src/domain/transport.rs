//! Transport modes, priced options and scheduled flights.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;

use super::time::as_hours;
use super::{BudgetTier, CityId, DomainError};

/// A way of getting around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Flight,
    PrivateCar,
    RentalCar,
    InterCityCoach,
    PublicTransport,
    Taxi,
    RideShare,
    SharedTaxi,
    BoatBus,
}

impl TransportMode {
    /// Returns the traveller-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Flight => "Flight",
            TransportMode::PrivateCar => "Private Car with Driver",
            TransportMode::RentalCar => "Rental Car",
            TransportMode::InterCityCoach => "Inter-city Coach",
            TransportMode::PublicTransport => "Public Transport",
            TransportMode::Taxi => "Taxi",
            TransportMode::RideShare => "VTC",
            TransportMode::SharedTaxi => "Woro-Woro",
            TransportMode::BoatBus => "Bateau-Bus",
        }
    }

    /// Parse a list of labels, skipping the ones that are not recognised.
    ///
    /// Order and duplicates are preserved as given; callers treat the list
    /// as a set of permissions.
    pub fn parse_all<S: AsRef<str>>(labels: &[S]) -> (Vec<TransportMode>, Vec<String>) {
        let mut modes = Vec::with_capacity(labels.len());
        let mut unknown = Vec::new();
        for label in labels {
            match label.as_ref().parse::<TransportMode>() {
                Ok(mode) => modes.push(mode),
                Err(_) => unknown.push(label.as_ref().to_string()),
            }
        }
        (modes, unknown)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransportMode {
    type Err = DomainError;

    /// Accepts the labels case-insensitively, ignoring punctuation and any
    /// parenthesised note, e.g. "Inter-city Coach (UTB, etc.)".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let head = s.split('(').next().unwrap_or(s);
        let key: String = head
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        let mode = match key.as_str() {
            "flight" | "domesticflight" | "plane" => TransportMode::Flight,
            "privatecarwithdriver" | "privatecar" | "chauffeur" => TransportMode::PrivateCar,
            "rentalcar" | "carrental" => TransportMode::RentalCar,
            "intercitycoach" | "coach" | "bus" => TransportMode::InterCityCoach,
            "publictransport" | "public" => TransportMode::PublicTransport,
            "taxi" | "taximetered" => TransportMode::Taxi,
            "vtc" | "ridesharing" | "rideshare" => TransportMode::RideShare,
            "woroworo" | "sharedtaxi" => TransportMode::SharedTaxi,
            "sotrabateaubus" | "bateaubus" | "boatbus" => TransportMode::BoatBus,
            _ => {
                return Err(DomainError::UnknownLabel {
                    kind: "transport mode",
                    label: s.to_string(),
                });
            }
        };
        Ok(mode)
    }
}

/// How an option is priced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostModel {
    /// Fixed price per trip.
    Flat(f64),
    /// Rate per kilometre, straight-line.
    PerKm(f64),
    /// Rate per hour of travel.
    PerHour(f64),
    /// Rate per started day of use.
    PerDay(f64),
}

impl CostModel {
    /// Price a trip of the given travel time and distance.
    pub fn cost_for(&self, travel: Duration, distance_km: f64) -> f64 {
        match *self {
            CostModel::Flat(price) => price,
            CostModel::PerKm(rate) => rate * distance_km,
            CostModel::PerHour(rate) => rate * as_hours(travel),
            CostModel::PerDay(rate) => {
                let days = (as_hours(travel) / 24.0).ceil().max(1.0);
                rate * days
            }
        }
    }

    /// Returns the underlying rate or price.
    pub fn rate(&self) -> f64 {
        match *self {
            CostModel::Flat(r) | CostModel::PerKm(r) | CostModel::PerHour(r) | CostModel::PerDay(r) => r,
        }
    }
}

/// Whether an option serves trips within a city or between cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportScope {
    IntraCity,
    InterCity,
}

/// Where a transport option can be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Everywhere,
    Cities(Vec<CityId>),
}

impl Availability {
    pub fn covers(&self, city: &CityId) -> bool {
        match self {
            Availability::Everywhere => true,
            Availability::Cities(cities) => cities.contains(city),
        }
    }
}

/// A priced way of travelling.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportOption {
    pub mode: TransportMode,
    pub cost_model: CostModel,
    pub tier: BudgetTier,
    pub scope: TransportScope,
    pub availability: Availability,
}

/// A scheduled flight between two cities. Usable in either direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub from: CityId,
    pub to: CityId,
    pub price: f64,
    pub carrier: String,
    pub duration: Duration,
}

impl Flight {
    /// Returns true if this flight connects `a` and `b`, in either direction.
    pub fn connects(&self, a: &CityId, b: &CityId) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(s: &str) -> CityId {
        CityId::parse(s).unwrap()
    }

    #[test]
    fn parse_mode_labels() {
        assert_eq!(
            "Private Car with Driver".parse::<TransportMode>().unwrap(),
            TransportMode::PrivateCar
        );
        assert_eq!(
            "Inter-city Coach (UTB, etc.)".parse::<TransportMode>().unwrap(),
            TransportMode::InterCityCoach
        );
        assert_eq!(
            "VTC (Ride-sharing e.g. Yango)".parse::<TransportMode>().unwrap(),
            TransportMode::RideShare
        );
        assert_eq!(
            "Sotra Bateau-Bus (Abidjan Lagoon)".parse::<TransportMode>().unwrap(),
            TransportMode::BoatBus
        );
        assert_eq!(
            "public transport".parse::<TransportMode>().unwrap(),
            TransportMode::PublicTransport
        );
        assert!("Teleporter".parse::<TransportMode>().is_err());
    }

    #[test]
    fn label_roundtrip() {
        let all = [
            TransportMode::Flight,
            TransportMode::PrivateCar,
            TransportMode::RentalCar,
            TransportMode::InterCityCoach,
            TransportMode::PublicTransport,
            TransportMode::Taxi,
            TransportMode::RideShare,
            TransportMode::SharedTaxi,
            TransportMode::BoatBus,
        ];
        for mode in all {
            assert_eq!(mode.label().parse::<TransportMode>().unwrap(), mode);
        }
    }

    #[test]
    fn parse_all_splits_unknown() {
        let (modes, unknown) = TransportMode::parse_all(&["Taxi", "Hovercraft", "Flight"]);
        assert_eq!(modes, vec![TransportMode::Taxi, TransportMode::Flight]);
        assert_eq!(unknown, vec!["Hovercraft".to_string()]);
    }

    #[test]
    fn cost_models() {
        assert_eq!(CostModel::Flat(10.0).cost_for(Duration::hours(5), 300.0), 10.0);
        assert_eq!(CostModel::PerKm(0.5).cost_for(Duration::hours(1), 40.0), 20.0);
        assert_eq!(CostModel::PerHour(8.0).cost_for(Duration::minutes(90), 0.0), 12.0);
        assert_eq!(CostModel::PerDay(40.0).cost_for(Duration::hours(2), 0.0), 40.0);
        assert_eq!(CostModel::PerDay(40.0).cost_for(Duration::hours(30), 0.0), 80.0);
    }

    #[test]
    fn availability() {
        assert!(Availability::Everywhere.covers(&city("man")));
        let only = Availability::Cities(vec![city("abidjan")]);
        assert!(only.covers(&city("abidjan")));
        assert!(!only.covers(&city("man")));
    }

    #[test]
    fn flights_connect_both_ways() {
        let flight = Flight {
            from: city("abidjan"),
            to: city("korhogo"),
            price: 120.0,
            carrier: "Air Côte d'Ivoire".into(),
            duration: Duration::hours(1),
        };
        assert!(flight.connects(&city("abidjan"), &city("korhogo")));
        assert!(flight.connects(&city("korhogo"), &city("abidjan")));
        assert!(!flight.connects(&city("abidjan"), &city("man")));
    }
}
