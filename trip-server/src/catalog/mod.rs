//! Static reference catalogs.
//!
//! A `Catalog` bundles everything the planner reads: cities, activities,
//! restaurants, hotels, transport options, flights, the travel-time matrix
//! and the route templates. It is immutable once built and is shared
//! read-only between requests.

mod ivory_coast;
mod route_table;
mod travel_times;

use std::collections::{HashMap, HashSet};

use chrono::Duration;

pub use ivory_coast::ivory_coast;
pub use route_table::{DurationBand, RouteTable, RouteTableBuilder};
pub use travel_times::{DEFAULT_TRAVEL_TIME_MINS, TravelTimes, TravelTimesBuilder};

use crate::domain::{
    Activity, City, CityCategory, CityId, DomainError, Flight, GeoPoint, Hotel, InvalidCityId,
    Restaurant, TransportMode, TransportOption, TransportScope,
};

/// Errors from building or querying a catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// The base city is not among the catalog's cities
    #[error("base city {0} is not in the catalog")]
    MissingBaseCity(CityId),

    /// Two cities share an identifier
    #[error("duplicate city {0}")]
    DuplicateCity(CityId),

    /// A lookup referenced a city the catalog does not know
    #[error("unknown city {0}")]
    UnknownCity(CityId),

    /// An entry failed validation
    #[error(transparent)]
    InvalidEntry(#[from] DomainError),

    /// A city identifier in the source data is malformed
    #[error(transparent)]
    InvalidId(#[from] InvalidCityId),
}

/// A traveller interest used to suggest cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interest {
    Beach,
    Culture,
    Nature,
    Nightlife,
    History,
}

impl Interest {
    /// Parse an interest keyword, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beach" => Some(Interest::Beach),
            "culture" => Some(Interest::Culture),
            "nature" => Some(Interest::Nature),
            "nightlife" => Some(Interest::Nightlife),
            "history" => Some(Interest::History),
            _ => None,
        }
    }

    fn matches(&self, city: &City) -> bool {
        use CityCategory::*;
        match self {
            Interest::Beach => matches!(city.category, Coastal | Resort),
            Interest::Culture => matches!(city.category, Cultural | Capital),
            Interest::Nature => matches!(city.category, Mountain),
            Interest::Nightlife => city.nightlife,
            Interest::History => matches!(city.category, Coastal | Cultural | Capital),
        }
    }
}

/// Immutable reference data for planning.
#[derive(Debug, Clone)]
pub struct Catalog {
    base_city: CityId,
    cities: Vec<City>,
    city_index: HashMap<CityId, usize>,
    activities: Vec<Activity>,
    restaurants: Vec<Restaurant>,
    hotels: Vec<Hotel>,
    transport: Vec<TransportOption>,
    flights: Vec<Flight>,
    travel_times: TravelTimes,
    route_table: RouteTable,
}

impl Catalog {
    /// The arrival/departure hub.
    pub fn base_city(&self) -> &CityId {
        &self.base_city
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city(&self, id: &CityId) -> Option<&City> {
        self.city_index.get(id).map(|&i| &self.cities[i])
    }

    /// Like [`Catalog::city`], but a miss is an error.
    pub fn require_city(&self, id: &CityId) -> Result<&City, CatalogError> {
        self.city(id)
            .ok_or_else(|| CatalogError::UnknownCity(id.clone()))
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn activities_in<'a>(&'a self, city: &CityId) -> impl Iterator<Item = &'a Activity> + use<'a> {
        let city = city.clone();
        self.activities.iter().filter(move |a| a.city == city)
    }

    pub fn restaurants_in<'a>(&'a self, city: &CityId) -> impl Iterator<Item = &'a Restaurant> + use<'a> {
        let city = city.clone();
        self.restaurants.iter().filter(move |r| r.city == city)
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn hotels_in<'a>(&'a self, city: &CityId) -> impl Iterator<Item = &'a Hotel> + use<'a> {
        let city = city.clone();
        self.hotels.iter().filter(move |h| h.city == city)
    }

    pub fn transport_options(&self) -> &[TransportOption] {
        &self.transport
    }

    /// The inter-city option for `mode` usable from `city`, if any.
    pub fn inter_city_option(&self, mode: TransportMode, city: &CityId) -> Option<&TransportOption> {
        self.transport.iter().find(|o| {
            o.mode == mode && o.scope == TransportScope::InterCity && o.availability.covers(city)
        })
    }

    /// Intra-city options usable in `city`.
    pub fn intra_city_options<'a>(
        &'a self,
        city: &CityId,
    ) -> impl Iterator<Item = &'a TransportOption> + use<'a> {
        let city = city.clone();
        self.transport
            .iter()
            .filter(move |o| o.scope == TransportScope::IntraCity && o.availability.covers(&city))
    }

    /// A scheduled flight between the two cities, in either direction.
    pub fn flight_between(&self, a: &CityId, b: &CityId) -> Option<&Flight> {
        self.flights.iter().find(|f| f.connects(a, b))
    }

    pub fn travel_times(&self) -> &TravelTimes {
        &self.travel_times
    }

    /// Travel time between two cities (default for unknown pairs).
    pub fn travel_time(&self, from: &CityId, to: &CityId) -> Duration {
        self.travel_times.get(from, to)
    }

    pub fn route_table(&self) -> &RouteTable {
        &self.route_table
    }

    /// Cities matching any of the given interests, in catalog order.
    pub fn cities_for_interests(&self, interests: &[Interest]) -> Vec<&City> {
        self.cities
            .iter()
            .filter(|c| interests.iter().any(|i| i.matches(c)))
            .collect()
    }

    /// Check every entry for consistency.
    ///
    /// Costs must be finite and non-negative, activities must take time,
    /// coordinates must be valid and every reference must name a known city.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self.city_index.contains_key(&self.base_city) {
            return Err(CatalogError::MissingBaseCity(self.base_city.clone()));
        }

        let mut seen = HashSet::new();
        for city in &self.cities {
            if !seen.insert(&city.id) {
                return Err(CatalogError::DuplicateCity(city.id.clone()));
            }
            check_location(&city.name, city.location)?;
        }

        for a in &self.activities {
            self.check_entry(&a.name, &a.city, a.cost)?;
            check_location(&a.name, a.location)?;
            if a.duration <= Duration::zero() {
                return Err(DomainError::InvalidDuration(a.name.clone()).into());
            }
        }
        for r in &self.restaurants {
            self.check_entry(&r.name, &r.city, r.cost)?;
            check_location(&r.name, r.location)?;
        }
        for h in &self.hotels {
            self.check_entry(&h.name, &h.city, h.cost)?;
            check_location(&h.name, h.location)?;
        }
        for f in &self.flights {
            let name = format!("flight {} {}-{}", f.carrier, f.from, f.to);
            self.check_entry(&name, &f.from, f.price)?;
            self.check_city(&name, &f.to)?;
        }
        for o in &self.transport {
            check_cost(o.mode.label(), o.cost_model.rate())?;
        }
        for (from, to, d) in self.travel_times.iter() {
            let name = format!("travel time {from}-{to}");
            self.check_city(&name, from)?;
            self.check_city(&name, to)?;
            if d < Duration::zero() {
                return Err(DomainError::InvalidDuration(name).into());
            }
        }
        for city in self.route_table.cities() {
            self.check_city("route table", city)?;
        }

        Ok(())
    }

    fn check_entry(&self, name: &str, city: &CityId, cost: f64) -> Result<(), CatalogError> {
        self.check_city(name, city)?;
        check_cost(name, cost)
    }

    fn check_city(&self, name: &str, city: &CityId) -> Result<(), CatalogError> {
        if self.city_index.contains_key(city) {
            Ok(())
        } else {
            Err(DomainError::UnknownCity {
                item: name.to_string(),
                city: city.clone(),
            }
            .into())
        }
    }
}

fn check_cost(name: &str, cost: f64) -> Result<(), CatalogError> {
    if cost.is_finite() && cost >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidCost {
            item: name.to_string(),
            cost,
        }
        .into())
    }
}

fn check_location(name: &str, location: GeoPoint) -> Result<(), CatalogError> {
    if location.is_valid() {
        Ok(())
    } else {
        Err(DomainError::InvalidLocation(name.to_string()).into())
    }
}

/// Builder for catalogs.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    base_city: CityId,
    cities: Vec<City>,
    activities: Vec<Activity>,
    restaurants: Vec<Restaurant>,
    hotels: Vec<Hotel>,
    transport: Vec<TransportOption>,
    flights: Vec<Flight>,
    travel_times: TravelTimes,
    route_table: RouteTable,
}

impl CatalogBuilder {
    pub fn new(base_city: CityId) -> Self {
        Self {
            base_city,
            cities: Vec::new(),
            activities: Vec::new(),
            restaurants: Vec::new(),
            hotels: Vec::new(),
            transport: Vec::new(),
            flights: Vec::new(),
            travel_times: TravelTimes::new(),
            route_table: RouteTable::default(),
        }
    }

    pub fn city(mut self, city: City) -> Self {
        self.cities.push(city);
        self
    }

    pub fn activity(mut self, activity: Activity) -> Self {
        self.activities.push(activity);
        self
    }

    pub fn restaurant(mut self, restaurant: Restaurant) -> Self {
        self.restaurants.push(restaurant);
        self
    }

    pub fn hotel(mut self, hotel: Hotel) -> Self {
        self.hotels.push(hotel);
        self
    }

    pub fn transport(mut self, option: TransportOption) -> Self {
        self.transport.push(option);
        self
    }

    pub fn flight(mut self, flight: Flight) -> Self {
        self.flights.push(flight);
        self
    }

    pub fn travel_times(mut self, travel_times: TravelTimes) -> Self {
        self.travel_times = travel_times;
        self
    }

    pub fn route_table(mut self, route_table: RouteTable) -> Self {
        self.route_table = route_table;
        self
    }

    /// Build and validate the catalog.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let catalog = self.build_unchecked();
        catalog.validate()?;
        Ok(catalog)
    }

    /// Build without validating.
    ///
    /// Planning against an inconsistent catalog falls back to the minimal
    /// plan when a lookup misses.
    pub fn build_unchecked(self) -> Catalog {
        // Later duplicates do not shadow earlier cities; `validate` reports them.
        let mut city_index = HashMap::with_capacity(self.cities.len());
        for (i, city) in self.cities.iter().enumerate() {
            city_index.entry(city.id.clone()).or_insert(i);
        }

        Catalog {
            base_city: self.base_city,
            cities: self.cities,
            city_index,
            activities: self.activities,
            restaurants: self.restaurants,
            hotels: self.hotels,
            transport: self.transport,
            flights: self.flights,
            travel_times: self.travel_times,
            route_table: self.route_table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BudgetTier, GeoPoint};

    fn id(s: &str) -> CityId {
        CityId::parse(s).unwrap()
    }

    fn city(s: &str, category: CityCategory) -> City {
        City {
            id: id(s),
            name: s.to_string(),
            location: GeoPoint::new(5.0, -4.0),
            category,
            has_airport: false,
            nightlife: false,
        }
    }

    fn hotel(name: &str, city: &str, cost: f64) -> Hotel {
        Hotel {
            name: name.into(),
            city: id(city),
            tier: BudgetTier::Budget,
            cost,
            location: GeoPoint::new(5.0, -4.0),
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = ivory_coast().unwrap();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.cities().len(), 8);
        assert_eq!(catalog.base_city().as_str(), "abidjan");
        assert!(catalog.city(&id("grand-bassam")).is_some());
    }

    #[test]
    fn missing_base_city_rejected() {
        let result = CatalogBuilder::new(id("abidjan"))
            .city(city("man", CityCategory::Mountain))
            .build();
        assert_eq!(result.unwrap_err(), CatalogError::MissingBaseCity(id("abidjan")));
    }

    #[test]
    fn duplicate_city_rejected() {
        let result = CatalogBuilder::new(id("abidjan"))
            .city(city("abidjan", CityCategory::Capital))
            .city(city("abidjan", CityCategory::Capital))
            .build();
        assert_eq!(result.unwrap_err(), CatalogError::DuplicateCity(id("abidjan")));
    }

    #[test]
    fn negative_cost_rejected() {
        let result = CatalogBuilder::new(id("abidjan"))
            .city(city("abidjan", CityCategory::Capital))
            .hotel(hotel("Broken", "abidjan", -5.0))
            .build();
        assert!(matches!(
            result.unwrap_err(),
            CatalogError::InvalidEntry(DomainError::InvalidCost { .. })
        ));
    }

    #[test]
    fn out_of_range_location_rejected() {
        let mut broken = hotel("Adrift", "abidjan", 40.0);
        broken.location = GeoPoint::new(5.0, 200.0);
        let result = CatalogBuilder::new(id("abidjan"))
            .city(city("abidjan", CityCategory::Capital))
            .hotel(broken)
            .build();
        assert_eq!(
            result.unwrap_err(),
            CatalogError::InvalidEntry(DomainError::InvalidLocation("Adrift".into()))
        );

        let mut lost = city("man", CityCategory::Mountain);
        lost.location = GeoPoint::new(f64::NAN, -7.5);
        let result = CatalogBuilder::new(id("abidjan"))
            .city(city("abidjan", CityCategory::Capital))
            .city(lost)
            .build();
        assert!(matches!(
            result.unwrap_err(),
            CatalogError::InvalidEntry(DomainError::InvalidLocation(_))
        ));
    }

    #[test]
    fn unknown_city_reference_rejected() {
        let result = CatalogBuilder::new(id("abidjan"))
            .city(city("abidjan", CityCategory::Capital))
            .hotel(hotel("Elsewhere", "atlantis", 50.0))
            .build();
        assert!(matches!(
            result.unwrap_err(),
            CatalogError::InvalidEntry(DomainError::UnknownCity { .. })
        ));
    }

    #[test]
    fn route_table_cities_must_exist() {
        let result = CatalogBuilder::new(id("abidjan"))
            .city(city("abidjan", CityCategory::Capital))
            .route_table(RouteTableBuilder::new().band(1, None, &["atlantis"], true).build())
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn require_city_reports_miss() {
        let catalog = ivory_coast().unwrap();
        assert_eq!(
            catalog.require_city(&id("atlantis")).unwrap_err(),
            CatalogError::UnknownCity(id("atlantis"))
        );
    }

    #[test]
    fn interests_select_cities() {
        let catalog = ivory_coast().unwrap();
        let beach: Vec<_> = catalog
            .cities_for_interests(&[Interest::Beach])
            .iter()
            .map(|c| c.id.as_str().to_string())
            .collect();
        assert!(beach.contains(&"assinie".to_string()));
        assert!(beach.contains(&"grand-bassam".to_string()));
        assert!(!beach.contains(&"man".to_string()));

        let nightlife = catalog.cities_for_interests(&[Interest::Nightlife]);
        assert!(nightlife.iter().all(|c| c.nightlife));
        assert!(catalog.cities_for_interests(&[]).is_empty());
    }

    #[test]
    fn interest_parsing() {
        assert_eq!(Interest::parse("Beach"), Some(Interest::Beach));
        assert_eq!(Interest::parse(" nature "), Some(Interest::Nature));
        assert_eq!(Interest::parse("shopping"), None);
    }

    #[test]
    fn flights_found_in_either_direction() {
        let catalog = ivory_coast().unwrap();
        assert!(catalog.flight_between(&id("abidjan"), &id("korhogo")).is_some());
        assert!(catalog.flight_between(&id("korhogo"), &id("abidjan")).is_some());
        assert!(catalog.flight_between(&id("abidjan"), &id("grand-bassam")).is_none());
    }
}
