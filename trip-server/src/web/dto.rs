//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{City, DayPlan, Hotel, ItineraryItem, TripPlan};

/// Request to plan a trip.
#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    /// Trip length in days
    pub duration_days: u32,

    /// Total budget for the whole trip
    pub total_budget: f64,

    /// Accepted transport mode labels (e.g., "Public Transport")
    #[serde(default)]
    pub transport_modes: Vec<String>,

    /// Seed for reproducing a plan
    pub seed: Option<u64>,

    /// Budget tier label, derived from the budget when absent
    pub tier: Option<String>,
}

/// Query for listing cities.
#[derive(Debug, Deserialize)]
pub struct CitiesQuery {
    /// Comma-separated interests (e.g., "beach,nightlife")
    pub interest: Option<String>,
}

/// A city in the catalog.
#[derive(Debug, Serialize)]
pub struct CityResult {
    pub id: String,
    pub name: String,
    pub category: String,
    pub has_airport: bool,
    pub nightlife: bool,
    pub latitude: f64,
    pub longitude: f64,
}

/// Response for city listing.
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<CityResult>,
}

/// A planned trip.
#[derive(Debug, Serialize)]
pub struct TripPlanResult {
    /// City of each day
    pub route: Vec<String>,

    /// Budget tier used for selection
    pub tier: String,

    /// Seed that reproduces this plan
    pub seed: u64,

    /// Whether this is the minimal fallback plan
    pub is_fallback: bool,

    pub budget: f64,
    pub total_cost: f64,
    pub lodging_cost: f64,
    pub total_duration_mins: i64,

    /// "within_budget", "near_limit" or "over_budget"
    pub budget_status: String,

    /// Hotel in the base city
    pub base_hotel: Option<HotelResult>,

    /// Hotel chosen for every city slept in
    pub accommodations: Vec<HotelResult>,

    pub days: Vec<DayPlanResult>,

    /// Transport mode labels that were not recognised
    pub ignored_transport_modes: Vec<String>,
}

/// A hotel choice.
#[derive(Debug, Serialize)]
pub struct HotelResult {
    pub city: String,
    pub name: String,
    pub tier: String,
    pub cost_per_night: f64,
}

/// One day of a trip.
#[derive(Debug, Serialize)]
pub struct DayPlanResult {
    pub day: u32,
    pub city: String,
    pub total_cost: f64,
    pub total_duration_mins: i64,
    pub items: Vec<ItemResult>,
}

/// One itinerary entry.
#[derive(Debug, Serialize)]
pub struct ItemResult {
    /// Start time, "HH:MM"
    pub start: String,

    /// End time, "HH:MM"
    pub end: String,

    pub kind: String,
    pub description: String,
    pub duration_mins: i64,
    pub cost: f64,
    pub city: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl CityResult {
    /// Create from a domain City.
    pub fn from_city(city: &City) -> Self {
        Self {
            id: city.id.to_string(),
            name: city.name.clone(),
            category: city.category.label().to_string(),
            has_airport: city.has_airport,
            nightlife: city.nightlife,
            latitude: city.location.latitude,
            longitude: city.location.longitude,
        }
    }
}

impl HotelResult {
    /// Create from a domain Hotel.
    pub fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            city: hotel.city.to_string(),
            name: hotel.name.clone(),
            tier: hotel.tier.label().to_string(),
            cost_per_night: hotel.cost,
        }
    }
}

impl TripPlanResult {
    /// Create from a domain TripPlan.
    pub fn from_plan(plan: &TripPlan, ignored_transport_modes: Vec<String>) -> Self {
        Self {
            route: plan.route.iter().map(ToString::to_string).collect(),
            tier: plan.tier.label().to_string(),
            seed: plan.seed,
            is_fallback: plan.is_fallback,
            budget: plan.budget,
            total_cost: plan.total_cost(),
            lodging_cost: plan.lodging_cost(),
            total_duration_mins: plan.total_duration().num_minutes(),
            budget_status: plan.budget_status().label().to_string(),
            base_hotel: plan.base_hotel.as_ref().map(HotelResult::from_hotel),
            accommodations: plan
                .accommodations
                .values()
                .map(HotelResult::from_hotel)
                .collect(),
            days: plan.days().iter().map(DayPlanResult::from_day).collect(),
            ignored_transport_modes,
        }
    }
}

impl DayPlanResult {
    /// Create from a domain DayPlan.
    pub fn from_day(day: &DayPlan) -> Self {
        Self {
            day: day.day,
            city: day.city.to_string(),
            total_cost: day.total_cost(),
            total_duration_mins: day.total_duration().num_minutes(),
            items: day.items().iter().map(ItemResult::from_item).collect(),
        }
    }
}

impl ItemResult {
    /// Create from a domain ItineraryItem.
    pub fn from_item(item: &ItineraryItem) -> Self {
        Self {
            start: item.start.to_string(),
            end: item.end().to_string(),
            kind: item.kind.label().to_string(),
            description: item.description.clone(),
            duration_mins: item.duration.num_minutes(),
            cost: item.cost,
            city: item.city.to_string(),
        }
    }
}
