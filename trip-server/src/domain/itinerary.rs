//! Itinerary items and day plans.

use chrono::Duration;

use super::{Activity, CityId, DayTime, Hotel, Restaurant};

/// What an itinerary entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Activity,
    Meal,
    /// A short hop within a city, or an airport transfer.
    Transport,
    /// Travel between cities.
    Travel,
    Airport,
    Hotel,
    /// Evening trip back to the base city.
    Return,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Activity => "Activity",
            ItemKind::Meal => "Meal",
            ItemKind::Transport => "Transport",
            ItemKind::Travel => "Travel",
            ItemKind::Airport => "Airport",
            ItemKind::Hotel => "Hotel",
            ItemKind::Return => "Return",
        }
    }

    /// Items that keep the trip physically possible and are never trimmed.
    pub fn is_essential(&self) -> bool {
        matches!(
            self,
            ItemKind::Travel
                | ItemKind::Hotel
                | ItemKind::Airport
                | ItemKind::Transport
                | ItemKind::Return
        )
    }
}

/// The catalog entry an itinerary item was built from.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogRef {
    Activity(Activity),
    Restaurant(Restaurant),
    Hotel(Hotel),
}

impl CatalogRef {
    pub fn name(&self) -> &str {
        match self {
            CatalogRef::Activity(a) => &a.name,
            CatalogRef::Restaurant(r) => &r.name,
            CatalogRef::Hotel(h) => &h.name,
        }
    }
}

/// One entry in a day's schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryItem {
    pub start: DayTime,
    pub kind: ItemKind,
    pub description: String,
    pub details: Option<CatalogRef>,
    pub duration: Duration,
    pub cost: f64,
    pub city: CityId,
}

impl ItineraryItem {
    /// Create an item without a catalog reference.
    pub fn new(
        start: DayTime,
        kind: ItemKind,
        description: impl Into<String>,
        duration: Duration,
        cost: f64,
        city: CityId,
    ) -> Self {
        Self {
            start,
            kind,
            description: description.into(),
            details: None,
            duration,
            cost,
            city,
        }
    }

    /// Attach the catalog entry this item was built from.
    pub fn with_details(mut self, details: CatalogRef) -> Self {
        self.details = Some(details);
        self
    }

    /// Name of the scheduled activity, if this is an activity item.
    pub fn activity_name(&self) -> Option<&str> {
        match (&self.kind, &self.details) {
            (ItemKind::Activity, Some(CatalogRef::Activity(a))) => Some(&a.name),
            _ => None,
        }
    }

    /// Returns the time this item ends.
    pub fn end(&self) -> DayTime {
        self.start + self.duration
    }
}

/// One day of a trip.
///
/// Totals are computed at construction, so a `DayPlan` always agrees with
/// its items.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    /// Day index, starting at 1.
    pub day: u32,
    /// City the day is spent in.
    pub city: CityId,
    items: Vec<ItineraryItem>,
    total_cost: f64,
    total_duration: Duration,
}

impl DayPlan {
    pub fn new(day: u32, city: CityId, items: Vec<ItineraryItem>) -> Self {
        let total_cost = items.iter().map(|i| i.cost).sum();
        let total_duration = items
            .iter()
            .fold(Duration::zero(), |acc, i| acc + i.duration);
        Self {
            day,
            city,
            items,
            total_cost,
            total_duration,
        }
    }

    pub fn items(&self) -> &[ItineraryItem] {
        &self.items
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    /// Sum of the nightly Hotel items in this day.
    pub fn lodging_cost(&self) -> f64 {
        self.items
            .iter()
            .filter(|i| i.kind == ItemKind::Hotel)
            .map(|i| i.cost)
            .sum()
    }

    /// Names of the activities scheduled on this day.
    pub fn activity_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(ItineraryItem::activity_name)
    }
}
