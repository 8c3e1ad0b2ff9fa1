//! Catalog entries: things to do, places to eat, places to sleep.

use chrono::Duration;

use super::{BudgetTier, CityCategory, CityId, GeoPoint};

/// What kind of experience an activity offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Beach,
    Mountain,
    Culture,
    Nightlife,
    Exploration,
}

impl ActivityKind {
    /// The kind of activity a city of the given category is best known for.
    pub fn preferred_for(category: CityCategory) -> Option<ActivityKind> {
        match category {
            CityCategory::Coastal | CityCategory::Resort => Some(ActivityKind::Beach),
            CityCategory::Mountain => Some(ActivityKind::Mountain),
            CityCategory::Capital | CityCategory::Cultural => Some(ActivityKind::Culture),
            CityCategory::Other => None,
        }
    }
}

/// Part of the day an activity is best done in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

/// Meal a restaurant is best visited for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

/// A bookable activity.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub city: CityId,
    pub kind: ActivityKind,
    pub tier: BudgetTier,
    pub cost: f64,
    pub location: GeoPoint,
    pub best_time: TimeOfDay,
    pub duration: Duration,
}

/// A restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub city: CityId,
    pub tier: BudgetTier,
    pub cost: f64,
    pub location: GeoPoint,
    pub best_time: MealSlot,
}

/// A hotel. `cost` is the nightly rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub name: String,
    pub city: CityId,
    pub tier: BudgetTier,
    pub cost: f64,
    pub location: GeoPoint,
}

/// Anything with a position, used for proximity-first selection.
pub trait Located {
    fn location(&self) -> GeoPoint;
}

impl Located for Activity {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

impl Located for Restaurant {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

impl Located for Hotel {
    fn location(&self) -> GeoPoint {
        self.location
    }
}
