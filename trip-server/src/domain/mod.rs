//! Domain types for the trip planner.
//!
//! This module contains the core domain model: validated identifiers,
//! catalog entries and the plans built from them. Identifiers enforce their
//! invariants at construction time, and plans compute their totals when
//! built, so code that receives these types can trust them.

mod city;
mod error;
mod itinerary;
mod tier;
mod time;
mod transport;
mod trip;
mod venue;

pub use city::{City, CityCategory, CityId, GeoPoint, InvalidCityId};
pub use error::DomainError;
pub use itinerary::{CatalogRef, DayPlan, ItemKind, ItineraryItem};
pub use tier::BudgetTier;
pub use time::{DayTime, as_hours, hours};
pub use transport::{Availability, CostModel, Flight, TransportMode, TransportOption, TransportScope};
pub use trip::{BudgetStatus, TripPlan};
pub use venue::{Activity, ActivityKind, Hotel, Located, MealSlot, Restaurant, TimeOfDay};
