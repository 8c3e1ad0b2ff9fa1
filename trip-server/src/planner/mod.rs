//! Trip planner.
//!
//! Turns a duration, a budget and a set of acceptable transport modes into
//! a day-by-day itinerary. The pipeline is:
//!
//! 1. pick a route of cities from the catalog's duration bands,
//! 2. decide, night by night, whether to stay or return to the base,
//! 3. choose hotels and downgrade them if lodging eats the budget,
//! 4. fill each day with a time-cursor scheduler,
//! 5. trim expensive activities if the result is still over budget.
//!
//! If the catalog cannot support planning, a minimal base-city plan is
//! returned instead of an error.

mod config;
mod context;
mod fallback;
mod lodging;
mod overnight;
mod reconcile;
mod router;
mod scheduler;
mod transport;
mod trip;

pub use config::PlannerConfig;
pub use context::TripContext;
pub use fallback::fallback_plan;
pub use lodging::{Accommodation, AccommodationPlanner};
pub use overnight::{Night, OvernightPolicy};
pub use reconcile::reconcile;
pub use router::plan_route;
pub use scheduler::{DayRequest, DayScheduler};
pub use transport::{TransportQuote, TransportResolver};
pub use trip::{PlanError, PlanRequest, Planner};
