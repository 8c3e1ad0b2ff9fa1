//! Whole-trip orchestration.
//!
//! Ties the pieces together: route, overnight decisions, lodging, one
//! scheduled day at a time, and the final budget repair. A catalog that
//! cannot support planning yields the minimal fallback plan rather than an
//! error.

use tracing::{info, warn};

use super::config::PlannerConfig;
use super::context::TripContext;
use super::fallback::fallback_plan;
use super::lodging::AccommodationPlanner;
use super::overnight::OvernightPolicy;
use super::reconcile::reconcile;
use super::router::plan_route;
use super::scheduler::{DayRequest, DayScheduler};
use super::transport::TransportResolver;
use crate::catalog::{Catalog, CatalogError};
use crate::domain::{BudgetTier, TransportMode, TripPlan};

/// Error from trip planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// The request cannot be planned as given.
    #[error("invalid plan request: {0}")]
    InvalidRequest(String),
}

/// Request for a trip plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Trip length in days, at least 1.
    pub duration_days: u32,

    /// Total money available for the whole trip.
    pub total_budget: f64,

    /// Transport modes the traveller accepts.
    pub modes: Vec<TransportMode>,

    /// Seed for tie-breaking. A random one is drawn when absent.
    pub seed: Option<u64>,

    /// Explicit budget tier. Derived from the budget when absent.
    pub tier: Option<BudgetTier>,
}

impl PlanRequest {
    pub fn new(duration_days: u32, total_budget: f64, modes: Vec<TransportMode>) -> Self {
        Self {
            duration_days,
            total_budget,
            modes,
            seed: None,
            tier: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tier(mut self, tier: BudgetTier) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Validate the request against the longest trip accepted.
    pub fn validate(&self, max_days: u32) -> Result<(), PlanError> {
        if self.duration_days == 0 {
            return Err(PlanError::InvalidRequest(
                "duration must be at least one day".to_string(),
            ));
        }
        if self.duration_days > max_days {
            return Err(PlanError::InvalidRequest(format!(
                "duration must be at most {max_days} days, got {}",
                self.duration_days
            )));
        }
        if !self.total_budget.is_finite() || self.total_budget < 0.0 {
            return Err(PlanError::InvalidRequest(format!(
                "budget must be a non-negative amount, got {}",
                self.total_budget
            )));
        }
        Ok(())
    }
}

/// Trip planner over a catalog.
pub struct Planner<'a> {
    catalog: &'a Catalog,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Plan a trip.
    ///
    /// Only a malformed request is an error. If the catalog cannot support
    /// the plan, the minimal fallback plan is returned instead.
    pub fn plan(&self, request: &PlanRequest) -> Result<TripPlan, PlanError> {
        request.validate(self.config.max_trip_days)?;

        let seed = request.seed.unwrap_or_else(rand::random);
        let tier = request
            .tier
            .unwrap_or_else(|| self.config.tier_for_budget(request.total_budget));

        match self.try_plan(request, tier, seed) {
            Ok(plan) => Ok(plan),
            Err(e) => {
                warn!(error = %e, seed, "Catalog cannot support planning, using fallback");
                Ok(fallback_plan(
                    self.catalog,
                    self.config,
                    request.duration_days,
                    request.total_budget,
                    tier,
                    seed,
                ))
            }
        }
    }

    fn try_plan(
        &self,
        request: &PlanRequest,
        tier: BudgetTier,
        seed: u64,
    ) -> Result<TripPlan, CatalogError> {
        self.catalog.validate()?;

        let base = self.catalog.base_city();
        let duration = request.duration_days;
        let budget = request.total_budget;
        let modes = request.modes.as_slice();

        let route = plan_route(self.catalog, duration, self.config.safety_threshold());
        for city in &route {
            self.catalog.require_city(city)?;
        }

        let nights = OvernightPolicy::new(self.catalog, self.config).night_plan(&route);
        let transport = TransportResolver::new(self.catalog, self.config)
            .estimate_trip(&route, &nights, modes, budget);
        let adjusted = (budget - transport).max(0.0);

        let lodging = AccommodationPlanner::new(self.catalog, self.config);
        let accommodation = lodging.repair(lodging.plan(&nights, tier), adjusted);

        // Lodging and transport are set aside; the rest is shared by the days.
        let after_lodging = (budget - accommodation.total_cost()).max(0.0);
        let allotment = (after_lodging - transport).max(0.0) / f64::from(duration);
        let mut ctx = TripContext::new(seed, after_lodging);

        let scheduler = DayScheduler::new(self.catalog, self.config);
        let mut days = Vec::with_capacity(route.len());
        for (i, city) in route.iter().enumerate() {
            let day = i as u32 + 1;
            let woke_in = i
                .checked_sub(1)
                .and_then(|prev| nights.get(prev))
                .map_or(base, |n| &n.sleeps_in);
            let req = DayRequest {
                day,
                city,
                woke_in,
                night: nights.get(i),
                is_last: day == duration,
                tier,
                allotment,
                modes,
                total_budget: budget,
                accommodation: &accommodation,
            };
            days.push(scheduler.schedule(&req, &mut ctx)?);
        }

        let plan = TripPlan::new(
            route,
            accommodation.base_hotel().cloned(),
            accommodation.hotels().clone(),
            days,
            budget,
            tier,
            seed,
            false,
        );
        let plan = reconcile(&plan, self.config.trim_floor);

        info!(
            days = duration,
            tier = %tier,
            seed,
            total_cost = plan.total_cost(),
            lodging = plan.lodging_cost(),
            status = plan.budget_status().label(),
            "Planned trip"
        );
        Ok(plan)
    }
}
