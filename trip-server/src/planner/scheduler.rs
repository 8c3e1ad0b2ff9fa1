//! Day scheduling.
//!
//! Each day is filled by a time-cursor state machine that starts in the
//! morning and walks through fixed slots: arrival (first day), transfer,
//! morning activity, lunch, afternoon activity, evening, and the night's
//! lodging. The last day replaces the slots with the departure block.
//!
//! Item durations for a day never exceed the configured daily cap. Mandatory
//! legs that are still to come (the evening return to base, the departure
//! block) are reserved up front so that optional slots cannot crowd them out.

use chrono::Duration;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::config::PlannerConfig;
use super::context::TripContext;
use super::lodging::Accommodation;
use super::overnight::Night;
use super::transport::{TransportQuote, TransportResolver};
use crate::catalog::{Catalog, CatalogError};
use crate::domain::{
    Activity, ActivityKind, BudgetTier, CatalogRef, City, CityId, DayPlan, DayTime, GeoPoint,
    ItemKind, ItineraryItem, Located, MealSlot, Restaurant, TimeOfDay, TransportMode,
};

const NOON: DayTime = DayTime::at_hour(12);
const LUNCH_CLOSES: DayTime = DayTime::at_hour(14);
const AFTERNOON_ENDS: DayTime = DayTime::at_hour(17);
const DINNER_FROM: DayTime = DayTime::at_hour(18);
const NIGHTLIFE_FROM: DayTime = DayTime::at_hour(21);
const EVENING_ENDS: DayTime = DayTime::at_hour(22);
const CHECKOUT_FROM: DayTime = DayTime::at_hour(11);

/// Fixed blocks around the flights in and out.
const AIRPORT_MINS: i64 = 120;
const HOTEL_DESK_MINS: i64 = 60;
const TRANSFER_MINS: i64 = 60;

/// Tolerance for comparing money amounts.
const EPSILON: f64 = 1e-9;

/// Everything the scheduler needs to know about one day.
#[derive(Debug, Clone, Copy)]
pub struct DayRequest<'r> {
    /// Day index, starting at 1.
    pub day: u32,
    /// City the day is planned in.
    pub city: &'r CityId,
    /// City the traveller woke up in.
    pub woke_in: &'r CityId,
    /// Tonight's decision. `None` on the last day.
    pub night: Option<&'r Night>,
    pub is_last: bool,
    pub tier: BudgetTier,
    /// Money for today's optional stops and hops. Lodging and the
    /// mandatory legs are paid outside it.
    pub allotment: f64,
    pub modes: &'r [TransportMode],
    pub total_budget: f64,
    pub accommodation: &'r Accommodation,
}

/// An optional stop the scheduler is trying to fit into the day.
struct Stop {
    kind: ItemKind,
    description: String,
    details: CatalogRef,
    city: CityId,
    location: GeoPoint,
    duration: Duration,
    cost: f64,
    not_before: DayTime,
}

/// Running state of the day being built.
struct DayState {
    items: Vec<ItineraryItem>,
    cursor: DayTime,
    used: Duration,
    /// Time held back for mandatory legs later in the day.
    reserved: Duration,
    max: Duration,
    allotment: f64,
    spent: f64,
    last_location: Option<GeoPoint>,
}

impl DayState {
    fn new(config: &PlannerConfig, allotment: f64) -> Self {
        Self {
            items: Vec::new(),
            cursor: config.day_start(),
            used: Duration::zero(),
            reserved: Duration::zero(),
            max: config.max_daily(),
            allotment,
            spent: 0.0,
            last_location: None,
        }
    }

    fn time_left(&self) -> Duration {
        self.max - self.used - self.reserved
    }

    fn fits(&self, duration: Duration) -> bool {
        duration <= self.time_left()
    }

    /// Shorten a mandatory leg so the day stays within its cap.
    fn clamp(&self, duration: Duration) -> Duration {
        duration.min(self.time_left()).max(Duration::zero())
    }

    fn affordable(&self, cost: f64, ctx: &TripContext) -> bool {
        cost <= self.allotment - self.spent + EPSILON && cost <= ctx.remaining() + EPSILON
    }

    fn needs_hop(&self, location: GeoPoint) -> bool {
        self.last_location.is_some_and(|last| last != location)
    }

    /// Append an optional stop, paid from the day's allotment.
    fn push(&mut self, item: ItineraryItem, ctx: &mut TripContext) {
        self.spent += item.cost;
        self.push_fixed(item, ctx);
    }

    /// Append a mandatory leg. Its cost was set aside before the allotment
    /// was worked out, so only the trip total is charged.
    fn push_fixed(&mut self, item: ItineraryItem, ctx: &mut TripContext) {
        ctx.record_spend(item.cost);
        self.push_lodging(item);
    }

    /// Append an item that is paid from the lodging budget.
    fn push_lodging(&mut self, item: ItineraryItem) {
        self.cursor = item.end();
        self.used += item.duration;
        self.items.push(item);
    }

    fn finish(self, day: u32, city: CityId) -> DayPlan {
        DayPlan::new(day, city, self.items)
    }
}

/// Builds one `DayPlan` at a time.
pub struct DayScheduler<'a> {
    catalog: &'a Catalog,
    config: &'a PlannerConfig,
    transport: TransportResolver<'a>,
}

impl<'a> DayScheduler<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a PlannerConfig) -> Self {
        Self {
            catalog,
            config,
            transport: TransportResolver::new(catalog, config),
        }
    }

    /// Schedule one day.
    ///
    /// Thin days are not an error: slots without an eligible, affordable
    /// candidate are left empty. Fails only when a city is missing from the
    /// catalog.
    pub fn schedule(
        &self,
        req: &DayRequest<'_>,
        ctx: &mut TripContext,
    ) -> Result<DayPlan, CatalogError> {
        let base = self.catalog.base_city();
        let city = self.catalog.require_city(req.city)?;
        let mut day = DayState::new(self.config, req.allotment);
        day.last_location = req
            .accommodation
            .hotel_for(req.woke_in)
            .map(|h| h.location);

        if req.day == 1 {
            self.arrival(&mut day, req, ctx)?;
        }

        let plan = if req.is_last {
            self.departure(&mut day, req, ctx)?;
            day.finish(req.day, base.clone())
        } else {
            let return_leg = req
                .night
                .filter(|n| !n.stays)
                .map(|_| self.transport.resolve(req.city, base, req.modes, req.total_budget));
            day.reserved = return_leg
                .as_ref()
                .map_or(Duration::zero(), |q| q.duration);

            if self.transfer(&mut day, req, city, ctx) {
                self.fill_slots(&mut day, req, city, ctx);
            }
            self.end_of_day(&mut day, req, return_leg, ctx);
            day.finish(req.day, req.city.clone())
        };

        debug!(
            day = plan.day,
            city = %plan.city,
            items = plan.items().len(),
            cost = plan.total_cost(),
            minutes = plan.total_duration().num_minutes(),
            "Scheduled day"
        );
        Ok(plan)
    }

    /// Landing, transfer to the base hotel and check-in.
    fn arrival(
        &self,
        day: &mut DayState,
        req: &DayRequest<'_>,
        ctx: &mut TripContext,
    ) -> Result<(), CatalogError> {
        let base = self.catalog.require_city(self.catalog.base_city())?;
        let hotel = req.accommodation.base_hotel();
        let hotel_name = hotel.map_or("the hotel", |h| h.name.as_str());

        day.push_fixed(
            ItineraryItem::new(
                day.cursor,
                ItemKind::Airport,
                format!("Arrival at {} airport", base.name),
                Duration::minutes(AIRPORT_MINS),
                0.0,
                base.id.clone(),
            ),
            ctx,
        );
        day.push_fixed(
            ItineraryItem::new(
                day.cursor,
                ItemKind::Transport,
                format!("Airport transfer to {hotel_name}"),
                Duration::minutes(TRANSFER_MINS),
                self.config.airport_transfer_fee,
                base.id.clone(),
            ),
            ctx,
        );
        let mut check_in = ItineraryItem::new(
            day.cursor,
            ItemKind::Hotel,
            format!("Check-in at {hotel_name}"),
            Duration::minutes(HOTEL_DESK_MINS),
            0.0,
            base.id.clone(),
        );
        if let Some(hotel) = hotel {
            check_in = check_in.with_details(CatalogRef::Hotel(hotel.clone()));
        }
        day.push_fixed(check_in, ctx);

        day.last_location = Some(hotel.map_or(base.location, |h| h.location));
        Ok(())
    }

    /// Travel from where the traveller woke up to today's city.
    ///
    /// Returns false when the transfer fills the rest of the day. The leg is
    /// then clamped to the time left and the optional slots are skipped, but
    /// the day still ends with the evening return (if any) and the night's
    /// hotel. Those are clamped too, so the daily cap holds.
    fn transfer(
        &self,
        day: &mut DayState,
        req: &DayRequest<'_>,
        city: &City,
        ctx: &mut TripContext,
    ) -> bool {
        if req.woke_in == req.city {
            return true;
        }

        let quote = self
            .transport
            .resolve(req.woke_in, req.city, req.modes, req.total_budget);
        let overflow = !day.fits(quote.duration);
        let duration = day.clamp(quote.duration);

        day.push_fixed(
            ItineraryItem::new(
                day.cursor,
                ItemKind::Travel,
                format!("{} to {}", quote.label, city.name),
                duration,
                quote.cost,
                req.city.clone(),
            ),
            ctx,
        );
        day.last_location = Some(city.location);

        if overflow {
            debug!(
                day = req.day,
                from = %req.woke_in,
                to = %req.city,
                minutes = quote.duration.num_minutes(),
                "Transfer fills the day"
            );
        }
        !overflow
    }

    /// Morning, lunch, afternoon and evening.
    fn fill_slots(
        &self,
        day: &mut DayState,
        req: &DayRequest<'_>,
        city: &City,
        ctx: &mut TripContext,
    ) {
        let preferred = ActivityKind::preferred_for(city.category);

        if day.cursor < NOON {
            let pick = self.pick_activity(
                day,
                ctx,
                req,
                &city.id,
                TimeOfDay::Morning,
                self.config.morning_radius_km,
                preferred,
                None,
            );
            if let Some(activity) = pick {
                let stop = activity_stop(activity, day.cursor);
                self.visit(day, req, ctx, stop);
            }
        }

        if day.cursor <= LUNCH_CLOSES {
            if let Some(restaurant) = self.pick_restaurant(day, ctx, req, &city.id, MealSlot::Lunch) {
                self.visit(day, req, ctx, self.meal_stop(restaurant, NOON));
            }
        }

        if day.cursor < AFTERNOON_ENDS {
            let pick = self.pick_activity(
                day,
                ctx,
                req,
                &city.id,
                TimeOfDay::Afternoon,
                self.config.afternoon_radius_km,
                preferred,
                None,
            );
            if let Some(activity) = pick {
                let stop = activity_stop(activity, day.cursor);
                self.visit(day, req, ctx, stop);
            }
        }

        if day.cursor < EVENING_ENDS {
            if city.nightlife {
                if let Some(restaurant) =
                    self.pick_restaurant(day, ctx, req, &city.id, MealSlot::Dinner)
                {
                    self.visit(day, req, ctx, self.meal_stop(restaurant, DINNER_FROM));
                }
                let pick = self.pick_activity(
                    day,
                    ctx,
                    req,
                    &city.id,
                    TimeOfDay::Evening,
                    self.config.morning_radius_km,
                    Some(ActivityKind::Nightlife),
                    None,
                )
                .filter(|a| a.kind == ActivityKind::Nightlife);
                if let Some(activity) = pick {
                    self.visit(day, req, ctx, activity_stop(activity, NIGHTLIFE_FROM));
                }
            } else {
                let pick = self.pick_activity(
                    day,
                    ctx,
                    req,
                    &city.id,
                    TimeOfDay::Evening,
                    self.config.morning_radius_km,
                    preferred,
                    None,
                );
                if let Some(activity) = pick {
                    self.visit(day, req, ctx, activity_stop(activity, DINNER_FROM));
                }
            }
        }
    }

    /// Return to the base if tonight calls for it, then the night's hotel.
    fn end_of_day(
        &self,
        day: &mut DayState,
        req: &DayRequest<'_>,
        return_leg: Option<TransportQuote>,
        ctx: &mut TripContext,
    ) {
        day.reserved = Duration::zero();
        let Some(night) = req.night else {
            return;
        };

        if let Some(quote) = return_leg {
            let base_name = self
                .catalog
                .city(self.catalog.base_city())
                .map_or(self.catalog.base_city().as_str(), |c| c.name.as_str());
            day.push_fixed(
                ItineraryItem::new(
                    day.cursor,
                    ItemKind::Return,
                    format!("{} back to {}", quote.label, base_name),
                    day.clamp(quote.duration),
                    quote.cost,
                    req.city.clone(),
                ),
                ctx,
            );
        }

        if let Some(hotel) = req.accommodation.hotel_for(&night.sleeps_in) {
            day.push_lodging(
                ItineraryItem::new(
                    day.cursor,
                    ItemKind::Hotel,
                    format!("Overnight at {}", hotel.name),
                    Duration::zero(),
                    hotel.cost,
                    night.sleeps_in.clone(),
                )
                .with_details(CatalogRef::Hotel(hotel.clone())),
            );
        }
    }

    /// Last day: an optional short morning activity, travel back to the
    /// base, then checkout and the flight out.
    fn departure(
        &self,
        day: &mut DayState,
        req: &DayRequest<'_>,
        ctx: &mut TripContext,
    ) -> Result<(), CatalogError> {
        let base = self.catalog.require_city(self.catalog.base_city())?;
        let woke = self.catalog.require_city(req.woke_in)?;
        let departure_block = Duration::minutes(HOTEL_DESK_MINS + TRANSFER_MINS + AIRPORT_MINS);

        let travel = (woke.id != base.id)
            .then(|| self.transport.resolve(&woke.id, &base.id, req.modes, req.total_budget));
        day.reserved = departure_block + travel.as_ref().map_or(Duration::zero(), |q| q.duration);

        if day.cursor < CHECKOUT_FROM {
            let pick = self.pick_activity(
                day,
                ctx,
                req,
                &woke.id,
                TimeOfDay::Morning,
                self.config.morning_radius_km,
                ActivityKind::preferred_for(woke.category),
                Some(self.config.last_morning_max()),
            );
            if let Some(activity) = pick {
                let stop = activity_stop(activity, day.cursor);
                self.visit(day, req, ctx, stop);
            }
        }

        day.reserved = departure_block;
        if let Some(quote) = travel {
            day.push_fixed(
                ItineraryItem::new(
                    day.cursor,
                    ItemKind::Travel,
                    format!("{} to {}", quote.label, base.name),
                    day.clamp(quote.duration),
                    quote.cost,
                    base.id.clone(),
                ),
                ctx,
            );
        }
        day.reserved = Duration::zero();

        let hotel = req.accommodation.base_hotel();
        let hotel_name = hotel.map_or("the hotel", |h| h.name.as_str());
        let mut checkout = ItineraryItem::new(
            day.cursor.max(CHECKOUT_FROM),
            ItemKind::Hotel,
            format!("Check-out from {hotel_name}"),
            Duration::minutes(HOTEL_DESK_MINS),
            0.0,
            base.id.clone(),
        );
        if let Some(hotel) = hotel {
            checkout = checkout.with_details(CatalogRef::Hotel(hotel.clone()));
        }
        day.push_fixed(checkout, ctx);
        day.push_fixed(
            ItineraryItem::new(
                day.cursor,
                ItemKind::Transport,
                "Airport transfer",
                Duration::minutes(TRANSFER_MINS),
                self.config.airport_transfer_fee,
                base.id.clone(),
            ),
            ctx,
        );
        day.push_fixed(
            ItineraryItem::new(
                day.cursor,
                ItemKind::Airport,
                format!("Departure from {} airport", base.name),
                Duration::minutes(AIRPORT_MINS),
                0.0,
                base.id.clone(),
            ),
            ctx,
        );
        Ok(())
    }

    /// Choose an activity for a slot.
    ///
    /// Candidates match the city, window and tier, have not been visited and
    /// fit the time left. Candidates of the preferred kind win when there
    /// are any. Among the rest, proximity to the last stop decides.
    #[allow(clippy::too_many_arguments)]
    fn pick_activity(
        &self,
        day: &DayState,
        ctx: &mut TripContext,
        req: &DayRequest<'_>,
        city: &CityId,
        window: TimeOfDay,
        radius_km: f64,
        preferred: Option<ActivityKind>,
        max_duration: Option<Duration>,
    ) -> Option<&'a Activity> {
        let candidates: Vec<&'a Activity> = self
            .catalog
            .activities_in(city)
            .filter(|a| a.best_time == window && a.tier == req.tier)
            .filter(|a| !ctx.is_visited(&a.name))
            .filter(|a| max_duration.is_none_or(|max| a.duration <= max))
            .filter(|a| day.fits(a.duration + self.hop_time(day, a.location)))
            .collect();

        let biased: Vec<&'a Activity> = match preferred {
            Some(kind) if candidates.iter().any(|a| a.kind == kind) => {
                candidates.into_iter().filter(|a| a.kind == kind).collect()
            }
            _ => candidates,
        };

        pick_nearby(&biased, day.last_location, radius_km, ctx.rng())
    }

    /// Choose the restaurant nearest the last stop.
    fn pick_restaurant(
        &self,
        day: &DayState,
        ctx: &mut TripContext,
        req: &DayRequest<'_>,
        city: &CityId,
        slot: MealSlot,
    ) -> Option<&'a Restaurant> {
        let meal = self.config.meal();
        let candidates: Vec<&'a Restaurant> = self
            .catalog
            .restaurants_in(city)
            .filter(|r| r.best_time == slot && r.tier == req.tier)
            .filter(|r| day.fits(meal + self.hop_time(day, r.location)))
            .collect();

        match day.last_location {
            Some(from) => nearest(&candidates, from),
            None => random(&candidates, ctx.rng()),
        }
    }

    fn meal_stop(&self, restaurant: &Restaurant, not_before: DayTime) -> Stop {
        Stop {
            kind: ItemKind::Meal,
            description: format!("{} at {}", restaurant.best_time.label(), restaurant.name),
            details: CatalogRef::Restaurant(restaurant.clone()),
            city: restaurant.city.clone(),
            location: restaurant.location,
            duration: self.config.meal(),
            cost: restaurant.cost,
            not_before,
        }
    }

    fn hop_time(&self, day: &DayState, location: GeoPoint) -> Duration {
        if day.needs_hop(location) {
            self.config.hop()
        } else {
            Duration::zero()
        }
    }

    /// Admit a stop if the day has the time and money for it, including
    /// the hop from the last stop.
    fn visit(
        &self,
        day: &mut DayState,
        req: &DayRequest<'_>,
        ctx: &mut TripContext,
        stop: Stop,
    ) -> bool {
        let hop = day.last_location.filter(|_| day.needs_hop(stop.location)).map(|from| {
            self.transport
                .resolve_local(&stop.city, req.modes, from.distance_km(&stop.location))
        });
        let hop_time = hop.as_ref().map_or(Duration::zero(), |q| q.duration);
        let hop_cost = hop.as_ref().map_or(0.0, |q| q.cost);

        if !day.fits(stop.duration + hop_time) {
            return false;
        }
        if !day.affordable(stop.cost + hop_cost, ctx) {
            debug!(
                day = req.day,
                stop = %stop.description,
                cost = stop.cost + hop_cost,
                "Stop over budget, slot left empty"
            );
            return false;
        }

        if let Some(hop) = hop {
            day.push(
                ItineraryItem::new(
                    day.cursor,
                    ItemKind::Transport,
                    format!("{} to {}", hop.label, stop.details.name()),
                    hop.duration,
                    hop.cost,
                    stop.city.clone(),
                ),
                ctx,
            );
        }

        if let CatalogRef::Activity(activity) = &stop.details {
            ctx.mark_visited(&activity.name);
        }
        let start = day.cursor.max(stop.not_before);
        day.push(
            ItineraryItem::new(
                start,
                stop.kind,
                stop.description,
                stop.duration,
                stop.cost,
                stop.city,
            )
            .with_details(stop.details),
            ctx,
        );
        day.last_location = Some(stop.location);
        true
    }
}

fn activity_stop(activity: &Activity, not_before: DayTime) -> Stop {
    Stop {
        kind: ItemKind::Activity,
        description: activity.name.clone(),
        details: CatalogRef::Activity(activity.clone()),
        city: activity.city.clone(),
        location: activity.location,
        duration: activity.duration,
        cost: activity.cost,
        not_before,
    }
}

/// Random among candidates within `radius_km` of `from`, else the nearest.
/// Without a reference point, any candidate.
fn pick_nearby<'c, T: Located>(
    candidates: &[&'c T],
    from: Option<GeoPoint>,
    radius_km: f64,
    rng: &mut ChaCha8Rng,
) -> Option<&'c T> {
    let Some(from) = from else {
        return random(candidates, rng);
    };

    let nearby: Vec<&'c T> = candidates
        .iter()
        .copied()
        .filter(|c| c.location().distance_km(&from) <= radius_km)
        .collect();
    if nearby.is_empty() {
        nearest(candidates, from)
    } else {
        random(&nearby, rng)
    }
}

fn nearest<'c, T: Located>(candidates: &[&'c T], from: GeoPoint) -> Option<&'c T> {
    candidates.iter().copied().min_by(|a, b| {
        a.location()
            .distance_km(&from)
            .total_cmp(&b.location().distance_km(&from))
    })
}

fn random<'c, T>(candidates: &[&'c T], rng: &mut ChaCha8Rng) -> Option<&'c T> {
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.gen_range(0..candidates.len())])
    }
}
